// Engine modules: fixed-step timing, input sampling, physics simulation

pub mod game_loop;
pub mod input;
pub mod physics;
