// Simulation core for a two-character cooperative puzzle platformer.
//
// The crate is headless: it consumes level descriptions and per-tick input,
// advances a fixed-step physics world, and publishes positions, mechanism
// states and a discrete event stream for a presentation layer to consume.

pub mod core;
pub mod engine;
pub mod game;

pub use engine::physics::{PhysicsWorld, SimEvent, TickOutcome};
pub use game::level::Level;
pub use game::session::Session;
