pub mod level;
pub mod levels;
pub mod session;
