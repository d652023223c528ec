// Physics simulation
//
// Hand-rolled axis-separated AABB collision tuned for a fixed 60Hz step.
// The world owns every collider, box body and mechanism for the current
// level; players live outside and are passed in each tick.

pub mod activation;
pub mod box_body;
pub mod collider;
pub mod events;
pub mod mechanism;
pub mod platform;
pub mod player;
mod resolve;
pub mod world;

pub use activation::ActivationGraph;
pub use box_body::BoxBody;
pub use collider::{Aabb, Collider, ColliderKind, Element, HazardKind};
pub use events::{SimEvent, TickOutcome};
pub use mechanism::{Button, Door, Lever};
pub use platform::{DriveMode, MovingPlatform};
pub use player::Player;
pub use world::{PhysicsWorld, RideRef};
