// Pushable box body
//
// A box is either a free dynamic body (gravity, friction, collision) or
// carried, with its position slaved to an anchor above the carrier's head.
// While carried the velocity fields only record the anchor's per-tick delta,
// which becomes the launch velocity on release.

use super::collider::Collider;
use glam::Vec2;

/// Horizontal velocity decay per tick while free
pub(crate) const BOX_FRICTION: f32 = 0.85;
/// Below this speed the box snaps to rest
pub(crate) const BOX_STOP_EPSILON: f32 = 0.001;

#[derive(Debug)]
pub struct BoxBody {
    pub collider: Collider,
    pub velocity: Vec2,
    pub on_ground: bool,
    /// Index of the carrying player, if any. Non-owning; a stale index
    /// degrades to "not carried".
    pub carrier: Option<usize>,
    /// Previous anchor position, used to derive velocity while carried
    prev_position: Vec2,
}

impl BoxBody {
    pub fn new(collider: Collider) -> Self {
        let prev_position = collider.center();
        BoxBody {
            collider,
            velocity: Vec2::ZERO,
            on_ground: false,
            carrier: None,
            prev_position,
        }
    }

    pub fn position(&self) -> Vec2 {
        self.collider.center()
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.collider.recenter(position);
    }

    pub fn is_carried(&self) -> bool {
        self.carrier.is_some()
    }

    pub fn half_height(&self) -> f32 {
        self.collider.height * 0.5
    }

    /// Enter the carried state: snap to the anchor, zero velocity
    pub fn grab(&mut self, carrier: usize, anchor: Vec2) {
        self.carrier = Some(carrier);
        self.velocity = Vec2::ZERO;
        self.set_position(anchor);
        self.prev_position = anchor;
    }

    /// Track the carry anchor for one tick, recording the delta as velocity
    pub fn follow_anchor(&mut self, anchor: Vec2) {
        self.velocity = anchor - self.prev_position;
        self.set_position(anchor);
        self.prev_position = anchor;
    }

    /// Leave the carried state with the given launch velocity
    pub fn release(&mut self, launch_velocity: Vec2) {
        self.carrier = None;
        self.velocity = launch_velocity;
    }
}
