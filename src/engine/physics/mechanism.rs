// Buttons, levers and doors
//
// Buttons and levers are signal sources for the activation graph; doors are
// signal consumers. Each owns exactly one collider. A door's solidity comes
// from its boolean `open` flag the instant a link activates; the animated
// offset below is presentational and lags behind on purpose.

use super::collider::{Aabb, Collider};
use glam::Vec2;

/// How far a button's trigger volume reaches above its physical volume
const BUTTON_TRIGGER_EXTEND: f32 = 0.2;
/// Visual depression while pressed
const BUTTON_DEPRESSION: f32 = 0.1;
const BUTTON_SMOOTHING: f32 = 0.2;

/// Vertical travel of an open door
const DOOR_OPEN_OFFSET: f32 = 3.5;
const DOOR_SMOOTHING: f32 = 0.1;

/// Lever tuning (Minecraft-style up/down flip)
const LEVER_START_ANGLE: f32 = std::f32::consts::FRAC_PI_3;
const LEVER_MIN_ANGLE: f32 = -std::f32::consts::FRAC_PI_3;
const LEVER_MAX_ANGLE: f32 = std::f32::consts::FRAC_PI_3;
const LEVER_INERTIA: f32 = 1.2;
const LEVER_DAMPING: f32 = 0.92;
const LEVER_GRAVITY_BIAS: f32 = 0.015;
/// Torque impulse applied per tick of body contact
const LEVER_KICK: f32 = 0.04;

/// Pressure plate. `pressed` is recomputed from contact every tick.
#[derive(Debug)]
pub struct Button {
    pub collider: Collider,
    pub pressed: bool,
    pub links: Vec<String>,
    /// Rest height for the visual depression
    rest_y: f32,
}

impl Button {
    pub fn new(collider: Collider, links: Vec<String>) -> Self {
        let rest_y = collider.center().y;
        Button {
            collider,
            pressed: false,
            links,
            rest_y,
        }
    }

    /// Contact-test volume, slightly taller than the physical plate
    pub fn trigger_volume(&self) -> Aabb {
        self.collider.aabb.extended_up(BUTTON_TRIGGER_EXTEND)
    }

    /// Record this tick's contact state. Returns true on a press edge.
    pub fn set_pressed(&mut self, pressed: bool) -> bool {
        let edge = pressed && !self.pressed;
        self.pressed = pressed;
        edge
    }

    /// Ease the plate toward its pressed/rest height (presentational only)
    pub fn animate(&mut self) {
        let target = self.rest_y - if self.pressed { BUTTON_DEPRESSION } else { 0.0 };
        let center = self.collider.center();
        let y = center.y + (target - center.y) * BUTTON_SMOOTHING;
        self.collider.recenter(Vec2::new(center.x, y));
    }
}

/// A lever modeled as a lightly damped pendulum biased toward whichever
/// limit is nearer. Contact kicks it past the unstable equilibrium at zero.
#[derive(Debug)]
pub struct Lever {
    pub collider: Collider,
    pub links: Vec<String>,
    pub angle: f32,
    pub angular_velocity: f32,
    pub active: bool,
    min_angle: f32,
    max_angle: f32,
    inertia: f32,
    damping: f32,
    gravity_bias: f32,
}

impl Lever {
    pub fn new(collider: Collider, links: Vec<String>) -> Self {
        Lever {
            collider,
            links,
            angle: LEVER_START_ANGLE,
            angular_velocity: 0.0,
            active: LEVER_START_ANGLE > 0.0,
            min_angle: LEVER_MIN_ANGLE,
            max_angle: LEVER_MAX_ANGLE,
            inertia: LEVER_INERTIA,
            damping: LEVER_DAMPING,
            gravity_bias: LEVER_GRAVITY_BIAS,
        }
    }

    /// Apply a contact torque impulse in the given horizontal direction
    pub fn kick(&mut self, direction: f32) {
        self.angular_velocity += direction.signum() * LEVER_KICK / self.inertia;
    }

    /// Integrate one tick of pendulum dynamics. Returns true on the tick the
    /// lever flips to active.
    pub fn update(&mut self) -> bool {
        // Pull toward the nearest limit
        let target = if self.angle > 0.0 {
            self.max_angle
        } else {
            self.min_angle
        };
        let pull = (target - self.angle) * self.gravity_bias;

        self.angular_velocity += pull;
        self.angular_velocity *= self.damping;
        self.angle += self.angular_velocity;

        // Inelastic limit stops
        if self.angle < self.min_angle {
            self.angle = self.min_angle;
            self.angular_velocity = 0.0;
        }
        if self.angle > self.max_angle {
            self.angle = self.max_angle;
            self.angular_velocity = 0.0;
        }

        let was_active = self.active;
        self.active = self.angle > 0.0;
        !was_active && self.active
    }
}

/// Vertical sliding door. `open` is derived from the activation graph every
/// tick; collision solidity uses the flag immediately, ahead of the visual.
#[derive(Debug)]
pub struct Door {
    pub collider: Collider,
    pub open: bool,
    rest_y: f32,
}

impl Door {
    pub fn new(collider: Collider) -> Self {
        let rest_y = collider.center().y;
        Door {
            collider,
            open: false,
            rest_y,
        }
    }

    pub fn set_open(&mut self, open: bool) {
        self.open = open;
    }

    /// Ease the slab toward its open/closed height
    pub fn animate(&mut self) {
        let target = self.rest_y + if self.open { DOOR_OPEN_OFFSET } else { 0.0 };
        let center = self.collider.center();
        let y = center.y + (target - center.y) * DOOR_SMOOTHING;
        self.collider.recenter(Vec2::new(center.x, y));
    }
}
