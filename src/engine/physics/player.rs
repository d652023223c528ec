// Player body and movement tuning
//
// All values are tuned for the fixed 60Hz timestep; velocities are in world
// units per tick.

use super::collider::{Aabb, Element};
use super::world::RideRef;
use glam::Vec2;

pub(crate) const GRAVITY: f32 = 0.025;
pub(crate) const MAX_FALL_SPEED: f32 = 0.6;
pub(crate) const ACCEL: f32 = 0.04;
pub(crate) const JUMP_FORCE: f32 = 0.35;

/// Exponential damping toward zero horizontal speed
pub(crate) const RUN_DAMP_LAMBDA: f32 = 12.0;
/// Much stronger deceleration while carrying (heavier feel)
pub(crate) const CARRY_DAMP_LAMBDA: f32 = 4.0;
/// Acceleration multiplier while carrying
pub(crate) const CARRY_ACCEL_SCALE: f32 = 0.5;

/// Ticks between jump events (keeps the sound from rapid-firing)
pub(crate) const JUMP_EVENT_COOLDOWN: u8 = 10;
/// Anything below this height has fallen out of the world
pub(crate) const KILL_PLANE_Y: f32 = -20.0;
/// Hazard/goal/gem scans use a volume shrunk by this much (feel tweak)
pub(crate) const SENSOR_SHRINK: f32 = 0.1;
/// Extra width of the box pickup proximity volume
pub(crate) const PICKUP_RANGE: f32 = 1.5;

pub(crate) const PLAYER_WIDTH: f32 = 0.6;
pub(crate) const PLAYER_HEIGHT: f32 = 1.2;

/// One of the two cooperating characters
#[derive(Debug)]
pub struct Player {
    pub position: Vec2,
    pub velocity: Vec2,
    pub width: f32,
    pub height: f32,
    pub element: Element,
    pub grounded: bool,
    /// Platform or box this player last landed on; cleared once airborne
    pub riding: Option<RideRef>,
    /// Index of the carried box, if any
    pub carrying: Option<usize>,
    /// Last horizontal facing, +1 right / -1 left
    pub facing: f32,
    /// Pickup input state from the previous tick, for edge detection
    last_pickup: bool,
    jump_cooldown: u8,
}

impl Player {
    pub fn new(element: Element, spawn: Vec2) -> Self {
        Player {
            position: spawn,
            velocity: Vec2::ZERO,
            width: PLAYER_WIDTH,
            height: PLAYER_HEIGHT,
            element,
            grounded: false,
            riding: None,
            carrying: None,
            facing: 1.0,
            last_pickup: false,
            jump_cooldown: 0,
        }
    }

    pub fn half_width(&self) -> f32 {
        self.width * 0.5
    }

    pub fn half_height(&self) -> f32 {
        self.height * 0.5
    }

    /// Full collision volume
    pub fn aabb(&self) -> Aabb {
        Aabb::from_center_size(self.position, Vec2::new(self.width, self.height))
    }

    /// Slightly shrunk volume used for hazard/goal/gem reporting
    pub fn sensor_aabb(&self) -> Aabb {
        Aabb::from_center_size(
            self.position,
            Vec2::new(self.width - SENSOR_SHRINK, self.height - SENSOR_SHRINK),
        )
    }

    /// Enlarged volume used to find boxes in pickup range
    pub fn pickup_volume(&self) -> Aabb {
        Aabb::from_center_size(
            self.position,
            Vec2::new(self.width + PICKUP_RANGE, self.height),
        )
    }

    /// Move back to a spawn point with all transient state cleared
    pub fn reset(&mut self, spawn: Vec2) {
        self.position = spawn;
        self.velocity = Vec2::ZERO;
        self.grounded = false;
        self.riding = None;
        self.carrying = None;
        self.last_pickup = false;
        self.jump_cooldown = 0;
    }

    /// True exactly on the tick the pickup input goes from released to held
    pub(crate) fn pickup_edge(&mut self, held: bool) -> bool {
        let edge = held && !self.last_pickup;
        self.last_pickup = held;
        edge
    }

    /// Whether a jump event may fire this tick; arms the cooldown if so
    pub(crate) fn try_jump_event(&mut self) -> bool {
        if self.jump_cooldown == 0 {
            self.jump_cooldown = JUMP_EVENT_COOLDOWN;
            true
        } else {
            false
        }
    }

    pub(crate) fn tick_cooldowns(&mut self) {
        self.jump_cooldown = self.jump_cooldown.saturating_sub(1);
    }
}
