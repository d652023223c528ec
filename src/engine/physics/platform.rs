// Moving platform kinematics
//
// A platform interpolates along a two-point path. Autonomous platforms
// ping-pong while active; link-driven platforms seek the endpoint matching
// their activation state. The per-tick displacement is capped so a platform
// that snaps active can never launch a rider.

use super::collider::Collider;
use glam::Vec2;

/// Maximum per-tick displacement on either axis, for the platform itself and
/// for the velocity it exposes to riders
pub const MAX_PLATFORM_STEP: f32 = 0.3;

/// Drive mode, selected once at load time by whether any button or lever
/// links to the platform's id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriveMode {
    /// Ping-pong along the path while active; frozen in place while inactive
    Autonomous,
    /// Seek t=1 while active, t=0 while inactive, clamping at the target
    LinkDriven,
}

#[derive(Debug)]
pub struct MovingPlatform {
    pub collider: Collider,
    pub start: Vec2,
    pub end: Vec2,
    pub speed: f32,
    pub active: bool,
    pub drive: DriveMode,
    /// Path parameter in [0, 1]
    t: f32,
    /// Autonomous travel direction
    direction: f32,
    /// Link-driven platforms snap to their endpoint on the first tick
    seeded: bool,
    current_velocity: Vec2,
}

impl MovingPlatform {
    pub fn new(
        collider: Collider,
        start: Vec2,
        end: Vec2,
        speed: f32,
        active: bool,
        drive: DriveMode,
    ) -> Self {
        MovingPlatform {
            collider,
            start,
            end,
            speed,
            active,
            drive,
            t: 0.0,
            direction: 1.0,
            seeded: false,
            current_velocity: Vec2::ZERO,
        }
    }

    pub fn position(&self) -> Vec2 {
        self.collider.center()
    }

    /// Position delta this tick, already clamped for rider transfer
    pub fn velocity(&self) -> Vec2 {
        self.current_velocity
    }

    pub fn t(&self) -> f32 {
        self.t
    }

    /// Per-tick path-parameter step, capped so neither axis moves more than
    /// `MAX_PLATFORM_STEP` in one tick
    fn step_size(&self) -> f32 {
        let path = self.end - self.start;
        let dist = path.length();
        if dist <= f32::EPSILON {
            return 1.0;
        }
        let mut step = self.speed / dist;
        let max_axis = path.x.abs().max(path.y.abs());
        if max_axis > 0.0 {
            step = step.min(MAX_PLATFORM_STEP / max_axis);
        }
        step
    }

    /// Advance one tick
    pub fn update(&mut self) {
        let prev = self.collider.center();

        match self.drive {
            DriveMode::LinkDriven => {
                let target = if self.active { 1.0 } else { 0.0 };
                if !self.seeded {
                    // First tick after load: jump straight to the endpoint
                    // matching the current state, without publishing velocity
                    self.seeded = true;
                    self.t = target;
                    self.current_velocity = Vec2::ZERO;
                    self.collider.recenter(self.start.lerp(self.end, self.t));
                    return;
                }
                let step = self.step_size();
                if self.t < target {
                    self.t = (self.t + step).min(target);
                } else if self.t > target {
                    self.t = (self.t - step).max(target);
                }
            }
            DriveMode::Autonomous => {
                if !self.active {
                    // Frozen in place, not reset to an endpoint
                    self.current_velocity = Vec2::ZERO;
                    return;
                }
                self.t += self.step_size() * self.direction;
                if self.t >= 1.0 {
                    self.t = 1.0;
                    self.direction = -1.0;
                }
                if self.t <= 0.0 {
                    self.t = 0.0;
                    self.direction = 1.0;
                }
            }
        }

        let pos = self.start.lerp(self.end, self.t);
        let delta = pos - prev;
        self.current_velocity = Vec2::new(
            delta.x.clamp(-MAX_PLATFORM_STEP, MAX_PLATFORM_STEP),
            delta.y.clamp(-MAX_PLATFORM_STEP, MAX_PLATFORM_STEP),
        );
        self.collider.recenter(pos);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::physics::collider::ColliderKind;
    use approx::assert_relative_eq;

    fn platform(start: Vec2, end: Vec2, speed: f32, active: bool, drive: DriveMode) -> MovingPlatform {
        let collider = Collider::with_id(
            ColliderKind::MovingPlatform,
            start,
            Vec2::new(3.0, 0.5),
            "p1",
        );
        MovingPlatform::new(collider, start, end, speed, active, drive)
    }

    #[test]
    fn test_autonomous_ping_pong() {
        let start = Vec2::new(0.0, 0.0);
        let end = Vec2::new(2.0, 0.0);
        let mut p = platform(start, end, 0.5, true, DriveMode::Autonomous);

        let mut reached_end = false;
        let mut reached_start = false;
        for _ in 0..20 {
            p.update();
            if (p.t() - 1.0).abs() < 1e-6 {
                reached_end = true;
            }
            if reached_end && p.t() < 1e-6 {
                reached_start = true;
            }
        }
        assert!(reached_end);
        assert!(reached_start);
    }

    #[test]
    fn test_autonomous_frozen_while_inactive() {
        let mut p = platform(
            Vec2::ZERO,
            Vec2::new(4.0, 0.0),
            0.1,
            true,
            DriveMode::Autonomous,
        );
        for _ in 0..5 {
            p.update();
        }
        let held = p.position();

        p.active = false;
        for _ in 0..10 {
            p.update();
        }
        assert_eq!(p.position(), held);
        assert_eq!(p.velocity(), Vec2::ZERO);
    }

    #[test]
    fn test_link_driven_seeds_to_active_endpoint() {
        let start = Vec2::new(0.0, 8.0);
        let end = Vec2::new(0.0, 1.0);
        let mut p = platform(start, end, 0.03, true, DriveMode::LinkDriven);

        p.update();
        assert_relative_eq!(p.t(), 1.0);
        assert_eq!(p.position(), end);
        assert_eq!(p.velocity(), Vec2::ZERO);
    }

    #[test]
    fn test_link_driven_seeks_without_overshoot() {
        let start = Vec2::new(0.0, 0.0);
        let end = Vec2::new(0.0, 4.0);
        let mut p = platform(start, end, 0.05, false, DriveMode::LinkDriven);
        p.update(); // seed at t=0

        p.active = true;
        let mut last_t = p.t();
        for _ in 0..2000 {
            p.update();
            assert!(p.t() >= last_t);
            assert!(p.t() <= 1.0);
            last_t = p.t();
        }
        assert_relative_eq!(p.t(), 1.0);
        assert_eq!(p.position(), end);
    }

    #[test]
    fn test_velocity_clamp_over_paths_and_speeds() {
        // Toggling an idle platform active must never produce a per-axis
        // step above the clamp, for any path length or speed
        for length in [1.0_f32, 5.0, 20.0, 100.0] {
            for speed in [0.01_f32, 0.05, 0.3, 0.6, 1.0] {
                let start = Vec2::new(0.0, 0.0);
                let end = Vec2::new(0.0, length);
                let mut p = platform(start, end, speed, false, DriveMode::LinkDriven);
                p.update(); // seed at the inactive endpoint

                p.active = true;
                let mut prev = p.position();
                for _ in 0..400 {
                    p.update();
                    let delta = p.position() - prev;
                    assert!(
                        delta.x.abs() <= MAX_PLATFORM_STEP + 1e-5
                            && delta.y.abs() <= MAX_PLATFORM_STEP + 1e-5,
                        "length={length} speed={speed} delta={delta:?}"
                    );
                    assert!(p.velocity().y.abs() <= MAX_PLATFORM_STEP + 1e-5);
                    prev = p.position();
                }
            }
        }
    }

    #[test]
    fn test_collider_follows_position() {
        let mut p = platform(
            Vec2::ZERO,
            Vec2::new(0.0, 2.0),
            0.5,
            true,
            DriveMode::Autonomous,
        );
        p.update();
        assert_relative_eq!(p.collider.center().y, p.position().y);
        assert_relative_eq!(
            p.collider.aabb.max.y - p.collider.aabb.min.y,
            0.5,
            epsilon = 1e-6
        );
    }
}
