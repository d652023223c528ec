// Axis-separated collision resolution
//
// Displacement is applied and resolved one axis at a time: all X overlaps,
// then all Y overlaps. Within an axis, solids are visited in a fixed scan
// order and the body is pushed to the nearest non-overlapping boundary on
// the side its velocity came from; later overlaps re-test against the
// already-corrected position, so one pass per axis always terminates.
//
// This trades corner-cutting accuracy for O(bodies x colliders) cost, which
// holds up at the fixed 60Hz step and the speed bounds in use.

use super::box_body::BoxBody;
use super::collider::Aabb;
use super::player::Player;
use super::world::{PhysicsWorld, RideRef};
use glam::Vec2;

/// Push-out margin keeping a resolved body from re-detecting the same
/// overlap next tick
pub(crate) const PLAYER_SKIN: f32 = 0.0005;
pub(crate) const BOX_SKIN: f32 = 0.001;

/// Fraction of the player's horizontal velocity transferred when shoving a box
const BOX_PUSH_TRANSFER: f32 = 0.25;
/// What remains of the player's horizontal velocity after the shove
const BOX_PUSH_DRAG: f32 = 0.2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Axis {
    X,
    Y,
}

/// How a push-out resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Contact {
    None,
    Side,
    /// Came to rest on the obstacle's top face
    Landed,
    /// Bumped the obstacle's bottom face
    Ceiling,
}

/// Push a body out of `obstacle` along `axis`, against the sign of its
/// velocity, and zero that velocity component. A body with no velocity on
/// the axis is left where it is.
pub(crate) fn push_out(
    position: &mut Vec2,
    velocity: &mut Vec2,
    half: Vec2,
    skin: f32,
    obstacle: &Aabb,
    axis: Axis,
) -> Contact {
    match axis {
        Axis::X => {
            if velocity.x > 0.0 {
                position.x = obstacle.min.x - half.x - skin;
            } else if velocity.x < 0.0 {
                position.x = obstacle.max.x + half.x + skin;
            } else {
                return Contact::None;
            }
            velocity.x = 0.0;
            Contact::Side
        }
        Axis::Y => {
            if velocity.y < 0.0 {
                // Only land when the body's center is above the obstacle's
                // bottom, so we never snap up from underneath
                if position.y > obstacle.min.y {
                    position.y = obstacle.max.y + half.y + skin;
                    velocity.y = 0.0;
                    Contact::Landed
                } else {
                    Contact::None
                }
            } else if velocity.y > 0.0 {
                position.y = obstacle.min.y - half.y - skin;
                velocity.y = 0.0;
                Contact::Ceiling
            } else {
                Contact::None
            }
        }
    }
}

impl PhysicsWorld {
    /// Resolve one axis of player movement against boxes, levers and every
    /// currently-solid collider, updating grounded/riding state.
    pub(crate) fn resolve_player_axis(
        &mut self,
        player: &mut Player,
        player_idx: usize,
        axis: Axis,
    ) {
        let half = Vec2::new(player.half_width(), player.half_height());

        // Boxes first: they shove and can be stood on
        for i in 0..self.boxes.len() {
            if self.boxes[i].carrier == Some(player_idx) {
                continue;
            }
            let obstacle = self.boxes[i].collider.aabb;
            if !player.aabb().intersects(&obstacle) {
                continue;
            }

            if axis == Axis::X {
                // Shove the box and bleed off most of our own speed
                self.boxes[i].velocity.x += player.velocity.x * BOX_PUSH_TRANSFER;
                if player.velocity.x > 0.0 {
                    player.position.x = obstacle.min.x - half.x - PLAYER_SKIN;
                } else if player.velocity.x < 0.0 {
                    player.position.x = obstacle.max.x + half.x + PLAYER_SKIN;
                }
                player.velocity.x *= BOX_PUSH_DRAG;
            } else {
                match push_out(
                    &mut player.position,
                    &mut player.velocity,
                    half,
                    PLAYER_SKIN,
                    &obstacle,
                    Axis::Y,
                ) {
                    Contact::Landed => {
                        player.grounded = true;
                        player.riding = Some(RideRef::Box(i));
                    }
                    _ => {}
                }
            }
        }

        // Levers never block; horizontal contact torques them instead
        if axis == Axis::X && player.velocity.x != 0.0 {
            let aabb = player.aabb();
            for lever in &mut self.levers {
                if aabb.intersects(&lever.collider.aabb) {
                    lever.kick(player.velocity.x);
                }
            }
        }

        // Static solids
        for col in &self.solids {
            if !player.aabb().intersects(&col.aabb) {
                continue;
            }
            if push_out(
                &mut player.position,
                &mut player.velocity,
                half,
                PLAYER_SKIN,
                &col.aabb,
                axis,
            ) == Contact::Landed
            {
                player.grounded = true;
                player.riding = None;
            }
        }

        // Doors are solid only while closed
        for door in &self.doors {
            if door.open {
                continue;
            }
            if !player.aabb().intersects(&door.collider.aabb) {
                continue;
            }
            if push_out(
                &mut player.position,
                &mut player.velocity,
                half,
                PLAYER_SKIN,
                &door.collider.aabb,
                axis,
            ) == Contact::Landed
            {
                player.grounded = true;
                player.riding = None;
            }
        }

        // Moving platforms: volume reflects the platform's current position
        for i in 0..self.platforms.len() {
            let center = self.platforms[i].position();
            self.platforms[i].collider.recenter(center);
            let obstacle = self.platforms[i].collider.aabb;
            if !player.aabb().intersects(&obstacle) {
                continue;
            }
            if push_out(
                &mut player.position,
                &mut player.velocity,
                half,
                PLAYER_SKIN,
                &obstacle,
                axis,
            ) == Contact::Landed
            {
                player.grounded = true;
                player.riding = Some(RideRef::Platform(i));
            }
        }
    }

    /// Resolve one axis of free-box movement against other boxes and every
    /// currently-solid collider. Same shape as the player pass, minus
    /// riding/shove behavior.
    pub(crate) fn resolve_box_axis(&mut self, index: usize, axis: Axis) {
        // Snapshot the other boxes' volumes before mutably borrowing ours
        let others: Vec<Aabb> = self
            .boxes
            .iter()
            .enumerate()
            .filter(|(j, _)| *j != index)
            .map(|(_, b)| b.collider.aabb)
            .collect();

        let solids = &self.solids;
        let doors = &self.doors;
        let platforms = &self.platforms;
        let body = &mut self.boxes[index];
        let half = Vec2::new(body.collider.width * 0.5, body.collider.height * 0.5);

        let mut position = body.position();
        let mut resolve_one = |body: &mut BoxBody, position: &mut Vec2, obstacle: &Aabb| {
            if !body.collider.aabb.intersects(obstacle) {
                return;
            }
            if push_out(position, &mut body.velocity, half, BOX_SKIN, obstacle, axis)
                == Contact::Landed
            {
                body.on_ground = true;
            }
            body.collider.recenter(*position);
        };

        for obstacle in &others {
            resolve_one(body, &mut position, obstacle);
        }
        for col in solids {
            resolve_one(body, &mut position, &col.aabb);
        }
        for door in doors {
            if !door.open {
                resolve_one(body, &mut position, &door.collider.aabb);
            }
        }
        for platform in platforms {
            resolve_one(body, &mut position, &platform.collider.aabb);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_out_x_respects_velocity_sign() {
        let obstacle = Aabb::from_center_size(Vec2::ZERO, Vec2::splat(2.0));
        let half = Vec2::splat(0.5);

        let mut pos = Vec2::new(-1.2, 0.0);
        let mut vel = Vec2::new(0.5, 0.0);
        assert_eq!(
            push_out(&mut pos, &mut vel, half, 0.001, &obstacle, Axis::X),
            Contact::Side
        );
        assert!(pos.x <= -1.5 - 0.001 + 1e-6);
        assert_eq!(vel.x, 0.0);

        let mut pos = Vec2::new(1.2, 0.0);
        let mut vel = Vec2::new(-0.5, 0.0);
        push_out(&mut pos, &mut vel, half, 0.001, &obstacle, Axis::X);
        assert!(pos.x >= 1.5 + 0.001 - 1e-6);
    }

    #[test]
    fn test_push_out_landing_sets_top_height() {
        let obstacle = Aabb::from_center_size(Vec2::ZERO, Vec2::new(10.0, 1.0));
        let half = Vec2::new(0.3, 0.6);

        let mut pos = Vec2::new(0.0, 0.9);
        let mut vel = Vec2::new(0.0, -0.2);
        assert_eq!(
            push_out(&mut pos, &mut vel, half, PLAYER_SKIN, &obstacle, Axis::Y),
            Contact::Landed
        );
        assert!((pos.y - (0.5 + 0.6 + PLAYER_SKIN)).abs() < 1e-6);
        assert_eq!(vel.y, 0.0);
    }

    #[test]
    fn test_push_out_no_snap_from_below() {
        // Center below the obstacle's bottom: falling body is not teleported up
        let obstacle = Aabb::from_center_size(Vec2::new(0.0, 2.0), Vec2::new(10.0, 1.0));
        let half = Vec2::new(0.3, 0.6);

        let mut pos = Vec2::new(0.0, 1.2);
        let mut vel = Vec2::new(0.0, -0.2);
        assert_eq!(
            push_out(&mut pos, &mut vel, half, PLAYER_SKIN, &obstacle, Axis::Y),
            Contact::None
        );
        assert_eq!(pos.y, 1.2);
    }

    #[test]
    fn test_push_out_head_bump() {
        let obstacle = Aabb::from_center_size(Vec2::new(0.0, 3.0), Vec2::new(10.0, 1.0));
        let half = Vec2::new(0.3, 0.6);

        let mut pos = Vec2::new(0.0, 2.0);
        let mut vel = Vec2::new(0.0, 0.3);
        assert_eq!(
            push_out(&mut pos, &mut vel, half, PLAYER_SKIN, &obstacle, Axis::Y),
            Contact::Ceiling
        );
        assert!(pos.y < 2.0);
        assert_eq!(vel.y, 0.0);
    }

    #[test]
    fn test_push_out_zero_velocity_is_left_alone() {
        let obstacle = Aabb::from_center_size(Vec2::ZERO, Vec2::splat(2.0));
        let half = Vec2::splat(0.5);

        let mut pos = Vec2::new(0.2, 0.0);
        let mut vel = Vec2::ZERO;
        assert_eq!(
            push_out(&mut pos, &mut vel, half, 0.001, &obstacle, Axis::X),
            Contact::None
        );
        assert_eq!(pos, Vec2::new(0.2, 0.0));
    }
}
