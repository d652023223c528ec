// Level description and world construction
//
// A level is plain data: blocks, mechanisms, collectibles and spawn points.
// `build` validates the link graph and populates a fresh world, expanding
// each liquid pool into walkable geometry plus an inner hazard volume.

use crate::engine::physics::{DriveMode, Element, HazardKind, PhysicsWorld};
use glam::Vec2;
use thiserror::Error;

/// Goal volumes share one size across levels
const GOAL_SIZE: Vec2 = Vec2::new(1.5, 2.5);
const GEM_SIZE: Vec2 = Vec2::new(0.6, 0.6);

/// Pool basin geometry
const POOL_WALL_THICKNESS: f32 = 0.2;
const POOL_FLOOR_THICKNESS: f32 = 0.2;
/// The basin floor sits this far above the pool volume's bottom, so walking
/// through a drained section stays possible
const POOL_FLOOR_RAISE: f32 = 1.2;
/// The hazard volume stops short of the basin rim
const POOL_HAZARD_INSET_Y: f32 = 0.2;

#[derive(Debug, Error)]
pub enum LevelError {
    #[error("duplicate mechanism id `{0}`")]
    DuplicateId(String),
    #[error("link target `{0}` matches no door or platform")]
    UnknownLinkTarget(String),
}

/// A liquid basin. Expands into a raised floor, two side walls and an inner
/// hazard volume on build.
#[derive(Debug, Clone)]
pub struct PoolDef {
    pub kind: HazardKind,
    pub center: Vec2,
    pub size: Vec2,
}

#[derive(Debug, Clone)]
pub struct DoorDef {
    pub id: String,
    pub center: Vec2,
    pub size: Vec2,
}

/// A button or lever placement plus the ids it drives
#[derive(Debug, Clone)]
pub struct TriggerDef {
    pub center: Vec2,
    pub size: Vec2,
    pub links: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct PlatformDef {
    pub id: String,
    pub start: Vec2,
    pub end: Vec2,
    pub size: Vec2,
    pub speed: f32,
    /// Initial state; only meaningful for platforms nothing links to
    pub active: bool,
}

#[derive(Debug, Clone, Default)]
pub struct Level {
    pub name: String,
    pub fire_spawn: Vec2,
    pub water_spawn: Vec2,
    /// Static blocks as (center, size)
    pub solids: Vec<(Vec2, Vec2)>,
    pub pools: Vec<PoolDef>,
    pub doors: Vec<DoorDef>,
    pub buttons: Vec<TriggerDef>,
    pub levers: Vec<TriggerDef>,
    /// Pushable boxes as (center, size)
    pub boxes: Vec<(Vec2, Vec2)>,
    pub gems: Vec<(Element, Vec2)>,
    pub platforms: Vec<PlatformDef>,
    pub goals: Vec<(Element, Vec2)>,
}

impl Level {
    /// Validate the link graph and build the physics world
    pub fn build(&self) -> Result<PhysicsWorld, LevelError> {
        self.validate()?;

        let mut world = PhysicsWorld::new();

        for &(center, size) in &self.solids {
            world.add_solid(center, size);
        }
        for pool in &self.pools {
            expand_pool(&mut world, pool);
        }
        for door in &self.doors {
            world.add_door(door.id.clone(), door.center, door.size);
        }
        for button in &self.buttons {
            world.add_button(button.center, button.size, button.links.clone());
        }
        for lever in &self.levers {
            world.add_lever(lever.center, lever.size, lever.links.clone());
        }
        for &(center, size) in &self.boxes {
            world.add_box(center, size);
        }
        for &(element, center) in &self.gems {
            world.add_gem(element, center, GEM_SIZE);
        }
        for &(element, center) in &self.goals {
            world.add_goal(element, center, GOAL_SIZE);
        }

        // Platforms last: drive mode depends on the triggers already added
        for platform in &self.platforms {
            let drive = if world.id_is_linked(&platform.id) {
                DriveMode::LinkDriven
            } else {
                DriveMode::Autonomous
            };
            world.add_platform(
                platform.id.clone(),
                platform.start,
                platform.end,
                platform.size,
                platform.speed,
                platform.active,
                drive,
            );
        }

        log::debug!(
            "built level `{}`: {} solids, {} gems, {} mechanisms",
            self.name,
            self.solids.len(),
            self.gems.len(),
            self.doors.len() + self.platforms.len(),
        );
        Ok(world)
    }

    fn validate(&self) -> Result<(), LevelError> {
        let mut ids: Vec<&str> = Vec::new();
        for id in self
            .doors
            .iter()
            .map(|d| d.id.as_str())
            .chain(self.platforms.iter().map(|p| p.id.as_str()))
        {
            if ids.contains(&id) {
                return Err(LevelError::DuplicateId(id.to_string()));
            }
            ids.push(id);
        }

        for link in self
            .buttons
            .iter()
            .chain(self.levers.iter())
            .flat_map(|t| t.links.iter())
        {
            if !ids.contains(&link.as_str()) {
                return Err(LevelError::UnknownLinkTarget(link.clone()));
            }
        }
        Ok(())
    }
}

/// Turn a pool volume into a walkable basin: a raised floor slab, one thin
/// wall at each end and a hazard volume inset below the rim
fn expand_pool(world: &mut PhysicsWorld, pool: &PoolDef) {
    let (center, size) = (pool.center, pool.size);
    let half = size * 0.5;

    world.add_solid(
        Vec2::new(center.x, center.y - half.y + POOL_FLOOR_RAISE),
        Vec2::new(size.x, POOL_FLOOR_THICKNESS),
    );
    world.add_solid(
        Vec2::new(center.x - half.x + POOL_WALL_THICKNESS * 0.5, center.y),
        Vec2::new(POOL_WALL_THICKNESS, size.y),
    );
    world.add_solid(
        Vec2::new(center.x + half.x - POOL_WALL_THICKNESS * 0.5, center.y),
        Vec2::new(POOL_WALL_THICKNESS, size.y),
    );
    world.add_hazard(
        pool.kind,
        center,
        Vec2::new(
            size.x - POOL_WALL_THICKNESS * 2.0,
            size.y - POOL_HAZARD_INSET_Y,
        ),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_level() -> Level {
        Level {
            name: "test".into(),
            ..Level::default()
        }
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut level = empty_level();
        level.doors.push(DoorDef {
            id: "d1".into(),
            center: Vec2::ZERO,
            size: Vec2::ONE,
        });
        level.platforms.push(PlatformDef {
            id: "d1".into(),
            start: Vec2::ZERO,
            end: Vec2::ONE,
            size: Vec2::ONE,
            speed: 0.03,
            active: false,
        });
        assert!(matches!(level.build(), Err(LevelError::DuplicateId(id)) if id == "d1"));
    }

    #[test]
    fn test_unknown_link_target_rejected() {
        let mut level = empty_level();
        level.buttons.push(TriggerDef {
            center: Vec2::ZERO,
            size: Vec2::ONE,
            links: vec!["nowhere".into()],
        });
        assert!(matches!(
            level.build(),
            Err(LevelError::UnknownLinkTarget(id)) if id == "nowhere"
        ));
    }

    #[test]
    fn test_pool_expands_to_basin_and_hazard() {
        let mut level = empty_level();
        level.pools.push(PoolDef {
            kind: HazardKind::Lava,
            center: Vec2::new(-21.0, -1.05),
            size: Vec2::new(4.0, 2.1),
        });
        let world = level.build().unwrap();

        // Floor slab plus two walls; the hazard is inset from the walls
        assert_eq!(world.solids().len(), 3);
        let hazard = &world.zones()[0];
        let aabb = hazard.aabb;
        assert!((aabb.max.x - aabb.min.x - 3.6).abs() < 1e-5);
        assert!((aabb.max.y - aabb.min.y - 1.9).abs() < 1e-5);
    }

    #[test]
    fn test_drive_mode_follows_links() {
        let mut level = empty_level();
        level.platforms.push(PlatformDef {
            id: "linked".into(),
            start: Vec2::ZERO,
            end: Vec2::new(0.0, 4.0),
            size: Vec2::new(3.0, 0.5),
            speed: 0.03,
            active: false,
        });
        level.platforms.push(PlatformDef {
            id: "free".into(),
            start: Vec2::new(5.0, 0.0),
            end: Vec2::new(9.0, 0.0),
            size: Vec2::new(3.0, 0.5),
            speed: 0.03,
            active: true,
        });
        level.levers.push(TriggerDef {
            center: Vec2::ZERO,
            size: Vec2::new(0.8, 2.5),
            links: vec!["linked".into()],
        });

        let world = level.build().unwrap();
        assert_eq!(world.platforms()[0].drive, DriveMode::LinkDriven);
        assert_eq!(world.platforms()[1].drive, DriveMode::Autonomous);
    }
}
