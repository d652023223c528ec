// Built-in levels
//
// Hand-tuned layouts. Coordinates are world units with y up; ground tops
// sit at y = 0 in both levels.

use super::level::{DoorDef, Level, PlatformDef, PoolDef, TriggerDef};
use crate::engine::physics::{Element, HazardKind};
use glam::Vec2;

pub fn all() -> Vec<Level> {
    vec![training_ground(), cooperation()]
}

/// Tutorial: three pools, a button-gated door and a lever-driven lift
pub fn training_ground() -> Level {
    Level {
        name: "Training Ground".into(),
        fire_spawn: Vec2::new(-28.0, 2.0),
        water_spawn: Vec2::new(-26.0, 2.0),
        solids: vec![
            // Ground, split into sections with gaps for the pools
            (Vec2::new(-26.0, -1.05), Vec2::new(6.0, 2.1)),
            (Vec2::new(-18.0, -1.05), Vec2::new(2.0, 2.1)),
            (Vec2::new(-10.5, -1.05), Vec2::new(5.0, 2.1)),
            (Vec2::new(8.0, -1.05), Vec2::new(24.0, 2.1)),
            // Pedestal for the box
            (Vec2::new(17.0, 1.0), Vec2::new(6.0, 5.0)),
            // Upper ledge with the goals
            (Vec2::new(10.0, 8.0), Vec2::new(6.0, 1.0)),
        ],
        pools: vec![
            PoolDef {
                kind: HazardKind::Lava,
                center: Vec2::new(-21.0, -1.05),
                size: Vec2::new(4.0, 2.1),
            },
            PoolDef {
                kind: HazardKind::Water,
                center: Vec2::new(-15.0, -1.05),
                size: Vec2::new(4.0, 2.1),
            },
            PoolDef {
                kind: HazardKind::Acid,
                center: Vec2::new(-6.0, -1.05),
                size: Vec2::new(4.0, 2.1),
            },
        ],
        doors: vec![DoorDef {
            id: "door1".into(),
            center: Vec2::new(2.0, 2.0),
            size: Vec2::new(1.0, 5.0),
        }],
        buttons: vec![
            TriggerDef {
                center: Vec2::new(-2.0, 0.1),
                size: Vec2::new(2.0, 0.2),
                links: vec!["door1".into()],
            },
            TriggerDef {
                center: Vec2::new(6.0, 0.1),
                size: Vec2::new(2.0, 0.2),
                links: vec!["door1".into()],
            },
        ],
        levers: vec![
            TriggerDef {
                center: Vec2::new(19.0, 4.8),
                size: Vec2::new(0.8, 2.5),
                links: vec!["platform1".into()],
            },
            TriggerDef {
                center: Vec2::new(12.0, 9.7),
                size: Vec2::new(0.8, 2.5),
                links: vec!["platform1".into()],
            },
        ],
        boxes: vec![(Vec2::new(9.0, 0.0), Vec2::new(1.5, 1.5))],
        gems: vec![
            (Element::Fire, Vec2::new(6.0, 1.5)),
            (Element::Water, Vec2::new(10.0, 3.0)),
        ],
        platforms: vec![PlatformDef {
            id: "platform1".into(),
            start: Vec2::new(15.0, 8.0),
            end: Vec2::new(15.0, 4.0),
            size: Vec2::new(3.0, 0.5),
            speed: 0.03,
            active: false,
        }],
        goals: vec![
            (Element::Fire, Vec2::new(8.0, 9.5)),
            (Element::Water, Vec2::new(10.0, 9.5)),
        ],
    }
}

/// Vertical maze: four floors connected by two lifts and a box climb
pub fn cooperation() -> Level {
    Level {
        name: "Cooperation!".into(),
        fire_spawn: Vec2::new(-10.0, 1.0),
        water_spawn: Vec2::new(-8.5, 5.0),
        solids: vec![
            // Floor 1
            (Vec2::new(-7.5, 0.0), Vec2::new(11.0, 1.0)),
            (Vec2::new(3.5, 0.0), Vec2::new(3.0, 1.0)),
            (Vec2::new(11.0, 0.0), Vec2::new(4.0, 1.0)),
            // Half floor above the water spawn
            (Vec2::new(-9.5, 4.0), Vec2::new(8.0, 1.0)),
            // Floor 2
            (Vec2::new(5.0, 8.0), Vec2::new(6.0, 1.0)),
            (Vec2::new(-3.5, 8.0), Vec2::new(3.0, 1.0)),
            (Vec2::new(-5.2, 8.5), Vec2::new(0.5, 2.0)),
            (Vec2::new(-8.9, 9.0), Vec2::new(7.0, 1.0)),
            // Floor 3
            (Vec2::new(-2.0, 13.0), Vec2::new(10.0, 1.0)),
            (Vec2::new(0.0, 14.0), Vec2::new(6.0, 1.0)),
            (Vec2::new(7.0, 12.0), Vec2::new(10.0, 1.0)),
            // Floor 4
            (Vec2::new(-4.0, 17.0), Vec2::new(19.0, 1.0)),
            (Vec2::new(5.6, 16.5), Vec2::new(0.5, 2.0)),
            (Vec2::new(7.35, 15.5), Vec2::new(4.0, 0.5)),
            // Side walls
            (Vec2::new(-13.0, 8.0), Vec2::new(2.0, 20.0)),
            (Vec2::new(13.0, 8.0), Vec2::new(2.0, 20.0)),
        ],
        pools: vec![
            PoolDef {
                kind: HazardKind::Lava,
                center: Vec2::new(0.0, -0.5),
                size: Vec2::new(4.0, 2.0),
            },
            PoolDef {
                kind: HazardKind::Water,
                center: Vec2::new(7.0, -0.5),
                size: Vec2::new(4.0, 2.0),
            },
            PoolDef {
                kind: HazardKind::Acid,
                center: Vec2::new(0.0, 7.5),
                size: Vec2::new(4.0, 2.0),
            },
        ],
        doors: vec![],
        buttons: vec![
            TriggerDef {
                center: Vec2::new(3.5, 0.6),
                size: Vec2::new(2.0, 0.2),
                links: vec!["platform1".into()],
            },
            TriggerDef {
                center: Vec2::new(6.0, 8.6),
                size: Vec2::new(2.0, 0.2),
                links: vec!["platform1".into()],
            },
        ],
        levers: vec![TriggerDef {
            center: Vec2::new(-6.3, 10.7),
            size: Vec2::new(0.8, 2.5),
            links: vec!["platform2".into()],
        }],
        boxes: vec![(Vec2::new(-2.0, 15.0), Vec2::new(1.5, 1.5))],
        gems: vec![
            (Element::Water, Vec2::new(3.5, 1.5)),
            (Element::Fire, Vec2::new(6.0, 9.5)),
            (Element::Water, Vec2::new(1.0, 9.5)),
            (Element::Fire, Vec2::new(-1.0, 9.5)),
            (Element::Water, Vec2::new(0.0, 15.5)),
            (Element::Fire, Vec2::new(8.0, 16.5)),
        ],
        platforms: vec![
            PlatformDef {
                id: "platform1".into(),
                start: Vec2::new(10.3, 8.0),
                end: Vec2::new(10.3, 1.0),
                size: Vec2::new(2.5, 0.5),
                speed: 0.03,
                active: false,
            },
            PlatformDef {
                id: "platform2".into(),
                start: Vec2::new(-10.0, 11.5),
                end: Vec2::new(-10.0, 10.0),
                size: Vec2::new(2.5, 0.5),
                speed: 0.03,
                active: false,
            },
        ],
        goals: vec![
            (Element::Fire, Vec2::new(-4.0, 18.5)),
            (Element::Water, Vec2::new(-2.0, 18.5)),
        ],
    }
}
