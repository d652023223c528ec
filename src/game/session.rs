// Game session orchestration
//
// Drives the fixed tick order over one loaded level and folds each player's
// tick outcome into win/lose state. Index 0 is always the fire character,
// index 1 the water character.

use super::level::{Level, LevelError};
use crate::engine::input::InputFrame;
use crate::engine::physics::{
    Element, HazardKind, PhysicsWorld, Player, SimEvent, TickOutcome,
};

pub const FIRE: usize = 0;
pub const WATER: usize = 1;

/// Whether touching this liquid kills a character of this element. Acid
/// kills both; each element is immune to its own liquid.
fn is_lethal(element: Element, hazard: HazardKind) -> bool {
    match (element, hazard) {
        (_, HazardKind::Acid) => true,
        (Element::Fire, HazardKind::Water) => true,
        (Element::Water, HazardKind::Lava) => true,
        _ => false,
    }
}

#[derive(Debug)]
pub struct Session {
    pub world: PhysicsWorld,
    pub players: [Player; 2],
    /// Gems collected per character
    pub gems_collected: [u32; 2],
    /// Latched: once a character reaches their goal it stays reached
    on_goal: [bool; 2],
    pub complete: bool,
    pub game_over: bool,
    events: Vec<SimEvent>,
}

impl Session {
    pub fn new(level: &Level) -> Result<Self, LevelError> {
        let world = level.build()?;
        log::info!("starting level `{}`", level.name);
        Ok(Session {
            world,
            players: [
                Player::new(Element::Fire, level.fire_spawn),
                Player::new(Element::Water, level.water_spawn),
            ],
            gems_collected: [0, 0],
            on_goal: [false, false],
            complete: false,
            game_over: false,
            events: Vec::new(),
        })
    }

    /// Rebuild the world and put both characters back at their spawns
    pub fn restart(&mut self, level: &Level) -> Result<(), LevelError> {
        self.world = level.build()?;
        self.players[FIRE].reset(level.fire_spawn);
        self.players[WATER].reset(level.water_spawn);
        self.gems_collected = [0, 0];
        self.on_goal = [false, false];
        self.complete = false;
        self.game_over = false;
        self.events.clear();
        log::info!("restarted level `{}`", level.name);
        Ok(())
    }

    pub fn on_goal(&self, index: usize) -> bool {
        self.on_goal[index]
    }

    /// Events emitted by the most recent tick
    pub fn events(&self) -> &[SimEvent] {
        &self.events
    }

    /// Advance the simulation one fixed tick. Does nothing once the level is
    /// complete or lost.
    pub fn step(&mut self, inputs: [InputFrame; 2]) {
        if self.complete || self.game_over {
            return;
        }
        self.events.clear();

        self.world.update_boxes();
        self.world.update_mechanisms(&self.players, &mut self.events);
        self.world.update_platforms();
        self.world.sync_riders(&mut self.players);

        for i in 0..2 {
            let outcome =
                self.world
                    .update_player(&mut self.players[i], i, inputs[i], &mut self.events);
            self.apply_outcome(i, outcome);
        }

        if self.on_goal[FIRE] && self.on_goal[WATER] && !self.complete {
            self.complete = true;
            log::info!(
                "level complete ({} + {} gems)",
                self.gems_collected[FIRE],
                self.gems_collected[WATER]
            );
        }
    }

    fn apply_outcome(&mut self, index: usize, outcome: TickOutcome) {
        let element = self.players[index].element;
        match outcome {
            TickOutcome::Gem(_) => {
                self.gems_collected[index] += 1;
                log::info!("{element:?} collected a gem");
            }
            TickOutcome::Goal(goal_element) => {
                if goal_element == element && !self.on_goal[index] {
                    self.on_goal[index] = true;
                    log::info!("{element:?} reached their goal");
                }
            }
            TickOutcome::Hazard(kind) => {
                if is_lethal(element, kind) {
                    self.game_over = true;
                    log::warn!("{element:?} died in {kind:?}");
                }
            }
            TickOutcome::FellOut => {
                self.game_over = true;
                log::warn!("{element:?} fell out of the world");
            }
            TickOutcome::None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::level::PoolDef;
    use glam::Vec2;

    #[test]
    fn test_lethality_matrix() {
        assert!(!is_lethal(Element::Fire, HazardKind::Lava));
        assert!(is_lethal(Element::Fire, HazardKind::Water));
        assert!(is_lethal(Element::Fire, HazardKind::Acid));
        assert!(is_lethal(Element::Water, HazardKind::Lava));
        assert!(!is_lethal(Element::Water, HazardKind::Water));
        assert!(is_lethal(Element::Water, HazardKind::Acid));
    }

    /// Flat floor with the two characters spawned a little above it
    fn flat_level() -> Level {
        Level {
            name: "flat".into(),
            fire_spawn: Vec2::new(-2.0, 1.2),
            water_spawn: Vec2::new(2.0, 1.2),
            solids: vec![(Vec2::new(0.0, 0.0), Vec2::new(60.0, 1.0))],
            ..Level::default()
        }
    }

    #[test]
    fn test_own_liquid_is_safe() {
        let mut level = flat_level();
        // Fire walks over a lava surface unharmed
        level.pools.push(PoolDef {
            kind: HazardKind::Lava,
            center: Vec2::new(-2.0, 1.6),
            size: Vec2::new(2.0, 1.0),
        });
        let mut session = Session::new(&level).unwrap();
        for _ in 0..30 {
            session.step([InputFrame::IDLE; 2]);
        }
        assert!(!session.game_over);
    }

    #[test]
    fn test_wrong_liquid_kills() {
        let mut level = flat_level();
        // Water overlapping fire's spawn position
        level.pools.push(PoolDef {
            kind: HazardKind::Water,
            center: Vec2::new(-2.0, 1.6),
            size: Vec2::new(2.0, 1.0),
        });
        let mut session = Session::new(&level).unwrap();
        session.step([InputFrame::IDLE; 2]);
        assert!(session.game_over);
    }

    #[test]
    fn test_goals_latch_and_complete() {
        let mut level = flat_level();
        level.goals.push((Element::Fire, Vec2::new(-2.0, 1.5)));
        level.goals.push((Element::Water, Vec2::new(2.0, 1.5)));
        let mut session = Session::new(&level).unwrap();

        session.step([InputFrame::IDLE; 2]);
        assert!(session.on_goal(FIRE));
        assert!(session.on_goal(WATER));
        assert!(session.complete);
    }

    #[test]
    fn test_wrong_goal_does_not_latch() {
        let mut level = flat_level();
        // Only water's goal exists, placed under fire
        level.goals.push((Element::Water, Vec2::new(-2.0, 1.5)));
        let mut session = Session::new(&level).unwrap();

        for _ in 0..10 {
            session.step([InputFrame::IDLE; 2]);
        }
        assert!(!session.on_goal(FIRE));
        assert!(!session.on_goal(WATER));
        assert!(!session.complete);
    }

    #[test]
    fn test_gem_counting_per_character() {
        let mut level = flat_level();
        level.gems.push((Element::Fire, Vec2::new(-2.0, 1.2)));
        level.gems.push((Element::Water, Vec2::new(2.0, 1.2)));
        let mut session = Session::new(&level).unwrap();

        for _ in 0..5 {
            session.step([InputFrame::IDLE; 2]);
        }
        assert_eq!(session.gems_collected, [1, 1]);
        assert!(session.world.gems().is_empty());
    }

    #[test]
    fn test_button_opens_door_in_session() {
        let mut level = flat_level();
        // Button directly under fire's spawn
        level.buttons.push(crate::game::level::TriggerDef {
            center: Vec2::new(-2.0, 0.6),
            size: Vec2::new(2.0, 0.2),
            links: vec!["door1".into()],
        });
        level.doors.push(crate::game::level::DoorDef {
            id: "door1".into(),
            center: Vec2::new(5.0, 2.0),
            size: Vec2::new(1.0, 5.0),
        });
        let mut session = Session::new(&level).unwrap();

        // Land on the button
        for _ in 0..10 {
            session.step([InputFrame::IDLE; 2]);
        }
        assert!(session.world.doors()[0].open);
        assert!(session.events().iter().all(|e| *e != SimEvent::Jump));

        // Walking away releases it
        for _ in 0..120 {
            session.step([InputFrame::left(), InputFrame::IDLE]);
        }
        assert!(!session.world.doors()[0].open);
    }

    #[test]
    fn test_restart_resets_state() {
        let mut level = flat_level();
        level.gems.push((Element::Fire, Vec2::new(-2.0, 1.2)));
        let mut session = Session::new(&level).unwrap();
        for _ in 0..5 {
            session.step([InputFrame::IDLE; 2]);
        }
        assert_eq!(session.gems_collected[FIRE], 1);

        session.restart(&level).unwrap();
        assert_eq!(session.gems_collected, [0, 0]);
        assert_eq!(session.world.gems().len(), 1);
        assert_eq!(session.players[FIRE].position, level.fire_spawn);
        assert!(!session.complete && !session.game_over);
    }

    #[test]
    fn test_no_steps_after_game_over() {
        let mut session = Session::new(&flat_level()).unwrap();
        session.game_over = true;
        let before = session.players[FIRE].position;
        session.step([InputFrame::right(); 2]);
        assert_eq!(session.players[FIRE].position, before);
    }
}
