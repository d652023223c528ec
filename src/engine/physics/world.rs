// Simulation world
//
// Owns every collider, box body and mechanism for the current level and runs
// the per-tick system passes. Players live outside the world and are passed
// in, mirroring the tick order the orchestrator enforces:
// mechanisms -> platforms -> rider sync -> per-player movement/collision.

use super::activation::ActivationGraph;
use super::box_body::{BoxBody, BOX_FRICTION, BOX_STOP_EPSILON};
use super::collider::{Collider, ColliderKind, Element, HazardKind};
use super::events::{SimEvent, TickOutcome};
use super::mechanism::{Button, Door, Lever};
use super::platform::{DriveMode, MovingPlatform, MAX_PLATFORM_STEP};
use super::player::{
    Player, ACCEL, CARRY_ACCEL_SCALE, CARRY_DAMP_LAMBDA, GRAVITY, JUMP_FORCE, KILL_PLANE_Y,
    MAX_FALL_SPEED, RUN_DAMP_LAMBDA,
};
use super::resolve::Axis;
use crate::core::math::damp;
use crate::engine::game_loop::FIXED_TIMESTEP;
use crate::engine::input::InputFrame;
use glam::Vec2;

/// Fixed horizontal bonus added when throwing a box
const THROW_POWER: f32 = 0.6;
/// Fixed upward bonus added when throwing a box
const THROW_LIFT: f32 = 0.35;
/// Below this carrier speed a throw uses the facing direction instead
const THROW_SPEED_FLOOR: f32 = 0.01;
/// Gap kept between a rider's feet and a platform's top surface
const RIDE_SURFACE_SKIN: f32 = 0.001;

/// Non-owning reference to whatever a player last landed on.
///
/// Plain indices into the world's registries; the referenced body may vanish
/// on level reload, in which case lookups degrade to "not riding".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RideRef {
    Platform(usize),
    Box(usize),
}

/// All mutable level state: colliders, box bodies and mechanisms.
///
/// Created when a level is loaded and torn down wholesale on reload; nothing
/// spawns mid-level except gems disappearing on collection.
#[derive(Debug, Default)]
pub struct PhysicsWorld {
    /// Static solid volumes
    pub(crate) solids: Vec<Collider>,
    /// Hazard and goal volumes, report-only (never resolved)
    pub(crate) zones: Vec<Collider>,
    /// Remaining collectibles
    pub(crate) gems: Vec<Collider>,
    pub(crate) buttons: Vec<Button>,
    pub(crate) levers: Vec<Lever>,
    pub(crate) doors: Vec<Door>,
    pub(crate) platforms: Vec<MovingPlatform>,
    pub(crate) boxes: Vec<BoxBody>,
}

impl PhysicsWorld {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop all level state
    pub fn clear(&mut self) {
        self.solids.clear();
        self.zones.clear();
        self.gems.clear();
        self.buttons.clear();
        self.levers.clear();
        self.doors.clear();
        self.platforms.clear();
        self.boxes.clear();
    }

    pub fn add_solid(&mut self, center: Vec2, size: Vec2) {
        self.solids
            .push(Collider::new(ColliderKind::Solid, center, size));
    }

    pub fn add_hazard(&mut self, kind: HazardKind, center: Vec2, size: Vec2) {
        self.zones
            .push(Collider::new(ColliderKind::Hazard(kind), center, size));
    }

    pub fn add_goal(&mut self, element: Element, center: Vec2, size: Vec2) {
        self.zones
            .push(Collider::new(ColliderKind::Goal(element), center, size));
    }

    pub fn add_gem(&mut self, element: Element, center: Vec2, size: Vec2) {
        self.gems
            .push(Collider::new(ColliderKind::Gem(element), center, size));
    }

    pub fn add_button(&mut self, center: Vec2, size: Vec2, links: Vec<String>) {
        let collider = Collider::new(ColliderKind::Button, center, size);
        self.buttons.push(Button::new(collider, links));
    }

    pub fn add_lever(&mut self, center: Vec2, size: Vec2, links: Vec<String>) {
        let collider = Collider::new(ColliderKind::Lever, center, size);
        self.levers.push(Lever::new(collider, links));
    }

    pub fn add_door(&mut self, id: impl Into<String>, center: Vec2, size: Vec2) {
        let collider = Collider::with_id(ColliderKind::Door, center, size, id);
        self.doors.push(Door::new(collider));
    }

    #[allow(clippy::too_many_arguments)]
    pub fn add_platform(
        &mut self,
        id: impl Into<String>,
        start: Vec2,
        end: Vec2,
        size: Vec2,
        speed: f32,
        active: bool,
        drive: DriveMode,
    ) {
        let collider = Collider::with_id(ColliderKind::MovingPlatform, start, size, id);
        self.platforms
            .push(MovingPlatform::new(collider, start, end, speed, active, drive));
    }

    pub fn add_box(&mut self, center: Vec2, size: Vec2) {
        let collider = Collider::new(ColliderKind::Box, center, size);
        self.boxes.push(BoxBody::new(collider));
    }

    /// Whether any button or lever links to this id (drive-mode selection)
    pub fn id_is_linked(&self, id: &str) -> bool {
        self.buttons
            .iter()
            .any(|b| b.links.iter().any(|l| l == id))
            || self.levers.iter().any(|l| l.links.iter().any(|l| l == id))
    }

    // Read access for the presentation layer

    pub fn solids(&self) -> &[Collider] {
        &self.solids
    }

    pub fn zones(&self) -> &[Collider] {
        &self.zones
    }

    pub fn doors(&self) -> &[Door] {
        &self.doors
    }

    pub fn buttons(&self) -> &[Button] {
        &self.buttons
    }

    pub fn levers(&self) -> &[Lever] {
        &self.levers
    }

    pub fn platforms(&self) -> &[MovingPlatform] {
        &self.platforms
    }

    pub fn boxes(&self) -> &[BoxBody] {
        &self.boxes
    }

    pub fn gems(&self) -> &[Collider] {
        &self.gems
    }

    /// Current activation state for a link id (rebuilt from trigger state)
    pub fn link_active(&self, id: &str) -> bool {
        self.build_activation().is_active(id)
    }

    fn build_activation(&self) -> ActivationGraph {
        let mut graph = ActivationGraph::new();
        for button in &self.buttons {
            if button.pressed {
                graph.press(&button.links);
            }
        }
        for lever in &self.levers {
            if lever.active {
                graph.flip(&lever.links);
            }
        }
        graph
    }

    /// Free-box dynamics: gravity, friction and axis-separated collision
    pub fn update_boxes(&mut self) {
        for i in 0..self.boxes.len() {
            if self.boxes[i].is_carried() {
                continue;
            }
            {
                let b = &mut self.boxes[i];
                b.velocity.y -= GRAVITY;
                if b.velocity.y < -MAX_FALL_SPEED {
                    b.velocity.y = -MAX_FALL_SPEED;
                }
                b.velocity.x *= BOX_FRICTION;
                if b.velocity.x.abs() < BOX_STOP_EPSILON {
                    b.velocity.x = 0.0;
                }
                let pos = b.position() + Vec2::new(b.velocity.x, 0.0);
                b.set_position(pos);
            }
            self.resolve_box_axis(i, Axis::X);
            {
                let b = &mut self.boxes[i];
                let pos = b.position() + Vec2::new(0.0, b.velocity.y);
                b.set_position(pos);
                b.on_ground = false;
            }
            self.resolve_box_axis(i, Axis::Y);
        }
    }

    /// Recompute every trigger signal and mechanism target state from the
    /// current body positions, then let doors and platforms sample the graph
    pub fn update_mechanisms(&mut self, players: &[Player], events: &mut Vec<SimEvent>) {
        // Buttons: pressed iff a player or box overlaps the trigger volume
        for i in 0..self.buttons.len() {
            let trigger = self.buttons[i].trigger_volume();
            let mut pressed = players.iter().any(|p| trigger.intersects(&p.aabb()));
            if !pressed {
                pressed = self
                    .boxes
                    .iter()
                    .any(|b| trigger.intersects(&b.collider.aabb));
            }
            if self.buttons[i].set_pressed(pressed) {
                events.push(SimEvent::Button);
            }
            self.buttons[i].animate();
        }

        // Levers: pendulum integration; activation edge shares the button sound
        for lever in &mut self.levers {
            if lever.update() {
                events.push(SimEvent::Button);
            }
        }

        let graph = self.build_activation();

        for door in &mut self.doors {
            let open = door
                .collider
                .id
                .as_deref()
                .is_some_and(|id| graph.is_active(id));
            door.set_open(open);
            door.animate();
        }

        for platform in &mut self.platforms {
            if platform.drive == DriveMode::LinkDriven {
                platform.active = platform
                    .collider
                    .id
                    .as_deref()
                    .is_some_and(|id| graph.is_active(id));
            }
        }
    }

    /// Advance platform kinematics one tick
    pub fn update_platforms(&mut self) {
        for platform in &mut self.platforms {
            platform.update();
        }
    }

    /// Reposition players standing on moving platforms: horizontal by the
    /// platform's clamped velocity, vertical pinned exactly to its top
    /// surface (never integrated, so a platform starting up can't launch a
    /// rider). Boxes are left to ordinary collision.
    pub fn sync_riders(&mut self, players: &mut [Player]) {
        for player in players.iter_mut() {
            let Some(RideRef::Platform(i)) = player.riding else {
                continue;
            };
            if !player.grounded {
                continue;
            }
            match self.platforms.get(i) {
                Some(platform) => {
                    let v = platform.velocity();
                    player.position.x += v.x.clamp(-MAX_PLATFORM_STEP, MAX_PLATFORM_STEP);
                    player.position.y =
                        platform.collider.aabb.max.y + player.half_height() + RIDE_SURFACE_SKIN;
                }
                None => player.riding = None,
            }
        }
    }

    /// One player's full movement/collision pass. Returns the categorical
    /// outcome read off the resolved position.
    pub fn update_player(
        &mut self,
        player: &mut Player,
        player_idx: usize,
        input: InputFrame,
        events: &mut Vec<SimEvent>,
    ) -> TickOutcome {
        // Pickup/throw on the input edge, not while held
        if player.pickup_edge(input.pickup) {
            self.handle_pickup(player, player_idx);
        }

        // Carried box trails the anchor above the carrier's head
        if let Some(b) = player.carrying {
            match self.boxes.get_mut(b) {
                Some(bx) if bx.carrier == Some(player_idx) => {
                    let anchor = player.position
                        + Vec2::new(0.0, player.half_height() + bx.half_height());
                    bx.follow_anchor(anchor);
                }
                _ => player.carrying = None,
            }
        }

        // Horizontal acceleration, heavier while carrying
        let accel_scale = if player.carrying.is_some() {
            CARRY_ACCEL_SCALE
        } else {
            1.0
        };
        if input.left {
            player.velocity.x -= ACCEL * accel_scale;
            player.facing = -1.0;
        }
        if input.right {
            player.velocity.x += ACCEL * accel_scale;
            player.facing = 1.0;
        }
        let lambda = if player.carrying.is_some() {
            CARRY_DAMP_LAMBDA
        } else {
            RUN_DAMP_LAMBDA
        };
        player.velocity.x = damp(player.velocity.x, 0.0, lambda, FIXED_TIMESTEP);

        // Gravity with terminal fall speed
        player.velocity.y -= GRAVITY;
        if player.velocity.y < -MAX_FALL_SPEED {
            player.velocity.y = -MAX_FALL_SPEED;
        }

        // Jump: grounded only, never while carrying; inherits the ride's
        // horizontal momentum exactly once
        if input.jump && player.grounded && player.carrying.is_none() {
            player.velocity.y = JUMP_FORCE;
            if player.try_jump_event() {
                events.push(SimEvent::Jump);
            }
            match player.riding {
                Some(RideRef::Platform(i)) => {
                    if let Some(p) = self.platforms.get(i) {
                        player.velocity.x += p.velocity().x;
                    }
                }
                Some(RideRef::Box(i)) => {
                    if let Some(b) = self.boxes.get(i) {
                        player.velocity.x += b.velocity.x;
                    }
                }
                None => {}
            }
            player.grounded = false;
            player.riding = None;
        }
        player.tick_cooldowns();

        // Axis-separated move and resolve
        player.position.x += player.velocity.x;
        self.resolve_player_axis(player, player_idx, Axis::X);

        player.position.y += player.velocity.y;
        player.grounded = false;
        self.resolve_player_axis(player, player_idx, Axis::Y);

        if !player.grounded {
            player.riding = None;
        }

        if player.position.y < KILL_PLANE_Y {
            return TickOutcome::FellOut;
        }

        // Report-only scans against the resolved position
        let sensor = player.sensor_aabb();

        if let Some(i) = self.gems.iter().position(|g| {
            g.kind == ColliderKind::Gem(player.element) && sensor.intersects(&g.aabb)
        }) {
            self.gems.remove(i);
            return TickOutcome::Gem(player.element);
        }

        for zone in &self.zones {
            if !sensor.intersects(&zone.aabb) {
                continue;
            }
            match zone.kind {
                ColliderKind::Hazard(kind) => return TickOutcome::Hazard(kind),
                ColliderKind::Goal(element) => return TickOutcome::Goal(element),
                _ => {}
            }
        }

        TickOutcome::None
    }

    /// Toggle between carrying and throwing on a pickup input edge
    fn handle_pickup(&mut self, player: &mut Player, player_idx: usize) {
        if let Some(b) = player.carrying {
            // Throw: double meaningful carrier speed plus a fixed bonus,
            // otherwise the bonus alone in the faced direction
            if let Some(bx) = self.boxes.get_mut(b) {
                let vx = if player.velocity.x.abs() > THROW_SPEED_FLOOR {
                    player.velocity.x * 2.0 + player.velocity.x.signum() * THROW_POWER
                } else {
                    THROW_POWER * player.facing
                };
                bx.release(Vec2::new(vx, THROW_LIFT));
            }
            player.carrying = None;
            return;
        }

        // Pick up the first free box in range
        let range = player.pickup_volume();
        for i in 0..self.boxes.len() {
            if self.boxes[i].is_carried() {
                continue;
            }
            if !range.intersects(&self.boxes[i].collider.aabb) {
                continue;
            }
            let anchor = player.position
                + Vec2::new(0.0, player.half_height() + self.boxes[i].half_height());
            self.boxes[i].grab(player_idx, anchor);
            player.carrying = Some(i);
            // Drop grounding so the carried box can't snap us upward
            player.grounded = false;
            player.riding = None;
            return;
        }
    }
}
