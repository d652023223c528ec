// Typed axis-aligned bounding volumes

use glam::Vec2;

/// Elemental affinity shared by players, goals and gems
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    Fire,
    Water,
}

/// Liquid hazard kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HazardKind {
    Lava,
    Water,
    Acid,
}

/// Semantic classification of a collider volume.
///
/// The kind never changes after creation; only the volume's position does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColliderKind {
    Solid,
    MovingPlatform,
    Button,
    Lever,
    Door,
    Box,
    Hazard(HazardKind),
    Goal(Element),
    Gem(Element),
}

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        let half = size * 0.5;
        Aabb {
            min: center - half,
            max: center + half,
        }
    }

    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Same box with the top face raised by `amount` (button trigger volumes)
    pub fn extended_up(&self, amount: f32) -> Aabb {
        Aabb {
            min: self.min,
            max: self.max + Vec2::new(0.0, amount),
        }
    }
}

/// A typed volume used for overlap testing.
///
/// Static volumes are computed once at level load; volumes attached to moving
/// bodies are recomputed from the owner's position whenever it moves.
#[derive(Debug, Clone)]
pub struct Collider {
    pub kind: ColliderKind,
    pub aabb: Aabb,
    pub width: f32,
    pub height: f32,
    /// Stable identifier used as an activation-link target (doors, platforms)
    pub id: Option<String>,
}

impl Collider {
    pub fn new(kind: ColliderKind, center: Vec2, size: Vec2) -> Self {
        Collider {
            kind,
            aabb: Aabb::from_center_size(center, size),
            width: size.x,
            height: size.y,
            id: None,
        }
    }

    pub fn with_id(kind: ColliderKind, center: Vec2, size: Vec2, id: impl Into<String>) -> Self {
        let mut c = Collider::new(kind, center, size);
        c.id = Some(id.into());
        c
    }

    /// Recompute the volume around a new center position
    pub fn recenter(&mut self, center: Vec2) {
        self.aabb = Aabb::from_center_size(center, Vec2::new(self.width, self.height));
    }

    pub fn center(&self) -> Vec2 {
        self.aabb.center()
    }
}
