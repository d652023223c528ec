// Discrete per-tick outputs
//
// The simulation never calls back into presentation or audio code; it emits
// events into an ordered list the caller drains after each tick.

use super::collider::{Element, HazardKind};

/// Something that happened during a tick and may deserve a sound or effect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimEvent {
    /// A player left the ground
    Jump,
    /// A button was pressed or a lever flipped active
    Button,
}

/// Categorical outcome of one player's resolve pass, at most one per tick.
///
/// Collectible matches win over hazard/goal overlaps; falling out of the
/// world wins over everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TickOutcome {
    #[default]
    None,
    /// Collected a gem of the player's own element
    Gem(Element),
    /// Standing in a goal volume of the given element
    Goal(Element),
    /// Overlapping a liquid hazard (lethality is decided by the caller)
    Hazard(HazardKind),
    /// Fell below the kill plane
    FellOut,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_outcome_is_none() {
        assert_eq!(TickOutcome::default(), TickOutcome::None);
    }

    #[test]
    fn test_outcome_equality() {
        assert_eq!(TickOutcome::Gem(Element::Fire), TickOutcome::Gem(Element::Fire));
        assert_ne!(TickOutcome::Gem(Element::Fire), TickOutcome::Gem(Element::Water));
    }
}
