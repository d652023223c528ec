// Mechanism activation graph
//
// Buttons and levers publish signals keyed by link id; doors and platforms
// sample them. The graph is rebuilt from scratch every tick, so it is a pure
// function of the current frame's trigger state.

use std::collections::{HashMap, HashSet};

/// Per-tick activation state for all link ids.
///
/// Button contributions to an id combine with OR; lever contributions with
/// parity (XOR), so a pair of flipped levers cancels out. An id is active if
/// either source says so.
#[derive(Debug, Default)]
pub struct ActivationGraph {
    /// Ids with at least one pressed button
    button_or: HashSet<String>,
    /// Count of active levers per id
    lever_counts: HashMap<String, u32>,
}

impl ActivationGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a pressed button controlling `ids`
    pub fn press(&mut self, ids: &[String]) {
        for id in ids {
            self.button_or.insert(id.clone());
        }
    }

    /// Record an active lever controlling `ids`
    pub fn flip(&mut self, ids: &[String]) {
        for id in ids {
            *self.lever_counts.entry(id.clone()).or_insert(0) += 1;
        }
    }

    /// `button-OR(id) OR lever-XOR(id)`
    pub fn is_active(&self, id: &str) -> bool {
        let button = self.button_or.contains(id);
        let lever = self.lever_counts.get(id).copied().unwrap_or(0) % 2 == 1;
        button || lever
    }
}
