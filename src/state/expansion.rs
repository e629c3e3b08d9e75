//! Expand/collapse state of dashboard list items

use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    Registration,
    Partnership,
}

/// Which items show their full detail. Keyed by item id, so it survives
/// list reloads.
#[derive(Debug, Clone, Default)]
pub struct ExpansionState {
    expanded: HashSet<(ItemKind, String)>,
}

impl ExpansionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip an item; returns whether it is now expanded
    pub fn toggle(&mut self, kind: ItemKind, id: &str) -> bool {
        let key = (kind, id.to_string());
        if self.expanded.remove(&key) {
            false
        } else {
            self.expanded.insert(key);
            true
        }
    }

    pub fn is_expanded(&self, kind: ItemKind, id: &str) -> bool {
        self.expanded.contains(&(kind, id.to_string()))
    }
}
