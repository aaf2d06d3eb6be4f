//! The incremental flippable-site index: an ordered sequence plus a
//! reverse map, giving O(1) amortized insert/remove and uniform sampling.

use std::collections::HashMap;

use super::anchor::Anchor;

/// Ordered set of currently flippable anchors.
#[derive(Clone, Debug, Default)]
pub struct FlippableIndex {
    slots: Vec<Anchor>,
    positions: HashMap<Anchor, usize>,
}

impl FlippableIndex {
    #[must_use]
    pub fn new() -> FlippableIndex {
        FlippableIndex {
            slots: Vec::new(),
            positions: HashMap::new(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    #[must_use]
    pub fn contains(&self, anchor: Anchor) -> bool {
        self.positions.contains_key(&anchor)
    }

    /// Anchor at a given slot, for uniform sampling by index.
    #[must_use]
    pub fn get(&self, slot: usize) -> Option<Anchor> {
        self.slots.get(slot).copied()
    }

    /// Insert `anchor` if absent. No-op if already present.
    pub fn insert(&mut self, anchor: Anchor) {
        if self.positions.contains_key(&anchor) {
            return;
        }
        let slot = self.slots.len();
        self.slots.push(anchor);
        self.positions.insert(anchor, slot);
    }

    /// Remove `anchor` if present, via swap-remove against the tail.
    pub fn remove(&mut self, anchor: Anchor) {
        let Some(slot) = self.positions.remove(&anchor) else {
            return;
        };
        let last = self.slots.len() - 1;
        self.slots.swap(slot, last);
        self.slots.pop();
        if slot < self.slots.len() {
            self.positions.insert(self.slots[slot], slot);
        }
    }

    /// Sync membership for `anchor` to `should_be_present`.
    pub fn set(&mut self, anchor: Anchor, should_be_present: bool) {
        if should_be_present {
            self.insert(anchor);
        } else {
            self.remove(anchor);
        }
    }
}
