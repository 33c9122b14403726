use alloc::vec::Vec;

use crate::heights::HeightStore;

/// Per-index start coordinate in scroll-space.
///
/// Entries written by a reconciliation pass are marked positioned; the rest are estimates
/// that may be stale until their item gets mounted and measured. `offsets[0]` is kept at zero
/// by the engine after every pass.
#[derive(Clone, Debug)]
pub(crate) struct OffsetStore {
    offsets: Vec<i64>,
    positioned: Vec<bool>,
}

impl OffsetStore {
    /// Lays out `heights.len()` entries back to back starting at zero.
    pub(crate) fn estimated(heights: &HeightStore) -> Self {
        let mut store = Self {
            offsets: Vec::with_capacity(heights.len()),
            positioned: Vec::with_capacity(heights.len()),
        };
        store.grow(heights);
        store
    }

    pub(crate) fn len(&self) -> usize {
        self.offsets.len()
    }

    pub(crate) fn get(&self, index: usize) -> Option<i64> {
        self.offsets.get(index).copied()
    }

    pub(crate) fn is_positioned(&self, index: usize) -> bool {
        self.positioned.get(index).copied().unwrap_or(false)
    }

    pub(crate) fn first(&self) -> i64 {
        self.offsets.first().copied().unwrap_or(0)
    }

    pub(crate) fn set(&mut self, index: usize, offset: i64) {
        if let Some(slot) = self.offsets.get_mut(index) {
            *slot = offset;
            self.positioned[index] = true;
        }
    }

    pub(crate) fn mark_stale(&mut self, index: usize) {
        if let Some(flag) = self.positioned.get_mut(index) {
            *flag = false;
        }
    }

    /// Moves every entry, positioned or not, by `delta`.
    pub(crate) fn shift(&mut self, delta: i64) {
        for offset in &mut self.offsets {
            *offset += delta;
        }
    }

    /// Extends the table to `heights.len()` entries, each estimated from its predecessor.
    pub(crate) fn grow(&mut self, heights: &HeightStore) {
        while self.offsets.len() < heights.len() {
            let next = match self.offsets.len() {
                0 => 0,
                n => self.offsets[n - 1] + heights.get(n - 1) as i64,
            };
            self.offsets.push(next);
            self.positioned.push(false);
        }
    }
}
