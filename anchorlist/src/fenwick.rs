use alloc::vec::Vec;
use core::cmp;

/// Prefix sums over per-index heights.
///
/// `tree[i]` stores the sum of the last `lsb(i)` values ending at `i` (1-indexed).
#[derive(Clone, Debug, Default)]
pub(crate) struct Fenwick {
    tree: Vec<u64>,
    total: u64,
}

impl Fenwick {
    /// Builds a tree of `n` entries that all hold `value`.
    pub(crate) fn filled(n: usize, value: u32) -> Self {
        let value = value as u64;
        let mut tree = alloc::vec![0u64; n + 1];
        for (i, slot) in tree.iter_mut().enumerate().skip(1) {
            *slot = value.saturating_mul(lsb(i) as u64);
        }
        Self {
            tree,
            total: value.saturating_mul(n as u64),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.tree.len().saturating_sub(1)
    }

    /// Appends `value` as a new last entry in `O(log n)`.
    pub(crate) fn push(&mut self, value: u64) {
        let new_len = self.len() + 1;
        let covered_from = new_len - lsb(new_len);
        let before = self
            .prefix_sum(new_len - 1)
            .saturating_sub(self.prefix_sum(covered_from));
        self.tree.push(before.saturating_add(value));
        self.total = self.total.saturating_add(value);
    }

    pub(crate) fn add(&mut self, index: usize, delta: i64) {
        let n = self.len();
        if index >= n || delta == 0 {
            return;
        }
        self.total = apply_delta(self.total, delta);
        let mut i = index + 1;
        while i <= n {
            self.tree[i] = apply_delta(self.tree[i], delta);
            i += lsb(i);
        }
    }

    /// Sum of the first `count` entries.
    pub(crate) fn prefix_sum(&self, count: usize) -> u64 {
        let mut i = cmp::min(count, self.len());
        let mut sum = 0u64;
        while i > 0 {
            sum = sum.saturating_add(self.tree[i]);
            i &= i - 1;
        }
        sum
    }

    pub(crate) fn total(&self) -> u64 {
        self.total
    }
}

fn apply_delta(value: u64, delta: i64) -> u64 {
    if delta >= 0 {
        value.saturating_add(delta as u64)
    } else {
        debug_assert!(value >= delta.unsigned_abs(), "Fenwick underflow");
        value.saturating_sub(delta.unsigned_abs())
    }
}

fn lsb(i: usize) -> usize {
    i & i.wrapping_neg()
}
