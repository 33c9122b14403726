use alloc::vec::Vec;

use crate::fenwick::Fenwick;

/// Per-index height table.
///
/// Entries start unknown and read as the fixed estimate until a height is recorded, either by a
/// measurement or by an anchor walk pinning the estimate. Sums over the table (with unknown
/// entries counted at the estimate) are kept in a Fenwick tree so both `total` and `prefix`
/// stay logarithmic while the list grows.
#[derive(Clone, Debug)]
pub(crate) struct HeightStore {
    estimate: u32,
    heights: Vec<Option<u32>>,
    measured: Vec<bool>,
    sums: Fenwick,
    measured_count: usize,
}

impl HeightStore {
    pub(crate) fn new(estimate: u32, count: usize) -> Self {
        Self {
            estimate,
            heights: alloc::vec![None; count],
            measured: alloc::vec![false; count],
            sums: Fenwick::filled(count, estimate),
            measured_count: 0,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.heights.len()
    }

    /// Recorded height for `index`, or the estimate when unknown (or out of range).
    pub(crate) fn get(&self, index: usize) -> u32 {
        self.known_height(index).unwrap_or(self.estimate)
    }

    pub(crate) fn known_height(&self, index: usize) -> Option<u32> {
        self.heights.get(index).copied().flatten()
    }

    pub(crate) fn is_measured(&self, index: usize) -> bool {
        self.measured.get(index).copied().unwrap_or(false)
    }

    pub(crate) fn measured_count(&self) -> usize {
        self.measured_count
    }

    /// Like [`Self::get`], but pins the estimate into the table when the entry is unknown so
    /// later passes see a concrete number.
    pub(crate) fn touch(&mut self, index: usize) -> u32 {
        match self.heights.get(index) {
            Some(Some(h)) => *h,
            Some(None) => {
                self.store(index, self.estimate);
                self.estimate
            }
            None => self.estimate,
        }
    }

    /// Records (or overwrites) the measured height of `index`. Returns the change in total
    /// extent.
    pub(crate) fn set(&mut self, index: usize, height: u32) -> i64 {
        let Some(flag) = self.measured.get_mut(index) else {
            return 0;
        };
        if !*flag {
            *flag = true;
            self.measured_count += 1;
        }
        self.store(index, height)
    }

    fn store(&mut self, index: usize, height: u32) -> i64 {
        let prev = self.heights[index].replace(height).unwrap_or(self.estimate);
        let delta = height as i64 - prev as i64;
        self.sums.add(index, delta);
        delta
    }

    pub(crate) fn grow(&mut self, new_len: usize) {
        while self.heights.len() < new_len {
            self.heights.push(None);
            self.measured.push(false);
            self.sums.push(self.estimate as u64);
        }
        debug_assert_eq!(self.heights.len(), self.sums.len());
    }

    /// Sum of known heights plus the estimate for every unknown index.
    pub(crate) fn total(&self) -> u64 {
        self.sums.total()
    }

    /// Sum of the heights of indexes `0..count`.
    pub(crate) fn prefix(&self, count: usize) -> u64 {
        self.sums.prefix_sum(count)
    }
}
