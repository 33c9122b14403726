use core::cmp;

use crate::VisibleWindow;

/// Derives the mounted window from the anchor index.
///
/// `visible_count` is computed once from the viewport height and the estimated height and does
/// not follow measurements.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct WindowCalculator {
    visible_count: usize,
    buffer: usize,
}

impl WindowCalculator {
    pub(crate) fn new(visible_count: usize, buffer: usize) -> Self {
        Self {
            visible_count,
            buffer,
        }
    }

    pub(crate) fn visible_count(&self) -> usize {
        self.visible_count
    }

    pub(crate) fn window(&self, anchor_index: usize, count: usize) -> VisibleWindow {
        let span = self
            .visible_count
            .saturating_add(self.buffer.saturating_mul(2));
        let first = cmp::min(anchor_index.saturating_sub(self.buffer), count);
        let last = cmp::min(count, first.saturating_add(span));
        VisibleWindow { first, last }
    }
}
