use crate::AnchorReference;
use crate::heights::HeightStore;

/// Translates scroll movement into anchor movement.
///
/// The anchor walks item by item through the height table; unknown heights are pinned to the
/// estimate as they are crossed. Walks are clamped to `[0, len - 1]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct AnchorTracker {
    anchor: AnchorReference,
}

impl AnchorTracker {
    pub(crate) fn get(&self) -> AnchorReference {
        self.anchor
    }

    pub(crate) fn set(&mut self, anchor: AnchorReference) {
        self.anchor = anchor;
    }

    pub(crate) fn nudge(&mut self, delta: i64) {
        self.anchor.offset += delta;
    }

    /// Walks the anchor until its offset lies within its item, clamping at either end.
    pub(crate) fn normalize(&mut self, heights: &mut HeightStore) {
        let count = heights.len();
        if count == 0 {
            self.anchor = AnchorReference::HEAD;
            return;
        }
        if self.anchor.index >= count {
            self.anchor = AnchorReference::new(count - 1, 0);
        }
        if self.anchor.offset < 0 {
            self.walk_backward(heights);
        } else {
            self.walk_forward(heights);
        }
    }

    fn walk_forward(&mut self, heights: &mut HeightStore) {
        let last = heights.len() - 1;
        let AnchorReference {
            mut index,
            mut offset,
        } = self.anchor;
        while index < last {
            let h = heights.touch(index) as i64;
            if offset < h {
                break;
            }
            offset -= h;
            index += 1;
        }
        if index == last && offset >= heights.touch(last) as i64 {
            // Past the end of the content: pin to the tail.
            self.anchor = AnchorReference::new(last, 0);
            return;
        }
        self.anchor = AnchorReference::new(index, offset);
    }

    fn walk_backward(&mut self, heights: &mut HeightStore) {
        let AnchorReference {
            mut index,
            mut offset,
        } = self.anchor;
        while offset < 0 {
            if index == 0 {
                // At or above the top of the content: pin to the head.
                self.anchor = AnchorReference::HEAD;
                return;
            }
            index -= 1;
            offset += heights.touch(index) as i64;
        }
        self.anchor = AnchorReference::new(index, offset);
    }
}
