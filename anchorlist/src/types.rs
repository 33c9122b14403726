/// The engine's reference point: the item at the top of the viewport, and how far the viewport
/// has scrolled past that item's top edge.
///
/// After every event `offset` lies in `[0, height(index))`, except at the clamped ends of the
/// list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnchorReference {
    pub index: usize,
    pub offset: i64,
}

impl AnchorReference {
    pub const HEAD: Self = Self {
        index: 0,
        offset: 0,
    };

    pub fn new(index: usize, offset: i64) -> Self {
        Self { index, offset }
    }
}

/// The contiguous slice of indexes to mount.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisibleWindow {
    pub first: usize,
    pub last: usize, // exclusive
}

impl VisibleWindow {
    pub fn is_empty(&self) -> bool {
        self.first >= self.last
    }

    pub fn len(&self) -> usize {
        self.last.saturating_sub(self.first)
    }

    pub fn contains(&self, index: usize) -> bool {
        self.first <= index && index < self.last
    }
}

/// A mounted item as the render collaborator should place it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PositionedItem {
    pub index: usize,
    /// Top edge in scroll-space.
    pub top: i64,
    /// Recorded height, or the estimate when the item has not been measured yet.
    pub height: u32,
}

impl PositionedItem {
    pub fn bottom(&self) -> i64 {
        self.top + self.height as i64
    }
}

/// What the host has to do after an event was handled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use]
pub struct Effects {
    /// A corrective scroll position to write back to the viewport.
    ///
    /// The engine already treats this value as the current scroll position, so the scroll
    /// event the write provokes is a no-op.
    pub scroll_to: Option<i64>,
    /// The near-end threshold was crossed by this event.
    pub near_end: bool,
}

impl Effects {
    pub fn is_noop(&self) -> bool {
        self.scroll_to.is_none() && !self.near_end
    }
}
