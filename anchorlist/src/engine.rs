use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use crate::anchor::AnchorTracker;
use crate::heights::HeightStore;
use crate::offsets::OffsetStore;
use crate::window::WindowCalculator;
use crate::{
    AnchorListOptions, AnchorReference, Effects, EngineSnapshot, PositionedItem, VisibleWindow,
};

/// A headless virtual list for items whose heights are only known once they are mounted.
///
/// The engine owns all of its state. The host drives it with three kinds of input:
/// - scroll events ([`Self::on_scroll`]) carrying the viewport's new `scrollTop`
/// - size notifications ([`Self::on_item_resize`], [`Self::measure_many`]) for mounted items
/// - data growth ([`Self::append`])
///
/// After each input the host reads back the mounted [`VisibleWindow`], the scroll-space top of
/// every mounted item, the total [`Self::scroll_height`], and applies any corrective scroll
/// write reported in the returned [`Effects`].
///
/// The scroll position is tracked as an [`AnchorReference`]: the item at the viewport top plus
/// the distance scrolled into it. Heights are reconciled outward from that anchor, so the anchor
/// item stays where it is on screen when other items turn out to have a different height than
/// estimated.
#[derive(Clone, Debug)]
pub struct AnchorList {
    options: AnchorListOptions,
    windows: WindowCalculator,

    pub(crate) heights: HeightStore,
    pub(crate) offsets: OffsetStore,
    /// Latest size reported for each mounted item.
    pub(crate) observed: BTreeMap<usize, u32>,
    pub(crate) tracker: AnchorTracker,
    pub(crate) window: VisibleWindow,

    pub(crate) scroll_top: i64,
    pub(crate) scroll_height: u64,
    pub(crate) near_end_armed: bool,
    pending_scroll: Option<i64>,

    pub(crate) batch_depth: usize,
    pub(crate) dirty: bool,
}

impl AnchorList {
    pub fn new(options: AnchorListOptions) -> Self {
        let heights = HeightStore::new(options.estimated_height.max(1), options.count);
        let offsets = OffsetStore::estimated(&heights);
        let windows = WindowCalculator::new(options.visible_count(), options.buffer_size);
        let window = windows.window(0, options.count);
        alog!(
            debug,
            count = options.count,
            viewport_height = options.viewport_height,
            estimated_height = options.estimated_height,
            visible_count = windows.visible_count(),
            "AnchorList::new"
        );
        Self {
            scroll_height: heights.total(),
            options,
            windows,
            heights,
            offsets,
            observed: BTreeMap::new(),
            tracker: AnchorTracker::default(),
            window,
            scroll_top: 0,
            near_end_armed: true,
            pending_scroll: None,
            batch_depth: 0,
            dirty: false,
        }
    }

    pub fn options(&self) -> &AnchorListOptions {
        &self.options
    }

    pub fn count(&self) -> usize {
        self.heights.len()
    }

    pub fn visible_count(&self) -> usize {
        self.windows.visible_count()
    }

    pub fn viewport_height(&self) -> u32 {
        self.options.viewport_height
    }

    pub fn anchor(&self) -> AnchorReference {
        self.tracker.get()
    }

    pub fn window(&self) -> VisibleWindow {
        self.window
    }

    /// The last scroll position the engine processed or wrote.
    pub fn scroll_top(&self) -> i64 {
        self.scroll_top
    }

    /// Current estimate of the total scrollable extent (the content sentinel height).
    pub fn scroll_height(&self) -> u64 {
        self.scroll_height
    }

    /// Scroll-space top of `index`. Entries outside the mounted window may be stale estimates.
    pub fn offset(&self, index: usize) -> Option<i64> {
        self.offsets.get(index)
    }

    /// Recorded height of `index`, or the estimate when it has not been measured.
    pub fn height(&self, index: usize) -> Option<u32> {
        (index < self.count()).then(|| self.heights.get(index))
    }

    pub fn is_measured(&self, index: usize) -> bool {
        self.heights.is_measured(index)
    }

    /// Whether the offset of `index` was derived from measurements by the latest
    /// reconciliation pass that reached it.
    pub fn is_positioned(&self, index: usize) -> bool {
        self.offsets.is_positioned(index)
    }

    pub fn item(&self, index: usize) -> Option<PositionedItem> {
        let top = self.offsets.get(index)?;
        Some(PositionedItem {
            index,
            top,
            height: self.heights.get(index),
        })
    }

    /// Iterates over the mounted items in index order, without allocations.
    pub fn for_each_mounted(&self, mut f: impl FnMut(PositionedItem)) {
        for index in self.window.first..self.window.last {
            if let Some(item) = self.item(index) {
                f(item);
            }
        }
    }

    /// Collects the mounted items into `out` (clears `out` first).
    pub fn collect_mounted(&self, out: &mut Vec<PositionedItem>) {
        out.clear();
        self.for_each_mounted(|item| out.push(item));
    }

    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            count: self.count(),
            anchor: self.anchor(),
            window: self.window,
            scroll_top: self.scroll_top,
            scroll_height: self.scroll_height,
            measured: self.heights.measured_count(),
        }
    }

    /// Appends `additional` items at the end of the list.
    ///
    /// New items start unmeasured; their offsets are estimated from the current last item.
    pub fn append(&mut self, additional: usize) {
        if additional == 0 {
            return;
        }
        let count = self.count().saturating_add(additional);
        alog!(debug, additional, count, "append");
        self.heights.grow(count);
        self.offsets.grow(&self.heights);
        debug_assert_eq!(self.offsets.len(), self.heights.len());
        self.scroll_height = self.heights.total();
        self.near_end_armed = true;
        self.refresh_window();
    }

    /// Reconciliation pass: re-derives heights and offsets of the mounted items outward from
    /// `anchor`, then restores `offset[0] == 0`.
    ///
    /// The anchor item is placed where the viewport says it is (`scroll_top - anchor.offset`).
    /// Each walk stops at the first item without a live measurement; that item is marked stale
    /// rather than guessed.
    pub(crate) fn recompute_around(&mut self, anchor: AnchorReference) {
        let count = self.count();
        if count == 0 {
            return;
        }
        let a = anchor.index.min(count - 1);
        if let Some(&h) = self.observed.get(&a) {
            self.heights.set(a, h);
        }
        self.offsets.set(a, self.scroll_top - anchor.offset);

        let mut i = a + 1;
        while i < count {
            let Some(&h) = self.observed.get(&i) else {
                self.offsets.mark_stale(i);
                break;
            };
            self.heights.set(i, h);
            let top = self.offsets.get(i - 1).unwrap_or(0) + self.heights.get(i - 1) as i64;
            self.offsets.set(i, top);
            i += 1;
        }

        let mut i = a;
        while i > 0 {
            let j = i - 1;
            let Some(&h) = self.observed.get(&j) else {
                self.offsets.mark_stale(j);
                break;
            };
            self.heights.set(j, h);
            let top = self.offsets.get(i).unwrap_or(0) - h as i64;
            self.offsets.set(j, top);
            i = j;
        }

        let drift = self.offsets.first();
        if drift != 0 {
            self.offsets.shift(-drift);
            let target = (self.scroll_top - drift).max(0);
            let anchor_top = self.offsets.get(a).unwrap_or(0);
            alog!(debug, drift, scroll_top = target, "recompute_around: re-anchored offsets at zero");
            self.tracker.set(AnchorReference::new(a, target - anchor_top));
            self.write_scroll(target);
        }

        self.tracker.normalize(&mut self.heights);
        self.scroll_height = self.heights.total();
    }

    /// Moves the engine's idea of the scroll position and queues the matching host write.
    pub(crate) fn write_scroll(&mut self, target: i64) {
        if target == self.scroll_top {
            return;
        }
        alog!(debug, from = self.scroll_top, to = target, "corrective scroll write");
        self.scroll_top = target;
        self.pending_scroll = Some(target);
    }

    /// Recomputes the mounted window from the anchor. Measurements of items that left the
    /// window are dropped; those items are no longer measurable.
    pub(crate) fn refresh_window(&mut self) {
        let window = self.windows.window(self.tracker.get().index, self.count());
        if window == self.window {
            return;
        }
        alog!(
            trace,
            first = window.first,
            last = window.last,
            "window changed"
        );
        self.window = window;
        self.observed.retain(|index, _| window.contains(*index));
    }

    pub(crate) fn take_effects(&mut self, near_end: bool) -> Effects {
        Effects {
            scroll_to: self.pending_scroll.take(),
            near_end,
        }
    }

    #[cfg(test)]
    pub(crate) fn force_offset(&mut self, index: usize, offset: i64) {
        self.offsets.set(index, offset);
    }
}
