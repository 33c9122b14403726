use crate::{AnchorList, AnchorReference, Effects};

impl AnchorList {
    /// Handles a scroll event carrying the viewport's new `scrollTop`.
    ///
    /// The scroll delta moves the anchor; the anchor then walks item by item onto whatever item
    /// is now at the viewport top. Drift at either end of the content is corrected before the
    /// window is recomputed:
    /// - bottom: when the tail is mounted and ends above the current scroll height, the scroll
    ///   height shrinks to the tail's bottom edge and the anchor gives up the shortfall
    /// - top: when the first mounted item starts above zero, the scroll position is forced to
    ///   the accumulated height of the items above the anchor item and a full reconciliation
    ///   pass runs
    pub fn on_scroll(&mut self, scroll_top: i64) -> Effects {
        let delta = scroll_top - self.scroll_top;
        self.scroll_top = scroll_top;
        alog!(trace, scroll_top, delta, "on_scroll");

        self.tracker.nudge(delta);
        self.correct_bottom_drift();
        self.tracker.normalize(&mut self.heights);
        self.correct_top_drift();
        self.refresh_window();

        let near_end = self.check_near_end();
        self.take_effects(near_end)
    }

    fn correct_bottom_drift(&mut self) {
        let count = self.count();
        if count == 0 || self.window.last != count {
            return;
        }
        let last = count - 1;
        if !self.offsets.is_positioned(last) {
            return;
        }
        let Some(top) = self.offsets.get(last) else {
            return;
        };
        let extent = top + self.heights.get(last) as i64;
        let shortfall = self.scroll_height as i64 - extent;
        if shortfall <= 0 {
            return;
        }
        alog!(
            debug,
            extent,
            scroll_height = self.scroll_height,
            shortfall,
            "bottom drift: shrinking scroll height"
        );
        self.scroll_height = extent.max(0) as u64;
        self.tracker.nudge(-shortfall);
    }

    fn correct_top_drift(&mut self) {
        match self.offsets.get(self.window.first) {
            Some(top) if top < 0 => {}
            _ => return,
        }
        let anchor = self.tracker.get();
        let target = self.heights.prefix(anchor.index) as i64;
        alog!(
            debug,
            first = self.window.first,
            anchor_index = anchor.index,
            scroll_top = target,
            "top drift: forcing scroll position"
        );
        self.write_scroll(target);
        if target == 0 {
            self.tracker.set(AnchorReference::HEAD);
        }
        self.recompute_around(self.tracker.get());
    }

    /// Fires the near-end signal once per crossing of the threshold.
    fn check_near_end(&mut self) -> bool {
        let bottom = self.scroll_top + self.options().viewport_height as i64;
        let limit = self.scroll_height as i64 - self.options().near_end_threshold as i64;
        if bottom < limit {
            self.near_end_armed = true;
            return false;
        }
        if !self.near_end_armed {
            return false;
        }
        self.near_end_armed = false;
        alog!(
            debug,
            scroll_top = self.scroll_top,
            scroll_height = self.scroll_height,
            "near end"
        );
        if let Some(cb) = &self.options().on_near_end {
            cb();
        }
        true
    }
}
