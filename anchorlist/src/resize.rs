use crate::{AnchorList, Effects};

impl AnchorList {
    /// Handles a size notification for a mounted item.
    ///
    /// The reconciliation pass always runs around the current anchor, not around `index`.
    /// Notifications that repeat a known size, or that refer to items outside the mounted
    /// window, change nothing.
    pub fn on_item_resize(&mut self, index: usize, height: u32) -> Effects {
        self.record_measurement(index, height);
        self.flush()
    }

    /// Applies several size notifications with a single reconciliation pass.
    pub fn measure_many(&mut self, measurements: impl IntoIterator<Item = (usize, u32)>) -> Effects {
        self.batch(|list| {
            for (index, height) in measurements {
                list.record_measurement(index, height);
            }
        })
    }

    /// Defers reconciliation until `f` returns.
    ///
    /// Size notifications delivered inside `f` only mark the engine dirty; one pass runs when
    /// the outermost batch closes. Effects of the deferred pass are returned from here.
    pub fn batch(&mut self, f: impl FnOnce(&mut Self)) -> Effects {
        self.batch_depth = self.batch_depth.saturating_add(1);
        f(self);
        debug_assert!(self.batch_depth > 0, "batch_depth underflow");
        self.batch_depth = self.batch_depth.saturating_sub(1);
        self.flush()
    }

    fn record_measurement(&mut self, index: usize, height: u32) {
        if index >= self.count() {
            alog!(warn, index, count = self.count(), "size notification for unknown index");
            return;
        }
        if !self.window.contains(index) {
            alog!(trace, index, "size notification for unmounted item ignored");
            return;
        }
        let prev = self.observed.insert(index, height);
        if prev == Some(height) && self.heights.known_height(index) == Some(height) {
            return;
        }
        alog!(trace, index, height, "on_item_resize");
        self.dirty = true;
    }

    fn flush(&mut self) -> Effects {
        if self.batch_depth > 0 {
            return Effects::default();
        }
        if core::mem::take(&mut self.dirty) {
            self.recompute_around(self.tracker.get());
            self.refresh_window();
        }
        self.take_effects(false)
    }
}
