use anchorlist::{AnchorList, AnchorListOptions, Effects};

use crate::{DataSource, SizeObserver, Subscription};

/// A framework-neutral controller that wraps an [`AnchorList`] and keeps the host-side
/// resources around it in step with the engine.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `activate` when the list mounts and `deactivate` when it unmounts
/// - `on_scroll` when the viewport reports a new `scrollTop`
/// - `on_resize` / `on_resize_many` when the observer reports item sizes
///
/// After every call the observer watches exactly the engine's mounted window, and a near-end
/// signal has already pulled from the data source. The returned [`Effects`] still carry any
/// corrective scroll write the host has to apply.
#[derive(Debug)]
pub struct Controller<O: SizeObserver, D> {
    list: AnchorList,
    subscription: Option<Subscription<O>>,
    source: D,
}

impl<O: SizeObserver, D: DataSource> Controller<O, D> {
    pub fn new(options: AnchorListOptions, source: D) -> Self {
        Self::from_list(AnchorList::new(options), source)
    }

    pub fn from_list(list: AnchorList, source: D) -> Self {
        Self {
            list,
            subscription: None,
            source,
        }
    }

    pub fn list(&self) -> &AnchorList {
        &self.list
    }

    pub fn source(&self) -> &D {
        &self.source
    }

    pub fn source_mut(&mut self) -> &mut D {
        &mut self.source
    }

    pub fn is_active(&self) -> bool {
        self.subscription.is_some()
    }

    pub fn subscription(&self) -> Option<&Subscription<O>> {
        self.subscription.as_ref()
    }

    /// Acquires the size-observer subscription for the current window.
    ///
    /// A previous subscription is released first.
    pub fn activate(&mut self, observer: O) {
        self.deactivate();
        let window = self.list.window();
        alog!(debug, first = window.first, last = window.last, "activate");
        self.subscription = Some(Subscription::new(observer, window));
    }

    /// Releases the subscription, disconnecting the observer. No-op when inactive.
    pub fn deactivate(&mut self) {
        if self.subscription.take().is_some() {
            alog!(debug, "deactivate");
        }
    }

    pub fn on_scroll(&mut self, scroll_top: i64) -> Effects {
        let effects = self.list.on_scroll(scroll_top);
        self.settle(effects)
    }

    /// Forwards one size notification. Ignored while inactive.
    pub fn on_resize(&mut self, index: usize, height: u32) -> Effects {
        if !self.is_active() {
            alog!(trace, index, "size notification while inactive");
            return Effects::default();
        }
        let effects = self.list.on_item_resize(index, height);
        self.settle(effects)
    }

    /// Forwards a batch of size notifications delivered together by the observer.
    pub fn on_resize_many(&mut self, sizes: impl IntoIterator<Item = (usize, u32)>) -> Effects {
        if !self.is_active() {
            alog!(trace, "size notifications while inactive");
            return Effects::default();
        }
        let effects = self.list.measure_many(sizes);
        self.settle(effects)
    }

    fn settle(&mut self, effects: Effects) -> Effects {
        if effects.near_end {
            let added = self.source.load_more();
            alog!(debug, added, count = self.list.count(), "load_more");
            self.list.append(added);
        }
        if let Some(subscription) = &mut self.subscription {
            subscription.sync(self.list.window());
        }
        effects
    }

    pub fn into_list(self) -> AnchorList {
        self.list
    }
}
