use anchorlist::VisibleWindow;

/// A host-side size-change subscription (for example a `ResizeObserver`).
///
/// The controller calls `observe`/`unobserve` as items enter and leave the mounted window, and
/// `disconnect` exactly once when the owning [`Subscription`] is released.
pub trait SizeObserver {
    fn observe(&mut self, index: usize);
    fn unobserve(&mut self, index: usize);
    fn disconnect(&mut self);
}

/// A scoped size-observer subscription.
///
/// Dropping it disconnects the observer, whatever the state of the host's rendering lifecycle.
/// The set of watched indexes always equals the last window it was synced to.
#[derive(Debug)]
pub struct Subscription<O: SizeObserver> {
    observer: O,
    watched: VisibleWindow,
}

impl<O: SizeObserver> Subscription<O> {
    /// Acquires the subscription and starts watching every index in `window`.
    pub fn new(mut observer: O, window: VisibleWindow) -> Self {
        for index in window.first..window.last {
            observer.observe(index);
        }
        Self { observer, watched: window }
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn watched(&self) -> VisibleWindow {
        self.watched
    }

    /// Unobserves indexes that left `window`, then observes the ones that entered it.
    pub(crate) fn sync(&mut self, window: VisibleWindow) {
        let old = self.watched;
        if old == window {
            return;
        }
        for index in old.first..old.last {
            if !window.contains(index) {
                self.observer.unobserve(index);
            }
        }
        for index in window.first..window.last {
            if !old.contains(index) {
                self.observer.observe(index);
            }
        }
        self.watched = window;
    }
}

impl<O: SizeObserver> Drop for Subscription<O> {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
