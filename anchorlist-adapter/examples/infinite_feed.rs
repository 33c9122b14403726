use std::collections::BTreeSet;

use anchorlist::AnchorListOptions;
use anchorlist_adapter::{Controller, SizeObserver};

/// Stands in for a platform `ResizeObserver`: remembers which items it watches.
#[derive(Debug, Default)]
struct PrintingObserver {
    watched: BTreeSet<usize>,
}

impl SizeObserver for PrintingObserver {
    fn observe(&mut self, index: usize) {
        self.watched.insert(index);
    }

    fn unobserve(&mut self, index: usize) {
        self.watched.remove(&index);
    }

    fn disconnect(&mut self) {
        println!("observer disconnected ({} items were watched)", self.watched.len());
        self.watched.clear();
    }
}

fn rendered_height(index: usize) -> u32 {
    // Posts of varying length.
    60 + ((index * 131) % 9) as u32 * 20
}

fn main() {
    // Example: an infinite feed that pages in 40 posts at a time, up to 200.
    let mut loaded = 40usize;
    let source = move || {
        if loaded >= 200 {
            return 0;
        }
        loaded += 40;
        println!("  loading page: {loaded} posts");
        40
    };

    let mut c = Controller::new(
        AnchorListOptions::new(40, 720).with_estimated_height(100),
        source,
    );
    c.activate(PrintingObserver::default());

    let mut scroll_top = 0i64;
    for _ in 0..40 {
        let w = c.list().window();
        let effects = c.on_resize_many((w.first..w.last).map(|i| (i, rendered_height(i))));
        if let Some(top) = effects.scroll_to {
            scroll_top = top;
        }

        let max = c.list().scroll_height() as i64 - c.list().viewport_height() as i64;
        scroll_top = (scroll_top + 900).min(max.max(0));
        let effects = c.on_scroll(scroll_top);
        if let Some(top) = effects.scroll_to {
            scroll_top = top;
        }

        println!(
            "scrollTop={scroll_top} count={} window={:?} watched={}",
            c.list().count(),
            c.list().window(),
            c.subscription().map_or(0, |s| s.observer().watched.len())
        );
    }

    c.deactivate();
}
