// Example: lazily measured heights and anchor-preserving scroll corrections.
use anchorlist::{AnchorList, AnchorListOptions};

fn true_height(index: usize) -> u32 {
    // Something the engine can only learn by mounting the item.
    40 + ((index * 37) % 7) as u32 * 25
}

fn main() {
    let mut list = AnchorList::new(
        AnchorListOptions::new(200, 600)
            .with_estimated_height(80)
            .with_buffer_size(2)
            .with_on_near_end(Some(|| println!("  -> near end, load more"))),
    );

    for target in [0i64, 1200, 2500, 900, 15_000] {
        let mut scroll_top = target.min(list.scroll_height() as i64 - 600);
        let effects = list.on_scroll(scroll_top);
        if let Some(top) = effects.scroll_to {
            scroll_top = top;
        }

        // The host mounts the window and reports every item's rendered size in one batch.
        let w = list.window();
        let effects = list.measure_many((w.first..w.last).map(|i| (i, true_height(i))));
        if let Some(top) = effects.scroll_to {
            println!("  corrective write: scrollTop {scroll_top} -> {top}");
            scroll_top = top;
        }

        println!(
            "scrollTop={scroll_top} anchor={:?} window={:?} scrollHeight={}",
            list.anchor(),
            list.window(),
            list.scroll_height()
        );
        list.for_each_mounted(|item| {
            if item.index == list.anchor().index {
                println!("  anchor item {} at top={} height={}", item.index, item.top, item.height);
            }
        });
    }

    println!("{:?}", list.snapshot());
}
