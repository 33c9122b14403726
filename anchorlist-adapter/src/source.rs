/// Where more items come from when the viewport nears the end of the list.
pub trait DataSource {
    /// Loads the next batch and returns how many items were appended to the end of the data.
    ///
    /// Returning `0` means nothing more is available right now; the list is left unchanged.
    fn load_more(&mut self) -> usize;
}

impl<F> DataSource for F
where
    F: FnMut() -> usize,
{
    fn load_more(&mut self) -> usize {
        self()
    }
}

/// A data source that never produces more items.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Exhausted;

impl DataSource for Exhausted {
    fn load_more(&mut self) -> usize {
        0
    }
}
