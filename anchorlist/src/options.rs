use alloc::sync::Arc;

/// A callback fired when the viewport comes within `near_end_threshold` pixels of the end of
/// the known content.
///
/// It fires at most once per threshold crossing; it is re-armed when the viewport leaves the
/// threshold zone or when more items are appended.
pub type NearEndCallback = Arc<dyn Fn() + Send + Sync>;

/// Configuration for [`crate::AnchorList`].
///
/// Options are fixed for the lifetime of an engine. Callbacks are stored in `Arc`s so cloning is
/// cheap.
pub struct AnchorListOptions {
    /// Number of items known when the engine is created.
    pub count: usize,
    /// Height of the scroll viewport (`clientHeight`).
    pub viewport_height: u32,
    /// Height assumed for any item that has not been measured yet.
    pub estimated_height: u32,
    /// Items mounted beyond the strictly visible range, on each side.
    pub buffer_size: usize,
    /// Distance in pixels from the end of the content at which `on_near_end` fires.
    pub near_end_threshold: u32,
    pub on_near_end: Option<NearEndCallback>,
}

impl AnchorListOptions {
    pub const DEFAULT_ESTIMATED_HEIGHT: u32 = 100;
    pub const DEFAULT_BUFFER_SIZE: usize = 3;
    pub const DEFAULT_NEAR_END_THRESHOLD: u32 = 10;

    pub fn new(count: usize, viewport_height: u32) -> Self {
        Self {
            count,
            viewport_height,
            estimated_height: Self::DEFAULT_ESTIMATED_HEIGHT,
            buffer_size: Self::DEFAULT_BUFFER_SIZE,
            near_end_threshold: Self::DEFAULT_NEAR_END_THRESHOLD,
            on_near_end: None,
        }
    }

    pub fn with_estimated_height(mut self, estimated_height: u32) -> Self {
        self.estimated_height = estimated_height;
        self
    }

    pub fn with_buffer_size(mut self, buffer_size: usize) -> Self {
        self.buffer_size = buffer_size;
        self
    }

    pub fn with_near_end_threshold(mut self, near_end_threshold: u32) -> Self {
        self.near_end_threshold = near_end_threshold;
        self
    }

    pub fn with_on_near_end(
        mut self,
        on_near_end: Option<impl Fn() + Send + Sync + 'static>,
    ) -> Self {
        self.on_near_end = on_near_end.map(|f| -> NearEndCallback { Arc::new(f) });
        self
    }

    /// Number of items that fit the viewport at the estimated height, rounded up.
    ///
    /// This does not adapt to measured heights: lists whose real items are much shorter than
    /// the estimate mount fewer items than the viewport could show, and rely on the buffer.
    /// Never less than one, so the anchor item is always mounted.
    pub fn visible_count(&self) -> usize {
        let estimate = self.estimated_height.max(1);
        (self.viewport_height.div_ceil(estimate) as usize).max(1)
    }
}

impl Clone for AnchorListOptions {
    fn clone(&self) -> Self {
        Self {
            count: self.count,
            viewport_height: self.viewport_height,
            estimated_height: self.estimated_height,
            buffer_size: self.buffer_size,
            near_end_threshold: self.near_end_threshold,
            on_near_end: self.on_near_end.clone(),
        }
    }
}

impl core::fmt::Debug for AnchorListOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AnchorListOptions")
            .field("count", &self.count)
            .field("viewport_height", &self.viewport_height)
            .field("estimated_height", &self.estimated_height)
            .field("buffer_size", &self.buffer_size)
            .field("near_end_threshold", &self.near_end_threshold)
            .finish_non_exhaustive()
    }
}
