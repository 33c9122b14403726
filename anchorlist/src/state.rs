use crate::{AnchorReference, VisibleWindow};

/// A lightweight, serializable snapshot of the engine's scroll state.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`. It is meant for
/// diagnostics and logging; there is no way to restore an engine from it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineSnapshot {
    pub count: usize,
    pub anchor: AnchorReference,
    pub window: VisibleWindow,
    pub scroll_top: i64,
    pub scroll_height: u64,
    /// Number of indexes with a recorded height.
    pub measured: usize,
}
