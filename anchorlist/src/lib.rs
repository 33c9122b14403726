//! A headless, anchor-based virtual list engine for items of unknown, variable height.
//!
//! For host-side glue (size-observer subscriptions, data source bridging), see the
//! `anchorlist-adapter` crate.
//!
//! Only a small window of items around the viewport is mounted at a time. Item heights are
//! discovered lazily, as mounted items report their rendered size; until then every item is
//! assumed to have a fixed estimated height. The engine keeps the visible content stable while
//! estimates are replaced by measurements by tracking an anchor (an item index plus the pixel
//! distance scrolled into it) instead of a raw scroll offset.
//!
//! It is UI-agnostic. The host is expected to:
//! - forward scroll events and size notifications for mounted items
//! - mount the items in [`AnchorList::window`] at the tops reported by [`AnchorList::offset`]
//! - size its content sentinel to [`AnchorList::scroll_height`]
//! - write back any corrective scroll position returned in [`Effects`]
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod anchor;
mod engine;
mod fenwick;
mod heights;
mod offsets;
mod options;
mod resize;
mod scroll;
mod state;
mod types;
mod window;


pub use engine::AnchorList;
pub use options::{AnchorListOptions, NearEndCallback};
pub use state::EngineSnapshot;
pub use types::{AnchorReference, Effects, PositionedItem, VisibleWindow};
