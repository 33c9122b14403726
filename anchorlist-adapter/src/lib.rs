//! Adapter utilities for the `anchorlist` crate.
//!
//! The `anchorlist` crate is UI-agnostic and owns only the scroll math and state. This crate
//! provides the small, framework-neutral pieces a host needs around it:
//!
//! - A scoped size-observer subscription that follows the mounted window
//! - A data source hook for paging in more items when the viewport nears the end
//! - A [`Controller`] wiring both to the engine
//!
//! This crate is intentionally framework-agnostic (no DOM or toolkit bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod observer;
mod source;


pub use controller::Controller;
pub use observer::{SizeObserver, Subscription};
pub use source::{DataSource, Exhausted};
