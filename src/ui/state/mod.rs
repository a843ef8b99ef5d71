// SPDX-License-Identifier: MPL-2.0
//! Page-level UI state.
//!
//! Small state machines for the parts of the page that react to clicks and
//! scrolling outside the catalog section.

pub mod anchor;
pub mod header;
pub mod menu;
pub mod reveal;

pub use anchor::{anchor_scroll_target, configured_anchor_scroll_target};
pub use header::HeaderState;
pub use menu::{MenuIcon, MobileMenu};
pub use reveal::RevealTracker;
