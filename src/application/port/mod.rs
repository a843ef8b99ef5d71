// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! These traits use only domain and query types, so the application layer
//! stays independent of whatever draws the page.
//!
//! # Available Ports
//!
//! - [`view`]: Rendering of catalog tabs, cards and carousel arrows

pub mod view;

pub use view::CatalogView;
