// SPDX-License-Identifier: MPL-2.0
//! Query services for the catalog section of the page.
//!
//! - [`CatalogFilterController`]: selected tab and visible subset per catalog
//! - [`CarouselNavigator`]: scroll offset and arrow state per carousel

pub mod carousel;
pub mod filter;

pub use carousel::{CarouselNavigator, CarouselState, Direction, NavigationControls};
pub use filter::CatalogFilterController;
