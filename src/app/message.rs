// SPDX-License-Identifier: MPL-2.0
//! Events delivered to the showcase by the hosting page.

use crate::application::query::Direction;
use crate::domain::catalog::{CatalogItem, Category};

/// External triggers consumed by [`Showcase::handle`](super::Showcase::handle).
///
/// Each variant names the catalog it targets; the two catalogs of the page
/// (trainings and shop) are driven independently.
#[derive(Debug, Clone, PartialEq)]
pub enum ShowcaseEvent {
    /// Catalog content was loaded or replaced.
    CatalogUpdated {
        catalog: String,
        items: Vec<CatalogItem>,
        categories: Vec<Category>,
    },
    /// A category tab was clicked.
    TabSelected { catalog: String, category: Category },
    /// A carousel arrow was clicked.
    Arrow { catalog: String, direction: Direction },
    /// The carousel viewport changed width.
    Resized { catalog: String, container_width: f32 },
    /// A card reported a new rendered width.
    ItemMeasured {
        catalog: String,
        item_id: String,
        width: f32,
    },
}

impl ShowcaseEvent {
    /// Name of the catalog the event targets.
    #[must_use]
    pub fn catalog(&self) -> &str {
        match self {
            Self::CatalogUpdated { catalog, .. }
            | Self::TabSelected { catalog, .. }
            | Self::Arrow { catalog, .. }
            | Self::Resized { catalog, .. }
            | Self::ItemMeasured { catalog, .. } => catalog,
        }
    }
}
