// SPDX-License-Identifier: MPL-2.0
//! Catalog filtering query service.
//!
//! [`CatalogFilterController`] maps the selected tab of each catalog to the
//! visible subset of its items. It keeps exactly one category selected per
//! catalog and never touches the view: callers apply the returned items.

use crate::domain::catalog::{Catalog, CatalogItem, Category, FilterState};
use crate::error::{Error, Result};
use indexmap::IndexMap;

#[derive(Debug, Clone, PartialEq)]
struct CatalogEntry {
    catalog: Catalog,
    state: FilterState,
}

/// Owns every registered catalog and its current selection.
///
/// Catalogs are kept in registration order so tab strips render in the
/// order the page declared them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogFilterController {
    catalogs: IndexMap<String, CatalogEntry>,
}

impl CatalogFilterController {
    /// Creates a controller with no catalogs.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a catalog, or replaces the items and categories of an
    /// existing one.
    ///
    /// On re-registration the previous selection survives if the new
    /// category set still contains it; otherwise it falls back to `all`.
    pub fn register_catalog(
        &mut self,
        catalog_name: &str,
        items: Vec<CatalogItem>,
        categories: impl IntoIterator<Item = Category>,
    ) {
        let catalog = Catalog::new(catalog_name, items, categories);

        let state = match self.catalogs.get(catalog_name) {
            Some(previous) if catalog.has_category(&previous.state.selected_category) => {
                previous.state.clone()
            }
            Some(previous) => {
                tracing::debug!(
                    catalog = catalog_name,
                    dropped = %previous.state.selected_category,
                    "selected category no longer exists, resetting to all"
                );
                FilterState::initial(catalog_name)
            }
            None => FilterState::initial(catalog_name),
        };

        tracing::debug!(
            catalog = catalog_name,
            items = catalog.len(),
            categories = catalog.categories().len(),
            "catalog registered"
        );
        self.catalogs
            .insert(catalog_name.to_string(), CatalogEntry { catalog, state });
    }

    /// Selects `category` in the named catalog and returns the matching items
    /// in insertion order (every item for `all`).
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownCatalog`] if the catalog was never registered and
    /// [`Error::UnknownCategory`] if the category is not one of its categories.
    /// The selection is left untouched on error.
    pub fn select_category(
        &mut self,
        catalog_name: &str,
        category: &Category,
    ) -> Result<Vec<&CatalogItem>> {
        self.preview_category(catalog_name, category)?;

        let entry = self
            .catalogs
            .get_mut(catalog_name)
            .ok_or_else(|| Error::UnknownCatalog(catalog_name.to_string()))?;
        entry.state.selected_category = category.clone();
        let entry = &*entry;
        Ok(entry.catalog.filter(&entry.state.selected_category).collect())
    }

    /// Returns the current selection of the named catalog.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownCatalog`] if the catalog was never registered.
    pub fn current_selection(&self, catalog_name: &str) -> Result<FilterState> {
        self.entry(catalog_name).map(|entry| entry.state.clone())
    }

    /// Returns the items visible under the current selection without
    /// changing it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownCatalog`] if the catalog was never registered.
    pub fn visible_items(&self, catalog_name: &str) -> Result<Vec<&CatalogItem>> {
        let entry = self.entry(catalog_name)?;
        Ok(entry
            .catalog
            .filter(&entry.state.selected_category)
            .collect())
    }

    /// Returns the registered catalog.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownCatalog`] if the catalog was never registered.
    pub fn catalog(&self, catalog_name: &str) -> Result<&Catalog> {
        self.entry(catalog_name).map(|entry| &entry.catalog)
    }

    /// Records a new measured width for one item.
    ///
    /// Returns `Ok(false)` if no item has that id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownCatalog`] if the catalog was never registered and
    /// [`Error::InvalidDimensions`] if `width` is negative or not finite. The
    /// stored width is left untouched on error.
    pub fn remeasure(&mut self, catalog_name: &str, item_id: &str, width: f32) -> Result<bool> {
        let entry = self
            .catalogs
            .get_mut(catalog_name)
            .ok_or_else(|| Error::UnknownCatalog(catalog_name.to_string()))?;

        match entry.catalog.item_mut(item_id) {
            Some(item) => item.remeasure(width).map(|()| true),
            None => Ok(false),
        }
    }

    /// Returns the items `category` would show, without selecting it.
    ///
    /// # Errors
    ///
    /// Same as [`select_category`](Self::select_category).
    pub fn preview_category(
        &self,
        catalog_name: &str,
        category: &Category,
    ) -> Result<Vec<&CatalogItem>> {
        let entry = self.entry(catalog_name)?;
        if !entry.catalog.has_category(category) {
            return Err(Error::UnknownCategory {
                catalog: catalog_name.to_string(),
                category: category.to_string(),
            });
        }
        Ok(entry.catalog.filter(category).collect())
    }

    /// Names of all registered catalogs, in registration order.
    pub fn catalog_names(&self) -> impl Iterator<Item = &str> {
        self.catalogs.keys().map(String::as_str)
    }

    fn entry(&self, catalog_name: &str) -> Result<&CatalogEntry> {
        self.catalogs
            .get(catalog_name)
            .ok_or_else(|| Error::UnknownCatalog(catalog_name.to_string()))
    }
}
