// SPDX-License-Identifier: MPL-2.0
//! Core catalog types for the domain layer.
//!
//! These types represent pure data without any presentation dependencies.
//! Widths are CSS pixels as measured by the view layer.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Checks that a width or gap is a finite, non-negative pixel length.
///
/// # Errors
///
/// Returns [`Error::InvalidDimensions`] naming `what` otherwise.
pub fn validate_length(what: &str, value: f32) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidDimensions(format!(
            "{what} must be a non-negative number, got {value}"
        )))
    }
}

// =============================================================================
// Category
// =============================================================================

/// A category label attached to catalog items and tabs.
///
/// The distinguished label [`Category::ALL`] selects every item of a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    /// Label of the catch-all category.
    pub const ALL: &'static str = "all";

    /// Creates a category from a label. Surrounding whitespace is ignored.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into().trim().to_string())
    }

    /// Returns the catch-all category.
    #[must_use]
    pub fn all() -> Self {
        Self(Self::ALL.to_string())
    }

    /// Returns `true` if this is the catch-all category.
    #[must_use]
    pub fn is_all(&self) -> bool {
        self.0 == Self::ALL
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Category {
    fn default() -> Self {
        Self::all()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Category {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl From<String> for Category {
    fn from(label: String) -> Self {
        Self::new(label)
    }
}

// =============================================================================
// CatalogItem
// =============================================================================

/// One card of a catalog (a training course, a shop product, ...).
///
/// The width is the rendered width reported by the view layer; it is the
/// only mutable part of an item and may be re-measured on resize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    /// Stable identifier of the card.
    pub id: String,
    /// Category the card is filed under.
    pub category: Category,
    /// Rendered width in pixels.
    #[serde(default, rename = "width")]
    pub display_width: f32,
}

impl CatalogItem {
    #[must_use]
    pub fn new(id: impl Into<String>, category: impl Into<Category>, display_width: f32) -> Self {
        Self {
            id: id.into(),
            category: category.into(),
            display_width,
        }
    }

    /// Returns `true` if this item is shown when `category` is selected.
    #[must_use]
    pub fn matches(&self, category: &Category) -> bool {
        category.is_all() || &self.category == category
    }

    /// Checks the stored width.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if it is negative or not finite.
    pub fn validate(&self) -> Result<()> {
        validate_length(&format!("width of item '{}'", self.id), self.display_width)
    }

    /// Records a new measured width. The old width is kept if the new one is
    /// rejected.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if `width` is negative or not finite.
    pub fn remeasure(&mut self, width: f32) -> Result<()> {
        validate_length(&format!("width of item '{}'", self.id), width)?;
        self.display_width = width;
        Ok(())
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// A named collection of items with its set of known categories.
///
/// The catch-all category is always part of the known set and comes first.
/// Category order otherwise follows registration order, with duplicates dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    name: String,
    items: Vec<CatalogItem>,
    categories: Vec<Category>,
}

impl Catalog {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        items: Vec<CatalogItem>,
        categories: impl IntoIterator<Item = Category>,
    ) -> Self {
        let mut known = vec![Category::all()];
        for category in categories {
            if !known.contains(&category) {
                known.push(category);
            }
        }

        Self {
            name: name.into(),
            items,
            categories: known,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns all items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    /// Returns the known categories, catch-all first.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    #[must_use]
    pub fn has_category(&self, category: &Category) -> bool {
        self.categories.contains(category)
    }

    /// Returns the items shown for `category`, preserving insertion order.
    pub fn filter<'a, 'b>(&'a self, category: &'b Category) -> impl Iterator<Item = &'a CatalogItem> + use<'a, 'b> {
        self.items.iter().filter(move |item| item.matches(category))
    }

    /// Returns a mutable reference to the item with the given id.
    pub fn item_mut(&mut self, id: &str) -> Option<&mut CatalogItem> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// =============================================================================
// FilterState
// =============================================================================

/// Selected category of one catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    /// Name of the catalog this selection belongs to.
    pub catalog_name: String,
    /// Currently selected category, always one of the catalog's categories.
    pub selected_category: Category,
}

impl FilterState {
    /// Initial state of a freshly registered catalog.
    #[must_use]
    pub fn initial(catalog_name: impl Into<String>) -> Self {
        Self {
            catalog_name: catalog_name.into(),
            selected_category: Category::all(),
        }
    }

    /// Returns `true` if a category other than the catch-all is selected.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.selected_category.is_all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trainings() -> Catalog {
        Catalog::new(
            "trainings",
            vec![
                CatalogItem::new("html", "web", 320.0),
                CatalogItem::new("pentest", "security", 320.0),
                CatalogItem::new("css", "web", 320.0),
            ],
            ["web".into(), "security".into()],
        )
    }

    #[test]
    fn category_trims_whitespace() {
        assert_eq!(Category::new("  web "), Category::new("web"));
    }

    #[test]
    fn default_category_is_all() {
        assert!(Category::default().is_all());
        assert_eq!(Category::default().as_str(), "all");
    }

    #[test]
    fn catalog_always_knows_all_first() {
        let catalog = trainings();
        assert_eq!(
            catalog.categories(),
            &[Category::all(), "web".into(), "security".into()]
        );
    }

    #[test]
    fn catalog_drops_duplicate_categories() {
        let catalog = Catalog::new(
            "shop",
            Vec::new(),
            ["all".into(), "laptops".into(), "laptops".into()],
        );
        assert_eq!(catalog.categories(), &[Category::all(), "laptops".into()]);
    }

    #[test]
    fn filter_preserves_insertion_order() {
        let catalog = trainings();
        let web = Category::new("web");
        let ids: Vec<_> = catalog.filter(&web).map(|item| item.id.as_str()).collect();
        assert_eq!(ids, vec!["html", "css"]);
    }

    #[test]
    fn filter_all_returns_every_item() {
        let catalog = trainings();
        let all = Category::all();
        assert_eq!(catalog.filter(&all).count(), 3);
    }

    #[test]
    fn item_mut_allows_remeasure() {
        let mut catalog = trainings();
        catalog
            .item_mut("css")
            .expect("item exists")
            .remeasure(280.0)
            .unwrap();
        assert_eq!(catalog.items()[2].display_width, 280.0);
        assert!(catalog.item_mut("missing").is_none());
    }

    #[test]
    fn remeasure_rejects_negative_and_nan_widths() {
        let mut item = CatalogItem::new("html", "web", 320.0);
        for width in [-1.0, f32::NAN, f32::INFINITY] {
            assert!(matches!(
                item.remeasure(width),
                Err(Error::InvalidDimensions(_))
            ));
        }
        assert_eq!(item.display_width, 320.0);
    }

    #[test]
    fn validate_accepts_zero_width() {
        assert!(CatalogItem::new("html", "web", 0.0).validate().is_ok());
        assert!(CatalogItem::new("html", "web", -5.0).validate().is_err());
    }

    #[test]
    fn initial_filter_state_is_inactive() {
        let state = FilterState::initial("shop");
        assert!(!state.is_active());
        assert_eq!(state.catalog_name, "shop");
    }
}
