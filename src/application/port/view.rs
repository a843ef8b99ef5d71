// SPDX-License-Identifier: MPL-2.0
//! Catalog view port definition.
//!
//! This module defines the [`CatalogView`] trait. A browser binding, a
//! terminal renderer or a test recorder implements it; the core only ever
//! calls these three methods and never inspects what they draw.

use crate::application::query::NavigationControls;
use crate::domain::catalog::{CatalogItem, Category};

/// Renders the state of one or more catalogs.
///
/// Calls arrive synchronously from [`Showcase::handle`](crate::app::Showcase::handle),
/// one event at a time.
pub trait CatalogView {
    /// Draws the tab strip of `catalog` and highlights `selected`.
    fn render_tabs(&mut self, catalog: &str, categories: &[Category], selected: &Category);

    /// Draws the visible cards of `catalog`, in order.
    fn render_items(&mut self, catalog: &str, items: &[&CatalogItem]);

    /// Applies the scroll offset and arrow enablement of `catalog`.
    fn render_navigation(&mut self, catalog: &str, controls: NavigationControls);
}

impl<V: CatalogView + ?Sized> CatalogView for &mut V {
    fn render_tabs(&mut self, catalog: &str, categories: &[Category], selected: &Category) {
        (**self).render_tabs(catalog, categories, selected);
    }

    fn render_items(&mut self, catalog: &str, items: &[&CatalogItem]) {
        (**self).render_items(catalog, items);
    }

    fn render_navigation(&mut self, catalog: &str, controls: NavigationControls) {
        (**self).render_navigation(catalog, controls);
    }
}
