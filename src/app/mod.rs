// SPDX-License-Identifier: MPL-2.0
//! Event dispatch for the catalog section of the page.
//!
//! [`Showcase`] owns the filter controller, one carousel navigator per
//! catalog and a [`CatalogView`] adapter. Every external trigger goes through
//! [`Showcase::handle`], which updates the core state and then asks the view
//! to redraw the affected parts.

mod message;

pub use message::ShowcaseEvent;

use crate::application::port::CatalogView;
use crate::application::query::{CarouselNavigator, CatalogFilterController, Direction};
use crate::config::Config;
use crate::domain::catalog::{validate_length, CatalogItem, Category};
use crate::error::{Error, Result};
use indexmap::IndexMap;

/// Layout values the view layer would otherwise read from global styles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShowcaseContext {
    /// Space between two cards, in pixels.
    pub gap: f32,
    /// Carousel width assumed until the first resize event.
    pub container_width: f32,
}

impl ShowcaseContext {
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            gap: config.carousel_gap(),
            container_width: config.container_width(),
        }
    }
}

impl Default for ShowcaseContext {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// Catalog tabs and carousels of the page, bound to a view adapter.
#[derive(Debug)]
pub struct Showcase<V> {
    filters: CatalogFilterController,
    carousels: IndexMap<String, CarouselNavigator>,
    context: ShowcaseContext,
    view: V,
}

impl<V: CatalogView> Showcase<V> {
    pub fn new(context: ShowcaseContext, view: V) -> Self {
        Self {
            filters: CatalogFilterController::new(),
            carousels: IndexMap::new(),
            context,
            view,
        }
    }

    /// Applies one external event and redraws what it touched.
    ///
    /// # Errors
    ///
    /// Returns the core error unchanged: [`Error::UnknownCatalog`],
    /// [`Error::UnknownCategory`] or [`Error::InvalidDimensions`]. The view is
    /// not redrawn when an event fails.
    pub fn handle(&mut self, event: ShowcaseEvent) -> Result<()> {
        let catalog = event.catalog().to_string();
        let result = match event {
            ShowcaseEvent::CatalogUpdated {
                catalog,
                items,
                categories,
            } => self.update_catalog(&catalog, items, categories),
            ShowcaseEvent::TabSelected { catalog, category } => {
                self.select_tab(&catalog, &category)
            }
            ShowcaseEvent::Arrow { catalog, direction } => self.scroll(&catalog, direction),
            ShowcaseEvent::Resized {
                catalog,
                container_width,
            } => self.resize(&catalog, container_width),
            ShowcaseEvent::ItemMeasured {
                catalog,
                item_id,
                width,
            } => self.remeasure(&catalog, &item_id, width),
        };

        if let Err(err) = &result {
            tracing::warn!(catalog = %catalog, error = %err, "showcase event rejected");
        }
        result
    }

    fn update_catalog(
        &mut self,
        catalog: &str,
        items: Vec<CatalogItem>,
        categories: Vec<Category>,
    ) -> Result<()> {
        validate_length("gap", self.context.gap)?;
        for item in &items {
            item.validate()?;
        }

        self.filters.register_catalog(catalog, items, categories);
        let container_width = self.context.container_width;
        self.carousels
            .entry(catalog.to_string())
            .or_insert_with(|| {
                let mut navigator = CarouselNavigator::new();
                navigator.on_resize(container_width);
                navigator
            });

        self.render_tabs(catalog)?;
        self.refresh_items(catalog)
    }

    /// Selection and carousel change together: the new strip is configured on
    /// a copy first, so a rejected tab leaves both untouched.
    fn select_tab(&mut self, catalog: &str, category: &Category) -> Result<()> {
        let (item_width, count) = strip_metrics(&self.filters.preview_category(catalog, category)?);
        let mut staged = carousel_mut(&mut self.carousels, catalog)?.clone();
        staged.reset();
        staged.configure(
            staged.state().container_width,
            item_width,
            self.context.gap,
            count,
        )?;

        let items = self.filters.select_category(catalog, category)?;
        tracing::debug!(catalog, category = %category, visible = items.len(), "tab selected");
        self.view.render_items(catalog, &items);
        let controls = staged.controls();
        self.carousels.insert(catalog.to_string(), staged);

        self.render_tabs(catalog)?;
        self.view.render_navigation(catalog, controls);
        Ok(())
    }

    fn scroll(&mut self, catalog: &str, direction: Direction) -> Result<()> {
        let carousel = carousel_mut(&mut self.carousels, catalog)?;
        let offset = carousel.step(direction);
        tracing::trace!(catalog, ?direction, offset, "carousel step");
        let controls = carousel.controls();
        self.view.render_navigation(catalog, controls);
        Ok(())
    }

    fn resize(&mut self, catalog: &str, container_width: f32) -> Result<()> {
        let carousel = carousel_mut(&mut self.carousels, catalog)?;
        carousel.on_resize(container_width);
        let controls = carousel.controls();
        self.view.render_navigation(catalog, controls);
        Ok(())
    }

    fn remeasure(&mut self, catalog: &str, item_id: &str, width: f32) -> Result<()> {
        validate_length("gap", self.context.gap)?;
        if !self.filters.remeasure(catalog, item_id, width)? {
            tracing::debug!(catalog, item_id, "measured item is not part of the catalog");
            return Ok(());
        }
        self.refresh_items(catalog)
    }

    /// Redraws the visible cards and reconfigures the carousel around them,
    /// keeping the current offset clamped to the new bounds.
    fn refresh_items(&mut self, catalog: &str) -> Result<()> {
        let items = self.filters.visible_items(catalog)?;
        let (item_width, count) = strip_metrics(&items);
        let carousel = carousel_mut(&mut self.carousels, catalog)?;
        let container_width = carousel.state().container_width;
        carousel.configure(container_width, item_width, self.context.gap, count)?;
        let controls = carousel.controls();

        self.view.render_items(catalog, &items);
        self.view.render_navigation(catalog, controls);
        Ok(())
    }

    fn render_tabs(&mut self, catalog: &str) -> Result<()> {
        let selected = self.filters.current_selection(catalog)?.selected_category;
        let categories = self.filters.catalog(catalog)?.categories();
        self.view.render_tabs(catalog, categories, &selected);
        Ok(())
    }

    #[must_use]
    pub fn filters(&self) -> &CatalogFilterController {
        &self.filters
    }

    /// Returns the carousel of a registered catalog.
    #[must_use]
    pub fn carousel(&self, catalog: &str) -> Option<&CarouselNavigator> {
        self.carousels.get(catalog)
    }

    #[must_use]
    pub fn context(&self) -> ShowcaseContext {
        self.context
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn into_view(self) -> V {
        self.view
    }
}

/// Card width (taken from the first visible card) and card count of a strip.
fn strip_metrics(items: &[&CatalogItem]) -> (f32, usize) {
    let item_width = items.first().map_or(0.0, |item| item.display_width);
    (item_width, items.len())
}

fn carousel_mut<'a>(
    carousels: &'a mut IndexMap<String, CarouselNavigator>,
    catalog: &str,
) -> Result<&'a mut CarouselNavigator> {
    carousels
        .get_mut(catalog)
        .ok_or_else(|| Error::UnknownCatalog(catalog.to_string()))
}
