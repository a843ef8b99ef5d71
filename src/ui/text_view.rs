// SPDX-License-Identifier: MPL-2.0
//! Plain-text [`CatalogView`] adapter used by the command-line demo.

use crate::application::port::CatalogView;
use crate::application::query::NavigationControls;
use crate::domain::catalog::{CatalogItem, Category};
use crate::i18n::I18n;
use std::io::Write;

/// Writes one line per render call to any [`Write`] sink.
///
/// Write failures are logged and otherwise ignored: the view has no way to
/// report them back through the port.
#[derive(Debug)]
pub struct TextView<'a, W> {
    out: W,
    i18n: &'a I18n,
}

impl<'a, W: Write> TextView<'a, W> {
    pub fn new(out: W, i18n: &'a I18n) -> Self {
        Self { out, i18n }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, text: &str) {
        if let Err(err) = writeln!(self.out, "{text}") {
            tracing::warn!(error = %err, "failed to write view output");
        }
    }

    fn catalog_title(&self, catalog: &str) -> String {
        let key = format!("catalog-{catalog}");
        let title = self.i18n.tr(&key);
        if title.starts_with("MISSING:") {
            catalog.to_string()
        } else {
            title
        }
    }

    fn tab_label(&self, category: &Category) -> String {
        if category.is_all() {
            self.i18n.tr("tab-all")
        } else {
            category.to_string()
        }
    }
}

impl<W: Write> CatalogView for TextView<'_, W> {
    fn render_tabs(&mut self, catalog: &str, categories: &[Category], selected: &Category) {
        let tabs: Vec<String> = categories
            .iter()
            .map(|category| {
                let label = self.tab_label(category);
                if category == selected {
                    format!("[{label}]")
                } else {
                    label
                }
            })
            .collect();
        let title = self.catalog_title(catalog);
        self.line(&format!("{title}: {}", tabs.join(" ")));
    }

    fn render_items(&mut self, catalog: &str, items: &[&CatalogItem]) {
        let ids: Vec<&str> = items.iter().map(|item| item.id.as_str()).collect();
        let title = self.catalog_title(catalog);
        self.line(&format!("{title} ({}): {}", items.len(), ids.join(", ")));
    }

    fn render_navigation(&mut self, catalog: &str, controls: NavigationControls) {
        let previous = if controls.can_scroll_backward {
            format!("< {}", self.i18n.tr("carousel-previous"))
        } else {
            String::from("  -")
        };
        let next = if controls.can_scroll_forward {
            format!("{} >", self.i18n.tr("carousel-next"))
        } else {
            String::from("- ")
        };
        let current = format!("{:.0}", controls.offset);
        let total = format!("{:.0}", controls.max_offset);
        let position = self.i18n.tr_with_args(
            "carousel-position",
            &[("current", current.as_str()), ("total", total.as_str())],
        );
        let title = self.catalog_title(catalog);
        self.line(&format!("{title}: {previous} | {position} | {next}"));
    }
}
