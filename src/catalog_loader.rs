// SPDX-License-Identifier: MPL-2.0
//! Loading catalog definitions from TOML files.
//!
//! ```toml
//! [[catalog]]
//! name = "trainings"
//! categories = ["web", "security"]
//!
//! [[catalog.items]]
//! id = "html-css"
//! category = "web"
//! width = 320.0
//! ```

use crate::app::ShowcaseEvent;
use crate::domain::catalog::{CatalogItem, Category};
use crate::error::{Error, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CatalogFile {
    #[serde(default, rename = "catalog")]
    pub catalogs: Vec<CatalogDefinition>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CatalogDefinition {
    pub name: String,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub items: Vec<CatalogItem>,
}

impl CatalogDefinition {
    /// Event that registers this catalog with a showcase.
    #[must_use]
    pub fn into_event(self) -> ShowcaseEvent {
        ShowcaseEvent::CatalogUpdated {
            catalog: self.name,
            items: self.items,
            categories: self.categories,
        }
    }
}

impl CatalogFile {
    /// Parses catalog definitions from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Catalog`] if the text is not a valid catalog file, two
    /// catalogs share a name, or an item width is negative or not finite.
    pub fn parse(content: &str) -> Result<Self> {
        let file: Self = toml::from_str(content).map_err(|e| Error::Catalog(e.to_string()))?;

        for (index, catalog) in file.catalogs.iter().enumerate() {
            if file.catalogs[..index]
                .iter()
                .any(|other| other.name == catalog.name)
            {
                return Err(Error::Catalog(format!(
                    "catalog '{}' is defined twice",
                    catalog.name
                )));
            }
            for item in &catalog.items {
                item.validate()
                    .map_err(|e| Error::Catalog(format!("catalog '{}': {e}", catalog.name)))?;
            }
        }
        Ok(file)
    }

    /// Reads and parses a catalog file.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read, or [`Error::Catalog`]
    /// if its content is invalid.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let file = Self::parse(&content)?;
        tracing::info!(path = %path.display(), catalogs = file.catalogs.len(), "catalog file loaded");
        Ok(file)
    }

    /// Registration events for every catalog, in file order.
    pub fn into_events(self) -> impl Iterator<Item = ShowcaseEvent> {
        self.catalogs.into_iter().map(CatalogDefinition::into_event)
    }
}
