// SPDX-License-Identifier: MPL-2.0
//! Catalog domain types.
//!
//! This module contains the catalog data model shared by the filter
//! controller and the carousel navigator.

pub mod types;

pub use types::{validate_length, Catalog, CatalogItem, Category, FilterState};
