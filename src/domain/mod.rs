// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core business types.
//!
//! This module contains pure domain types and value objects. It performs
//! no I/O and knows nothing about rendering.
//!
//! # Modules
//!
//! - [`catalog`]: Catalog types ([`Category`](catalog::Category),
//!   [`CatalogItem`](catalog::CatalogItem), [`Catalog`](catalog::Catalog),
//!   [`FilterState`](catalog::FilterState))

pub mod catalog;
