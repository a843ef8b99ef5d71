// SPDX-License-Identifier: MPL-2.0
//! `vitrine` is the state core of a training-center showcase site.
//!
//! It keeps the category tabs of the trainings and shop catalogs in sync with
//! their visible cards, tracks the scroll position of each catalog carousel,
//! and holds the small page-level state machines (mobile menu, header,
//! scroll reveal, forms, cosmetic effects). Rendering goes through the
//! [`CatalogView`](application::port::CatalogView) port.

#![doc(html_root_url = "https://docs.rs/vitrine/0.1.0")]

pub mod app;
pub mod application;
pub mod catalog_loader;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod ui;

#[cfg(test)]
mod test_utils;
