// SPDX-License-Identifier: MPL-2.0
//! Presentation-side state and adapters.
//!
//! - [`state`]: Mobile menu, header, scroll reveal and anchor targets
//! - [`forms`]: Contact and newsletter form validation
//! - [`effects`]: Tick-driven typewriter and counters
//! - [`footer`]: Copyright year patch
//! - [`text_view`]: Plain-text catalog view adapter

pub mod effects;
pub mod footer;
pub mod forms;
pub mod state;
pub mod text_view;
