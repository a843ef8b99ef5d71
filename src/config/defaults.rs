// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Carousel**: Card spacing and initial viewport width
//! - **Page**: Header, anchor and reveal thresholds
//! - **Effects**: Typewriter and counter timings
//! - **Forms**: Contact message length

// ==========================================================================
// Carousel Defaults
// ==========================================================================

/// Space between two catalog cards, in pixels.
pub const DEFAULT_CAROUSEL_GAP: f32 = 16.0;

/// Maximum accepted card gap, in pixels.
pub const MAX_CAROUSEL_GAP: f32 = 128.0;

/// Carousel width assumed before the first resize event, in pixels.
pub const DEFAULT_CONTAINER_WIDTH: f32 = 936.0;

// ==========================================================================
// Page Defaults
// ==========================================================================

/// Height of the fixed header subtracted from anchor scroll targets.
pub const DEFAULT_HEADER_OFFSET: f32 = 80.0;

/// Scroll distance after which the header switches to its compact style.
pub const DEFAULT_HEADER_SCROLL_THRESHOLD: f32 = 100.0;

/// Elements reveal once their top is above `viewport_height / ratio`.
pub const DEFAULT_REVEAL_RATIO: f32 = 1.2;

/// Smallest accepted reveal ratio.
pub const MIN_REVEAL_RATIO: f32 = 1.0;

/// Largest accepted reveal ratio.
pub const MAX_REVEAL_RATIO: f32 = 4.0;

// ==========================================================================
// Effects Defaults
// ==========================================================================

/// Delay between two typed characters, in milliseconds.
pub const DEFAULT_TYPE_INTERVAL_MS: u64 = 100;

/// Delay between two deleted characters, in milliseconds.
pub const DEFAULT_DELETE_INTERVAL_MS: u64 = 50;

/// How long a fully typed phrase stays on screen, in milliseconds.
pub const DEFAULT_HOLD_MS: u64 = 2000;

/// Duration of a counter animation, in milliseconds.
pub const DEFAULT_COUNTER_DURATION_MS: u64 = 2000;

// ==========================================================================
// Forms Defaults
// ==========================================================================

/// Minimum length of a contact message, in characters.
pub const MIN_MESSAGE_LENGTH: usize = 10;
