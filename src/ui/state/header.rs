// SPDX-License-Identifier: MPL-2.0
//! Scroll-reactive header state.

use crate::config::Config;

/// Tracks whether the fixed header uses its compact "scrolled" style.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeaderState {
    threshold: f32,
    scrolled: bool,
}

impl Default for HeaderState {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl HeaderState {
    #[must_use]
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold: threshold.max(0.0),
            scrolled: false,
        }
    }

    /// Header using the scroll threshold from the settings.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.header_scroll_threshold())
    }

    /// Updates the style for the page's vertical scroll position.
    ///
    /// Returns `true` if the header should be drawn in its scrolled style.
    pub fn on_scroll(&mut self, scroll_y: f32) -> bool {
        self.scrolled = scroll_y > self.threshold;
        self.scrolled
    }

    #[must_use]
    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_switches_past_threshold() {
        let mut header = HeaderState::new(100.0);
        assert!(!header.on_scroll(0.0));
        assert!(!header.on_scroll(100.0));
        assert!(header.on_scroll(100.5));
        assert!(header.is_scrolled());
        assert!(!header.on_scroll(20.0));
    }

    #[test]
    fn threshold_comes_from_config() {
        let mut config = Config::default();
        config.page.header_scroll_threshold = Some(300.0);
        let mut header = HeaderState::from_config(&config);
        assert!(!header.on_scroll(250.0));
        assert!(header.on_scroll(301.0));

        assert!(HeaderState::default().on_scroll(150.0));
    }

    #[test]
    fn negative_threshold_is_clamped() {
        let mut header = HeaderState::new(-5.0);
        assert!(!header.on_scroll(0.0));
        assert!(header.on_scroll(1.0));
    }
}
