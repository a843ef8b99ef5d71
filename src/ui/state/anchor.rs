// SPDX-License-Identifier: MPL-2.0
//! Smooth-scroll targets for in-page anchors.

use crate::config::Config;

/// Computes the scroll position for an in-page link.
///
/// Returns `None` for the bare `#` link, which must not scroll. Otherwise
/// the target is the element's document offset minus the fixed header
/// height, never above the top of the page.
#[must_use]
pub fn anchor_scroll_target(href: &str, element_top: f32, header_offset: f32) -> Option<f32> {
    if href == "#" || !href.starts_with('#') {
        return None;
    }
    Some((element_top - header_offset).max(0.0))
}

/// [`anchor_scroll_target`] with the header height from the settings.
#[must_use]
pub fn configured_anchor_scroll_target(
    href: &str,
    element_top: f32,
    config: &Config,
) -> Option<f32> {
    anchor_scroll_target(href, element_top, config.header_offset())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn bare_hash_does_not_scroll() {
        assert!(anchor_scroll_target("#", 500.0, 80.0).is_none());
    }

    #[test]
    fn external_links_are_ignored() {
        assert!(anchor_scroll_target("https://example.com", 500.0, 80.0).is_none());
    }

    #[test]
    fn target_subtracts_header() {
        let target = configured_anchor_scroll_target("#contact", 1500.0, &Config::default())
            .unwrap();
        assert_abs_diff_eq!(target, 1420.0);
    }

    #[test]
    fn configured_header_offset_is_used() {
        let mut config = Config::default();
        config.page.header_offset = Some(120.0);
        let target = configured_anchor_scroll_target("#contact", 1500.0, &config).unwrap();
        assert_abs_diff_eq!(target, 1380.0);
    }

    #[test]
    fn target_never_goes_above_page_top() {
        let target = anchor_scroll_target("#home", 30.0, 80.0).unwrap();
        assert_abs_diff_eq!(target, 0.0);
    }
}
