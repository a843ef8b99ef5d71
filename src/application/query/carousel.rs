// SPDX-License-Identifier: MPL-2.0
//! Carousel scroll bookkeeping for one catalog strip.
//!
//! [`CarouselNavigator`] tracks the horizontal scroll offset of the visible
//! strip and decides whether the previous/next arrows are usable. The strip
//! is described by a [`CarouselState`] which is recomputed, never patched,
//! whenever the visible subset or the container size changes.

use crate::domain::catalog::validate_length;
use crate::error::Result;

/// Direction of an arrow click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Backward,
    Forward,
}

/// Dimensions and scroll position of a carousel strip.
///
/// Invariant: `0 <= scroll_offset <= max_offset()`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CarouselState {
    /// Current horizontal scroll position in pixels.
    pub scroll_offset: f32,
    /// Width of the scrollable viewport.
    pub container_width: f32,
    /// Width of one card.
    pub item_width: f32,
    /// Horizontal space between two cards.
    pub gap: f32,
    /// Number of visible cards.
    pub item_count: usize,
}

impl CarouselState {
    /// Width of every card plus the gaps between them.
    #[must_use]
    pub fn total_content_width(&self) -> f32 {
        if self.item_count == 0 {
            return 0.0;
        }
        let count = self.item_count as f32;
        count * self.item_width + (count - 1.0) * self.gap
    }

    /// Largest reachable scroll offset.
    #[must_use]
    pub fn max_offset(&self) -> f32 {
        (self.total_content_width() - self.container_width).max(0.0)
    }

    /// Distance covered by one arrow click.
    #[must_use]
    pub fn step_size(&self) -> f32 {
        self.item_width + self.gap
    }

    fn clamped(mut self) -> Self {
        self.scroll_offset = self.scroll_offset.clamp(0.0, self.max_offset());
        self
    }
}

/// Arrow state snapshot handed to the view layer.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NavigationControls {
    /// Whether the "previous" arrow is enabled.
    pub can_scroll_backward: bool,
    /// Whether the "next" arrow is enabled.
    pub can_scroll_forward: bool,
    /// Offset to apply to the scrollable viewport.
    pub offset: f32,
    /// Largest reachable offset.
    pub max_offset: f32,
}

/// Scroll-offset bookkeeping for a single carousel.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CarouselNavigator {
    state: CarouselState,
}

impl CarouselNavigator {
    /// Creates a navigator for an empty strip at offset zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the strip dimensions and clamps the current offset to the
    /// new bounds.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`](crate::error::Error::InvalidDimensions) if a width or the gap is negative
    /// or not finite. The previous state is kept in that case.
    pub fn configure(
        &mut self,
        container_width: f32,
        item_width: f32,
        gap: f32,
        item_count: usize,
    ) -> Result<()> {
        validate_length("container width", container_width)?;
        validate_length("item width", item_width)?;
        validate_length("gap", gap)?;

        let previous = self.state.scroll_offset;
        self.state = CarouselState {
            scroll_offset: previous,
            container_width,
            item_width,
            gap,
            item_count,
        }
        .clamped();

        if self.state.scroll_offset < previous {
            tracing::trace!(
                from = previous,
                to = self.state.scroll_offset,
                "carousel offset clamped after reconfigure"
            );
        }
        Ok(())
    }

    /// Re-clamps the offset against a new container width.
    ///
    /// Negative or non-finite widths are treated as zero.
    pub fn on_resize(&mut self, container_width: f32) {
        let container_width = if container_width.is_finite() {
            container_width.max(0.0)
        } else {
            0.0
        };
        self.state = CarouselState {
            container_width,
            ..self.state
        }
        .clamped();
    }

    /// Returns `true` if the strip is scrolled away from its start.
    #[must_use]
    pub fn can_scroll_backward(&self) -> bool {
        self.state.scroll_offset > 0.0
    }

    /// Returns `true` if the strip can still move towards its end.
    #[must_use]
    pub fn can_scroll_forward(&self) -> bool {
        self.state.scroll_offset < self.state.max_offset()
    }

    /// Moves one card in `direction` and returns the new offset.
    ///
    /// At a boundary this is a no-op that returns the unchanged offset.
    pub fn step(&mut self, direction: Direction) -> f32 {
        let step = self.state.step_size();
        let target = match direction {
            Direction::Backward if self.can_scroll_backward() => self.state.scroll_offset - step,
            Direction::Forward if self.can_scroll_forward() => self.state.scroll_offset + step,
            _ => return self.state.scroll_offset,
        };

        self.state.scroll_offset = target.clamp(0.0, self.state.max_offset());
        self.state.scroll_offset
    }

    /// Jumps back to the first card.
    pub fn reset(&mut self) {
        self.state.scroll_offset = 0.0;
    }

    #[must_use]
    pub fn offset(&self) -> f32 {
        self.state.scroll_offset
    }

    #[must_use]
    pub fn max_offset(&self) -> f32 {
        self.state.max_offset()
    }

    #[must_use]
    pub fn state(&self) -> CarouselState {
        self.state
    }

    /// Scroll position as a percentage (0-100%) of the reachable range.
    ///
    /// Returns `None` when everything fits and there is nothing to scroll.
    #[must_use]
    pub fn progress_percentage(&self) -> Option<f32> {
        let max = self.state.max_offset();
        if max <= 0.0 {
            return None;
        }
        Some((self.state.scroll_offset / max * 100.0).min(100.0))
    }

    /// Snapshot of the arrow state for rendering.
    #[must_use]
    pub fn controls(&self) -> NavigationControls {
        NavigationControls {
            can_scroll_backward: self.can_scroll_backward(),
            can_scroll_forward: self.can_scroll_forward(),
            offset: self.state.scroll_offset,
            max_offset: self.state.max_offset(),
        }
    }
}
