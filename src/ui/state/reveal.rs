// SPDX-License-Identifier: MPL-2.0
//! Scroll-triggered reveal of feature blocks and cards.
//!
//! Elements start hidden and fade in once their top edge scrolls above
//! `viewport_height / ratio`. A revealed element never hides again.

use crate::config::{Config, MAX_REVEAL_RATIO, MIN_REVEAL_RATIO};
use indexmap::IndexMap;

#[derive(Debug, Clone)]
pub struct RevealTracker {
    ratio: f32,
    revealed: IndexMap<String, bool>,
}

impl Default for RevealTracker {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl RevealTracker {
    /// Creates a tracker; the ratio is clamped to the accepted range.
    #[must_use]
    pub fn new(ratio: f32) -> Self {
        Self {
            ratio: ratio.clamp(MIN_REVEAL_RATIO, MAX_REVEAL_RATIO),
            revealed: IndexMap::new(),
        }
    }

    /// Tracker using the reveal ratio from the settings.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.reveal_ratio())
    }

    /// Registers an element in its hidden state. Already known elements keep
    /// their state.
    pub fn track(&mut self, id: impl Into<String>) {
        self.revealed.entry(id.into()).or_insert(false);
    }

    /// Processes a scroll or load event.
    ///
    /// `tops` are the current viewport-relative top edges of the elements.
    /// Unknown ids are tracked on the fly. Returns the ids revealed by this
    /// call, in the order they were given.
    pub fn on_scroll<'a, I>(&mut self, viewport_height: f32, tops: I) -> Vec<String>
    where
        I: IntoIterator<Item = (&'a str, f32)>,
    {
        let trigger = viewport_height / self.ratio;
        let mut newly_revealed = Vec::new();

        for (id, top) in tops {
            let revealed = self.revealed.entry(id.to_string()).or_insert(false);
            if !*revealed && top < trigger {
                *revealed = true;
                newly_revealed.push(id.to_string());
            }
        }

        if !newly_revealed.is_empty() {
            tracing::trace!(count = newly_revealed.len(), "elements revealed");
        }
        newly_revealed
    }

    #[must_use]
    pub fn is_revealed(&self, id: &str) -> bool {
        self.revealed.get(id).copied().unwrap_or(false)
    }

    /// Returns `true` once every tracked element has been revealed.
    #[must_use]
    pub fn all_revealed(&self) -> bool {
        self.revealed.values().all(|revealed| *revealed)
    }
}
