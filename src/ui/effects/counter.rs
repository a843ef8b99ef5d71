// SPDX-License-Identifier: MPL-2.0
//! Animated statistic counters ("500+ trainees", "15 years", ...).

use super::{Effect, EffectFrame};
use crate::config::Config;
use std::time::Duration;

/// Counts from zero up to `target` linearly over `duration`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Counter {
    target: u64,
    duration: Duration,
    elapsed: Duration,
}

impl Counter {
    #[must_use]
    pub fn new(target: u64, duration: Duration) -> Self {
        Self {
            target,
            duration,
            elapsed: Duration::ZERO,
        }
    }

    /// Counter animated over the duration from the settings.
    #[must_use]
    pub fn from_config(target: u64, config: &Config) -> Self {
        Self::new(target, config.counter_duration())
    }

    /// Value to display at the current point of the animation.
    #[must_use]
    pub fn value(&self) -> u64 {
        if self.elapsed >= self.duration {
            return self.target;
        }
        let progress = self.elapsed.as_secs_f64() / self.duration.as_secs_f64();
        // Truncation is intended: counters never round up past the real value.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
        let value = (self.target as f64 * progress) as u64;
        value.min(self.target)
    }

    #[must_use]
    pub fn target(&self) -> u64 {
        self.target
    }
}

impl Effect for Counter {
    fn advance(&mut self, dt: Duration) -> EffectFrame {
        self.elapsed = self.elapsed.saturating_add(dt);
        EffectFrame::Count(self.value())
    }

    fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}
