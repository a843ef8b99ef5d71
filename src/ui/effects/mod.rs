// SPDX-License-Identifier: MPL-2.0
//! Cosmetic animations driven by caller-supplied ticks.
//!
//! Effects hold no timers of their own. The host advances them with the
//! elapsed time since the previous frame and draws whatever they return.
//! Nothing here interacts with catalog filtering or carousel state.

mod counter;
mod scheduler;
mod typewriter;

pub use counter::Counter;
pub use scheduler::EffectScheduler;
pub use typewriter::{Typewriter, TypewriterTiming};

use std::time::Duration;

/// What an effect wants on screen after a tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EffectFrame {
    /// Text to display, e.g. the typed part of a phrase.
    Text(String),
    /// Current value of a numeric counter.
    Count(u64),
}

/// A tick-driven animation.
pub trait Effect: std::fmt::Debug {
    /// Advances the animation by `dt` and returns the frame to draw.
    fn advance(&mut self, dt: Duration) -> EffectFrame;

    /// Returns `true` once the animation has reached its final frame.
    fn is_finished(&self) -> bool;
}
