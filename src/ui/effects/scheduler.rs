// SPDX-License-Identifier: MPL-2.0
//! Drives every registered effect from a single frame tick.

use super::{Effect, EffectFrame};
use indexmap::IndexMap;
use std::time::Duration;

/// Effects keyed by the id of the element they animate.
#[derive(Debug, Default)]
pub struct EffectScheduler {
    effects: IndexMap<String, Box<dyn Effect>>,
}

impl EffectScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an effect, replacing any previous effect with the same id.
    pub fn insert(&mut self, id: impl Into<String>, effect: impl Effect + 'static) {
        self.effects.insert(id.into(), Box::new(effect));
    }

    pub fn remove(&mut self, id: &str) -> bool {
        self.effects.shift_remove(id).is_some()
    }

    /// Advances every effect by `dt` and returns their frames in
    /// registration order. Finished effects are dropped after their final
    /// frame has been returned.
    pub fn tick(&mut self, dt: Duration) -> Vec<(String, EffectFrame)> {
        let frames = self
            .effects
            .iter_mut()
            .map(|(id, effect)| (id.clone(), effect.advance(dt)))
            .collect();

        let before = self.effects.len();
        self.effects.retain(|_, effect| !effect.is_finished());
        if self.effects.len() < before {
            tracing::trace!(finished = before - self.effects.len(), "effects completed");
        }
        frames
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.effects.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }
}
