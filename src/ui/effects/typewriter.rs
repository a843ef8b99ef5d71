// SPDX-License-Identifier: MPL-2.0
//! Typewriter effect for the hero headline.

use super::{Effect, EffectFrame};
use crate::config::Config;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypewriterTiming {
    /// Delay between two typed characters.
    pub type_interval: Duration,
    /// Delay between two deleted characters.
    pub delete_interval: Duration,
    /// How long a complete phrase stays on screen.
    pub hold: Duration,
}

impl TypewriterTiming {
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            type_interval: config.type_interval(),
            delete_interval: config.delete_interval(),
            hold: config.hold(),
        }
    }
}

impl Default for TypewriterTiming {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Typing,
    Holding,
    Deleting,
}

/// Types each phrase character by character, holds it, deletes it, then
/// moves on to the next phrase. Cycles forever.
#[derive(Debug, Clone)]
pub struct Typewriter {
    phrases: Vec<Vec<char>>,
    timing: TypewriterTiming,
    phrase: usize,
    visible: usize,
    phase: Phase,
    pending: Duration,
}

impl Typewriter {
    #[must_use]
    pub fn new<I, S>(phrases: I, timing: TypewriterTiming) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            phrases: phrases
                .into_iter()
                .map(|phrase| phrase.as_ref().chars().collect())
                .collect(),
            timing,
            phrase: 0,
            visible: 0,
            phase: Phase::Typing,
            pending: Duration::ZERO,
        }
    }

    /// Currently displayed text.
    #[must_use]
    pub fn text(&self) -> String {
        self.phrases
            .get(self.phrase)
            .map(|chars| chars[..self.visible].iter().collect())
            .unwrap_or_default()
    }

    /// Index of the phrase being typed or deleted.
    #[must_use]
    pub fn phrase_index(&self) -> usize {
        self.phrase
    }

    fn current_len(&self) -> usize {
        self.phrases.get(self.phrase).map_or(0, Vec::len)
    }

    fn interval(&self) -> Duration {
        match self.phase {
            Phase::Typing => self.timing.type_interval,
            Phase::Holding => self.timing.hold,
            Phase::Deleting => self.timing.delete_interval,
        }
    }

    /// Time to type, hold and delete every phrase once. The state machine is
    /// periodic with this length.
    fn cycle(&self) -> Duration {
        self.phrases.iter().fold(Duration::ZERO, |total, chars| {
            let steps = u32::try_from(chars.len().max(1)).unwrap_or(u32::MAX);
            total
                .saturating_add(self.timing.type_interval.saturating_mul(steps))
                .saturating_add(self.timing.hold)
                .saturating_add(self.timing.delete_interval.saturating_mul(steps))
        })
    }

    /// Performs one state transition.
    fn transition(&mut self) {
        match self.phase {
            Phase::Typing => {
                if self.visible < self.current_len() {
                    self.visible += 1;
                }
                if self.visible >= self.current_len() {
                    self.phase = Phase::Holding;
                }
            }
            Phase::Holding => self.phase = Phase::Deleting,
            Phase::Deleting => {
                self.visible = self.visible.saturating_sub(1);
                if self.visible == 0 {
                    self.phrase = (self.phrase + 1) % self.phrases.len();
                    self.phase = Phase::Typing;
                }
            }
        }
    }
}

impl Effect for Typewriter {
    fn advance(&mut self, dt: Duration) -> EffectFrame {
        if self.phrases.is_empty() {
            return EffectFrame::Text(String::new());
        }

        self.pending = self.pending.saturating_add(dt);
        let cycle = self.cycle();
        if !cycle.is_zero() && self.pending >= cycle {
            let rest = self.pending.as_nanos() % cycle.as_nanos();
            self.pending = Duration::from_nanos(u64::try_from(rest).unwrap_or(u64::MAX));
        }
        loop {
            let interval = self.interval();
            if self.pending < interval {
                break;
            }
            self.pending -= interval;
            self.transition();
            // A zero interval would otherwise spin forever.
            if interval.is_zero() && self.phase == Phase::Typing && self.visible == 0 {
                break;
            }
        }
        EffectFrame::Text(self.text())
    }

    fn is_finished(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    fn timing() -> TypewriterTiming {
        TypewriterTiming {
            type_interval: MS * 100,
            delete_interval: MS * 50,
            hold: MS * 1000,
        }
    }

    fn text(frame: EffectFrame) -> String {
        match frame {
            EffectFrame::Text(text) => text,
            other => panic!("expected text frame, got {other:?}"),
        }
    }

    #[test]
    fn types_one_character_per_interval() {
        let mut typewriter = Typewriter::new(["Web"], timing());
        assert_eq!(text(typewriter.advance(MS * 50)), "");
        assert_eq!(text(typewriter.advance(MS * 50)), "W");
        assert_eq!(text(typewriter.advance(MS * 200)), "Web");
    }

    #[test]
    fn holds_then_deletes() {
        let mut typewriter = Typewriter::new(["Web"], timing());
        typewriter.advance(MS * 300);
        assert_eq!(text(typewriter.advance(MS * 999)), "Web");
        assert_eq!(text(typewriter.advance(MS * 1)), "Web");
        assert_eq!(text(typewriter.advance(MS * 50)), "We");
        assert_eq!(text(typewriter.advance(MS * 100)), "");
    }

    #[test]
    fn moves_to_next_phrase_and_wraps() {
        let mut typewriter = Typewriter::new(["Hi", "Yo"], timing());
        // type 2, hold, delete 2
        typewriter.advance(MS * (200 + 1000 + 100));
        assert_eq!(typewriter.phrase_index(), 1);
        assert_eq!(text(typewriter.advance(MS * 100)), "Y");

        typewriter.advance(MS * (100 + 1000 + 100));
        assert_eq!(typewriter.phrase_index(), 0);
    }

    #[test]
    fn handles_multibyte_characters() {
        let mut typewriter = Typewriter::new(["Sécurité"], timing());
        assert_eq!(text(typewriter.advance(MS * 200)), "Sé");
    }

    #[test]
    fn empty_phrase_list_renders_nothing() {
        let mut typewriter = Typewriter::new(Vec::<String>::new(), timing());
        assert_eq!(text(typewriter.advance(MS * 1000)), "");
        assert!(!typewriter.is_finished());
    }

    #[test]
    fn zero_intervals_do_not_hang() {
        let zero = TypewriterTiming {
            type_interval: Duration::ZERO,
            delete_interval: Duration::ZERO,
            hold: Duration::ZERO,
        };
        let mut typewriter = Typewriter::new(["ab"], zero);
        typewriter.advance(MS);
        assert_eq!(typewriter.phrase_index(), 0);
    }

    #[test]
    fn whole_cycles_are_skipped() {
        // "Web": 3 x 100ms typing, 1000ms hold, 3 x 50ms deleting.
        let cycle = MS * 1450;
        let mut typewriter = Typewriter::new(["Web"], timing());
        assert_eq!(text(typewriter.advance(MS * 50)), "");
        assert_eq!(text(typewriter.advance(cycle * 1_000_000)), "");
        assert_eq!(text(typewriter.advance(MS * 50)), "W");
    }

    #[test]
    fn huge_tick_does_not_overflow() {
        let mut typewriter = Typewriter::new(["Web", "Réseau"], timing());
        typewriter.advance(MS * 50);
        typewriter.advance(Duration::MAX);
        typewriter.advance(Duration::MAX);
        assert!(typewriter.phrase_index() < 2);
    }
}
