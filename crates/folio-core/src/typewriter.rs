//! Typewriter effect: types a phrase one character at a time, holds it,
//! deletes it, then moves on to the next phrase, forever.
//!
//! Each [`Typewriter::tick`] performs one step and returns the delay before
//! the next one. [`run_typewriter`] turns that into a self-rescheduling chain
//! of one-shot timers.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{FolioError, FolioResult};
use crate::scheduler::Scheduler;

/// Phrases cycled in the hero section
pub const DEFAULT_PHRASES: [&str; 5] = [
    "Aspiring Software Developer",
    "MCA Student",
    "IT Enthusiast",
    "Problem Solver",
    "Continuous Learner",
];

/// Step delays, in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TypewriterTiming {
    pub type_ms: u64,
    pub delete_ms: u64,
    pub hold_full_ms: u64,
    pub hold_empty_ms: u64,
    pub start_ms: u64,
}

impl Default for TypewriterTiming {
    fn default() -> Self {
        Self {
            type_ms: 100,
            delete_ms: 50,
            hold_full_ms: 2000,
            hold_empty_ms: 500,
            start_ms: 1500,
        }
    }
}

impl TypewriterTiming {
    pub fn start_delay(&self) -> Duration {
        Duration::from_millis(self.start_ms)
    }
}

/// Where the typewriter is in its cycle after the last tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypePhase {
    /// Adding characters
    Typing,
    /// Phrase complete, waiting before deleting
    PausingFull,
    /// Removing characters
    Deleting,
    /// Phrase erased, waiting before typing the next one
    PausingEmpty,
}

/// Output of one tick
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeStep {
    pub text: String,
    pub delay: Duration,
}

#[derive(Debug, Clone)]
pub struct Typewriter {
    phrases: Vec<String>,
    timing: TypewriterTiming,
    index: usize,
    chars: usize,
    deleting: bool,
    phase: TypePhase,
}

impl Typewriter {
    pub fn new<I, P>(phrases: I) -> FolioResult<Self>
    where
        I: IntoIterator<Item = P>,
        P: Into<String>,
    {
        Self::with_timing(phrases, TypewriterTiming::default())
    }

    pub fn with_timing<I, P>(phrases: I, timing: TypewriterTiming) -> FolioResult<Self>
    where
        I: IntoIterator<Item = P>,
        P: Into<String>,
    {
        let phrases: Vec<String> = phrases.into_iter().map(Into::into).collect();
        if phrases.is_empty() {
            return Err(FolioError::EmptyPhrases);
        }
        Ok(Self {
            phrases,
            timing,
            index: 0,
            chars: 0,
            deleting: false,
            phase: TypePhase::Typing,
        })
    }

    pub fn phase(&self) -> TypePhase {
        self.phase
    }

    pub fn phrase_index(&self) -> usize {
        self.index
    }

    /// Currently visible text
    pub fn text(&self) -> String {
        self.phrases[self.index].chars().take(self.chars).collect()
    }

    fn phrase_len(&self) -> usize {
        self.phrases[self.index].chars().count()
    }

    /// Add or remove one character and work out the next delay.
    pub fn tick(&mut self) -> TypeStep {
        let len = self.phrase_len();
        let mut delay;

        if self.deleting {
            self.chars = self.chars.saturating_sub(1);
            delay = self.timing.delete_ms;
            self.phase = TypePhase::Deleting;
        } else {
            self.chars = (self.chars + 1).min(len);
            delay = self.timing.type_ms;
            self.phase = TypePhase::Typing;
        }

        let text = self.text();

        if !self.deleting && self.chars >= len {
            delay = self.timing.hold_full_ms;
            self.deleting = true;
            self.phase = TypePhase::PausingFull;
        } else if self.deleting && self.chars == 0 {
            self.deleting = false;
            self.index = (self.index + 1) % self.phrases.len();
            delay = self.timing.hold_empty_ms;
            self.phase = TypePhase::PausingEmpty;
        }

        TypeStep {
            text,
            delay: Duration::from_millis(delay),
        }
    }
}

/// Start the typing loop. `render` receives the visible text on every tick.
/// The loop reschedules itself for the lifetime of the scheduler.
pub fn run_typewriter<S, F>(scheduler: &S, typewriter: Typewriter, start_delay: Duration, render: F)
where
    S: Scheduler,
    F: FnMut(&str) + 'static,
{
    let state = Rc::new(RefCell::new((typewriter, render)));
    schedule_tick(scheduler.clone(), state, start_delay);
}

fn schedule_tick<S, F>(scheduler: S, state: Rc<RefCell<(Typewriter, F)>>, delay: Duration)
where
    S: Scheduler,
    F: FnMut(&str) + 'static,
{
    let next = scheduler.clone();
    scheduler.schedule(
        delay,
        Box::new(move || {
            let delay = {
                let mut guard = state.borrow_mut();
                let (typewriter, render) = &mut *guard;
                let step = typewriter.tick();
                render(&step.text);
                step.delay
            };
            schedule_tick(next, state, delay);
        }),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn empty_list_is_rejected() {
        let err = Typewriter::new(Vec::<String>::new()).unwrap_err();
        assert_eq!(err, FolioError::EmptyPhrases);
    }

    #[test]
    fn types_holds_deletes_and_advances() {
        let mut tw = Typewriter::new(["Hi", "Yo"]).unwrap();

        assert_eq!(tw.tick(), TypeStep { text: "H".into(), delay: ms(100) });
        assert_eq!(tw.phase(), TypePhase::Typing);

        assert_eq!(tw.tick(), TypeStep { text: "Hi".into(), delay: ms(2000) });
        assert_eq!(tw.phase(), TypePhase::PausingFull);

        assert_eq!(tw.tick(), TypeStep { text: "H".into(), delay: ms(50) });
        assert_eq!(tw.phase(), TypePhase::Deleting);

        assert_eq!(tw.tick(), TypeStep { text: "".into(), delay: ms(500) });
        assert_eq!(tw.phase(), TypePhase::PausingEmpty);
        assert_eq!(tw.phrase_index(), 1);

        assert_eq!(tw.tick().text, "Y");
    }

    #[test]
    fn single_phrase_repeats() {
        let mut tw = Typewriter::new(["ab"]).unwrap();
        let texts: Vec<String> = (0..8).map(|_| tw.tick().text).collect();
        assert_eq!(texts, ["a", "ab", "a", "", "a", "ab", "a", ""]);
        assert_eq!(tw.phrase_index(), 0);
    }

    #[test]
    fn counts_characters_not_bytes() {
        let mut tw = Typewriter::new(["héllo→"]).unwrap();
        let texts: Vec<String> = (0..6).map(|_| tw.tick().text).collect();
        assert_eq!(texts.last().map(String::as_str), Some("héllo→"));
        assert_eq!(texts[1], "hé");
    }

    #[test]
    fn empty_phrase_does_not_stall() {
        let mut tw = Typewriter::new(["", "x"]).unwrap();
        assert_eq!(tw.tick(), TypeStep { text: "".into(), delay: ms(2000) });
        assert_eq!(tw.tick(), TypeStep { text: "".into(), delay: ms(500) });
        assert_eq!(tw.tick().text, "x");
    }

    #[test]
    fn custom_timing_is_used() {
        let timing = TypewriterTiming {
            type_ms: 10,
            delete_ms: 5,
            hold_full_ms: 20,
            hold_empty_ms: 15,
            start_ms: 0,
        };
        let mut tw = Typewriter::with_timing(["ab"], timing).unwrap();
        let delays: Vec<Duration> = (0..4).map(|_| tw.tick().delay).collect();
        assert_eq!(delays, [ms(10), ms(20), ms(5), ms(15)]);
    }
}
