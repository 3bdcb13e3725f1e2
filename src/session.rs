//! Transient counting session: tally against a target with a one-shot
//! completion signal.

use crate::errors::ValidationError;
use crate::models::{Phrase, SessionState, SessionView};

pub const MIN_TARGET: u32 = 1;
pub const MAX_TARGET: u32 = 10_000;
pub const DEFAULT_TARGET: u32 = 33;
pub const PRESET_TARGETS: &[u32] = &[33, 99, 100, 500, 1000];

/// A repetition target known to lie in `MIN_TARGET..=MAX_TARGET`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Target(u32);

impl Target {
    pub fn new(value: i64) -> Result<Self, ValidationError> {
        if value < i64::from(MIN_TARGET) || value > i64::from(MAX_TARGET) {
            return Err(ValidationError::TargetOutOfRange(value));
        }
        Ok(Self(value as u32))
    }

    /// Stored phrases may carry a default outside the bounds if the record was
    /// edited by hand; those are pulled back into range.
    pub fn clamped(value: u32) -> Self {
        Self(value.clamp(MIN_TARGET, MAX_TARGET))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Completion {
    Armed,
    Fired,
}

/// Emitted once per counting run when the tally first reaches the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Completed {
    pub count: u32,
}

#[derive(Debug, Clone)]
pub struct CountingSession {
    phrase: Phrase,
    target: Target,
    count: u32,
    completion: Completion,
}

impl CountingSession {
    pub fn new(phrase: Phrase) -> Self {
        let target = Target::clamped(phrase.default_target);
        Self {
            phrase,
            target,
            count: 0,
            completion: Completion::Armed,
        }
    }

    pub fn phrase(&self) -> &Phrase {
        &self.phrase
    }

    pub fn target(&self) -> u32 {
        self.target.get()
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn state(&self) -> SessionState {
        if self.count >= self.target.get() {
            SessionState::Completed
        } else if self.count == 0 {
            SessionState::Idle
        } else {
            SessionState::Counting
        }
    }

    pub fn completion_fired(&self) -> bool {
        self.completion == Completion::Fired
    }

    /// Advances the tally by one. Returns the completion signal when this
    /// step crosses the target while armed. A no-op once the target is met.
    pub fn increment(&mut self) -> Option<Completed> {
        if self.count >= self.target.get() {
            return None;
        }
        self.count += 1;

        if self.count >= self.target.get() && self.count > 0 && self.completion == Completion::Armed
        {
            self.completion = Completion::Fired;
            return Some(Completed { count: self.count });
        }
        None
    }

    pub fn reset(&mut self) {
        self.count = 0;
        self.completion = Completion::Armed;
    }

    /// Re-arms completion without touching the count. A count already at or
    /// past the new target does not fire.
    pub fn set_target(&mut self, target: Target) {
        self.target = target;
        self.completion = Completion::Armed;
    }

    /// Swaps the active phrase and re-arms completion; count and target stay.
    pub fn select_phrase(&mut self, phrase: Phrase) {
        self.phrase = phrase;
        self.completion = Completion::Armed;
    }

    pub fn view(&self) -> SessionView {
        SessionView {
            phrase: self.phrase.clone(),
            target: self.target(),
            count: self.count,
            state: self.state(),
            completion_fired: self.completion_fired(),
        }
    }
}
