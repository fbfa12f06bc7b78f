//! Draw context: the source of randomness every strategy draws from.

use crate::error::{DrawError, DrawResult, GuardId};
use crate::strategy::Strategy;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Default number of random choices a single context may make.
pub const DEFAULT_MAX_CHOICES: usize = 8 * 1024;

/// Configuration for a draw context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawConfig {
    /// Seed for the random number generator
    pub seed: u64,

    /// Maximum number of random choices before draws fail with
    /// [`DrawError::Overrun`]
    pub max_choices: usize,
}

impl Default for DrawConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            max_choices: DEFAULT_MAX_CHOICES,
        }
    }
}

/// Source of data for one test case.
///
/// The context uses a seeded random number generator so that the same seed
/// and strategy always produce the same value. It also carries the leaf
/// budgets of any guards currently capped within it, which keeps the
/// strategies themselves immutable and shareable across threads.
pub struct DrawContext {
    rng: StdRng,
    max_choices: usize,
    choices: usize,
    depth: usize,
    events: Vec<String>,
    budgets: HashMap<GuardId, usize>,
}

impl DrawContext {
    /// Create a context with the given seed and default limits.
    pub fn new(seed: u64) -> Self {
        Self::with_config(&DrawConfig {
            seed,
            ..DrawConfig::default()
        })
    }

    /// Create a context from a configuration.
    pub fn with_config(config: &DrawConfig) -> Self {
        Self {
            rng: StdRng::seed_from_u64(config.seed),
            max_choices: config.max_choices,
            choices: 0,
            depth: 0,
            events: Vec::new(),
            budgets: HashMap::new(),
        }
    }

    /// Draw a value from `strategy`.
    pub fn draw<S: Strategy + ?Sized>(&mut self, strategy: &S) -> DrawResult<S::Value> {
        self.depth += 1;
        let result = strategy.draw(self);
        self.depth -= 1;
        result
    }

    /// Make one random choice.
    ///
    /// Every primitive choice counts against the context's allowance.
    pub fn choose_with<R>(&mut self, choose: impl FnOnce(&mut StdRng) -> R) -> DrawResult<R> {
        if self.choices >= self.max_choices {
            return Err(DrawError::Overrun {
                max_choices: self.max_choices,
            });
        }
        self.choices += 1;
        Ok(choose(&mut self.rng))
    }

    /// Record a diagnostic event for this test case.
    pub fn note_event(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::debug!(event = %message, "Noted draw event");
        self.events.push(message);
    }

    /// Events noted so far.
    pub fn events(&self) -> &[String] {
        &self.events
    }

    /// Take the noted events, leaving the context with none.
    pub fn take_events(&mut self) -> Vec<String> {
        std::mem::take(&mut self.events)
    }

    /// Number of random choices made so far.
    pub fn choices_used(&self) -> usize {
        self.choices
    }

    /// Current nesting depth of [`DrawContext::draw`] calls.
    pub fn draw_depth(&self) -> usize {
        self.depth
    }

    /// Install a leaf budget for `guard`.
    ///
    /// Returns `false` without touching the existing budget if one is
    /// already installed.
    pub fn open_budget(&mut self, guard: GuardId, max: usize) -> bool {
        if self.budgets.contains_key(&guard) {
            return false;
        }
        self.budgets.insert(guard, max);
        true
    }

    /// Remove the leaf budget for `guard`, returning what was left of it.
    pub fn close_budget(&mut self, guard: GuardId) -> Option<usize> {
        self.budgets.remove(&guard)
    }

    /// Remaining leaf budget for `guard`, if one is installed.
    pub fn budget(&self, guard: GuardId) -> Option<usize> {
        self.budgets.get(&guard).copied()
    }

    /// Mutable access to the leaf budget for `guard`.
    pub fn budget_mut(&mut self, guard: GuardId) -> Option<&mut usize> {
        self.budgets.get_mut(&guard)
    }
}

impl std::fmt::Debug for DrawContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DrawContext")
            .field("max_choices", &self.max_choices)
            .field("choices", &self.choices)
            .field("depth", &self.depth)
            .field("events", &self.events.len())
            .field("budgets", &self.budgets)
            .finish()
    }
}
