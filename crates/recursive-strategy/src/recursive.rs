//! Recursive strategies with a bounded number of leaves.

use crate::extension::Extension;
use crate::limited::LimitedStrategy;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::{Arc, OnceLock};
use strategy_core::strategies::{one_of, OneOf};
use strategy_core::{
    BoxedStrategy, ConfigError, DrawContext, DrawError, DrawResult, Strategy, StrategyExt,
};

/// Bias of the intermediate alternatives between tiers.
pub const DEFAULT_TIER_BIAS: f64 = 0.8;

/// Default leaf budget.
pub const DEFAULT_MAX_LEAVES: usize = 100;

/// Tuning for a [`RecursiveStrategy`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecursiveOptions {
    /// Maximum number of leaf draws in one generated value. Must be at least 1.
    pub max_leaves: usize,

    /// Bias applied when a deeper tier chooses among the shallower ones.
    /// Must lie in `(0, 1]`; smaller values favour smaller structures.
    pub tier_bias: f64,
}

impl Default for RecursiveOptions {
    fn default() -> Self {
        Self {
            max_leaves: DEFAULT_MAX_LEAVES,
            tier_bias: DEFAULT_TIER_BIAS,
        }
    }
}

impl RecursiveOptions {
    pub fn with_max_leaves(max_leaves: usize) -> Self {
        Self {
            max_leaves,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_leaves == 0 {
            return Err(ConfigError::InvalidArgument(
                "max_leaves must be at least 1".to_string(),
            ));
        }
        if !(self.tier_bias > 0.0 && self.tier_bias <= 1.0) {
            return Err(ConfigError::InvalidArgument(format!(
                "tier_bias={} must be in (0, 1]",
                self.tier_bias
            )));
        }
        Ok(())
    }
}

/// Strategy for recursive structures built from a leaf strategy and an
/// extension.
///
/// At construction the strategy precomputes a short list of tiers:
///
/// ```text
/// tier 0: leaf
/// tier 1: extend(leaf)
/// tier k: extend(one_of(tier 0..k, bias))   while 2^k <= max_leaves
/// ```
///
/// Each tier roughly doubles the number of leaves a value can reach, so the
/// tier count grows with `log2(max_leaves)`. Every draw picks uniformly
/// among the tiers with the leaf guarded by a budget of `max_leaves`. When an
/// attempt runs over budget the whole draw is retried with fresh choices.
pub struct RecursiveStrategy<T: 'static> {
    base: Arc<LimitedStrategy<T>>,
    extension: Arc<dyn Extension<T>>,
    options: RecursiveOptions,
    tiers: Vec<BoxedStrategy<T>>,
    strategy: OneOf<T>,
    description: OnceLock<String>,
}

/// Recursive strategy with the default tier bias.
pub fn recursive<T, S, E>(base: S, extension: E, max_leaves: usize) -> RecursiveStrategy<T>
where
    T: 'static,
    S: Strategy<Value = T> + 'static,
    E: Extension<T> + 'static,
{
    RecursiveStrategy::new(
        base.boxed(),
        Arc::new(extension),
        RecursiveOptions::with_max_leaves(max_leaves),
    )
}

impl<T: 'static> RecursiveStrategy<T> {
    pub fn new(
        base: BoxedStrategy<T>,
        extension: Arc<dyn Extension<T>>,
        options: RecursiveOptions,
    ) -> Self {
        let base = Arc::new(LimitedStrategy::new(base));
        let guarded: BoxedStrategy<T> = base.clone();

        let mut tiers = vec![guarded.clone(), extension.extend(guarded)];
        while needs_another_tier(tiers.len(), options.max_leaves) {
            let shallower = one_of(tiers.clone()).with_bias(options.tier_bias);
            tiers.push(extension.extend(shallower.boxed()));
        }
        tracing::trace!(
            tiers = tiers.len(),
            max_leaves = options.max_leaves,
            extension = extension.name(),
            "Built recursive strategy tiers"
        );

        let strategy = one_of(tiers.clone());
        Self {
            base,
            extension,
            options,
            tiers,
            strategy,
            description: OnceLock::new(),
        }
    }

    /// The guarded leaf strategy.
    pub fn base(&self) -> &LimitedStrategy<T> {
        &self.base
    }

    pub fn options(&self) -> RecursiveOptions {
        self.options
    }

    pub fn max_leaves(&self) -> usize {
        self.options.max_leaves
    }

    pub fn tier_bias(&self) -> f64 {
        self.options.tier_bias
    }

    pub fn tiers(&self) -> &[BoxedStrategy<T>] {
        &self.tiers
    }

    pub fn tier_count(&self) -> usize {
        self.tiers.len()
    }

    fn description(&self) -> &str {
        self.description.get_or_init(|| {
            format!(
                "recursive({:?}, {}, max_leaves={})",
                self.base.inner(),
                self.extension.name(),
                self.options.max_leaves
            )
        })
    }
}

/// Whether a strategy with `tiers` tiers needs one more to reach `max_leaves`.
fn needs_another_tier(tiers: usize, max_leaves: usize) -> bool {
    u32::try_from(tiers)
        .ok()
        .and_then(|shift| 1usize.checked_shl(shift))
        .is_some_and(|reach| reach <= max_leaves)
}

impl<T: 'static> fmt::Debug for RecursiveStrategy<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

impl<T: 'static> Strategy for RecursiveStrategy<T> {
    type Value = T;

    fn draw(&self, ctx: &mut DrawContext) -> DrawResult<T> {
        let mut retries = 0usize;
        loop {
            let attempt = self.base.capped(ctx, self.options.max_leaves, |ctx| {
                ctx.draw(&self.strategy)
            });
            match attempt {
                Err(DrawError::LimitReached(guard)) if guard == self.base.id() => {
                    if retries == 0 {
                        ctx.note_event(format!(
                            "Draw for {self:?} exceeded max_leaves and had to be retried"
                        ));
                    }
                    retries += 1;
                    tracing::debug!(retries, "Recursive draw exceeded max_leaves, retrying");
                }
                result => return result,
            }
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.options.validate()?;

        let base = self.base.inner();
        base.validate().map_err(|reason| ConfigError::InvalidBase {
            base: format!("{base:?}"),
            reason: Box::new(reason),
        })?;

        let extended = self.extension.extend(self.base.clone());
        extended
            .validate()
            .map_err(|reason| ConfigError::InvalidExtension {
                base: format!("{base:?}"),
                extended: format!("{extended:?}"),
                reason: Box::new(reason),
            })
    }
}
