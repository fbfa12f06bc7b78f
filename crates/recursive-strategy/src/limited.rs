//! Leaf strategy wrapper enforcing a per-attempt draw budget.

use std::fmt;
use std::ops::{Deref, DerefMut};
use strategy_core::{
    BoxedStrategy, ConfigError, DrawContext, DrawError, DrawResult, GuardId, Strategy,
};

/// Wraps a leaf strategy and counts its draws against a budget.
///
/// The budget itself lives in the [`DrawContext`] while a capped scope is
/// open, so one guard can be capped independently in many contexts at once.
/// Drawing through a guard that is not capped in the given context is a
/// caller bug and panics.
pub struct LimitedStrategy<T> {
    id: GuardId,
    inner: BoxedStrategy<T>,
}

impl<T> LimitedStrategy<T> {
    pub fn new(inner: BoxedStrategy<T>) -> Self {
        Self {
            id: GuardId::next(),
            inner,
        }
    }

    pub fn id(&self) -> GuardId {
        self.id
    }

    /// The wrapped leaf strategy.
    pub fn inner(&self) -> &BoxedStrategy<T> {
        &self.inner
    }

    /// Run `body` with at most `max` draws permitted through this guard.
    ///
    /// The budget is released however `body` exits, including by panic.
    ///
    /// # Panics
    ///
    /// If this guard is already capped in `ctx`.
    pub fn capped<R>(
        &self,
        ctx: &mut DrawContext,
        max: usize,
        body: impl FnOnce(&mut DrawContext) -> R,
    ) -> R {
        let mut scope = CappedScope::open(ctx, self.id, max);
        body(&mut *scope)
    }

    pub fn is_capped(&self, ctx: &DrawContext) -> bool {
        ctx.budget(self.id).is_some()
    }

    /// Draws left in the current capped scope, if any.
    pub fn remaining(&self, ctx: &DrawContext) -> Option<usize> {
        ctx.budget(self.id)
    }
}

impl<T> fmt::Debug for LimitedStrategy<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.inner, f)
    }
}

impl<T> Strategy for LimitedStrategy<T> {
    type Value = T;

    fn draw(&self, ctx: &mut DrawContext) -> DrawResult<T> {
        let Some(remaining) = ctx.budget_mut(self.id) else {
            panic!("{self:?} drawn outside of a capped scope");
        };
        if *remaining == 0 {
            return Err(DrawError::LimitReached(self.id));
        }
        *remaining -= 1;
        ctx.draw(&self.inner)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.inner.validate()
    }
}

/// An open capped scope. Closing happens on drop.
struct CappedScope<'a> {
    ctx: &'a mut DrawContext,
    guard: GuardId,
}

impl<'a> CappedScope<'a> {
    fn open(ctx: &'a mut DrawContext, guard: GuardId, max: usize) -> Self {
        assert!(
            ctx.open_budget(guard, max),
            "guard {guard} is already capped in this context"
        );
        Self { ctx, guard }
    }
}

impl Deref for CappedScope<'_> {
    type Target = DrawContext;

    fn deref(&self) -> &DrawContext {
        self.ctx
    }
}

impl DerefMut for CappedScope<'_> {
    fn deref_mut(&mut self) -> &mut DrawContext {
        self.ctx
    }
}

impl Drop for CappedScope<'_> {
    fn drop(&mut self) {
        self.ctx.close_budget(self.guard);
    }
}
