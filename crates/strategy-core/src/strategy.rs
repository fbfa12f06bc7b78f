//! The generation strategy capability.

use crate::context::DrawContext;
use crate::error::{ConfigError, DrawResult};
use std::fmt;
use std::sync::Arc;

/// A way of drawing values of one type from a [`DrawContext`].
///
/// The `Debug` implementation is the strategy's human-readable description
/// and is used in diagnostics and validation errors.
pub trait Strategy: fmt::Debug + Send + Sync {
    /// Type of value this strategy produces.
    type Value;

    /// Draw one value.
    ///
    /// Implementations draw sub-strategies through [`DrawContext::draw`] and
    /// propagate their errors unchanged.
    fn draw(&self, ctx: &mut DrawContext) -> DrawResult<Self::Value>;

    /// Check the strategy's arguments.
    fn validate(&self) -> Result<(), ConfigError> {
        Ok(())
    }
}

/// Shared, type-erased strategy.
pub type BoxedStrategy<T> = Arc<dyn Strategy<Value = T>>;

impl<S: Strategy + ?Sized> Strategy for Arc<S> {
    type Value = S::Value;

    fn draw(&self, ctx: &mut DrawContext) -> DrawResult<Self::Value> {
        (**self).draw(ctx)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        (**self).validate()
    }
}

/// Combinators available on every strategy.
pub trait StrategyExt: Strategy + Sized {
    /// Erase the strategy's type behind a shared handle.
    fn boxed(self) -> BoxedStrategy<Self::Value>
    where
        Self: 'static,
    {
        Arc::new(self)
    }

    /// Transform drawn values with `f`. `name` is used in the description.
    fn map<U, F>(self, name: impl Into<String>, f: F) -> Map<Self, F>
    where
        F: Fn(Self::Value) -> U + Send + Sync,
    {
        Map {
            inner: self,
            name: name.into(),
            f,
        }
    }
}

impl<S: Strategy> StrategyExt for S {}

/// Strategy returned by [`StrategyExt::map`].
pub struct Map<S, F> {
    inner: S,
    name: String,
    f: F,
}

impl<S: fmt::Debug, F> fmt::Debug for Map<S, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}.map({})", self.inner, self.name)
    }
}

impl<S, F, U> Strategy for Map<S, F>
where
    S: Strategy,
    F: Fn(S::Value) -> U + Send + Sync,
{
    type Value = U;

    fn draw(&self, ctx: &mut DrawContext) -> DrawResult<U> {
        ctx.draw(&self.inner).map(&self.f)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.inner.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategies::{integers, just};

    #[test]
    fn test_map_transforms_values() {
        let strategy = integers(1, 5).map("double", |n| n * 2);
        let mut ctx = DrawContext::new(42);

        for _ in 0..20 {
            let value = ctx.draw(&strategy).unwrap();
            assert!(value % 2 == 0 && (2..=10).contains(&value));
        }
    }

    #[test]
    fn test_map_description() {
        let strategy = just(3).map("negate", |n: i32| -n);
        assert_eq!(format!("{strategy:?}"), "just(3).map(negate)");
    }

    #[test]
    fn test_map_validates_inner() {
        let strategy = integers(5, 1).map("identity", |n| n);
        assert!(matches!(
            strategy.validate(),
            Err(ConfigError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_boxed_strategy_draws_and_describes() {
        let strategy: BoxedStrategy<i64> = integers(0, 0).boxed();
        let mut ctx = DrawContext::new(0);

        assert_eq!(ctx.draw(&strategy).unwrap(), 0);
        assert_eq!(format!("{strategy:?}"), "integers(0, 0)");
    }
}
