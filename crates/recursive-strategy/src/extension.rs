//! One-layer extension steps for recursive strategies.

use std::fmt;
use strategy_core::BoxedStrategy;

/// Builds a strategy for structures one recursive layer deeper than those
/// produced by its argument.
///
/// Implementations must be pure: [`RecursiveStrategy`](crate::RecursiveStrategy)
/// calls `extend` several times at construction and again during validation,
/// and expects equivalent results every time.
pub trait Extension<T>: Send + Sync {
    fn extend(&self, inner: BoxedStrategy<T>) -> BoxedStrategy<T>;

    /// Name used in descriptions.
    fn name(&self) -> &str;
}

/// An [`Extension`] backed by a function.
pub struct FnExtension<F> {
    name: String,
    f: F,
}

/// Create a named extension from a function.
///
/// ```rust
/// use recursive_strategy::{extension, Extension};
/// use strategy_core::strategies::{integers, vecs};
/// use strategy_core::{BoxedStrategy, StrategyExt};
///
/// let sums = extension("sums", |inner: BoxedStrategy<i64>| {
///     vecs(inner, 2, 2).map("sum", |xs: Vec<i64>| xs.iter().sum::<i64>()).boxed()
/// });
/// assert_eq!(sums.name(), "sums");
/// let _deeper = sums.extend(integers(0, 9).boxed());
/// ```
pub fn extension<T, F>(name: impl Into<String>, f: F) -> FnExtension<F>
where
    F: Fn(BoxedStrategy<T>) -> BoxedStrategy<T> + Send + Sync,
{
    FnExtension {
        name: name.into(),
        f,
    }
}

impl<T, F> Extension<T> for FnExtension<F>
where
    F: Fn(BoxedStrategy<T>) -> BoxedStrategy<T> + Send + Sync,
{
    fn extend(&self, inner: BoxedStrategy<T>) -> BoxedStrategy<T> {
        (self.f)(inner)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl<F> fmt::Debug for FnExtension<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
