//! Constant value strategy.

use crate::context::DrawContext;
use crate::error::DrawResult;
use crate::strategy::Strategy;
use std::fmt;

/// Strategy that always produces a clone of one value.
#[derive(Clone)]
pub struct Just<T> {
    value: T,
}

/// Always draw `value`. Makes no random choices.
pub fn just<T>(value: T) -> Just<T>
where
    T: Clone + fmt::Debug + Send + Sync,
{
    Just { value }
}

impl<T: fmt::Debug> fmt::Debug for Just<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "just({:?})", self.value)
    }
}

impl<T> Strategy for Just<T>
where
    T: Clone + fmt::Debug + Send + Sync,
{
    type Value = T;

    fn draw(&self, _ctx: &mut DrawContext) -> DrawResult<T> {
        Ok(self.value.clone())
    }
}
