//! Collection strategies.

use crate::context::DrawContext;
use crate::error::{ConfigError, DrawResult};
use crate::strategy::Strategy;
use rand::Rng;
use std::fmt;

/// Strategy for vectors of elements drawn from an inner strategy.
pub struct VecStrategy<S> {
    inner: S,
    min_len: usize,
    max_len: usize,
}

/// Draw vectors of `min_len..=max_len` elements from `inner`.
pub fn vecs<S: Strategy>(inner: S, min_len: usize, max_len: usize) -> VecStrategy<S> {
    VecStrategy {
        inner,
        min_len,
        max_len,
    }
}

impl<S: fmt::Debug> fmt::Debug for VecStrategy<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "vecs({:?}, {}, {})", self.inner, self.min_len, self.max_len)
    }
}

impl<S: Strategy> Strategy for VecStrategy<S> {
    type Value = Vec<S::Value>;

    fn draw(&self, ctx: &mut DrawContext) -> DrawResult<Self::Value> {
        let (min_len, max_len) = (self.min_len, self.max_len.max(self.min_len));
        let length = if min_len == max_len {
            min_len
        } else {
            ctx.choose_with(|rng| rng.gen_range(min_len..=max_len))?
        };

        (0..length).map(|_| ctx.draw(&self.inner)).collect()
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.min_len > self.max_len {
            return Err(ConfigError::InvalidArgument(format!(
                "Cannot have min_len={} > max_len={} in {self:?}",
                self.min_len, self.max_len
            )));
        }
        self.inner.validate()
    }
}
