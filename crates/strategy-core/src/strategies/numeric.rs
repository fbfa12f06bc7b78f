//! Numeric and boolean strategies.

use crate::context::DrawContext;
use crate::error::{ConfigError, DrawError, DrawResult};
use crate::strategy::Strategy;
use rand::Rng;

/// Strategy for integers in an inclusive range.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct IntegerRange {
    min: i64,
    max: i64,
}

/// Draw integers in `min..=max`.
pub fn integers(min: i64, max: i64) -> IntegerRange {
    IntegerRange { min, max }
}

impl std::fmt::Debug for IntegerRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "integers({}, {})", self.min, self.max)
    }
}

impl Strategy for IntegerRange {
    type Value = i64;

    fn draw(&self, ctx: &mut DrawContext) -> DrawResult<i64> {
        if self.min > self.max {
            return Err(DrawError::Rejected(format!("{self:?}: empty range")));
        }
        let (min, max) = (self.min, self.max);
        ctx.choose_with(|rng| rng.gen_range(min..=max))
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.min > self.max {
            return Err(ConfigError::InvalidArgument(format!(
                "Cannot have min={} > max={} in {self:?}",
                self.min, self.max
            )));
        }
        Ok(())
    }
}

/// Strategy for fair booleans.
#[derive(Debug, Clone, Copy, Default)]
pub struct Booleans;

/// Draw `true` or `false` with equal probability.
pub fn booleans() -> Booleans {
    Booleans
}

impl Strategy for Booleans {
    type Value = bool;

    fn draw(&self, ctx: &mut DrawContext) -> DrawResult<bool> {
        ctx.choose_with(|rng| rng.gen_bool(0.5))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integers_in_range() {
        let mut ctx = DrawContext::new(42);
        let strategy = integers(10, 20);

        for _ in 0..100 {
            let value = ctx.draw(&strategy).unwrap();
            assert!((10..=20).contains(&value));
        }
        assert_eq!(ctx.choices_used(), 100);
    }

    #[test]
    fn test_integers_single_value() {
        let mut ctx = DrawContext::new(42);
        assert_eq!(ctx.draw(&integers(-3, -3)).unwrap(), -3);
    }

    #[test]
    fn test_integers_empty_range() {
        let strategy = integers(5, 1);
        let mut ctx = DrawContext::new(42);

        assert!(matches!(
            strategy.validate(),
            Err(ConfigError::InvalidArgument(_))
        ));
        assert!(matches!(ctx.draw(&strategy), Err(DrawError::Rejected(_))));
    }

    #[test]
    fn test_booleans_produce_both_values() {
        let mut ctx = DrawContext::new(7);
        let values: Vec<bool> = (0..64).map(|_| ctx.draw(&booleans()).unwrap()).collect();

        assert!(values.contains(&true));
        assert!(values.contains(&false));
    }
}
