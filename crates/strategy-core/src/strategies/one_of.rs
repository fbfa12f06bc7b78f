//! Weighted choice between alternative strategies.

use crate::context::DrawContext;
use crate::error::{ConfigError, DrawError, DrawResult};
use crate::strategy::{BoxedStrategy, Strategy};
use rand::Rng;
use std::fmt;

/// Strategy that draws from one of several alternatives.
///
/// Without a bias every alternative is equally likely. With a bias `b`,
/// alternative `i` is accepted with probability `b^i` on each round of
/// rejection sampling, so earlier alternatives are favoured while every
/// alternative stays reachable.
pub struct OneOf<T> {
    alternatives: Vec<BoxedStrategy<T>>,
    bias: Option<f64>,
}

/// Draw from one of `alternatives`, chosen uniformly.
pub fn one_of<T>(alternatives: Vec<BoxedStrategy<T>>) -> OneOf<T> {
    OneOf {
        alternatives,
        bias: None,
    }
}

impl<T> OneOf<T> {
    /// Favour earlier alternatives. `bias` must lie in `(0, 1]`.
    pub fn with_bias(mut self, bias: f64) -> Self {
        self.bias = Some(bias);
        self
    }

    pub fn alternatives(&self) -> &[BoxedStrategy<T>] {
        &self.alternatives
    }

    pub fn bias(&self) -> Option<f64> {
        self.bias
    }

    fn choose_index(&self, ctx: &mut DrawContext) -> DrawResult<usize> {
        let n = self.alternatives.len();
        match self.bias {
            None => ctx.choose_with(|rng| rng.gen_range(0..n)),
            Some(bias) => ctx.choose_with(|rng| loop {
                let i = rng.gen_range(0..n);
                if i == 0 || rng.gen::<f64>() <= bias.powi(i as i32) {
                    break i;
                }
            }),
        }
    }
}

impl<T> fmt::Debug for OneOf<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("one_of(")?;
        f.debug_list().entries(&self.alternatives).finish()?;
        if let Some(bias) = self.bias {
            write!(f, ", bias={bias}")?;
        }
        f.write_str(")")
    }
}

impl<T> Strategy for OneOf<T> {
    type Value = T;

    fn draw(&self, ctx: &mut DrawContext) -> DrawResult<T> {
        match self.alternatives.len() {
            0 => Err(DrawError::Rejected("one_of() has no alternatives".to_string())),
            1 => ctx.draw(&self.alternatives[0]),
            _ => {
                let i = self.choose_index(ctx)?;
                ctx.draw(&self.alternatives[i])
            }
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.alternatives.is_empty() {
            return Err(ConfigError::InvalidArgument(
                "one_of() requires at least one alternative".to_string(),
            ));
        }
        if let Some(bias) = self.bias {
            if !(bias > 0.0 && bias <= 1.0) {
                return Err(ConfigError::InvalidArgument(format!(
                    "bias={bias} must be in (0, 1]"
                )));
            }
        }
        self.alternatives.iter().try_for_each(|s| s.validate())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategies::{integers, just};
    use crate::strategy::StrategyExt;

    fn digits() -> Vec<BoxedStrategy<i64>> {
        (0..4).map(|i| just(i).boxed()).collect()
    }

    fn histogram(strategy: &OneOf<i64>, draws: usize) -> [usize; 4] {
        let mut ctx = DrawContext::new(42);
        let mut counts = [0; 4];
        for _ in 0..draws {
            counts[ctx.draw(strategy).unwrap() as usize] += 1;
        }
        counts
    }

    #[test]
    fn test_uniform_reaches_every_alternative() {
        let counts = histogram(&one_of(digits()), 400);
        assert!(counts.iter().all(|&c| c > 0), "{counts:?}");
    }

    #[test]
    fn test_bias_favours_earlier_alternatives() {
        let counts = histogram(&one_of(digits()).with_bias(0.5), 2000);
        assert!(counts[0] > counts[3], "{counts:?}");
        assert!(counts[3] > 0, "{counts:?}");
    }

    #[test]
    fn test_single_alternative_makes_no_choice() {
        let mut ctx = DrawContext::new(0);
        assert_eq!(ctx.draw(&one_of(vec![just(9).boxed()])).unwrap(), 9);
        assert_eq!(ctx.choices_used(), 0);
    }

    #[test]
    fn test_validation() {
        assert!(one_of::<i64>(vec![]).validate().is_err());
        assert!(one_of(digits()).with_bias(0.0).validate().is_err());
        assert!(one_of(digits()).with_bias(1.5).validate().is_err());
        assert!(one_of(vec![integers(3, 1).boxed()]).validate().is_err());
        assert!(one_of(digits()).with_bias(0.8).validate().is_ok());
    }

    #[test]
    fn test_description() {
        let strategy = one_of(vec![just(1).boxed(), integers(0, 2).boxed()]).with_bias(0.8);
        assert_eq!(
            format!("{strategy:?}"),
            "one_of([just(1), integers(0, 2)], bias=0.8)"
        );
    }

    #[test]
    fn test_empty_draw_rejected() {
        let mut ctx = DrawContext::new(0);
        assert!(matches!(
            ctx.draw(&one_of::<i64>(vec![])),
            Err(DrawError::Rejected(_))
        ));
    }
}
