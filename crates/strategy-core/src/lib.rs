//! Generation strategies and the context they draw from.
//!
//! This crate provides the capability every generation strategy satisfies
//! and the small set of concrete strategies needed to build recursive data
//! shapes on top of it.
//!
//! # Architecture
//!
//! ```text
//! Strategy (trait)
//!    │  draw(&mut DrawContext) -> DrawResult<Value>
//!    │  validate() -> Result<(), ConfigError>
//!    │
//!    ├─── integers / booleans / just     (leaves)
//!    ├─── vecs / map                     (one layer of structure)
//!    └─── one_of                         (weighted alternative)
//!
//! DrawContext
//!    - rng (StdRng, seeded)
//!    - choice allowance
//!    - noted events
//!    - leaf budgets of capped guards
//! ```
//!
//! # Example
//!
//! ```rust
//! use strategy_core::strategies::{integers, vecs};
//! use strategy_core::DrawContext;
//!
//! let strategy = vecs(integers(0, 10), 1, 4);
//! let mut ctx = DrawContext::new(42);
//! let value = ctx.draw(&strategy).unwrap();
//! assert!((1..=4).contains(&value.len()));
//! ```

pub mod context;
pub mod error;
pub mod strategies;
pub mod strategy;

// Re-exports for convenience
pub use context::{DrawConfig, DrawContext, DEFAULT_MAX_CHOICES};
pub use error::{ConfigError, DrawError, DrawResult, GuardId};
pub use strategy::{BoxedStrategy, Map, Strategy, StrategyExt};
