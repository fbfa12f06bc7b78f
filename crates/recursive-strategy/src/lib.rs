//! Bounded recursive value generation.
//!
//! [`RecursiveStrategy`] generates self-referential data such as trees and
//! nested expressions from a leaf strategy and an [`Extension`] that adds one
//! layer of structure. Every generated value uses at most `max_leaves` leaf
//! draws.
//!
//! # Architecture
//!
//! ```text
//! RecursiveStrategy::draw
//!        │  open capped scope (max_leaves) ──┐
//!        ▼                                   │ retry on LimitReached
//!   one_of(tiers)                            │ (first retry noted as event)
//!        │                                   │
//!        ▼                                   │
//!   extend(...extend(leaf))                  │
//!        │                                   │
//!        ▼                                   │
//!   LimitedStrategy ── budget exhausted ─────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use recursive_strategy::{extension, recursive};
//! use strategy_core::strategies::{integers, vecs};
//! use strategy_core::{BoxedStrategy, DrawContext, StrategyExt};
//!
//! let sums = recursive(
//!     integers(1, 1),
//!     extension("sums", |inner: BoxedStrategy<i64>| {
//!         vecs(inner, 1, 3).map("sum", |xs: Vec<i64>| xs.iter().sum::<i64>()).boxed()
//!     }),
//!     10,
//! );
//!
//! let mut ctx = DrawContext::new(42);
//! let total = ctx.draw(&sums).unwrap();
//! assert!((1..=10).contains(&total));
//! ```

pub mod extension;
pub mod limited;
pub mod recursive;

// Re-exports for convenience
pub use extension::{extension, Extension, FnExtension};
pub use limited::LimitedStrategy;
pub use recursive::{
    recursive, RecursiveOptions, RecursiveStrategy, DEFAULT_MAX_LEAVES, DEFAULT_TIER_BIAS,
};
