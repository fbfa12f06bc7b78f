//! Concrete strategies.
//!
//! This module provides the simple leaf strategies and the combinators
//! needed to build recursive shapes on top of them.

pub mod collection;
pub mod just;
pub mod numeric;
pub mod one_of;

pub use collection::{vecs, VecStrategy};
pub use just::{just, Just};
pub use numeric::{booleans, integers, Booleans, IntegerRange};
pub use one_of::{one_of, OneOf};
