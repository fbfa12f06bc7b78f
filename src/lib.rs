//! recursive-gen
//!
//! Samples bounded recursive JSON documents using
//! [`recursive_strategy::RecursiveStrategy`].
//!
//! # CLI Usage
//!
//! ```bash
//! # Ten nested arrays with at most 50 integer leaves each
//! recursive-gen sample --seed 42 --count 10 --max-leaves 50
//!
//! # Objects, configured from a file, showing retry events
//! recursive-gen sample --config sample.yaml --shape object --show-events
//!
//! # Number of depth tiers built for a budget
//! recursive-gen tiers --max-leaves 1000
//! ```

pub mod config;
pub mod document;
pub mod sample;

pub use config::{SampleConfig, Shape};
pub use document::{count_leaves, document_strategy};
pub use sample::{run_sample, SampleReport};
