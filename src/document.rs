//! Recursive JSON document strategy.

use crate::config::{SampleConfig, Shape};
use recursive_strategy::{extension, Extension, RecursiveStrategy};
use serde_json::{Map, Value};
use std::sync::Arc;
use strategy_core::strategies::{integers, vecs};
use strategy_core::{BoxedStrategy, StrategyExt};

/// Build the document strategy described by `config`.
///
/// Leaves are JSON integers; each extension layer wraps a number of
/// sub-documents in an array or an object.
pub fn document_strategy(config: &SampleConfig) -> RecursiveStrategy<Value> {
    let leaf = integers(config.leaf.min, config.leaf.max)
        .map("json_number", Value::from)
        .boxed();

    let (min, max) = (config.children.min, config.children.max);
    let layer: Arc<dyn Extension<Value>> = match config.shape {
        Shape::Array => Arc::new(extension("json_arrays", move |inner: BoxedStrategy<Value>| {
            vecs(inner, min, max).map("json_array", Value::Array).boxed()
        })),
        Shape::Object => Arc::new(extension("json_objects", move |inner: BoxedStrategy<Value>| {
            vecs(inner, min, max)
                .map("json_object", |children: Vec<Value>| {
                    let fields: Map<String, Value> = children
                        .into_iter()
                        .enumerate()
                        .map(|(i, child)| (format!("k{i}"), child))
                        .collect();
                    Value::Object(fields)
                })
                .boxed()
        })),
    };

    RecursiveStrategy::new(leaf, layer, config.recursive_options())
}

/// Number of leaves in a generated document.
pub fn count_leaves(value: &Value) -> usize {
    match value {
        Value::Array(items) => items.iter().map(count_leaves).sum(),
        Value::Object(fields) => fields.values().map(count_leaves).sum(),
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ChildRange, LeafRange};
    use strategy_core::{DrawContext, Strategy};

    #[test]
    fn test_array_documents_within_budget() {
        let config = SampleConfig {
            max_leaves: 6,
            ..SampleConfig::default()
        };
        let strategy = document_strategy(&config);
        assert!(strategy.validate().is_ok());

        for seed in 0..50 {
            let doc = DrawContext::new(seed).draw(&strategy).unwrap();
            assert!(doc.is_array() || doc.is_i64(), "{doc}");
            assert!(count_leaves(&doc) <= 6, "{doc}");
        }
    }

    #[test]
    fn test_object_documents_use_indexed_keys() {
        let config = SampleConfig {
            shape: Shape::Object,
            children: ChildRange { min: 2, max: 2 },
            max_leaves: 4,
            ..SampleConfig::default()
        };
        let strategy = document_strategy(&config);

        let objects: Vec<Value> = (0..30)
            .map(|seed| DrawContext::new(seed).draw(&strategy).unwrap())
            .filter(Value::is_object)
            .collect();
        assert!(!objects.is_empty());
        for doc in objects {
            let keys: Vec<&String> = doc.as_object().unwrap().keys().collect();
            assert_eq!(keys, ["k0", "k1"]);
        }
    }

    #[test]
    fn test_leaf_range_respected() {
        let config = SampleConfig {
            leaf: LeafRange { min: 3, max: 3 },
            max_leaves: 1,
            ..SampleConfig::default()
        };
        let strategy = document_strategy(&config);

        for seed in 0..10 {
            let doc = DrawContext::new(seed).draw(&strategy).unwrap();
            // Arrays of a single leaf also fit a budget of one.
            assert!(doc == Value::from(3) || doc == serde_json::json!([3]), "{doc}");
        }
    }

    #[test]
    fn test_invalid_leaf_range_fails_validation() {
        let config = SampleConfig {
            leaf: LeafRange { min: 1, max: 0 },
            ..SampleConfig::default()
        };
        assert!(document_strategy(&config).validate().is_err());
    }

    #[test]
    fn test_count_leaves() {
        let doc = serde_json::json!([1, [2, 3], {"k0": 4, "k1": []}]);
        assert_eq!(count_leaves(&doc), 4);
    }
}
