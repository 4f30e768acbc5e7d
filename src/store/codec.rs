//! Data file codec
//!
//! The file is a JSON array of products. Property names are matched without regard to
//! ASCII case on read and written with their canonical names, pretty-printed.

use crate::product::{Comment, Product};
use serde_json::{Map, Value};

/// Parse the whole collection from file contents.
pub fn decode(contents: &str) -> Result<Vec<Product>, String> {
    let mut value: Value =
        serde_json::from_str(contents).map_err(|e| format!("Invalid JSON: {}", e))?;

    let items = match value.as_array_mut() {
        Some(items) => items,
        None => return Err("Expected a JSON array of products".to_string()),
    };

    for item in items.iter_mut() {
        if let Value::Object(map) = item {
            canonicalize_keys(map, Product::FIELD_NAMES);
            if let Some(Value::Array(comments)) = map.get_mut("CommentList") {
                for comment in comments.iter_mut() {
                    if let Value::Object(comment) = comment {
                        canonicalize_keys(comment, Comment::FIELD_NAMES);
                    }
                }
            }
        }
    }

    serde_json::from_value(value).map_err(|e| format!("Invalid product record: {}", e))
}

/// Serialize the whole collection, indented.
pub fn encode(products: &[Product]) -> Result<String, String> {
    serde_json::to_string_pretty(products).map_err(|e| format!("Failed to serialize: {}", e))
}

/// Rename keys that match a known property ignoring case to the canonical spelling.
///
/// Key order is kept. When two keys collapse to the same name the later one wins.
fn canonicalize_keys(map: &mut Map<String, Value>, canonical: &[&str]) {
    let needs_rewrite = map
        .keys()
        .any(|key| canonical_name(key, canonical).is_some_and(|name| name != key));
    if !needs_rewrite {
        return;
    }

    let original = std::mem::take(map);
    for (key, value) in original {
        let key = match canonical_name(&key, canonical) {
            Some(name) => name.to_string(),
            None => key,
        };
        map.insert(key, value);
    }
}

fn canonical_name<'a>(key: &str, canonical: &[&'a str]) -> Option<&'a str> {
    canonical
        .iter()
        .copied()
        .find(|name| name.eq_ignore_ascii_case(key))
}
