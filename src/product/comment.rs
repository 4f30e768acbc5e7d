//! Comment entries attached to a product.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One user comment. The store carries comments through untouched; fields it does not
/// know about are kept in `extra` so they survive a rewrite.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    #[serde(rename = "Id", default)]
    pub id: Option<String>,

    #[serde(rename = "Author", default)]
    pub author: Option<String>,

    #[serde(rename = "Text", default)]
    pub text: Option<String>,

    #[serde(rename = "Timestamp", default)]
    pub timestamp: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Comment {
    /// Persisted property names, used for case-insensitive matching on read.
    pub const FIELD_NAMES: &'static [&'static str] = &["Id", "Author", "Text", "Timestamp"];
}
