//! Product category and its presentation names.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Product categories.
///
/// Persisted as the legacy integer discriminant, so the numbers here are part of the
/// file format and must not be renumbered. Codes outside the named set load as
/// [`ProductType::Other`] and are written back unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub enum ProductType {
    #[default]
    Undefined,
    Amateur,
    Antique,
    Collectable,
    Commercial,
    Other(i64),
}

impl ProductType {
    /// The named categories.
    pub const ALL: [ProductType; 5] = [
        ProductType::Undefined,
        ProductType::Amateur,
        ProductType::Antique,
        ProductType::Collectable,
        ProductType::Commercial,
    ];

    /// Stored discriminant
    pub fn code(self) -> i64 {
        match self {
            ProductType::Undefined => 0,
            ProductType::Amateur => 1,
            ProductType::Antique => 5,
            ProductType::Collectable => 130,
            ProductType::Commercial => 55,
            ProductType::Other(code) => code,
        }
    }

    /// Human-readable label for presentation. Undefined and unknown codes have no label.
    pub fn display_name(self) -> &'static str {
        match self {
            ProductType::Undefined => "",
            ProductType::Amateur => "Hand Made Items",
            ProductType::Antique => "Antiques",
            ProductType::Collectable => "Collectables",
            ProductType::Commercial => "Commercial goods",
            ProductType::Other(_) => "",
        }
    }
}

impl From<ProductType> for i64 {
    fn from(value: ProductType) -> Self {
        value.code()
    }
}

impl From<i64> for ProductType {
    fn from(code: i64) -> Self {
        ProductType::ALL
            .into_iter()
            .find(|kind| kind.code() == code)
            .unwrap_or(ProductType::Other(code))
    }
}

impl fmt::Display for ProductType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
