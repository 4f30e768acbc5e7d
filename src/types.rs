//! Core types for the catalog store.

/// ProductID: opaque unique token assigned when a product is created
pub type ProductID = String;

/// Rating: one user score appended to a product
pub type Rating = i32;

/// Lowest accepted rating (inclusive)
pub const MIN_RATING: Rating = 0;

/// Highest accepted rating (inclusive)
pub const MAX_RATING: Rating = 5;
