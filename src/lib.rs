//! Catalog: single-file product catalog store
//!
//! Persists a collection of products in one JSON file. The file is the only durable
//! state: every read loads the whole collection and every mutation rewrites it.

pub mod concurrency;
pub mod config;
pub mod error;
pub mod logging;
pub mod product;
pub mod store;
pub mod tooling;
pub mod types;

pub use error::{ApiError, StorageError};
pub use product::{Comment, Product, ProductType};
pub use store::{JsonFileProductStore, ProductStore};
