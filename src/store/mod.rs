//! Product Store
//!
//! The data file is the single source of truth. Every operation reads the whole
//! collection fresh and every mutation writes the whole collection back.

pub mod codec;
pub mod json_file;

pub use json_file::JsonFileProductStore;

use crate::error::StorageError;
use crate::product::Product;
use crate::types::Rating;

/// Product store interface
///
/// All calls block on file I/O.
pub trait ProductStore: Send + Sync {
    /// Every product, in file order.
    fn get_all(&self) -> Result<Vec<Product>, StorageError>;

    /// First product with the given id, if any.
    fn get_by_id(&self, id: &str) -> Result<Option<Product>, StorageError>;

    /// Append a rating to a product.
    ///
    /// Returns `InvalidInput` for an empty id or a rating outside
    /// [`MIN_RATING`](crate::types::MIN_RATING)..=[`MAX_RATING`](crate::types::MAX_RATING),
    /// and `NotFound` when no product has the id. Rejections never write the file.
    fn try_add_rating(&self, product_id: &str, rating: Rating) -> Result<(), StorageError>;

    /// Boolean form of [`try_add_rating`](Self::try_add_rating): rejections become
    /// `Ok(false)`, storage failures still propagate.
    fn add_rating(&self, product_id: &str, rating: Rating) -> Result<bool, StorageError> {
        match self.try_add_rating(product_id, rating) {
            Ok(()) => Ok(true),
            Err(e) if e.is_rejection() => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Copy the editable fields of `product` onto the stored product with the same id.
    ///
    /// Returns the stored product after the edit, or `None` without writing when the id
    /// is unknown. See [`Product::apply_edits`] for which fields are taken.
    fn update(&self, product: &Product) -> Result<Option<Product>, StorageError>;

    /// Append a new placeholder product with a fresh id.
    fn create(&self) -> Result<Product, StorageError>;

    /// Remove the product with the given id, returning it.
    ///
    /// The collection is rewritten even when nothing matched.
    fn delete(&self, id: &str) -> Result<Option<Product>, StorageError>;
}
