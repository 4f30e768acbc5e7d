//! JSON file backed product store.

use crate::concurrency::PathLockManager;
use crate::config::StoreConfig;
use crate::error::StorageError;
use crate::product::Product;
use crate::store::{codec, ProductStore};
use crate::types::{Rating, MAX_RATING, MIN_RATING};
use parking_lot::Mutex;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Product store over one JSON data file
///
/// Holds no product state. Mutations run their whole read-modify-write cycle under the
/// file's writer lock from [`PathLockManager::global`], and replace the file atomically
/// through a sibling temp file.
pub struct JsonFileProductStore {
    path: PathBuf,
    write_lock: Arc<Mutex<()>>,
}

impl JsonFileProductStore {
    /// Store over `path`. The file is not touched until the first operation.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let path = std::path::absolute(&path).unwrap_or(path);
        let write_lock = PathLockManager::global().get_lock(&path);
        Self { path, write_lock }
    }

    /// Open the store described by configuration, seeding an empty collection when
    /// `create_if_missing` is set and the file does not exist yet.
    pub fn open(config: &StoreConfig) -> Result<Self, StorageError> {
        let path = config
            .resolve_data_file()
            .map_err(|e| StorageError::unavailable(PathBuf::new(), e))?;
        let store = Self::new(path);

        if config.create_if_missing {
            let _guard = store.write_lock.lock();
            if !store.path.exists() {
                info!("Seeding empty product collection at {}", store.path.display());
                store.save(&[])?;
            }
        }

        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Vec<Product>, StorageError> {
        let contents = std::fs::read_to_string(&self.path)
            .map_err(|e| StorageError::unavailable(&self.path, e))?;
        let products =
            codec::decode(&contents).map_err(|e| StorageError::unavailable(&self.path, e))?;
        debug!(
            path = %self.path.display(),
            count = products.len(),
            "Loaded product collection"
        );
        Ok(products)
    }

    /// Replace the data file with `products`.
    ///
    /// Must be called with the writer lock held.
    fn save(&self, products: &[Product]) -> Result<(), StorageError> {
        let contents =
            codec::encode(products).map_err(|e| StorageError::unavailable(&self.path, e))?;

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(dir).map_err(|e| {
            StorageError::unavailable(&self.path, format!("Failed to create directory: {}", e))
        })?;

        let mut tmp = tempfile::NamedTempFile::new_in(dir)
            .map_err(|e| StorageError::unavailable(&self.path, e))?;
        tmp.write_all(contents.as_bytes())
            .and_then(|_| tmp.as_file().sync_all())
            .map_err(|e| StorageError::unavailable(&self.path, e))?;
        // The temp file is created owner-only; the replacement keeps the existing mode
        if let Ok(metadata) = std::fs::metadata(&self.path) {
            tmp.as_file()
                .set_permissions(metadata.permissions())
                .map_err(|e| StorageError::unavailable(&self.path, e))?;
        }
        tmp.persist(&self.path)
            .map_err(|e| StorageError::unavailable(&self.path, e.error))?;

        debug!(
            path = %self.path.display(),
            count = products.len(),
            "Saved product collection"
        );
        Ok(())
    }

    fn fresh_id(products: &[Product]) -> String {
        loop {
            let id = Uuid::new_v4().to_string();
            if !products.iter().any(|p| p.id == id) {
                return id;
            }
        }
    }
}

impl ProductStore for JsonFileProductStore {
    fn get_all(&self) -> Result<Vec<Product>, StorageError> {
        self.load()
    }

    fn get_by_id(&self, id: &str) -> Result<Option<Product>, StorageError> {
        Ok(self.load()?.into_iter().find(|p| p.id == id))
    }

    fn try_add_rating(&self, product_id: &str, rating: Rating) -> Result<(), StorageError> {
        if product_id.is_empty() {
            warn!("Rating rejected: empty product id");
            return Err(StorageError::InvalidInput(
                "Product id must not be empty".to_string(),
            ));
        }
        if !(MIN_RATING..=MAX_RATING).contains(&rating) {
            warn!(product_id, rating, "Rating rejected: out of range");
            return Err(StorageError::InvalidInput(format!(
                "Rating {} outside {}..={}",
                rating, MIN_RATING, MAX_RATING
            )));
        }

        let _guard = self.write_lock.lock();
        let mut products = self.load()?;
        let product = match products.iter_mut().find(|p| p.id == product_id) {
            Some(product) => product,
            None => {
                warn!(product_id, "Rating rejected: unknown product");
                return Err(StorageError::NotFound(product_id.to_string()));
            }
        };
        product.push_rating(rating);
        self.save(&products)?;

        info!(product_id, rating, "Rating added");
        Ok(())
    }

    fn update(&self, product: &Product) -> Result<Option<Product>, StorageError> {
        let _guard = self.write_lock.lock();
        let mut products = self.load()?;
        let stored = match products.iter_mut().find(|p| p.id == product.id) {
            Some(stored) => stored,
            None => {
                debug!(product_id = %product.id, "Update skipped: unknown product");
                return Ok(None);
            }
        };
        stored.apply_edits(product);
        let updated = stored.clone();
        self.save(&products)?;

        info!(product_id = %updated.id, "Product updated");
        Ok(Some(updated))
    }

    fn create(&self) -> Result<Product, StorageError> {
        let _guard = self.write_lock.lock();
        let mut products = self.load()?;
        let product = Product::placeholder(Self::fresh_id(&products));
        products.push(product.clone());
        self.save(&products)?;

        info!(product_id = %product.id, "Product created");
        Ok(product)
    }

    fn delete(&self, id: &str) -> Result<Option<Product>, StorageError> {
        let _guard = self.write_lock.lock();
        let products = self.load()?;
        let deleted = products.iter().find(|p| p.id == id).cloned();
        let remaining: Vec<Product> = products.into_iter().filter(|p| p.id != id).collect();
        self.save(&remaining)?;

        match &deleted {
            Some(_) => info!(product_id = id, "Product deleted"),
            None => debug!(product_id = id, "Delete matched no product"),
        }
        Ok(deleted)
    }
}
