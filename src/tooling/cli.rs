//! CLI Tooling
//!
//! Command-line front end over the product store. Plays the part of the presentation
//! layer: it checks field constraints before updating and turns `None`/`false` results
//! into user-facing errors.

use crate::config::{CatalogConfig, ConfigLoader};
use crate::error::ApiError;
use crate::product::validation::validate_product;
use crate::product::Product;
use crate::store::{JsonFileProductStore, ProductStore};
use crate::tooling::format::{format_product_detail, format_product_table};
use crate::types::Rating;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// Catalog CLI - single-file product catalog
#[derive(Parser)]
#[command(name = "catalog")]
#[command(about = "Manage a product catalog stored in a single JSON file")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Products data file (overrides configuration)
    #[arg(long)]
    pub data_file: Option<PathBuf>,

    /// Configuration file path
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, file+stderr, both)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// List all products
    List {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Show one product
    Show {
        id: String,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Add a rating (0 to 5) to a product
    Rate {
        id: String,
        #[arg(allow_negative_numbers = true)]
        rating: Rating,
    },
    /// Create a placeholder product and print its id
    Create,
    /// Edit the editable fields of a product
    Update {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        image: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        genre: Option<String>,
        #[arg(long)]
        youtube_id: Option<String>,
        #[arg(long)]
        director: Option<String>,
    },
    /// Delete a product
    Delete { id: String },
}

impl Cli {
    /// Load configuration and fold in the command-line overrides.
    pub fn resolve_config(&self) -> Result<CatalogConfig, ApiError> {
        let mut config = match &self.config {
            Some(path) => ConfigLoader::load_from_file(path)?,
            None => ConfigLoader::load()?,
        };
        if let Some(data_file) = &self.data_file {
            config.store.data_file = Some(data_file.clone());
        }
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
        if let Some(format) = &self.log_format {
            config.logging.format = format.clone();
        }
        if let Some(output) = &self.log_output {
            config.logging.output = output.clone();
        }
        if let Some(file) = &self.log_file {
            config.logging.file = Some(file.clone());
        }
        Ok(config)
    }
}

/// CLI execution context
pub struct CliContext {
    store: Arc<dyn ProductStore>,
}

impl CliContext {
    /// Open the store described by configuration.
    pub fn new(config: &CatalogConfig) -> Result<Self, ApiError> {
        let store = JsonFileProductStore::open(&config.store)?;
        info!("Using data file {}", store.path().display());
        Ok(Self::with_store(Arc::new(store)))
    }

    pub fn with_store(store: Arc<dyn ProductStore>) -> Self {
        Self { store }
    }

    /// Execute a command and return its printable output.
    pub fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        match command {
            Commands::List { format } => {
                let products = self.store.get_all()?;
                match format.as_str() {
                    "json" => to_json(&products),
                    _ => Ok(format_product_table(&products)),
                }
            }
            Commands::Show { id, format } => {
                let product = self.find(id)?;
                match format.as_str() {
                    "json" => to_json(&product),
                    _ => Ok(format_product_detail(&product)),
                }
            }
            Commands::Rate { id, rating } => {
                if self.store.add_rating(id, *rating)? {
                    Ok(format!("Rated {} with {}", id, rating))
                } else {
                    Err(ApiError::RatingRejected(format!(
                        "product {} rating {}",
                        id, rating
                    )))
                }
            }
            Commands::Create => {
                let product = self.store.create()?;
                Ok(product.id)
            }
            Commands::Update {
                id,
                title,
                image,
                description,
                genre,
                youtube_id,
                director,
            } => {
                let mut edited = self.find(id)?;
                overlay(&mut edited.title, title);
                overlay(&mut edited.image, image);
                overlay(&mut edited.description, description);
                overlay(&mut edited.genre, genre);
                overlay(&mut edited.youtube_id, youtube_id);
                overlay(&mut edited.director, director);

                validate_product(&edited).map_err(ApiError::ValidationFailed)?;

                let updated = self
                    .store
                    .update(&edited)?
                    .ok_or_else(|| ApiError::ProductNotFound(id.clone()))?;
                Ok(format!("Updated {}", updated.id))
            }
            Commands::Delete { id } => match self.store.delete(id)? {
                Some(deleted) => Ok(format!("Deleted {}", deleted.id)),
                None => Err(ApiError::ProductNotFound(id.clone())),
            },
        }
    }

    fn find(&self, id: &str) -> Result<Product, ApiError> {
        self.store
            .get_by_id(id)?
            .ok_or_else(|| ApiError::ProductNotFound(id.to_string()))
    }
}

fn overlay(field: &mut Option<String>, value: &Option<String>) {
    if let Some(value) = value {
        *field = Some(value.clone());
    }
}

fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<String, ApiError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| ApiError::FormatError(e.to_string()))
}
