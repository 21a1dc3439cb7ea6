use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;
use crate::models::Product;

/// Catalog shipped with the service, used when no catalog file is configured
const BUILTIN_CATALOG: &str = include_str!("../../data/catalog.json");

/// Errors that can occur while loading a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate product id: {0}")]
    DuplicateId(String),
}

/// Read-only product catalog
///
/// Cloning is cheap; all clones share the same product list.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    products: Arc<Vec<Product>>,
}

impl CatalogStore {
    /// Build a catalog, rejecting duplicate product ids
    pub fn from_products(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen.insert(product.id.as_str()) {
                return Err(CatalogError::DuplicateId(product.id.clone()));
            }
        }

        Ok(Self {
            products: Arc::new(products),
        })
    }

    /// Parse a catalog from a JSON array of products
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Self::from_products(products)
    }

    /// Load a catalog from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let store = Self::from_json(&json)?;
        tracing::info!("Loaded {} products from {}", store.len(), path.display());
        Ok(store)
    }

    /// The built-in default catalog
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_CATALOG)
    }

    /// Load from `path` when given, otherwise fall back to the built-in catalog
    pub fn load_or_builtin(path: Option<&str>) -> Result<Self, CatalogError> {
        match path {
            Some(path) => Self::load(path),
            None => {
                tracing::info!("No catalog path configured, using built-in catalog");
                Self::builtin()
            }
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
