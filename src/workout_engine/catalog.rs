//! Exercise catalog providers.
//!
//! The generator only needs [`CatalogProvider::fetch_categories`]; where the
//! data lives is up to the implementation. Two are provided:
//!
//! - [`JsonCatalog`]: the JSON catalog document, either embedded in the crate,
//!   read from a file, or read from the file named by `HIIT_EXERCISES_PATH`.
//! - [`StaticCatalog`]: categories built in memory.
//!
//! Providers return data as stored. Escaping for HTML or any other display
//! format is the renderer's job.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::workout_engine::{
    config::{BUILTIN_EXERCISES_JSON, EXERCISES_PATH_ENV},
    error::CatalogError,
    models::{Category, CategorySummary},
};

/// Source of category display data and exercises.
pub trait CatalogProvider {
    /// Categories whose id is in `ids`, in catalog order; every category when
    /// `ids` is `None`. Unknown ids are simply absent from the result.
    fn fetch_categories(&self, ids: Option<&[String]>) -> Result<Vec<Category>, CatalogError>;

    /// Id and emoji of every category, without exercises.
    fn category_summaries(&self) -> Result<Vec<CategorySummary>, CatalogError> {
        Ok(self.fetch_categories(None)?.iter().map(Category::summary).collect())
    }
}

fn select(categories: &[Category], ids: Option<&[String]>) -> Vec<Category> {
    match ids {
        None => categories.to_vec(),
        Some(ids) => categories
            .iter()
            .filter(|c| ids.iter().any(|id| *id == c.id))
            .cloned()
            .collect(),
    }
}

// ---------------------------------------------------------------------------
// JSON document
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize, Deserialize)]
struct CatalogDocument {
    #[serde(rename = "exerciseCategories")]
    exercise_categories: Vec<Category>,
}

/// Catalog parsed from the JSON document format.
#[derive(Debug, Clone)]
pub struct JsonCatalog {
    categories: Vec<Category>,
}

impl JsonCatalog {
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let doc: CatalogDocument = serde_json::from_str(json)?;
        debug!(categories = doc.exercise_categories.len(), "parsed exercise catalog");
        Ok(JsonCatalog { categories: doc.exercise_categories })
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .map_err(|source| CatalogError::Io { path: path.to_path_buf(), source })?;
        debug!(path = %path.display(), "loaded exercise catalog file");
        Self::from_json_str(&json)
    }

    /// The catalog embedded in the crate.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json_str(BUILTIN_EXERCISES_JSON)
    }

    /// The file named by `HIIT_EXERCISES_PATH` if set, otherwise the embedded catalog.
    pub fn from_env_or_builtin() -> Result<Self, CatalogError> {
        Self::from_optional_path(env::var_os(EXERCISES_PATH_ENV).map(PathBuf::from))
    }

    fn from_optional_path(path: Option<PathBuf>) -> Result<Self, CatalogError> {
        match path {
            Some(path) => Self::from_path(path),
            None => Self::builtin(),
        }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }
}

impl CatalogProvider for JsonCatalog {
    fn fetch_categories(&self, ids: Option<&[String]>) -> Result<Vec<Category>, CatalogError> {
        Ok(select(&self.categories, ids))
    }
}

// ---------------------------------------------------------------------------
// In-memory
// ---------------------------------------------------------------------------

/// Catalog over categories the caller already holds.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    categories: Vec<Category>,
}

impl StaticCatalog {
    pub fn new(categories: Vec<Category>) -> Self {
        StaticCatalog { categories }
    }
}

impl CatalogProvider for StaticCatalog {
    fn fetch_categories(&self, ids: Option<&[String]>) -> Result<Vec<Category>, CatalogError> {
        Ok(select(&self.categories, ids))
    }
}
