//! Product catalog and recipes.

use crate::error::GroceryError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::path::Path;

/// A product that can be added to the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: String,
    pub name: String,
    /// Unit price in rupees.
    pub price: f64,
    /// Any other fields present in the catalog file (brand, unit, tags...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The products on offer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    /// Wraps a list of products.
    pub fn new(items: Vec<CatalogItem>) -> Self {
        Self { items }
    }

    /// Parses a catalog from a JSON array of items.
    pub fn from_json(json: &str) -> Result<Self, GroceryError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads the catalog file.
    ///
    /// A missing file yields an empty catalog so the agent can still start;
    /// any other read or parse failure is returned.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, GroceryError> {
        let path = path.as_ref();
        match read_optional(path)? {
            Some(json) => {
                let catalog = Self::from_json(&json)?;
                tracing::info!(path = %path.display(), items = catalog.len(), "loaded catalog");
                Ok(catalog)
            }
            None => {
                tracing::error!(path = %path.display(), "catalog file not found");
                Ok(Self::default())
            }
        }
    }

    /// Finds a product by name, ignoring case and surrounding whitespace.
    pub fn find_by_name(&self, name: &str) -> Option<&CatalogItem> {
        let wanted = name.trim().to_lowercase();
        self.items.iter().find(|i| i.name.to_lowercase() == wanted)
    }

    /// Finds a product by its exact id.
    pub fn find_by_id(&self, id: &str) -> Option<&CatalogItem> {
        self.items.iter().find(|i| i.id == id)
    }

    /// All products, in file order.
    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Recipe name to ingredient product ids.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Recipes {
    recipes: HashMap<String, Vec<String>>,
}

impl Recipes {
    /// Wraps a recipe map. Keys should already be normalized.
    pub fn new(recipes: HashMap<String, Vec<String>>) -> Self {
        Self { recipes }
    }

    /// Parses recipes from a JSON object of name to id list.
    pub fn from_json(json: &str) -> Result<Self, GroceryError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads the recipes file; a missing file yields no recipes.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, GroceryError> {
        let path = path.as_ref();
        match read_optional(path)? {
            Some(json) => Self::from_json(&json),
            None => {
                tracing::error!(path = %path.display(), "recipes file not found");
                Ok(Self::default())
            }
        }
    }

    /// Ingredient ids for a recipe, looked up by its spoken name
    /// ("Peanut Butter Sandwich" matches the key `peanut_butter_sandwich`).
    pub fn ingredients(&self, recipe: &str) -> Option<&[String]> {
        self.recipes
            .get(&Self::key(recipe))
            .map(|ids| ids.as_slice())
    }

    fn key(recipe: &str) -> String {
        recipe.trim().to_lowercase().replace(' ', "_")
    }
}

fn read_optional(path: &Path) -> Result<Option<String>, GroceryError> {
    match std::fs::read_to_string(path) {
        Ok(contents) => Ok(Some(contents)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(GroceryError::Io(e)),
    }
}
