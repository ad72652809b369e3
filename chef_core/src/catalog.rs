//! Recipe catalog construction, validation and read-only projections.
//!
//! A catalog is built once at startup and never mutated afterwards; every
//! planner works on its own per-request pools borrowed from it.

use crate::types::*;
use crate::{Error, Result};
use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Recipe archive compiled into the binary, used when no other source works
pub const BUNDLED_ARCHIVE: &str = include_str!("../data/all_recipes.json");

/// Bundled catalog - parsed once and reused across all operations
static BUNDLED_CATALOG: Lazy<Catalog> = Lazy::new(|| match Catalog::from_archive_json(BUNDLED_ARCHIVE) {
    Ok(catalog) => catalog,
    Err(e) => {
        tracing::warn!("Bundled recipe archive is unreadable: {}", e);
        Catalog::empty()
    }
});

/// Get a reference to the catalog parsed from the bundled archive
pub fn bundled_catalog() -> &'static Catalog {
    &BUNDLED_CATALOG
}

impl Catalog {
    /// A catalog with no recipes and no categories
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a catalog, deriving the category list from the recipes
    pub fn from_recipes(recipes: Vec<Recipe>) -> Self {
        let mut seen = HashSet::new();
        let categories = recipes
            .iter()
            .filter(|r| !r.category.is_empty())
            .filter(|r| seen.insert(r.category.as_str()))
            .map(|r| r.category.clone())
            .collect();

        Self {
            recipes,
            categories,
        }
    }

    /// Parse a JSON archive (an array of recipes).
    ///
    /// The top level must be an array. Individual entries that do not have
    /// the recipe shape, lack an id or name, or repeat an earlier id are
    /// dropped with a warning instead of failing the whole load.
    pub fn from_archive_json(text: &str) -> Result<Self> {
        let entries: Vec<serde_json::Value> = serde_json::from_str(text)?;
        let total = entries.len();

        let mut ids = HashSet::new();
        let mut recipes = Vec::with_capacity(total);

        for (index, entry) in entries.into_iter().enumerate() {
            let recipe: Recipe = match serde_json::from_value(entry) {
                Ok(recipe) => recipe,
                Err(e) => {
                    tracing::warn!("Skipping catalog entry {}: {}", index, e);
                    continue;
                }
            };

            if recipe.id.trim().is_empty() || recipe.name.trim().is_empty() {
                tracing::warn!("Skipping catalog entry {}: missing id or name", index);
                continue;
            }

            if !ids.insert(recipe.id.clone()) {
                tracing::warn!(
                    "Skipping catalog entry {}: duplicate id '{}'",
                    index,
                    recipe.id
                );
                continue;
            }

            recipes.push(recipe);
        }

        if recipes.len() < total {
            tracing::info!(
                "Accepted {} of {} catalog entries",
                recipes.len(),
                total
            );
        }

        Ok(Self::from_recipes(recipes))
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    pub fn has_category(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c == category)
    }

    /// Recipes whose category is exactly `category`
    pub fn recipes_in_category<'a>(
        &'a self,
        category: &'a str,
    ) -> impl Iterator<Item = &'a Recipe> + 'a {
        self.recipes.iter().filter(move |r| r.category == category)
    }

    /// Name and description of every recipe, in catalog order
    pub fn name_only(&self) -> Vec<NameOnlyRecipe> {
        self.recipes.iter().map(NameOnlyRecipe::from).collect()
    }

    /// Simplified recipes of one known category
    pub fn simplified_by_category(&self, category: &str) -> Result<Vec<SimpleRecipe>> {
        if !self.has_category(category) {
            return Err(Error::UnknownCategory(category.to_string()));
        }

        Ok(self
            .recipes_in_category(category)
            .map(SimpleRecipe::from)
            .collect())
    }

    /// Validate catalog integrity
    ///
    /// Returns a list of validation errors (empty if valid)
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        let mut ids = HashSet::new();

        for recipe in &self.recipes {
            if recipe.id.is_empty() {
                errors.push(format!("Recipe '{}' has empty ID", recipe.name));
            } else if !ids.insert(recipe.id.as_str()) {
                errors.push(format!("Duplicate recipe ID '{}'", recipe.id));
            }

            if recipe.name.is_empty() {
                errors.push(format!("Recipe '{}' has empty name", recipe.id));
            }

            if recipe
                .ingredients
                .iter()
                .any(|ingredient| ingredient.name.trim().is_empty())
            {
                errors.push(format!(
                    "Recipe '{}' has an ingredient with an empty name",
                    recipe.id
                ));
            }
        }

        for category in &self.categories {
            if !self.recipes.iter().any(|r| &r.category == category) {
                errors.push(format!("Category '{}' has no recipes", category));
            }
        }

        errors
    }
}
