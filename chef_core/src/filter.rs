//! Allergy and avoid-list filtering.

use crate::Recipe;

/// Lowercased exclusion terms gathered from allergies and avoid items
#[derive(Clone, Debug, Default)]
pub struct Exclusions {
    terms: Vec<String>,
}

impl Exclusions {
    /// Blank terms are ignored, since an empty term would match every name.
    pub fn new(allergies: &[String], avoid_items: &[String]) -> Self {
        let terms = allergies
            .iter()
            .chain(avoid_items.iter())
            .filter(|t| !t.trim().is_empty())
            .map(|t| t.to_lowercase())
            .collect();
        Self { terms }
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// True if any ingredient name of `recipe` contains any exclusion term
    pub fn excludes(&self, recipe: &Recipe) -> bool {
        recipe.ingredients.iter().any(|ingredient| {
            let name = ingredient.name.to_lowercase();
            self.terms.iter().any(|term| name.contains(term.as_str()))
        })
    }
}

/// Keep the recipes that contain none of the excluded ingredients.
///
/// Catalog order is preserved. An empty result is valid.
pub fn filter_recipes<'a>(recipes: &'a [Recipe], exclusions: &Exclusions) -> Vec<&'a Recipe> {
    if exclusions.is_empty() {
        return recipes.iter().collect();
    }

    let kept: Vec<&Recipe> = recipes.iter().filter(|r| !exclusions.excludes(r)).collect();
    tracing::debug!(
        "Exclusion filter kept {} of {} recipes",
        kept.len(),
        recipes.len()
    );
    kept
}
