//! Ingredient aggregation across the recipes of one generation run.
//!
//! Ingredients merge on their lowercase name. Quantities are summed only
//! while every contribution carries a quantity in the same unit; the first
//! disagreement turns the total indeterminate for good.

use crate::{AggregatedIngredient, Ingredient, Recipe, TotalQuantity};
use indexmap::map::Entry;
use indexmap::IndexMap;

/// Accumulates ingredient usage, remembering first-appearance order
#[derive(Clone, Debug, Default)]
pub struct IngredientAggregator {
    entries: IndexMap<String, AggregatedIngredient>,
}

impl IngredientAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge every ingredient line of `recipe`
    pub fn add_recipe(&mut self, recipe: &Recipe) {
        for ingredient in &recipe.ingredients {
            self.add_ingredient(&recipe.name, ingredient);
        }
    }

    fn add_ingredient(&mut self, recipe_name: &str, ingredient: &Ingredient) {
        let key = ingredient.name.to_lowercase();

        match self.entries.entry(key) {
            Entry::Vacant(slot) => {
                let total_quantity = TotalQuantity::from(ingredient.quantity);
                let unit = if total_quantity.is_indeterminate() {
                    None
                } else {
                    ingredient.unit.clone()
                };
                let name = slot.key().clone();
                slot.insert(AggregatedIngredient {
                    name,
                    total_quantity,
                    unit,
                    recipe_count: 1,
                    recipes: vec![recipe_name.to_string()],
                });
            }
            Entry::Occupied(slot) => {
                let existing = slot.into_mut();

                let same_unit = matches!(
                    (&existing.unit, &ingredient.unit),
                    (Some(a), Some(b)) if !a.is_empty() && a == b
                );
                existing.total_quantity = match (existing.total_quantity, ingredient.quantity) {
                    (TotalQuantity::Known(sum), Some(quantity)) if same_unit => {
                        TotalQuantity::Known(sum + quantity)
                    }
                    _ => TotalQuantity::Indeterminate,
                };
                if existing.total_quantity.is_indeterminate() {
                    existing.unit = None;
                }

                existing.recipe_count += 1;
                if !existing.recipes.iter().any(|r| r == recipe_name) {
                    existing.recipes.push(recipe_name.to_string());
                }
            }
        }
    }

    /// Finish aggregation, most used ingredients first.
    ///
    /// The sort is stable, so equal counts keep first-appearance order.
    pub fn into_sorted(self) -> Vec<AggregatedIngredient> {
        let mut ingredients: Vec<AggregatedIngredient> = self.entries.into_values().collect();
        ingredients.sort_by(|a, b| b.recipe_count.cmp(&a.recipe_count));
        ingredients
    }
}

/// Aggregate the ingredients of `recipes` in one pass
pub fn aggregate_ingredients<'a, I>(recipes: I) -> Vec<AggregatedIngredient>
where
    I: IntoIterator<Item = &'a Recipe>,
{
    let mut aggregator = IngredientAggregator::new();
    for recipe in recipes {
        aggregator.add_recipe(recipe);
    }
    aggregator.into_sorted()
}
