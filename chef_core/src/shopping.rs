//! Shopping bucket classification.
//!
//! Stateless keyword matching that sorts aggregated ingredients into the
//! buckets of a [`ShoppingPlan`]. Keyword lists are checked in a fixed
//! priority order (spices, then fresh, then pantry) and the first list with
//! a substring match wins. Anything unmatched goes to "others".

use crate::config::ShoppingConfig;
use crate::{AggregatedIngredient, GroceryList, ShoppingPlan};

/// Bucket of a shopping plan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShoppingBucket {
    Spices,
    Fresh,
    Pantry,
    Others,
}

impl ShoppingBucket {
    pub fn as_str(&self) -> &str {
        match self {
            ShoppingBucket::Spices => "spices",
            ShoppingBucket::Fresh => "fresh",
            ShoppingBucket::Pantry => "pantry",
            ShoppingBucket::Others => "others",
        }
    }
}

/// Keyword classifier built from [`ShoppingConfig`]
#[derive(Clone, Debug)]
pub struct ShoppingCategorizer {
    spices: Vec<String>,
    fresh: Vec<String>,
    pantry: Vec<String>,
}

fn lowercase_all(keywords: &[String]) -> Vec<String> {
    keywords.iter().map(|k| k.to_lowercase()).collect()
}

impl ShoppingCategorizer {
    pub fn new(config: &ShoppingConfig) -> Self {
        Self {
            spices: lowercase_all(&config.spice_keywords),
            fresh: lowercase_all(&config.fresh_keywords),
            pantry: lowercase_all(&config.pantry_keywords),
        }
    }

    /// Classify one ingredient name
    pub fn classify(&self, ingredient_name: &str) -> ShoppingBucket {
        let name = ingredient_name.to_lowercase();
        let matches = |keywords: &[String]| keywords.iter().any(|k| name.contains(k.as_str()));

        if matches(&self.spices[..]) {
            ShoppingBucket::Spices
        } else if matches(&self.fresh[..]) {
            ShoppingBucket::Fresh
        } else if matches(&self.pantry[..]) {
            ShoppingBucket::Pantry
        } else {
            ShoppingBucket::Others
        }
    }

    /// Partition ingredient names into buckets, keeping input order
    pub fn categorize(&self, ingredients: &[AggregatedIngredient]) -> ShoppingPlan {
        let mut plan = ShoppingPlan::default();
        for ingredient in ingredients {
            let bucket = match self.classify(&ingredient.name) {
                ShoppingBucket::Spices => &mut plan.spices,
                ShoppingBucket::Fresh => &mut plan.fresh,
                ShoppingBucket::Pantry => &mut plan.pantry,
                ShoppingBucket::Others => &mut plan.others,
            };
            bucket.push(ingredient.name.clone());
        }
        plan
    }
}

/// Pair sorted aggregated ingredients with their shopping plan
pub fn build_grocery_list(
    ingredients: Vec<AggregatedIngredient>,
    config: &ShoppingConfig,
) -> GroceryList {
    let shopping_plan = ShoppingCategorizer::new(config).categorize(&ingredients);
    GroceryList {
        ingredients,
        shopping_plan,
    }
}
