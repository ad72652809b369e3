//! Core domain types for the MyChef recommender.
//!
//! This module defines the fundamental types used throughout the system:
//! - Recipes and ingredients as they appear in the dataset
//! - Simplified recipe projections returned to callers
//! - Weekly meal plans, grocery lists and shopping buckets
//! - Quick dish recommendations

use serde::{Deserialize, Deserializer, Serialize};

/// Treat an explicit JSON `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// ============================================================================
// Dataset Types
// ============================================================================

/// A single ingredient line of a recipe
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Ingredient {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    pub quantity: Option<f64>,
    pub unit: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub text_quantity: String,
    #[serde(deserialize_with = "null_as_default")]
    pub notes: String,
}

/// One preparation step
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Step {
    pub step: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
}

/// A recipe from the catalog. Immutable once loaded.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Recipe {
    pub id: String,
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub source_path: String,
    pub image_path: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(deserialize_with = "null_as_default")]
    pub difficulty: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub servings: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub ingredients: Vec<Ingredient>,
    #[serde(deserialize_with = "null_as_default")]
    pub steps: Vec<Step>,
    pub prep_time_minutes: Option<u32>,
    pub cook_time_minutes: Option<u32>,
    pub total_time_minutes: Option<u32>,
    #[serde(deserialize_with = "null_as_default")]
    pub additional_notes: Vec<String>,
}

impl Recipe {
    /// True if any ingredient name contains `needle` (case-insensitive).
    ///
    /// `needle` must already be lowercase.
    pub fn has_ingredient_containing(&self, needle: &str) -> bool {
        self.ingredients
            .iter()
            .any(|i| i.name.to_lowercase().contains(needle))
    }
}

// ============================================================================
// Projections
// ============================================================================

/// Ingredient as shown in a simplified recipe
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SimpleIngredient {
    pub name: String,
    pub text_quantity: String,
}

/// Recipe reduced to what a caller needs to pick a dish
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SimpleRecipe {
    pub id: String,
    pub name: String,
    pub description: String,
    pub ingredients: Vec<SimpleIngredient>,
}

impl From<&Recipe> for SimpleRecipe {
    fn from(recipe: &Recipe) -> Self {
        Self {
            id: recipe.id.clone(),
            name: recipe.name.clone(),
            description: recipe.description.clone(),
            ingredients: recipe
                .ingredients
                .iter()
                .map(|i| SimpleIngredient {
                    name: i.name.clone(),
                    text_quantity: i.text_quantity.clone(),
                })
                .collect(),
        }
    }
}

/// Name and description only, used for full catalog listings
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct NameOnlyRecipe {
    pub name: String,
    pub description: String,
}

impl From<&Recipe> for NameOnlyRecipe {
    fn from(recipe: &Recipe) -> Self {
        Self {
            name: recipe.name.clone(),
            description: recipe.description.clone(),
        }
    }
}

// ============================================================================
// Grocery Types
// ============================================================================

/// Summed quantity of an aggregated ingredient.
///
/// Serialized as a number, or `null` once the total can no longer be
/// summed because contributions disagreed on unit or lacked a quantity.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "Option<f64>", into = "Option<f64>")]
pub enum TotalQuantity {
    Known(f64),
    Indeterminate,
}

impl TotalQuantity {
    pub fn is_indeterminate(&self) -> bool {
        matches!(self, TotalQuantity::Indeterminate)
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            TotalQuantity::Known(v) => Some(*v),
            TotalQuantity::Indeterminate => None,
        }
    }
}

impl From<Option<f64>> for TotalQuantity {
    fn from(value: Option<f64>) -> Self {
        value.map_or(TotalQuantity::Indeterminate, TotalQuantity::Known)
    }
}

impl From<TotalQuantity> for Option<f64> {
    fn from(value: TotalQuantity) -> Self {
        value.value()
    }
}

/// Ingredient usage merged across every recipe of one generation run
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AggregatedIngredient {
    pub name: String,
    pub total_quantity: TotalQuantity,
    /// Present only while `total_quantity` is known
    pub unit: Option<String>,
    pub recipe_count: u32,
    /// Distinct contributing recipe names, first-seen order
    pub recipes: Vec<String>,
}

/// Purchase buckets. Every aggregated ingredient lands in exactly one.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct ShoppingPlan {
    pub fresh: Vec<String>,
    pub pantry: Vec<String>,
    pub spices: Vec<String>,
    pub others: Vec<String>,
}

impl ShoppingPlan {
    /// Total number of names across all buckets
    pub fn len(&self) -> usize {
        self.fresh.len() + self.pantry.len() + self.spices.len() + self.others.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GroceryList {
    pub ingredients: Vec<AggregatedIngredient>,
    pub shopping_plan: ShoppingPlan,
}

// ============================================================================
// Plan Types
// ============================================================================

/// Dishes for one day of the week
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct DayPlan {
    pub day: String,
    pub breakfast: Vec<SimpleRecipe>,
    pub lunch: Vec<SimpleRecipe>,
    pub dinner: Vec<SimpleRecipe>,
}

impl DayPlan {
    pub fn new(day: impl Into<String>) -> Self {
        Self {
            day: day.into(),
            ..Self::default()
        }
    }

    /// Iterate every dish of the day, breakfast first
    pub fn dishes(&self) -> impl Iterator<Item = &SimpleRecipe> {
        self.breakfast
            .iter()
            .chain(self.lunch.iter())
            .chain(self.dinner.iter())
    }
}

/// Five weekdays, two weekend days and the derived grocery list
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyMealPlan {
    pub weekdays: Vec<DayPlan>,
    pub weekend: Vec<DayPlan>,
    pub grocery_list: GroceryList,
}

impl WeeklyMealPlan {
    /// All seven days in order
    pub fn days(&self) -> impl Iterator<Item = &DayPlan> {
        self.weekdays.iter().chain(self.weekend.iter())
    }
}

/// A single balanced dish combination
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DishRecommendation {
    pub people_count: u32,
    pub meat_dish_count: u32,
    pub vegetable_dish_count: u32,
    pub dishes: Vec<SimpleRecipe>,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grocery_list: Option<GroceryList>,
}

// ============================================================================
// Catalog Type
// ============================================================================

/// The full, read-only set of known recipes and their categories
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Catalog {
    pub recipes: Vec<Recipe>,
    /// Distinct non-empty categories in first-seen order
    pub categories: Vec<String>,
}
