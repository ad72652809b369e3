//! Quick "what to eat" recommendation.
//!
//! Picks one balanced set of dishes for a group:
//! 1. Large groups get a dedicated fish dish from the aquatic category
//! 2. Meat dishes are chosen by meat type priority, one per type
//! 3. Any remaining meat quota is filled at random
//! 4. Vegetable dishes are filled at random
//!
//! Short candidate lists shrink the result instead of failing.

use crate::aggregate::aggregate_ingredients;
use crate::config::{CategoryNames, RecommendConfig, ShoppingConfig};
use crate::random::IndexSource;
use crate::shopping::build_grocery_list;
use crate::{DishRecommendation, Recipe, SimpleRecipe};

/// Requested meat and vegetable dish counts for a group
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DishQuota {
    pub meat: u32,
    pub vegetable: u32,
}

impl DishQuota {
    pub fn for_people(people_count: u32) -> Self {
        Self {
            meat: (people_count + 1).div_ceil(2),
            vegetable: (people_count + 1) / 2,
        }
    }
}

/// Dishes chosen by [`recommend_dishes`], grouped by how they were picked
#[derive(Clone, Debug, Default)]
pub struct DishSelection<'a> {
    pub fish: Option<&'a Recipe>,
    pub meat: Vec<&'a Recipe>,
    pub vegetable: Vec<&'a Recipe>,
}

impl<'a> DishSelection<'a> {
    /// Fish dish first, then meat, then vegetable dishes
    pub fn dishes(&self) -> impl Iterator<Item = &'a Recipe> + '_ {
        self.fish
            .into_iter()
            .chain(self.meat.iter().copied())
            .chain(self.vegetable.iter().copied())
    }

    /// Meat dish count, including the fish dish
    pub fn meat_count(&self) -> u32 {
        (self.meat.len() + usize::from(self.fish.is_some())) as u32
    }

    pub fn vegetable_count(&self) -> u32 {
        self.vegetable.len() as u32
    }

    /// Build the response; `shopping` attaches a grocery list when given
    pub fn into_recommendation(
        self,
        people_count: u32,
        shopping: Option<&ShoppingConfig>,
    ) -> DishRecommendation {
        let meat_dish_count = self.meat_count();
        let vegetable_dish_count = self.vegetable_count();

        let grocery_list =
            shopping.map(|config| build_grocery_list(aggregate_ingredients(self.dishes()), config));

        DishRecommendation {
            people_count,
            meat_dish_count,
            vegetable_dish_count,
            dishes: self.dishes().map(SimpleRecipe::from).collect(),
            message: summary_message(people_count, meat_dish_count, vegetable_dish_count),
            grocery_list,
        }
    }
}

/// Human readable summary of a recommendation
pub fn summary_message(people_count: u32, meat: u32, vegetable: u32) -> String {
    format!(
        "为{}人推荐的菜品，包含{}个荤菜和{}个素菜。",
        people_count, meat, vegetable
    )
}

/// Choose dishes for `people_count` people from the whole catalog
pub fn recommend_dishes<'a>(
    recipes: &'a [Recipe],
    people_count: u32,
    names: &CategoryNames,
    config: &RecommendConfig,
    rng: &mut dyn IndexSource,
) -> DishSelection<'a> {
    let quota = DishQuota::for_people(people_count);

    let is_meat = |r: &Recipe| r.category == names.meat || r.category == names.aquatic;
    let mut meat_pool: Vec<&'a Recipe> = recipes.iter().filter(|r| is_meat(*r)).collect();
    let mut vegetable_pool: Vec<&'a Recipe> = recipes
        .iter()
        .filter(|r| {
            !is_meat(*r) && r.category != names.breakfast && r.category != names.staple
        })
        .collect();

    let mut selection = DishSelection::default();

    if people_count > config.fish_dish_threshold {
        let fish_pool: Vec<&'a Recipe> = recipes
            .iter()
            .filter(|r| r.category == names.aquatic)
            .collect();
        if !fish_pool.is_empty() {
            let fish = fish_pool[rng.pick(fish_pool.len())];
            meat_pool.retain(|r| !std::ptr::eq(*r, fish));
            tracing::debug!("Pre-selected fish dish {}", fish.name);
            selection.fish = Some(fish);
        }
    }

    let remaining_meat = if selection.fish.is_some() {
        quota.meat.saturating_sub(1)
    } else {
        quota.meat
    };
    let meat_quota = remaining_meat as usize;

    for keyword in &config.meat_keywords {
        if selection.meat.len() >= meat_quota {
            break;
        }

        let keyword = keyword.to_lowercase();
        let matching: Vec<usize> = meat_pool
            .iter()
            .enumerate()
            .filter(|(_, r)| r.has_ingredient_containing(&keyword))
            .map(|(i, _)| i)
            .collect();

        if !matching.is_empty() {
            let index = matching[rng.pick(matching.len())];
            selection.meat.push(meat_pool.remove(index));
        }
    }

    while selection.meat.len() < meat_quota && !meat_pool.is_empty() {
        let index = rng.pick(meat_pool.len());
        selection.meat.push(meat_pool.remove(index));
    }

    while selection.vegetable.len() < quota.vegetable as usize && !vegetable_pool.is_empty() {
        let index = rng.pick(vegetable_pool.len());
        selection.vegetable.push(vegetable_pool.remove(index));
    }

    tracing::debug!(
        "Recommended {} meat and {} vegetable dishes for {} people (quota {:?})",
        selection.meat_count(),
        selection.vegetable_count(),
        people_count,
        quota
    );

    selection
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{RngSource, SequenceSource};
    use crate::Ingredient;
    use std::collections::HashSet;

    fn recipe(id: &str, category: &str, ingredients: &[&str]) -> Recipe {
        Recipe {
            id: id.into(),
            name: id.into(),
            category: category.into(),
            ingredients: ingredients
                .iter()
                .map(|n| Ingredient {
                    name: n.to_string(),
                    quantity: Some(100.0),
                    unit: Some("g".into()),
                    ..Ingredient::default()
                })
                .collect(),
            ..Recipe::default()
        }
    }

    fn sample_catalog() -> Vec<Recipe> {
        vec![
            recipe("braised-pork", "荤菜", &["猪肉", "糖"]),
            recipe("kung-pao", "荤菜", &["鸡肉", "花生"]),
            recipe("beef", "荤菜", &["牛肉"]),
            recipe("lamb", "荤菜", &["羊肉"]),
            recipe("duck", "荤菜", &["鸭肉"]),
            recipe("ribs", "荤菜", &["排骨"]),
            recipe("bass", "水产", &["鲈鱼"]),
            recipe("shrimp", "水产", &["虾"]),
            recipe("fish-fillet", "水产", &["鱼肉"]),
            recipe("tofu", "素菜", &["豆腐"]),
            recipe("lettuce", "素菜", &["生菜"]),
            recipe("eggplant", "素菜", &["茄子"]),
            recipe("potato", "素菜", &["土豆"]),
            recipe("soup", "汤羹", &["紫菜"]),
            recipe("sago", "甜品", &["芒果"]),
            recipe("congee", "早餐", &["大米"]),
            recipe("noodles", "主食", &["面条"]),
        ]
    }

    fn ids(recipes: &[&Recipe]) -> Vec<String> {
        recipes.iter().map(|r| r.id.clone()).collect()
    }

    #[test]
    fn test_quota_formulas() {
        assert_eq!(DishQuota::for_people(1), DishQuota { meat: 1, vegetable: 1 });
        assert_eq!(DishQuota::for_people(2), DishQuota { meat: 2, vegetable: 1 });
        assert_eq!(DishQuota::for_people(9), DishQuota { meat: 5, vegetable: 5 });
        assert_eq!(DishQuota::for_people(10), DishQuota { meat: 6, vegetable: 5 });
    }

    #[test]
    fn test_meat_priority_follows_keyword_order() {
        let catalog = sample_catalog();
        let mut rng = SequenceSource::zeros();

        let selection = recommend_dishes(
            &catalog,
            5,
            &CategoryNames::default(),
            &RecommendConfig::default(),
            &mut rng,
        );

        assert!(selection.fish.is_none());
        assert_eq!(ids(&selection.meat), vec!["braised-pork", "kung-pao", "beef"]);
        assert_eq!(selection.vegetable.len(), 3);
    }

    #[test]
    fn test_fallback_fills_after_keywords() {
        let catalog = sample_catalog();
        let mut rng = SequenceSource::zeros();

        let selection = recommend_dishes(
            &catalog,
            8,
            &CategoryNames::default(),
            &RecommendConfig::default(),
            &mut rng,
        );

        // Quota 5 is reached inside the keyword pass: pork, chicken, beef, lamb, duck
        assert_eq!(
            ids(&selection.meat),
            vec!["braised-pork", "kung-pao", "beef", "lamb", "duck"]
        );

        let config = RecommendConfig {
            meat_keywords: vec!["猪肉".into()],
            ..RecommendConfig::default()
        };
        let mut rng = SequenceSource::zeros();
        let selection = recommend_dishes(&catalog, 3, &CategoryNames::default(), &config, &mut rng);
        // One keyword hit, then random fill from the remaining pool in order
        assert_eq!(ids(&selection.meat), vec!["braised-pork", "kung-pao"]);
    }

    #[test]
    fn test_nine_people_get_a_fish_dish() {
        let catalog = sample_catalog();
        let names = CategoryNames::default();

        for seed in 0..25 {
            let mut rng = RngSource::seeded(seed);
            let selection =
                recommend_dishes(&catalog, 9, &names, &RecommendConfig::default(), &mut rng);

            let fish = selection.fish.expect("fish dish for 9 people");
            assert_eq!(fish.category, "水产");
            assert_eq!(selection.meat.len(), 4);
            assert_eq!(selection.meat_count(), 5);
            assert_eq!(selection.vegetable_count(), 5);

            let all: Vec<&Recipe> = selection.dishes().collect();
            assert!(std::ptr::eq(all[0], fish));
            let unique: HashSet<&str> = all.iter().map(|r| r.id.as_str()).collect();
            assert_eq!(unique.len(), all.len(), "dish repeated: {:?}", ids(&all));
        }
    }

    #[test]
    fn test_no_fish_dish_without_aquatic_recipes() {
        let catalog: Vec<Recipe> = sample_catalog()
            .into_iter()
            .filter(|r| r.category != "水产")
            .collect();
        let mut rng = SequenceSource::zeros();

        let selection = recommend_dishes(
            &catalog,
            10,
            &CategoryNames::default(),
            &RecommendConfig::default(),
            &mut rng,
        );

        assert!(selection.fish.is_none());
        // Six meat recipes available, quota 6
        assert_eq!(selection.meat_count(), 6);
    }

    #[test]
    fn test_one_person_without_vegetables() {
        let catalog: Vec<Recipe> = sample_catalog()
            .into_iter()
            .filter(|r| matches!(r.category.as_str(), "荤菜" | "早餐" | "主食"))
            .collect();
        let mut rng = SequenceSource::zeros();

        let selection = recommend_dishes(
            &catalog,
            1,
            &CategoryNames::default(),
            &RecommendConfig::default(),
            &mut rng,
        );

        assert_eq!(selection.meat_count(), 1);
        assert_eq!(selection.vegetable_count(), 0);

        let rec = selection.into_recommendation(1, None);
        assert_eq!(rec.vegetable_dish_count, 0);
        assert_eq!(rec.dishes.len(), 1);
        assert_eq!(rec.message, "为1人推荐的菜品，包含1个荤菜和0个素菜。");
        assert!(rec.grocery_list.is_none());
    }

    #[test]
    fn test_vegetable_pool_excludes_breakfast_and_staple() {
        let catalog = sample_catalog();
        let mut rng = RngSource::seeded(5);

        let selection = recommend_dishes(
            &catalog,
            10,
            &CategoryNames::default(),
            &RecommendConfig::default(),
            &mut rng,
        );

        // Vegetable-eligible: four 素菜, one 汤羹, one 甜品
        assert_eq!(selection.vegetable.len(), 5);
        assert!(selection
            .vegetable
            .iter()
            .all(|r| !matches!(r.category.as_str(), "荤菜" | "水产" | "早餐" | "主食")));
    }

    #[test]
    fn test_recommendation_with_grocery_list() {
        let catalog = sample_catalog();
        let mut rng = SequenceSource::zeros();

        let rec = recommend_dishes(
            &catalog,
            4,
            &CategoryNames::default(),
            &RecommendConfig::default(),
            &mut rng,
        )
        .into_recommendation(4, Some(&ShoppingConfig::default()));

        assert_eq!(rec.meat_dish_count, 3);
        assert_eq!(rec.vegetable_dish_count, 2);
        let groceries = rec.grocery_list.expect("grocery list requested");
        assert!(groceries.ingredients.iter().any(|i| i.name == "猪肉"));
        assert_eq!(groceries.shopping_plan.len(), groceries.ingredients.len());
    }
}
