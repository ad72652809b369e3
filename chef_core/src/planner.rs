//! Weekly meal plan builder.
//!
//! Builds five weekdays and two weekend days of breakfast/lunch/dinner from
//! per-request category pools:
//! - Breakfast always draws from the breakfast pool
//! - Weekday lunch mixes staple, aquatic, meat, vegetable and dessert
//! - Weekday dinner adds soup to the lunch mix
//! - Weekend lunch and dinner alternate meat and aquatic, falling back to staple
//!
//! A slot that cannot be filled to its target is left short. That is a valid
//! outcome, not an error.

use crate::aggregate::IngredientAggregator;
use crate::config::{CategoryNames, ShoppingConfig};
use crate::pools::CategoryPools;
use crate::random::IndexSource;
use crate::shopping::build_grocery_list;
use crate::{DayPlan, Recipe, SimpleRecipe, WeeklyMealPlan};

pub const WEEKDAY_LABELS: [&str; 5] = ["周一", "周二", "周三", "周四", "周五"];
pub const WEEKEND_LABELS: [&str; 2] = ["周六", "周日"];

/// Target dish counts per slot for a given household size
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlanSizing {
    pub weekday_breakfast: u32,
    /// Weekday lunch and dinner dish count
    pub meal_count: u32,
    pub weekend_breakfast: u32,
    /// Weekend lunch and dinner dish count
    pub weekend_meal_count: u32,
}

impl PlanSizing {
    pub fn for_people(people_count: u32) -> Self {
        let meal_count = people_count.div_ceil(3).max(2);
        let weekend_extra = if people_count <= 4 { 1 } else { 2 };

        Self {
            weekday_breakfast: people_count.div_ceil(5).max(1),
            meal_count,
            weekend_breakfast: people_count.div_ceil(3).max(2),
            weekend_meal_count: meal_count + weekend_extra,
        }
    }
}

/// Days of a generated week plus every recipe drawn for them
#[derive(Clone, Debug)]
pub struct WeeklyPlanDraft<'a> {
    pub sizing: PlanSizing,
    pub weekdays: Vec<DayPlan>,
    pub weekend: Vec<DayPlan>,
    /// Every drawn recipe in draw order, input to grocery aggregation
    pub selected: Vec<&'a Recipe>,
}

impl<'a> WeeklyPlanDraft<'a> {
    /// Aggregate the drawn recipes into a grocery list and finish the plan
    pub fn into_meal_plan(self, shopping: &ShoppingConfig) -> WeeklyMealPlan {
        let mut aggregator = IngredientAggregator::new();
        for recipe in &self.selected {
            aggregator.add_recipe(recipe);
        }

        WeeklyMealPlan {
            weekdays: self.weekdays,
            weekend: self.weekend,
            grocery_list: build_grocery_list(aggregator.into_sorted(), shopping),
        }
    }
}

/// Build a week of meals from already filtered recipes
pub fn build_weekly_plan<'a>(
    recipes: &[&'a Recipe],
    people_count: u32,
    names: &CategoryNames,
    rng: &mut dyn IndexSource,
) -> WeeklyPlanDraft<'a> {
    let sizing = PlanSizing::for_people(people_count);
    let mut run = PlanRun {
        pools: CategoryPools::from_recipes(recipes.iter().copied()),
        names,
        rng,
        selected: Vec::new(),
    };

    tracing::debug!(
        "Building weekly plan for {} people from {} recipes ({:?})",
        people_count,
        recipes.len(),
        sizing
    );

    let lunch_mix = [
        names.staple.as_str(),
        names.aquatic.as_str(),
        names.meat.as_str(),
        names.vegetable.as_str(),
        names.dessert.as_str(),
    ];
    let dinner_mix = [
        names.staple.as_str(),
        names.aquatic.as_str(),
        names.meat.as_str(),
        names.vegetable.as_str(),
        names.dessert.as_str(),
        names.soup.as_str(),
    ];

    let weekdays = WEEKDAY_LABELS
        .iter()
        .map(|label| {
            let mut day = DayPlan::new(*label);
            day.breakfast = run.breakfast(sizing.weekday_breakfast);
            day.lunch = run.mixed(sizing.meal_count, &lunch_mix);
            day.dinner = run.mixed(sizing.meal_count, &dinner_mix);
            run.note_shortfall(&day, sizing.weekday_breakfast, sizing.meal_count);
            day
        })
        .collect();

    let weekend = WEEKEND_LABELS
        .iter()
        .map(|label| {
            let mut day = DayPlan::new(*label);
            day.breakfast = run.breakfast(sizing.weekend_breakfast);
            day.lunch = run.alternating(sizing.weekend_meal_count);
            day.dinner = run.alternating(sizing.weekend_meal_count);
            run.note_shortfall(&day, sizing.weekend_breakfast, sizing.weekend_meal_count);
            day
        })
        .collect();

    WeeklyPlanDraft {
        sizing,
        weekdays,
        weekend,
        selected: run.selected,
    }
}

/// Mutable state of one generation run
struct PlanRun<'a, 'r> {
    pools: CategoryPools<'a>,
    names: &'r CategoryNames,
    rng: &'r mut dyn IndexSource,
    selected: Vec<&'a Recipe>,
}

impl<'a, 'r> PlanRun<'a, 'r> {
    fn take(&mut self, recipe: &'a Recipe) -> SimpleRecipe {
        self.selected.push(recipe);
        SimpleRecipe::from(recipe)
    }

    fn breakfast(&mut self, count: u32) -> Vec<SimpleRecipe> {
        let mut dishes = Vec::new();
        for _ in 0..count {
            let Some(recipe) = self.pools.draw(&self.names.breakfast, &mut *self.rng) else {
                break;
            };
            dishes.push(self.take(recipe));
        }
        dishes
    }

    fn mixed(&mut self, count: u32, categories: &[&str]) -> Vec<SimpleRecipe> {
        let mut dishes = Vec::new();
        for _ in 0..count {
            if let Some(recipe) = self.pools.draw_from_any(categories, &mut *self.rng) {
                dishes.push(self.take(recipe));
            }
        }
        dishes
    }

    /// Even slots draw meat, odd slots aquatic; staple covers either gap
    fn alternating(&mut self, count: u32) -> Vec<SimpleRecipe> {
        let mut dishes = Vec::new();
        for slot in 0..count {
            let target = if slot % 2 == 0 {
                &self.names.meat
            } else {
                &self.names.aquatic
            };

            let recipe = match self.pools.draw(target, &mut *self.rng) {
                Some(recipe) => Some(recipe),
                None => self.pools.draw(&self.names.staple, &mut *self.rng),
            };

            if let Some(recipe) = recipe {
                dishes.push(self.take(recipe));
            }
        }
        dishes
    }

    fn note_shortfall(&self, day: &DayPlan, breakfast_target: u32, meal_target: u32) {
        let short = day.breakfast.len() < breakfast_target as usize
            || day.lunch.len() < meal_target as usize
            || day.dinner.len() < meal_target as usize;
        if short {
            tracing::debug!(
                "{} under-filled: breakfast {}/{}, lunch {}/{}, dinner {}/{}",
                day.day,
                day.breakfast.len(),
                breakfast_target,
                day.lunch.len(),
                meal_target,
                day.dinner.len(),
                meal_target
            );
        }
    }
}
