//! The four operations offered to callers.
//!
//! `Cookbook` owns a shared, read-only catalog and the configuration. Every
//! call works on its own pools, so one `Cookbook` can serve concurrent
//! requests from several threads.

use crate::config::Config;
use crate::filter::{filter_recipes, Exclusions};
use crate::planner::build_weekly_plan;
use crate::random::IndexSource;
use crate::recommend::recommend_dishes;
use crate::{
    Catalog, DishRecommendation, Error, NameOnlyRecipe, Result, SimpleRecipe, WeeklyMealPlan,
};
use std::sync::Arc;

/// Smallest supported household
pub const MIN_PEOPLE: u32 = 1;
/// Largest supported household
pub const MAX_PEOPLE: u32 = 10;

/// Parameters of a weekly plan request
#[derive(Clone, Debug, Default)]
pub struct MealRequest {
    pub allergies: Vec<String>,
    pub avoid_items: Vec<String>,
    pub people_count: u32,
}

impl MealRequest {
    pub fn for_people(people_count: u32) -> Self {
        Self {
            people_count,
            ..Self::default()
        }
    }
}

#[derive(Clone, Debug)]
pub struct Cookbook {
    catalog: Arc<Catalog>,
    config: Config,
}

impl Cookbook {
    pub fn new(catalog: Arc<Catalog>, config: Config) -> Self {
        Self { catalog, config }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Known categories, in first-seen order
    pub fn categories(&self) -> &[String] {
        &self.catalog.categories
    }

    /// Name and description of every recipe
    pub fn get_all_recipes(&self) -> Vec<NameOnlyRecipe> {
        self.catalog.name_only()
    }

    /// Simplified recipes of one known category
    pub fn get_recipes_by_category(&self, category: &str) -> Result<Vec<SimpleRecipe>> {
        self.catalog.simplified_by_category(category)
    }

    /// Build a week of meals that avoids the requested ingredients
    pub fn recommend_meals(
        &self,
        request: &MealRequest,
        rng: &mut dyn IndexSource,
    ) -> Result<WeeklyMealPlan> {
        check_people_count(request.people_count)?;

        let exclusions = Exclusions::new(&request.allergies, &request.avoid_items);
        let candidates = filter_recipes(&self.catalog.recipes, &exclusions);

        tracing::info!(
            "Planning a week for {} people from {} of {} recipes",
            request.people_count,
            candidates.len(),
            self.catalog.len()
        );

        let draft = build_weekly_plan(
            &candidates,
            request.people_count,
            &self.config.categories,
            rng,
        );
        Ok(draft.into_meal_plan(&self.config.shopping))
    }

    /// Recommend one dish combination for a group
    pub fn what_to_eat(
        &self,
        people_count: u32,
        with_groceries: bool,
        rng: &mut dyn IndexSource,
    ) -> Result<DishRecommendation> {
        check_people_count(people_count)?;

        let selection = recommend_dishes(
            &self.catalog.recipes,
            people_count,
            &self.config.categories,
            &self.config.recommend,
            rng,
        );

        let shopping = with_groceries.then_some(&self.config.shopping);
        Ok(selection.into_recommendation(people_count, shopping))
    }
}

fn check_people_count(people_count: u32) -> Result<()> {
    if (MIN_PEOPLE..=MAX_PEOPLE).contains(&people_count) {
        Ok(())
    } else {
        Err(Error::InvalidPeopleCount(people_count))
    }
}
