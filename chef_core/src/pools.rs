//! Per-request category pools.
//!
//! A [`CategoryPools`] holds references into the shared catalog, grouped by
//! category. Drawing removes the reference from this request's pool only, so
//! a recipe is never drawn twice in one run and concurrent requests never
//! see each other's selections.

use crate::random::IndexSource;
use crate::Recipe;
use std::collections::HashMap;

#[derive(Clone, Debug, Default)]
pub struct CategoryPools<'a> {
    pools: HashMap<&'a str, Vec<&'a Recipe>>,
}

impl<'a> CategoryPools<'a> {
    /// Group recipes by category, keeping their relative order
    pub fn from_recipes<I>(recipes: I) -> Self
    where
        I: IntoIterator<Item = &'a Recipe>,
    {
        let mut pools: HashMap<&'a str, Vec<&'a Recipe>> = HashMap::new();
        for recipe in recipes {
            pools
                .entry(recipe.category.as_str())
                .or_default()
                .push(recipe);
        }
        Self { pools }
    }

    /// Recipes still available in `category`
    pub fn remaining(&self, category: &str) -> usize {
        self.pools.get(category).map_or(0, Vec::len)
    }

    pub fn has_stock(&self, category: &str) -> bool {
        self.remaining(category) > 0
    }

    /// Draw one recipe uniformly at random from `category` and remove it
    pub fn draw(&mut self, category: &str, rng: &mut dyn IndexSource) -> Option<&'a Recipe> {
        let pool = self.pools.get_mut(category)?;
        if pool.is_empty() {
            return None;
        }
        let index = rng.pick(pool.len());
        Some(pool.remove(index))
    }

    /// Pick a random category from `categories`, re-picking while the chosen
    /// one is empty, then draw from it.
    ///
    /// The first pick is made over the full list. If it lands on an empty
    /// pool the second pick is made over the categories that still have
    /// stock, which gives the same distribution as re-sampling the full list
    /// until a stocked category comes up, but always terminates. Returns
    /// `None` when every listed category is exhausted.
    pub fn draw_from_any(
        &mut self,
        categories: &[&str],
        rng: &mut dyn IndexSource,
    ) -> Option<&'a Recipe> {
        if categories.is_empty() {
            return None;
        }

        let first = categories[rng.pick(categories.len())];
        if self.has_stock(first) {
            return self.draw(first, rng);
        }

        let stocked: Vec<&str> = categories
            .iter()
            .copied()
            .filter(|c| self.has_stock(c))
            .collect();
        if stocked.is_empty() {
            tracing::debug!("All of {:?} are exhausted", categories);
            return None;
        }

        let chosen = stocked[rng.pick(stocked.len())];
        self.draw(chosen, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{RngSource, SequenceSource};
    use std::collections::HashSet;

    fn recipe(id: &str, category: &str) -> Recipe {
        Recipe {
            id: id.into(),
            name: id.into(),
            category: category.into(),
            ..Recipe::default()
        }
    }

    #[test]
    fn test_draw_removes_from_pool() {
        let recipes = vec![recipe("a", "荤菜"), recipe("b", "荤菜"), recipe("c", "素菜")];
        let mut pools = CategoryPools::from_recipes(&recipes);
        let mut rng = SequenceSource::new(vec![1, 0]);

        assert_eq!(pools.remaining("荤菜"), 2);
        assert_eq!(pools.draw("荤菜", &mut rng).unwrap().id, "b");
        assert_eq!(pools.draw("荤菜", &mut rng).unwrap().id, "a");
        assert!(pools.draw("荤菜", &mut rng).is_none());
        assert!(pools.draw("甜品", &mut rng).is_none());
        assert_eq!(pools.remaining("素菜"), 1);
    }

    #[test]
    fn test_draw_never_repeats() {
        let recipes: Vec<Recipe> = (0..20).map(|i| recipe(&i.to_string(), "水产")).collect();
        let mut pools = CategoryPools::from_recipes(&recipes);
        let mut rng = RngSource::seeded(7);

        let mut seen = HashSet::new();
        while let Some(r) = pools.draw("水产", &mut rng) {
            assert!(seen.insert(r.id.clone()), "{} drawn twice", r.id);
        }
        assert_eq!(seen.len(), 20);
    }

    #[test]
    fn test_draw_from_any_skips_empty_categories() {
        let recipes = vec![recipe("soup", "汤羹")];
        let mut pools = CategoryPools::from_recipes(&recipes);
        // First pick lands on the empty "主食", second pick is among stocked
        let mut rng = SequenceSource::new(vec![0, 0, 0]);

        let drawn = pools.draw_from_any(&["主食", "汤羹"], &mut rng).unwrap();
        assert_eq!(drawn.id, "soup");
        assert!(pools.draw_from_any(&["主食", "汤羹"], &mut rng).is_none());
    }

    #[test]
    fn test_draw_from_any_with_nothing_listed() {
        let recipes = vec![recipe("a", "荤菜")];
        let mut pools = CategoryPools::from_recipes(&recipes);
        let mut rng = SequenceSource::zeros();
        assert!(pools.draw_from_any(&[], &mut rng).is_none());
        assert_eq!(rng.picks(), 0);
    }

    #[test]
    fn test_pools_do_not_touch_source() {
        let recipes = vec![recipe("a", "荤菜"), recipe("b", "荤菜")];
        let mut first = CategoryPools::from_recipes(&recipes);
        let second = CategoryPools::from_recipes(&recipes);
        let mut rng = SequenceSource::zeros();

        first.draw("荤菜", &mut rng);
        assert_eq!(first.remaining("荤菜"), 1);
        assert_eq!(second.remaining("荤菜"), 2);
        assert_eq!(recipes.len(), 2);
    }
}
