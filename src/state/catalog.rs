use std::collections::HashMap;

use strsim::jaro_winkler;

use crate::error::{MarginError, Result};
use crate::models::{
    Ingredient, PriceChange, PriceObservation, PricedItem, Recipe, RecipeSnapshot,
};

/// Similarity above which an unknown ingredient name earns a hint.
const NAME_HINT_THRESHOLD: f64 = 0.7;

/// The in-memory menu catalog: ingredients and the recipes built from them.
///
/// This is the caller side of the costing core; it owns lookup, observation
/// resolution and snapshot assembly, while the core stays purely numeric.
pub struct Catalog {
    ingredients: Vec<Ingredient>,
    recipes: Vec<Recipe>,
}

impl Catalog {
    /// Build a validated catalog.
    ///
    /// Duplicate ids deduplicate with the last occurrence winning. Every
    /// recipe item must reference a known ingredient, and all prices and
    /// quantities must be non-negative.
    pub fn new(ingredients: Vec<Ingredient>, recipes: Vec<Recipe>) -> Result<Self> {
        let ingredients = dedup_by_id(ingredients, |i| i.id.clone());
        let recipes = dedup_by_id(recipes, |r| r.id.clone());

        for ingredient in &ingredients {
            if !ingredient.is_valid() {
                return Err(MarginError::InvalidInput(format!(
                    "invalid ingredient record: {}",
                    ingredient.id
                )));
            }
        }

        for recipe in &recipes {
            if !recipe.is_valid() {
                return Err(MarginError::InvalidInput(format!(
                    "invalid recipe record: {}",
                    recipe.id
                )));
            }
            for item in &recipe.items {
                if !ingredients.iter().any(|i| i.id == item.ingredient_id) {
                    return Err(MarginError::IngredientNotFound(format!(
                        "{} (referenced by recipe '{}')",
                        item.ingredient_id, recipe.name
                    )));
                }
            }
        }

        Ok(Self {
            ingredients,
            recipes,
        })
    }

    pub fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Get an ingredient by its id.
    pub fn ingredient_by_id(&self, id: &str) -> Option<&Ingredient> {
        self.ingredients.iter().find(|i| i.id == id)
    }

    /// Get an ingredient by name (case-insensitive).
    pub fn ingredient_by_name(&self, name: &str) -> Option<&Ingredient> {
        let key = name.to_lowercase();
        self.ingredients.iter().find(|i| i.key() == key)
    }

    /// Resolve an id-or-name reference to an ingredient.
    ///
    /// Unknown references error with a closest-name hint when one scores
    /// above the similarity threshold.
    pub fn resolve_ingredient(&self, reference: &str) -> Result<&Ingredient> {
        if let Some(ingredient) = self.ingredient_by_id(reference) {
            return Ok(ingredient);
        }
        if let Some(ingredient) = self.ingredient_by_name(reference) {
            return Ok(ingredient);
        }

        let hint = self
            .ingredients
            .iter()
            .map(|i| (i, jaro_winkler(&i.key(), &reference.to_lowercase())))
            .filter(|(_, score)| *score > NAME_HINT_THRESHOLD)
            .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(i, _)| i.name.clone());

        Err(MarginError::IngredientNotFound(match hint {
            Some(name) => format!("{} (did you mean '{}'?)", reference, name),
            None => reference.to_string(),
        }))
    }

    /// Turn raw price observations into genuine price changes.
    ///
    /// Duplicate observations for one ingredient resolve last-wins;
    /// observations equal to the current catalog price drop out. The result
    /// follows catalog order regardless of observation order.
    pub fn resolve_observations(
        &self,
        observations: &[PriceObservation],
    ) -> Result<Vec<PriceChange>> {
        let mut observed: HashMap<String, f64> = HashMap::new();
        for observation in observations {
            if observation.price < 0.0 {
                return Err(MarginError::InvalidInput(format!(
                    "negative price {} for '{}'",
                    observation.price, observation.ingredient
                )));
            }
            let ingredient = self.resolve_ingredient(&observation.ingredient)?;
            observed.insert(ingredient.id.clone(), observation.price);
        }

        Ok(self
            .ingredients
            .iter()
            .filter_map(|ingredient| {
                observed
                    .get(&ingredient.id)
                    .filter(|&&price| price != ingredient.current_price)
                    .map(|&price| PriceChange::for_ingredient(ingredient, price))
            })
            .collect())
    }

    /// Collect costing snapshots for every recipe touched by the changes.
    ///
    /// Catalog-order scan over active, priced recipes that use at least one
    /// changed ingredient. Each snapshot carries all of the recipe's items
    /// at current catalog prices, so the costing core can fall back where no
    /// override applies.
    pub fn affected_recipes(&self, changes: &[PriceChange]) -> Vec<RecipeSnapshot> {
        self.recipes
            .iter()
            .filter(|recipe| recipe.active && recipe.sell_price.is_some())
            .filter(|recipe| {
                changes
                    .iter()
                    .any(|change| recipe.uses_ingredient(&change.ingredient_id))
            })
            .map(|recipe| self.snapshot(recipe))
            .collect()
    }

    /// Snapshots of every active recipe, for the costed-menu view.
    ///
    /// Unpriced recipes come through with a zero sell price, which the core
    /// treats as "no percent math".
    pub fn all_snapshots(&self) -> Vec<RecipeSnapshot> {
        self.recipes
            .iter()
            .filter(|recipe| recipe.active)
            .map(|recipe| self.snapshot(recipe))
            .collect()
    }

    fn snapshot(&self, recipe: &Recipe) -> RecipeSnapshot {
        RecipeSnapshot {
            recipe_id: recipe.id.clone(),
            recipe_name: recipe.name.clone(),
            sell_price: recipe.sell_price.unwrap_or(0.0),
            portions: recipe.portions,
            items: recipe
                .items
                .iter()
                .map(|item| PricedItem {
                    ingredient_id: item.ingredient_id.clone(),
                    quantity: item.quantity,
                    current_price: self
                        .ingredient_by_id(&item.ingredient_id)
                        .map(|i| i.current_price)
                        .unwrap_or(0.0),
                })
                .collect(),
        }
    }

    /// Write the new prices into the catalog ingredients.
    pub fn apply_changes(&mut self, changes: &[PriceChange]) {
        for change in changes {
            if let Some(ingredient) = self
                .ingredients
                .iter_mut()
                .find(|i| i.id == change.ingredient_id)
            {
                ingredient.current_price = change.new_price;
            }
        }
    }

    pub fn len(&self) -> usize {
        self.ingredients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty()
    }
}

/// Deduplicate records by id, last occurrence winning, keeping first-seen
/// positions so catalog order stays stable.
fn dedup_by_id<T, F: Fn(&T) -> String>(records: Vec<T>, id_of: F) -> Vec<T> {
    let mut positions: HashMap<String, usize> = HashMap::new();
    let mut deduped: Vec<T> = Vec::new();

    for record in records {
        let id = id_of(&record);
        match positions.get(&id) {
            Some(&pos) => deduped[pos] = record,
            None => {
                positions.insert(id, deduped.len());
                deduped.push(record);
            }
        }
    }

    deduped
}
