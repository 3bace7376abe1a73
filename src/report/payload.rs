use serde::Serialize;

use crate::costing::{price_change, round_cents};
use crate::models::{PriceChange, RecipeImpact, RecipeSnapshot, Suggestion};

/// One changed ingredient with the impacts of the recipes that use it.
#[derive(Debug, Clone, Serialize)]
pub struct IngredientImpactGroup {
    pub ingredient_id: String,
    pub ingredient_name: String,
    pub unit: String,
    pub old_price: f64,
    pub new_price: f64,
    pub delta: f64,
    pub percent: f64,
    pub recipes: Vec<RecipeImpact>,
}

/// The full serializable payload of one impact run.
///
/// `ingredients` regroups the flat impact list by changed ingredient, so a
/// consumer can answer "which recipes did the tomato price hit" without
/// re-deriving recipe membership.
#[derive(Debug, Clone, Serialize)]
pub struct ImpactReport {
    pub ingredients: Vec<IngredientImpactGroup>,
    pub impacts: Vec<RecipeImpact>,
    pub suggestions: Vec<Suggestion>,
}

impl ImpactReport {
    /// Assemble the report from one impact run.
    ///
    /// `snapshots` and `impacts` run in parallel (one impact per snapshot);
    /// the snapshots carry the item lists needed to decide which recipes
    /// belong to which ingredient group.
    pub fn build(
        changes: &[PriceChange],
        snapshots: &[RecipeSnapshot],
        impacts: &[RecipeImpact],
        suggestions: &[Suggestion],
    ) -> Self {
        let ingredients = changes
            .iter()
            .map(|change| {
                let delta = price_change(change.old_price, change.new_price);
                let recipes: Vec<RecipeImpact> = snapshots
                    .iter()
                    .zip(impacts.iter())
                    .filter(|(snapshot, _)| {
                        snapshot
                            .items
                            .iter()
                            .any(|item| item.ingredient_id == change.ingredient_id)
                    })
                    .map(|(_, impact)| impact.clone())
                    .collect();

                IngredientImpactGroup {
                    ingredient_id: change.ingredient_id.clone(),
                    ingredient_name: change.ingredient_name.clone(),
                    unit: change.unit.clone(),
                    old_price: change.old_price,
                    new_price: change.new_price,
                    delta: round_cents(delta.delta),
                    percent: delta.percent,
                    recipes,
                }
            })
            .collect();

        Self {
            ingredients,
            impacts: impacts.to_vec(),
            suggestions: suggestions.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::costing::recipe_impacts;
    use crate::models::PricedItem;

    fn sample_run() -> (Vec<PriceChange>, Vec<RecipeSnapshot>) {
        let changes = vec![PriceChange {
            ingredient_id: "ing-tomato".to_string(),
            ingredient_name: "Tomato".to_string(),
            unit: "kg".to_string(),
            old_price: 50.0,
            new_price: 60.0,
        }];

        let snapshots = vec![
            RecipeSnapshot {
                recipe_id: "rec-soup".to_string(),
                recipe_name: "Soup".to_string(),
                sell_price: 120.0,
                portions: 1,
                items: vec![PricedItem {
                    ingredient_id: "ing-tomato".to_string(),
                    quantity: 1.0,
                    current_price: 60.0,
                }],
            },
            RecipeSnapshot {
                recipe_id: "rec-toast".to_string(),
                recipe_name: "Toast".to_string(),
                sell_price: 80.0,
                portions: 1,
                items: vec![PricedItem {
                    ingredient_id: "ing-bread".to_string(),
                    quantity: 1.0,
                    current_price: 20.0,
                }],
            },
        ];

        (changes, snapshots)
    }

    #[test]
    fn test_groups_only_recipes_using_the_ingredient() {
        let (changes, snapshots) = sample_run();
        let impacts = recipe_impacts(&snapshots, &changes);
        let report = ImpactReport::build(&changes, &snapshots, &impacts, &[]);

        assert_eq!(report.ingredients.len(), 1);
        let group = &report.ingredients[0];
        assert_eq!(group.recipes.len(), 1);
        assert_eq!(group.recipes[0].recipe_id, "rec-soup");
        assert_eq!(group.delta, 10.0);
        assert_eq!(group.percent, 20.0);
    }

    #[test]
    fn test_serializes_to_json() {
        let (changes, snapshots) = sample_run();
        let impacts = recipe_impacts(&snapshots, &changes);
        let report = ImpactReport::build(&changes, &snapshots, &impacts, &[]);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["ingredients"][0]["ingredient_name"], "Tomato");
        assert_eq!(json["impacts"].as_array().unwrap().len(), 2);
    }
}
