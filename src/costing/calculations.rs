use std::collections::HashMap;

use crate::costing::constants::MARGIN_TOLERANCE_PP;
use crate::models::{ImpactStatus, PriceChange, RecipeImpact, RecipeSnapshot};

/// Absolute and relative movement of one price.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceDelta {
    /// New price minus old price, in currency units.
    pub delta: f64,

    /// Relative movement, rounded to one decimal.
    pub percent: f64,
}

/// Round a percent value to one decimal place.
pub fn round_percent(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Round a currency value to cents.
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Compute the delta and percent movement between two prices.
///
/// An old price of zero means "no prior price": the movement is not
/// computable and both fields come back as zero.
pub fn price_change(old_price: f64, new_price: f64) -> PriceDelta {
    if old_price == 0.0 {
        return PriceDelta {
            delta: 0.0,
            percent: 0.0,
        };
    }

    let delta = new_price - old_price;
    PriceDelta {
        delta,
        percent: round_percent(delta / old_price * 100.0),
    }
}

/// Cost one recipe against a set of price overrides.
///
/// Each item uses its override price when one exists, otherwise its baseline
/// `current_price`. The batch total is divided by `portions` unless portions
/// is zero. Returns the unrounded cost; callers round for display only, so
/// that percent math downstream sees the exact value.
pub fn recipe_cost(recipe: &RecipeSnapshot, overrides: &HashMap<&str, f64>) -> f64 {
    let total: f64 = recipe
        .items
        .iter()
        .map(|item| {
            let price = overrides
                .get(item.ingredient_id.as_str())
                .copied()
                .unwrap_or(item.current_price);
            item.quantity * price
        })
        .sum();

    if recipe.portions > 0 {
        total / recipe.portions as f64
    } else {
        total
    }
}

/// Classify a margin movement against the tolerance band.
///
/// Both inputs are the already-rounded margin percents; a move within
/// `MARGIN_TOLERANCE_PP` is rounding noise, not a real change.
fn classify(old_margin: f64, new_margin: f64) -> ImpactStatus {
    if new_margin < old_margin - MARGIN_TOLERANCE_PP {
        ImpactStatus::Worsened
    } else if new_margin > old_margin + MARGIN_TOLERANCE_PP {
        ImpactStatus::Improved
    } else {
        ImpactStatus::Unchanged
    }
}

/// Compute the before/after impact of a set of price changes on one recipe.
///
/// The recipe is costed twice, once at the old prices and once at the new
/// ones. Food-cost and margin percents are computed from the unrounded costs
/// and rounded independently; margin is never derived from the rounded
/// food-cost percent. A sell price of zero degrades every percent to zero,
/// which always classifies as unchanged.
pub fn recipe_impact(recipe: &RecipeSnapshot, changes: &[PriceChange]) -> RecipeImpact {
    let mut old_prices: HashMap<&str, f64> = HashMap::new();
    let mut new_prices: HashMap<&str, f64> = HashMap::new();
    for change in changes {
        old_prices.insert(change.ingredient_id.as_str(), change.old_price);
        new_prices.insert(change.ingredient_id.as_str(), change.new_price);
    }

    let old_cost = recipe_cost(recipe, &old_prices);
    let new_cost = recipe_cost(recipe, &new_prices);
    let sell = recipe.sell_price;

    let food_percent = |cost: f64| {
        if sell > 0.0 {
            round_percent(cost / sell * 100.0)
        } else {
            0.0
        }
    };
    let margin_percent = |cost: f64| {
        if sell > 0.0 {
            round_percent((sell - cost) / sell * 100.0)
        } else {
            0.0
        }
    };

    let old_margin = margin_percent(old_cost);
    let new_margin = margin_percent(new_cost);

    RecipeImpact {
        recipe_id: recipe.recipe_id.clone(),
        recipe_name: recipe.recipe_name.clone(),
        sell_price: sell,
        old_food_cost: round_cents(old_cost),
        new_food_cost: round_cents(new_cost),
        old_food_cost_percent: food_percent(old_cost),
        new_food_cost_percent: food_percent(new_cost),
        old_margin_percent: old_margin,
        new_margin_percent: new_margin,
        status: classify(old_margin, new_margin),
    }
}

/// Compute impacts for a list of recipes, preserving input order.
pub fn recipe_impacts(recipes: &[RecipeSnapshot], changes: &[PriceChange]) -> Vec<RecipeImpact> {
    recipes
        .iter()
        .map(|recipe| recipe_impact(recipe, changes))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PricedItem;

    fn snapshot(sell: f64, portions: u32, items: Vec<(&str, f64, f64)>) -> RecipeSnapshot {
        RecipeSnapshot {
            recipe_id: "rec-test".to_string(),
            recipe_name: "Test".to_string(),
            sell_price: sell,
            portions,
            items: items
                .into_iter()
                .map(|(id, qty, price)| PricedItem {
                    ingredient_id: id.to_string(),
                    quantity: qty,
                    current_price: price,
                })
                .collect(),
        }
    }

    fn change(id: &str, old: f64, new: f64) -> PriceChange {
        PriceChange {
            ingredient_id: id.to_string(),
            ingredient_name: id.to_string(),
            unit: "kg".to_string(),
            old_price: old,
            new_price: new,
        }
    }

    #[test]
    fn test_round_percent() {
        assert_eq!(round_percent(72.22222), 72.2);
        assert_eq!(round_percent(72.25), 72.3);
        assert_eq!(round_percent(-3.14), -3.1);
    }

    #[test]
    fn test_round_cents() {
        assert_eq!(round_cents(129.999), 130.0);
        assert_eq!(round_cents(129.994), 129.99);
    }

    #[test]
    fn test_price_change_zero_baseline() {
        let delta = price_change(0.0, 100.0);
        assert_eq!(delta.delta, 0.0);
        assert_eq!(delta.percent, 0.0);
    }

    #[test]
    fn test_price_change_percent() {
        let delta = price_change(50.0, 60.0);
        assert_eq!(delta.delta, 10.0);
        assert_eq!(delta.percent, 20.0);

        let drop = price_change(60.0, 50.0);
        assert_eq!(drop.delta, -10.0);
        assert_eq!(drop.percent, -16.7);
    }

    #[test]
    fn test_recipe_cost_override_fallback() {
        let recipe = snapshot(100.0, 1, vec![("a", 2.0, 10.0), ("b", 1.0, 5.0)]);

        let empty: HashMap<&str, f64> = HashMap::new();
        assert_eq!(recipe_cost(&recipe, &empty), 25.0);

        let mut overrides = HashMap::new();
        overrides.insert("a", 20.0);
        // "b" falls back to its baseline price
        assert_eq!(recipe_cost(&recipe, &overrides), 45.0);
    }

    #[test]
    fn test_recipe_cost_portions() {
        let recipe = snapshot(100.0, 4, vec![("a", 2.0, 10.0)]);
        let empty: HashMap<&str, f64> = HashMap::new();
        assert_eq!(recipe_cost(&recipe, &empty), 5.0);

        let unscaled = snapshot(100.0, 0, vec![("a", 2.0, 10.0)]);
        assert_eq!(recipe_cost(&unscaled, &empty), 20.0);
    }

    #[test]
    fn test_recipe_cost_is_unrounded() {
        let recipe = snapshot(100.0, 3, vec![("a", 1.0, 10.0)]);
        let empty: HashMap<&str, f64> = HashMap::new();
        let cost = recipe_cost(&recipe, &empty);
        assert!((cost - 10.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_impact_worsened() {
        let recipe = snapshot(180.0, 1, vec![("tomato", 2.0, 60.0), ("cheese", 1.0, 30.0)]);
        let impact = recipe_impact(&recipe, &[change("tomato", 50.0, 60.0)]);

        assert_eq!(impact.old_food_cost, 130.0);
        assert_eq!(impact.new_food_cost, 150.0);
        assert_eq!(impact.old_food_cost_percent, 72.2);
        assert_eq!(impact.new_food_cost_percent, 83.3);
        assert_eq!(impact.old_margin_percent, 27.8);
        assert_eq!(impact.new_margin_percent, 16.7);
        assert_eq!(impact.status, ImpactStatus::Worsened);
    }

    #[test]
    fn test_impact_zero_sell_price_is_unchanged() {
        let recipe = snapshot(0.0, 1, vec![("tomato", 2.0, 60.0)]);
        let impact = recipe_impact(&recipe, &[change("tomato", 50.0, 60.0)]);

        assert_eq!(impact.old_food_cost_percent, 0.0);
        assert_eq!(impact.new_food_cost_percent, 0.0);
        assert_eq!(impact.old_margin_percent, 0.0);
        assert_eq!(impact.new_margin_percent, 0.0);
        assert_eq!(impact.status, ImpactStatus::Unchanged);
    }

    #[test]
    fn test_classify_tolerance_band() {
        assert_eq!(classify(70.0, 69.9), ImpactStatus::Unchanged);
        assert_eq!(classify(70.0, 70.1), ImpactStatus::Unchanged);
        assert_eq!(classify(70.0, 69.8), ImpactStatus::Worsened);
        assert_eq!(classify(70.0, 70.2), ImpactStatus::Improved);
    }

    #[test]
    fn test_recipe_impacts_preserves_order() {
        let recipes = vec![
            snapshot(100.0, 1, vec![("a", 1.0, 10.0)]),
            snapshot(200.0, 1, vec![("a", 1.0, 10.0)]),
        ];
        let impacts = recipe_impacts(&recipes, &[change("a", 10.0, 12.0)]);

        assert_eq!(impacts.len(), 2);
        assert_eq!(impacts[0].sell_price, 100.0);
        assert_eq!(impacts[1].sell_price, 200.0);
    }
}
