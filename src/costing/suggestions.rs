use crate::costing::constants::*;
use crate::models::{ImpactStatus, RecipeImpact, Suggestion, SuggestionKind};

/// Generate recommended actions for worsened recipes.
///
/// Impacts are walked in input order; recipes that improved or stayed flat
/// produce nothing. For a worsened recipe three independent rules fire in
/// fixed order and every match is emitted. The raise-price and review-portion
/// bands are disjoint, so at most one of those two appears per recipe; the
/// supplier rule can fire alongside either.
pub fn generate_suggestions(impacts: &[RecipeImpact]) -> Vec<Suggestion> {
    let mut suggestions = Vec::new();

    for impact in impacts {
        if impact.status != ImpactStatus::Worsened {
            continue;
        }

        if impact.new_food_cost_percent > FOOD_COST_RAISE_THRESHOLD && impact.sell_price > 0.0 {
            let target = impact.new_food_cost / TARGET_FOOD_COST_RATIO;
            let rounded = (target / SELL_PRICE_STEP).ceil() * SELL_PRICE_STEP;

            suggestions.push(Suggestion {
                recipe_id: impact.recipe_id.clone(),
                recipe_name: impact.recipe_name.clone(),
                kind: SuggestionKind::RaisePrice,
                message: format!(
                    "Food cost is now {:.1}% of the sell price. Raise the price from {:.2} to {:.2} to bring food cost back to {:.0}%.",
                    impact.new_food_cost_percent,
                    impact.sell_price,
                    rounded,
                    TARGET_FOOD_COST_RATIO * 100.0
                ),
                suggested_price: Some(rounded),
            });
        }

        if impact.new_food_cost_percent > FOOD_COST_REVIEW_THRESHOLD
            && impact.new_food_cost_percent <= FOOD_COST_RAISE_THRESHOLD
        {
            suggestions.push(Suggestion {
                recipe_id: impact.recipe_id.clone(),
                recipe_name: impact.recipe_name.clone(),
                kind: SuggestionKind::ReviewPortion,
                message: format!(
                    "Food cost reached {:.1}% of the sell price. Review the portion size and kitchen waste before touching the menu price.",
                    impact.new_food_cost_percent
                ),
                suggested_price: None,
            });
        }

        if impact.new_margin_percent < impact.old_margin_percent - SUPPLIER_MARGIN_DROP_PP {
            let drop = impact.old_margin_percent - impact.new_margin_percent;
            suggestions.push(Suggestion {
                recipe_id: impact.recipe_id.clone(),
                recipe_name: impact.recipe_name.clone(),
                kind: SuggestionKind::FindSupplier,
                message: format!(
                    "Margin dropped {:.1} points ({:.1}% to {:.1}%). Consider sourcing the ingredients that went up from an alternate supplier.",
                    drop, impact.old_margin_percent, impact.new_margin_percent
                ),
                suggested_price: None,
            });
        }
    }

    suggestions
}
