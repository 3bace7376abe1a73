use std::collections::HashMap;

use crate::costing::{price_change, recipe_cost, round_cents, round_percent};
use crate::models::{ImpactStatus, Ingredient, PriceChange, RecipeImpact, RecipeSnapshot, Suggestion};

/// Display the full impact report in the terminal.
pub fn display_impact_report(
    changes: &[PriceChange],
    impacts: &[RecipeImpact],
    suggestions: &[Suggestion],
) {
    println!();
    println!("=== Price Changes ({} ingredients) ===", changes.len());
    println!();

    let max_name_len = changes
        .iter()
        .map(|c| c.ingredient_name.len())
        .max()
        .unwrap_or(10);

    for change in changes {
        let delta = price_change(change.old_price, change.new_price);
        println!(
            "  {:<width$} {:>8.2} -> {:>8.2}  ({:+.1}%)",
            change.ingredient_name,
            change.old_price,
            change.new_price,
            delta.percent,
            width = max_name_len
        );
    }

    if impacts.is_empty() {
        println!();
        println!("No priced recipes use the changed ingredients.");
        println!();
        return;
    }

    println!();
    println!("=== Recipe Impact ({} recipes) ===", impacts.len());
    println!();

    let max_recipe_len = impacts
        .iter()
        .map(|i| i.recipe_name.len())
        .max()
        .unwrap_or(10);

    for impact in impacts {
        let marker = match impact.status {
            ImpactStatus::Worsened => "-",
            ImpactStatus::Improved => "+",
            ImpactStatus::Unchanged => "=",
        };
        println!(
            "  {} {:<width$}  cost {:>7.2} -> {:>7.2} | food {:>5.1}% -> {:>5.1}% | margin {:>5.1}% -> {:>5.1}%  [{}]",
            marker,
            impact.recipe_name,
            impact.old_food_cost,
            impact.new_food_cost,
            impact.old_food_cost_percent,
            impact.new_food_cost_percent,
            impact.old_margin_percent,
            impact.new_margin_percent,
            impact.status.label(),
            width = max_recipe_len
        );
    }

    println!();
    println!("--- Suggestions ---");
    if suggestions.is_empty() {
        println!("None. Margins are holding.");
    } else {
        for suggestion in suggestions {
            println!("  {}: {}", suggestion.recipe_name, suggestion.message);
        }
    }
    println!();
}

/// Display the costed menu: cost per portion and margins where priced.
pub fn display_menu(snapshots: &[RecipeSnapshot]) {
    if snapshots.is_empty() {
        println!("No active recipes in the catalog.");
        return;
    }

    println!();
    println!("=== Menu ({} recipes) ===", snapshots.len());
    println!();

    let max_name_len = snapshots
        .iter()
        .map(|s| s.recipe_name.len())
        .max()
        .unwrap_or(10);

    let empty: HashMap<&str, f64> = HashMap::new();

    for snapshot in snapshots {
        let cost = round_cents(recipe_cost(snapshot, &empty));

        if snapshot.sell_price > 0.0 {
            let food = round_percent(cost / snapshot.sell_price * 100.0);
            let margin = round_percent((snapshot.sell_price - cost) / snapshot.sell_price * 100.0);
            println!(
                "  {:<width$}  sell {:>8.2} | cost/portion {:>8.2} | food {:>5.1}% | margin {:>5.1}%",
                snapshot.recipe_name,
                snapshot.sell_price,
                cost,
                food,
                margin,
                width = max_name_len
            );
        } else {
            println!(
                "  {:<width$}  sell        - | cost/portion {:>8.2} | food     - | margin     -",
                snapshot.recipe_name,
                cost,
                width = max_name_len
            );
        }
    }

    println!();
}

/// Display the ingredient catalog with current prices.
pub fn display_ingredient_list(ingredients: &[Ingredient]) {
    if ingredients.is_empty() {
        println!("No ingredients in the catalog.");
        return;
    }

    println!();
    println!("=== Ingredients ({} items) ===", ingredients.len());
    println!();

    let max_name_len = ingredients.iter().map(|i| i.name.len()).max().unwrap_or(10);

    for ingredient in ingredients {
        println!(
            "  {:<width$}  {:>8.2} per {}",
            ingredient.name,
            ingredient.current_price,
            ingredient.unit,
            width = max_name_len
        );
    }

    println!();
}
