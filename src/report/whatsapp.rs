use crate::costing::price_change;
use crate::models::{ImpactStatus, PriceChange, RecipeImpact, Suggestion};

/// Build the shareable plain-text summary of one impact run.
///
/// Three sections: price changes (always present, with count), recipe
/// impacts and suggestions (each omitted when empty). WhatsApp's own
/// `*bold*` markers are the only markup; currency at two decimals, percents
/// at their already-rounded one-decimal values.
pub fn build_whatsapp_summary(
    changes: &[PriceChange],
    impacts: &[RecipeImpact],
    suggestions: &[Suggestion],
) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!(
        "*Price update: {} ingredient(s) changed*",
        changes.len()
    ));
    for change in changes {
        let delta = price_change(change.old_price, change.new_price);
        let marker = if change.new_price > change.old_price {
            "▲"
        } else if change.new_price < change.old_price {
            "▼"
        } else {
            "="
        };
        lines.push(format!(
            "{} {} ({}): {:.2} → {:.2} ({:+.1}%)",
            marker,
            change.ingredient_name,
            change.unit,
            change.old_price,
            change.new_price,
            delta.percent
        ));
    }

    if !impacts.is_empty() {
        lines.push(String::new());
        lines.push(format!("*Recipe impact: {} recipe(s)*", impacts.len()));
        for impact in impacts {
            let marker = match impact.status {
                ImpactStatus::Worsened => "▼",
                ImpactStatus::Improved => "▲",
                ImpactStatus::Unchanged => "=",
            };
            lines.push(format!(
                "{} {}: food cost {:.1}% → {:.1}%, margin {:.1}% → {:.1}%",
                marker,
                impact.recipe_name,
                impact.old_food_cost_percent,
                impact.new_food_cost_percent,
                impact.old_margin_percent,
                impact.new_margin_percent
            ));
        }
    }

    if !suggestions.is_empty() {
        lines.push(String::new());
        lines.push("*Suggestions*".to_string());
        for suggestion in suggestions {
            lines.push(format!(
                "- {}: {}",
                suggestion.recipe_name, suggestion.message
            ));
        }
    }

    lines.join("\n")
}
