use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::error::{MarginError, Result};
use crate::models::{Ingredient, PriceObservation};
use crate::state::Catalog;

/// Collect price observations interactively.
///
/// Loops until the user submits an empty ingredient name. Unknown names go
/// through fuzzy matching with confirmation before a price is asked for.
pub fn prompt_observations(catalog: &Catalog) -> Result<Vec<PriceObservation>> {
    let mut observations = Vec::new();

    loop {
        let input: String = Input::new()
            .with_prompt("Enter an ingredient (or press Enter to finish)")
            .allow_empty(true)
            .interact_text()?;

        let input = input.trim();
        if input.is_empty() {
            break;
        }

        let ingredient = match pick_ingredient(catalog, input)? {
            Some(ingredient) => ingredient,
            None => continue,
        };

        let price = prompt_new_price(ingredient)?;
        println!(
            "Recorded: {} at {:.2}/{}",
            ingredient.name, price, ingredient.unit
        );

        observations.push(PriceObservation {
            ingredient: ingredient.id.clone(),
            price,
        });
    }

    Ok(observations)
}

/// Resolve typed input to a catalog ingredient.
///
/// Exact id or name match first; otherwise fuzzy candidates above the 0.7
/// similarity mark, confirmed with the user (single hit) or picked from a
/// top-5 list (multiple hits).
fn pick_ingredient<'a>(catalog: &'a Catalog, input: &str) -> Result<Option<&'a Ingredient>> {
    if let Some(ingredient) = catalog.ingredient_by_id(input) {
        return Ok(Some(ingredient));
    }
    if let Some(ingredient) = catalog.ingredient_by_name(input) {
        return Ok(Some(ingredient));
    }

    let mut candidates: Vec<(&Ingredient, f64)> = catalog
        .ingredients()
        .iter()
        .map(|i| (i, jaro_winkler(&i.key(), &input.to_lowercase())))
        .filter(|(_, score)| *score > 0.7)
        .collect();

    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    if candidates.is_empty() {
        println!("No matching ingredient found for '{}'", input);
        return Ok(None);
    }

    if candidates.len() == 1 {
        let ingredient = candidates[0].0;
        let confirm = Confirm::new()
            .with_prompt(format!("Did you mean '{}'?", ingredient.name))
            .default(true)
            .interact()?;

        return Ok(if confirm { Some(ingredient) } else { None });
    }

    let options: Vec<&Ingredient> = candidates.iter().take(5).map(|(i, _)| *i).collect();
    let mut labels: Vec<String> = options
        .iter()
        .map(|i| format!("{} ({:.2}/{})", i.name, i.current_price, i.unit))
        .collect();
    labels.push("None of these".to_string());

    let selection = Select::new()
        .with_prompt("Which did you mean?")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(options.get(selection).copied())
}

/// Prompt for an ingredient's newly observed price.
fn prompt_new_price(ingredient: &Ingredient) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt(format!(
            "New price for {} (current {:.2}/{})",
            ingredient.name, ingredient.current_price, ingredient.unit
        ))
        .interact_text()?;

    let price: f64 = input
        .trim()
        .parse()
        .map_err(|_| MarginError::InvalidInput("Invalid number".to_string()))?;

    if price < 0.0 {
        return Err(MarginError::InvalidInput(
            "Price must be non-negative".to_string(),
        ));
    }

    Ok(price)
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
