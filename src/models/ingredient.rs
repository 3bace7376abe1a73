use serde::{Deserialize, Serialize};

/// A purchasable ingredient with its last-known supplier price.
///
/// `current_price` is the price per `unit` in the catalog's single currency.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: String,
    pub name: String,
    pub unit: String,
    pub current_price: f64,
}

impl Ingredient {
    /// Basic validation: non-empty identity and a non-negative price.
    pub fn is_valid(&self) -> bool {
        !self.id.is_empty() && !self.name.is_empty() && self.current_price >= 0.0
    }

    /// Canonical key for name lookups (lowercase name).
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }
}

/// One observed supplier price for one ingredient, before resolution.
///
/// `ingredient` may be an id or a display name; the catalog resolves it.
#[derive(Debug, Clone, Deserialize)]
pub struct PriceObservation {
    pub ingredient: String,
    pub price: f64,
}

/// One genuine price movement for one ingredient.
///
/// Constructed only when the observed price differs from the recorded one;
/// equal prices never become a `PriceChange`.
#[derive(Debug, Clone, Serialize)]
pub struct PriceChange {
    pub ingredient_id: String,
    pub ingredient_name: String,
    pub unit: String,
    pub old_price: f64,
    pub new_price: f64,
}

impl PriceChange {
    /// Build a change for `ingredient` moving to `new_price`.
    pub fn for_ingredient(ingredient: &Ingredient, new_price: f64) -> Self {
        Self {
            ingredient_id: ingredient.id.clone(),
            ingredient_name: ingredient.name.clone(),
            unit: ingredient.unit.clone(),
            old_price: ingredient.current_price,
            new_price,
        }
    }
}
