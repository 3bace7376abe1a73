use serde::{Deserialize, Serialize};

fn default_active() -> bool {
    true
}

/// One ingredient line of a catalog recipe.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeItem {
    pub ingredient_id: String,

    /// Amount used per batch, in the ingredient's unit.
    pub quantity: f64,
}

/// A recipe as stored in the menu catalog.
///
/// `sell_price` is `None` for recipes without a menu price (preps,
/// sub-recipes); those are costed but never impact-classified.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    pub id: String,
    pub name: String,

    pub sell_price: Option<f64>,

    /// Sellable portions produced by one batch.
    pub portions: u32,

    /// Archived recipes keep their data but drop out of every computation.
    #[serde(default = "default_active")]
    pub active: bool,

    pub items: Vec<RecipeItem>,
}

impl Recipe {
    pub fn uses_ingredient(&self, ingredient_id: &str) -> bool {
        self.items
            .iter()
            .any(|item| item.ingredient_id == ingredient_id)
    }

    /// Basic validation: non-empty identity, non-negative numbers.
    pub fn is_valid(&self) -> bool {
        !self.id.is_empty()
            && !self.name.is_empty()
            && self.sell_price.is_none_or(|price| price >= 0.0)
            && self.items.iter().all(|item| item.quantity >= 0.0)
    }
}

/// A costing snapshot of one recipe, detached from the catalog.
///
/// `sell_price == 0.0` means "no price set"; percent math degrades to 0.
/// `portions == 0` means the batch total is not divided.
#[derive(Debug, Clone)]
pub struct RecipeSnapshot {
    pub recipe_id: String,
    pub recipe_name: String,
    pub sell_price: f64,
    pub portions: u32,
    pub items: Vec<PricedItem>,
}

/// One snapshot line: a quantity plus the ingredient's baseline price.
#[derive(Debug, Clone)]
pub struct PricedItem {
    pub ingredient_id: String,
    pub quantity: f64,
    pub current_price: f64,
}
