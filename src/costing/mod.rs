pub mod calculations;
pub mod constants;
pub mod suggestions;

pub use calculations::{
    price_change, recipe_cost, recipe_impact, recipe_impacts, round_cents, round_percent,
    PriceDelta,
};
pub use suggestions::generate_suggestions;
