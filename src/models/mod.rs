mod impact;
mod ingredient;
mod recipe;

pub use impact::{ImpactStatus, RecipeImpact, Suggestion, SuggestionKind};
pub use ingredient::{Ingredient, PriceChange, PriceObservation};
pub use recipe::{PricedItem, Recipe, RecipeItem, RecipeSnapshot};
