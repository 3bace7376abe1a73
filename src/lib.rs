pub mod cli;
pub mod costing;
pub mod error;
pub mod interface;
pub mod models;
pub mod report;
pub mod state;

pub use error::{MarginError, Result};
pub use models::{PriceChange, RecipeImpact, RecipeSnapshot, Suggestion};
