pub mod payload;
pub mod whatsapp;

pub use payload::{ImpactReport, IngredientImpactGroup};
pub use whatsapp::build_whatsapp_summary;
