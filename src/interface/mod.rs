pub mod prompts;
pub mod render;

pub use prompts::{prompt_observations, prompt_yes_no};
pub use render::{display_impact_report, display_ingredient_list, display_menu};
