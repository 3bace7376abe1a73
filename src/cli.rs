use clap::{Parser, Subcommand};

/// MenuMargin — A menu costing CLI that tracks ingredient price changes and their impact on recipe margins.
#[derive(Parser, Debug)]
#[command(name = "menu_margin")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the menu catalog JSON file.
    #[arg(short, long, default_value = "menu.json")]
    pub file: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute how new ingredient prices hit recipe costs and margins.
    Impact {
        /// CSV file of price observations (header: ingredient,price).
        /// Omit to enter prices interactively.
        #[arg(long)]
        prices: Option<String>,

        /// Write the grouped impact payload to this JSON file.
        #[arg(long)]
        json: Option<String>,

        /// Print the shareable WhatsApp summary.
        #[arg(long)]
        whatsapp: bool,

        /// Persist the new prices to the catalog without asking.
        #[arg(long)]
        apply: bool,
    },

    /// Show the costed menu or the ingredient catalog.
    Show {
        /// List ingredients with current prices instead of recipes.
        #[arg(long)]
        ingredients: bool,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Impact {
            prices: None,
            json: None,
            whatsapp: false,
            apply: false,
        }
    }
}
