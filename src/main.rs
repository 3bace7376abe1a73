use std::fs;
use std::path::Path;

use clap::Parser;

use menu_margin_rs::cli::{Cli, Command};
use menu_margin_rs::costing::{generate_suggestions, recipe_impacts};
use menu_margin_rs::error::Result;
use menu_margin_rs::interface::{
    display_impact_report, display_ingredient_list, display_menu, prompt_observations,
    prompt_yes_no,
};
use menu_margin_rs::report::{build_whatsapp_summary, ImpactReport};
use menu_margin_rs::state::{load_catalog, load_observations, save_catalog};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Impact {
            prices,
            json,
            whatsapp,
            apply,
        } => cmd_impact(&cli.file, prices.as_deref(), json.as_deref(), whatsapp, apply),
        Command::Show { ingredients } => cmd_show(&cli.file, ingredients),
    }
}

/// Compute and report the impact of new ingredient prices.
fn cmd_impact(
    file_path: &str,
    prices_path: Option<&str>,
    json_path: Option<&str>,
    whatsapp: bool,
    apply: bool,
) -> Result<()> {
    let path = Path::new(file_path);

    if !path.exists() {
        eprintln!("Menu catalog not found: {}", file_path);
        eprintln!("Please ensure menu.json exists in the current directory.");
        return Ok(());
    }

    let mut catalog = load_catalog(path)?;
    println!(
        "Loaded {} ingredients, {} recipes",
        catalog.len(),
        catalog.recipes().len()
    );

    let interactive = prices_path.is_none();
    let observations = match prices_path {
        Some(prices) => load_observations(prices)?,
        None => prompt_observations(&catalog)?,
    };

    if observations.is_empty() {
        println!("No price observations entered.");
        return Ok(());
    }

    let changes = catalog.resolve_observations(&observations)?;
    if changes.is_empty() {
        println!("All observed prices match the catalog. Nothing to do.");
        return Ok(());
    }

    let snapshots = catalog.affected_recipes(&changes);
    let impacts = recipe_impacts(&snapshots, &changes);
    let suggestions = generate_suggestions(&impacts);

    display_impact_report(&changes, &impacts, &suggestions);

    if whatsapp {
        println!("--- WhatsApp summary (copy below) ---");
        println!("{}", build_whatsapp_summary(&changes, &impacts, &suggestions));
        println!();
    }

    if let Some(out) = json_path {
        let report = ImpactReport::build(&changes, &snapshots, &impacts, &suggestions);
        fs::write(out, serde_json::to_string_pretty(&report)?)?;
        println!("Impact payload written to {}", out);
    }

    let should_apply = apply
        || (interactive && prompt_yes_no("Apply the new prices to the catalog?", false)?);

    if should_apply {
        catalog.apply_changes(&changes);
        save_catalog(path, &catalog)?;
        println!("Catalog saved with updated prices.");
    }

    Ok(())
}

/// Show the costed menu or the ingredient list.
fn cmd_show(file_path: &str, ingredients: bool) -> Result<()> {
    let path = Path::new(file_path);

    if !path.exists() {
        eprintln!("Menu catalog not found: {}", file_path);
        return Ok(());
    }

    let catalog = load_catalog(path)?;

    if ingredients {
        display_ingredient_list(catalog.ingredients());
    } else {
        display_menu(&catalog.all_snapshots());
    }

    Ok(())
}
