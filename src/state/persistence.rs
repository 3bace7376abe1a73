use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{Ingredient, PriceObservation, Recipe};
use crate::state::Catalog;

/// On-disk shape of the menu catalog file.
#[derive(Debug, Serialize, Deserialize)]
struct MenuFile {
    ingredients: Vec<Ingredient>,
    recipes: Vec<Recipe>,
}

/// Load and validate the catalog from a JSON file.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog> {
    let content = fs::read_to_string(path)?;
    let menu: MenuFile = serde_json::from_str(&content)?;
    Catalog::new(menu.ingredients, menu.recipes)
}

/// Save the catalog to a JSON file.
pub fn save_catalog<P: AsRef<Path>>(path: P, catalog: &Catalog) -> Result<()> {
    let menu = MenuFile {
        ingredients: catalog.ingredients().to_vec(),
        recipes: catalog.recipes().to_vec(),
    };
    let json = serde_json::to_string_pretty(&menu)?;
    fs::write(path, json)?;
    Ok(())
}

/// Load price observations from a CSV file with an `ingredient,price` header.
pub fn load_observations<P: AsRef<Path>>(path: P) -> Result<Vec<PriceObservation>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut observations = Vec::new();
    for row in reader.deserialize() {
        let observation: PriceObservation = row?;
        observations.push(observation);
    }
    Ok(observations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_catalog_roundtrip() {
        let json = r#"{
            "ingredients": [
                {"id": "ing-tomato", "name": "Tomato", "unit": "kg", "current_price": 50.0}
            ],
            "recipes": [
                {"id": "rec-soup", "name": "Soup", "sell_price": 120.0, "portions": 4,
                 "items": [{"ingredient_id": "ing-tomato", "quantity": 1.5}]}
            ]
        }"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let catalog = load_catalog(file.path()).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.recipes().len(), 1);
        assert!(catalog.recipes()[0].active);

        let out_file = NamedTempFile::new().unwrap();
        save_catalog(out_file.path(), &catalog).unwrap();

        let reloaded = load_catalog(out_file.path()).unwrap();
        assert_eq!(
            reloaded.ingredient_by_id("ing-tomato").unwrap().current_price,
            50.0
        );
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"{not json").unwrap();

        assert!(load_catalog(file.path()).is_err());
    }

    #[test]
    fn test_load_observations_csv() {
        let csv = "ingredient,price\ning-tomato,60\nmozzarella,310.5\n";
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(csv.as_bytes()).unwrap();

        let observations = load_observations(file.path()).unwrap();
        assert_eq!(observations.len(), 2);
        assert_eq!(observations[0].ingredient, "ing-tomato");
        assert_eq!(observations[0].price, 60.0);
        assert_eq!(observations[1].price, 310.5);
    }
}
