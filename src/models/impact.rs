use serde::{Deserialize, Serialize};

/// Direction of a recipe's margin movement after a price change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImpactStatus {
    Worsened,
    Improved,
    Unchanged,
}

impl ImpactStatus {
    /// Returns the display label for this status.
    pub fn label(&self) -> &'static str {
        match self {
            ImpactStatus::Worsened => "worsened",
            ImpactStatus::Improved => "improved",
            ImpactStatus::Unchanged => "unchanged",
        }
    }
}

/// Before/after costing snapshot for one recipe.
///
/// Food costs are rounded to cents for display; the percent fields carry the
/// already-rounded 1-decimal values the classification was made from.
#[derive(Debug, Clone, Serialize)]
pub struct RecipeImpact {
    pub recipe_id: String,
    pub recipe_name: String,
    pub sell_price: f64,
    pub old_food_cost: f64,
    pub new_food_cost: f64,
    pub old_food_cost_percent: f64,
    pub new_food_cost_percent: f64,
    pub old_margin_percent: f64,
    pub new_margin_percent: f64,
    pub status: ImpactStatus,
}

/// The action a suggestion recommends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionKind {
    RaisePrice,
    ReviewPortion,
    FindSupplier,
}

/// A recommended action for one recipe.
#[derive(Debug, Clone, Serialize)]
pub struct Suggestion {
    pub recipe_id: String,
    pub recipe_name: String,
    pub kind: SuggestionKind,
    pub message: String,

    /// Proposed new sell price; set only for `RaisePrice`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_price: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_names() {
        assert_eq!(
            serde_json::to_string(&ImpactStatus::Worsened).unwrap(),
            "\"worsened\""
        );
        assert_eq!(
            serde_json::to_string(&ImpactStatus::Unchanged).unwrap(),
            "\"unchanged\""
        );
    }

    #[test]
    fn test_kind_wire_names() {
        assert_eq!(
            serde_json::to_string(&SuggestionKind::RaisePrice).unwrap(),
            "\"raise_price\""
        );
        assert_eq!(
            serde_json::to_string(&SuggestionKind::FindSupplier).unwrap(),
            "\"find_supplier\""
        );
    }

    #[test]
    fn test_suggested_price_omitted_when_absent() {
        let suggestion = Suggestion {
            recipe_id: "rec-x".to_string(),
            recipe_name: "X".to_string(),
            kind: SuggestionKind::ReviewPortion,
            message: "review portions".to_string(),
            suggested_price: None,
        };

        let json = serde_json::to_string(&suggestion).unwrap();
        assert!(!json.contains("suggested_price"));
    }
}
