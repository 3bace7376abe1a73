/// Food-cost percent above which a sell-price raise is suggested.
pub const FOOD_COST_RAISE_THRESHOLD: f64 = 35.0;

/// Lower bound (exclusive) of the review-portion food-cost band.
/// The band runs up to and including the raise threshold.
pub const FOOD_COST_REVIEW_THRESHOLD: f64 = 30.0;

/// Food-cost ratio a suggested sell price aims to restore.
pub const TARGET_FOOD_COST_RATIO: f64 = 0.30;

/// Margin drop, in percentage points, that triggers a supplier review.
pub const SUPPLIER_MARGIN_DROP_PP: f64 = 3.0;

/// Margin movement within this band (percentage points) is treated as
/// rounding noise and classified as unchanged.
pub const MARGIN_TOLERANCE_PP: f64 = 0.1;

/// Suggested sell prices are rounded up to a multiple of this step.
pub const SELL_PRICE_STEP: f64 = 5.0;
