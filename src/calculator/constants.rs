use crate::models::InputField;

// ─────────────────────────────────────────────────────────────────────────────
// Input ranges (inclusive)
// ─────────────────────────────────────────────────────────────────────────────

/// Nib weight bounds in grams.
pub const NIB_WEIGHT_MIN: f64 = 100.0;
pub const NIB_WEIGHT_MAX: f64 = 20_000.0;

/// Target cacao bounds in percent.
pub const TARGET_CACAO_MIN: f64 = 40.0;
pub const TARGET_CACAO_MAX: f64 = 90.0;

/// Other-ingredients bounds in percent.
pub const OTHER_INGREDIENTS_MIN: f64 = 0.0;
pub const OTHER_INGREDIENTS_MAX: f64 = 40.0;

/// Cacao-butter-in-other bounds in percent.
pub const CACAO_BUTTER_IN_OTHER_MIN: f64 = 0.0;
pub const CACAO_BUTTER_IN_OTHER_MAX: f64 = 100.0;

/// Closed interval `[min, max]` for an input field.
pub fn bounds(field: InputField) -> (f64, f64) {
    match field {
        InputField::NibWeight => (NIB_WEIGHT_MIN, NIB_WEIGHT_MAX),
        InputField::TargetCacao => (TARGET_CACAO_MIN, TARGET_CACAO_MAX),
        InputField::OtherIngredients => (OTHER_INGREDIENTS_MIN, OTHER_INGREDIENTS_MAX),
        InputField::CacaoButterInOther => (CACAO_BUTTER_IN_OTHER_MIN, CACAO_BUTTER_IN_OTHER_MAX),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Advisory thresholds
// ─────────────────────────────────────────────────────────────────────────────

/// Typical dark chocolate cacao range (no other ingredients).
pub const DARK_CACAO_MIN: f64 = 60.0;
pub const DARK_CACAO_MAX: f64 = 85.0;

/// Typical milk chocolate cacao range (with other ingredients).
pub const MILK_CACAO_MIN: f64 = 40.0;
pub const MILK_CACAO_MAX: f64 = 60.0;

/// Other ingredients above this share dilute the chocolate.
pub const OTHER_HIGH_THRESHOLD: f64 = 25.0;

/// Cacao butter within other ingredients above this affects tempering.
pub const BUTTER_HIGH_THRESHOLD: f64 = 60.0;

/// Batches below this nib weight (grams) count as test batches.
pub const SMALL_BATCH_THRESHOLD: f64 = 500.0;

/// Sugar tiers: `< ULTRA_LOW`, `[ULTRA_LOW, LOW)`, `> HIGH`.
pub const SUGAR_ULTRA_LOW_THRESHOLD: f64 = 5.0;
pub const SUGAR_LOW_THRESHOLD: f64 = 15.0;
pub const SUGAR_HIGH_THRESHOLD: f64 = 50.0;

// ─────────────────────────────────────────────────────────────────────────────
// Rounding precision (decimal places)
// ─────────────────────────────────────────────────────────────────────────────

pub const PERCENT_DECIMALS: u32 = 2;
pub const WEIGHT_DECIMALS: u32 = 1;
pub const BATCH_FACTOR_DECIMALS: u32 = 4;
