//! Conversions between whole currency units and stroops, the smallest unit
//! the ledger tracks.

/// Stroops per whole unit (seven decimal places).
pub const STROOPS_PER_UNIT: i128 = 10_000_000;
const DECIMALS: usize = 7;

/// Whole units to stroops. `None` on overflow.
pub fn parse_currency(units: i128) -> Option<i128> {
    units.checked_mul(STROOPS_PER_UNIT)
}

/// Render stroops as a decimal amount without trailing zeros,
/// e.g. `1_005_000_000` → `"100.5"`.
pub fn format_currency(stroops: i128) -> String {
    let sign = if stroops < 0 { "-" } else { "" };
    let magnitude = stroops.unsigned_abs();
    let per_unit = STROOPS_PER_UNIT.unsigned_abs();
    let whole = magnitude / per_unit;
    let fraction = magnitude % per_unit;

    if fraction == 0 {
        return format!("{sign}{whole}");
    }

    let fraction = format!("{fraction:0width$}", width = DECIMALS);
    format!("{sign}{whole}.{}", fraction.trim_end_matches('0'))
}
