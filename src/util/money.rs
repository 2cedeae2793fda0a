//! Formatting and parsing for amounts carried in minor currency units.

#[cfg(test)]
#[path = "money_test.rs"]
mod money_test;

/// Render minor units as a decimal string, e.g. `125000` → `"1250.00"`.
pub fn format_amount(minor: i64) -> String {
    let sign = if minor < 0 { "-" } else { "" };
    let minor = minor.abs();
    format!("{sign}{}.{:02}", minor / 100, minor % 100)
}

/// Parse a user-entered decimal amount into minor units.
///
/// # Errors
///
/// Returns a user-facing message when the input is not a non-negative
/// number.
pub fn parse_amount(raw: &str) -> Result<i64, String> {
    let raw = raw.trim();
    let value: f64 = raw.parse().map_err(|_| "Enter a numeric amount.".to_owned())?;
    if !value.is_finite() || value < 0.0 {
        return Err("Enter a non-negative amount.".to_owned());
    }
    #[allow(clippy::cast_possible_truncation)]
    {
        Ok((value * 100.0).round() as i64)
    }
}
