//! # Shared Utility Functions
//!
//! Display formatting used by every screen that prints money.
//!
//! ## Monetary Formatting
//!
//! - [`format_amount`] - Thousands-grouped amount with sensible precision
//! - [`format_change`] - Signed percentage with a leading `+` for gains
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::format_amount;
//!
//! assert_eq!(format_amount(64250.0), "64,250.00");
//! assert_eq!(format_amount(0.004213), "0.004213");
//! ```

/// Format a monetary amount with thousands separators.
///
/// Amounts at or above 1.0 get two decimal places; sub-unit prices keep six
/// significant decimals so micro-cap coins don't render as "0.00".
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_amount;
///
/// assert_eq!(format_amount(1264021148198.0), "1,264,021,148,198.00");
/// assert_eq!(format_amount(1.5), "1.50");
/// assert_eq!(format_amount(0.1234567), "0.123457");
/// ```
pub fn format_amount(value: f64) -> String {
    if value.abs() < 1.0 {
        return format!("{:.6}", value);
    }

    let formatted = format!("{:.2}", value);
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((i, f)) => (i, f),
        None => (formatted.as_str(), "00"),
    };

    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{}{}.{}", sign, grouped, frac_part)
}

/// Format a 24h percentage change with an explicit sign.
///
/// Non-negative values get a leading `+`; `None` (no history yet) renders as
/// a dash placeholder rather than a fabricated zero.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_change;
///
/// assert_eq!(format_change(Some(5.2)), "+5.20%");
/// assert_eq!(format_change(Some(-2.13)), "-2.13%");
/// assert_eq!(format_change(Some(0.0)), "+0.00%");
/// assert_eq!(format_change(None), "–");
/// ```
pub fn format_change(change: Option<f64>) -> String {
    match change {
        Some(value) if value >= 0.0 => format!("+{:.2}%", value),
        Some(value) => format!("{:.2}%", value),
        None => "–".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount_groups_thousands() {
        assert_eq!(format_amount(64250.0), "64,250.00");
        assert_eq!(format_amount(1000.0), "1,000.00");
        assert_eq!(format_amount(999.0), "999.00");
        assert_eq!(format_amount(1264021148198.0), "1,264,021,148,198.00");
    }

    #[test]
    fn test_format_amount_small_values_keep_precision() {
        assert_eq!(format_amount(0.004213), "0.004213");
        assert_eq!(format_amount(0.5), "0.500000");
    }

    #[test]
    fn test_format_amount_negative() {
        assert_eq!(format_amount(-1234.5), "-1,234.50");
    }

    #[test]
    fn test_format_change_sign_handling() {
        assert_eq!(format_change(Some(5.2)), "+5.20%");
        assert_eq!(format_change(Some(-2.13)), "-2.13%");
        // Zero is presented as a gain, matching the table styling convention
        assert_eq!(format_change(Some(0.0)), "+0.00%");
    }

    #[test]
    fn test_format_change_missing_is_placeholder() {
        assert_eq!(format_change(None), "–");
    }
}
