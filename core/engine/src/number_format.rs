//! FILENAME: core/engine/src/number_format.rs
//! PURPOSE: Number formatting utilities for displaying table values.
//! CONTEXT: This module handles the conversion of raw numeric values to
//! formatted display strings based on a value's NumberFormat setting.

use serde::{Deserialize, Serialize};

/// How a numeric value is presented in a table cell.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum NumberFormat {
    /// Shortest sensible representation (integers without a decimal point).
    General,
    /// Fixed number of decimal places.
    Fixed { decimal_places: u8 },
    /// Rounded to the nearest whole number.
    Integer,
    /// Rounded whole number with thousands separators (e.g. 40,000).
    Large,
    /// A duration given in seconds, shown with its two most significant units.
    Duration,
    /// A fraction shown as a percentage (0.22 -> 22%).
    Percentage { decimal_places: u8 },
}

impl Default for NumberFormat {
    fn default() -> Self {
        NumberFormat::General
    }
}

/// Format a number according to the specified format.
pub fn format_number(value: f64, format: &NumberFormat) -> String {
    if !value.is_finite() {
        return format_general(value);
    }
    match format {
        NumberFormat::General => format_general(value),
        NumberFormat::Fixed { decimal_places } => format_decimal(value, *decimal_places, false),
        NumberFormat::Integer => format_decimal(value.round(), 0, false),
        NumberFormat::Large => format_decimal(value.round(), 0, true),
        NumberFormat::Duration => format_duration(value),
        NumberFormat::Percentage { decimal_places } => format_percentage(value, *decimal_places),
    }
}

/// Format a number in general format (auto-detect best representation).
fn format_general(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }

    let abs_value = value.abs();

    // Use scientific notation for very large or very small numbers
    if abs_value >= 1e10 || (abs_value < 1e-4 && abs_value > 0.0) {
        let formatted = format!("{:.5e}", value);
        return match formatted.split_once('e') {
            Some((mantissa, exponent)) => format!(
                "{}e{}",
                mantissa.trim_end_matches('0').trim_end_matches('.'),
                exponent
            ),
            None => formatted,
        };
    }

    // For integers, don't show decimal point
    if value.fract() == 0.0 && abs_value < 1e15 {
        return format!("{:.0}", value);
    }

    let formatted = format!("{:.10}", value);
    formatted
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

/// Format a number with specified decimal places and optional thousands separator.
fn format_decimal(value: f64, decimal_places: u8, use_thousands_separator: bool) -> String {
    let rounded = format!("{:.prec$}", value, prec = decimal_places as usize);
    // -0.4 rounds to "-0"
    let rounded = if rounded.trim_start_matches('-').chars().all(|c| c == '0' || c == '.') {
        rounded.trim_start_matches('-').to_string()
    } else {
        rounded
    };

    if use_thousands_separator {
        add_thousands_separator(&rounded)
    } else {
        rounded
    }
}

/// Add thousands separators to a numeric string.
fn add_thousands_separator(s: &str) -> String {
    let mut parts = s.splitn(2, '.');
    let integer_part = parts.next().unwrap_or_default();
    let decimal_part = parts.next();

    let negative = integer_part.starts_with('-');
    let digits: String = integer_part.chars().filter(|c| c.is_ascii_digit()).collect();

    let mut result = String::new();
    let len = digits.len();

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }

    if negative {
        result = format!("-{}", result);
    }

    if let Some(decimal) = decimal_part {
        result.push('.');
        result.push_str(decimal);
    }

    result
}

/// Format a fraction as percentage.
fn format_percentage(value: f64, decimal_places: u8) -> String {
    let percentage = value * 100.0;
    format!("{:.prec$}%", percentage, prec = decimal_places as usize)
}

/// Format a duration in seconds using its two most significant units.
/// 126000 -> "1d 11h", 16200 -> "4h 30m", 125 -> "2m 5s", 42 -> "42s".
fn format_duration(seconds: f64) -> String {
    let total = seconds.abs().round() as u64;
    let sign = if seconds < 0.0 && total > 0 { "-" } else { "" };

    let days = total / 86_400;
    let hours = (total % 86_400) / 3_600;
    let minutes = (total % 3_600) / 60;
    let secs = total % 60;

    if days > 0 {
        format!("{}{}d {}h", sign, days, hours)
    } else if hours > 0 {
        format!("{}{}h {}m", sign, hours, minutes)
    } else if minutes > 0 {
        format!("{}{}m {}s", sign, minutes, secs)
    } else {
        format!("{}{}s", sign, secs)
    }
}
