//! FILENAME: core/engine/src/displayable.rs
//! PURPOSE: Defines the display-ready value placed into every table cell.
//! CONTEXT: Table builders never look inside a `Displayable`; they only move
//! it into the grid. Renderers decide how each variant becomes markup or text.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::number_format::{format_number, NumberFormat};

/// A pre-formatted value for a single table cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Displayable {
    /// Empty cell (e.g. an unspecified origin).
    Blank,
    Text { text: String },
    /// A number with its presentation format and an optional unit suffix.
    Number {
        value: f64,
        format: NumberFormat,
        unit: Option<String>,
    },
    /// Reference to a single game item by its internal name.
    Item { name: String },
    /// Several items shown together as one badge.
    ItemGroup { names: Vec<String> },
    /// "n of something", e.g. 6 electric mining drills.
    Count { count: u32, of: Box<Displayable> },
    /// Left-to-right ratio of two values.
    Ratio {
        left: Box<Displayable>,
        right: Box<Displayable>,
    },
    /// Composite of several values shown side by side.
    Group { parts: Vec<Displayable> },
}

impl Displayable {
    /// Returns true for the empty cell.
    pub fn is_blank(&self) -> bool {
        matches!(self, Displayable::Blank)
    }

    /// Returns the numeric value for number cells.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Displayable::Number { value, .. } => Some(*value),
            _ => None,
        }
    }
}

impl Default for Displayable {
    fn default() -> Self {
        Displayable::Blank
    }
}

impl fmt::Display for Displayable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Displayable::Blank => Ok(()),
            Displayable::Text { text } => f.write_str(text),
            Displayable::Number {
                value,
                format,
                unit,
            } => {
                f.write_str(&format_number(*value, format))?;
                match unit {
                    Some(unit) => write!(f, " {}", unit),
                    None => Ok(()),
                }
            }
            Displayable::Item { name } => f.write_str(&humanize_name(name)),
            Displayable::ItemGroup { names } => {
                let labels: Vec<String> = names.iter().map(|n| humanize_name(n)).collect();
                f.write_str(&labels.join(" / "))
            }
            Displayable::Count { count, of } => write!(f, "{} \u{d7} {}", count, of),
            Displayable::Ratio { left, right } => write!(f, "{} : {}", left, right),
            Displayable::Group { parts } => {
                let mut first = true;
                for part in parts.iter().filter(|p| !p.is_blank()) {
                    if !first {
                        f.write_str(" ")?;
                    }
                    write!(f, "{}", part)?;
                    first = false;
                }
                Ok(())
            }
        }
    }
}

/// Turns an internal item name into a label: "iron-gear-wheel" -> "Iron Gear Wheel".
pub fn humanize_name(name: &str) -> String {
    name.split(|c| c == '-' || c == '_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

// ============================================================================
// CONSTRUCTORS
// ============================================================================

pub fn blank() -> Displayable {
    Displayable::Blank
}

pub fn text(s: impl Into<String>) -> Displayable {
    Displayable::Text { text: s.into() }
}

/// A number with two decimal places.
pub fn fixed(value: f64) -> Displayable {
    number(value, NumberFormat::Fixed { decimal_places: 2 })
}

/// A number with two decimal places and a unit suffix ("31.20 MW").
pub fn fixed_with_unit(value: f64, unit: impl Into<String>) -> Displayable {
    Displayable::Number {
        value,
        format: NumberFormat::Fixed { decimal_places: 2 },
        unit: Some(unit.into()),
    }
}

pub fn integer(value: f64) -> Displayable {
    number(value, NumberFormat::Integer)
}

/// Rounds up before display; used for machine counts where a fraction means one more.
pub fn ceil(value: f64) -> Displayable {
    number(value.ceil(), NumberFormat::Integer)
}

pub fn large(value: f64) -> Displayable {
    number(value, NumberFormat::Large)
}

/// A duration in seconds.
pub fn time(seconds: f64) -> Displayable {
    number(seconds, NumberFormat::Duration)
}

pub fn percent(fraction: f64) -> Displayable {
    number(fraction, NumberFormat::Percentage { decimal_places: 0 })
}

pub fn number(value: f64, format: NumberFormat) -> Displayable {
    Displayable::Number {
        value,
        format,
        unit: None,
    }
}

pub fn item(name: impl Into<String>) -> Displayable {
    Displayable::Item { name: name.into() }
}

pub fn item_group<I, S>(names: I) -> Displayable
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Displayable::ItemGroup {
        names: names.into_iter().map(Into::into).collect(),
    }
}

pub fn n_of(count: u32, of: Displayable) -> Displayable {
    Displayable::Count {
        count,
        of: Box::new(of),
    }
}

pub fn ratio(left: Displayable, right: Displayable) -> Displayable {
    Displayable::Ratio {
        left: Box::new(left),
        right: Box::new(right),
    }
}

pub fn group(parts: impl IntoIterator<Item = Displayable>) -> Displayable {
    Displayable::Group {
        parts: parts.into_iter().collect(),
    }
}

// ============================================================================
// NON-FINITE GUARD
// ============================================================================

/// Raised when arithmetic inside a cell produced a value that cannot be shown.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("computed value is not finite: {value}")]
pub struct NumberError {
    pub value: f64,
}

/// Passes finite values through and rejects NaN and infinities.
/// Cell functions use this with `?` so a bad division fails the table.
pub fn checked(value: f64) -> Result<f64, NumberError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(NumberError { value })
    }
}

// ============================================================================
// CONVERSIONS
// ============================================================================

/// Default header label for a row or column value.
pub trait ToDisplayable {
    fn to_displayable(&self) -> Displayable;
}

impl ToDisplayable for Displayable {
    fn to_displayable(&self) -> Displayable {
        self.clone()
    }
}

impl ToDisplayable for str {
    fn to_displayable(&self) -> Displayable {
        text(self)
    }
}

impl<T: ToDisplayable + ?Sized> ToDisplayable for &T {
    fn to_displayable(&self) -> Displayable {
        (**self).to_displayable()
    }
}

impl ToDisplayable for String {
    fn to_displayable(&self) -> Displayable {
        text(self.as_str())
    }
}

impl<T: ToDisplayable> ToDisplayable for Option<T> {
    fn to_displayable(&self) -> Displayable {
        match self {
            Some(value) => value.to_displayable(),
            None => Displayable::Blank,
        }
    }
}

macro_rules! impl_numeric_display {
    ($($ty:ty),*) => {
        $(
            impl ToDisplayable for $ty {
                fn to_displayable(&self) -> Displayable {
                    number(*self as f64, NumberFormat::General)
                }
            }

            impl From<$ty> for Displayable {
                fn from(value: $ty) -> Self {
                    number(value as f64, NumberFormat::General)
                }
            }
        )*
    };
}

impl_numeric_display!(f64, f32, i32, i64, u32, u64, usize);

impl From<&str> for Displayable {
    fn from(value: &str) -> Self {
        text(value)
    }
}

impl From<String> for Displayable {
    fn from(value: String) -> Self {
        Displayable::Text { text: value }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_humanize_name() {
        assert_eq!(humanize_name("iron-gear-wheel"), "Iron Gear Wheel");
        assert_eq!(humanize_name("uranium-235"), "Uranium 235");
        assert_eq!(humanize_name("coal"), "Coal");
    }

    #[test]
    fn test_plain_text_rendering() {
        assert_eq!(fixed(7.5).to_string(), "7.50");
        assert_eq!(fixed_with_unit(31.2, "MW").to_string(), "31.20 MW");
        assert_eq!(ceil(2.01).to_string(), "3");
        assert_eq!(
            ratio(n_of(6, item("electric-mining-drill")), n_of(11, item("stone-furnace")))
                .to_string(),
            "6 \u{d7} Electric Mining Drill : 11 \u{d7} Stone Furnace"
        );
        assert_eq!(
            item_group(["iron-plate", "copper-plate"]).to_string(),
            "Iron Plate / Copper Plate"
        );
        assert_eq!(group([text("0.5s"), blank(), item("rail")]).to_string(), "0.5s Rail");
    }

    #[test]
    fn test_scalar_conversions() {
        assert_eq!(Displayable::from("Chance"), text("Chance"));
        assert_eq!(Displayable::from(40).as_number(), Some(40.0));
        assert_eq!(Displayable::from(12.5f64).to_string(), "12.5");
        assert!(None::<u32>.to_displayable().is_blank());
        assert_eq!(Some(8u32).to_displayable().to_string(), "8");
    }

    #[test]
    fn test_checked_rejects_non_finite() {
        assert_eq!(checked(2.0), Ok(2.0));
        assert!(checked(1.0 / 0.0).is_err());
        assert!(checked(f64::NAN).is_err());
    }

    #[test]
    fn test_serializes_with_kind_tag() {
        let json = serde_json::to_value(item("coal")).unwrap();
        assert_eq!(json["kind"], "item");
        assert_eq!(json["name"], "coal");
    }
}
