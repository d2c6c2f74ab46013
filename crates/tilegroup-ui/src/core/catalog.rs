//! Option catalog and numeric value coercion.
//!
//! # Design
//! - The catalog is built once per initialization and never mutated.
//! - Host values arrive untyped; anything that is not an integral number
//!   coerces to "no selection" instead of failing.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Integer value identifying one option in the host's choice set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OptionValue(i64);

impl OptionValue {
    /// Wrap a raw integer.
    #[must_use]
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Underlying integer.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }

    /// Coerce an interaction candidate. Rejects NaN, infinities and
    /// fractional numbers.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    pub fn from_number(candidate: f64) -> Option<Self> {
        if !candidate.is_finite() || candidate.fract() != 0.0 {
            return None;
        }
        if candidate < i64::MIN as f64 || candidate >= i64::MAX as f64 {
            return None;
        }
        Some(Self(candidate as i64))
    }

    /// Coerce an untyped host value. Only JSON numbers qualify.
    #[must_use]
    pub fn from_raw(raw: &Value) -> Option<Self> {
        match raw {
            Value::Number(number) => number
                .as_i64()
                .map(Self)
                .or_else(|| number.as_f64().and_then(Self::from_number)),
            _ => None,
        }
    }
}

impl From<i64> for OptionValue {
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One selectable choice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileOption {
    /// Display label.
    pub label: String,
    /// Value committed to the host when the tile is selected.
    pub value: OptionValue,
}

impl TileOption {
    /// Build an option from a label and raw value.
    #[must_use]
    pub fn new(label: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Ordered, immutable list of options. Order is both visual and keyboard order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OptionCatalog {
    options: Vec<TileOption>,
}

impl OptionCatalog {
    /// Build a catalog from options in display order.
    #[must_use]
    pub fn new(options: Vec<TileOption>) -> Self {
        Self { options }
    }

    /// Number of tiles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Whether the catalog has no tiles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Option at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&TileOption> {
        self.options.get(index)
    }

    /// Iterate options in display order.
    pub fn iter(&self) -> std::slice::Iter<'_, TileOption> {
        self.options.iter()
    }

    /// Position of the first option carrying `value`.
    #[must_use]
    pub fn position(&self, value: OptionValue) -> Option<usize> {
        self.options.iter().position(|option| option.value == value)
    }
}

impl FromIterator<TileOption> for OptionCatalog {
    fn from_iter<I: IntoIterator<Item = TileOption>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a OptionCatalog {
    type Item = &'a TileOption;
    type IntoIter = std::slice::Iter<'a, TileOption>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn raw_values_coerce_only_integral_numbers() {
        assert_eq!(OptionValue::from_raw(&json!(2)), Some(OptionValue::new(2)));
        assert_eq!(OptionValue::from_raw(&json!(3.0)), Some(OptionValue::new(3)));
        assert_eq!(OptionValue::from_raw(&json!(2.5)), None);
        assert_eq!(OptionValue::from_raw(&json!("2")), None);
        assert_eq!(OptionValue::from_raw(&Value::Null), None);
        assert_eq!(OptionValue::from_raw(&json!(true)), None);
    }

    #[test]
    fn candidates_reject_non_finite_numbers() {
        assert_eq!(OptionValue::from_number(f64::NAN), None);
        assert_eq!(OptionValue::from_number(f64::INFINITY), None);
        assert_eq!(OptionValue::from_number(f64::NEG_INFINITY), None);
        assert_eq!(OptionValue::from_number(1e300), None);
        assert_eq!(OptionValue::from_number(-4.0), Some(OptionValue::new(-4)));
    }

    #[test]
    fn position_follows_display_order() {
        let catalog: OptionCatalog = [
            TileOption::new("Basic", 1),
            TileOption::new("Extended", 2),
            TileOption::new("Lifetime", 3),
        ]
        .into_iter()
        .collect();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.position(OptionValue::new(3)), Some(2));
        assert_eq!(catalog.position(OptionValue::new(9)), None);
        assert_eq!(catalog.get(0).map(|o| o.label.as_str()), Some("Basic"));
        assert!(OptionCatalog::default().is_empty());
    }
}
