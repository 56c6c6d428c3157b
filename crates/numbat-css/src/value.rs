//! Declaration value types.
//!
//! A declaration's value is one of three shapes: a bare keyword
//! (`space-between`), a number with a unit (`10px`), or a hex color
//! (`#ffff00`). The serialized forms are part of the engine's output
//! contract: a length renders as a `[number, unit]` pair and a color as an
//! `{r, g, b, a}` integer quadruple.

use serde::Serialize;
use strum_macros::{Display, EnumString};

/// A length unit.
///
/// [§ 4.1 Lengths](https://www.w3.org/TR/css-values-4/#lengths)
/// Only the units the value grammar recognizes; anything else scanned after
/// a number is a fatal parse error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Unit {
    /// [§ 6.1 Absolute lengths](https://www.w3.org/TR/css-values-4/#absolute-lengths)
    /// "1px = 1/96th of 1in"
    Px,
    /// Font-relative: the element's font size.
    Em,
    /// Font-relative: the root element's font size.
    Rem,
    /// 1% of viewport height.
    Vh,
    /// 1% of viewport width.
    Vw,
    /// 1% of the viewport's smaller dimension.
    Vmin,
    /// 1% of the viewport's larger dimension.
    Vmax,
}

/// An RGBA color with 8-bit channels.
///
/// Parsed from 6-hex-digit input; alpha is always 255 because the value
/// grammar never reads an alpha channel (8-digit hex is not supported).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColorValue {
    /// Red channel, 0-255.
    pub r: u8,
    /// Green channel, 0-255.
    pub g: u8,
    /// Blue channel, 0-255.
    pub b: u8,
    /// Alpha channel, always 255 for parsed colors.
    pub a: u8,
}

impl ColorValue {
    /// Build an opaque color from RGB channels.
    #[must_use]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

/// The typed value of a declaration.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// A bare keyword, e.g. `red`, `space-between`.
    Keyword(String),
    /// A number with a unit, e.g. `10px`. Serializes as `[10.0, "px"]`.
    Length(f64, Unit),
    /// An RGBA color. Serializes as `{"r":..,"g":..,"b":..,"a":..}`.
    Color(ColorValue),
}

impl Value {
    /// Build a keyword value.
    #[must_use]
    pub fn keyword(s: impl Into<String>) -> Self {
        Value::Keyword(s.into())
    }

    /// The keyword string, if this value is a keyword.
    #[must_use]
    pub fn as_keyword(&self) -> Option<&str> {
        match self {
            Value::Keyword(s) => Some(s),
            Value::Length(..) | Value::Color(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unit_round_trips_through_strings() {
        assert_eq!("px".parse::<Unit>().unwrap(), Unit::Px);
        assert_eq!("vmin".parse::<Unit>().unwrap(), Unit::Vmin);
        assert_eq!(Unit::Rem.to_string(), "rem");
        assert!("pt".parse::<Unit>().is_err());
    }

    #[test]
    fn test_serialized_value_shapes() {
        assert_eq!(
            serde_json::to_value(Value::keyword("space-between")).unwrap(),
            json!("space-between")
        );
        assert_eq!(
            serde_json::to_value(Value::Length(10.0, Unit::Px)).unwrap(),
            json!([10.0, "px"])
        );
        assert_eq!(
            serde_json::to_value(Value::Color(ColorValue::opaque(255, 255, 0))).unwrap(),
            json!({"r": 255, "g": 255, "b": 0, "a": 255})
        );
    }
}
