//! Dimension validation shared by truck and package creation.
//!
//! Accepts JSON numbers and numeric strings, rejects anything missing,
//! non-numeric, non-finite, or not strictly positive.

use serde_json::Value;
use thiserror::Error;

/// Validated dimensions with the derived volume.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimensions {
    pub length: f64,
    pub width: f64,
    pub height: f64,
    pub volume: f64,
}

/// Reason a dimension triple was rejected.
#[derive(Debug, Error, PartialEq)]
pub enum DimensionError {
    #[error("Missing dimension '{field}'")]
    Missing { field: &'static str },

    #[error("Dimension '{field}' is not a number: {value}")]
    NotNumeric { field: &'static str, value: String },

    #[error("Dimension '{field}' must be positive, got {value}")]
    NotPositive { field: &'static str, value: f64 },

    #[error("Volume of {length} x {width} x {height} is out of range")]
    VolumeOutOfRange { length: f64, width: f64, height: f64 },
}

impl DimensionError {
    /// Name of the offending field.
    pub fn field(&self) -> &'static str {
        match self {
            Self::Missing { field }
            | Self::NotNumeric { field, .. }
            | Self::NotPositive { field, .. } => field,
            Self::VolumeOutOfRange { .. } => "volume",
        }
    }
}

impl Dimensions {
    /// Validates already-numeric dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`DimensionError`] for the first dimension that is not a
    /// finite, strictly positive number, or when the product overflows or
    /// underflows to a non-positive volume.
    pub fn new(length: f64, width: f64, height: f64) -> Result<Self, DimensionError> {
        let length = check_positive("length", length)?;
        let width = check_positive("width", width)?;
        let height = check_positive("height", height)?;

        let volume = length * width * height;
        if !volume.is_finite() || volume <= 0.0 {
            return Err(DimensionError::VolumeOutOfRange {
                length,
                width,
                height,
            });
        }

        Ok(Self {
            length,
            width,
            height,
            volume,
        })
    }

    /// Parses and validates raw JSON dimension values.
    ///
    /// Each value may be a JSON number or a string holding a number.
    /// Fields are checked in `length`, `width`, `height` order.
    ///
    /// # Errors
    ///
    /// Returns [`DimensionError`] describing the first invalid field.
    pub fn parse(
        length: Option<&Value>,
        width: Option<&Value>,
        height: Option<&Value>,
    ) -> Result<Self, DimensionError> {
        let length = parse_value("length", length)?;
        let width = parse_value("width", width)?;
        let height = parse_value("height", height)?;

        Self::new(length, width, height)
    }
}

fn parse_value(field: &'static str, value: Option<&Value>) -> Result<f64, DimensionError> {
    let not_numeric = |v: &Value| DimensionError::NotNumeric {
        field,
        value: v.to_string(),
    };

    match value {
        None | Some(Value::Null) => Err(DimensionError::Missing { field }),
        Some(v @ Value::Number(n)) => n.as_f64().ok_or_else(|| not_numeric(v)),
        Some(v @ Value::String(s)) => s.trim().parse::<f64>().map_err(|_| not_numeric(v)),
        Some(other) => Err(not_numeric(other)),
    }
}

fn check_positive(field: &'static str, value: f64) -> Result<f64, DimensionError> {
    if value.is_nan() || value.is_infinite() {
        return Err(DimensionError::NotNumeric {
            field,
            value: value.to_string(),
        });
    }

    if value <= 0.0 {
        return Err(DimensionError::NotPositive { field, value });
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_volume_is_product_of_dimensions() {
        let dims = Dimensions::new(10.0, 2.0, 2.0).unwrap();

        assert_eq!(dims.length, 10.0);
        assert_eq!(dims.width, 2.0);
        assert_eq!(dims.height, 2.0);
        assert!((dims.volume - 40.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_fractional_dimensions() {
        let dims = Dimensions::new(1.5, 0.5, 2.0).unwrap();
        assert!((dims.volume - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_zero_dimension_rejected() {
        let err = Dimensions::new(0.0, 1.0, 1.0).unwrap_err();
        assert_eq!(
            err,
            DimensionError::NotPositive {
                field: "length",
                value: 0.0
            }
        );
    }

    #[test]
    fn test_negative_dimension_rejected() {
        let err = Dimensions::new(1.0, 1.0, -3.0).unwrap_err();
        assert_eq!(err.field(), "height");
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(Dimensions::new(f64::NAN, 1.0, 1.0).is_err());
        assert!(Dimensions::new(1.0, f64::INFINITY, 1.0).is_err());
    }

    #[test]
    fn test_overflowing_volume_rejected() {
        let err = Dimensions::parse(
            Some(&json!(1e200)),
            Some(&json!(1e200)),
            Some(&json!(1e200)),
        )
        .unwrap_err();

        assert!(matches!(err, DimensionError::VolumeOutOfRange { .. }));
        assert_eq!(err.field(), "volume");
    }

    #[test]
    fn test_underflowing_volume_rejected() {
        let err = Dimensions::new(1e-200, 1e-200, 1e-200).unwrap_err();
        assert_eq!(err.field(), "volume");
    }

    #[test]
    fn test_parse_numbers_and_numeric_strings() {
        let dims = Dimensions::parse(
            Some(&json!(5)),
            Some(&json!("1.5")),
            Some(&json!(" 2 ")),
        )
        .unwrap();

        assert_eq!(dims.length, 5.0);
        assert_eq!(dims.width, 1.5);
        assert_eq!(dims.height, 2.0);
        assert!((dims.volume - 15.0).abs() < 1e-12);
    }

    #[test]
    fn test_parse_missing_field() {
        let err = Dimensions::parse(Some(&json!(1)), None, Some(&json!(1))).unwrap_err();
        assert_eq!(err, DimensionError::Missing { field: "width" });

        let err = Dimensions::parse(Some(&Value::Null), Some(&json!(1)), Some(&json!(1)))
            .unwrap_err();
        assert_eq!(err, DimensionError::Missing { field: "length" });
    }

    #[test]
    fn test_parse_non_numeric() {
        let err = Dimensions::parse(Some(&json!("abc")), Some(&json!(1)), Some(&json!(1)))
            .unwrap_err();
        assert!(matches!(
            err,
            DimensionError::NotNumeric {
                field: "length",
                ..
            }
        ));

        let err = Dimensions::parse(Some(&json!(1)), Some(&json!(true)), Some(&json!(1)))
            .unwrap_err();
        assert_eq!(err.field(), "width");

        let err = Dimensions::parse(Some(&json!(1)), Some(&json!(1)), Some(&json!("nan")))
            .unwrap_err();
        assert_eq!(err.field(), "height");
    }

    #[test]
    fn test_parse_zero_string_rejected() {
        let err = Dimensions::parse(Some(&json!("0")), Some(&json!(1)), Some(&json!(1)))
            .unwrap_err();
        assert!(matches!(err, DimensionError::NotPositive { .. }));
    }
}
