use serde::{Deserialize, Serialize};

use crate::area::Area;

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum ParameterError {
    #[error("select parameter {key:?} has no options")]
    EmptySelect { key: String },

    #[error("range parameter {key:?} has invalid bounds: min {min}, max {max}, step {step}")]
    InvalidRange {
        key: String,
        min: f64,
        max: f64,
        step: f64,
    },

    #[error("{value:?} is not an option of select parameter {key:?}")]
    UnknownOption { key: String, value: String },

    #[error("value {value} of range parameter {key:?} is outside [{min}, {max}]")]
    OutOfRange {
        key: String,
        value: f64,
        min: f64,
        max: f64,
    },
}

/// Kind-specific payload of a parameter. The set of kinds is closed; every
/// consumer matches on it exhaustively.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ParameterValue {
    Range {
        min: f64,
        max: f64,
        step: f64,
        value: f64,
    },
    Select {
        options: Vec<String>,
        value: String,
    },
    Color {
        value: String,
    },
    Boolean {
        value: bool,
    },
    Area {
        value: Area,
        #[serde(rename = "cropImage")]
        crop_image: bool,
    },
}

/// One tunable value of a filter.
///
/// `key` is the stable wire-format field name; `display_name` is the
/// UI label and never reaches the backend. The two are kept separate so
/// a label can be reworded without breaking the backend contract.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct Parameter {
    #[serde(rename = "name")]
    pub key: String,
    #[serde(rename = "displayName")]
    pub display_name: String,
    #[serde(flatten)]
    pub value: ParameterValue,
}

impl Parameter {
    /// Numeric parameter constrained to `[min, max]`, starting at `min`.
    pub fn range(
        key: impl Into<String>,
        display_name: impl Into<String>,
        min: f64,
        max: f64,
        step: f64,
    ) -> Result<Self, ParameterError> {
        Self::range_with_value(key, display_name, min, max, step, min)
    }

    pub fn range_with_value(
        key: impl Into<String>,
        display_name: impl Into<String>,
        min: f64,
        max: f64,
        step: f64,
        value: f64,
    ) -> Result<Self, ParameterError> {
        let key = key.into();
        if min > max || step <= 0.0 {
            return Err(ParameterError::InvalidRange {
                key,
                min,
                max,
                step,
            });
        }
        if value < min || value > max {
            return Err(ParameterError::OutOfRange {
                key,
                value,
                min,
                max,
            });
        }
        Ok(Self {
            key,
            display_name: display_name.into(),
            value: ParameterValue::Range {
                min,
                max,
                step,
                value,
            },
        })
    }

    /// Enumerated choice, defaulting to the first option. An empty option
    /// list is rejected rather than producing a parameter with no value.
    pub fn select(
        key: impl Into<String>,
        display_name: impl Into<String>,
        options: Vec<String>,
    ) -> Result<Self, ParameterError> {
        let key = key.into();
        let Some(first) = options.first().cloned() else {
            return Err(ParameterError::EmptySelect { key });
        };
        Ok(Self {
            key,
            display_name: display_name.into(),
            value: ParameterValue::Select {
                options,
                value: first,
            },
        })
    }

    pub fn select_with_value(
        key: impl Into<String>,
        display_name: impl Into<String>,
        options: Vec<String>,
        value: impl Into<String>,
    ) -> Result<Self, ParameterError> {
        let key = key.into();
        let value = value.into();
        if options.is_empty() {
            return Err(ParameterError::EmptySelect { key });
        }
        if !options.contains(&value) {
            return Err(ParameterError::UnknownOption { key, value });
        }
        Ok(Self {
            key,
            display_name: display_name.into(),
            value: ParameterValue::Select { options, value },
        })
    }

    /// Hex color with a leading `#`, defaulting to black.
    pub fn color(key: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self::color_with_value(key, display_name, "#000000")
    }

    pub fn color_with_value(
        key: impl Into<String>,
        display_name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            display_name: display_name.into(),
            value: ParameterValue::Color {
                value: value.into(),
            },
        }
    }

    pub fn boolean(key: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            display_name: display_name.into(),
            value: ParameterValue::Boolean { value: false },
        }
    }

    /// Region selection with a zeroed area; by default the backend crops
    /// the output to the selected region.
    pub fn area(key: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self::area_with_crop(key, display_name, true)
    }

    pub fn area_with_crop(
        key: impl Into<String>,
        display_name: impl Into<String>,
        crop_image: bool,
    ) -> Self {
        Self {
            key: key.into(),
            display_name: display_name.into(),
            value: ParameterValue::Area {
                value: Area::default(),
                crop_image,
            },
        }
    }

    /// Canonical wire form of the current value, as the backend's query
    /// parser expects it: plain decimals for numbers and booleans, the bare
    /// option string for selects, six hex digits (no `#`) for colors, and
    /// `xMin;yMin;xMax;yMax` for areas.
    pub fn wire_value(&self) -> String {
        match &self.value {
            ParameterValue::Range { value, .. } => value.to_string(),
            ParameterValue::Select { value, .. } => value.clone(),
            ParameterValue::Color { value } => value.trim_start_matches('#').to_owned(),
            ParameterValue::Boolean { value } => value.to_string(),
            ParameterValue::Area { value, .. } => value.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_defaults_to_min() {
        let param = Parameter::range("size", "Kernel size", 1.0, 21.0, 2.0).unwrap();
        assert_eq!(param.wire_value(), "1");
    }

    #[test]
    fn range_rejects_inverted_bounds() {
        let err = Parameter::range("size", "Kernel size", 21.0, 1.0, 2.0).unwrap_err();
        assert!(matches!(err, ParameterError::InvalidRange { .. }));
    }

    #[test]
    fn range_rejects_nonpositive_step() {
        let err = Parameter::range("sigma", "Sigma", 0.1, 2.0, 0.0).unwrap_err();
        assert!(matches!(err, ParameterError::InvalidRange { .. }));
    }

    #[test]
    fn range_rejects_value_outside_bounds() {
        let err =
            Parameter::range_with_value("delta", "Delta", -255.0, 255.0, 1.0, 300.0).unwrap_err();
        assert!(matches!(err, ParameterError::OutOfRange { .. }));
    }

    #[test]
    fn select_defaults_to_first_option() {
        let param = Parameter::select(
            "borderType",
            "Border type",
            vec!["SKIP".into(), "ZERO".into(), "WRAP".into()],
        )
        .unwrap();
        assert_eq!(param.wire_value(), "SKIP");
    }

    #[test]
    fn select_rejects_empty_options() {
        let err = Parameter::select("borderType", "Border type", vec![]).unwrap_err();
        assert_eq!(
            err,
            ParameterError::EmptySelect {
                key: "borderType".into()
            }
        );
    }

    #[test]
    fn select_rejects_value_not_in_options() {
        let err = Parameter::select_with_value(
            "borderType",
            "Border type",
            vec!["SKIP".into(), "ZERO".into()],
            "REFLECT",
        )
        .unwrap_err();
        assert!(matches!(err, ParameterError::UnknownOption { .. }));
    }

    #[test]
    fn color_strips_leading_hash_on_the_wire() {
        let param = Parameter::color_with_value("tint", "Tint", "#1a2b3c");
        assert_eq!(param.wire_value(), "1a2b3c");
    }

    #[test]
    fn color_defaults_to_black() {
        assert_eq!(Parameter::color("tint", "Tint").wire_value(), "000000");
    }

    #[test]
    fn boolean_defaults_to_false() {
        assert_eq!(Parameter::boolean("invert", "Invert").wire_value(), "false");
    }

    #[test]
    fn area_serializes_rounded_bounds() {
        let mut param = Parameter::area("region", "Region");
        if let ParameterValue::Area { value, .. } = &mut param.value {
            *value = Area::new(1.4, 2.5, 99.6, 50.5);
        }
        assert_eq!(param.wire_value(), "1;3;100;51");
    }

    #[test]
    fn area_defaults_to_cropping() {
        let param = Parameter::area("region", "Region");
        assert!(matches!(
            param.value,
            ParameterValue::Area {
                crop_image: true,
                ..
            }
        ));
    }
}
