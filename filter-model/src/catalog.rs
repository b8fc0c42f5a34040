use serde::{Deserialize, Serialize};

use crate::filter::Filter;
use crate::parameter::{Parameter, ParameterError};

/// One algorithm as listed by the backend catalog (`GET /algorithms`).
/// Values are optional in the catalog; conversion into a [`Filter`] fills
/// in the per-kind defaults and validates the definition.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct FilterDef {
    pub name: String,
    pub path: String,
    #[serde(default)]
    pub parameters: Vec<ParameterDef>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct ParameterDef {
    pub name: String,
    #[serde(rename = "displayName")]
    pub display_name: String,
    #[serde(flatten)]
    pub kind: ParameterKindDef,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ParameterKindDef {
    Range {
        min: f64,
        max: f64,
        step: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        value: Option<f64>,
    },
    Select {
        options: Vec<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        value: Option<String>,
    },
    Color {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        value: Option<String>,
    },
    Boolean {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        value: Option<bool>,
    },
    Area {
        #[serde(rename = "cropImage", default = "default_crop")]
        crop_image: bool,
    },
}

fn default_crop() -> bool {
    true
}

impl TryFrom<ParameterDef> for Parameter {
    type Error = ParameterError;

    fn try_from(def: ParameterDef) -> Result<Self, Self::Error> {
        let ParameterDef {
            name,
            display_name,
            kind,
        } = def;
        match kind {
            ParameterKindDef::Range {
                min,
                max,
                step,
                value,
            } => match value {
                Some(value) => Parameter::range_with_value(name, display_name, min, max, step, value),
                None => Parameter::range(name, display_name, min, max, step),
            },
            ParameterKindDef::Select { options, value } => match value {
                Some(value) => Parameter::select_with_value(name, display_name, options, value),
                None => Parameter::select(name, display_name, options),
            },
            ParameterKindDef::Color { value } => Ok(match value {
                Some(value) => Parameter::color_with_value(name, display_name, value),
                None => Parameter::color(name, display_name),
            }),
            ParameterKindDef::Boolean { value } => {
                let mut param = Parameter::boolean(name, display_name);
                if let Some(value) = value {
                    param.value = crate::parameter::ParameterValue::Boolean { value };
                }
                Ok(param)
            }
            ParameterKindDef::Area { crop_image } => {
                Ok(Parameter::area_with_crop(name, display_name, crop_image))
            }
        }
    }
}

impl TryFrom<FilterDef> for Filter {
    type Error = ParameterError;

    fn try_from(def: FilterDef) -> Result<Self, Self::Error> {
        let parameters = def
            .parameters
            .into_iter()
            .map(Parameter::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Filter::new(def.name, def.path, parameters))
    }
}
