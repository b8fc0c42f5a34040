use serde::{Deserialize, Serialize};

use crate::parameter::Parameter;

/// A named processing algorithm together with its configured parameters.
///
/// `name` is the display label; `path` is the backend route segment that
/// identifies the algorithm on the wire. Every field is owned, so `clone()`
/// yields a structurally independent copy: editing a clone's parameters
/// (including nested area bounds) never shows through to the original.
/// The editing surface takes such a clone before any destructive action so
/// the previously applied state stays intact.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct Filter {
    pub name: String,
    pub path: String,
    pub parameters: Vec<Parameter>,
}

impl Filter {
    pub fn new(
        name: impl Into<String>,
        path: impl Into<String>,
        parameters: Vec<Parameter>,
    ) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            parameters,
        }
    }

    /// Query-string fragment for this filter's parameter values.
    ///
    /// Emits `key=value` pairs in parameter order, joined with `&`, and
    /// always prefixed with a single `&` so the result can be appended
    /// directly after an existing query parameter such as
    /// `algorithm=<path>`. An empty parameter list yields exactly `"&"`.
    pub fn serialize(&self) -> String {
        let pairs = self
            .parameters
            .iter()
            .map(|p| format!("{}={}", p.key, p.wire_value()))
            .collect::<Vec<_>>()
            .join("&");
        format!("&{pairs}")
    }

    pub fn parameter(&self, key: &str) -> Option<&Parameter> {
        self.parameters.iter().find(|p| p.key == key)
    }

    pub fn parameter_mut(&mut self, key: &str) -> Option<&mut Parameter> {
        self.parameters.iter_mut().find(|p| p.key == key)
    }
}
