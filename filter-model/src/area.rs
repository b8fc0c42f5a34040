use std::fmt;

use serde::{Deserialize, Serialize};

/// Rectangular region restricting a filter to part of an image.
#[derive(Serialize, Deserialize, PartialEq, Clone, Copy, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct Area {
    pub x_min: f64,
    pub y_min: f64,
    pub x_max: f64,
    pub y_max: f64,
}

impl Area {
    pub fn new(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Self {
        Self {
            x_min,
            y_min,
            x_max,
            y_max,
        }
    }

    /// Resets all four bounds to zero.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        self.x_min == self.x_max && self.y_min == self.y_max
    }
}

impl fmt::Display for Area {
    /// Produces the wire form `xMin;yMin;xMax;yMax`. Each bound is rounded
    /// to the nearest integer, ties away from zero (`f64::round`), so for
    /// the non-negative coordinates the backend works with this is
    /// round-half-up.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{};{};{};{}",
            self.x_min.round() as i64,
            self.y_min.round() as i64,
            self.x_max.round() as i64,
            self.y_max.round() as i64
        )
    }
}
