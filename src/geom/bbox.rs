use geo::{coord, Rect};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// An axis-aligned lon/lat window, validated on construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawBounds", into = "RawBounds")]
pub struct BoundingBox {
    min_x: f64,
    min_y: f64,
    max_x: f64,
    max_y: f64,
}

/// Serialized form of a [`BoundingBox`], checked by `TryFrom`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct RawBounds {
    min_x: f64,
    min_y: f64,
    max_x: f64,
    max_y: f64,
}

impl BoundingBox {
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Result<Self> {
        let values = [min_x, min_y, max_x, max_y];
        if values.iter().any(|v| !v.is_finite()) {
            return Err(Error::Config(format!("bounding box has a non-finite bound: {values:?}")));
        }
        if min_x >= max_x || min_y >= max_y {
            return Err(Error::Config(format!(
                "bounding box is empty: x [{min_x}, {max_x}], y [{min_y}, {max_y}]"
            )));
        }
        Ok(Self { min_x, min_y, max_x, max_y })
    }

    /// The default window around geographic Europe.
    pub fn europe() -> Self {
        Self { min_x: -25.0, min_y: 34.0, max_x: 45.0, max_y: 72.0 }
    }

    #[inline] pub fn min_x(&self) -> f64 { self.min_x }
    #[inline] pub fn min_y(&self) -> f64 { self.min_y }
    #[inline] pub fn max_x(&self) -> f64 { self.max_x }
    #[inline] pub fn max_y(&self) -> f64 { self.max_y }

    pub fn to_rect(&self) -> Rect<f64> {
        Rect::new(
            coord! { x: self.min_x, y: self.min_y },
            coord! { x: self.max_x, y: self.max_y },
        )
    }

    /// True if `rect` lies inside this window (boundary inclusive).
    pub fn contains_rect(&self, rect: &Rect<f64>) -> bool {
        rect.min().x >= self.min_x && rect.max().x <= self.max_x
            && rect.min().y >= self.min_y && rect.max().y <= self.max_y
    }

    /// True if `rect` and this window share at least one point.
    pub fn touches_rect(&self, rect: &Rect<f64>) -> bool {
        rect.min().x <= self.max_x && rect.max().x >= self.min_x
            && rect.min().y <= self.max_y && rect.max().y >= self.min_y
    }
}

impl Default for BoundingBox {
    fn default() -> Self { Self::europe() }
}

impl TryFrom<RawBounds> for BoundingBox {
    type Error = Error;

    fn try_from(raw: RawBounds) -> Result<Self> {
        Self::new(raw.min_x, raw.min_y, raw.max_x, raw.max_y)
    }
}

impl From<BoundingBox> for RawBounds {
    fn from(bbox: BoundingBox) -> Self {
        Self { min_x: bbox.min_x, min_y: bbox.min_y, max_x: bbox.max_x, max_y: bbox.max_y }
    }
}
