use serde::{Serialize, Deserialize};
use kurbo::Rect;
use std::fmt;
use std::str::FromStr;
use crate::error::StarError;

/// Which edge of the star the fill advances from.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum FillDirection {
    #[default]
    LeftToRight,
    RightToLeft,
    TopToBottom,
    BottomToTop,
}

impl FillDirection {
    pub const ALL: [FillDirection; 4] = [
        FillDirection::LeftToRight,
        FillDirection::RightToLeft,
        FillDirection::TopToBottom,
        FillDirection::BottomToTop,
    ];

    /// Maps a widget-attribute style index (declaration order) to a direction.
    pub fn from_index(index: i32) -> Result<Self, StarError> {
        usize::try_from(index)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
            .ok_or_else(|| StarError::InvalidFillDirection(index.to_string()))
    }

    pub fn index(self) -> i32 {
        match self {
            FillDirection::LeftToRight => 0,
            FillDirection::RightToLeft => 1,
            FillDirection::TopToBottom => 2,
            FillDirection::BottomToTop => 3,
        }
    }

    pub fn is_horizontal(self) -> bool {
        matches!(self, FillDirection::LeftToRight | FillDirection::RightToLeft)
    }
}

impl fmt::Display for FillDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FillDirection::LeftToRight => "LeftToRight",
            FillDirection::RightToLeft => "RightToLeft",
            FillDirection::TopToBottom => "TopToBottom",
            FillDirection::BottomToTop => "BottomToTop",
        };
        f.write_str(name)
    }
}

impl FromStr for FillDirection {
    type Err = StarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lefttoright" | "ltr" => Ok(FillDirection::LeftToRight),
            "righttoleft" | "rtl" => Ok(FillDirection::RightToLeft),
            "toptobottom" | "ttb" => Ok(FillDirection::TopToBottom),
            "bottomtotop" | "btt" => Ok(FillDirection::BottomToTop),
            _ => Err(StarError::InvalidFillDirection(s.to_string())),
        }
    }
}

/// Fill proportion held in `[0, 1]`. NaN collapses to empty.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, PartialOrd, Debug)]
#[serde(from = "f64", into = "f64")]
pub struct FillFraction(f64);

impl FillFraction {
    pub const EMPTY: FillFraction = FillFraction(0.0);
    pub const FULL: FillFraction = FillFraction(1.0);

    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self::EMPTY;
        }
        FillFraction(value.clamp(0.0, 1.0))
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

impl Default for FillFraction {
    fn default() -> Self {
        Self::FULL
    }
}

impl From<f64> for FillFraction {
    fn from(value: f64) -> Self {
        FillFraction::new(value)
    }
}

impl From<FillFraction> for f64 {
    fn from(fraction: FillFraction) -> Self {
        fraction.0
    }
}

/// Axis-aligned box in screen coordinates (y grows downward).
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Debug, Default)]
#[serde(from = "RawBoundingBox")]
pub struct BoundingBox {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

// Edges as they arrive over the wire, before normalization.
#[derive(Deserialize)]
struct RawBoundingBox {
    left: f64,
    top: f64,
    right: f64,
    bottom: f64,
}

impl From<RawBoundingBox> for BoundingBox {
    fn from(raw: RawBoundingBox) -> Self {
        BoundingBox::new(raw.left, raw.top, raw.right, raw.bottom)
    }
}

impl BoundingBox {
    /// Builds a box from two opposite edges in any order.
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        BoundingBox {
            left: left.min(right),
            top: top.min(bottom),
            right: left.max(right),
            bottom: top.max(bottom),
        }
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    pub fn contains(&self, other: &BoundingBox) -> bool {
        other.left >= self.left && other.right <= self.right
            && other.top >= self.top && other.bottom <= self.bottom
    }

    pub fn to_rect(&self) -> Rect {
        Rect::new(self.left, self.top, self.right, self.bottom)
    }
}

impl From<Rect> for BoundingBox {
    fn from(r: Rect) -> Self {
        BoundingBox::new(r.x0, r.y0, r.x1, r.y1)
    }
}

impl From<BoundingBox> for Rect {
    fn from(b: BoundingBox) -> Self {
        b.to_rect()
    }
}
