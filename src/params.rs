use serde::{Serialize, Deserialize};
use crate::error::StarError;
use crate::star::{validate_point_count, DEFAULT_INNER_TO_OUTER_RATIO};
use crate::types::{FillDirection, FillFraction};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ShapeParameter {
    pub name: String,
    pub key: String,
    pub min: f64,
    pub max: f64,
    pub default: f64,
    pub step: f64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ShapeMetadata {
    pub id: String,
    pub name: String,
    pub parameters: Vec<ShapeParameter>,
    pub directions: Vec<FillDirection>,
}

/// Everything a host needs to lay out one star. Missing JSON fields take
/// their defaults; `fill_fraction` is clamped on the way in.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(default)]
pub struct StarParameters {
    pub points: i64,
    pub inner_ratio: f64,
    pub fill_fraction: FillFraction,
    pub fill_direction: FillDirection,
}

impl Default for StarParameters {
    fn default() -> Self {
        StarParameters {
            points: 5,
            inner_ratio: DEFAULT_INNER_TO_OUTER_RATIO,
            fill_fraction: FillFraction::FULL,
            fill_direction: FillDirection::LeftToRight,
        }
    }
}

impl StarParameters {
    pub fn from_json(json: &str) -> Result<Self, StarError> {
        let params: StarParameters = serde_json::from_str(json)?;
        params.validate()?;
        Ok(params)
    }

    /// Point count as the generator takes it.
    pub fn validate(&self) -> Result<u32, StarError> {
        validate_point_count(self.points)
    }

    pub fn metadata() -> ShapeMetadata {
        ShapeMetadata {
            id: "star".to_string(),
            name: "Star".to_string(),
            parameters: vec![
                ShapeParameter { name: "Points".to_string(), key: "points".to_string(), min: 3.0, max: 12.0, default: 5.0, step: 1.0 },
                ShapeParameter { name: "Inner Radius".to_string(), key: "inner_ratio".to_string(), min: 0.0, max: 1.0, default: DEFAULT_INNER_TO_OUTER_RATIO, step: 0.01 },
                ShapeParameter { name: "Fill".to_string(), key: "fill_fraction".to_string(), min: 0.0, max: 1.0, default: 1.0, step: 0.01 },
            ],
            directions: FillDirection::ALL.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_takes_defaults() {
        let p = StarParameters::from_json("{}").unwrap();
        assert_eq!(p, StarParameters::default());
        assert_eq!(p.points, 5);
        assert_eq!(p.fill_fraction, FillFraction::FULL);
    }

    #[test]
    fn partial_json_overrides_fields() {
        let p = StarParameters::from_json(r#"{"points": 8, "fill_fraction": 1.7, "fill_direction": "BottomToTop"}"#).unwrap();
        assert_eq!(p.points, 8);
        assert_eq!(p.fill_fraction.get(), 1.0);
        assert_eq!(p.fill_direction, FillDirection::BottomToTop);
        assert_eq!(p.inner_ratio, DEFAULT_INNER_TO_OUTER_RATIO);
    }

    #[test]
    fn non_positive_points_are_rejected() {
        assert_eq!(StarParameters::from_json(r#"{"points": 0}"#), Err(StarError::InvalidPointCount(0)));
        assert_eq!(StarParameters::from_json(r#"{"points": -4}"#), Err(StarError::InvalidPointCount(-4)));
    }

    #[test]
    fn malformed_json_is_a_parameter_error() {
        assert!(matches!(StarParameters::from_json("{points"), Err(StarError::InvalidParameters(_))));
        assert!(matches!(
            StarParameters::from_json(r#"{"fill_direction": "Sideways"}"#),
            Err(StarError::InvalidParameters(_))
        ));
    }

    #[test]
    fn metadata_lists_slider_ranges() {
        let meta = StarParameters::metadata();
        assert_eq!(meta.id, "star");
        let points = meta.parameters.iter().find(|p| p.key == "points").unwrap();
        assert_eq!((points.min, points.max, points.default), (3.0, 12.0, 5.0));
        assert_eq!(meta.directions.len(), 4);
    }
}
