use serde::Serialize;
use log::debug;
use crate::error::StarError;
use crate::fill::compute_fill_rectangle;
use crate::params::StarParameters;
use crate::polygon::Polygon;
use crate::star::compute_star_polygon;
use crate::types::BoundingBox;

/// One frame's worth of star geometry: the outline to stroke, its bounds,
/// and the clip rectangle for the filled part.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct StarLayout {
    pub polygon: Polygon,
    pub bounds: BoundingBox,
    pub fill: BoundingBox,
}

impl StarLayout {
    pub fn compute(params: &StarParameters, width: f64, height: f64) -> Result<Self, StarError> {
        let points = params.validate()?;
        let polygon = compute_star_polygon(points, width, height, params.inner_ratio)?;
        let bounds = polygon.bounding_box();
        let fill = compute_fill_rectangle(bounds, params.fill_direction, params.fill_fraction.get());
        debug!("star layout: bounds {:?}, fill {:?} ({})", bounds, fill, params.fill_direction);
        Ok(StarLayout { polygon, bounds, fill })
    }
}
