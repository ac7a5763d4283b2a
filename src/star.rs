use std::f64::consts::PI;
use kurbo::Point;
use log::{debug, warn};
use crate::error::StarError;
use crate::polygon::Polygon;

pub const DEFAULT_INNER_TO_OUTER_RATIO: f64 = 1.0 / 3.0;

/// Largest tip count accepted. The `2n + 1` vertex buffer (about 32 MB at
/// this size) must stay allocatable on 32-bit wasm.
pub const MAX_STAR_POINTS: u32 = 1 << 20;

// Keeps the outline stroke inside the box.
const OUTER_RADIUS_MARGIN: f64 = 0.95;

/// Checks a point count coming from an untyped source.
pub fn validate_point_count(number_of_points: i64) -> Result<u32, StarError> {
    match u32::try_from(number_of_points) {
        Ok(n) if (1..=MAX_STAR_POINTS).contains(&n) => Ok(n),
        _ => {
            warn!("rejecting star with {} points", number_of_points);
            Err(StarError::InvalidPointCount(number_of_points))
        }
    }
}

/// Outer radius of a star laid out in a `width` x `height` box.
///
/// Falls back to `width` when the box has no positive area yet, so zero or
/// negative sizes give a degenerate star rather than an error.
pub fn outer_radius(width: f64, height: f64) -> f64 {
    let dim = if width > 0.0 && height > 0.0 { width.min(height) } else { width };
    OUTER_RADIUS_MARGIN * dim / 2.0
}

/// Generates the closed vertex sequence of a star with `number_of_points` tips,
/// centered in the box, first tip at 12 o'clock.
///
/// The result holds `2 * number_of_points + 1` points alternating between the
/// outer radius and `inner_to_outer_radius_ratio` times it; the final point
/// repeats the first. The ratio is not validated.
pub fn compute_star_polygon(
    number_of_points: u32,
    width: f64,
    height: f64,
    inner_to_outer_radius_ratio: f64,
) -> Result<Polygon, StarError> {
    let number_of_vertices = match number_of_points.checked_mul(2) {
        Some(v) if (1..=MAX_STAR_POINTS).contains(&number_of_points) => v as usize,
        _ => {
            warn!("rejecting star with {} points", number_of_points);
            return Err(StarError::InvalidPointCount(i64::from(number_of_points)));
        }
    };

    let radius = outer_radius(width, height);
    let center = Point::new(width / 2.0, height / 2.0);
    let spacing = 2.0 * PI / number_of_vertices as f64;
    let phase = 3.0 * PI / 2.0;

    let points = (0..=number_of_vertices)
        .map(|i| {
            let angle = i as f64 * spacing + phase;
            let r = if i % 2 == 1 { radius * inner_to_outer_radius_ratio } else { radius };
            Point::new(center.x + r * angle.cos(), center.y + r * angle.sin())
        })
        .collect::<Vec<_>>();

    debug!(
        "star polygon: {} points in {}x{}, radius {}, ratio {}",
        number_of_points, width, height, radius, inner_to_outer_radius_ratio
    );

    Ok(Polygon { center, points })
}

pub fn compute_default_star_polygon(number_of_points: u32, width: f64, height: f64) -> Result<Polygon, StarError> {
    compute_star_polygon(number_of_points, width, height, DEFAULT_INNER_TO_OUTER_RATIO)
}
