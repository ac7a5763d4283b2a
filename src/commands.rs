use wasm_bindgen::prelude::*;
use serde::{Serialize, Deserialize};
use log::{trace, warn};
use crate::error::StarError;
use crate::fill::compute_fill_rectangle;
use crate::layout::StarLayout;
use crate::params::StarParameters;
use crate::star::{compute_star_polygon, validate_point_count, DEFAULT_INNER_TO_OUTER_RATIO};
use crate::types::{BoundingBox, FillDirection, FillFraction};

#[derive(Deserialize)]
struct PolygonRequest {
    points: i64,
    width: f64,
    height: f64,
    #[serde(default = "default_ratio")]
    inner_ratio: f64,
}

#[derive(Deserialize)]
struct FillRequest {
    bounds: BoundingBox,
    direction: serde_json::Value,
    fraction: f64,
    #[serde(default)]
    clamp: bool,
}

#[derive(Deserialize)]
struct LayoutRequest {
    width: f64,
    height: f64,
    #[serde(default)]
    star: StarParameters,
}

#[derive(Serialize)]
struct PolygonResponse {
    points: Vec<kurbo::Point>,
    bounds: BoundingBox,
}

fn default_ratio() -> f64 {
    DEFAULT_INNER_TO_OUTER_RATIO
}

/// Accepts either a direction name or a style-attribute index.
fn direction_from_value(value: &serde_json::Value) -> Result<FillDirection, StarError> {
    if let Some(s) = value.as_str() {
        return s.parse();
    }
    match value.as_i64().and_then(|i| i32::try_from(i).ok()) {
        Some(i) => FillDirection::from_index(i),
        None => Err(StarError::InvalidFillDirection(value.to_string())),
    }
}

fn error_json(e: &StarError) -> String {
    serde_json::json!({ "error": e.to_string() }).to_string()
}

fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value)
        .unwrap_or_else(|e| serde_json::json!({ "error": e.to_string() }).to_string())
}

fn run(action: &str, params: serde_json::Value) -> Result<String, StarError> {
    match action {
        "star_polygon" => {
            let req: PolygonRequest = serde_json::from_value(params)?;
            let points = validate_point_count(req.points)?;
            let polygon = compute_star_polygon(points, req.width, req.height, req.inner_ratio)?;
            Ok(to_json(&PolygonResponse {
                bounds: polygon.bounding_box(),
                points: polygon.points().to_vec(),
            }))
        }
        "star_svg" => {
            let req: PolygonRequest = serde_json::from_value(params)?;
            let points = validate_point_count(req.points)?;
            let polygon = compute_star_polygon(points, req.width, req.height, req.inner_ratio)?;
            Ok(serde_json::json!({ "path_data": polygon.to_svg_path() }).to_string())
        }
        "fill_rectangle" => {
            let req: FillRequest = serde_json::from_value(params)?;
            let direction = direction_from_value(&req.direction)?;
            let fraction = if req.clamp { FillFraction::new(req.fraction).get() } else { req.fraction };
            Ok(to_json(&compute_fill_rectangle(req.bounds, direction, fraction)))
        }
        "star_layout" => {
            let req: LayoutRequest = serde_json::from_value(params)?;
            Ok(to_json(&StarLayout::compute(&req.star, req.width, req.height)?))
        }
        "metadata" => Ok(to_json(&StarParameters::metadata())),
        _ => Err(StarError::InvalidParameters(format!("unsupported action: {}", action))),
    }
}

/// Runs a `{"action": ..., "params": {...}}` command and returns the JSON
/// result, or `{"error": ...}`.
#[wasm_bindgen]
pub fn execute_command(cmd_json: &str) -> String {
    #[derive(Deserialize)]
    struct Command {
        action: String,
        #[serde(default)]
        params: serde_json::Value,
    }

    let cmd: Command = match serde_json::from_str(cmd_json) {
        Ok(c) => c,
        Err(e) => return error_json(&StarError::from(e)),
    };

    trace!("star command: {}", cmd.action);
    match run(&cmd.action, cmd.params) {
        Ok(result) => result,
        Err(e) => {
            warn!("star command {} failed: {}", cmd.action, e);
            error_json(&e)
        }
    }
}

/// SVG path data for a star, or an empty string when `points` is not positive.
#[wasm_bindgen]
pub fn star_path_svg(points: i32, width: f64, height: f64, inner_ratio: f64) -> String {
    validate_point_count(i64::from(points))
        .and_then(|n| compute_star_polygon(n, width, height, inner_ratio))
        .map(|polygon| polygon.to_svg_path())
        .unwrap_or_default()
}

#[wasm_bindgen]
pub fn star_metadata() -> String {
    to_json(&StarParameters::metadata())
}
