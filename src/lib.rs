use wasm_bindgen::prelude::*;

pub mod error;
pub mod types;
pub mod polygon;
pub mod star;
pub mod fill;
pub mod params;
pub mod layout;
pub mod commands;

pub use error::StarError;
pub use types::*;
pub use polygon::Polygon;
pub use star::{compute_star_polygon, compute_default_star_polygon, DEFAULT_INNER_TO_OUTER_RATIO, MAX_STAR_POINTS};
pub use fill::compute_fill_rectangle;
pub use params::{StarParameters, ShapeMetadata, ShapeParameter};
pub use layout::StarLayout;

/// Routes panics to the browser console. Call once from the host.
#[wasm_bindgen]
pub fn init() {
    console_error_panic_hook::set_once();
}
