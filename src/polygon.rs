use serde::Serialize;
use kurbo::{BezPath, Point};
use crate::types::BoundingBox;

/// Closed star outline. Even indices are tips, odd indices are the concave
/// points between them, and the last point repeats the first.
#[derive(Serialize, Clone, PartialEq, Debug)]
pub struct Polygon {
    pub(crate) center: Point,
    pub(crate) points: Vec<Point>,
}

impl Polygon {
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn outer_vertices(&self) -> impl Iterator<Item = Point> + '_ {
        self.points.iter().step_by(2).copied()
    }

    pub fn inner_vertices(&self) -> impl Iterator<Item = Point> + '_ {
        self.points.iter().skip(1).step_by(2).copied()
    }

    pub fn bounding_box(&self) -> BoundingBox {
        if self.points.is_empty() {
            return BoundingBox::new(self.center.x, self.center.y, self.center.x, self.center.y);
        }

        let mut min_x = f64::INFINITY;
        let mut min_y = f64::INFINITY;
        let mut max_x = f64::NEG_INFINITY;
        let mut max_y = f64::NEG_INFINITY;
        for p in &self.points {
            if p.x < min_x { min_x = p.x; }
            if p.x > max_x { max_x = p.x; }
            if p.y < min_y { min_y = p.y; }
            if p.y > max_y { max_y = p.y; }
        }
        BoundingBox { left: min_x, top: min_y, right: max_x, bottom: max_y }
    }

    pub fn to_bez_path(&self) -> BezPath {
        let mut path = BezPath::new();
        for (i, p) in self.points.iter().enumerate() {
            if i == 0 { path.move_to(*p); }
            else { path.line_to(*p); }
        }
        if !self.points.is_empty() {
            path.close_path();
        }
        path
    }

    /// SVG path data (`M ... L ... Z`) for the outline.
    pub fn to_svg_path(&self) -> String {
        self.to_bez_path().to_svg()
    }
}
