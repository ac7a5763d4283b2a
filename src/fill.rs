use crate::types::{BoundingBox, FillDirection};

/// Clip rectangle covering `fill_fraction` of `bounds` along `direction`.
///
/// Measured against `bounds` on both axes. The fraction is taken as given;
/// clamp it first (see [`FillFraction`](crate::types::FillFraction)) if the
/// result must stay inside `bounds`.
pub fn compute_fill_rectangle(bounds: BoundingBox, direction: FillDirection, fill_fraction: f64) -> BoundingBox {
    let mut rect = bounds;
    match direction {
        FillDirection::LeftToRight => {
            rect.right = bounds.left + bounds.width() * fill_fraction;
        }
        FillDirection::RightToLeft => {
            rect.left = bounds.right - bounds.width() * fill_fraction;
        }
        FillDirection::TopToBottom => {
            rect.bottom = bounds.top + bounds.height() * fill_fraction;
        }
        FillDirection::BottomToTop => {
            rect.top = bounds.bottom - bounds.height() * fill_fraction;
        }
    }
    rect
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> BoundingBox {
        BoundingBox { left: 0.0, top: 0.0, right: 100.0, bottom: 60.0 }
    }

    #[test]
    fn left_to_right_half() {
        let r = compute_fill_rectangle(bounds(), FillDirection::LeftToRight, 0.5);
        assert_eq!(r, BoundingBox { left: 0.0, top: 0.0, right: 50.0, bottom: 60.0 });
    }

    #[test]
    fn bottom_to_top_quarter() {
        let r = compute_fill_rectangle(bounds(), FillDirection::BottomToTop, 0.25);
        assert_eq!(r, BoundingBox { left: 0.0, top: 45.0, right: 100.0, bottom: 60.0 });
    }

    #[test]
    fn right_to_left_keeps_right_edge() {
        let b = BoundingBox::new(10.0, 5.0, 110.0, 65.0);
        let r = compute_fill_rectangle(b, FillDirection::RightToLeft, 0.3);
        assert!((r.left - 80.0).abs() < 1e-9);
        assert_eq!(r.right, 110.0);
        assert_eq!((r.top, r.bottom), (5.0, 65.0));
    }

    #[test]
    fn top_to_bottom_uses_bounds_offset() {
        let b = BoundingBox::new(10.0, 20.0, 30.0, 120.0);
        let r = compute_fill_rectangle(b, FillDirection::TopToBottom, 0.1);
        assert_eq!(r, BoundingBox { left: 10.0, top: 20.0, right: 30.0, bottom: 30.0 });
    }

    #[test]
    fn empty_fill_sits_on_start_edge() {
        let b = BoundingBox::new(10.0, 20.0, 50.0, 80.0);
        let ltr = compute_fill_rectangle(b, FillDirection::LeftToRight, 0.0);
        assert_eq!((ltr.left, ltr.right), (10.0, 10.0));
        let rtl = compute_fill_rectangle(b, FillDirection::RightToLeft, 0.0);
        assert_eq!((rtl.left, rtl.right), (50.0, 50.0));
        let ttb = compute_fill_rectangle(b, FillDirection::TopToBottom, 0.0);
        assert_eq!((ttb.top, ttb.bottom), (20.0, 20.0));
        let btt = compute_fill_rectangle(b, FillDirection::BottomToTop, 0.0);
        assert_eq!((btt.top, btt.bottom), (80.0, 80.0));
    }

    #[test]
    fn full_fill_equals_bounds() {
        let b = BoundingBox::new(-3.5, 2.25, 47.0, 91.0);
        for dir in FillDirection::ALL {
            assert_eq!(compute_fill_rectangle(b, dir, 1.0), b, "{}", dir);
        }
    }

    #[test]
    fn fill_stays_inside_bounds() {
        let b = BoundingBox::new(1.125, 3.5, 96.875, 91.75);
        for dir in FillDirection::ALL {
            for step in 0..=20 {
                let f = step as f64 / 20.0;
                let r = compute_fill_rectangle(b, dir, f);
                assert!(b.contains(&r), "{} at {} escapes bounds", dir, f);
            }
        }
    }
}
