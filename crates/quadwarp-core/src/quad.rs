//! Quad geometry utilities
//!
//! A quad is four corner points defining the destination screen-space
//! region of a warped draw. Public corner order is {upper-left, lower-left,
//! lower-right, upper-right}; the warp rasterizer reindexes internally.
//!
//! The routines here are generic over coordinate precision via [`Coord`]:
//! they widen to `f64`, compute, and narrow back at the boundary.

use crate::bounds::Bounds;
use crate::error::{Error, Result};
use crate::point::{Coord, Point2, PointD, PointF, PointI};

/// Corner points in order {upper-left, lower-left, lower-right, upper-right}.
pub type Quad = [PointF; 4];

/// Build a [`Quad`] from an unsized point slice.
///
/// # Errors
///
/// Returns [`Error::WrongPointCount`] unless the slice holds exactly four
/// points.
pub fn quad_from_slice(points: &[PointF]) -> Result<Quad> {
    match *points {
        [a, b, c, d] => Ok([a, b, c, d]),
        _ => Err(Error::WrongPointCount {
            expected: 4,
            actual: points.len(),
        }),
    }
}

/// Axis-aligned rectangle quad at `pos` with size `(w, h)`.
pub fn quad_from_rect(pos: PointF, w: f32, h: f32) -> Quad {
    let ul = pos;
    let lr = PointF::new(pos.x + w, pos.y + h);
    [
        ul,
        PointF::new(ul.x, lr.y),
        lr,
        PointF::new(lr.x, ul.y),
    ]
}

/// Integer bounding box of a quad.
///
/// Component-wise min/max over the four corners, folded from the infinite
/// identities so the first corner always registers. The minimum corner is
/// floored and the maximum rounded up, keeping every pixel the quad can
/// cover inside the box.
pub fn bounding_box<T: Coord>(points: &[Point2<T>; 4]) -> Bounds {
    let mut min = PointD::new(f64::INFINITY, f64::INFINITY);
    let mut max = PointD::new(f64::NEG_INFINITY, f64::NEG_INFINITY);
    for p in points {
        let p = p.to_f64();
        min.x = min.x.min(p.x);
        min.y = min.y.min(p.y);
        max.x = max.x.max(p.x);
        max.y = max.y.max(p.y);
    }
    Bounds::new(
        PointI::new(min.x.floor() as i32, min.y.floor() as i32),
        PointI::new(max.x.ceil() as i32, max.y.ceil() as i32),
    )
}

/// Midpoint of a quad's bounding box.
///
/// This coincides with the intersection of the quad's diagonals only when
/// the quad is a rectangle; for a skewed quad it is an approximation.
/// Rotation-pivot callers rely on this exact behavior.
pub fn centerpoint<T: Coord>(points: &[Point2<T>; 4]) -> PointI {
    bounding_box(points).center()
}

/// Rotate four corner points about `pivot` by `angle` radians.
///
/// Counter-clockwise positive under the standard math convention. Returns
/// the rotated corners as a new array; the input is left untouched.
pub fn rotate_points<T: Coord>(
    points: &[Point2<T>; 4],
    angle: f64,
    pivot: Point2<T>,
) -> [Point2<T>; 4] {
    let cos_a = angle.cos();
    let sin_a = angle.sin();
    let pivot = pivot.to_f64();
    points.map(|p| {
        // translate so the pivot sits at the origin
        let p = p.to_f64() - pivot;
        // both output components read the pre-rotation point, so rotate
        // into a fresh point instead of overwriting in place
        let r = PointD::new(p.x * cos_a - p.y * sin_a, p.x * sin_a + p.y * cos_a);
        Point2::from_f64(r + pivot)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> [PointF; 4] {
        [
            PointF::new(0.0, 0.0),
            PointF::new(0.0, 10.0),
            PointF::new(10.0, 10.0),
            PointF::new(10.0, 0.0),
        ]
    }

    #[test]
    fn test_bounding_box_square() {
        let b = bounding_box(&square());
        assert_eq!(b.min, PointI::new(0, 0));
        assert_eq!(b.max, PointI::new(10, 10));
    }

    #[test]
    fn test_bounding_box_fractional_corners() {
        let q = [
            PointF::new(0.5, 0.5),
            PointF::new(0.5, 9.5),
            PointF::new(9.5, 9.5),
            PointF::new(9.5, 0.5),
        ];
        let b = bounding_box(&q);
        assert_eq!(b.min, PointI::new(0, 0));
        assert_eq!(b.max, PointI::new(10, 10));
    }

    #[test]
    fn test_centerpoint_square() {
        assert_eq!(centerpoint(&square()), PointI::new(5, 5));
    }

    #[test]
    fn test_rotate_by_zero_is_identity() {
        let q = [
            PointD::new(1.0, 2.0),
            PointD::new(3.0, 4.0),
            PointD::new(5.0, 6.0),
            PointD::new(7.0, 8.0),
        ];
        let r = rotate_points(&q, 0.0, PointD::new(2.5, 2.5));
        for (orig, rot) in q.iter().zip(r.iter()) {
            assert!((orig.x - rot.x).abs() < 1e-9);
            assert!((orig.y - rot.y).abs() < 1e-9);
        }
    }

    #[test]
    fn test_rotate_roundtrip() {
        let q = [
            PointD::new(0.0, 0.0),
            PointD::new(0.0, 7.0),
            PointD::new(7.0, 7.0),
            PointD::new(7.0, 0.0),
        ];
        let pivot = PointD::new(3.5, 3.5);
        let angle = 0.83;
        let there = rotate_points(&q, angle, pivot);
        let back = rotate_points(&there, -angle, pivot);
        for (orig, rot) in q.iter().zip(back.iter()) {
            assert!((orig.x - rot.x).abs() < 1e-9);
            assert!((orig.y - rot.y).abs() < 1e-9);
        }
    }

    #[test]
    fn test_rotate_quarter_turn() {
        let q = [
            PointD::new(1.0, 0.0),
            PointD::new(0.0, 0.0),
            PointD::new(0.0, 0.0),
            PointD::new(0.0, 0.0),
        ];
        let r = rotate_points(&q, std::f64::consts::FRAC_PI_2, PointD::new(0.0, 0.0));
        assert!((r[0].x - 0.0).abs() < 1e-9);
        assert!((r[0].y - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_quad_from_slice_wrong_count() {
        let pts = [PointF::new(0.0, 0.0); 3];
        assert!(quad_from_slice(&pts).is_err());
        let pts = [PointF::new(0.0, 0.0); 4];
        assert!(quad_from_slice(&pts).is_ok());
    }

    #[test]
    fn test_quad_from_rect_corner_order() {
        let q = quad_from_rect(PointF::new(1.0, 2.0), 4.0, 3.0);
        assert_eq!(q[0], PointF::new(1.0, 2.0)); // ul
        assert_eq!(q[1], PointF::new(1.0, 5.0)); // ll
        assert_eq!(q[2], PointF::new(5.0, 5.0)); // lr
        assert_eq!(q[3], PointF::new(5.0, 2.0)); // ur
    }
}
