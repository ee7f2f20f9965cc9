//! Inverse bilinear sampling
//!
//! Maps a screen-space offset inside a quad back to normalized texture
//! coordinates by inverting the bilinear interpolation
//!
//! ```text
//! p(u, v) = c0 + b1*u + b2*v + b3*u*v
//! ```
//!
//! which reduces to one quadratic in v per pixel. The quad enters as three
//! basis vectors derived once per draw: b1 and b2 are the edge vectors out
//! of corner 0 (in solver corner order {ll, lr, ul, ur}), and b3 is the
//! twist term `c0 - c1 - c2 + c3`, zero exactly when the quad is a
//! parallelogram.

use quadwarp_core::{PointD, Texture, color};

/// Magnitudes below this are treated as zero by the solver.
///
/// Sized for single-precision inputs (floats carry 6-7 significant
/// digits); the solve itself runs in double precision.
pub const NEAR_ZERO: f64 = 1e-6;

/// Outcome of one warped sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampledPixel {
    /// The sampled source color. Transparent black when the solver found
    /// no texture coordinate at all.
    pub color: u32,
    /// Whether (u, v) landed inside the acceptance window.
    pub accepted: bool,
}

/// Invert the bilinear mapping for one pixel offset.
///
/// `q` is the pixel position minus corner 0 of the quad, in solver corner
/// order {ll, lr, ul, ur}. Returns the raw (u, v) solution without range
/// clamping, or `None` when the geometry admits no solution: a degenerate
/// quad, a pixel outside a non-parallelogram quad, or a denominator that
/// vanishes on both axes.
///
/// Of the two quadratic roots, the positive one is always taken. With
/// counter-clockwise winding under the solver's +y-up convention that is
/// the root landing inside the quad, so the tie-break is load-bearing, not
/// a style choice.
pub fn invert_bilinear(q: PointD, b1: PointD, b2: PointD, b3: PointD) -> Option<PointD> {
    // quadratic coefficients of A*v^2 + B*v + C = 0
    let a = b2.wedge(b3);
    let b = b3.wedge(q) - b1.wedge(b2);
    let c = b1.wedge(q);

    let v = if a.abs() < NEAR_ZERO {
        // parallelogram edges collapse the quadratic to linear form
        if b.abs() < NEAR_ZERO {
            return None;
        }
        -c / b
    } else {
        // a non-positive discriminant means the pixel is outside the quad
        let d = b * b - 4.0 * a * c;
        if d <= 0.0 {
            return None;
        }
        0.5 * (-b + d.sqrt()) / a
    };

    // solve for u on whichever axis has the larger denominator magnitude
    let denom = b1 + b3 * v;
    let u = if denom.x.abs() > denom.y.abs() {
        if denom.x.abs() < NEAR_ZERO {
            return None;
        }
        (q.x - b2.x * v) / denom.x
    } else {
        if denom.y.abs() < NEAR_ZERO {
            return None;
        }
        (q.y - b2.y * v) / denom.y
    };

    Some(PointD::new(u, v))
}

/// Solve one pixel offset and sample `source` with the result.
///
/// Whenever a texture coordinate exists the source is sampled, even when
/// the coordinate falls outside the acceptance window; the caller decides
/// what to do with rejected pixels. The v coordinate is mirrored before
/// sampling because the solve assumes +y up while image rows run top-down.
///
/// Acceptance is asymmetric: u in [0, 1), v in (0, 1].
pub fn warped_sample<T: Texture>(
    q: PointD,
    b1: PointD,
    b2: PointD,
    b3: PointD,
    source: &T,
) -> SampledPixel {
    let Some(uv) = invert_bilinear(q, b1, b2, b3) else {
        return SampledPixel {
            color: color::BLANK,
            accepted: false,
        };
    };

    let color = source.sample(uv.x as f32, (1.0 - uv.y) as f32);
    SampledPixel {
        color,
        accepted: uv.x >= 0.0 && uv.x < 1.0 && uv.y > 0.0 && uv.y <= 1.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quadwarp_core::Sprite;

    // unit square in solver order {ll, lr, ul, ur}; b3 = 0
    fn unit_square_basis() -> (PointD, PointD, PointD, PointD) {
        let c0 = PointD::new(0.0, 1.0);
        let c1 = PointD::new(1.0, 1.0);
        let c2 = PointD::new(0.0, 0.0);
        let c3 = PointD::new(1.0, 0.0);
        let b1 = c1 - c0;
        let b2 = c2 - c0;
        let b3 = c0 - c1 - c2 + c3;
        (c0, b1, b2, b3)
    }

    fn q_for(c0: PointD, x: f64, y: f64) -> PointD {
        PointD::new(x, y) - c0
    }

    #[test]
    fn test_degenerate_quad_rejects() {
        let zero = PointD::new(0.0, 0.0);
        assert_eq!(invert_bilinear(PointD::new(3.0, 3.0), zero, zero, zero), None);
    }

    #[test]
    fn test_parallelogram_interior() {
        let (c0, b1, b2, b3) = unit_square_basis();
        let uv = invert_bilinear(q_for(c0, 0.25, 0.5), b1, b2, b3).unwrap();
        assert!((uv.x - 0.25).abs() < 1e-12);
        assert!((uv.y - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_acceptance_boundaries_are_asymmetric() {
        let (c0, b1, b2, b3) = unit_square_basis();
        let src = Sprite::new(2, 2).unwrap();

        // u = 0 accepted, u = 1 rejected
        assert!(warped_sample(q_for(c0, 0.0, 0.5), b1, b2, b3, &src).accepted);
        assert!(!warped_sample(q_for(c0, 1.0, 0.5), b1, b2, b3, &src).accepted);

        // v = 1 (screen y = 0) accepted, v = 0 (screen y = 1) rejected
        assert!(warped_sample(q_for(c0, 0.5, 0.0), b1, b2, b3, &src).accepted);
        assert!(!warped_sample(q_for(c0, 0.5, 1.0), b1, b2, b3, &src).accepted);
    }

    #[test]
    fn test_general_quad_positive_root() {
        // trapezoid: ur pulled out to (3, 0), so b3 != 0
        let c0 = PointD::new(0.0, 2.0);
        let c1 = PointD::new(2.0, 2.0);
        let c2 = PointD::new(0.0, 0.0);
        let c3 = PointD::new(3.0, 0.0);
        let b1 = c1 - c0;
        let b2 = c2 - c0;
        let b3 = c0 - c1 - c2 + c3;

        let uv = invert_bilinear(PointD::new(1.0, 1.0) - c0, b1, b2, b3).unwrap();
        assert!((uv.x - 0.4).abs() < 1e-12);
        assert!((uv.y - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_general_quad_zero_discriminant_rejects() {
        // same trapezoid; at q.y = 4 the discriminant is exactly zero
        let c0 = PointD::new(0.0, 2.0);
        let c1 = PointD::new(2.0, 2.0);
        let c2 = PointD::new(0.0, 0.0);
        let c3 = PointD::new(3.0, 0.0);
        let b1 = c1 - c0;
        let b2 = c2 - c0;
        let b3 = c0 - c1 - c2 + c3;

        assert_eq!(invert_bilinear(PointD::new(1.0, 6.0) - c0, b1, b2, b3), None);
    }

    #[test]
    fn test_rejected_sample_still_reads_source() {
        let (c0, b1, b2, b3) = unit_square_basis();
        let src = quadwarp_test::color_grid(2, 2).unwrap();

        // u = 1 is rejected but the clamped sample is still taken
        let px = warped_sample(q_for(c0, 1.0, 0.0), b1, b2, b3, &src);
        assert!(!px.accepted);
        assert_ne!(px.color, quadwarp_core::color::BLANK);
    }
}
