//! Warped-quad rasterization

use quadwarp_core::{PointD, Quad, Surface, Texture, bounding_box};

use crate::error::{RenderError, RenderResult};
use crate::sample::warped_sample;

/// Draw `source` warped into `quad`.
///
/// Corner order is {upper-left, lower-left, lower-right, upper-right}.
/// Every pixel of the quad's integer bounding box is solved independently;
/// pixels whose texture coordinate falls outside the acceptance window are
/// left untouched. A degenerate (zero-area, collinear, or self-
/// intersecting) quad therefore renders nothing and still returns `Ok`.
///
/// The interpolation is bilinear, not projective: exact along the quad's
/// edges, not perspective-correct in the interior.
///
/// # Errors
///
/// Returns [`RenderError::InvalidParameters`] when any corner coordinate
/// is not finite.
pub fn draw_warped<S, T>(surface: &mut S, source: &T, quad: &Quad) -> RenderResult<()>
where
    S: Surface,
    T: Texture,
{
    if quad.iter().any(|p| !p.x.is_finite() || !p.y.is_finite()) {
        return Err(RenderError::InvalidParameters(
            "quad corners must be finite".into(),
        ));
    }

    // the solver wants corner order {ll, lr, ul, ur}; reindex once here
    let c: [PointD; 4] = [
        quad[1].to_f64(),
        quad[2].to_f64(),
        quad[0].to_f64(),
        quad[3].to_f64(),
    ];

    // basis vectors are fixed for the whole quad; only q varies per pixel
    let b1 = c[1] - c[0];
    let b2 = c[2] - c[0];
    let b3 = c[0] - c[1] - c[2] + c[3];

    let bounds = bounding_box(&c);
    for y in bounds.min.y..=bounds.max.y {
        for x in bounds.min.x..=bounds.max.x {
            let q = PointD::new(x as f64, y as f64) - c[0];
            let px = warped_sample(q, b1, b2, b3, source);
            if px.accepted {
                surface.put_pixel(x, y, px.color);
            }
        }
    }

    Ok(())
}
