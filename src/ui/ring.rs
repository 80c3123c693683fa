//! Geometry for the category ring chart. Produces point clouds that the
//! overview screen hands to a ratatui `Canvas`.

use crate::palette::ColorToken;

/// Gap between neighbouring slices, in degrees.
pub(crate) const PADDING_DEG: f64 = 5.0;
/// Inner/outer radius in canvas units (outer radius is 1.0).
pub(crate) const INNER_RADIUS: f64 = 0.5;
pub(crate) const OUTER_RADIUS: f64 = 1.0;

const ANGLE_STEP_DEG: f64 = 1.0;
const RADIUS_STEP: f64 = 0.03;

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Arc {
    /// Degrees clockwise from twelve o'clock.
    pub(crate) start: f64,
    pub(crate) sweep: f64,
}

pub(crate) struct Segment {
    pub(crate) token: ColorToken,
    pub(crate) points: Vec<(f64, f64)>,
}

/// Split the circle between `values`, leaving `padding` degrees after each
/// slice when there is more than one. Non-positive values get an empty arc.
/// A zero total yields no arcs at all.
pub(crate) fn arcs(values: &[f64], padding: f64) -> Vec<Arc> {
    let total: f64 = values.iter().filter(|v| **v > 0.0).sum();
    if total <= 0.0 {
        return Vec::new();
    }
    let visible = values.iter().filter(|v| **v > 0.0).count();
    let gap = if visible > 1 { padding } else { 0.0 };
    let available = (360.0 - gap * visible as f64).max(0.0);

    let mut start = 0.0;
    values
        .iter()
        .map(|v| {
            let sweep = if *v > 0.0 { available * v / total } else { 0.0 };
            let arc = Arc { start, sweep };
            if sweep > 0.0 {
                start += sweep + gap;
            }
            arc
        })
        .collect()
}

/// Fill an annular sector with points.
pub(crate) fn arc_points(arc: Arc, inner: f64, outer: f64) -> Vec<(f64, f64)> {
    let mut points = Vec::new();
    if arc.sweep <= 0.0 {
        return points;
    }
    let steps = (arc.sweep / ANGLE_STEP_DEG).ceil() as usize;
    let rings = ((outer - inner) / RADIUS_STEP).ceil().max(1.0) as usize;
    for i in 0..=steps {
        let deg = arc.start + (arc.sweep * i as f64 / steps as f64);
        let rad = deg.to_radians();
        let (sin, cos) = rad.sin_cos();
        for j in 0..=rings {
            let r = inner + (outer - inner) * j as f64 / rings as f64;
            // clockwise from the top
            points.push((r * sin, r * cos));
        }
    }
    points
}

pub(crate) fn segments(slices: &[(ColorToken, f64)]) -> Vec<Segment> {
    let values: Vec<f64> = slices.iter().map(|(_, v)| *v).collect();
    arcs(&values, PADDING_DEG)
        .into_iter()
        .zip(slices)
        .map(|(arc, (token, _))| Segment {
            token: *token,
            points: arc_points(arc, INNER_RADIUS, OUTER_RADIUS),
        })
        .collect()
}

/// Canvas bounds that keep the ring round on terminal cells, which are about
/// twice as tall as they are wide.
pub(crate) fn bounds(width: u16, height: u16) -> ([f64; 2], [f64; 2]) {
    if width == 0 || height == 0 {
        return ([-1.0, 1.0], [-1.0, 1.0]);
    }
    let aspect = width as f64 / (2.0 * height as f64);
    let x = aspect.max(1.0);
    let y = (1.0 / aspect).max(1.0);
    ([-x, x], [-y, y])
}
