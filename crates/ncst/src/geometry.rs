//! Planar segment predicates used by the graph model and the polygon DP.
//!
//! All predicates treat orientations with magnitude below [`EPS`] as collinear,
//! so touching endpoints, T-junctions and collinear overlaps never count as
//! proper crossings.

use nalgebra::{Matrix2, Point2, Vector2};

/// Orientation tolerance (absolute, in squared coordinate units).
pub const EPS: f64 = 1e-12;

/// Signed area of the parallelogram spanned by (a,b).
pub fn parallelogram_area(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    // determinant of [a b]
    let m = Matrix2::from_columns(&[a, b]);
    m.determinant()
}

/// Sign of the turn a→b→c: `1` counterclockwise, `-1` clockwise, `0` collinear.
pub fn orientation(a: &Point2<f64>, b: &Point2<f64>, c: &Point2<f64>) -> i8 {
    let area = parallelogram_area(b - a, c - a);
    if area > EPS {
        1
    } else if area < -EPS {
        -1
    } else {
        0
    }
}

/// True iff segments `p1p2` and `q1q2` intersect in a single point interior to both.
pub fn segments_cross(
    p1: &Point2<f64>,
    p2: &Point2<f64>,
    q1: &Point2<f64>,
    q2: &Point2<f64>,
) -> bool {
    let o1 = orientation(p1, p2, q1);
    let o2 = orientation(p1, p2, q2);
    let o3 = orientation(q1, q2, p1);
    let o4 = orientation(q1, q2, p2);
    o1 * o2 < 0 && o3 * o4 < 0
}

/// True iff `p` lies on the closed segment `ab`.
pub fn on_segment(p: &Point2<f64>, a: &Point2<f64>, b: &Point2<f64>) -> bool {
    if orientation(a, b, p) != 0 {
        return false;
    }
    let lo_x = a.x.min(b.x) - EPS;
    let hi_x = a.x.max(b.x) + EPS;
    let lo_y = a.y.min(b.y) - EPS;
    let hi_y = a.y.max(b.y) + EPS;
    p.x >= lo_x && p.x <= hi_x && p.y >= lo_y && p.y <= hi_y
}

/// Point-in-polygon test for the closed region bounded by `polygon` (vertices in boundary order).
///
/// Boundary points count as inside; interior points are decided by ray casting with
/// the half-open crossing rule.
pub fn in_closed_polygon(p: &Point2<f64>, polygon: &[Point2<f64>]) -> bool {
    let n = polygon.len();
    if n == 0 {
        return false;
    }
    let mut inside = false;
    for i in 0..n {
        let a = &polygon[i];
        let b = &polygon[(i + 1) % n];
        if on_segment(p, a, b) {
            return true;
        }
        if (a.y > p.y) != (b.y > p.y) {
            let x_at = a.x + (p.y - a.y) / (b.y - a.y) * (b.x - a.x);
            if p.x < x_at {
                inside = !inside;
            }
        }
    }
    inside
}

/// True iff the closed segment `ab` stays within the closed region bounded by `polygon`.
///
/// The segment must not properly cross any boundary edge, and each piece between
/// consecutive polygon vertices lying on it must have its midpoint in the region.
pub fn segment_in_polygon(a: &Point2<f64>, b: &Point2<f64>, polygon: &[Point2<f64>]) -> bool {
    let n = polygon.len();
    for i in 0..n {
        if segments_cross(a, b, &polygon[i], &polygon[(i + 1) % n]) {
            return false;
        }
    }
    let dir = b - a;
    let len2 = dir.norm_squared();
    if len2 <= EPS {
        return in_closed_polygon(a, polygon);
    }
    let mut cuts: Vec<f64> = vec![0.0, 1.0];
    for p in polygon {
        if on_segment(p, a, b) {
            let t = (p - a).dot(&dir) / len2;
            if t > 0.0 && t < 1.0 {
                cuts.push(t);
            }
        }
    }
    cuts.sort_by(|x, y| x.partial_cmp(y).unwrap_or(std::cmp::Ordering::Equal));
    cuts.windows(2).all(|w| {
        if w[1] - w[0] <= EPS {
            return true;
        }
        let mid = a + dir * (0.5 * (w[0] + w[1]));
        in_closed_polygon(&mid, polygon)
    })
}
