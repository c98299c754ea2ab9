//! Epsilon-tolerant comparisons and small geometric predicates.
//!
//! Every coordinate comparison in this crate goes through these helpers;
//! there is no raw `<`/`>`/`==` on coordinates anywhere else. The tolerance
//! is passed explicitly so callers can loosen or tighten it per structure
//! (see `GeomCfg`).

use crate::types::{Orientation, Point2};

/// `a == b` within `eps`: `|a - b| <= eps`.
#[inline]
pub fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() <= eps
}

/// `a < b` strictly: `b - a > eps`.
#[inline]
pub fn lt(a: f64, b: f64, eps: f64) -> bool {
    b - a > eps
}

/// `a > b` strictly: `a - b > eps`.
#[inline]
pub fn gt(a: f64, b: f64, eps: f64) -> bool {
    a - b > eps
}

/// `a <= b`: `a - b <= eps`.
#[inline]
pub fn le(a: f64, b: f64, eps: f64) -> bool {
    a - b <= eps
}

/// `a >= b`: `b - a <= eps`.
#[inline]
pub fn ge(a: f64, b: f64, eps: f64) -> bool {
    b - a <= eps
}

/// Turn direction of p → q → r from the sign of the cross product
/// `(q - p) × (r - q)`. A cross within `eps` of zero is collinear; a
/// negative cross is a clockwise turn.
#[inline]
pub fn orientation(p: Point2, q: Point2, r: Point2, eps: f64) -> Orientation {
    let cross = (q.x - p.x) * (r.y - q.y) - (q.y - p.y) * (r.x - q.x);
    if approx_eq(cross, 0.0, eps) {
        Orientation::Collinear
    } else if cross < 0.0 {
        Orientation::Clockwise
    } else {
        Orientation::CounterClockwise
    }
}

/// Given collinear p, q, r: does q lie inside the closed bounding box of
/// the segment [p, r]?
#[inline]
pub fn on_segment(p: Point2, q: Point2, r: Point2, eps: f64) -> bool {
    le(q.x, p.x.max(r.x), eps)
        && ge(q.x, p.x.min(r.x), eps)
        && le(q.y, p.y.max(r.y), eps)
        && ge(q.y, p.y.min(r.y), eps)
}

/// Do the closed segments [p1, q1] and [p2, q2] intersect?
///
/// General case: the endpoints of each segment lie on opposite sides of the
/// other. The four special cases catch collinear overlaps and endpoint
/// touches; touching at a single point counts as intersecting.
pub fn segments_intersect(p1: Point2, q1: Point2, p2: Point2, q2: Point2, eps: f64) -> bool {
    let o1 = orientation(p1, q1, p2, eps);
    let o2 = orientation(p1, q1, q2, eps);
    let o3 = orientation(p2, q2, p1, eps);
    let o4 = orientation(p2, q2, q1, eps);

    if o1 != o2 && o3 != o4 {
        return true;
    }

    (o1 == Orientation::Collinear && on_segment(p1, p2, q1, eps))
        || (o2 == Orientation::Collinear && on_segment(p1, q2, q1, eps))
        || (o3 == Orientation::Collinear && on_segment(p2, p1, q2, eps))
        || (o4 == Orientation::Collinear && on_segment(p2, q1, q2, eps))
}

/// Winding direction of a vertex ring, decided at its lowest-then-rightmost
/// vertex (minimum y, ties broken towards maximum x).
///
/// Clockwise iff the signed area of that vertex and its two ring neighbours
/// is non-positive within `eps`.
pub fn is_clockwise(vertices: &[Point2], lowest_right_idx: usize, eps: f64) -> bool {
    let n = vertices.len();
    let a = vertices[(lowest_right_idx + n - 1) % n];
    let b = vertices[lowest_right_idx];
    let c = vertices[(lowest_right_idx + 1) % n];
    let area = (a.x * b.y - b.x * a.y) + (b.x * c.y - c.x * b.y) + (c.x * a.y - a.x * c.y);
    le(area, 0.0, eps)
}
