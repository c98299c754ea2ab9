//! Point-in-convex-polygon queries via x-monotone boundary chains.
//!
//! Purpose
//! - Preprocess a convex vertex ring once: split the boundary into two
//!   x-monotone chains at the extreme-x vertices, record the bounding box
//!   and the winding direction. Each `contains` query then binary-searches
//!   both chains and runs two segment-intersection tests against a vertical
//!   ray, so queries cost O(log n) after O(n) construction.
//!
//! Why this design
//! - A convex boundary is exactly two x-monotone chains, so one bracketing
//!   edge per chain decides how an upward ray from the query point crosses
//!   the boundary; no per-edge scan is needed at query time.
//! - The winding flag is computed once and threaded through query-time
//!   branch selection; the query algorithm itself is not duplicated per
//!   orientation.

use crate::chain::find_bracket;
use crate::predicates::{
    approx_eq, ge, gt, is_clockwise, le, lt, on_segment, orientation, segments_intersect,
};
use crate::types::{GeomCfg, Orientation, Point2, PolygonError};

/// Immutable containment structure over a convex vertex ring.
///
/// Built once from a boundary (either winding, closing duplicate optional);
/// the chains are owned copies, so the caller's vertex storage can be
/// dropped or mutated freely afterwards. Queries are pure and the structure
/// may be shared read-only across threads.
///
/// Chain labels are topological: `upper_chain` is the walk from the lower
/// of the two extreme-x array indices to the higher (or its wrap-around
/// complement), and is always non-decreasing in x, `lower_chain` always
/// non-increasing. Which chain is the geometric top depends on the winding
/// and is resolved per query via the `clockwise` flag.
#[derive(Clone, Debug, PartialEq)]
pub struct ConvexPolygon {
    upper_chain: Vec<Point2>,
    lower_chain: Vec<Point2>,
    min_x: f64,
    max_x: f64,
    min_y: f64,
    max_y: f64,
    clockwise: bool,
    cfg: GeomCfg,
}

impl ConvexPolygon {
    /// Build with the default tolerance.
    pub fn new(boundary: &[Point2]) -> Result<Self, PolygonError> {
        Self::with_cfg(boundary, GeomCfg::default())
    }

    /// Build with an injected tolerance.
    ///
    /// The ring must be simple and convex; vertices may be listed clockwise
    /// or counter-clockwise. Construction rejects rings with fewer than
    /// three distinct vertices, non-finite coordinates, mixed turn
    /// directions, and chains that are not x-monotone. Rings that defeat
    /// these checks give unspecified (but non-panicking) query results.
    pub fn with_cfg(boundary: &[Point2], cfg: GeomCfg) -> Result<Self, PolygonError> {
        let eps = cfg.eps;
        if boundary
            .iter()
            .any(|v| !v.x.is_finite() || !v.y.is_finite())
        {
            return Err(PolygonError::NonFinite);
        }

        // Owned copy with consecutive eps-duplicates and the closing
        // duplicate dropped.
        let mut vertices: Vec<Point2> = Vec::with_capacity(boundary.len());
        for &v in boundary {
            if let Some(&prev) = vertices.last() {
                if approx_eq(prev.x, v.x, eps) && approx_eq(prev.y, v.y, eps) {
                    continue;
                }
            }
            vertices.push(v);
        }
        if vertices.len() >= 2 {
            let first = vertices[0];
            let last = vertices[vertices.len() - 1];
            if approx_eq(first.x, last.x, eps) && approx_eq(first.y, last.y, eps) {
                vertices.pop();
            }
        }
        if vertices.len() < 3 {
            return Err(PolygonError::TooFewVertices(vertices.len()));
        }

        let n = vertices.len();

        // Convexity scan: consecutive triples must all turn the same way.
        // An entirely collinear ring has zero area and is rejected too.
        let mut saw_cw = false;
        let mut saw_ccw = false;
        for i in 0..n {
            let p = vertices[i];
            let q = vertices[(i + 1) % n];
            let r = vertices[(i + 2) % n];
            match orientation(p, q, r, eps) {
                Orientation::Clockwise => saw_cw = true,
                Orientation::CounterClockwise => saw_ccw = true,
                Orientation::Collinear => {}
            }
        }
        if saw_cw == saw_ccw {
            return Err(PolygonError::NotConvex);
        }

        // One pass: bounding box, extreme-x indices, lowest-right vertex.
        let mut min_x = f64::INFINITY;
        let mut max_x = f64::NEG_INFINITY;
        let mut min_y = f64::INFINITY;
        let mut max_y = f64::NEG_INFINITY;
        let mut min_x_idx = 0usize;
        let mut max_x_idx = 0usize;
        let mut lowest_right_idx = 0usize;
        for (i, v) in vertices.iter().enumerate() {
            if lt(v.x, min_x, eps) {
                min_x = v.x;
                min_x_idx = i;
            }
            if gt(v.x, max_x, eps) {
                max_x = v.x;
                max_x_idx = i;
            }
            if lt(v.y, min_y, eps) {
                min_y = v.y;
            }
            if gt(v.y, max_y, eps) {
                max_y = v.y;
            }
            let low = vertices[lowest_right_idx];
            if lt(v.y, low.y, eps) || (approx_eq(v.y, low.y, eps) && gt(v.x, low.x, eps)) {
                lowest_right_idx = i;
            }
        }

        // Split the ring at the extreme-x vertices. The forward walk from
        // the lower array index to the higher is one chain; the wrap-around
        // walk is the other. Both chains share the two extreme vertices.
        let lo = min_x_idx.min(max_x_idx);
        let hi = min_x_idx.max(max_x_idx);
        let forward: Vec<Point2> = vertices[lo..=hi].to_vec();
        let mut wrapped: Vec<Point2> = Vec::with_capacity(n - (hi - lo) + 1);
        wrapped.extend_from_slice(&vertices[hi..]);
        wrapped.extend_from_slice(&vertices[..=lo]);

        let (upper_chain, lower_chain) = if min_x_idx < max_x_idx {
            (forward, wrapped)
        } else {
            (wrapped, forward)
        };

        if !is_monotone(&upper_chain, true, eps) || !is_monotone(&lower_chain, false, eps) {
            return Err(PolygonError::NotConvex);
        }

        let clockwise = is_clockwise(&vertices, lowest_right_idx, eps);

        Ok(Self {
            upper_chain,
            lower_chain,
            min_x,
            max_x,
            min_y,
            max_y,
            clockwise,
            cfg,
        })
    }

    /// Is `p` inside or on the boundary of the polygon?
    ///
    /// Casts a vertical ray from `p` to just above the bounding box. Inside
    /// points cross the geometric top chain exactly once and never reach the
    /// bottom chain. A point exactly on the boundary counts as inside: on
    /// the top chain the ray touching it at `p` is itself the required
    /// crossing, while on the bottom chain the same touch would read as a
    /// disqualifying crossing, so that test alone carries an explicit
    /// on-segment carve-out. The asymmetry is intentional.
    pub fn contains(&self, p: Point2) -> bool {
        let eps = self.cfg.eps;
        if lt(p.x, self.min_x, eps)
            || gt(p.x, self.max_x, eps)
            || lt(p.y, self.min_y, eps)
            || gt(p.y, self.max_y, eps)
        {
            return false;
        }

        // A point on the vertical ray upwards from p, past the bounding box.
        let ray_end = Point2::new(p.x, self.max_y + 1.0);

        // upper_chain is non-decreasing and lower_chain non-increasing in x;
        // the winding decides which one is the geometric top.
        let (top, top_ascending, bottom, bottom_ascending) = if self.clockwise {
            (&self.upper_chain, true, &self.lower_chain, false)
        } else {
            (&self.lower_chain, false, &self.upper_chain, true)
        };

        // Both chains span [min_x, max_x], so after the box check the
        // bracket lookup can only miss inside the eps margin; a miss reads
        // as "no crossing".
        let crosses_top = match find_bracket(p.x, top, top_ascending, eps) {
            Some(i) => {
                let (a, b) = bracket_segment(top, i);
                segments_intersect(p, ray_end, a, b, eps)
            }
            None => false,
        };
        if !crosses_top {
            return false;
        }

        match find_bracket(p.x, bottom, bottom_ascending, eps) {
            Some(i) => {
                let (a, b) = bracket_segment(bottom, i);
                if segments_intersect(p, ray_end, a, b, eps) {
                    orientation(a, p, b, eps) == Orientation::Collinear
                        && on_segment(a, p, b, eps)
                } else {
                    true
                }
            }
            None => true,
        }
    }
}

/// Bracket edge at `i`, degraded to a zero-length segment at the last index.
#[inline]
fn bracket_segment(chain: &[Point2], i: usize) -> (Point2, Point2) {
    if i + 1 < chain.len() {
        (chain[i], chain[i + 1])
    } else {
        (chain[i], chain[i])
    }
}

fn is_monotone(chain: &[Point2], ascending: bool, eps: f64) -> bool {
    chain.windows(2).all(|w| {
        if ascending {
            le(w[0].x, w[1].x, eps)
        } else {
            ge(w[0].x, w[1].x, eps)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn chains_share_extreme_vertices_and_are_monotone() {
        // Clockwise hexagon.
        let ring = [
            vector![0.0, 1.0],
            vector![1.0, 2.0],
            vector![3.0, 2.0],
            vector![4.0, 1.0],
            vector![3.0, 0.0],
            vector![1.0, 0.0],
        ];
        let poly = ConvexPolygon::new(&ring).unwrap();
        let eps = poly.cfg.eps;
        assert!(is_monotone(&poly.upper_chain, true, eps));
        assert!(is_monotone(&poly.lower_chain, false, eps));
        // Endpoints of the two chains are the extreme-x vertices, shared.
        let u_first = poly.upper_chain[0];
        let u_last = *poly.upper_chain.last().unwrap();
        let l_first = poly.lower_chain[0];
        let l_last = *poly.lower_chain.last().unwrap();
        assert_eq!((u_first, u_last), (l_last, l_first));
        assert_eq!(u_first.x, 0.0);
        assert_eq!(u_last.x, 4.0);
        // Together the chains cover the whole ring.
        assert_eq!(poly.upper_chain.len() + poly.lower_chain.len(), ring.len() + 2);
    }

    #[test]
    fn bounding_box_is_tight() {
        let ring = [
            vector![-2.0, 0.5],
            vector![0.0, 3.0],
            vector![2.5, 0.0],
            vector![0.0, -1.0],
        ];
        let poly = ConvexPolygon::new(&ring).unwrap();
        assert_eq!(poly.min_x, -2.0);
        assert_eq!(poly.max_x, 2.5);
        assert_eq!(poly.min_y, -1.0);
        assert_eq!(poly.max_y, 3.0);
    }

    #[test]
    fn winding_flag_matches_input_order() {
        let cw = [
            vector![0.0, 0.0],
            vector![0.0, 1.0],
            vector![1.0, 1.0],
            vector![1.0, 0.0],
        ];
        assert!(ConvexPolygon::new(&cw).unwrap().clockwise);
        let ccw = [
            vector![0.0, 0.0],
            vector![1.0, 0.0],
            vector![1.0, 1.0],
            vector![0.0, 1.0],
        ];
        assert!(!ConvexPolygon::new(&ccw).unwrap().clockwise);
    }

    #[test]
    fn closing_duplicate_is_stripped() {
        let ring = [
            vector![0.0, 0.0],
            vector![0.0, 1.0],
            vector![1.0, 1.0],
            vector![1.0, 0.0],
            vector![0.0, 0.0],
        ];
        let poly = ConvexPolygon::new(&ring).unwrap();
        assert_eq!(poly.upper_chain.len() + poly.lower_chain.len(), 4 + 2);
        assert!(poly.contains(vector![0.5, 0.5]));
    }

    #[test]
    fn rejects_malformed_rings() {
        let two = [vector![0.0, 0.0], vector![1.0, 1.0]];
        assert_eq!(
            ConvexPolygon::new(&two),
            Err(PolygonError::TooFewVertices(2))
        );

        // Three entries but only two distinct vertices.
        let dup = [vector![0.0, 0.0], vector![0.0, 0.0], vector![1.0, 1.0]];
        assert_eq!(
            ConvexPolygon::new(&dup),
            Err(PolygonError::TooFewVertices(2))
        );

        let collinear = [vector![0.0, 0.0], vector![1.0, 1.0], vector![2.0, 2.0]];
        assert_eq!(
            ConvexPolygon::new(&collinear),
            Err(PolygonError::NotConvex)
        );

        // Dart: reflex vertex at (1, 1).
        let dart = [
            vector![0.0, 0.0],
            vector![4.0, 0.0],
            vector![1.0, 1.0],
            vector![0.0, 4.0],
        ];
        assert_eq!(ConvexPolygon::new(&dart), Err(PolygonError::NotConvex));

        let nan = [
            vector![0.0, 0.0],
            vector![1.0, f64::NAN],
            vector![1.0, 1.0],
        ];
        assert_eq!(ConvexPolygon::new(&nan), Err(PolygonError::NonFinite));
    }

    #[test]
    fn custom_tolerance_widens_the_boundary_band() {
        let ring = [
            vector![0.0, 0.0],
            vector![0.0, 1.0],
            vector![1.0, 1.0],
            vector![1.0, 0.0],
        ];
        let loose = ConvexPolygon::with_cfg(&ring, GeomCfg { eps: 1e-3 }).unwrap();
        // 1e-4 outside the right edge, inside the loose band.
        assert!(loose.contains(vector![1.0001, 0.5]));
        let tight = ConvexPolygon::new(&ring).unwrap();
        assert!(!tight.contains(vector![1.0001, 0.5]));
    }
}
