//! Reference containment predicate for tests and the comparison harness.
//!
//! The chain-search structure is validated against this O(n) half-plane
//! scan; the trait keeps the reference path pluggable so the harness can
//! time any implementation through one seam.

use crate::predicates::approx_eq;
use crate::types::{GeomCfg, Point2};

/// Boolean point-containment capability.
pub trait ContainmentOracle {
    fn contains(&self, p: Point2) -> bool;
}

/// Brute-force reference: a point is inside a convex ring iff its edge
/// cross products never disagree in sign. Winding-agnostic; a cross within
/// eps of zero (point on the edge line) is never decisive, so boundary
/// points count as inside.
#[derive(Clone, Debug)]
pub struct HalfPlaneOracle {
    ring: Vec<Point2>,
    eps: f64,
}

impl HalfPlaneOracle {
    pub fn new(ring: &[Point2]) -> Self {
        Self::with_cfg(ring, GeomCfg::default())
    }

    pub fn with_cfg(ring: &[Point2], cfg: GeomCfg) -> Self {
        Self {
            ring: ring.to_vec(),
            eps: cfg.eps,
        }
    }
}

impl ContainmentOracle for HalfPlaneOracle {
    fn contains(&self, p: Point2) -> bool {
        if self.ring.len() < 3 {
            return false;
        }
        let mut sign = 0.0;
        for i in 0..self.ring.len() {
            let a = self.ring[i];
            let b = self.ring[(i + 1) % self.ring.len()];
            let perp = (b.x - a.x) * (p.y - a.y) - (b.y - a.y) * (p.x - a.x);
            if approx_eq(perp, 0.0, self.eps) {
                continue;
            }
            if sign == 0.0 {
                sign = perp;
            } else if sign * perp < 0.0 {
                return false;
            }
        }
        true
    }
}

impl ContainmentOracle for crate::polygon::ConvexPolygon {
    fn contains(&self, p: Point2) -> bool {
        crate::polygon::ConvexPolygon::contains(self, p)
    }
}
