//! Random query points and convex polygons (seeded, replayable).
//!
//! Model
//! - All draws go through a `ReplayToken` `(seed, index)` mixed into a
//!   single `StdRng`, so any sample can be regenerated from its token.
//! - Polygons come either from the convex hull of uniform points (small,
//!   realistic vertex counts) or from angle-jittered points on a circle
//!   (exact vertex counts, for benchmarks).

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::types::Point2;

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw `n` points uniformly from `[0, scale] × [0, scale]`.
pub fn draw_points_uniform(n: usize, scale: f64, tok: ReplayToken) -> Vec<Point2> {
    let mut rng = tok.to_std_rng();
    (0..n)
        .map(|_| Vector2::new(rng.gen::<f64>() * scale, rng.gen::<f64>() * scale))
        .collect()
}

/// Draw a random convex ring: the hull of `n` uniform points in
/// `[0, scale]²`, in counter-clockwise order.
///
/// `None` when the hull degenerates below a triangle. Note the hull of `n`
/// uniform points has far fewer than `n` vertices; use
/// `draw_convex_ring_radial` when the vertex count itself matters.
pub fn draw_convex_polygon(n: usize, scale: f64, tok: ReplayToken) -> Option<Vec<Point2>> {
    let pts = draw_points_uniform(n.max(3), scale, tok);
    convex_hull(&pts)
}

/// Draw a convex ring with exactly `n` vertices: angle-jittered points on a
/// circle inscribed in `[0, scale]²`, in counter-clockwise order.
pub fn draw_convex_ring_radial(n: usize, scale: f64, tok: ReplayToken) -> Vec<Point2> {
    let mut rng = tok.to_std_rng();
    let n = n.max(3);
    let c = scale * 0.5;
    let delta = std::f64::consts::TAU / n as f64;
    (0..n)
        .map(|k| {
            // Jitter within half the base spacing keeps the angles sorted,
            // so the ring stays convex and CCW.
            let theta = (k as f64 + rng.gen::<f64>() * 0.5) * delta;
            Vector2::new(c + c * theta.cos(), c + c * theta.sin())
        })
        .collect()
}

/// Andrew's monotone chain convex hull (strict; hull in CCW order).
///
/// `None` when fewer than three distinct points remain after deduping, or
/// when all points are collinear.
pub fn convex_hull(points: &[Point2]) -> Option<Vec<Point2>> {
    if points.len() < 3 {
        return None;
    }
    let mut pts: Vec<Point2> = points.to_vec();
    pts.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
    pts.dedup_by(|a, b| (*a - *b).norm() < 1e-12);
    if pts.len() < 3 {
        return None;
    }

    let mut lower: Vec<Point2> = Vec::with_capacity(pts.len());
    for &p in &pts {
        while lower.len() >= 2 && cross(lower[lower.len() - 2], lower[lower.len() - 1], p) <= 0.0 {
            lower.pop();
        }
        lower.push(p);
    }
    let mut upper: Vec<Point2> = Vec::with_capacity(pts.len());
    for &p in pts.iter().rev() {
        while upper.len() >= 2 && cross(upper[upper.len() - 2], upper[upper.len() - 1], p) <= 0.0 {
            upper.pop();
        }
        upper.push(p);
    }
    lower.pop();
    upper.pop();
    let mut hull = lower;
    hull.extend(upper);
    if hull.len() < 3 {
        return None;
    }
    Some(hull)
}

#[inline]
fn cross(a: Point2, b: Point2, c: Point2) -> f64 {
    let ab = b - a;
    let ac = c - a;
    ab.x * ac.y - ab.y * ac.x
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reproducible_draws() {
        let tok = ReplayToken { seed: 42, index: 7 };
        let a = draw_points_uniform(100, 1000.0, tok);
        let b = draw_points_uniform(100, 1000.0, tok);
        assert_eq!(a.len(), b.len());
        for (p, q) in a.iter().zip(&b) {
            assert_eq!(p, q);
        }
        // Different index, different draw.
        let c = draw_points_uniform(100, 1000.0, ReplayToken { seed: 42, index: 8 });
        assert!(a.iter().zip(&c).any(|(p, q)| p != q));
    }

    #[test]
    fn points_stay_in_range() {
        let tok = ReplayToken { seed: 1, index: 0 };
        for p in draw_points_uniform(500, 250.0, tok) {
            assert!((0.0..=250.0).contains(&p.x));
            assert!((0.0..=250.0).contains(&p.y));
        }
    }

    #[test]
    fn hull_is_convex_and_ccw() {
        let tok = ReplayToken { seed: 3, index: 11 };
        let ring = draw_convex_polygon(200, 1000.0, tok).expect("hull");
        assert!(ring.len() >= 3);
        for i in 0..ring.len() {
            let a = ring[i];
            let b = ring[(i + 1) % ring.len()];
            let c = ring[(i + 2) % ring.len()];
            assert!(cross(a, b, c) > 0.0, "hull turn at {i} not CCW");
        }
    }

    #[test]
    fn radial_ring_has_exact_count() {
        let tok = ReplayToken { seed: 5, index: 2 };
        let ring = draw_convex_ring_radial(64, 100.0, tok);
        assert_eq!(ring.len(), 64);
        for i in 0..ring.len() {
            let a = ring[i];
            let b = ring[(i + 1) % ring.len()];
            let c = ring[(i + 2) % ring.len()];
            assert!(cross(a, b, c) > 0.0);
        }
    }

    #[test]
    fn degenerate_hulls_are_none() {
        let collinear: Vec<Point2> = (0..5).map(|i| Vector2::new(i as f64, i as f64)).collect();
        assert!(convex_hull(&collinear).is_none());
        assert!(convex_hull(&collinear[..2]).is_none());
    }
}
