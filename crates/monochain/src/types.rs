//! Basic types and tolerances for the chain-search containment structure.
//!
//! - `GeomCfg`: centralizes the coordinate tolerance used by every predicate.
//! - `Orientation`: turn direction of an ordered point triple.
//! - `PolygonError`: construction-time rejection of malformed rings.

use nalgebra::Vector2;

/// 2D point (column vector, f64 coordinates).
pub type Point2 = Vector2<f64>;

/// Geometry configuration (tolerance).
///
/// The tolerance is absolute: it is applied to the *difference* of the two
/// operands, never scaled by their magnitude. Callers working at extreme
/// coordinate scales should inject a tolerance to match.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeomCfg {
    pub eps: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self { eps: 1e-14 }
    }
}

/// Turn direction of the triple p → q → r.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Collinear,
    Clockwise,
    CounterClockwise,
}

/// Rejected polygon input.
///
/// Construction validates what it can cheaply: vertex count, finiteness,
/// uniform turn direction, and x-monotonicity of the split chains. Rings
/// that pass these checks but are not simple convex polygons (e.g. certain
/// self-intersecting rings) yield unspecified query results.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PolygonError {
    /// Fewer than three distinct vertices after dropping duplicates and the
    /// closing vertex.
    TooFewVertices(usize),
    /// A coordinate was NaN or infinite.
    NonFinite,
    /// The ring turns both ways, is entirely collinear, or splits into
    /// chains that are not x-monotone.
    NotConvex,
}

impl std::fmt::Display for PolygonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PolygonError::TooFewVertices(n) => {
                write!(f, "polygon needs at least 3 distinct vertices, got {n}")
            }
            PolygonError::NonFinite => write!(f, "polygon has a non-finite coordinate"),
            PolygonError::NotConvex => write!(f, "polygon ring is not convex"),
        }
    }
}

impl std::error::Error for PolygonError {}
