//! Point-in-convex-polygon queries in O(log n) via x-monotone boundary chains.
//!
//! A [`ConvexPolygon`] is built once from a convex vertex ring (either
//! winding, closing duplicate optional): the boundary is split into two
//! x-monotone chains at the extreme-x vertices, the winding direction is
//! detected, and the bounding box is recorded. Each [`ConvexPolygon::contains`]
//! query binary-searches both chains for the edge bracketing the query
//! x-coordinate and tests a vertical ray against those two edges, so queries
//! cost O(log n) after O(n) preprocessing.
//!
//! The structure is immutable after construction and queries are pure, so a
//! built polygon can be shared read-only across threads without locking.
//!
//! All coordinate comparisons are tolerant of a configurable absolute
//! epsilon ([`GeomCfg`], default `1e-14`); points within the tolerance of
//! the boundary count as inside.

pub mod chain;
pub mod oracle;
pub mod polygon;
pub mod predicates;
pub mod sample;
pub mod types;

pub use oracle::{ContainmentOracle, HalfPlaneOracle};
pub use polygon::ConvexPolygon;
pub use types::{GeomCfg, Orientation, Point2, PolygonError};

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::oracle::{ContainmentOracle, HalfPlaneOracle};
    pub use crate::polygon::ConvexPolygon;
    pub use crate::sample::{
        convex_hull, draw_convex_polygon, draw_convex_ring_radial, draw_points_uniform,
        ReplayToken,
    };
    pub use crate::types::{GeomCfg, Point2, PolygonError};
}
