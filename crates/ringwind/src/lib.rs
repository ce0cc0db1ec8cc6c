//! Point-in-ring classification by winding-number accumulation.
//!
//! Purpose
//! - Decide whether a point lies inside, outside, or on the boundary of a
//!   closed ring of vertices, uniformly over the cartesian plane and lon/lat
//!   spheres (degrees or radians), including rings spanning the date line.
//!
//! Design
//! - One driver (`Winding`) threads a per-query `WindingState` through the
//!   ring's edges. Everything that differs between coordinate spaces sits
//!   behind two small strategy seams: `CoordSpace` (ordinate comparison and
//!   the level tie-break) and `SideOfLine` (orientation of a point relative
//!   to a directed segment). Strategies are selected once per geometry type,
//!   not per call.
//! - The predicate is total over finite coordinates: no error type, no
//!   panics, degenerate zero-length edges contribute nothing. Callers are
//!   responsible for feeding a closed, non-self-intersecting ring.
//!
//! Code cross-refs: `winding::Winding`, `space::{Cartesian, Spherical}`,
//! `side::{CartesianSide, GreatCircleSide}`

pub mod rand;
mod side;
mod space;
mod types;
mod winding;

pub use side::{CartesianSide, GreatCircleSide, SideFn, SideOfLine};
pub use space::{Cartesian, CoordSpace, Spherical};
pub use types::{Location, Side};
pub use winding::{ring_edges, Winding, WindingState};

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::rand::{draw_ring_radial, RadialCfg, ReplayToken, VertexCount};
    pub use crate::{
        ring_edges, Cartesian, CartesianSide, CoordSpace, GreatCircleSide, Location, Side, SideFn,
        SideOfLine, Spherical, Winding, WindingState,
    };
    pub use nalgebra::Vector2 as Vec2;
}
