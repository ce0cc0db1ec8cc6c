//! Winding-rule point-in-ring driver.
//!
//! Purpose
//! - Decide inside/outside/boundary for a point against a closed ring by
//!   accumulating signed crossings of the point's primary-ordinate level,
//!   one directed edge at a time.
//!
//! Algorithm
//! - Each edge contributes a count in {-2,-1,0,1,2}: ±2 for a strict level
//!   crossing, ±1 when the point aligns with one endpoint's level, 0 when
//!   the edge does not straddle the level. For a nonzero count the side of
//!   the edge decides whether the crossing moves the total: only crossings
//!   on the positive-product side (up-and-left or down-and-right) count.
//!   A collinear side means the point lies on the edge; accumulation stops
//!   there with a boundary verdict.
//! - Edges running along the point's level ("vertical" in the primary axis)
//!   contribute nothing to the count and only ever flag boundary contact,
//!   inclusively over their secondary span.
//!
//! Contract
//! - Total over finite coordinates; zero-length edges are harmless. Edges
//!   must be fed in ring order with the ring closed by the caller (or use
//!   `classify`, which closes the loop itself). The final count is invariant
//!   under rotation and reversal of the ring.
//!
//! Known limitation (inherited, documented): the vertical-edge touch check
//! compares secondary ordinates directly and does not model edges passing
//! through a pole; such edges can be misclassified on a spherical surface.
//!
//! Code cross-refs: `space::CoordSpace`, `side::SideOfLine`

use nalgebra::Vector2;

use crate::side::{CartesianSide, GreatCircleSide, SideOfLine};
use crate::space::{Cartesian, CoordSpace, Spherical};
use crate::types::Location;

/// Per-query accumulation state: running signed crossing count plus a
/// boundary-contact flag.
///
/// Fresh for every point/ring evaluation and never shared across queries.
/// `touches` is monotonic; once set, the count is forced to zero and further
/// edges cannot change the outcome.
#[derive(Clone, Copy, Debug, Default)]
pub struct WindingState {
    count: i32,
    touches: bool,
}

impl WindingState {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// True once boundary contact has been detected.
    #[inline]
    pub fn touches(&self) -> bool {
        self.touches
    }

    /// Final classification. Read once, after the last edge (or after the
    /// driver stopped early on boundary contact).
    #[inline]
    pub fn location(&self) -> Location {
        if self.touches {
            Location::Boundary
        } else if self.count == 0 {
            Location::Outside
        } else {
            Location::Inside
        }
    }
}

/// Point-in-ring predicate over a coordinate space and an injected
/// side-of-line strategy. Construct once per geometry type and reuse; each
/// query only needs its own `WindingState`.
#[derive(Clone, Copy, Debug)]
pub struct Winding<C, S> {
    space: C,
    side: S,
}

impl Winding<Cartesian, CartesianSide> {
    /// Planar predicate with the cross-product side test.
    #[inline]
    pub fn cartesian() -> Self {
        Self::new(Cartesian, CartesianSide)
    }
}

impl Winding<Spherical, GreatCircleSide> {
    /// Lon/lat predicate in degrees with the great-circle side test.
    #[inline]
    pub fn spherical_degrees() -> Self {
        Self::new(Spherical::degrees(), GreatCircleSide::degrees())
    }

    /// Lon/lat predicate in radians with the great-circle side test.
    #[inline]
    pub fn spherical_radians() -> Self {
        Self::new(Spherical::radians(), GreatCircleSide::radians())
    }
}

impl<C: CoordSpace, S: SideOfLine> Winding<C, S> {
    #[inline]
    pub fn new(space: C, side: S) -> Self {
        Self { space, side }
    }

    /// Feed one directed edge `s1 -> s2` of the ring. Returns `false` once
    /// the point is known to lie on the boundary; callers may stop iterating
    /// then, the verdict is already final.
    pub fn step(
        &self,
        point: Vector2<f64>,
        s1: Vector2<f64>,
        s2: Vector2<f64>,
        state: &mut WindingState,
    ) -> bool {
        let p = point.x;
        // Exact equality by contract; tolerant matching is the job of the
        // side resolution below, not of these flags.
        let eq1 = s1.x == p;
        let eq2 = s2.x == p;

        let count = if eq1 && eq2 {
            // Edge runs along the point's level; the only remaining question
            // is whether the point sits on its inclusive secondary span.
            if span_touches(point.y, s1.y, s2.y) {
                state.touches = true;
            }
            0
        } else {
            self.space.crossing_count(p, s1.x, s2.x, eq1, eq2)
        };

        if count != 0 {
            let side = if count == 1 || count == -1 {
                let at = if eq1 { s1 } else { s2 };
                self.space.side_at_level(point, at, count, &self.side)
            } else {
                self.side.side(s1, s2, point).sign()
            };

            if side == 0 {
                // Point lies on the edge itself.
                state.touches = true;
                state.count = 0;
                return false;
            }

            // Count is + for increasing, - for decreasing; side is + for
            // left, - for right. A positive product (up-left or down-right)
            // is the crossing flavor that moves the winding total.
            if side * count > 0 {
                state.count += count;
            }
        }
        !state.touches
    }

    /// Classify against an explicit edge sequence. The edges must form a
    /// closed ring and be fed in ring order; the result for an unclosed or
    /// self-intersecting ring is unspecified (but never a panic).
    pub fn classify_edges<I>(&self, point: Vector2<f64>, edges: I) -> Location
    where
        I: IntoIterator<Item = (Vector2<f64>, Vector2<f64>)>,
    {
        let mut state = WindingState::new();
        for (s1, s2) in edges {
            if !self.step(point, s1, s2, &mut state) {
                break;
            }
        }
        state.location()
    }

    /// Classify against a ring given by its vertices; the closing edge back
    /// to the first vertex is implied. Rings with fewer than three vertices
    /// have no interior and classify as `Outside` unless touched.
    #[inline]
    pub fn classify(&self, point: Vector2<f64>, ring: &[Vector2<f64>]) -> Location {
        self.classify_edges(point, ring_edges(ring))
    }
}

/// Directed edges of a closed ring: consecutive vertex pairs plus the edge
/// closing the loop back to the first vertex.
pub fn ring_edges(
    ring: &[Vector2<f64>],
) -> impl Iterator<Item = (Vector2<f64>, Vector2<f64>)> + '_ {
    let n = ring.len();
    (0..n).map(move |i| (ring[i], ring[(i + 1) % n]))
}

/// Inclusive span test for the level-aligned edge case.
#[inline]
fn span_touches(p: f64, a: f64, b: f64) -> bool {
    (a <= p && b >= p) || (b <= p && a >= p)
}
