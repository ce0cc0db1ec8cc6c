//! Coordinate spaces: the plane and the lon/lat sphere.
//!
//! Purpose
//! - Factor out the two capabilities that differ between coordinate spaces:
//!   reduction of primary-ordinate differences into the principal range
//!   (longitude wraparound), and resolution of which side of an edge the
//!   point lies on when it shares a primary-ordinate level with one of the
//!   edge's endpoints.
//!
//! Why a trait
//! - The per-edge driver in `winding` is identical for both spaces; only the
//!   ordinate comparisons and the level tie-break differ. An implementation
//!   is selected once per geometry type, so the driver stays monomorphic and
//!   free of per-call branching on the coordinate system.
//!
//! Code cross-refs: `winding::Winding`, `side::SideOfLine`

use nalgebra::Vector2;

use crate::side::SideOfLine;

/// Ordinate comparison and level tie-break capabilities of one coordinate
/// space. Points are `(primary, secondary)`: (x, y) on the plane, (lon, lat)
/// on the sphere.
pub trait CoordSpace {
    /// Reduce a primary-ordinate difference into the principal range.
    /// Identity on the plane; `(-half_period, half_period]` on the sphere.
    fn normalize(&self, delta: f64) -> f64;

    /// Strict `l > r` on primary ordinates, wraparound-aware.
    #[inline]
    fn greater(&self, l: f64, r: f64) -> bool {
        self.normalize(l - r) > 0.0
    }

    /// Displacement of the synthetic probe segment used by `side_at_level`:
    /// one degree in the active angular unit, one unit on the plane. The
    /// exact value is part of the contract; it decides classifications in
    /// near-degenerate configurations.
    fn probe_offset(&self) -> f64;

    /// Crossing contribution of an edge with endpoint primary ordinates
    /// `s1`, `s2` relative to the point level `p`. `eq1`/`eq2` are exact
    /// equality flags computed by the driver; never both true here.
    ///
    /// Magnitude 2 is a clean strict crossing (+ increasing, - decreasing);
    /// magnitude 1 is an endpoint-level alignment still to be resolved by
    /// `side_at_level`; 0 means the edge does not straddle the level.
    fn crossing_count(&self, p: f64, s1: f64, s2: f64, eq1: bool, eq2: bool) -> i32;

    /// Side of the edge the point effectively lies on, given that the point
    /// shares its primary-ordinate level with the endpoint `at` and the edge
    /// departs in direction `count` (+1/-1 from `crossing_count`). Returns a
    /// sign consistent with `SideOfLine`: negative right, positive left,
    /// zero on the edge.
    fn side_at_level<S: SideOfLine>(
        &self,
        point: Vector2<f64>,
        at: Vector2<f64>,
        count: i32,
        side: &S,
    ) -> i32;
}

/// The cartesian plane: unbounded ordinates, direct comparison.
#[derive(Clone, Copy, Debug, Default)]
pub struct Cartesian;

impl CoordSpace for Cartesian {
    #[inline]
    fn normalize(&self, delta: f64) -> f64 {
        delta
    }

    #[inline]
    fn probe_offset(&self) -> f64 {
        1.0
    }

    #[inline]
    fn crossing_count(&self, p: f64, s1: f64, s2: f64, eq1: bool, eq2: bool) -> i32 {
        if eq1 {
            if s2 > p {
                1
            } else {
                -1
            }
        } else if eq2 {
            if s1 > p {
                -1
            } else {
                1
            }
        } else if s1 < p && p < s2 {
            2
        } else if s2 < p && p < s1 {
            -2
        } else {
            0
        }
    }

    /// Fast path: on the plane the secondary ordinates order the point and
    /// the endpoint directly, no probe segment required.
    #[inline]
    fn side_at_level<S: SideOfLine>(
        &self,
        point: Vector2<f64>,
        at: Vector2<f64>,
        count: i32,
        _side: &S,
    ) -> i32 {
        if point.y == at.y {
            0
        } else if point.y < at.y {
            -count
        } else {
            count
        }
    }
}

/// Lon/lat surface with wraparound at `±half_period` (180 for degrees, π for
/// radians).
#[derive(Clone, Copy, Debug)]
pub struct Spherical {
    half_period: f64,
}

impl Spherical {
    #[inline]
    pub fn degrees() -> Self {
        Self { half_period: 180.0 }
    }

    #[inline]
    pub fn radians() -> Self {
        Self {
            half_period: std::f64::consts::PI,
        }
    }

    #[inline]
    pub fn half_period(&self) -> f64 {
        self.half_period
    }
}

impl CoordSpace for Spherical {
    fn normalize(&self, delta: f64) -> f64 {
        let period = 2.0 * self.half_period;
        let mut d = delta % period;
        if d > self.half_period {
            d -= period;
        } else if d <= -self.half_period {
            d += period;
        }
        d
    }

    #[inline]
    fn probe_offset(&self) -> f64 {
        self.half_period / 180.0
    }

    fn crossing_count(&self, p: f64, s1: f64, s2: f64, eq1: bool, eq2: bool) -> i32 {
        if eq1 {
            if self.greater(s2, p) {
                1
            } else {
                -1
            }
        } else if eq2 {
            if self.greater(s1, p) {
                -1
            } else {
                1
            }
        } else if self.greater(p, s1) && self.greater(s2, p) {
            2
        } else if self.greater(p, s2) && self.greater(s1, p) {
            -2
        } else {
            0
        }
    }

    /// A direct latitude comparison is ill-conditioned near the date line
    /// and the poles. Instead anchor a short horizontal probe segment at the
    /// endpoint, displaced east or west by one `probe_offset` (sign of
    /// `count`), and ask the injected side predicate where the point lies
    /// relative to it.
    fn side_at_level<S: SideOfLine>(
        &self,
        point: Vector2<f64>,
        at: Vector2<f64>,
        count: i32,
        side: &S,
    ) -> i32 {
        if point.y == at.y {
            return 0;
        }
        let offset = if count > 0 {
            self.probe_offset()
        } else {
            -self.probe_offset()
        };
        let probe_end = Vector2::new(self.normalize(at.x + offset), at.y);
        side.side(at, probe_end, point).sign()
    }
}
