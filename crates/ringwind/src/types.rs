//! Shared value types: orientation (`Side`) and classification (`Location`).

/// Three-way orientation of a query point relative to a directed segment
/// `s1 -> s2`: `Left` (positive), `Right` (negative), or `Collinear`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Right,
    Collinear,
    Left,
}

impl Side {
    /// Classify a signed orientation value (cross product, determinant, ...).
    #[inline]
    pub fn from_sign(s: f64) -> Side {
        if s > 0.0 {
            Side::Left
        } else if s < 0.0 {
            Side::Right
        } else {
            Side::Collinear
        }
    }

    /// Sign convention shared with the winding driver: left = +1, right = -1,
    /// collinear = 0.
    #[inline]
    pub fn sign(self) -> i32 {
        match self {
            Side::Left => 1,
            Side::Collinear => 0,
            Side::Right => -1,
        }
    }

    /// Orientation as seen from the reversed segment `s2 -> s1`.
    #[inline]
    pub fn reversed(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Collinear => Side::Collinear,
            Side::Right => Side::Left,
        }
    }
}

/// Classification of a point against a closed ring.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Location {
    Inside,
    Boundary,
    Outside,
}

impl Location {
    #[inline]
    pub fn is_boundary(self) -> bool {
        matches!(self, Location::Boundary)
    }
}
