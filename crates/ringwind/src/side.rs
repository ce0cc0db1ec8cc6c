//! Side-of-line strategies.
//!
//! Purpose
//! - The winding driver only consumes the sign of a three-point orientation
//!   test; the test itself is an injected capability, so the same driver
//!   serves the plane, the sphere, and caller-supplied exact or filtered
//!   predicates.
//!
//! Provided strategies
//! - `CartesianSide`: planar cross-product sign.
//! - `GreatCircleSide`: spherical orientation via the triple product of the
//!   lifted 3D unit vectors (degrees or radians).

use nalgebra::{Vector2, Vector3};

use crate::types::Side;

/// Orientation of `point` relative to the directed segment `s1 -> s2`.
pub trait SideOfLine {
    fn side(&self, s1: Vector2<f64>, s2: Vector2<f64>, point: Vector2<f64>) -> Side;
}

/// Adapter turning a plain function or closure into a strategy.
#[derive(Clone, Copy, Debug)]
pub struct SideFn<F>(pub F);

impl<F> SideOfLine for SideFn<F>
where
    F: Fn(Vector2<f64>, Vector2<f64>, Vector2<f64>) -> Side,
{
    #[inline]
    fn side(&self, s1: Vector2<f64>, s2: Vector2<f64>, point: Vector2<f64>) -> Side {
        (self.0)(s1, s2, point)
    }
}

/// Planar orientation: sign of the cross product `(s2 - s1) × (point - s1)`.
#[derive(Clone, Copy, Debug, Default)]
pub struct CartesianSide;

impl SideOfLine for CartesianSide {
    #[inline]
    fn side(&self, s1: Vector2<f64>, s2: Vector2<f64>, point: Vector2<f64>) -> Side {
        let u = s2 - s1;
        let v = point - s1;
        Side::from_sign(u.x * v.y - u.y * v.x)
    }
}

/// Great-circle orientation on the unit sphere.
///
/// Points are (lon, lat) in the configured unit; each is lifted to a 3D unit
/// vector and the side is the sign of `(s1 × s2) · point`, positive when
/// `point` lies left of the directed great circle through `s1 -> s2`.
#[derive(Clone, Copy, Debug)]
pub struct GreatCircleSide {
    to_radians: f64,
}

impl GreatCircleSide {
    #[inline]
    pub fn degrees() -> Self {
        Self {
            to_radians: std::f64::consts::PI / 180.0,
        }
    }

    #[inline]
    pub fn radians() -> Self {
        Self { to_radians: 1.0 }
    }

    #[inline]
    fn lift(&self, p: Vector2<f64>) -> Vector3<f64> {
        let lon = p.x * self.to_radians;
        let lat = p.y * self.to_radians;
        Vector3::new(lat.cos() * lon.cos(), lat.cos() * lon.sin(), lat.sin())
    }
}

impl SideOfLine for GreatCircleSide {
    fn side(&self, s1: Vector2<f64>, s2: Vector2<f64>, point: Vector2<f64>) -> Side {
        let a = self.lift(s1);
        let b = self.lift(s2);
        let q = self.lift(point);
        Side::from_sign(a.cross(&b).dot(&q))
    }
}
