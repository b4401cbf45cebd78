//! Unit quaternions for 3D rotations.
//!
//! Scalar-first storage `[w, x, y, z]`. A unit quaternion `q` and the rotation matrix
//! returned by [`to_rotation_matrix`](Quaternion::to_rotation_matrix) describe the same
//! active rotation, and the Hamilton product composes rotations the same way matrix
//! multiplication does: `(p * q).to_rotation_matrix() == P * Q`.
//!
//! ```
//! use rotation_core::{Quaternion, RotationMatrix3};
//! use std::f64::consts::FRAC_PI_2;
//!
//! let q = Quaternion::from_axis_angle([0.0, 0.0, 1.0], FRAC_PI_2);
//! let m = RotationMatrix3::about_axis(2, FRAC_PI_2);
//! assert!(q.to_rotation_matrix().max_difference(&m) < 1e-15);
//! ```

use core::ops::{Mul, Neg};

use crate::matrix::RotationMatrix3;

/// Quaternion `w + xi + yj + zk`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quaternion {
    pub w: f64,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Quaternion {
    #[inline]
    pub fn new(w: f64, x: f64, y: f64, z: f64) -> Self {
        Self { w, x, y, z }
    }

    /// Identity quaternion (no rotation).
    #[inline]
    pub fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 0.0)
    }

    /// Builds from `[w, x, y, z]`.
    #[inline]
    pub fn from_quadruple(q: [f64; 4]) -> Self {
        Self::new(q[0], q[1], q[2], q[3])
    }

    /// Components as `[w, x, y, z]`.
    #[inline]
    pub fn quadruple(&self) -> [f64; 4] {
        [self.w, self.x, self.y, self.z]
    }

    /// Rotation of `angle` radians about `axis` (must be unit length).
    #[inline]
    pub fn from_axis_angle(axis: [f64; 3], angle: f64) -> Self {
        let (s, c) = (0.5 * angle).sin_cos();
        Self::new(c, axis[0] * s, axis[1] * s, axis[2] * s)
    }

    /// Conjugate: `(w, -x, -y, -z)`. The inverse rotation for a unit quaternion.
    #[inline]
    pub fn conjugate(&self) -> Self {
        Self::new(self.w, -self.x, -self.y, -self.z)
    }

    #[inline]
    pub fn norm_squared(&self) -> f64 {
        self.dot(self)
    }

    #[inline]
    pub fn norm(&self) -> f64 {
        self.norm_squared().sqrt()
    }

    /// Scales to unit length.
    #[inline]
    pub fn normalize(&self) -> Self {
        let inv = 1.0 / self.norm();
        Self::new(self.w * inv, self.x * inv, self.y * inv, self.z * inv)
    }

    #[inline]
    pub fn dot(&self, rhs: &Self) -> f64 {
        self.w * rhs.w + self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    /// Hamilton product `self * rhs`: apply `rhs` first, then `self`.
    pub fn multiply(&self, rhs: &Self) -> Self {
        let (a, b) = (self, rhs);
        Self::new(
            a.w * b.w - a.x * b.x - a.y * b.y - a.z * b.z,
            a.w * b.x + a.x * b.w + a.y * b.z - a.z * b.y,
            a.w * b.y - a.x * b.z + a.y * b.w + a.z * b.x,
            a.w * b.z + a.x * b.y - a.y * b.x + a.z * b.w,
        )
    }

    /// Rotates a vector by this (unit) quaternion.
    pub fn rotate_vector(&self, v: [f64; 3]) -> [f64; 3] {
        let p = Self::new(0.0, v[0], v[1], v[2]);
        let r = self.multiply(&p).multiply(&self.conjugate());
        [r.x, r.y, r.z]
    }

    /// Converts to a 3x3 rotation matrix.
    pub fn to_rotation_matrix(&self) -> RotationMatrix3 {
        let (w, x, y, z) = (self.w, self.x, self.y, self.z);

        let xx = x * x;
        let yy = y * y;
        let zz = z * z;
        let xy = x * y;
        let xz = x * z;
        let yz = y * z;
        let wx = w * x;
        let wy = w * y;
        let wz = w * z;

        RotationMatrix3::from_array([
            [1.0 - 2.0 * (yy + zz), 2.0 * (xy - wz), 2.0 * (xz + wy)],
            [2.0 * (xy + wz), 1.0 - 2.0 * (xx + zz), 2.0 * (yz - wx)],
            [2.0 * (xz - wy), 2.0 * (yz + wx), 1.0 - 2.0 * (xx + yy)],
        ])
    }

    /// Builds from a rotation matrix using Shepperd's method.
    ///
    /// Picks the largest of the four diagonal combinations as the pivot, so it is
    /// numerically stable for every rotation angle including 180 degrees.
    pub fn from_rotation_matrix(m: &RotationMatrix3) -> Self {
        let trace = m[(0, 0)] + m[(1, 1)] + m[(2, 2)];

        if trace > 0.0 {
            let s = (trace + 1.0).sqrt();
            let k = 0.5 / s;
            Self::new(
                0.5 * s,
                (m[(2, 1)] - m[(1, 2)]) * k,
                (m[(0, 2)] - m[(2, 0)]) * k,
                (m[(1, 0)] - m[(0, 1)]) * k,
            )
        } else if m[(0, 0)] >= m[(1, 1)] && m[(0, 0)] >= m[(2, 2)] {
            let s = ((1.0 + m[(0, 0)] - m[(1, 1)] - m[(2, 2)]) * 0.25).sqrt();
            let k = 0.25 / s;
            Self::new(
                (m[(2, 1)] - m[(1, 2)]) * k,
                s,
                (m[(0, 1)] + m[(1, 0)]) * k,
                (m[(0, 2)] + m[(2, 0)]) * k,
            )
        } else if m[(1, 1)] >= m[(2, 2)] {
            let s = ((1.0 - m[(0, 0)] + m[(1, 1)] - m[(2, 2)]) * 0.25).sqrt();
            let k = 0.25 / s;
            Self::new(
                (m[(0, 2)] - m[(2, 0)]) * k,
                (m[(0, 1)] + m[(1, 0)]) * k,
                s,
                (m[(1, 2)] + m[(2, 1)]) * k,
            )
        } else {
            let s = ((1.0 - m[(0, 0)] - m[(1, 1)] + m[(2, 2)]) * 0.25).sqrt();
            let k = 0.25 / s;
            Self::new(
                (m[(1, 0)] - m[(0, 1)]) * k,
                (m[(0, 2)] + m[(2, 0)]) * k,
                (m[(1, 2)] + m[(2, 1)]) * k,
                s,
            )
        }
    }
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::identity()
    }
}

impl Mul for Quaternion {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl Mul<&Quaternion> for &Quaternion {
    type Output = Quaternion;

    fn mul(self, rhs: &Quaternion) -> Quaternion {
        self.multiply(rhs)
    }
}

impl Neg for Quaternion {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.w, -self.x, -self.y, -self.z)
    }
}
