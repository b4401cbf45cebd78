//! 3x3 rotation matrices.
//!
//! A rotation matrix is a 3x3 orthogonal matrix with determinant +1. It is the
//! intermediate form every Euler-angle conversion routes through: angles in one
//! convention are composed into a matrix, and the matrix is decomposed into angles
//! of another convention.
//!
//! # Conventions
//!
//! Matrices here are *active* rotations acting on column vectors, `v' = M * v`.
//! A positive angle rotates counterclockwise when looking from the positive axis
//! toward the origin, so [`about_axis`](RotationMatrix3::about_axis) with axis Z and
//! 90 degrees takes `[1, 0, 0]` to `[0, 1, 0]`.
//!
//! Rotation matrices compose by multiplication. To apply rotation A, then rotation B,
//! compute `B * A` (the rightmost matrix acts first on the vector).
//!
//! ```
//! use rotation_core::RotationMatrix3;
//! use std::f64::consts::FRAC_PI_2;
//!
//! let rz = RotationMatrix3::about_axis(2, FRAC_PI_2);
//! let v = rz.apply_to_vector([1.0, 0.0, 0.0]);
//! assert!(v[0].abs() < 1e-15);
//! assert!((v[1] - 1.0).abs() < 1e-15);
//! ```
//!
//! # Storage Layout
//!
//! Elements are stored in row-major order as `[[f64; 3]; 3]`. The element at row `i`,
//! column `j` is accessed as `matrix[(i, j)]` or `matrix.get(i, j)`.
//!
//! # Inverting Rotations
//!
//! For a proper rotation matrix, the inverse equals the transpose:
//!
//! ```
//! use rotation_core::RotationMatrix3;
//!
//! let m = RotationMatrix3::about_axis(0, 0.5);
//! let product = m * m.transpose();
//! assert!((product.get(0, 0) - 1.0).abs() < 1e-15);
//! ```

use std::fmt;

/// A 3x3 rotation matrix.
///
/// This type is meant to hold proper rotation matrices (orthogonal with determinant +1),
/// but construction from raw elements does not validate. Use
/// [`is_rotation_matrix`](Self::is_rotation_matrix) or
/// [`orthonormality_error`](Self::orthonormality_error) to check.
///
/// ```
/// use rotation_core::RotationMatrix3;
///
/// let m = RotationMatrix3::from_array([
///     [1.0, 0.0, 0.0],
///     [0.0, 1.0, 0.0],
///     [0.0, 0.0, 1.0],
/// ]);
/// assert_eq!(m, RotationMatrix3::identity());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RotationMatrix3 {
    elements: [[f64; 3]; 3],
}

impl RotationMatrix3 {
    /// Creates the 3x3 identity matrix.
    pub fn identity() -> Self {
        Self {
            elements: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
        }
    }

    /// Creates a matrix from a row-major 3x3 array.
    ///
    /// `elements[i][j]` is row `i`, column `j`. Not validated.
    pub fn from_array(elements: [[f64; 3]; 3]) -> Self {
        Self { elements }
    }

    /// Returns the element at the specified row and column.
    ///
    /// Indices are 0-based. Panics if `row >= 3` or `col >= 3`.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.elements[row][col]
    }

    /// Sets the element at the specified row and column.
    ///
    /// Indices are 0-based. Panics if `row >= 3` or `col >= 3`.
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        self.elements[row][col] = value;
    }

    /// Returns a reference to the underlying 3x3 array.
    pub fn elements(&self) -> &[[f64; 3]; 3] {
        &self.elements
    }

    /// Elementary active rotation by `angle` radians about coordinate axis `axis`
    /// (0 = X, 1 = Y, 2 = Z).
    ///
    /// ```text
    /// Rx(t) = | 1   0     0    |   Ry(t) = |  cos t  0  sin t |   Rz(t) = | cos t  -sin t  0 |
    ///         | 0  cos t -sin t|           |   0     1   0    |           | sin t   cos t  0 |
    ///         | 0  sin t  cos t|           | -sin t  0  cos t |           |  0       0     1 |
    /// ```
    ///
    /// Panics if `axis >= 3`.
    pub fn about_axis(axis: usize, angle: f64) -> Self {
        assert!(axis < 3, "axis index {} out of range", axis);
        let (s, c) = angle.sin_cos();
        let j = (axis + 1) % 3;
        let k = (axis + 2) % 3;

        let mut m = Self::identity();
        m.elements[j][j] = c;
        m.elements[j][k] = -s;
        m.elements[k][j] = s;
        m.elements[k][k] = c;
        m
    }

    /// Multiplies this matrix by another, returning the product.
    ///
    /// The result represents the composition where `other` is applied first, then `self`.
    /// You can also use the `*` operator: `a * b` or `&a * &b`.
    pub fn multiply(&self, other: &Self) -> Self {
        let mut result = [[0.0; 3]; 3];

        for (i, row) in result.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                for k in 0..3 {
                    *cell += self.elements[i][k] * other.elements[k][j];
                }
            }
        }

        Self::from_array(result)
    }

    /// Applies this rotation matrix to a 3D vector (`M * v`).
    pub fn apply_to_vector(&self, vector: [f64; 3]) -> [f64; 3] {
        [
            self.elements[0][0] * vector[0]
                + self.elements[0][1] * vector[1]
                + self.elements[0][2] * vector[2],
            self.elements[1][0] * vector[0]
                + self.elements[1][1] * vector[1]
                + self.elements[1][2] * vector[2],
            self.elements[2][0] * vector[0]
                + self.elements[2][1] * vector[1]
                + self.elements[2][2] * vector[2],
        ]
    }

    /// Computes the determinant of this matrix.
    ///
    /// +1 for a proper rotation, -1 for a reflection.
    pub fn determinant(&self) -> f64 {
        let m = &self.elements;

        m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
    }

    /// Returns the transpose of this matrix, which is its inverse for a rotation.
    pub fn transpose(&self) -> Self {
        let m = &self.elements;
        Self::from_array([
            [m[0][0], m[1][0], m[2][0]],
            [m[0][1], m[1][1], m[2][1]],
            [m[0][2], m[1][2], m[2][2]],
        ])
    }

    /// Largest deviation from being a proper rotation.
    ///
    /// The maximum of `|det(M) - 1|` and every element of `|M * M^T - I|`. Zero for an
    /// exact rotation, infinite if any element is not finite.
    pub fn orthonormality_error(&self) -> f64 {
        if self.elements.iter().flatten().any(|x| !x.is_finite()) {
            return f64::INFINITY;
        }
        let product = self.multiply(&self.transpose());
        let gram = product.max_difference(&Self::identity());
        gram.max((self.determinant() - 1.0).abs())
    }

    /// Checks whether this matrix is a valid rotation matrix within a tolerance.
    ///
    /// ```
    /// use rotation_core::RotationMatrix3;
    ///
    /// let m = RotationMatrix3::about_axis(2, 0.5) * RotationMatrix3::about_axis(0, 0.3);
    /// assert!(m.is_rotation_matrix(1e-14));
    ///
    /// let scaled = RotationMatrix3::from_array([
    ///     [2.0, 0.0, 0.0],
    ///     [0.0, 1.0, 0.0],
    ///     [0.0, 0.0, 1.0],
    /// ]);
    /// assert!(!scaled.is_rotation_matrix(1e-14));
    /// ```
    pub fn is_rotation_matrix(&self, tolerance: f64) -> bool {
        self.orthonormality_error() <= tolerance
    }

    /// Returns the maximum absolute difference between corresponding elements.
    ///
    /// NaN if any pair differs by NaN.
    pub fn max_difference(&self, other: &Self) -> f64 {
        let mut max_diff: f64 = 0.0;

        for i in 0..3 {
            for j in 0..3 {
                let diff = (self.elements[i][j] - other.elements[i][j]).abs();
                if diff.is_nan() {
                    return f64::NAN;
                }
                max_diff = max_diff.max(diff);
            }
        }

        max_diff
    }
}

impl Default for RotationMatrix3 {
    fn default() -> Self {
        Self::identity()
    }
}

impl std::ops::Mul for RotationMatrix3 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl std::ops::Mul<&RotationMatrix3> for RotationMatrix3 {
    type Output = RotationMatrix3;

    fn mul(self, rhs: &RotationMatrix3) -> RotationMatrix3 {
        self.multiply(rhs)
    }
}

impl std::ops::Mul<RotationMatrix3> for &RotationMatrix3 {
    type Output = RotationMatrix3;

    fn mul(self, rhs: RotationMatrix3) -> RotationMatrix3 {
        self.multiply(&rhs)
    }
}

impl std::ops::Mul<&RotationMatrix3> for &RotationMatrix3 {
    type Output = RotationMatrix3;

    fn mul(self, rhs: &RotationMatrix3) -> RotationMatrix3 {
        self.multiply(rhs)
    }
}

impl std::ops::Index<(usize, usize)> for RotationMatrix3 {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        &self.elements[row][col]
    }
}

impl std::ops::IndexMut<(usize, usize)> for RotationMatrix3 {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f64 {
        &mut self.elements[row][col]
    }
}

impl fmt::Display for RotationMatrix3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "RotationMatrix3:")?;
        for row in &self.elements {
            writeln!(f, "  [{:12.9} {:12.9} {:12.9}]", row[0], row[1], row[2])?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::HALF_PI;

    #[test]
    fn test_identity_and_get() {
        let m = RotationMatrix3::identity();
        assert_eq!(m.get(0, 0), 1.0);
        assert_eq!(m.get(1, 1), 1.0);
        assert_eq!(m.get(2, 2), 1.0);
        assert_eq!(m.get(0, 1), 0.0);
        assert_eq!(RotationMatrix3::default(), m);
    }

    #[test]
    fn test_set() {
        let mut m = RotationMatrix3::identity();
        m.set(0, 1, 0.5);
        assert_eq!(m.get(0, 1), 0.5);
    }

    #[test]
    fn test_about_z_is_counterclockwise() {
        // [1,0,0] -> [0,1,0] at +90°
        let m = RotationMatrix3::about_axis(2, HALF_PI);
        let result = m.apply_to_vector([1.0, 0.0, 0.0]);
        assert!(result[0].abs() < 1e-15);
        assert!((result[1] - 1.0).abs() < 1e-15);
        assert!(result[2].abs() < 1e-15);
    }

    #[test]
    fn test_about_x_is_counterclockwise() {
        // [0,1,0] -> [0,0,1] at +90°
        let m = RotationMatrix3::about_axis(0, HALF_PI);
        let result = m.apply_to_vector([0.0, 1.0, 0.0]);
        assert!(result[0].abs() < 1e-15);
        assert!(result[1].abs() < 1e-15);
        assert!((result[2] - 1.0).abs() < 1e-15);
    }

    #[test]
    fn test_about_y_is_counterclockwise() {
        // [0,0,1] -> [1,0,0] at +90°
        let m = RotationMatrix3::about_axis(1, HALF_PI);
        let result = m.apply_to_vector([0.0, 0.0, 1.0]);
        assert!((result[0] - 1.0).abs() < 1e-15);
        assert!(result[1].abs() < 1e-15);
        assert!(result[2].abs() < 1e-15);
    }

    #[test]
    #[should_panic]
    fn test_about_axis_out_of_range() {
        RotationMatrix3::about_axis(3, 0.1);
    }

    #[test]
    fn test_is_rotation_matrix_valid() {
        let m = RotationMatrix3::about_axis(2, 0.5);
        assert!(m.is_rotation_matrix(1e-14));
        assert!(m.orthonormality_error() < 1e-15);
    }

    #[test]
    fn test_is_rotation_matrix_bad_determinant() {
        let m = RotationMatrix3::from_array([[-1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);
        assert!(!m.is_rotation_matrix(1e-6));
        assert!((m.orthonormality_error() - 2.0).abs() < 1e-15);
    }

    #[test]
    fn test_is_rotation_matrix_not_orthogonal() {
        let m = RotationMatrix3::from_array([[1.0, 0.1, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);
        assert!(!m.is_rotation_matrix(1e-15));
    }

    #[test]
    fn test_transpose_is_inverse() {
        let m = RotationMatrix3::about_axis(0, 0.3) * RotationMatrix3::about_axis(2, -1.1);
        let product = m * m.transpose();
        assert!(product.max_difference(&RotationMatrix3::identity()) < 1e-15);
    }

    #[test]
    fn test_mul_matrix_matrix() {
        let a = RotationMatrix3::about_axis(0, 0.1);
        let b = RotationMatrix3::about_axis(1, 0.2);

        let r1 = a * b;
        let r2 = a * &b;
        let r3 = &a * b;
        let r4 = &a * &b;

        assert_eq!(r1, r2);
        assert_eq!(r2, r3);
        assert_eq!(r3, r4);
    }

    #[test]
    fn test_index_operators() {
        let mut m = RotationMatrix3::identity();
        assert_eq!(m[(0, 0)], 1.0);
        m[(0, 1)] = 0.5;
        assert_eq!(m[(0, 1)], 0.5);
    }

    #[test]
    fn test_display() {
        let m = RotationMatrix3::about_axis(2, 0.1);
        let s = format!("{}", m);
        assert!(s.contains("RotationMatrix3:"));
        assert!(s.contains("["));
    }

    #[test]
    fn test_max_difference() {
        let a = RotationMatrix3::identity();
        let b = RotationMatrix3::from_array([[1.0, 0.1, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);
        assert!((a.max_difference(&b) - 0.1).abs() < 1e-15);
    }

    #[test]
    fn test_non_finite_elements() {
        let mut m = RotationMatrix3::identity();
        m[(1, 2)] = f64::NAN;
        assert!(m.max_difference(&RotationMatrix3::identity()).is_nan());
        assert_eq!(m.orthonormality_error(), f64::INFINITY);
        assert!(!m.is_rotation_matrix(1.0));
    }
}
