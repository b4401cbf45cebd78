//! Angle triples bound to a convention.
//!
//! [`EulerAngles`] owns three angles (radians) and a shared [`Convention`] handle. All
//! conversions route through the rotation matrix of the convention's root base:
//!
//! ```text
//!   angles ──to_root──▶ root angles ──compose──▶ RotationMatrix3 ──▶ Quaternion
//!   angles ◀─from_root── root angles ◀─decompose── RotationMatrix3 ◀── Quaternion
//! ```
//!
//! Every fallible mutator computes the new state first and assigns it only on success,
//! so a failed call leaves the value untouched.
//!
//! ```
//! use rotation_euler::{resolve_convention, EulerAngles};
//!
//! let bunge = resolve_convention("bunge").unwrap();
//! let kocks = resolve_convention("kocks").unwrap();
//!
//! let mut angles = EulerAngles::new([0.3, 0.8, -1.1], bunge);
//! let before = angles.rotation_matrix().unwrap();
//! angles.change_convention(kocks).unwrap();
//! assert_eq!(angles.convention().name(), "Kocks");
//! assert!(angles.rotation_matrix().unwrap().max_difference(&before) < 1e-12);
//! ```

use std::fmt;

use rotation_core::angle::{triple_to_degrees, triple_to_radians};
use rotation_core::{Quaternion, RotationError, RotationMatrix3, RotationResult};
use tracing::trace;

use crate::convention::Convention;
use crate::decompose::{compose, decompose_with};
use crate::options::DecomposeOptions;
use crate::registry::default_convention;

/// Three angles (radians) interpreted under a convention.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EulerAngles<'r> {
    angles: [f64; 3],
    convention: Convention<'r>,
    options: DecomposeOptions,
}

fn triple_from_slice(values: &[f64]) -> RotationResult<[f64; 3]> {
    <[f64; 3]>::try_from(values).map_err(|_| RotationError::invalid_triple_length(values.len()))
}

impl<'r> EulerAngles<'r> {
    /// Binds `angles` to `convention`. Angles are stored as given, without wrapping.
    pub fn new(angles: [f64; 3], convention: Convention<'r>) -> Self {
        Self {
            angles,
            convention,
            options: DecomposeOptions::default(),
        }
    }

    /// Like [`new`](Self::new) but from a slice, which must hold exactly three values.
    pub fn from_slice(angles: &[f64], convention: Convention<'r>) -> RotationResult<Self> {
        Ok(Self::new(triple_from_slice(angles)?, convention))
    }

    /// Angles given in degrees, stored in radians.
    pub fn from_degrees(degrees: [f64; 3], convention: Convention<'r>) -> Self {
        Self::new(triple_to_radians(degrees), convention)
    }

    /// Decomposes `matrix` under `convention`, using default options.
    pub fn from_rotation_matrix_in(
        matrix: &RotationMatrix3,
        convention: Convention<'r>,
    ) -> RotationResult<Self> {
        let options = DecomposeOptions::default();
        let angles = Self::decompose_into(matrix, convention, &options)?;
        Ok(Self {
            angles,
            convention,
            options,
        })
    }

    /// Decomposes the rotation of `quaternion` under `convention`, using default options.
    pub fn from_quaternion_in(
        quaternion: &Quaternion,
        convention: Convention<'r>,
    ) -> RotationResult<Self> {
        Self::from_rotation_matrix_in(&quaternion_matrix(quaternion), convention)
    }

    pub fn angles(&self) -> [f64; 3] {
        self.angles
    }

    pub fn to_degrees(&self) -> [f64; 3] {
        triple_to_degrees(self.angles)
    }

    /// Replaces the triple; the convention is unchanged and no range check happens.
    pub fn set_angles(&mut self, angles: [f64; 3]) {
        self.angles = angles;
    }

    pub fn set_angles_from_slice(&mut self, angles: &[f64]) -> RotationResult<()> {
        self.angles = triple_from_slice(angles)?;
        Ok(())
    }

    pub fn convention(&self) -> Convention<'r> {
        self.convention
    }

    /// Angle labels of the convention paired with the stored values.
    pub fn labels(&self) -> [(&'r str, f64); 3] {
        let names = self.convention.angle_labels();
        [
            (names[0], self.angles[0]),
            (names[1], self.angles[1]),
            (names[2], self.angles[2]),
        ]
    }

    pub fn options(&self) -> &DecomposeOptions {
        &self.options
    }

    /// Options used by later decompositions into this value.
    pub fn with_options(mut self, options: DecomposeOptions) -> Self {
        self.options = options;
        self
    }

    /// Rotation matrix of the stored triple.
    ///
    /// Fails only if the convention's parent chain cannot be resolved.
    pub fn rotation_matrix(&self) -> RotationResult<RotationMatrix3> {
        let (root_angles, code) = self.convention.to_root(self.angles)?;
        Ok(compose(root_angles, code))
    }

    /// Unit quaternion of the stored triple.
    pub fn to_quaternion(&self) -> RotationResult<Quaternion> {
        Ok(Quaternion::from_rotation_matrix(&self.rotation_matrix()?))
    }

    /// Replaces the value with the decomposition of `matrix` under `convention`.
    pub fn from_rotation_matrix(
        &mut self,
        matrix: &RotationMatrix3,
        convention: Convention<'r>,
    ) -> RotationResult<()> {
        let angles = Self::decompose_into(matrix, convention, &self.options)?;
        self.angles = angles;
        self.convention = convention;
        Ok(())
    }

    /// Replaces the value with the decomposition of `quaternion` under `convention`.
    ///
    /// The quaternion is normalized first.
    pub fn from_quaternion(
        &mut self,
        quaternion: &Quaternion,
        convention: Convention<'r>,
    ) -> RotationResult<()> {
        self.from_rotation_matrix(&quaternion_matrix(quaternion), convention)
    }

    /// Re-expresses the same rotation under `convention`.
    pub fn change_convention(&mut self, convention: Convention<'r>) -> RotationResult<()> {
        let matrix = self.rotation_matrix()?;
        trace!(
            from = self.convention.name(),
            to = convention.name(),
            "changing convention"
        );
        self.from_rotation_matrix(&matrix, convention)
    }

    fn decompose_into(
        matrix: &RotationMatrix3,
        convention: Convention<'r>,
        options: &DecomposeOptions,
    ) -> RotationResult<[f64; 3]> {
        options.check_matrix(matrix)?;
        let code = convention.root_axis_code()?;
        convention.from_root(decompose_with(matrix, code, options))
    }
}

impl EulerAngles<'static> {
    /// Binds `angles` to the global default convention.
    pub fn default_from(angles: [f64; 3]) -> RotationResult<Self> {
        Ok(Self::new(angles, default_convention()?))
    }
}

fn quaternion_matrix(quaternion: &Quaternion) -> RotationMatrix3 {
    quaternion.normalize().to_rotation_matrix()
}

impl fmt::Display for EulerAngles<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (", self.convention.name())?;
        for (index, (label, value)) in self.labels().iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", label, value)?;
        }
        f.write_str(")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::resolve_convention;
    use approx::assert_abs_diff_eq;
    use rotation_core::test_helpers::assert_matrix_close;

    #[test]
    fn new_keeps_angles_unwrapped() {
        let xyz = resolve_convention("xyzs").unwrap();
        let euler = EulerAngles::new([7.0, -9.0, 100.0], xyz);
        assert_eq!(euler.angles(), [7.0, -9.0, 100.0]);
    }

    #[test]
    fn from_slice_checks_length() {
        let xyz = resolve_convention("xyzs").unwrap();
        assert!(EulerAngles::from_slice(&[0.1, 0.2, 0.3], xyz).is_ok());

        let err = EulerAngles::from_slice(&[0.1, 0.2], xyz).unwrap_err();
        assert_eq!(err, RotationError::InvalidTripleLength { len: 2 });
    }

    #[test]
    fn failed_slice_assignment_keeps_state() {
        let xyz = resolve_convention("xyzs").unwrap();
        let mut euler = EulerAngles::new([0.1, 0.2, 0.3], xyz);
        let err = euler.set_angles_from_slice(&[1.0, 2.0, 3.0, 4.0]).unwrap_err();
        assert_eq!(err, RotationError::InvalidTripleLength { len: 4 });
        assert_eq!(euler.angles(), [0.1, 0.2, 0.3]);

        euler.set_angles_from_slice(&[1.0, 2.0, 3.0]).unwrap();
        assert_eq!(euler.angles(), [1.0, 2.0, 3.0]);
        assert_eq!(euler.convention(), xyz);
    }

    #[test]
    fn failed_decomposition_keeps_state() {
        let xyz = resolve_convention("xyzs").unwrap();
        let bunge = resolve_convention("bunge").unwrap();
        let mut euler = EulerAngles::new([0.1, 0.2, 0.3], xyz);

        let skewed =
            RotationMatrix3::from_array([[1.0, 0.5, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);
        let err = euler.from_rotation_matrix(&skewed, bunge).unwrap_err();
        assert!(matches!(err, RotationError::NonOrthonormalMatrix { .. }));
        assert_eq!(euler.angles(), [0.1, 0.2, 0.3]);
        assert_eq!(euler.convention(), xyz);
    }

    #[test]
    fn disabled_check_decomposes_anything() {
        let xyz = resolve_convention("xyzs").unwrap();
        let options = DecomposeOptions::default().with_orthonormality_tolerance(None);
        let mut euler = EulerAngles::new([0.0; 3], xyz).with_options(options);

        let skewed =
            RotationMatrix3::from_array([[1.0, 0.5, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);
        assert!(euler.from_rotation_matrix(&skewed, xyz).is_ok());
        assert_eq!(euler.options(), &options);
    }

    #[test]
    fn default_convention_is_used() {
        let euler = EulerAngles::default_from([0.1, 0.2, 0.3]).unwrap();
        assert_eq!(euler.convention().name(), "XYZs");
    }

    #[test]
    fn labels_follow_convention() {
        let bunge = resolve_convention("bunge").unwrap();
        let euler = EulerAngles::new([0.1, 0.2, 0.3], bunge);
        assert_eq!(euler.labels(), [("phi1", 0.1), ("Phi", 0.2), ("phi2", 0.3)]);
        assert_eq!(euler.to_string(), "Bunge (phi1: 0.1, Phi: 0.2, phi2: 0.3)");
    }

    #[test]
    fn degrees_helpers() {
        let bunge = resolve_convention("bunge").unwrap();
        let euler = EulerAngles::from_degrees([90.0, 0.0, -180.0], bunge);
        assert_abs_diff_eq!(euler.angles()[0], std::f64::consts::FRAC_PI_2, epsilon = 1e-15);
        assert_abs_diff_eq!(euler.to_degrees()[2], -180.0, epsilon = 1e-12);
    }

    #[test]
    fn static_xyz_matches_elementary_product() {
        let xyz = resolve_convention("XYZs").unwrap();
        let (a, b, c) = (0.4, -0.3, 1.2);
        let euler = EulerAngles::new([a, b, c], xyz);
        let expected = RotationMatrix3::about_axis(2, c)
            * RotationMatrix3::about_axis(1, b)
            * RotationMatrix3::about_axis(0, a);
        assert_matrix_close(&euler.rotation_matrix().unwrap(), &expected, 1e-14, "XYZs");
    }

    #[test]
    fn quaternion_input_is_normalized() {
        let bunge = resolve_convention("bunge").unwrap();
        let q = Quaternion::from_axis_angle([0.0, 0.0, 1.0], 0.5);
        let scaled = Quaternion::new(3.0 * q.w, 3.0 * q.x, 3.0 * q.y, 3.0 * q.z);

        let a = EulerAngles::from_quaternion_in(&q, bunge).unwrap();
        let b = EulerAngles::from_quaternion_in(&scaled, bunge).unwrap();
        assert_abs_diff_eq!(a.angles()[2], b.angles()[2], epsilon = 1e-14);
        assert_abs_diff_eq!(b.angles()[2], 0.5, epsilon = 1e-14);
    }

    #[test]
    fn zero_quaternion_is_rejected() {
        let bunge = resolve_convention("bunge").unwrap();
        let mut euler = EulerAngles::new([0.1, 0.2, 0.3], bunge);
        let zero = Quaternion::new(0.0, 0.0, 0.0, 0.0);
        assert!(euler.from_quaternion(&zero, bunge).is_err());
        assert_eq!(euler.angles(), [0.1, 0.2, 0.3]);
    }

    #[test]
    fn change_convention_within_same_root() {
        let roe = resolve_convention("roe").unwrap();
        let matthies = resolve_convention("matthies").unwrap();
        // ZYZr has odd parity, so the decomposed middle angle is non-positive
        let mut euler = EulerAngles::new([0.3, -1.0, -0.4], roe);
        euler.change_convention(matthies).unwrap();
        for (got, want) in euler.angles().iter().zip([0.3, -1.0, -0.4]) {
            assert_abs_diff_eq!(*got, want, epsilon = 1e-12);
        }
    }
}
