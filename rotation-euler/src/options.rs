//! Numerical tunables for decomposition.

use rotation_core::constants::{GIMBAL_EPSILON, ORTHONORMALITY_TOLERANCE};
use rotation_core::{RotationError, RotationMatrix3, RotationResult};

/// Tolerances used when turning a matrix back into angles.
///
/// ```
/// use rotation_euler::DecomposeOptions;
///
/// let strict = DecomposeOptions::default().with_orthonormality_tolerance(Some(1e-12));
/// let trusting = DecomposeOptions::default().with_orthonormality_tolerance(None);
/// assert_ne!(strict, trusting);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DecomposeOptions {
    /// Below this magnitude of the middle angle's sine (repeated axes) or cosine
    /// (distinct axes) the decomposition takes the gimbal-lock branch.
    pub gimbal_epsilon: f64,
    /// Input matrices deviating from a proper rotation by more than this are rejected.
    /// `None` skips the check.
    pub orthonormality_tolerance: Option<f64>,
}

impl Default for DecomposeOptions {
    fn default() -> Self {
        Self {
            gimbal_epsilon: GIMBAL_EPSILON,
            orthonormality_tolerance: Some(ORTHONORMALITY_TOLERANCE),
        }
    }
}

impl DecomposeOptions {
    pub fn with_gimbal_epsilon(mut self, epsilon: f64) -> Self {
        self.gimbal_epsilon = epsilon;
        self
    }

    pub fn with_orthonormality_tolerance(mut self, tolerance: Option<f64>) -> Self {
        self.orthonormality_tolerance = tolerance;
        self
    }

    /// Rejects `matrix` if it is not a proper rotation within the configured tolerance.
    ///
    /// A matrix containing NaN is always rejected while the check is enabled.
    pub fn check_matrix(&self, matrix: &RotationMatrix3) -> RotationResult<()> {
        let Some(tolerance) = self.orthonormality_tolerance else {
            return Ok(());
        };

        let deviation = matrix.orthonormality_error();
        if deviation <= tolerance {
            Ok(())
        } else {
            Err(RotationError::non_orthonormal(deviation, tolerance))
        }
    }
}
