//! Generalized Euler decomposition and composition.
//!
//! One algorithm covers all 24 base conventions (Shoemake, "Euler Angle Conversion",
//! Graphics Gems IV, p. 222). The [`AxisCode`] selects three matrix index slots
//! `(i, j, k)`; the formulas are written once against those slots. Parity and frame are
//! handled outside the formulas:
//!
//! - odd parity negates all three angles, because the slot order `(i, j, k)` is then a
//!   left-handed permutation of `(X, Y, Z)`;
//! - the rotating frame exchanges the first and third angles, since a sequence of
//!   rotations about body axes equals the reversed sequence about fixed axes.
//!
//! For three distinct axes the composed matrix is `R_k(c) · R_j(b) · R_i(a)` in slot
//! terms; for repeated axes it is `R_i(c) · R_j(b) · R_i(a)`.
//!
//! Decomposed angles land in `(-pi, pi]`, except the middle one: `[-pi/2, pi/2]` for
//! distinct axes, `[0, pi]` for repeated axes with even parity and `[-pi, 0]` with odd
//! parity.
//!
//! # Gimbal lock
//!
//! When the middle angle aligns the first and third axes only their sum (or difference)
//! is determined. The decomposer then sets the third slot angle to zero *before* the
//! frame exchange and folds the whole rotation into the first slot. For a rotating-frame
//! convention this means the *last* angle of the returned triple carries the rotation:
//!
//! ```
//! use rotation_euler::{compose, decompose, resolve_convention};
//! use std::f64::consts::FRAC_PI_2;
//!
//! let bunge = resolve_convention("bunge").unwrap().root_axis_code().unwrap();
//! let m = compose([0.0, 0.0, FRAC_PI_2], bunge);
//! let angles = decompose(&m, bunge);
//! assert_eq!(angles[0], 0.0);
//! assert!((angles[2] - FRAC_PI_2).abs() < 1e-15);
//! ```

use rotation_core::math::{atan2, hypot};
use rotation_core::RotationMatrix3;
use tracing::debug;

use crate::axis::{AxisCode, Frame, Parity};
use crate::options::DecomposeOptions;

/// Builds the rotation matrix for `angles` under `code`.
///
/// Closed form; there is no degenerate case.
pub fn compose(angles: [f64; 3], code: AxisCode) -> RotationMatrix3 {
    let (i, j, k) = code.slots();
    let [mut a, b, mut c] = angles;

    if code.frame == Frame::Rotating {
        std::mem::swap(&mut a, &mut c);
    }
    let (a, b, c) = match code.parity {
        Parity::Even => (a, b, c),
        Parity::Odd => (-a, -b, -c),
    };

    let (si, ci) = a.sin_cos();
    let (sj, cj) = b.sin_cos();
    let (sh, ch) = c.sin_cos();
    let cc = ci * ch;
    let cs = ci * sh;
    let sc = si * ch;
    let ss = si * sh;

    let mut m = RotationMatrix3::identity();
    if code.repetition {
        m[(i, i)] = cj;
        m[(i, j)] = sj * si;
        m[(i, k)] = sj * ci;
        m[(j, i)] = sj * sh;
        m[(j, j)] = -cj * ss + cc;
        m[(j, k)] = -cj * cs - sc;
        m[(k, i)] = -sj * ch;
        m[(k, j)] = cj * sc + cs;
        m[(k, k)] = cj * cc - ss;
    } else {
        m[(i, i)] = cj * ch;
        m[(i, j)] = sj * sc - cs;
        m[(i, k)] = sj * cc + ss;
        m[(j, i)] = cj * sh;
        m[(j, j)] = sj * ss + cc;
        m[(j, k)] = sj * cs - sc;
        m[(k, i)] = -sj;
        m[(k, j)] = cj * si;
        m[(k, k)] = cj * ci;
    }
    m
}

/// Extracts the angle triple of `matrix` under `code` with default options.
///
/// The matrix is assumed to be a proper rotation; no validation happens here.
pub fn decompose(matrix: &RotationMatrix3, code: AxisCode) -> [f64; 3] {
    decompose_with(matrix, code, &DecomposeOptions::default())
}

/// Extracts the angle triple of `matrix` under `code`.
///
/// Always succeeds. Only `options.gimbal_epsilon` is consulted; the orthonormality check
/// is the caller's business (see [`DecomposeOptions::check_matrix`]).
pub fn decompose_with(
    matrix: &RotationMatrix3,
    code: AxisCode,
    options: &DecomposeOptions,
) -> [f64; 3] {
    let (i, j, k) = code.slots();
    let m = matrix;
    let epsilon = options.gimbal_epsilon;

    let [mut a, mut b, mut c] = if code.repetition {
        let sy = hypot(m[(i, j)], m[(i, k)]);
        if sy > epsilon {
            [
                atan2(m[(i, j)], m[(i, k)]),
                atan2(sy, m[(i, i)]),
                atan2(m[(j, i)], -m[(k, i)]),
            ]
        } else {
            debug!(convention = %code, sy, "gimbal lock, folding rotation into first slot");
            [atan2(-m[(j, k)], m[(j, j)]), atan2(sy, m[(i, i)]), 0.0]
        }
    } else {
        let cy = hypot(m[(i, i)], m[(j, i)]);
        if cy > epsilon {
            [
                atan2(m[(k, j)], m[(k, k)]),
                atan2(-m[(k, i)], cy),
                atan2(m[(j, i)], m[(i, i)]),
            ]
        } else {
            debug!(convention = %code, cy, "gimbal lock, folding rotation into first slot");
            [atan2(-m[(j, k)], m[(j, j)]), atan2(-m[(k, i)], cy), 0.0]
        }
    };

    if code.parity == Parity::Odd {
        a = -a;
        b = -b;
        c = -c;
    }
    if code.frame == Frame::Rotating {
        std::mem::swap(&mut a, &mut c);
    }

    [a, b, c]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::axis::Axis;
    use rotation_core::constants::{HALF_PI, PI};
    use rotation_core::test_helpers::assert_matrix_close;

    fn all_codes() -> Vec<AxisCode> {
        let mut codes = Vec::new();
        for i in 0..3u8 {
            for n in 0..2u8 {
                for s in 0..2u8 {
                    for f in 0..2u8 {
                        codes.push(AxisCode::from_tuple((i, n, s, f)).unwrap());
                    }
                }
            }
        }
        codes
    }

    fn elementary_product(code: AxisCode, angles: [f64; 3]) -> RotationMatrix3 {
        let axes = code.axis_sequence();
        let r = |n: usize| RotationMatrix3::about_axis(axes[n].index(), angles[n]);
        match code.frame {
            Frame::Static => r(2) * r(1) * r(0),
            Frame::Rotating => r(0) * r(1) * r(2),
        }
    }

    #[test]
    fn zero_angles_compose_to_exact_identity() {
        for code in all_codes() {
            assert_eq!(compose([0.0; 3], code), RotationMatrix3::identity(), "{}", code);
        }
    }

    #[test]
    fn identity_decomposes_to_zero() {
        for code in all_codes() {
            let angles = decompose(&RotationMatrix3::identity(), code);
            assert_eq!(angles, [0.0, 0.0, 0.0], "{}", code);
        }
    }

    #[test]
    fn compose_matches_elementary_rotations() {
        let angles = [0.3, -1.1, 2.4];
        for code in all_codes() {
            let expected = elementary_product(code, angles);
            assert_matrix_close(&compose(angles, code), &expected, 1e-14, &code.to_string());
        }
    }

    #[test]
    fn decompose_recovers_generic_angles() {
        // inside the principal ranges the extraction is unique; with repeated axes
        // odd parity puts the middle angle in [-pi, 0]
        for code in all_codes() {
            let angles = match (code.repetition, code.parity) {
                (false, _) => [0.3, -0.4, 1.2],
                (true, Parity::Even) => [0.3, 0.9, -1.2],
                (true, Parity::Odd) => [0.3, -0.9, -1.2],
            };
            let back = decompose(&compose(angles, code), code);
            for n in 0..3 {
                assert!((back[n] - angles[n]).abs() < 1e-12, "{}: {:?}", code, back);
            }
        }
    }

    #[test]
    fn gimbal_lock_reconstructs_matrix() {
        for code in all_codes() {
            let middles: &[f64] = if code.repetition {
                &[0.0, PI]
            } else {
                &[HALF_PI, -HALF_PI]
            };
            for &middle in middles {
                let m = compose([0.3, middle, -0.7], code);
                let angles = decompose(&m, code);
                assert_matrix_close(&compose(angles, code), &m, 1e-10, &code.to_string());
            }
        }
    }

    #[test]
    fn gimbal_lock_zeroes_slot_before_frame_exchange() {
        let static_code = AxisCode::new(Axis::Z, Parity::Even, true, Frame::Static);
        let rotating_code = AxisCode::new(Axis::Z, Parity::Even, true, Frame::Rotating);
        let m = RotationMatrix3::about_axis(2, 0.5);

        let s = decompose(&m, static_code);
        assert!((s[0] - 0.5).abs() < 1e-15);
        assert_eq!(s[2], 0.0);

        let r = decompose(&m, rotating_code);
        assert_eq!(r[0], 0.0);
        assert!((r[2] - 0.5).abs() < 1e-15);
    }

    #[test]
    fn gimbal_epsilon_is_configurable() {
        let code = AxisCode::new(Axis::Z, Parity::Even, true, Frame::Static);
        let m = compose([0.2, 1e-6, 0.3], code);

        let fine = decompose(&m, code);
        assert!(fine[2] != 0.0);

        let coarse = decompose_with(
            &m,
            code,
            &DecomposeOptions::default().with_gimbal_epsilon(1e-4),
        );
        assert_eq!(coarse[2], 0.0);
        assert!((coarse[0] - 0.5).abs() < 1e-10);
    }
}
