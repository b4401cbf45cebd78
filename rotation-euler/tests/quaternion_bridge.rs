use approx::assert_abs_diff_eq;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rotation_core::constants::{DEG_TO_RAD, PI};
use rotation_core::test_helpers::{assert_angles_close, assert_matrix_close};
use rotation_euler::{resolve_convention, ConventionRegistry, EulerAngles, Quaternion};

#[test]
fn bunge_zero_is_identity_quaternion() {
    let bunge = resolve_convention("bunge").unwrap();
    let q = EulerAngles::new([0.0; 3], bunge).to_quaternion().unwrap();
    assert_eq!(q, Quaternion::identity());
}

#[test]
fn bunge_quarter_turn_squares_to_half_turn() {
    let bunge = resolve_convention("bunge").unwrap();
    let q = EulerAngles::from_degrees([0.0, 0.0, 90.0], bunge)
        .to_quaternion()
        .unwrap();

    let half = std::f64::consts::FRAC_1_SQRT_2;
    assert_abs_diff_eq!(q.w, half, epsilon = 1e-15);
    assert_abs_diff_eq!(q.x, 0.0, epsilon = 1e-15);
    assert_abs_diff_eq!(q.y, 0.0, epsilon = 1e-15);
    assert_abs_diff_eq!(q.z, half, epsilon = 1e-15);

    let mut euler = EulerAngles::new([0.0; 3], bunge);
    euler.from_quaternion(&(q * q), bunge).unwrap();
    assert_angles_close(euler.angles(), [0.0, 0.0, 180.0 * DEG_TO_RAD], 1e-12, "Bunge q*q");
}

#[test]
fn quaternion_round_trip_for_every_convention() {
    let mut rng = StdRng::seed_from_u64(314);
    for convention in ConventionRegistry::global().iter() {
        for _ in 0..32 {
            let angles = [
                rng.random_range(-PI..PI),
                rng.random_range(-PI..PI),
                rng.random_range(-PI..PI),
            ];
            let euler = EulerAngles::new(angles, convention);
            let q = euler.to_quaternion().unwrap();
            assert_abs_diff_eq!(q.norm(), 1.0, epsilon = 1e-12);

            let back = EulerAngles::from_quaternion_in(&q, convention).unwrap();
            assert_matrix_close(
                &back.rotation_matrix().unwrap(),
                &euler.rotation_matrix().unwrap(),
                1e-10,
                convention.name(),
            );
        }
    }
}

#[test]
fn quaternion_product_matches_matrix_product() {
    let nautical = resolve_convention("nautical").unwrap();
    let p = EulerAngles::new([0.3, 0.2, -0.5], nautical);
    let q = EulerAngles::new([-1.1, 0.4, 0.9], nautical);

    let product = p.to_quaternion().unwrap() * q.to_quaternion().unwrap();
    let expected = p.rotation_matrix().unwrap() * q.rotation_matrix().unwrap();
    assert_matrix_close(&product.to_rotation_matrix(), &expected, 1e-12, "Nautical");
}

#[test]
fn conjugate_is_inverse_rotation() {
    let matthies = resolve_convention("matthies").unwrap();
    let euler = EulerAngles::new([0.7, -1.2, 2.5], matthies);
    let q = euler.to_quaternion().unwrap();

    let mut inverse = EulerAngles::new([0.0; 3], matthies);
    inverse.from_quaternion(&q.conjugate(), matthies).unwrap();
    assert_matrix_close(
        &inverse.rotation_matrix().unwrap(),
        &euler.rotation_matrix().unwrap().transpose(),
        1e-10,
        "Matthies conjugate",
    );
}
