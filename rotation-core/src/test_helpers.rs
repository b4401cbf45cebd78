use crate::angle::angular_difference;
use crate::matrix::RotationMatrix3;

#[inline]
pub fn f64_to_ordered_u64(x: f64) -> u64 {
    let bits = x.to_bits();
    if bits & 0x8000_0000_0000_0000 != 0 {
        !bits
    } else {
        bits | 0x8000_0000_0000_0000
    }
}

#[inline]
pub fn ulp_diff(a: f64, b: f64) -> u64 {
    let ua = f64_to_ordered_u64(a);
    let ub = f64_to_ordered_u64(b);
    ua.abs_diff(ub)
}

#[track_caller]
pub fn assert_float_eq(a: f64, b: f64, max_ulp: u64) {
    if a == 0.0 && b == 0.0 {
        return;
    }
    assert!(a.is_finite() && b.is_finite());
    let d = ulp_diff(a, b);
    assert!(
        d <= max_ulp,
        "ULP={} exceeds {}, a={} (0x{:016x}) b={} (0x{:016x})",
        d,
        max_ulp,
        a,
        a.to_bits(),
        b,
        b.to_bits()
    );
}

#[track_caller]
pub fn assert_matrix_close(a: &RotationMatrix3, b: &RotationMatrix3, tolerance: f64, ctx: &str) {
    let d = a.max_difference(b);
    assert!(
        d <= tolerance,
        "{}: matrices differ by {:e} (tolerance {:e})\n{}{}",
        ctx,
        d,
        tolerance,
        a,
        b
    );
}

/// Compares triples modulo 2pi, so `pi` and `-pi` are equal.
#[track_caller]
pub fn assert_angles_close(a: [f64; 3], b: [f64; 3], tolerance: f64, ctx: &str) {
    for index in 0..3 {
        let d = angular_difference(a[index], b[index]).abs();
        assert!(
            d <= tolerance,
            "{}: angle {} differs by {:e} (tolerance {:e}), a={:?} b={:?}",
            ctx,
            index,
            d,
            tolerance,
            a,
            b
        );
    }
}
