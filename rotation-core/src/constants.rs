#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const PI: f64 = 3.141592653589793238462643;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const HALF_PI: f64 = 1.5707963267948966192313216;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const THREE_HALVES_PI: f64 = 4.712388980384689857693965;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const TWOPI: f64 = 6.283185307179586476925287;

#[allow(clippy::excessive_precision)]
pub const DEG_TO_RAD: f64 = 1.745329251994329576923691e-2;

#[allow(clippy::excessive_precision)]
pub const RAD_TO_DEG: f64 = 57.29577951308232087679815;

/// Singularity threshold for Euler decomposition, applied to the sine/cosine
/// magnitude of the middle angle.
pub const GIMBAL_EPSILON: f64 = 1e-8;

/// Default tolerance when checking that an input matrix is a proper rotation.
pub const ORTHONORMALITY_TOLERANCE: f64 = 1e-6;
