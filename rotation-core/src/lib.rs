//! Rotation primitives shared by the Euler-angle convention engine.
//!
//! `rotation-core` provides the pieces every conversion relies on: the 3x3
//! [`RotationMatrix3`], the unit [`Quaternion`], angle wrapping helpers and the
//! unified [`RotationError`].
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`matrix`] | 3×3 rotation matrices (active, column-vector convention) |
//! | [`quaternion`] | Unit quaternions, Hamilton product, matrix conversion |
//! | [`angle`] | Wrapping to canonical ranges, degree/radian triples |
//! | [`constants`] | Angular constants and default tolerances |
//! | [`errors`] | [`RotationError`] and [`RotationResult`] |
//!
//! # Re-exports
//!
//! ```
//! use rotation_core::{Quaternion, RotationMatrix3};
//! use rotation_core::{RotationError, RotationResult};
//! ```
//!
//! # Design Notes
//!
//! - **Radians internally**: every angle is in radians. Degree helpers exist for display.
//! - **No implicit state**: all functions are pure; nothing here allocates or locks.

pub mod angle;
pub mod constants;
pub mod errors;
pub mod math;
pub mod matrix;
pub mod quaternion;

pub use errors::{RotationError, RotationResult};
pub use matrix::RotationMatrix3;
pub use quaternion::Quaternion;

pub mod test_helpers;
