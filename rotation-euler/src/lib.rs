//! Generalized Euler-angle conventions.
//!
//! `rotation-euler` converts between rotation matrices, quaternions and angle triples
//! under any of the 24 axis-sequence conventions, plus named and derived conventions
//! used in aeronautics and texture analysis.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`axis`] | Axis codes: inner axis, parity, repetition, frame |
//! | [`decompose`] | Shoemake decomposition and composition |
//! | [`convention`] | Descriptors, reparameterizations, chain resolution |
//! | [`registry`] | Case-insensitive lookup, standard conventions, builder |
//! | [`euler_angles`] | [`EulerAngles`], an angle triple bound to a convention |
//! | [`options`] | [`DecomposeOptions`] tolerances |
//!
//! # Quick Start
//!
//! ```
//! use rotation_euler::{resolve_convention, EulerAngles, Quaternion};
//! use std::f64::consts::FRAC_PI_2;
//!
//! let bunge = resolve_convention("Bunge").unwrap();
//! let euler = EulerAngles::new([0.0, 0.0, FRAC_PI_2], bunge);
//!
//! let q = euler.to_quaternion().unwrap();
//! let half_turn = EulerAngles::from_quaternion_in(&(q * q), bunge).unwrap();
//! assert!((half_turn.angles()[2].abs() - std::f64::consts::PI).abs() < 1e-12);
//! ```
//!
//! # Design Notes
//!
//! - **One algorithm**: every base convention goes through the same decomposer, selected
//!   by its [`AxisCode`].
//! - **Matrix as pivot**: convention changes always round-trip through a rotation
//!   matrix, never through angle shortcuts.
//! - **Data-oriented registry**: derived conventions name their parent by
//!   [`ConventionId`]; the registry is immutable after construction.

pub mod axis;
pub mod convention;
pub mod decompose;
pub mod euler_angles;
pub mod options;
pub mod registry;

pub use axis::{Axis, AxisCode, Frame, Parity};
pub use convention::{
    AffineAngle, Convention, ConventionDescriptor, ConventionId, ConventionKind,
    Reparameterization,
};
pub use decompose::{compose, decompose, decompose_with};
pub use euler_angles::EulerAngles;
pub use options::DecomposeOptions;
pub use registry::{
    default_convention, resolve_convention, ConventionRegistry, ConventionRegistryBuilder,
    DEFAULT_CONVENTION,
};

pub use rotation_core::{Quaternion, RotationError, RotationMatrix3, RotationResult};
