//! Convention registry.
//!
//! A [`ConventionRegistry`] maps case-insensitive names and aliases to convention
//! descriptors. It is assembled once through a [`ConventionRegistryBuilder`] and is
//! read-only afterwards, so a single instance can be shared across threads without
//! locking.
//!
//! The process-wide registry returned by [`ConventionRegistry::global`] contains:
//!
//! | Group | Conventions |
//! |-------|-------------|
//! | Base, static frame | `XYZs`, `XYXs`, `XZYs`, `XZXs`, `YZXs`, `YZYs`, `YXZs`, `YXYs`, `ZXYs`, `ZXZs`, `ZYXs`, `ZYZs` |
//! | Base, rotating frame | `ZYXr`, `XYXr`, `YZXr`, `XZXr`, `XZYr`, `YZYr`, `ZXYr`, `YXYr`, `YXZr`, `ZXZr`, `XYZr`, `ZYZr` |
//! | Named | Nautical (ZYXr), Bunge (ZXZr), Matthies (ZYZr), Roe (ZYZr) |
//! | Derived | Kocks (from Roe), Canova (from Roe) |
//!
//! The default convention is `XYZs`.
//!
//! Custom registries start from [`ConventionRegistry::builder`] (empty) or
//! [`ConventionRegistry::standard_builder`] (pre-populated):
//!
//! ```
//! use rotation_euler::{AffineAngle, ConventionRegistry, Reparameterization};
//!
//! let mut builder = ConventionRegistry::standard_builder().unwrap();
//! builder
//!     .register_derived(
//!         "Shifted Bunge",
//!         "bunge",
//!         Reparameterization::Affine([
//!             AffineAngle::new(1.0, 0.5),
//!             AffineAngle::IDENTITY,
//!             AffineAngle::IDENTITY,
//!         ]),
//!     )
//!     .unwrap();
//! let registry = builder.build();
//! let shifted = registry.resolve("shifted bunge").unwrap();
//! assert_eq!(shifted.parent().unwrap().unwrap().name(), "Bunge");
//! ```

use std::collections::HashMap;

use once_cell::sync::Lazy;
use rotation_core::constants::{HALF_PI, PI, THREE_HALVES_PI};
use rotation_core::{RotationError, RotationResult};
use tracing::debug;

use crate::axis::{AxisCode, Frame};
use crate::convention::{
    AffineAngle, Convention, ConventionDescriptor, ConventionId, ConventionKind,
    Reparameterization,
};

/// Name of the convention used when none is specified.
pub const DEFAULT_CONVENTION: &str = "XYZs";

/// `(inner axis, parity, repetition, frame)` for every base convention, in table order.
const BASE_CODES: [(u8, u8, u8, u8); 24] = [
    (0, 0, 0, 0),
    (0, 0, 1, 0),
    (0, 1, 0, 0),
    (0, 1, 1, 0),
    (1, 0, 0, 0),
    (1, 0, 1, 0),
    (1, 1, 0, 0),
    (1, 1, 1, 0),
    (2, 0, 0, 0),
    (2, 0, 1, 0),
    (2, 1, 0, 0),
    (2, 1, 1, 0),
    (0, 0, 0, 1),
    (0, 0, 1, 1),
    (0, 1, 0, 1),
    (0, 1, 1, 1),
    (1, 0, 0, 1),
    (1, 0, 1, 1),
    (1, 1, 0, 1),
    (1, 1, 1, 1),
    (2, 0, 0, 1),
    (2, 0, 1, 1),
    (2, 1, 0, 1),
    (2, 1, 1, 1),
];

struct NamedEntry {
    name: &'static str,
    aliases: &'static [&'static str],
    base: &'static str,
    angle_labels: [&'static str; 3],
    axis_labels: [&'static str; 3],
    description: &'static str,
}

const NAMED: [NamedEntry; 4] = [
    NamedEntry {
        name: "Nautical",
        aliases: &["nautical", "aircraft", "cardan"],
        base: "ZYXr",
        angle_labels: ["yaw", "pitch", "roll"],
        axis_labels: ["roll", "pitch", "yaw"],
        description: "Nautical (yaw pitch roll) ZYXr convention",
    },
    NamedEntry {
        name: "Bunge",
        aliases: &["bunge"],
        base: "ZXZr",
        angle_labels: ["phi1", "Phi", "phi2"],
        axis_labels: ["X", "Y", "Z"],
        description: "Bunge (phi1 Phi phi2) ZXZr convention",
    },
    NamedEntry {
        name: "Matthies",
        aliases: &["matthies", "nfft", "abg"],
        base: "ZYZr",
        angle_labels: ["alpha", "beta", "gamma"],
        axis_labels: ["X", "Y", "Z"],
        description: "Matthies (alpha beta gamma) ZYZr convention",
    },
    NamedEntry {
        name: "Roe",
        aliases: &["roe"],
        base: "ZYZr",
        angle_labels: ["Psi", "Theta", "Phi"],
        axis_labels: ["RD", "TD", "ND"],
        description: "Roe (Psi, Theta, Phi) RD,TD,ND convention (ZYZr)",
    },
];

struct DerivedEntry {
    name: &'static str,
    aliases: &'static [&'static str],
    parent: &'static str,
    from_parent: [AffineAngle; 3],
    angle_labels: [&'static str; 3],
    description: &'static str,
}

const DERIVED: [DerivedEntry; 2] = [
    DerivedEntry {
        name: "Kocks",
        aliases: &["kocks"],
        parent: "Roe",
        from_parent: [
            AffineAngle::IDENTITY,
            AffineAngle::IDENTITY,
            AffineAngle::reflect(PI),
        ],
        angle_labels: ["Psi", "Theta", "phi"],
        description: "Kocks (Psi Theta phi) convention",
    },
    DerivedEntry {
        name: "Canova",
        aliases: &["canova"],
        parent: "Roe",
        from_parent: [
            AffineAngle::reflect(HALF_PI),
            AffineAngle::IDENTITY,
            AffineAngle::reflect(THREE_HALVES_PI),
        ],
        angle_labels: ["omega", "Theta", "phi"],
        description: "Canova (omega, Theta, phi) convention",
    },
];

/// Read-only lookup table of conventions.
#[derive(Debug, Clone)]
pub struct ConventionRegistry {
    conventions: Vec<ConventionDescriptor>,
    aliases: HashMap<String, ConventionId>,
    default: Option<ConventionId>,
}

/// Accumulates descriptors for a [`ConventionRegistry`].
#[derive(Debug, Clone, Default)]
pub struct ConventionRegistryBuilder {
    conventions: Vec<ConventionDescriptor>,
    aliases: HashMap<String, ConventionId>,
    default: Option<ConventionId>,
}

impl ConventionRegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `descriptor` and returns its id.
    ///
    /// Fails without modifying the builder if any of its lookup keys is already taken,
    /// if a derived descriptor points at an id this builder has not issued, or if an
    /// affine reparameterization has a zero scale.
    pub fn register(&mut self, descriptor: ConventionDescriptor) -> RotationResult<ConventionId> {
        if let ConventionKind::Derived {
            parent,
            reparameterization,
        } = descriptor.kind()
        {
            if parent.index() >= self.conventions.len() {
                return Err(RotationError::unknown_convention(&format!(
                    "#{}",
                    parent.index()
                )));
            }
            reparameterization.validate(descriptor.name())?;
        }

        let keys = descriptor.lookup_keys();
        if let Some(taken) = keys.iter().find(|key| self.aliases.contains_key(*key)) {
            return Err(RotationError::duplicate_convention(taken));
        }

        let id = ConventionId(self.conventions.len());
        for key in keys {
            self.aliases.insert(key, id);
        }
        self.conventions.push(descriptor);
        Ok(id)
    }

    /// Registers a base convention with generic labels.
    pub fn register_base(&mut self, name: &str, code: AxisCode) -> RotationResult<ConventionId> {
        self.register(ConventionDescriptor::base(name, code))
    }

    /// Registers a derived convention on the already registered `parent` (any alias).
    pub fn register_derived(
        &mut self,
        name: &str,
        parent: &str,
        reparameterization: Reparameterization,
    ) -> RotationResult<ConventionId> {
        let parent_id = self.id_of(parent)?;
        let labels = self.conventions[parent_id.index()].axis_labels();
        let descriptor = ConventionDescriptor::derived(name, parent_id, reparameterization)
            .with_axis_labels(labels);
        self.register(descriptor)
    }

    /// Id of an already registered convention, by name or alias.
    pub fn id_of(&self, name: &str) -> RotationResult<ConventionId> {
        self.aliases
            .get(&name.to_lowercase())
            .copied()
            .ok_or_else(|| RotationError::unknown_convention(name))
    }

    /// Selects the convention returned by [`ConventionRegistry::default_convention`].
    pub fn default_convention(&mut self, name: &str) -> RotationResult<&mut Self> {
        self.default = Some(self.id_of(name)?);
        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.conventions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conventions.is_empty()
    }

    pub fn build(self) -> ConventionRegistry {
        ConventionRegistry {
            conventions: self.conventions,
            aliases: self.aliases,
            default: self.default,
        }
    }
}

static GLOBAL: Lazy<ConventionRegistry> = Lazy::new(|| {
    let registry = ConventionRegistry::standard().unwrap();
    debug!(
        conventions = registry.len(),
        aliases = registry.aliases.len(),
        "built convention registry"
    );
    registry
});

impl ConventionRegistry {
    /// Empty builder.
    pub fn builder() -> ConventionRegistryBuilder {
        ConventionRegistryBuilder::new()
    }

    /// Builder holding every standard convention, ready for additions.
    pub fn standard_builder() -> RotationResult<ConventionRegistryBuilder> {
        Self::populate_standard(ConventionRegistryBuilder::new())
    }

    /// Builds a fresh registry with the standard conventions.
    pub fn standard() -> RotationResult<Self> {
        Ok(Self::standard_builder()?.build())
    }

    fn populate_standard(
        mut builder: ConventionRegistryBuilder,
    ) -> RotationResult<ConventionRegistryBuilder> {
        for tuple in BASE_CODES {
            let code = AxisCode::from_tuple(tuple)?;
            let name = code.canonical_name();
            let [a, b, c] = code.axis_sequence();
            let prefixed = format!("{}{}{}{}", code.frame.suffix(), a, b, c);
            let frame = match code.frame {
                Frame::Static => "static",
                Frame::Rotating => "rotating",
            };
            let descriptor = ConventionDescriptor::base(&name, code)
                .with_aliases(&[prefixed.as_str()])
                .with_description(&format!("{a}{b}{c} {frame} frame convention"));
            builder.register(descriptor)?;
        }

        for entry in &NAMED {
            let base = builder.id_of(entry.base)?;
            let ConventionKind::Base(code) = *builder.conventions[base.index()].kind() else {
                return Err(RotationError::invalid_convention(
                    entry.name,
                    "named conventions must relabel a base convention",
                ));
            };
            let descriptor = ConventionDescriptor::base(entry.name, code)
                .with_aliases(entry.aliases)
                .with_angle_labels(entry.angle_labels)
                .with_axis_labels(entry.axis_labels)
                .with_description(entry.description);
            builder.register(descriptor)?;
        }

        for entry in &DERIVED {
            let parent = builder.id_of(entry.parent)?;
            let axis_labels = builder.conventions[parent.index()].axis_labels();
            let descriptor = ConventionDescriptor::derived(
                entry.name,
                parent,
                Reparameterization::Affine(entry.from_parent),
            )
            .with_aliases(entry.aliases)
            .with_angle_labels(entry.angle_labels)
            .with_axis_labels(axis_labels)
            .with_description(entry.description);
            builder.register(descriptor)?;
        }

        builder.default_convention(DEFAULT_CONVENTION)?;
        Ok(builder)
    }

    /// The lazily built process-wide registry of standard conventions.
    pub fn global() -> &'static ConventionRegistry {
        &GLOBAL
    }

    /// Looks up a convention by name or alias, ignoring case.
    pub fn resolve(&self, name: &str) -> RotationResult<Convention<'_>> {
        self.aliases
            .get(&name.to_lowercase())
            .map(|&id| Convention::new(self, id))
            .ok_or_else(|| RotationError::unknown_convention(name))
    }

    /// The configured default convention.
    pub fn default_convention(&self) -> RotationResult<Convention<'_>> {
        self.default
            .map(|id| Convention::new(self, id))
            .ok_or_else(|| RotationError::unknown_convention("<default>"))
    }

    pub fn get(&self, id: ConventionId) -> Option<Convention<'_>> {
        (id.index() < self.conventions.len()).then(|| Convention::new(self, id))
    }

    /// Descriptor for an id issued by this registry.
    ///
    /// # Panics
    ///
    /// If `id` was issued by a different registry with more entries.
    pub fn descriptor(&self, id: ConventionId) -> &ConventionDescriptor {
        &self.conventions[id.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = Convention<'_>> + '_ {
        (0..self.conventions.len()).map(move |index| Convention::new(self, ConventionId(index)))
    }

    /// Primary names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.conventions.iter().map(ConventionDescriptor::name)
    }

    pub fn len(&self) -> usize {
        self.conventions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conventions.is_empty()
    }
}

/// Resolves `name` in the global registry.
///
/// ```
/// use rotation_euler::resolve_convention;
///
/// let roe = resolve_convention("ROE").unwrap();
/// assert_eq!(roe.angle_labels(), ["Psi", "Theta", "Phi"]);
/// assert!(resolve_convention("not_a_convention").is_err());
/// ```
pub fn resolve_convention(name: &str) -> RotationResult<Convention<'static>> {
    ConventionRegistry::global().resolve(name)
}

/// The default convention of the global registry (`XYZs`).
pub fn default_convention() -> RotationResult<Convention<'static>> {
    ConventionRegistry::global().default_convention()
}
