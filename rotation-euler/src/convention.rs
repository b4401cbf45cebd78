//! Convention descriptors and chain resolution.
//!
//! A convention is either a *base* convention, carrying an [`AxisCode`] the decomposer
//! understands directly, or a *derived* convention, carrying the id of a parent
//! convention and a [`Reparameterization`] between the two angle triples. Derived
//! conventions may themselves be parents, so resolving a triple to the decomposer's
//! terms means walking up the chain to the root:
//!
//! ```text
//!  Canova (omega, Theta, phi)
//!     │  to_parent: (pi/2 - omega, Theta, 3pi/2 - phi)
//!     ▼
//!  Roe (Psi, Theta, Phi)  ── Base(ZYZr)
//! ```
//!
//! Parents are referenced by [`ConventionId`], an index into the owning
//! [`ConventionRegistry`]. A parent must be registered before its children, so chains
//! are acyclic by construction.

use std::fmt;

use rotation_core::{RotationError, RotationResult};
use tracing::trace;

use crate::axis::AxisCode;
use crate::registry::ConventionRegistry;

/// Index of a convention inside its registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConventionId(pub(crate) usize);

impl ConventionId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// One component of an affine reparameterization: `derived = scale * parent + offset`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AffineAngle {
    pub scale: f64,
    pub offset: f64,
}

impl AffineAngle {
    pub const IDENTITY: AffineAngle = AffineAngle::new(1.0, 0.0);

    pub const fn new(scale: f64, offset: f64) -> Self {
        Self { scale, offset }
    }

    /// `offset - parent`, the reflection used by the texture-analysis conventions.
    pub const fn reflect(offset: f64) -> Self {
        Self::new(-1.0, offset)
    }

    #[inline]
    pub fn apply(self, parent: f64) -> f64 {
        self.scale * parent + self.offset
    }

    #[inline]
    pub fn invert(self, derived: f64) -> f64 {
        (derived - self.offset) / self.scale
    }
}

/// Angle map between a derived convention and its parent.
///
/// The two directions must be exact inverses over the angle domain. For
/// [`Affine`](Self::Affine) that holds by construction; for
/// [`Functions`](Self::Functions) it is the caller's contract.
#[derive(Debug, Clone, Copy)]
pub enum Reparameterization {
    /// Per-angle affine map, stored in the parent→derived direction.
    Affine([AffineAngle; 3]),
    /// Arbitrary pure functions.
    Functions {
        to_parent: fn([f64; 3]) -> [f64; 3],
        from_parent: fn([f64; 3]) -> [f64; 3],
    },
}

impl Reparameterization {
    /// Maps a triple of the derived convention to the parent convention.
    pub fn to_parent(&self, angles: [f64; 3]) -> [f64; 3] {
        match self {
            Self::Affine(maps) => [
                maps[0].invert(angles[0]),
                maps[1].invert(angles[1]),
                maps[2].invert(angles[2]),
            ],
            Self::Functions { to_parent, .. } => to_parent(angles),
        }
    }

    /// Maps a triple of the parent convention to the derived convention.
    pub fn from_parent(&self, angles: [f64; 3]) -> [f64; 3] {
        match self {
            Self::Affine(maps) => [
                maps[0].apply(angles[0]),
                maps[1].apply(angles[1]),
                maps[2].apply(angles[2]),
            ],
            Self::Functions { from_parent, .. } => from_parent(angles),
        }
    }

    pub(crate) fn validate(&self, name: &str) -> RotationResult<()> {
        if let Self::Affine(maps) = self {
            for map in maps {
                if map.scale == 0.0 || !map.scale.is_finite() || !map.offset.is_finite() {
                    return Err(RotationError::invalid_convention(
                        name,
                        "affine reparameterization needs a finite, non-zero scale and finite offset",
                    ));
                }
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
pub enum ConventionKind {
    Base(AxisCode),
    Derived {
        parent: ConventionId,
        reparameterization: Reparameterization,
    },
}

/// Immutable record describing one convention.
///
/// Labels and description are presentation data and take no part in any conversion.
#[derive(Debug, Clone)]
pub struct ConventionDescriptor {
    name: String,
    description: String,
    angle_labels: [String; 3],
    axis_labels: [String; 3],
    aliases: Vec<String>,
    kind: ConventionKind,
}

impl ConventionDescriptor {
    /// New descriptor with generic labels (`theta_1..3`, `X/Y/Z`) and no extra aliases.
    /// The name itself always resolves, case-insensitively.
    pub fn new(name: &str, kind: ConventionKind) -> Self {
        Self {
            name: name.to_string(),
            description: String::new(),
            angle_labels: ["theta_1", "theta_2", "theta_3"].map(String::from),
            axis_labels: ["X", "Y", "Z"].map(String::from),
            aliases: Vec::new(),
            kind,
        }
    }

    pub fn base(name: &str, code: AxisCode) -> Self {
        Self::new(name, ConventionKind::Base(code))
    }

    pub fn derived(name: &str, parent: ConventionId, reparameterization: Reparameterization) -> Self {
        Self::new(
            name,
            ConventionKind::Derived {
                parent,
                reparameterization,
            },
        )
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    pub fn with_angle_labels(mut self, labels: [&str; 3]) -> Self {
        self.angle_labels = labels.map(String::from);
        self
    }

    pub fn with_axis_labels(mut self, labels: [&str; 3]) -> Self {
        self.axis_labels = labels.map(String::from);
        self
    }

    pub fn with_aliases(mut self, aliases: &[&str]) -> Self {
        self.aliases.extend(aliases.iter().map(|a| a.to_string()));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn angle_labels(&self) -> [&str; 3] {
        [
            self.angle_labels[0].as_str(),
            self.angle_labels[1].as_str(),
            self.angle_labels[2].as_str(),
        ]
    }

    pub fn axis_labels(&self) -> [&str; 3] {
        [
            self.axis_labels[0].as_str(),
            self.axis_labels[1].as_str(),
            self.axis_labels[2].as_str(),
        ]
    }

    /// Extra lookup strings, as given (lookup lowercases them).
    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    pub fn kind(&self) -> &ConventionKind {
        &self.kind
    }

    pub fn is_derived(&self) -> bool {
        matches!(self.kind, ConventionKind::Derived { .. })
    }

    /// Every string that resolves to this descriptor, lowercased, name first.
    pub(crate) fn lookup_keys(&self) -> Vec<String> {
        let mut keys = vec![self.name.to_lowercase()];
        for alias in &self.aliases {
            let key = alias.to_lowercase();
            if !keys.contains(&key) {
                keys.push(key);
            }
        }
        keys
    }
}

/// Shared handle to a convention inside a registry.
///
/// Cheap to copy; many [`EulerAngles`](crate::EulerAngles) values can point at the same
/// convention. Two handles are equal when they refer to the same entry of the same
/// registry.
#[derive(Clone, Copy)]
pub struct Convention<'r> {
    registry: &'r ConventionRegistry,
    id: ConventionId,
}

impl<'r> Convention<'r> {
    pub(crate) fn new(registry: &'r ConventionRegistry, id: ConventionId) -> Self {
        Self { registry, id }
    }

    pub fn id(&self) -> ConventionId {
        self.id
    }

    pub fn registry(&self) -> &'r ConventionRegistry {
        self.registry
    }

    pub fn descriptor(&self) -> &'r ConventionDescriptor {
        self.registry.descriptor(self.id)
    }

    pub fn name(&self) -> &'r str {
        self.descriptor().name()
    }

    pub fn angle_labels(&self) -> [&'r str; 3] {
        self.descriptor().angle_labels()
    }

    pub fn axis_labels(&self) -> [&'r str; 3] {
        self.descriptor().axis_labels()
    }

    pub fn is_derived(&self) -> bool {
        self.descriptor().is_derived()
    }

    /// The parent convention, `None` for a base convention.
    pub fn parent(&self) -> RotationResult<Option<Convention<'r>>> {
        match self.descriptor().kind() {
            ConventionKind::Base(_) => Ok(None),
            ConventionKind::Derived { parent, .. } => self
                .registry
                .get(*parent)
                .map(Some)
                .ok_or_else(|| {
                    RotationError::unresolved_convention(self.name(), "parent not in registry")
                }),
        }
    }

    /// Derived conventions from `self` up to (excluding) the root, plus the root's code.
    fn lineage(&self) -> RotationResult<(Vec<Convention<'r>>, AxisCode)> {
        let mut chain = Vec::new();
        let mut current = *self;

        // Parents are registered before children, so a well-formed chain is shorter
        // than the registry.
        for _ in 0..=self.registry.len() {
            match current.descriptor().kind() {
                ConventionKind::Base(code) => return Ok((chain, *code)),
                ConventionKind::Derived { .. } => {
                    chain.push(current);
                    current = current.parent()?.ok_or_else(|| {
                        RotationError::unresolved_convention(self.name(), "derived without parent")
                    })?;
                }
            }
        }

        Err(RotationError::unresolved_convention(
            self.name(),
            "parent chain does not terminate",
        ))
    }

    /// Number of derived links between this convention and its base; 0 for a base.
    pub fn chain_depth(&self) -> RotationResult<usize> {
        Ok(self.lineage()?.0.len())
    }

    /// The base convention at the top of the chain.
    pub fn root(&self) -> RotationResult<Convention<'r>> {
        let (chain, _) = self.lineage()?;
        match chain.last() {
            None => Ok(*self),
            Some(top) => top
                .parent()?
                .ok_or_else(|| RotationError::unresolved_convention(self.name(), "missing root")),
        }
    }

    /// The axis code of the base convention at the top of the chain.
    pub fn root_axis_code(&self) -> RotationResult<AxisCode> {
        Ok(self.lineage()?.1)
    }

    /// Re-expresses `angles` (in this convention) in the root convention, applying each
    /// `to_parent` from this convention upwards.
    pub fn to_root(&self, angles: [f64; 3]) -> RotationResult<([f64; 3], AxisCode)> {
        let (chain, code) = self.lineage()?;
        let mut angles = angles;
        for link in &chain {
            if let ConventionKind::Derived {
                reparameterization, ..
            } = link.descriptor().kind()
            {
                angles = reparameterization.to_parent(angles);
            }
        }
        trace!(convention = self.name(), depth = chain.len(), root = %code, "resolved to root");
        Ok((angles, code))
    }

    /// Re-expresses root-convention `angles` in this convention, applying each
    /// `from_parent` from the root downwards.
    pub fn from_root(&self, angles: [f64; 3]) -> RotationResult<[f64; 3]> {
        let (chain, _) = self.lineage()?;
        let mut angles = angles;
        for link in chain.iter().rev() {
            if let ConventionKind::Derived {
                reparameterization, ..
            } = link.descriptor().kind()
            {
                angles = reparameterization.from_parent(angles);
            }
        }
        Ok(angles)
    }
}

impl PartialEq for Convention<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.registry, other.registry) && self.id == other.id
    }
}

impl fmt::Debug for Convention<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Convention")
            .field("name", &self.name())
            .field("id", &self.id)
            .finish()
    }
}

impl fmt::Display for Convention<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
