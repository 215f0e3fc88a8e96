//! The shared object base and the tagged object type held by the registry.

use serde::{Deserialize, Serialize};

use qchaos_core::{DomainError, DomainResult, Entity, ObjectId, Stability};

use crate::capability::{Cooldown, CooldownOutcome};
use crate::procedure::AnalysisProcedure;
use crate::storage::StorageSite;
use crate::tier::{Assessment, Tier};

/// State every object kind carries: identity plus a validated stability.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectBase {
    id: ObjectId,
    stability: Stability,
}

impl ObjectBase {
    pub fn new(id: impl Into<ObjectId>) -> Self {
        Self {
            id: id.into(),
            stability: Stability::DEFAULT,
        }
    }

    pub fn id(&self) -> &ObjectId {
        &self.id
    }

    pub fn set_id(&mut self, id: impl Into<ObjectId>) {
        self.id = id.into();
    }

    pub fn stability(&self) -> Stability {
        self.stability
    }

    /// Stores `value` if it lies in `[0, 100]`; otherwise keeps the previous value.
    pub fn set_stability(&mut self, value: f64) -> DomainResult<()> {
        self.stability = Stability::new(value)?;
        Ok(())
    }

    pub(crate) fn replace_stability(&mut self, stability: Stability) {
        self.stability = stability;
    }

    pub fn describe(&self) -> String {
        format!("Object ID: {}, Stability: {}%", self.id, self.stability)
    }
}

/// Kind tag, without the payload.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectKind {
    StorageSite,
    AnalysisProcedure,
}

impl ObjectKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ObjectKind::StorageSite => "storage site",
            ObjectKind::AnalysisProcedure => "analysis procedure",
        }
    }
}

impl core::fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A tracked object of either kind.
#[derive(Debug, Clone, PartialEq)]
pub enum QuantumObject {
    StorageSite(StorageSite),
    AnalysisProcedure(AnalysisProcedure),
}

impl QuantumObject {
    pub fn storage_site(id: impl Into<ObjectId>, supervisor: impl Into<String>) -> Self {
        Self::StorageSite(StorageSite::new(id, supervisor))
    }

    pub fn analysis_procedure(id: impl Into<ObjectId>, analysis_kind: impl Into<String>) -> Self {
        Self::AnalysisProcedure(AnalysisProcedure::new(id, analysis_kind))
    }

    /// Builder-style variant of [`QuantumObject::set_stability`].
    pub fn with_stability(mut self, value: f64) -> DomainResult<Self> {
        self.set_stability(value)?;
        Ok(self)
    }

    pub fn kind(&self) -> ObjectKind {
        match self {
            Self::StorageSite(_) => ObjectKind::StorageSite,
            Self::AnalysisProcedure(_) => ObjectKind::AnalysisProcedure,
        }
    }

    pub fn base(&self) -> &ObjectBase {
        match self {
            Self::StorageSite(s) => s.base(),
            Self::AnalysisProcedure(p) => p.base(),
        }
    }

    pub fn set_stability(&mut self, value: f64) -> DomainResult<()> {
        match self {
            Self::StorageSite(s) => s.set_stability(value),
            Self::AnalysisProcedure(p) => p.set_stability(value),
        }
    }

    pub fn classify(&self) -> Tier {
        match self {
            Self::StorageSite(s) => s.classify(),
            Self::AnalysisProcedure(p) => p.classify(),
        }
    }

    pub fn assess(&self) -> Assessment {
        Assessment {
            id: self.base().id().clone(),
            kind: self.kind(),
            tier: self.classify(),
            stability: self.base().stability(),
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Self::StorageSite(s) => s.describe(),
            Self::AnalysisProcedure(p) => p.describe(),
        }
    }

    /// The cooldown capability, if this kind has one.
    pub fn cooldown_capability(&mut self) -> Option<&mut dyn Cooldown> {
        match self {
            Self::StorageSite(s) => Some(s),
            Self::AnalysisProcedure(_) => None,
        }
    }

    pub fn has_cooldown_capability(&self) -> bool {
        matches!(self, Self::StorageSite(_))
    }

    pub fn emergency_cooldown(&mut self) -> DomainResult<CooldownOutcome> {
        let id = self.base().id().clone();
        match self.cooldown_capability() {
            Some(target) => Ok(target.emergency_cooldown()),
            None => Err(DomainError::missing_capability(format!(
                "{id} does not support emergency cooldown"
            ))),
        }
    }

    pub fn as_storage_site(&self) -> Option<&StorageSite> {
        match self {
            Self::StorageSite(s) => Some(s),
            Self::AnalysisProcedure(_) => None,
        }
    }

    pub fn as_analysis_procedure_mut(&mut self) -> Option<&mut AnalysisProcedure> {
        match self {
            Self::AnalysisProcedure(p) => Some(p),
            Self::StorageSite(_) => None,
        }
    }
}

impl Entity for QuantumObject {
    type Id = ObjectId;

    fn id(&self) -> &Self::Id {
        self.base().id()
    }

    fn stability(&self) -> Stability {
        self.base().stability()
    }
}

impl From<StorageSite> for QuantumObject {
    fn from(value: StorageSite) -> Self {
        Self::StorageSite(value)
    }
}

impl From<AnalysisProcedure> for QuantumObject {
    fn from(value: AnalysisProcedure) -> Self {
        Self::AnalysisProcedure(value)
    }
}

// Free-function surface for the operator shell.

pub fn new_storage_site(id: impl Into<ObjectId>, supervisor: impl Into<String>) -> QuantumObject {
    QuantumObject::storage_site(id, supervisor)
}

pub fn new_analysis_procedure(
    id: impl Into<ObjectId>,
    analysis_kind: impl Into<String>,
) -> QuantumObject {
    QuantumObject::analysis_procedure(id, analysis_kind)
}

pub fn set_stability(object: &mut QuantumObject, value: f64) -> DomainResult<()> {
    object.set_stability(value)
}

pub fn classify(object: &QuantumObject) -> Tier {
    object.classify()
}

pub fn describe(object: &QuantumObject) -> String {
    object.describe()
}

pub fn has_cooldown_capability(object: &QuantumObject) -> bool {
    object.has_cooldown_capability()
}

pub fn emergency_cooldown(object: &mut QuantumObject) -> DomainResult<CooldownOutcome> {
    object.emergency_cooldown()
}
