//! Storage sites: supervised objects that support emergency cooldown.

use qchaos_core::{DomainResult, Entity, ObjectId, Stability};

use crate::capability::{COOLDOWN_BOOST, Cooldown, CooldownOutcome};
use crate::object::ObjectBase;
use crate::tier::Tier;

/// Below this a storage site is critical.
pub const CRITICAL_BELOW: f64 = 30.0;
/// At or above this a storage site is safe.
pub const SAFE_FROM: f64 = 60.0;

#[derive(Debug, Clone, PartialEq)]
pub struct StorageSite {
    base: ObjectBase,
    supervisor: String,
}

impl StorageSite {
    pub fn new(id: impl Into<ObjectId>, supervisor: impl Into<String>) -> Self {
        Self {
            base: ObjectBase::new(id),
            supervisor: supervisor.into(),
        }
    }

    pub fn base(&self) -> &ObjectBase {
        &self.base
    }

    pub fn supervisor(&self) -> &str {
        &self.supervisor
    }

    pub fn set_supervisor(&mut self, supervisor: impl Into<String>) {
        self.supervisor = supervisor.into();
    }

    pub fn set_stability(&mut self, value: f64) -> DomainResult<()> {
        self.base.set_stability(value)
    }

    pub fn classify(&self) -> Tier {
        classify(self.base.stability().value())
    }

    pub fn describe(&self) -> String {
        format!("{}\nSupervisor: {}", self.base.describe(), self.supervisor)
    }
}

/// Storage-site bands: `< 30` critical, `< 60` elevated risk, otherwise safe.
pub fn classify(stability: f64) -> Tier {
    if stability < CRITICAL_BELOW {
        Tier::Critical
    } else if stability < SAFE_FROM {
        Tier::ElevatedRisk
    } else {
        Tier::Safe
    }
}

impl Cooldown for StorageSite {
    fn emergency_cooldown(&mut self) -> CooldownOutcome {
        let before = self.base.stability();
        let after = before.saturating_add(COOLDOWN_BOOST);
        self.base.replace_stability(after);
        CooldownOutcome {
            id: self.base.id().clone(),
            before,
            after,
        }
    }
}

impl Entity for StorageSite {
    type Id = ObjectId;

    fn id(&self) -> &Self::Id {
        self.base.id()
    }

    fn stability(&self) -> Stability {
        self.base.stability()
    }
}
