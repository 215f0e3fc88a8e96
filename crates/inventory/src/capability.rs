//! Optional capabilities that only some object kinds expose.

use serde::{Deserialize, Serialize};

use qchaos_core::{ObjectId, Stability};

/// Stability added by one emergency cooldown.
pub const COOLDOWN_BOOST: f64 = 20.0;

/// Capability: the object can be cooled down in an emergency.
///
/// Implemented by storage sites only. Callers reach it through
/// [`QuantumObject::cooldown_capability`](crate::QuantumObject::cooldown_capability),
/// never by probing the runtime type.
pub trait Cooldown {
    /// Raises stability by [`COOLDOWN_BOOST`], saturating at 100. Always succeeds.
    fn emergency_cooldown(&mut self) -> CooldownOutcome;
}

/// What a single cooldown did.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CooldownOutcome {
    pub id: ObjectId,
    pub before: Stability,
    pub after: Stability,
}

impl CooldownOutcome {
    pub fn gained(&self) -> f64 {
        self.after.value() - self.before.value()
    }
}

impl core::fmt::Display for CooldownOutcome {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Emergency cooldown started for storage site {}!", self.id)
    }
}
