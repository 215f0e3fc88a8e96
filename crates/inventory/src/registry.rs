//! Ordered, append-only registry of tracked objects.

use serde::{Deserialize, Serialize};

use qchaos_core::{DomainResult, Entity};

use crate::capability::CooldownOutcome;
use crate::object::QuantumObject;
use crate::tier::Assessment;

/// Global tally: below this an object counts as critical, whatever its kind.
pub const TALLY_CRITICAL_BELOW: f64 = 30.0;
/// Global tally: at or above this an object counts as safe, whatever its kind.
pub const TALLY_SAFE_FROM: f64 = 60.0;

/// Result of a collection-wide report.
///
/// `Empty` means the registry has no members, which the shell reports
/// differently from a report that merely has nothing to say.
#[derive(Debug, Clone, PartialEq)]
pub enum Listing<T> {
    Empty,
    Entries(Vec<T>),
}

impl<T> Listing<T> {
    pub fn is_empty(&self) -> bool {
        matches!(self, Listing::Empty)
    }

    pub fn entries(&self) -> &[T] {
        match self {
            Listing::Empty => &[],
            Listing::Entries(v) => v,
        }
    }
}

/// Result of cooling every eligible object.
#[derive(Debug, Clone, PartialEq)]
pub enum CooldownSweep {
    EmptyRegistry,
    /// Members exist but none supports cooldown.
    NoEligible,
    Cooled(Vec<CooldownOutcome>),
}

/// Three disjoint buckets over current stability.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    pub total: usize,
    pub critical: usize,
    pub moderate: usize,
    pub safe: usize,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectRegistry {
    objects: Vec<QuantumObject>,
}

impl ObjectRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `object` and hands back a handle to the stored copy.
    pub fn add(&mut self, object: QuantumObject) -> &mut QuantumObject {
        tracing::debug!(
            id = %object.id(),
            kind = %object.kind(),
            stability = object.stability().value(),
            "object added"
        );
        self.objects.push(object);
        let last = self.objects.len() - 1;
        &mut self.objects[last]
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&QuantumObject> {
        self.objects.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &QuantumObject> {
        self.objects.iter()
    }

    pub fn list_all(&self) -> Listing<String> {
        self.report(QuantumObject::describe)
    }

    pub fn classify_all(&self) -> Listing<Assessment> {
        self.report(QuantumObject::assess)
    }

    fn report<T>(&self, f: impl Fn(&QuantumObject) -> T) -> Listing<T> {
        if self.objects.is_empty() {
            Listing::Empty
        } else {
            Listing::Entries(self.objects.iter().map(f).collect())
        }
    }

    pub fn run_cooldown_on_all_eligible(&mut self) -> CooldownSweep {
        if self.objects.is_empty() {
            return CooldownSweep::EmptyRegistry;
        }

        let outcomes: Vec<CooldownOutcome> = self
            .objects
            .iter_mut()
            .filter_map(|o| o.cooldown_capability().map(|c| c.emergency_cooldown()))
            .collect();

        if outcomes.is_empty() {
            tracing::debug!("no object supports emergency cooldown");
            return CooldownSweep::NoEligible;
        }

        for o in &outcomes {
            tracing::info!(
                id = %o.id,
                before = o.before.value(),
                after = o.after.value(),
                "emergency cooldown applied"
            );
        }
        CooldownSweep::Cooled(outcomes)
    }

    /// Counts with the fixed 30/60 thresholds, independent of each kind's own bands.
    pub fn tally(&self) -> Tally {
        let total = self.objects.len();
        let critical = self
            .iter()
            .filter(|o| o.stability().value() < TALLY_CRITICAL_BELOW)
            .count();
        let safe = self
            .iter()
            .filter(|o| o.stability().value() >= TALLY_SAFE_FROM)
            .count();
        Tally {
            total,
            critical,
            moderate: total - critical - safe,
            safe,
        }
    }

    /// The four-object demonstration inventory.
    pub fn seed_demo(&mut self) -> DomainResult<()> {
        self.add(QuantumObject::storage_site("AMB-001", "Ahmet Yilmaz"))
            .set_stability(25.0)?;
        self.add(QuantumObject::storage_site("AMB-002", "Ayse Demir"))
            .set_stability(75.0)?;
        self.add(QuantumObject::analysis_procedure("MET-001", "Cooling Analysis"))
            .set_stability(15.0)?;
        self.add(QuantumObject::analysis_procedure("MET-002", "Stability Check"))
            .set_stability(80.0)?;
        Ok(())
    }
}

impl<'a> IntoIterator for &'a ObjectRegistry {
    type Item = &'a QuantumObject;
    type IntoIter = core::slice::Iter<'a, QuantumObject>;

    fn into_iter(self) -> Self::IntoIter {
        self.objects.iter()
    }
}
