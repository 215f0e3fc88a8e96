//! Analysis procedures: monitored objects without a compensating action.

use qchaos_core::{DomainResult, Entity, ObjectId, Stability};

use crate::object::ObjectBase;
use crate::tier::Tier;

/// Below this a procedure is at risk of collapse.
pub const CRITICAL_BELOW: f64 = 20.0;
/// At or above this a procedure is stable.
pub const STABLE_FROM: f64 = 50.0;

#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisProcedure {
    base: ObjectBase,
    analysis_kind: String,
    monitoring_active: bool,
}

impl AnalysisProcedure {
    pub fn new(id: impl Into<ObjectId>, analysis_kind: impl Into<String>) -> Self {
        Self {
            base: ObjectBase::new(id),
            analysis_kind: analysis_kind.into(),
            monitoring_active: true,
        }
    }

    pub fn base(&self) -> &ObjectBase {
        &self.base
    }

    pub fn analysis_kind(&self) -> &str {
        &self.analysis_kind
    }

    pub fn set_analysis_kind(&mut self, analysis_kind: impl Into<String>) {
        self.analysis_kind = analysis_kind.into();
    }

    /// Display-only flag; no classification rule reads it.
    pub fn monitoring_active(&self) -> bool {
        self.monitoring_active
    }

    pub fn set_monitoring_active(&mut self, active: bool) {
        self.monitoring_active = active;
    }

    pub fn set_stability(&mut self, value: f64) -> DomainResult<()> {
        self.base.set_stability(value)
    }

    pub fn classify(&self) -> Tier {
        classify(self.base.stability().value())
    }

    pub fn describe(&self) -> String {
        format!(
            "{}\nAnalysis Kind: {}, Monitoring Active: {}",
            self.base.describe(),
            self.analysis_kind,
            self.monitoring_active
        )
    }
}

/// Procedure bands: `< 20` critical, `< 50` unstable, otherwise stable.
pub fn classify(stability: f64) -> Tier {
    if stability < CRITICAL_BELOW {
        Tier::Critical
    } else if stability < STABLE_FROM {
        Tier::Unstable
    } else {
        Tier::Stable
    }
}

impl Entity for AnalysisProcedure {
    type Id = ObjectId;

    fn id(&self) -> &Self::Id {
        self.base.id()
    }

    fn stability(&self) -> Stability {
        self.base.stability()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn procedure(s: f64) -> AnalysisProcedure {
        let mut p = AnalysisProcedure::new("MET-001", "Cooling Analysis");
        p.set_stability(s).unwrap();
        p
    }

    #[test]
    fn monitoring_defaults_to_active() {
        let mut p = AnalysisProcedure::new("MET-001", "Cooling Analysis");
        assert!(p.monitoring_active());
        p.set_monitoring_active(false);
        assert!(!p.monitoring_active());
    }

    #[test]
    fn boundaries_are_exact() {
        assert_eq!(procedure(19.999).classify(), Tier::Critical);
        assert_eq!(procedure(20.0).classify(), Tier::Unstable);
        assert_eq!(procedure(49.999).classify(), Tier::Unstable);
        assert_eq!(procedure(50.0).classify(), Tier::Stable);
        assert_eq!(procedure(100.0).classify(), Tier::Stable);
    }

    #[test]
    fn monitoring_flag_does_not_affect_tier() {
        let mut p = procedure(10.0);
        p.set_monitoring_active(false);
        assert_eq!(p.classify(), Tier::Critical);
    }

    #[test]
    fn describe_appends_kind_and_flag_after_base() {
        assert_eq!(
            procedure(15.0).describe(),
            "Object ID: MET-001, Stability: 15%\nAnalysis Kind: Cooling Analysis, Monitoring Active: true"
        );
    }

    proptest! {
        #[test]
        fn tiers_partition_the_range(v in 0.0f64..=100.0f64) {
            let expected = if v < 20.0 {
                Tier::Critical
            } else if v < 50.0 {
                Tier::Unstable
            } else {
                Tier::Stable
            };
            prop_assert_eq!(procedure(v).classify(), expected);
        }
    }
}
