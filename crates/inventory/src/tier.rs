//! Risk tiers and per-object assessments.

use serde::{Deserialize, Serialize};

use qchaos_core::{ObjectId, Stability};

use crate::object::ObjectKind;

/// Classification label derived from stability.
///
/// Storage sites use `Critical`/`ElevatedRisk`/`Safe`, analysis procedures use
/// `Critical`/`Unstable`/`Stable`. The bands differ per kind.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tier {
    Critical,
    ElevatedRisk,
    Safe,
    Unstable,
    Stable,
}

impl Tier {
    pub fn as_str(self) -> &'static str {
        match self {
            Tier::Critical => "critical",
            Tier::ElevatedRisk => "elevated-risk",
            Tier::Safe => "safe",
            Tier::Unstable => "unstable",
            Tier::Stable => "stable",
        }
    }

    pub fn is_critical(self) -> bool {
        self == Tier::Critical
    }
}

impl core::fmt::Display for Tier {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classification judgment for one object, ready to be shown to the operator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    pub id: ObjectId,
    pub kind: ObjectKind,
    pub tier: Tier,
    pub stability: Stability,
}

impl core::fmt::Display for Assessment {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let (id, s) = (&self.id, self.stability);
        match (self.kind, self.tier) {
            (ObjectKind::StorageSite, Tier::Critical) => write!(
                f,
                "WARNING: {id} storage site is at critical level! Stability: {s}%"
            ),
            (ObjectKind::StorageSite, Tier::ElevatedRisk) => write!(
                f,
                "CAUTION: {id} storage site is at elevated risk. Stability: {s}%"
            ),
            (ObjectKind::StorageSite, Tier::Safe) => write!(
                f,
                "SAFE: {id} storage site is at a safe level. Stability: {s}%"
            ),
            (ObjectKind::AnalysisProcedure, Tier::Critical) => write!(
                f,
                "CRITICAL: {id} procedure is at risk of collapse! Stability: {s}%"
            ),
            (ObjectKind::AnalysisProcedure, Tier::Unstable) => {
                write!(f, "WARNING: {id} procedure is unstable. Stability: {s}%")
            }
            (ObjectKind::AnalysisProcedure, Tier::Stable) => write!(
                f,
                "STABLE: {id} procedure is operating normally. Stability: {s}%"
            ),
            // Combinations classification never produces.
            (_, tier) => write!(f, "{id}: {tier}. Stability: {s}%"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assessment(kind: ObjectKind, tier: Tier, s: f64) -> Assessment {
        Assessment {
            id: ObjectId::from("X-1"),
            kind,
            tier,
            stability: Stability::new(s).unwrap(),
        }
    }

    #[test]
    fn labels_are_kebab_case() {
        assert_eq!(Tier::ElevatedRisk.to_string(), "elevated-risk");
        assert_eq!(
            serde_json::to_string(&Tier::ElevatedRisk).unwrap(),
            "\"elevated-risk\""
        );
    }

    #[test]
    fn storage_messages() {
        assert_eq!(
            assessment(ObjectKind::StorageSite, Tier::Critical, 25.0).to_string(),
            "WARNING: X-1 storage site is at critical level! Stability: 25%"
        );
        assert_eq!(
            assessment(ObjectKind::StorageSite, Tier::Safe, 75.0).to_string(),
            "SAFE: X-1 storage site is at a safe level. Stability: 75%"
        );
    }

    #[test]
    fn procedure_messages() {
        assert_eq!(
            assessment(ObjectKind::AnalysisProcedure, Tier::Critical, 15.0).to_string(),
            "CRITICAL: X-1 procedure is at risk of collapse! Stability: 15%"
        );
        assert_eq!(
            assessment(ObjectKind::AnalysisProcedure, Tier::Stable, 80.0).to_string(),
            "STABLE: X-1 procedure is operating normally. Stability: 80%"
        );
    }
}
