//! Quantum inventory domain module.
//!
//! Tracked objects, their risk tiers, the emergency cooldown capability and the
//! ordered registry the operator shell works against. Pure domain logic: no
//! terminal or storage concerns live here.

pub mod capability;
pub mod object;
pub mod procedure;
pub mod registry;
pub mod storage;
pub mod tier;

pub use capability::{Cooldown, CooldownOutcome};
pub use object::{
    ObjectBase, ObjectKind, QuantumObject, classify, describe, emergency_cooldown,
    has_cooldown_capability, new_analysis_procedure, new_storage_site, set_stability,
};
pub use procedure::AnalysisProcedure;
pub use registry::{CooldownSweep, Listing, ObjectRegistry, Tally};
pub use storage::StorageSite;
pub use tier::{Assessment, Tier};
