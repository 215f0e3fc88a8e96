//! Entity trait: identity + continuity across state changes.

use crate::stability::Stability;

/// Entity marker + minimal interface.
///
/// Every tracked object has an identity and a bounded stability reading. Two
/// entities are the same entity when they share an identity, even if their
/// stability differs.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;

    /// Returns the current (always validated) stability.
    fn stability(&self) -> Stability;
}
