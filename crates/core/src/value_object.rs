//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have no identity; two instances holding the same values are
/// equal. They are immutable: "changing" one means building a new one, which
/// re-runs whatever validation its constructor performs.
///
/// ```ignore
/// let a = Stability::new(40.0)?;
/// let b = Stability::new(40.0)?;
/// assert_eq!(a, b);
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
