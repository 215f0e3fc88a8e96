//! Bounded stability reading.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

/// A stability reading in the closed interval `[0, 100]`.
///
/// The only way to obtain one is through [`Stability::new`] (or the clamping
/// [`Stability::saturating_add`]), so holding a `Stability` proves the value
/// is in range.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Stability(f64);

impl Stability {
    pub const MIN: f64 = 0.0;
    pub const MAX: f64 = 100.0;

    /// Initial stability of every newly created object.
    pub const DEFAULT: Stability = Stability(50.0);

    pub fn new(value: f64) -> DomainResult<Self> {
        // NaN fails both comparisons.
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(DomainError::validation(
                "stability must be between 0 and 100",
            ))
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Adds `delta` and clamps the result into range. Never fails.
    pub fn saturating_add(self, delta: f64) -> Self {
        let raw = self.0 + delta;
        if raw.is_nan() {
            return self;
        }
        Self(raw.clamp(Self::MIN, Self::MAX))
    }
}

impl Default for Stability {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl ValueObject for Stability {}

impl TryFrom<f64> for Stability {
    type Error = DomainError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Stability> for f64 {
    fn from(value: Stability) -> Self {
        value.0
    }
}

impl core::fmt::Display for Stability {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}
