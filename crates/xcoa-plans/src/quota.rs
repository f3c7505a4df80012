//! Quota representation for metered features
//!
//! A quota is either a finite monthly allowance or unlimited. Unlimited is
//! a distinct variant, never a sentinel integer, so it cannot be confused
//! with a large finite bound.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A monthly allowance for a metered feature.
///
/// Serialized as `u32 | null`, with `null` meaning unlimited, so the JSON
/// shape at the API boundary matches the documented `integer | unlimited`
/// contract.
///
/// # Examples
///
/// ```
/// use xcoa_plans::Quota;
///
/// let quota = Quota::Limited(30);
/// assert!(quota.allows(29));
/// assert!(!quota.allows(30));
/// assert_eq!(quota.remaining(29), Some(1));
///
/// assert!(Quota::Unlimited.allows(u64::MAX));
/// assert_eq!(Quota::Unlimited.remaining(u64::MAX), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quota {
    /// A finite monthly allowance.
    Limited(u32),

    /// No limit on usage.
    Unlimited,
}

impl Quota {
    /// Check whether one more action is allowed at the given usage count.
    ///
    /// # Arguments
    ///
    /// * `count` - Actions already consumed in the current period
    ///
    /// # Returns
    ///
    /// `true` if the count is below the limit, always `true` for unlimited
    pub fn allows(&self, count: u64) -> bool {
        match self {
            Quota::Limited(limit) => count < u64::from(*limit),
            Quota::Unlimited => true,
        }
    }

    /// Remaining allowance at the given usage count.
    ///
    /// # Returns
    ///
    /// `Some(max(limit - count, 0))` for a finite quota, `None` for unlimited
    pub fn remaining(&self, count: u64) -> Option<u64> {
        match self {
            Quota::Limited(limit) => Some(u64::from(*limit).saturating_sub(count)),
            Quota::Unlimited => None,
        }
    }

    /// Check if this quota is unlimited.
    pub fn is_unlimited(&self) -> bool {
        matches!(self, Quota::Unlimited)
    }

    /// Convert to an `Option`, with `None` meaning unlimited.
    pub fn as_option(&self) -> Option<u32> {
        match self {
            Quota::Limited(limit) => Some(*limit),
            Quota::Unlimited => None,
        }
    }

    /// Build from an `Option`, with `None` meaning unlimited.
    pub fn from_option(limit: Option<u32>) -> Self {
        match limit {
            Some(limit) => Quota::Limited(limit),
            None => Quota::Unlimited,
        }
    }
}

impl Serialize for Quota {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.as_option().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Quota {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<u32>::deserialize(deserializer).map(Quota::from_option)
    }
}
