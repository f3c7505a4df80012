//! Billing periods
//!
//! This module provides the calendar-month billing period that keys usage
//! counters. Counters reset by construction at a period boundary: a new
//! month is a new key, so the first action in a month starts from zero.

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

use crate::error::MeteringError;

/// A calendar-month billing period (UTC).
///
/// Periods are ordered chronologically and serialize as `"YYYY-MM"`.
///
/// Callers that both check and record usage within one request should
/// derive the period once and pass it to both operations, so a request
/// straddling a month boundary is charged consistently to the period it
/// observed at check time.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use xcoa_metering::BillingPeriod;
///
/// let ts = Utc.with_ymd_and_hms(2026, 8, 6, 12, 0, 0).unwrap();
/// let period = BillingPeriod::containing(ts);
/// assert_eq!(period.as_string(), "2026-08");
/// assert_eq!(period.next().as_string(), "2026-09");
/// ```
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
pub struct BillingPeriod {
    /// Calendar year
    pub year: i32,

    /// Calendar month (1-12)
    pub month: u32,
}

impl BillingPeriod {
    /// The period containing the current instant.
    pub fn current() -> Self {
        Self::containing(Utc::now())
    }

    /// The period containing the given instant.
    pub fn containing(instant: DateTime<Utc>) -> Self {
        Self {
            year: instant.year(),
            month: instant.month(),
        }
    }

    /// The period immediately after this one.
    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// The period immediately before this one.
    pub fn prev(&self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// Get the `"YYYY-MM"` representation of the period.
    pub fn as_string(&self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }

    /// Parse a period from its `"YYYY-MM"` representation.
    ///
    /// # Arguments
    ///
    /// * `s` - String to parse
    ///
    /// # Returns
    ///
    /// The parsed period, or `MeteringError::InvalidPeriod`
    pub fn parse(s: &str) -> Result<Self, MeteringError> {
        let invalid = || MeteringError::InvalidPeriod(s.to_string());

        let (year, month) = s.split_once('-').ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        if !(1..=12).contains(&month) {
            return Err(invalid());
        }

        Ok(Self { year, month })
    }
}

impl std::fmt::Display for BillingPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}
