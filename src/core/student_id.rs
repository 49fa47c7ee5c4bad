//! Student identification - WHO a record refers to.
//!
//! StudentId is the sole basis for record identity: two records are the
//! same student iff their ids are equal, regardless of other fields.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// First id handed out by a fresh [`Roster`](crate::core::Roster).
///
/// Ids count up from here; the value is part of the public contract only in
/// the sense that ids are always >= this base.
pub const ID_BASE: u32 = 1000;

/// A unique identifier for a student record.
///
/// Ids are allocated by the owning roster from its internal counter and are
/// never reused within that roster. They are cheap to copy and compare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudentId(u32);

impl StudentId {
    /// Create an id from a raw value.
    pub fn new(raw: u32) -> Self {
        StudentId(raw)
    }

    /// Get the raw numeric value.
    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for StudentId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(StudentId)
    }
}

impl From<u32> for StudentId {
    fn from(raw: u32) -> Self {
        StudentId(raw)
    }
}
