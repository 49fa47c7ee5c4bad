//! Roster failure taxonomy.
//!
//! Every failure here is local and recoverable: it is reported to the
//! caller and never leaves the roster's internal structures out of sync.

use thiserror::Error;

use crate::core::StudentId;

/// Errors reported by roster operations and record validation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RosterError {
    /// Insert with an id that is already registered.
    #[error("student {0} is already registered")]
    DuplicateId(StudentId),

    /// Lookup or mutation against an id that is not registered.
    #[error("no student with id {0}")]
    NotFound(StudentId),

    /// Enroll in a course the student is already taking.
    #[error("student {id} is already enrolled in {course}")]
    AlreadyEnrolled { id: StudentId, course: String },

    /// Withdraw from a course the student is not taking.
    #[error("student {id} is not enrolled in {course}")]
    NotEnrolled { id: StudentId, course: String },

    /// Name was empty or whitespace-only.
    #[error("name cannot be empty")]
    EmptyName,

    /// Age outside the accepted [16, 100] range.
    #[error("age must be between 16 and 100, got {0}")]
    AgeOutOfRange(u32),

    /// GPA outside the accepted [0.0, 4.0] range (or not a number).
    #[error("gpa must be between 0.0 and 4.0, got {0}")]
    GpaOutOfRange(f64),
}
