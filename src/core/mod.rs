//! Core data structures for Registrar.
//!
//! This module contains the foundational types:
//! - Record identity (StudentId)
//! - Student records with validated fields and the graduate extension
//! - The Roster registry and its derived indices
//! - The failure taxonomy (RosterError)

pub mod error;
pub mod roster;
pub mod student;
pub mod student_id;

pub use error::RosterError;
pub use roster::Roster;
pub use student::{GraduateProfile, Student, AGE_RANGE, GPA_RANGE};
pub use student_id::{StudentId, ID_BASE};
