//! Student record - the unit of data the roster manages.
//!
//! Fields are validated at every mutation point, so a record can never be
//! observed holding an empty name, an out-of-range age, or an out-of-range
//! GPA. The GPA bound also rules out NaN, which makes `f64::total_cmp` a
//! genuine total order over stored GPAs.

use std::collections::HashSet;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Serialize, Serializer};

use crate::core::{RosterError, StudentId};

/// Accepted age range, inclusive.
pub const AGE_RANGE: (u32, u32) = (16, 100);

/// Accepted GPA range, inclusive.
pub const GPA_RANGE: (f64, f64) = (0.0, 4.0);

/// Graduate-track extension payload.
///
/// A capability attached to a record, not a separate record kind: rendering
/// code checks for its presence instead of dispatching on a type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraduateProfile {
    pub thesis: String,
    pub advisor: String,
}

impl GraduateProfile {
    pub fn new(thesis: impl Into<String>, advisor: impl Into<String>) -> Self {
        GraduateProfile {
            thesis: thesis.into(),
            advisor: advisor.into(),
        }
    }
}

/// A single student record.
///
/// Identity is the id alone: records compare and hash by id regardless of
/// the other fields. Course membership is mutated only through the roster's
/// enroll/withdraw operations so the course index stays in lockstep.
#[derive(Debug, Clone, Serialize)]
pub struct Student {
    id: StudentId,
    name: String,
    age: u32,
    gpa: f64,
    #[serde(serialize_with = "sorted_courses")]
    courses: HashSet<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    graduate: Option<GraduateProfile>,
}

/// Serialize the course set in sorted order so output is deterministic.
fn sorted_courses<S: Serializer>(courses: &HashSet<String>, ser: S) -> Result<S::Ok, S::Error> {
    let mut sorted: Vec<&str> = courses.iter().map(String::as_str).collect();
    sorted.sort_unstable();
    sorted.serialize(ser)
}

impl Student {
    /// Create a record with an explicit id, validating every field.
    pub fn new(
        id: StudentId,
        name: impl Into<String>,
        age: u32,
        gpa: f64,
    ) -> Result<Self, RosterError> {
        let mut student = Student {
            id,
            name: String::new(),
            age: AGE_RANGE.0,
            gpa: GPA_RANGE.0,
            courses: HashSet::new(),
            graduate: None,
        };
        student.set_name(name)?;
        student.set_age(age)?;
        student.set_gpa(gpa)?;
        Ok(student)
    }

    /// Attach a graduate profile to the record.
    pub fn with_graduate(mut self, profile: GraduateProfile) -> Self {
        self.graduate = Some(profile);
        self
    }

    pub fn id(&self) -> StudentId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn gpa(&self) -> f64 {
        self.gpa
    }

    /// Enrolled course names, unordered.
    pub fn courses(&self) -> &HashSet<String> {
        &self.courses
    }

    /// Enrolled course names in sorted order, for rendering.
    pub fn courses_sorted(&self) -> Vec<&str> {
        let mut sorted: Vec<&str> = self.courses.iter().map(String::as_str).collect();
        sorted.sort_unstable();
        sorted
    }

    pub fn graduate(&self) -> Option<&GraduateProfile> {
        self.graduate.as_ref()
    }

    /// Set the name; rejects empty or whitespace-only input, stores trimmed.
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), RosterError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(RosterError::EmptyName);
        }
        self.name = trimmed.to_string();
        Ok(())
    }

    /// Set the age; rejects values outside [16, 100].
    pub fn set_age(&mut self, age: u32) -> Result<(), RosterError> {
        if age < AGE_RANGE.0 || age > AGE_RANGE.1 {
            return Err(RosterError::AgeOutOfRange(age));
        }
        self.age = age;
        Ok(())
    }

    /// Set the GPA; rejects values outside [0.0, 4.0] and NaN.
    pub fn set_gpa(&mut self, gpa: f64) -> Result<(), RosterError> {
        if !(GPA_RANGE.0..=GPA_RANGE.1).contains(&gpa) {
            return Err(RosterError::GpaOutOfRange(gpa));
        }
        self.gpa = gpa;
        Ok(())
    }

    /// Add a course to the record's set. Returns false if already present.
    ///
    /// Crate-internal: callers go through [`Roster::enroll`] so the course
    /// index is updated in the same operation.
    ///
    /// [`Roster::enroll`]: crate::core::Roster::enroll
    pub(crate) fn add_course(&mut self, course: &str) -> bool {
        self.courses.insert(course.to_string())
    }

    /// Remove a course from the record's set. Returns false if absent.
    pub(crate) fn remove_course(&mut self, course: &str) -> bool {
        self.courses.remove(course)
    }
}

impl PartialEq for Student {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Student {}

impl Hash for Student {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (id {}, age {}, gpa {:.2})",
            self.name, self.id, self.age, self.gpa
        )
    }
}
