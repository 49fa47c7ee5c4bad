//! Roster - the in-memory registry of student records.
//!
//! The roster owns every record exclusively and maintains two derived
//! indices alongside the primary insertion-ordered collection:
//!
//! - an id index for O(1) lookup,
//! - a course index mapping each course name to the ids enrolled in it.
//!
//! Every mutating operation either completes fully or fails without side
//! effects, so the three structures are never observable out of sync.
//! Single-threaded by design; callers needing shared access wrap the whole
//! roster in one exclusive lock.

use std::collections::HashMap;

use crate::core::student_id::ID_BASE;
use crate::core::{GraduateProfile, RosterError, Student, StudentId};

/// The in-memory student registry.
#[derive(Debug, Default)]
pub struct Roster {
    /// All records, insertion order preserved. Primary ownership.
    students: Vec<Student>,
    /// Id -> position in `students`. Key set always equals the set of
    /// registered ids.
    id_index: HashMap<StudentId, usize>,
    /// Course name -> enrolled ids, in enrollment order. A course key exists
    /// iff at least one student is enrolled.
    course_rosters: HashMap<String, Vec<StudentId>>,
    /// Next id to hand out. Owned by this roster, so independent rosters
    /// allocate independent id sequences.
    next_id: u32,
}

impl Roster {
    /// Create an empty roster. Ids start at [`ID_BASE`].
    pub fn new() -> Self {
        Roster {
            students: Vec::new(),
            id_index: HashMap::new(),
            course_rosters: HashMap::new(),
            next_id: ID_BASE,
        }
    }

    /// Validate fields, allocate the next id, and register a new record.
    pub fn admit(
        &mut self,
        name: impl Into<String>,
        age: u32,
        gpa: f64,
    ) -> Result<StudentId, RosterError> {
        let student = Student::new(StudentId::new(self.next_id), name, age, gpa)?;
        let id = student.id();
        self.insert(student)?;
        Ok(id)
    }

    /// Like [`admit`](Self::admit), with a graduate profile attached.
    pub fn admit_graduate(
        &mut self,
        name: impl Into<String>,
        age: u32,
        gpa: f64,
        profile: GraduateProfile,
    ) -> Result<StudentId, RosterError> {
        let student =
            Student::new(StudentId::new(self.next_id), name, age, gpa)?.with_graduate(profile);
        let id = student.id();
        self.insert(student)?;
        Ok(id)
    }

    /// Register a fully constructed record.
    ///
    /// Fails with [`RosterError::DuplicateId`] if the id is already
    /// registered, touching nothing. Does not enroll the record in any
    /// course. Advances the id counter past the inserted id so a later
    /// `admit` can never collide.
    pub fn insert(&mut self, student: Student) -> Result<(), RosterError> {
        let id = student.id();
        if self.id_index.contains_key(&id) {
            return Err(RosterError::DuplicateId(id));
        }
        tracing::debug!("registering {} as {}", student.name(), id);
        self.id_index.insert(id, self.students.len());
        self.students.push(student);
        self.next_id = self.next_id.max(id.as_u32() + 1);
        Ok(())
    }

    /// Remove a record, purging it from every course roster it appears in.
    ///
    /// Fails with [`RosterError::NotFound`] for an unknown id, touching
    /// nothing. Returns the removed record.
    pub fn remove(&mut self, id: StudentId) -> Result<Student, RosterError> {
        let pos = *self.id_index.get(&id).ok_or(RosterError::NotFound(id))?;
        self.id_index.remove(&id);
        let student = self.students.remove(pos);

        // Positions after the removed record shifted down by one.
        for index_pos in self.id_index.values_mut() {
            if *index_pos > pos {
                *index_pos -= 1;
            }
        }

        for course in student.courses() {
            if let Some(enrolled) = self.course_rosters.get_mut(course) {
                enrolled.retain(|&other| other != id);
                if enrolled.is_empty() {
                    self.course_rosters.remove(course);
                }
            }
        }

        tracing::debug!("removed {} ({})", student.name(), id);
        Ok(student)
    }

    /// Look up a record by id. O(1), never fails.
    pub fn get(&self, id: StudentId) -> Option<&Student> {
        self.id_index.get(&id).map(|&pos| &self.students[pos])
    }

    fn get_mut(&mut self, id: StudentId) -> Result<&mut Student, RosterError> {
        let pos = *self.id_index.get(&id).ok_or(RosterError::NotFound(id))?;
        Ok(&mut self.students[pos])
    }

    /// Case-insensitive substring search over names, in insertion order.
    ///
    /// An empty query matches every record; no match yields an empty vec.
    pub fn search_by_name(&self, query: &str) -> Vec<&Student> {
        let query = query.to_lowercase();
        self.students
            .iter()
            .filter(|s| s.name().to_lowercase().contains(&query))
            .collect()
    }

    /// Enroll a student in a course.
    ///
    /// Fails with [`RosterError::NotFound`] for an unknown id and
    /// [`RosterError::AlreadyEnrolled`] if the course is already in the
    /// record's set; neither failure mutates anything. A course roster list
    /// is created on first enrollment and never holds duplicates.
    pub fn enroll(&mut self, id: StudentId, course: &str) -> Result<(), RosterError> {
        let student = self.get_mut(id)?;
        if !student.add_course(course) {
            return Err(RosterError::AlreadyEnrolled {
                id,
                course: course.to_string(),
            });
        }
        tracing::debug!("{} enrolled in {}", id, course);
        self.course_rosters
            .entry(course.to_string())
            .or_default()
            .push(id);
        Ok(())
    }

    /// Withdraw a student from a course. Symmetric to [`enroll`](Self::enroll).
    pub fn withdraw(&mut self, id: StudentId, course: &str) -> Result<(), RosterError> {
        let student = self.get_mut(id)?;
        if !student.remove_course(course) {
            return Err(RosterError::NotEnrolled {
                id,
                course: course.to_string(),
            });
        }
        tracing::debug!("{} dropped {}", id, course);
        if let Some(enrolled) = self.course_rosters.get_mut(course) {
            enrolled.retain(|&other| other != id);
            if enrolled.is_empty() {
                self.course_rosters.remove(course);
            }
        }
        Ok(())
    }

    /// Rename a student. Validation failures leave the record unchanged.
    pub fn rename(&mut self, id: StudentId, name: impl Into<String>) -> Result<(), RosterError> {
        self.get_mut(id)?.set_name(name)
    }

    /// Update a student's age, validated.
    pub fn set_age(&mut self, id: StudentId, age: u32) -> Result<(), RosterError> {
        self.get_mut(id)?.set_age(age)
    }

    /// Update a student's GPA, validated.
    pub fn set_gpa(&mut self, id: StudentId, gpa: f64) -> Result<(), RosterError> {
        self.get_mut(id)?.set_gpa(gpa)
    }

    /// The records enrolled in a course, in enrollment order.
    ///
    /// An unknown course yields an empty vec, never a failure.
    pub fn course_roster(&self, course: &str) -> Vec<&Student> {
        self.course_rosters
            .get(course)
            .into_iter()
            .flatten()
            .filter_map(|&id| self.get(id))
            .collect()
    }

    /// Distinct course names with at least one enrolled student, unordered.
    pub fn courses(&self) -> impl Iterator<Item = &str> {
        self.course_rosters.keys().map(String::as_str)
    }

    /// All records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Student> {
        self.students.iter()
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a Student;
    type IntoIter = std::slice::Iter<'a, Student>;

    fn into_iter(self) -> Self::IntoIter {
        self.students.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    /// The id index must mirror the primary collection exactly, and every
    /// course list must agree with the records' own course sets.
    fn assert_consistent(roster: &Roster) {
        let primary_ids: HashSet<StudentId> = roster.iter().map(|s| s.id()).collect();
        let indexed_ids: HashSet<StudentId> = roster.id_index.keys().copied().collect();
        assert_eq!(primary_ids, indexed_ids);

        for (id, &pos) in &roster.id_index {
            assert_eq!(roster.students[pos].id(), *id);
        }

        for (course, enrolled) in &roster.course_rosters {
            assert!(!enrolled.is_empty(), "empty roster list for {course}");
            let unique: HashSet<_> = enrolled.iter().collect();
            assert_eq!(unique.len(), enrolled.len(), "duplicate entry in {course}");
            for &id in enrolled {
                let student = roster.get(id).expect("roster entry for unknown id");
                assert!(student.courses().contains(course));
            }
        }
        for student in roster.iter() {
            for course in student.courses() {
                let enrolled = roster.course_rosters.get(course).expect("missing course");
                assert!(enrolled.contains(&student.id()));
            }
        }
    }

    fn sample() -> (Roster, StudentId, StudentId) {
        let mut roster = Roster::new();
        let alice = roster.admit("Alice Johnson", 20, 3.8).unwrap();
        let bob = roster.admit("Bob Smith", 22, 3.5).unwrap();
        (roster, alice, bob)
    }

    #[test]
    fn test_admit_assigns_increasing_ids_from_base() {
        let (roster, alice, bob) = sample();
        assert_eq!(alice, StudentId::new(ID_BASE));
        assert_eq!(bob, StudentId::new(ID_BASE + 1));
        assert_eq!(roster.len(), 2);
        assert_consistent(&roster);
    }

    #[test]
    fn test_independent_rosters_have_independent_id_sequences() {
        let (_, alice, _) = sample();
        let mut other = Roster::new();
        let first = other.admit("Charlie Brown", 19, 3.9).unwrap();
        assert_eq!(first, alice);
    }

    #[test]
    fn test_insert_duplicate_id_is_rejected_without_side_effects() {
        let (mut roster, alice, _) = sample();
        let before = roster.len();
        let dup = Student::new(alice, "Impostor", 30, 2.0).unwrap();
        assert_eq!(roster.insert(dup), Err(RosterError::DuplicateId(alice)));
        assert_eq!(roster.len(), before);
        assert_eq!(roster.get(alice).unwrap().name(), "Alice Johnson");
        assert_consistent(&roster);
    }

    #[test]
    fn test_insert_advances_counter_past_explicit_id() {
        let mut roster = Roster::new();
        let explicit = Student::new(StudentId::new(5000), "Diana Prince", 21, 3.2).unwrap();
        roster.insert(explicit).unwrap();
        let next = roster.admit("Eve Wilson", 25, 3.7).unwrap();
        assert_eq!(next, StudentId::new(5001));
        assert_consistent(&roster);
    }

    #[test]
    fn test_remove_unknown_id_fails_without_mutation() {
        let (mut roster, _, _) = sample();
        let unknown = StudentId::new(9999);
        assert_eq!(
            roster.remove(unknown).unwrap_err(),
            RosterError::NotFound(unknown)
        );
        assert_eq!(roster.len(), 2);
        assert_consistent(&roster);
    }

    #[test]
    fn test_remove_purges_course_rosters() {
        let (mut roster, alice, bob) = sample();
        roster.enroll(alice, "CS101").unwrap();
        roster.enroll(alice, "MATH201").unwrap();
        roster.enroll(bob, "CS101").unwrap();

        let removed = roster.remove(alice).unwrap();
        assert_eq!(removed.id(), alice);
        assert!(roster.get(alice).is_none());
        assert!(roster.course_roster("CS101").iter().all(|s| s.id() != alice));
        // Alice was the only MATH201 student, so the course disappears.
        assert!(roster.course_roster("MATH201").is_empty());
        assert!(!roster.courses().any(|c| c == "MATH201"));
        assert_consistent(&roster);
    }

    #[test]
    fn test_remove_middle_record_keeps_index_positions_valid() {
        let mut roster = Roster::new();
        let a = roster.admit("Alice Johnson", 20, 3.8).unwrap();
        let b = roster.admit("Bob Smith", 22, 3.5).unwrap();
        let c = roster.admit("Charlie Brown", 19, 3.9).unwrap();

        roster.remove(b).unwrap();
        assert_eq!(roster.get(a).unwrap().name(), "Alice Johnson");
        assert_eq!(roster.get(c).unwrap().name(), "Charlie Brown");
        let names: Vec<_> = roster.iter().map(|s| s.name()).collect();
        assert_eq!(names, ["Alice Johnson", "Charlie Brown"]);
        assert_consistent(&roster);
    }

    #[test]
    fn test_enroll_and_withdraw_keep_both_sides_in_sync() {
        let (mut roster, alice, _) = sample();
        roster.enroll(alice, "CS101").unwrap();
        assert!(roster.get(alice).unwrap().courses().contains("CS101"));
        assert_eq!(roster.course_roster("CS101").len(), 1);

        roster.withdraw(alice, "CS101").unwrap();
        assert!(!roster.get(alice).unwrap().courses().contains("CS101"));
        assert!(roster.course_roster("CS101").is_empty());
        assert_consistent(&roster);
    }

    #[test]
    fn test_double_enroll_is_rejected_and_roster_stays_unique() {
        let (mut roster, alice, _) = sample();
        roster.enroll(alice, "CS101").unwrap();
        let err = roster.enroll(alice, "CS101").unwrap_err();
        assert!(matches!(err, RosterError::AlreadyEnrolled { .. }));
        assert_eq!(roster.course_roster("CS101").len(), 1);
        assert_consistent(&roster);
    }

    #[test]
    fn test_withdraw_when_not_enrolled_fails_cleanly() {
        let (mut roster, alice, bob) = sample();
        roster.enroll(bob, "ENG101").unwrap();
        let err = roster.withdraw(alice, "ENG101").unwrap_err();
        assert!(matches!(err, RosterError::NotEnrolled { .. }));
        assert_eq!(roster.course_roster("ENG101").len(), 1);
        assert_consistent(&roster);
    }

    #[test]
    fn test_enroll_unknown_id_touches_nothing() {
        let (mut roster, _, _) = sample();
        let unknown = StudentId::new(4242);
        assert_eq!(
            roster.enroll(unknown, "CS101").unwrap_err(),
            RosterError::NotFound(unknown)
        );
        assert!(roster.course_roster("CS101").is_empty());
        assert_consistent(&roster);
    }

    #[test]
    fn test_search_is_case_insensitive_and_insertion_ordered() {
        let mut roster = Roster::new();
        roster.admit("Alice Johnson", 20, 3.8).unwrap();
        roster.admit("Bob Smith", 22, 3.5).unwrap();
        roster.admit("Malia Obama", 24, 3.6).unwrap();

        let hits: Vec<_> = roster
            .search_by_name("ALI")
            .into_iter()
            .map(|s| s.name())
            .collect();
        assert_eq!(hits, ["Alice Johnson", "Malia Obama"]);
    }

    #[test]
    fn test_search_empty_query_matches_everything() {
        let (roster, _, _) = sample();
        let all: Vec<_> = roster.search_by_name("").iter().map(|s| s.id()).collect();
        let expected: Vec<_> = roster.iter().map(|s| s.id()).collect();
        assert_eq!(all, expected);
    }

    #[test]
    fn test_search_without_match_returns_empty() {
        let (roster, _, _) = sample();
        assert!(roster.search_by_name("zzz").is_empty());
    }

    #[test]
    fn test_mediated_setters_validate() {
        let (mut roster, alice, _) = sample();
        assert!(roster.set_gpa(alice, 4.0).is_ok());
        assert_eq!(
            roster.set_gpa(alice, 4.5),
            Err(RosterError::GpaOutOfRange(4.5))
        );
        assert_eq!(roster.get(alice).unwrap().gpa(), 4.0);
        assert_eq!(roster.set_age(alice, 10), Err(RosterError::AgeOutOfRange(10)));
        assert_eq!(roster.rename(alice, " "), Err(RosterError::EmptyName));
        assert_eq!(roster.get(alice).unwrap().name(), "Alice Johnson");
    }

    #[test]
    fn test_course_roster_preserves_enrollment_order() {
        let mut roster = Roster::new();
        let a = roster.admit("Alice Johnson", 20, 3.8).unwrap();
        let b = roster.admit("Bob Smith", 22, 3.5).unwrap();
        let c = roster.admit("Charlie Brown", 19, 3.9).unwrap();
        roster.enroll(c, "CS101").unwrap();
        roster.enroll(a, "CS101").unwrap();
        roster.enroll(b, "CS101").unwrap();

        let ids: Vec<_> = roster.course_roster("CS101").iter().map(|s| s.id()).collect();
        assert_eq!(ids, [c, a, b]);
    }
}
