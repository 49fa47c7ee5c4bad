//! Roster reporting: GPA ranking and aggregate statistics.
//!
//! Ordering and aggregation live here as free functions over the roster
//! rather than as behavior on the record type, so the data model stays free
//! of presentation concerns and callers can pass the comparators explicitly.

use std::cmp::Ordering;

use serde::Serialize;

use crate::core::{Roster, Student, StudentId};

/// Ranking order: descending GPA, ties broken by ascending name
/// (case-sensitive), then by id.
///
/// GPA validation excludes NaN, so `total_cmp` agrees with the numeric
/// order here; the id tail makes this a total order even for records with
/// identical GPA and name.
pub fn rank_order(a: &Student, b: &Student) -> Ordering {
    b.gpa()
        .total_cmp(&a.gpa())
        .then_with(|| a.name().cmp(b.name()))
        .then_with(|| a.id().cmp(&b.id()))
}

/// All records ranked by [`rank_order`].
///
/// Each registered record appears exactly once; identity is the id, so a
/// record mutated between reads still ranks as a single entry.
pub fn gpa_ranking(roster: &Roster) -> Vec<&Student> {
    let mut ranked: Vec<&Student> = roster.iter().collect();
    ranked.sort_by(|a, b| rank_order(a, b));
    ranked
}

/// A record reference inside a statistics report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GpaExtreme {
    pub id: StudentId,
    pub name: String,
    pub gpa: f64,
}

impl GpaExtreme {
    fn of(student: &Student) -> Self {
        GpaExtreme {
            id: student.id(),
            name: student.name().to_string(),
            gpa: student.gpa(),
        }
    }
}

/// Aggregate report over a non-empty roster.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statistics {
    pub count: usize,
    pub mean_gpa: f64,
    pub highest: GpaExtreme,
    pub lowest: GpaExtreme,
    /// Courses with at least one enrolled student, sorted.
    pub courses: Vec<String>,
}

/// Compute aggregates over the roster.
///
/// Returns `None` for an empty roster: there is no meaningful mean and no
/// extremes, and reporting an explicit empty state beats dividing by zero.
/// When several records share the extreme GPA, the first one in insertion
/// order wins; that tie-break is an implementation choice, not a contract.
pub fn statistics(roster: &Roster) -> Option<Statistics> {
    let mut students = roster.iter();
    let first = students.next()?;

    let mut sum = first.gpa();
    let mut highest = first;
    let mut lowest = first;
    for student in students {
        sum += student.gpa();
        if student.gpa() > highest.gpa() {
            highest = student;
        }
        if student.gpa() < lowest.gpa() {
            lowest = student;
        }
    }

    let mut courses: Vec<String> = roster.courses().map(str::to_string).collect();
    courses.sort_unstable();

    Some(Statistics {
        count: roster.len(),
        mean_gpa: sum / roster.len() as f64,
        highest: GpaExtreme::of(highest),
        lowest: GpaExtreme::of(lowest),
        courses,
    })
}
