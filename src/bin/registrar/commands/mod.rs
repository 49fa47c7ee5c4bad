//! Command implementations

pub mod completions;
pub mod demo;
pub mod rank;
pub mod roster;
pub mod search;
pub mod stats;

use anyhow::Result;

use registrar::core::{GraduateProfile, Roster, StudentId};
use registrar::util::Shell;
use registrar::Student;

/// The seeded sample roster used by every reporting command.
///
/// The roster is in-memory only, so each invocation starts from the same
/// well-known data set rather than from persisted state.
pub struct Sample {
    pub roster: Roster,
    pub alice: StudentId,
    pub bob: StudentId,
    pub diana: StudentId,
}

/// Build the sample roster: five students, one of them graduate-track,
/// enrolled across four courses.
pub fn sample() -> Result<Sample> {
    let mut roster = Roster::new();

    let alice = roster.admit("Alice Johnson", 20, 3.8)?;
    let bob = roster.admit("Bob Smith", 22, 3.5)?;
    let charlie = roster.admit("Charlie Brown", 19, 3.9)?;
    let diana = roster.admit("Diana Prince", 21, 3.2)?;
    let eve = roster.admit_graduate(
        "Eve Wilson",
        25,
        3.7,
        GraduateProfile::new("Machine Learning in Healthcare", "Dr. Smith"),
    )?;

    roster.enroll(alice, "CS101")?;
    roster.enroll(alice, "MATH201")?;
    roster.enroll(bob, "CS101")?;
    roster.enroll(bob, "ENG101")?;
    roster.enroll(charlie, "CS101")?;
    roster.enroll(charlie, "MATH201")?;
    roster.enroll(diana, "ENG101")?;
    roster.enroll(eve, "CS101")?;
    roster.enroll(eve, "CS501")?;

    Ok(Sample {
        roster,
        alice,
        bob,
        diana,
    })
}

/// Print one record's detail lines, including the graduate extension when
/// present. Dispatch is a check for the extension payload, nothing virtual.
pub fn print_details(shell: &Shell, student: &Student) {
    shell.print(format!(
        "  {:<5} {:<16} age {:<4} gpa {:<5.2} [{}]",
        student.id(),
        student.name(),
        student.age(),
        student.gpa(),
        student.courses_sorted().join(", ")
    ));
    if let Some(profile) = student.graduate() {
        shell.print(format!("        thesis:  {}", profile.thesis));
        shell.print(format!("        advisor: {}", profile.advisor));
    }
}
