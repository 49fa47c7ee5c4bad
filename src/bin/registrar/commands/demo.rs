//! `registrar demo` command
//!
//! Runs the full roster walkthrough on the sample data: registration,
//! enrollment, reporting, a failed double-enroll, a drop, and a removal.

use anyhow::Result;

use registrar::core::RosterError;
use registrar::ops::report::gpa_ranking;
use registrar::util::{Shell, Status};

use super::{print_details, sample, stats};

pub fn execute(shell: &Shell) -> Result<()> {
    let mut sample = sample()?;

    for student in sample.roster.iter() {
        shell.status(
            Status::Added,
            format!("{} (ID: {})", student.name(), student.id()),
        );
    }

    shell.print(format!("\nAll Students ({}):", sample.roster.len()));
    for student in sample.roster.iter() {
        print_details(shell, student);
    }

    shell.print("\nGPA Ranking:");
    for (rank, student) in gpa_ranking(&sample.roster).iter().enumerate() {
        shell.print(format!(
            "  #{}  {:<16} GPA: {:.2}",
            rank + 1,
            student.name(),
            student.gpa()
        ));
    }

    for course in ["CS101", "MATH201"] {
        let enrolled = sample.roster.course_roster(course);
        shell.print(format!("\n{} Roster ({} students):", course, enrolled.len()));
        for student in enrolled {
            shell.print(format!(
                "  - {} (GPA: {:.2})",
                student.name(),
                student.gpa()
            ));
        }
    }

    shell.print("\nSearch results for 'ali':");
    for student in sample.roster.search_by_name("ali") {
        print_details(shell, student);
    }

    shell.print("");
    stats::print_statistics(&sample.roster, shell);

    // Enrolling twice is rejected without creating a duplicate roster entry.
    match sample.roster.enroll(sample.alice, "CS101") {
        Err(RosterError::AlreadyEnrolled { .. }) => {
            shell.warn("Alice Johnson is already enrolled in CS101")
        }
        other => other?,
    }

    sample.roster.withdraw(sample.bob, "CS101")?;
    shell.status(Status::Dropped, "Bob Smith dropped CS101");
    let enrolled = sample.roster.course_roster("CS101");
    shell.print(format!("\nCS101 Roster ({} students):", enrolled.len()));
    for student in enrolled {
        shell.print(format!(
            "  - {} (GPA: {:.2})",
            student.name(),
            student.gpa()
        ));
    }

    let removed = sample.roster.remove(sample.diana)?;
    shell.status(Status::Removed, removed.name());

    shell.print("");
    stats::print_statistics(&sample.roster, shell);

    Ok(())
}
