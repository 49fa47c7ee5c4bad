//! `registrar roster` command

use anyhow::Result;

use registrar::util::Shell;

use crate::cli::RosterArgs;

use super::sample;

pub fn execute(args: RosterArgs, shell: &Shell) -> Result<()> {
    let sample = sample()?;
    let enrolled = sample.roster.course_roster(&args.course);

    if shell.is_json() {
        shell.json_event(&serde_json::json!({
            "reason": "roster",
            "course": args.course,
            "students": enrolled,
        }));
        return Ok(());
    }

    shell.print(format!(
        "{} Roster ({} students):",
        args.course,
        enrolled.len()
    ));
    for student in enrolled {
        shell.print(format!(
            "  - {} (GPA: {:.2})",
            student.name(),
            student.gpa()
        ));
    }

    Ok(())
}
