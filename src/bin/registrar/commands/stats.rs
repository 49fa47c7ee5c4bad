//! `registrar stats` command

use anyhow::Result;

use registrar::ops::report::statistics;
use registrar::util::Shell;

use super::sample;

pub fn execute(shell: &Shell) -> Result<()> {
    let sample = sample()?;
    print_statistics(&sample.roster, shell);
    Ok(())
}

/// Render the statistics report, or the explicit empty state.
pub fn print_statistics(roster: &registrar::Roster, shell: &Shell) {
    let Some(stats) = statistics(roster) else {
        if shell.is_json() {
            shell.json_event(&serde_json::json!({
                "reason": "stats",
                "empty": true,
            }));
        } else {
            shell.print("No students enrolled.");
        }
        return;
    };

    if shell.is_json() {
        shell.json_event(&serde_json::json!({
            "reason": "stats",
            "empty": false,
            "statistics": stats,
        }));
        return;
    }

    shell.print("Statistics:");
    shell.print(format!("  Total Students: {}", stats.count));
    shell.print(format!("  Average GPA: {:.2}", stats.mean_gpa));
    shell.print(format!(
        "  Highest GPA: {} ({:.2})",
        stats.highest.name, stats.highest.gpa
    ));
    shell.print(format!(
        "  Lowest GPA:  {} ({:.2})",
        stats.lowest.name, stats.lowest.gpa
    ));
    shell.print(format!("  Courses offered: {}", stats.courses.join(", ")));
}
