//! `registrar rank` command

use anyhow::Result;

use registrar::ops::report::gpa_ranking;
use registrar::util::Shell;

use super::sample;

pub fn execute(shell: &Shell) -> Result<()> {
    let sample = sample()?;
    let ranked = gpa_ranking(&sample.roster);

    if shell.is_json() {
        shell.json_event(&serde_json::json!({
            "reason": "rank",
            "students": ranked,
        }));
        return Ok(());
    }

    shell.print("GPA Ranking:");
    for (rank, student) in ranked.iter().enumerate() {
        shell.print(format!(
            "  #{}  {:<16} GPA: {:.2}",
            rank + 1,
            student.name(),
            student.gpa()
        ));
    }

    Ok(())
}
