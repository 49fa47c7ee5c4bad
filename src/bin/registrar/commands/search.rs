//! `registrar search` command

use anyhow::Result;

use registrar::util::Shell;

use crate::cli::SearchArgs;

use super::{print_details, sample};

pub fn execute(args: SearchArgs, shell: &Shell) -> Result<()> {
    let sample = sample()?;
    let matches = sample.roster.search_by_name(&args.query);

    if shell.is_json() {
        shell.json_event(&serde_json::json!({
            "reason": "search",
            "query": args.query,
            "students": matches,
        }));
        return Ok(());
    }

    shell.print(format!(
        "Search results for '{}' ({} found):",
        args.query,
        matches.len()
    ));
    for student in matches {
        print_details(shell, student);
    }

    Ok(())
}
