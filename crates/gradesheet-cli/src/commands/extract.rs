//! The `gradesheet extract` command.

use std::path::PathBuf;

use anyhow::Result;

use gradesheet_core::collect::{collect, CollectOutcome};
use gradesheet_core::config::{load_config_from, InputLayout};
use gradesheet_core::report::save_csv;

pub fn execute(
    input_root: Option<PathBuf>,
    output: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let mut config = load_config_from(config_path.as_deref())?;

    // Flags override the config file.
    if let Some(root) = input_root {
        config.input_root = root;
    }
    if let Some(out) = output {
        config.output = out;
    }

    let layout = InputLayout::new(&config.input_root);
    let outcome = collect(&layout);

    print_run_summary(&outcome);

    save_csv(&outcome.set, &config.output)?;
    eprintln!("Report saved to: {}", config.output.display());

    Ok(())
}

fn print_run_summary(outcome: &CollectOutcome) {
    use comfy_table::{Cell, Table};

    let mut table = Table::new();
    table.set_header(vec!["Problem", "Files"]);

    for (problem, count) in &outcome.stats.files_per_problem {
        table.add_row(vec![
            Cell::new(problem.column_name()),
            Cell::new(count),
        ]);
    }

    eprintln!("\n{table}");
    eprintln!(
        "{} file(s), {} student(s); headers parsed {}, missing {}",
        outcome.stats.files_total(),
        outcome.set.len(),
        outcome.stats.headers_parsed,
        outcome.stats.headers_missing
    );
}
