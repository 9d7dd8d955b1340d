//! The `gradesheet summary` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use gradesheet_core::model::Problem;
use gradesheet_core::report::load_csv;

pub fn execute(report_path: PathBuf) -> Result<()> {
    let set = load_csv(&report_path)?;

    let mut table = Table::new();
    let mut header = vec!["Name".to_string()];
    header.extend(Problem::ALL.iter().map(|p| p.column_name()));
    header.push("Submitted".to_string());
    table.set_header(header);

    for (name, problems) in set.iter() {
        let mut row = vec![Cell::new(name)];
        for problem in Problem::ALL {
            row.push(Cell::new(if problems.contains_key(&problem) {
                "yes"
            } else {
                "-"
            }));
        }
        row.push(Cell::new(format!("{}/4", problems.len())));
        table.add_row(row);
    }

    println!("{table}");
    println!("{} student(s)", set.len());

    Ok(())
}
