//! Roster CSV writing and loading.
//!
//! One row per student, five fixed columns. The `csv` crate handles
//! quoting, so bodies containing delimiters or newlines round-trip
//! losslessly.

use std::io::{Read, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::error::ReportFormatError;
use crate::model::{Problem, SubmissionSet};

/// The fixed report header: one name column, one column per problem.
pub const COLUMNS: [&str; 5] = ["Name", "Problem 1", "Problem 2", "Problem 3", "Problem 4"];

/// Write the roster to any writer.
///
/// Rows follow the set's iteration order (lexicographic by student name);
/// absent (name, problem) entries render as empty fields, so every row is
/// always five columns wide.
pub fn write_csv<W: Write>(set: &SubmissionSet, writer: W) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(COLUMNS)
        .context("failed to write report header")?;

    for (name, problems) in set.iter() {
        let mut row = Vec::with_capacity(COLUMNS.len());
        row.push(name);
        for problem in Problem::ALL {
            row.push(problems.get(&problem).map(String::as_str).unwrap_or(""));
        }
        csv.write_record(&row)
            .with_context(|| format!("failed to write row for '{name}'"))?;
    }

    csv.flush().context("failed to flush report")?;
    Ok(())
}

/// Write the roster file. Failure here is the pipeline's one fatal error.
pub fn save_csv(set: &SubmissionSet, path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create report at {}", path.display()))?;
    write_csv(set, file).with_context(|| format!("failed to write report to {}", path.display()))
}

/// Load a previously written roster file back into a submission set.
pub fn load_csv(path: &Path) -> Result<SubmissionSet> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("failed to read report from {}", path.display()))?;
    read_csv(file).with_context(|| format!("failed to parse report {}", path.display()))
}

/// Parse roster CSV from any reader, validating the fixed schema.
///
/// Empty problem cells read back as absent entries; the student's row is
/// kept either way.
pub fn read_csv<R: Read>(reader: R) -> Result<SubmissionSet> {
    let mut csv = csv::ReaderBuilder::new().flexible(true).from_reader(reader);

    let headers = csv.headers().context("failed to read report header")?;
    if headers.len() != COLUMNS.len() || headers.iter().zip(COLUMNS).any(|(h, c)| h != c) {
        return Err(ReportFormatError::Header {
            found: headers.iter().map(str::to_string).collect(),
        }
        .into());
    }

    let mut set = SubmissionSet::new();
    for (index, record) in csv.records().enumerate() {
        let record = record.context("failed to read report row")?;
        if record.len() != COLUMNS.len() {
            return Err(ReportFormatError::Row {
                // 1-based, counting the header row.
                row: index + 2,
                found: record.len(),
            }
            .into());
        }

        let name = &record[0];
        set.ensure_student(name);
        for (cell, problem) in record.iter().skip(1).zip(Problem::ALL) {
            if !cell.is_empty() {
                set.insert(name, problem, cell);
            }
        }
    }

    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(n: u8) -> Problem {
        Problem::new(n).unwrap()
    }

    fn to_string(set: &SubmissionSet) -> String {
        let mut buf = Vec::new();
        write_csv(set, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn header_row_is_fixed() {
        let csv = to_string(&SubmissionSet::new());
        assert_eq!(csv, "Name,Problem 1,Problem 2,Problem 3,Problem 4\n");
    }

    #[test]
    fn partial_coverage_renders_empty_cells() {
        let mut set = SubmissionSet::new();
        set.insert("Jane Smith", p(1), "one");
        set.insert("Jane Smith", p(3), "three");

        let csv = to_string(&set);
        assert!(csv.contains("Jane Smith,one,,three,\n"));
    }

    #[test]
    fn rows_are_sorted_by_name() {
        let mut set = SubmissionSet::new();
        set.insert("Zoe", p(1), "z");
        set.insert("Adam", p(1), "a");

        let csv = to_string(&set);
        let adam = csv.find("Adam").unwrap();
        let zoe = csv.find("Zoe").unwrap();
        assert!(adam < zoe);
    }

    #[test]
    fn roundtrip_preserves_mapping() {
        let mut set = SubmissionSet::new();
        set.insert("Jane Smith", p(2), "My answer is 42.");
        set.insert("Omar Haddad", p(1), "line one\nline two");
        set.insert("Omar Haddad", p(4), "a, b, and \"c\"");

        let loaded = read_csv(to_string(&set).as_bytes()).unwrap();
        assert_eq!(loaded, set);
    }

    #[test]
    fn roundtrip_via_file() {
        let mut set = SubmissionSet::new();
        set.insert("Jane Smith", p(2), "comma, newline\nquote \" done");

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roster.csv");
        save_csv(&set, &path).unwrap();

        let loaded = load_csv(&path).unwrap();
        assert_eq!(loaded.body("Jane Smith", p(2)), set.body("Jane Smith", p(2)));
    }

    #[test]
    fn save_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no_such_dir").join("roster.csv");
        assert!(save_csv(&SubmissionSet::new(), &path).is_err());
    }

    #[test]
    fn read_rejects_wrong_header() {
        let err = read_csv("Who,What\nJane,thing\n".as_bytes()).unwrap_err();
        assert!(err.downcast_ref::<ReportFormatError>().is_some());
    }

    #[test]
    fn read_rejects_short_row() {
        let data = "Name,Problem 1,Problem 2,Problem 3,Problem 4\nJane,only\n";
        let err = read_csv(data.as_bytes()).unwrap_err();
        match err.downcast_ref::<ReportFormatError>() {
            Some(ReportFormatError::Row { row, found }) => {
                assert_eq!(*row, 2);
                assert_eq!(*found, 2);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn read_keeps_student_with_all_empty_cells() {
        let data = "Name,Problem 1,Problem 2,Problem 3,Problem 4\nJane Smith,,,,\n";
        let set = read_csv(data.as_bytes()).unwrap();

        assert_eq!(set.len(), 1);
        assert_eq!(set.submission_count(), 0);
    }
}
