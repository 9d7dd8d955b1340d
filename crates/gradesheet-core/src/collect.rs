//! The collection pipeline: enumerate, extract, parse, aggregate.
//!
//! Fully sequential; every per-file failure degrades to a default value
//! instead of aborting the run. Only the report writer downstream can fail
//! the pipeline.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::config::InputLayout;
use crate::extract;
use crate::header;
use crate::model::{Problem, SubmissionSet};

/// Counters for one collection run. Informational; the written roster is
/// the contract.
#[derive(Debug, Default, Clone)]
pub struct CollectStats {
    /// Files processed, per problem directory.
    pub files_per_problem: BTreeMap<Problem, usize>,
    /// Files whose text carried a recognizable header line.
    pub headers_parsed: usize,
    /// Files that fell back to the sentinel name and declared number.
    pub headers_missing: usize,
}

impl CollectStats {
    pub fn files_total(&self) -> usize {
        self.files_per_problem.values().sum()
    }
}

/// Result of walking the input layout once.
#[derive(Debug, Default)]
pub struct CollectOutcome {
    pub set: SubmissionSet,
    pub stats: CollectStats,
}

/// List the `.html` files directly inside `dir`.
///
/// Non-recursive; ordering is whatever the OS returns. A missing or
/// unreadable directory yields no files rather than an error.
pub fn html_files(dir: &Path) -> Vec<PathBuf> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::debug!("no files under {}: {}", dir.display(), e);
            return Vec::new();
        }
    };

    entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "html"))
        .collect()
}

/// Walk every problem directory and build the submission set.
///
/// Each file is read whole, rendered to text, scanned for its header line,
/// and recorded under the resolved (name, problem) key. One trace line is
/// emitted per processed file.
pub fn collect(layout: &InputLayout) -> CollectOutcome {
    let mut outcome = CollectOutcome::default();

    for (declared, dir) in layout.problem_dirs() {
        for file in html_files(dir) {
            let Some(content) = extract::read_text(&file) else {
                continue;
            };
            let text = extract::html_to_text(&content);
            let parsed = header::parse_submission(&text);

            if parsed.name.is_some() {
                outcome.stats.headers_parsed += 1;
            } else {
                outcome.stats.headers_missing += 1;
            }
            *outcome.stats.files_per_problem.entry(declared).or_default() += 1;

            let (name, problem) =
                outcome
                    .set
                    .record(parsed.name, parsed.problem, parsed.body, declared);
            tracing::info!(
                "processed {} => name='{}', problem={}",
                file.display(),
                name,
                problem
            );
        }
    }

    outcome
}
