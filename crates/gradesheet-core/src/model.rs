//! Core data model types for gradesheet.
//!
//! Submissions are keyed by student name and problem number. The
//! [`SubmissionSet`] is the single piece of mutable state the pipeline
//! builds and the report writer consumes.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Placeholder student name used when no name can be parsed.
pub const UNKNOWN_STUDENT: &str = "Unknown";

/// A problem number in the fixed range 1..=4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Problem(u8);

impl Problem {
    /// All problems in ascending order. One report column per entry.
    pub const ALL: [Problem; 4] = [Problem(1), Problem(2), Problem(3), Problem(4)];

    pub fn new(n: u8) -> Option<Self> {
        (1..=4).contains(&n).then_some(Problem(n))
    }

    pub fn number(self) -> u8 {
        self.0
    }

    /// The report column name for this problem, e.g. "Problem 2".
    pub fn column_name(self) -> String {
        format!("Problem {}", self.0)
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u8> for Problem {
    type Error = String;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        Problem::new(n).ok_or_else(|| format!("problem number out of range: {n}"))
    }
}

impl FromStr for Problem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let n: u8 = s
            .trim()
            .parse()
            .map_err(|_| format!("not a problem number: {s:?}"))?;
        Problem::try_from(n)
    }
}

/// Everything collected in one run: student name → problem → body text.
///
/// At most one body is stored per (name, problem) pair; a later insert for
/// the same pair silently overwrites the earlier one. Iteration is
/// lexicographic by student name, which fixes the roster's row order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SubmissionSet {
    by_student: BTreeMap<String, BTreeMap<Problem, String>>,
}

impl SubmissionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a body under (name, problem). Last write wins.
    pub fn insert(&mut self, name: impl Into<String>, problem: Problem, body: impl Into<String>) {
        let per_problem = self.by_student.entry(name.into()).or_default();
        per_problem.insert(problem, body.into());
    }

    /// Make sure a student has a row, even with no bodies yet.
    ///
    /// Used when loading a roster whose row carries only empty cells.
    pub fn ensure_student(&mut self, name: impl Into<String>) {
        self.by_student.entry(name.into()).or_default();
    }

    /// Resolve a parsed header against the fallbacks and store the body.
    ///
    /// A missing or empty name becomes [`UNKNOWN_STUDENT`]; a missing
    /// problem number becomes `declared`, the number of the directory the
    /// file came from. Returns the resolved key for trace logging.
    pub fn record(
        &mut self,
        name: Option<String>,
        problem: Option<Problem>,
        body: String,
        declared: Problem,
    ) -> (String, Problem) {
        let name = match name {
            Some(n) if !n.is_empty() => n,
            _ => UNKNOWN_STUDENT.to_string(),
        };
        let problem = problem.unwrap_or(declared);
        self.insert(name.clone(), problem, body);
        (name, problem)
    }

    pub fn body(&self, name: &str, problem: Problem) -> Option<&str> {
        self.by_student
            .get(name)?
            .get(&problem)
            .map(String::as_str)
    }

    /// Students in lexicographic order, each with their per-problem bodies.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeMap<Problem, String>)> {
        self.by_student.iter().map(|(name, p)| (name.as_str(), p))
    }

    pub fn students(&self) -> impl Iterator<Item = &str> {
        self.by_student.keys().map(String::as_str)
    }

    /// Number of distinct students.
    pub fn len(&self) -> usize {
        self.by_student.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_student.is_empty()
    }

    /// Total number of stored (name, problem) bodies.
    pub fn submission_count(&self) -> usize {
        self.by_student.values().map(BTreeMap::len).sum()
    }
}
