//! Submission header parsing.
//!
//! A submission's rendered text may carry a single header line of the form
//! `December Submission: Problem <N>: <Name>`. The parser recovers the name
//! and problem number from that line and strips it from the body.

use std::sync::LazyLock;

use regex::Regex;

use crate::model::Problem;

/// Phrase that identifies the header line.
pub const MARKER_PHRASE: &str = "December Submission:";

/// Matches "Problem <digit 1-4> :", whitespace-tolerant around the digit.
/// Out-of-range digits (e.g. "Problem 5:") do not match.
static PROBLEM_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Problem\s*([1-4])\s*:").expect("problem number pattern"));

/// What the header parser recovered from one submission's text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedSubmission {
    /// Student name from the header line, if one was found. May be empty
    /// when nothing follows the line's last colon.
    pub name: Option<String>,
    /// Problem number from the header line, if a digit in range was present.
    pub problem: Option<Problem>,
    /// Submission text with the header line removed, line endings
    /// normalized, and surrounding whitespace trimmed.
    pub body: String,
}

/// Scan `text` for the first header line and split it from the body.
///
/// Only the first line containing both [`MARKER_PHRASE`] and the word
/// "Problem" is recognized, even if several qualify. The name is whatever
/// follows the line's last colon, trimmed; on a line with no colon this
/// degrades to the whole trimmed line. Without a header line, `name` and
/// `problem` are `None` and the body is the full text.
pub fn parse_submission(text: &str) -> ParsedSubmission {
    let lines: Vec<&str> = text.lines().collect();
    let mut name = None;
    let mut problem = None;
    let mut header_index = None;

    for (i, line) in lines.iter().enumerate() {
        if line.contains(MARKER_PHRASE) && line.contains("Problem") {
            problem = PROBLEM_NUMBER
                .captures(line)
                .and_then(|caps| caps[1].parse::<Problem>().ok());

            let name_part = match line.rfind(':') {
                Some(pos) => &line[pos + 1..],
                None => line,
            };
            name = Some(name_part.trim().to_string());
            header_index = Some(i);
            break;
        }
    }

    let body = match header_index {
        Some(skip) => lines
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != skip)
            .map(|(_, line)| *line)
            .collect::<Vec<_>>()
            .join("\n"),
        None => lines.join("\n"),
    };

    ParsedSubmission {
        name,
        problem,
        body: body.trim().to_string(),
    }
}
