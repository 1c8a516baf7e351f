//! Classify many independent lines against one shared table.

use std::fs;
use std::path::Path;
use std::time::{Duration, Instant};

use serde::Serialize;

use crate::classify::{Classifier, Outcome, Verdict};
use crate::config::Config;
use crate::error::RowlifeError;
use crate::pattern::Pattern;
use crate::table::TransitionTable;

/// Result for one input line.
#[derive(Debug)]
pub struct LineReport {
    /// 1-based line number in the input.
    pub line: usize,
    pub input: String,
    pub result: Result<Verdict, RowlifeError>,
}

/// Flat form of a [`LineReport`] for JSON and CSV output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    pub line: usize,
    pub input: String,
    pub outcome: Option<Outcome>,
    pub generation: Option<usize>,
    pub period: Option<usize>,
    pub shift: Option<i64>,
    pub error: Option<String>,
}

impl LineReport {
    /// Label printed for this line: the outcome, or `error: ...`.
    pub fn label(&self) -> String {
        match &self.result {
            Ok(v) => v.outcome.to_string(),
            Err(e) => format!("error: {e}"),
        }
    }

    pub fn record(&self) -> Record {
        let (outcome, generation, period, shift, error) = match &self.result {
            Ok(v) => (Some(v.outcome), Some(v.generation), v.period, v.shift, None),
            Err(e) => (None, None, None, None, Some(e.to_string())),
        };
        Record {
            line: self.line,
            input: self.input.clone(),
            outcome,
            generation,
            period,
            shift,
            error,
        }
    }
}

/// Reports for a whole input, in input order.
#[derive(Debug)]
pub struct Batch {
    pub reports: Vec<LineReport>,
    pub elapsed: Duration,
}

impl Batch {
    /// Number of lines per outcome, in [`Outcome::ALL`] order.
    pub fn tallies(&self) -> [(Outcome, usize); 4] {
        Outcome::ALL.map(|o| {
            let n = self
                .reports
                .iter()
                .filter(|r| matches!(&r.result, Ok(v) if v.outcome == o))
                .count();
            (o, n)
        })
    }

    pub fn errors(&self) -> usize {
        self.reports.iter().filter(|r| r.result.is_err()).count()
    }

    pub fn records(&self) -> Vec<Record> {
        self.reports.iter().map(LineReport::record).collect()
    }
}

/// Read an input file into lines.
pub fn read_lines<P: AsRef<Path>>(path: P) -> Result<Vec<String>, RowlifeError> {
    let text = fs::read_to_string(path)?;
    Ok(text.lines().map(str::to_owned).collect())
}

/// Parse and classify a single raw line.
pub fn classify_line(
    line: &str,
    classifier: &Classifier<'_>,
    config: &Config,
) -> Result<Verdict, RowlifeError> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    let pattern = Pattern::parse_with(line, config)?;
    Ok(classifier.classify(&pattern))
}

pub fn classify_lines<S: AsRef<str>>(
    lines: &[S],
    table: &TransitionTable,
    config: &Config,
) -> Result<Batch, RowlifeError> {
    classify_lines_with(lines, table, config, |_| {})
}

/// Classify every line, calling `on_line` after each one.
///
/// A malformed line yields an error report for that line only. The only
/// batch-level failure is an invalid `config`.
pub fn classify_lines_with<S, F>(
    lines: &[S],
    table: &TransitionTable,
    config: &Config,
    mut on_line: F,
) -> Result<Batch, RowlifeError>
where
    S: AsRef<str>,
    F: FnMut(&LineReport),
{
    config.validate()?;
    let classifier = Classifier::from_config(table, config);
    let start = Instant::now();

    let mut reports = Vec::with_capacity(lines.len());
    for (idx, line) in lines.iter().enumerate() {
        let input = line.as_ref();
        let report = LineReport {
            line: idx + 1,
            input: input.to_owned(),
            result: classify_line(input, &classifier, config),
        };
        if let Err(e) = &report.result {
            log::warn!("line {}: {e}", report.line);
        }
        on_line(&report);
        reports.push(report);
    }

    Ok(Batch {
        reports,
        elapsed: start.elapsed(),
    })
}
