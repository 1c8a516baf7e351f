//! Run-length representation of a single line.
//!
//! A line such as `##....#####...#` is stored as the run lengths
//! `[2, 4, 5, 3, 1]`. Blank cells on either end carry no information, so the
//! first and last entries always count filled cells: filled runs sit at even
//! indexes and blank runs at odd ones. The horizontal position of the first
//! filled cell is kept separately as `offset`.

use std::fmt;
use std::str::FromStr;

use crate::config::Config;
use crate::error::RowlifeError;

/// Finalized, immutable line.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Pattern {
    offset: i64,
    runs: Vec<usize>,
}

impl Pattern {
    /// The fully blank line.
    pub fn empty(offset: i64) -> Self {
        Self {
            offset,
            runs: Vec::new(),
        }
    }

    /// Build a pattern from alternating filled/blank run lengths.
    ///
    /// Zero-length runs are merged away, so the result always satisfies the
    /// run invariants regardless of the input.
    pub fn from_runs(offset: i64, runs: &[usize]) -> Self {
        let mut builder = PatternBuilder::new(offset);
        for (i, &run) in runs.iter().enumerate() {
            builder.insert(i % 2 == 0, run);
        }
        builder.complete()
    }

    /// Parse a line using the default `#`/`.` symbols.
    pub fn parse(line: &str) -> Result<Self, RowlifeError> {
        Self::parse_with(line, &Config::default())
    }

    /// Parse a line using the symbols from `config`.
    ///
    /// Leading blanks are counted into the offset, so offset zero is the
    /// first character of the line. Columns in errors are 1-based.
    pub fn parse_with(line: &str, config: &Config) -> Result<Self, RowlifeError> {
        let mut builder = PatternBuilder::new(0);
        for (i, ch) in line.chars().enumerate() {
            if ch == config.filled {
                builder.push(true);
            } else if ch == config.blank {
                builder.push(false);
            } else {
                return Err(RowlifeError::InvalidCharacter { ch, column: i + 1 });
            }
        }
        Ok(builder.complete())
    }

    pub fn offset(&self) -> i64 {
        self.offset
    }

    pub fn runs(&self) -> &[usize] {
        &self.runs
    }

    /// True when the line has no filled cells at all.
    ///
    /// Both an empty run list and a list of zero-length runs count.
    pub fn is_empty(&self) -> bool {
        self.runs.iter().all(|&r| r == 0)
    }

    /// Distance from the first to the last filled cell, inclusive.
    pub fn width(&self) -> usize {
        self.runs.iter().sum()
    }

    /// Number of filled cells.
    pub fn population(&self) -> usize {
        self.runs.iter().step_by(2).sum()
    }

    /// Cell states from the first filled cell to the last.
    pub fn cells(&self) -> impl Iterator<Item = bool> + '_ {
        self.runs
            .iter()
            .enumerate()
            .flat_map(|(i, &run)| std::iter::repeat(i % 2 == 0).take(run))
    }

    /// Render the occupied span with the given symbols, without padding.
    pub fn render(&self, filled: char, blank: char) -> String {
        self.cells()
            .map(|bit| if bit { filled } else { blank })
            .collect()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render('#', '.'))
    }
}

impl FromStr for Pattern {
    type Err = RowlifeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Incremental two-state run-length encoder producing a [`Pattern`].
#[derive(Debug, Clone, Default)]
pub struct PatternBuilder {
    runs: Vec<usize>,
    offset: i64,
    count: usize,
}

impl PatternBuilder {
    pub fn new(offset: i64) -> Self {
        Self {
            runs: Vec::new(),
            offset,
            count: 0,
        }
    }

    /// True once a filled cell has been written; `offset` is frozen from then on.
    pub fn started(&self) -> bool {
        !self.runs.is_empty() || self.count > 0
    }

    pub fn offset(&self) -> i64 {
        self.offset
    }

    pub fn push(&mut self, bit: bool) {
        self.insert(bit, 1);
    }

    /// Append `steps` copies of `bit`.
    ///
    /// Blanks before the first filled cell are dropped and move the offset
    /// right instead.
    pub fn insert(&mut self, bit: bool, steps: usize) {
        if steps == 0 {
            return;
        }
        if !bit && !self.started() {
            self.offset += steps as i64;
            return;
        }

        let in_filled = self.runs.len() % 2 == 0;
        if in_filled != bit {
            self.runs.push(self.count);
            self.count = 0;
        }
        self.count += steps;
    }

    /// Flush the hanging filled run, if any, and finalize.
    pub fn complete(mut self) -> Pattern {
        if self.started() && self.runs.len() % 2 == 0 {
            self.runs.push(self.count);
        }
        Pattern {
            offset: self.offset,
            runs: self.runs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_blanks_dropped() {
        let mut b = PatternBuilder::new(0);
        b.insert(true, 3);
        b.insert(false, 4);
        let p = b.complete();
        assert_eq!(p.runs(), &[3]);
        assert_eq!(p.offset(), 0);
    }

    #[test]
    fn blank_only_builder_is_empty() {
        let mut b = PatternBuilder::new(-2);
        b.insert(false, 5);
        assert!(!b.started());
        let p = b.complete();
        assert!(p.is_empty());
        assert!(p.runs().is_empty());
        assert_eq!(p.offset(), 3);
    }

    #[test]
    fn zero_steps_is_noop() {
        let mut b = PatternBuilder::new(0);
        b.insert(true, 0);
        b.insert(false, 0);
        assert!(!b.started());
        assert_eq!(b.offset(), 0);
    }

    #[test]
    fn from_runs_merges_zero_runs() {
        let p = Pattern::from_runs(4, &[1, 0, 2, 3, 1]);
        assert_eq!(p.runs(), &[3, 3, 1]);
        assert_eq!(p.offset(), 4);
    }

    #[test]
    fn zero_entry_counts_as_empty() {
        let p = Pattern {
            offset: 0,
            runs: vec![0],
        };
        assert!(p.is_empty());
    }

    #[test]
    fn render_matches_input() {
        let p = Pattern::parse("..##...#.#..").unwrap();
        assert_eq!(p.to_string(), "##...#.#");
        assert_eq!(p.population(), 4);
        assert_eq!(p.width(), 8);
    }
}
