//! Classification of one-dimensional lines under a fixed five-cell rule.
//!
//! Lines are stored as run lengths plus a horizontal offset. Each generation
//! is computed by sliding a five-bit window over the runs, and a line is
//! classified as vanishing, blinking, gliding or other by watching for
//! repeated lines and repeated shapes.

pub mod batch;
pub mod classify;
pub mod config;
pub mod error;
pub mod evolve;
pub mod io_utils;
pub mod pattern;
pub mod table;

pub use batch::{
    classify_line, classify_lines, classify_lines_with, read_lines, Batch, LineReport, Record,
};
pub use classify::{classify, solve, Classifier, LineKey, Outcome, ShapeKey, Verdict};
pub use config::{Config, DEFAULT_MAX_GENERATIONS};
pub use error::RowlifeError;
pub use evolve::{read, Generations};
pub use pattern::{Pattern, PatternBuilder};
pub use table::TransitionTable;
