//! Long-term behavior classification by cycle detection.
//!
//! Every generation is recorded twice: once with its position and once
//! without. A repeat of the exact line means a stationary oscillator; a
//! repeat of only the shape means the line drifts sideways.

use std::collections::hash_map::{Entry, HashMap};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::{Config, DEFAULT_MAX_GENERATIONS};
use crate::evolve::read;
use crate::pattern::Pattern;
use crate::table::TransitionTable;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// The line became fully blank.
    Vanishing,
    /// The same line recurred at the same position.
    Blinking,
    /// The same shape recurred at a different position.
    Gliding,
    /// Nothing recurred within the generation limit.
    Other,
}

impl Outcome {
    pub const ALL: [Outcome; 4] = [
        Outcome::Vanishing,
        Outcome::Blinking,
        Outcome::Gliding,
        Outcome::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Outcome::Vanishing => "vanishing",
            Outcome::Blinking => "blinking",
            Outcome::Gliding => "gliding",
            Outcome::Other => "other",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome plus where in the evolution it was decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub outcome: Outcome,
    /// Generation that decided the outcome; the limit for `Other`.
    pub generation: usize,
    /// Generations between the two matching lines (blinking, gliding).
    pub period: Option<usize>,
    /// Horizontal displacement per period (gliding only).
    pub shift: Option<i64>,
}

impl Verdict {
    fn terminal(outcome: Outcome, generation: usize) -> Self {
        Self {
            outcome,
            generation,
            period: None,
            shift: None,
        }
    }
}

/// Exact line identity: position and shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LineKey {
    pub offset: i64,
    pub runs: Vec<usize>,
}

/// Shape identity, position ignored.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ShapeKey {
    pub runs: Vec<usize>,
}

impl From<&Pattern> for LineKey {
    fn from(p: &Pattern) -> Self {
        Self {
            offset: p.offset(),
            runs: p.runs().to_vec(),
        }
    }
}

impl From<&Pattern> for ShapeKey {
    fn from(p: &Pattern) -> Self {
        Self {
            runs: p.runs().to_vec(),
        }
    }
}

/// Classifies lines against a shared table with a fixed generation limit.
#[derive(Debug, Clone, Copy)]
pub struct Classifier<'a> {
    table: &'a TransitionTable,
    max_generations: usize,
}

impl<'a> Classifier<'a> {
    pub fn new(table: &'a TransitionTable, max_generations: usize) -> Self {
        Self {
            table,
            max_generations,
        }
    }

    pub fn from_config(table: &'a TransitionTable, config: &Config) -> Self {
        Self::new(table, config.max_generations)
    }

    pub fn max_generations(&self) -> usize {
        self.max_generations
    }

    pub fn classify(&self, initial: &Pattern) -> Verdict {
        classify(initial, self.table, self.max_generations)
    }
}

/// Classify `initial` with the default limit of 100 generations.
pub fn solve(initial: &Pattern, table: &TransitionTable) -> Outcome {
    classify(initial, table, DEFAULT_MAX_GENERATIONS).outcome
}

/// Evolve `initial` for up to `max_generations` and report how it ends.
///
/// Both histories are seeded with the initial line, so a line that returns
/// to its starting position is caught on its first repeat.
pub fn classify(initial: &Pattern, table: &TransitionTable, max_generations: usize) -> Verdict {
    if initial.is_empty() {
        return Verdict::terminal(Outcome::Vanishing, 0);
    }

    let mut lines: HashMap<LineKey, usize> = HashMap::new();
    let mut shapes: HashMap<ShapeKey, (usize, i64)> = HashMap::new();
    lines.insert(LineKey::from(initial), 0);
    shapes.insert(ShapeKey::from(initial), (0, initial.offset()));

    let mut current = initial.clone();
    for generation in 1..=max_generations {
        let next = read(&current, table);
        log::trace!("gen {generation}: offset {} runs {:?}", next.offset(), next.runs());

        if next.is_empty() {
            log::debug!("vanished at generation {generation}");
            return Verdict::terminal(Outcome::Vanishing, generation);
        }

        match lines.entry(LineKey::from(&next)) {
            Entry::Occupied(seen) => {
                let period = generation - *seen.get();
                log::debug!("line repeats at generation {generation}, period {period}");
                return Verdict {
                    outcome: Outcome::Blinking,
                    generation,
                    period: Some(period),
                    shift: None,
                };
            }
            Entry::Vacant(slot) => {
                slot.insert(generation);
            }
        }

        match shapes.entry(ShapeKey::from(&next)) {
            Entry::Occupied(seen) => {
                let (first, first_offset) = *seen.get();
                let period = generation - first;
                let shift = next.offset() - first_offset;
                log::debug!(
                    "shape repeats at generation {generation}, period {period}, shift {shift}"
                );
                return Verdict {
                    outcome: Outcome::Gliding,
                    generation,
                    period: Some(period),
                    shift: Some(shift),
                };
            }
            Entry::Vacant(slot) => {
                slot.insert((generation, next.offset()));
            }
        }

        current = next;
    }

    log::debug!("unresolved after {max_generations} generations");
    Verdict::terminal(Outcome::Other, max_generations)
}
