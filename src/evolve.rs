//! One-generation step over the run-length form.
//!
//! The line is never expanded into cells. A five-bit register slides over
//! the bit stream implied by the runs and every position writes the table's
//! output into a fresh [`PatternBuilder`].

use crate::pattern::{Pattern, PatternBuilder};
use crate::table::{TransitionTable, WINDOW_MASK};

/// Reach of the rule on either side of the center cell.
pub const RADIUS: i64 = 2;

/// Compute the generation following `pattern`.
///
/// The output window for the first input cell is centered two cells to its
/// left, hence the new builder starts at `offset - RADIUS`.
pub fn read(pattern: &Pattern, table: &TransitionTable) -> Pattern {
    let mut next = PatternBuilder::new(pattern.offset() - RADIUS);
    let mut bit = true;
    let mut register: u8 = 0;

    for &run in pattern.runs() {
        let mut remaining = run;
        while remaining > 0 {
            register = ((register << 1) | bit as u8) & WINDOW_MASK;
            let steps = if is_absorbing(register, bit) {
                remaining
            } else {
                1
            };
            next.insert(table.get(register), steps);
            remaining -= steps;
        }
        bit = !bit;
    }

    // Blank field past the last run: keep writing until the rule's
    // influence has left the register.
    while register != 0 {
        register = (register << 1) & (WINDOW_MASK & !1);
        next.push(table.get(register));
    }

    next.complete()
}

/// Whether feeding more copies of `bit` leaves `register` unchanged.
///
/// `00000` with blank input and `11111` with filled input reproduce
/// themselves on every shift, so the table output is constant for the rest
/// of the run and the run can be consumed in one step.
#[inline]
pub fn is_absorbing(register: u8, bit: bool) -> bool {
    match bit {
        false => register == 0,
        true => register == WINDOW_MASK,
    }
}

/// Iterator over successive generations, starting after `pattern`.
pub struct Generations<'a> {
    current: Pattern,
    table: &'a TransitionTable,
}

impl<'a> Generations<'a> {
    pub fn new(pattern: Pattern, table: &'a TransitionTable) -> Self {
        Self {
            current: pattern,
            table,
        }
    }
}

impl Iterator for Generations<'_> {
    type Item = Pattern;

    fn next(&mut self) -> Option<Pattern> {
        let next = read(&self.current, self.table);
        self.current = next.clone();
        Some(next)
    }
}
