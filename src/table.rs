//! Precomputed neighborhood-to-cell lookup for the five-cell rule.

/// Number of cells in a neighborhood window.
pub const WINDOW_BITS: u32 = 5;
/// Mask selecting the bits of a window.
pub const WINDOW_MASK: u8 = 0b11111;
/// Number of distinct windows.
pub const WINDOW_COUNT: usize = 1 << WINDOW_BITS;

/// Output bit for every five-cell window.
///
/// Bit 2 is the center cell; the most recently shifted-in cell sits in
/// bit 0. A blank center becomes filled when the window holds two or three
/// filled cells. A filled center survives when the window holds three or
/// five filled cells (two or four neighbours).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionTable {
    states: [bool; WINDOW_COUNT],
}

impl TransitionTable {
    pub fn compute() -> Self {
        let mut states = [false; WINDOW_COUNT];
        for (window, state) in states.iter_mut().enumerate() {
            let filled = window.count_ones();
            *state = if window & 0b00100 == 0 {
                filled == 2 || filled == 3
            } else {
                filled == 3 || filled == 5
            };
        }
        Self { states }
    }

    /// Look up the next center cell. Bits above the window are ignored.
    #[inline]
    pub fn get(&self, window: u8) -> bool {
        self.states[(window & WINDOW_MASK) as usize]
    }

    pub fn states(&self) -> &[bool; WINDOW_COUNT] {
        &self.states
    }
}

impl Default for TransitionTable {
    fn default() -> Self {
        Self::compute()
    }
}
