use crate::error::RowlifeError;

/// Generation bound used when nothing else is configured.
pub const DEFAULT_MAX_GENERATIONS: usize = 100;

/// Runtime configuration for parsing and classifying lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Number of generations evolved before giving up with `other`.
    pub max_generations: usize,
    /// Symbol for a filled cell.
    pub filled: char,
    /// Symbol for a blank cell.
    pub blank: char,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_generations: DEFAULT_MAX_GENERATIONS,
            filled: '#',
            blank: '.',
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), RowlifeError> {
        if self.max_generations == 0 {
            return Err(RowlifeError::Config(
                "max_generations must be at least 1".into(),
            ));
        }
        if self.filled == self.blank {
            return Err(RowlifeError::Config(format!(
                "filled and blank symbols must differ (both {:?})",
                self.filled
            )));
        }
        Ok(())
    }
}
