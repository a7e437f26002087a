use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Completion of a form, as rendered by the progress bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProgressState {
    pub filled: usize,
    pub total: usize,
    /// `round(100 * filled / total)`, halves rounded up. Zero for an empty form.
    pub percent: u8,
}

impl ProgressState {
    pub fn from_counts(filled: usize, total: usize) -> Self {
        if total == 0 {
            return Self::default();
        }
        let filled = filled.min(total);
        // (100f/t + 1/2) floored, kept in integers
        let percent = (200 * filled + total) / (2 * total);
        Self {
            filled,
            total,
            percent: percent as u8,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.filled == self.total
    }
}
