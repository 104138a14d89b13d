use thiserror::Error;

/// Failure reported when a positional sink is released.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OverwriteError {
    #[error("overwrite sink ran out of slots: {dropped} value(s) discarded after {written} written")]
    OutOfSlots { written: usize, dropped: usize },
}
