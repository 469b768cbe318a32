//! Error types for sketch recognition.

use thiserror::Error;

/// Recognition error type.
#[derive(Error, Debug)]
pub enum Error {
    /// An item was requested from a recognizer whose last score was not positive.
    #[error("{recognizer} has no matched item; score a positive match first")]
    NotFound { recognizer: &'static str },

    /// A correction could not reproduce the match its probe reported.
    ///
    /// The item pool changed between `score` and `apply`; callers should treat
    /// this as fatal.
    #[error("correction {corrector} diverged from its probe")]
    CorrectionDiverged { corrector: &'static str },

    #[error("a stroke is already being collected")]
    StrokeInProgress,

    #[error("no stroke is being collected")]
    NoActiveStroke,

    #[error("a stroke needs at least one sample")]
    EmptyStroke,

    #[error("item index {index} out of range (len {len})")]
    ItemIndex { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
