//! # Error Types

/// Errors from hantok operations.
#[derive(Debug, thiserror::Error)]
pub enum HantokError {
    /// A token appears more than once in a vocabulary source.
    #[error("duplicate token in vocabulary: {token:?}")]
    MalformedVocabulary {
        /// The repeated token.
        token: String,
    },

    /// A reserved token is absent from a loaded vocabulary.
    #[error("vocabulary is missing reserved token: {token:?}")]
    MissingReservedToken {
        /// The absent reserved token.
        token: &'static str,
    },

    /// A parsed id does not fit the target token type.
    #[error("token id ({id}) exceeds token type capacity")]
    TokenIdOverflow {
        /// The id that exceeded the capacity.
        id: usize,
    },

    /// The language tag has no implemented pipeline.
    #[error("unsupported language: {lang:?}")]
    UnsupportedLanguage {
        /// The rejected language tag.
        lang: String,
    },

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Parse error in a vocabulary source line.
    #[error("parse error: {0}")]
    Parse(String),
}

/// Result type for hantok operations.
pub type HtResult<T> = core::result::Result<T, HantokError>;
