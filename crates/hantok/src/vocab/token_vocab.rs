//! # Token Vocabulary

use crate::errors::{HantokError, HtResult};
use crate::types::{HtHashMap, TokenType, hash_map_new};

/// The reserved padding / blank token.
pub const PAD_TOKEN: &str = "_";

/// The reserved start-of-utterance token.
pub const SOS_TOKEN: &str = "^";

/// The reserved end-of-utterance token.
pub const EOS_TOKEN: &str = "$";

/// The reserved word-separator token.
pub const SPACE_TOKEN: &str = " ";

/// Frozen ``{ token -> T }`` vocabulary with reserved ids.
///
/// Constructed once (see [`crate::vocab::io`]) and shared read-only with
/// the rest of the pipeline; there is no mutation api.
#[derive(Debug, Clone)]
pub struct TokenVocab<T: TokenType> {
    token_to_id: HtHashMap<String, T>,

    pad_id: T,
    sos_id: T,
    eos_id: T,
    space_id: T,
}

impl<T: TokenType> TokenVocab<T> {
    /// Build a vocabulary from ``(token, id)`` pairs.
    ///
    /// ## Arguments
    /// * `pairs` - An iterator of token strings and their ids.
    ///
    /// ## Returns
    /// A new `TokenVocab`; or [`HantokError::MalformedVocabulary`] on a
    /// repeated token, or [`HantokError::MissingReservedToken`] if any of
    /// `_`, `^`, `$`, or the space token is absent.
    pub fn from_pairs<I, S>(pairs: I) -> HtResult<Self>
    where
        I: IntoIterator<Item = (S, T)>,
        S: Into<String>,
    {
        let mut token_to_id: HtHashMap<String, T> = hash_map_new();

        for (token, id) in pairs {
            let token = token.into();
            if token_to_id.contains_key(&token) {
                return Err(HantokError::MalformedVocabulary { token });
            }
            token_to_id.insert(token, id);
        }

        let reserved = |token: &'static str| -> HtResult<T> {
            token_to_id
                .get(token)
                .copied()
                .ok_or(HantokError::MissingReservedToken { token })
        };

        // See https://github.com/rhasspy/piper/blob/master/TRAINING.md
        // for the reserved token conventions.
        let pad_id = reserved(PAD_TOKEN)?;
        let sos_id = reserved(SOS_TOKEN)?;
        let eos_id = reserved(EOS_TOKEN)?;
        let space_id = reserved(SPACE_TOKEN)?;

        Ok(Self {
            token_to_id,
            pad_id,
            sos_id,
            eos_id,
            space_id,
        })
    }

    /// Look up the id for a token.
    ///
    /// Absence is not an error at this layer; callers decide policy.
    pub fn lookup(
        &self,
        token: &str,
    ) -> Option<T> {
        self.token_to_id.get(token).copied()
    }

    /// Check whether a token is in the vocabulary.
    pub fn contains(
        &self,
        token: &str,
    ) -> bool {
        self.token_to_id.contains_key(token)
    }

    /// Get the number of tokens in the vocabulary.
    pub fn vocab_size(&self) -> usize {
        self.token_to_id.len()
    }

    /// Check if the vocabulary is empty.
    pub fn is_empty(&self) -> bool {
        self.token_to_id.is_empty()
    }

    /// Get the padding / blank id.
    pub fn pad_id(&self) -> T {
        self.pad_id
    }

    /// Get the start-of-utterance id.
    pub fn sos_id(&self) -> T {
        self.sos_id
    }

    /// Get the end-of-utterance id.
    pub fn eos_id(&self) -> T {
        self.eos_id
    }

    /// Get the word-separator id.
    pub fn space_id(&self) -> T {
        self.space_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    pub fn reserved_pairs() -> Vec<(&'static str, u32)> {
        vec![(PAD_TOKEN, 0), (SOS_TOKEN, 1), (EOS_TOKEN, 2), (SPACE_TOKEN, 3)]
    }

    #[test]
    fn test_from_pairs() {
        let mut pairs = reserved_pairs();
        pairs.push(("a", 4));
        pairs.push(("b", 5));

        let vocab = TokenVocab::<u32>::from_pairs(pairs).unwrap();

        assert_eq!(vocab.vocab_size(), 6);
        assert!(!vocab.is_empty());

        assert_eq!(vocab.pad_id(), 0);
        assert_eq!(vocab.sos_id(), 1);
        assert_eq!(vocab.eos_id(), 2);
        assert_eq!(vocab.space_id(), 3);

        assert_eq!(vocab.lookup("a"), Some(4));
        assert_eq!(vocab.lookup("zz"), None);
        assert!(vocab.contains("b"));
    }

    #[test]
    fn test_duplicate_token_fails() {
        let mut pairs = reserved_pairs();
        pairs.push(("a", 4));
        pairs.push(("a", 5));

        let err = TokenVocab::<u32>::from_pairs(pairs).unwrap_err();
        assert!(matches!(
            err,
            crate::errors::HantokError::MalformedVocabulary { token } if token == "a"
        ));
    }

    #[test]
    fn test_missing_reserved_fails() {
        for dropped in [PAD_TOKEN, SOS_TOKEN, EOS_TOKEN, SPACE_TOKEN] {
            let pairs: Vec<_> = reserved_pairs()
                .into_iter()
                .filter(|(t, _)| *t != dropped)
                .collect();

            let err = TokenVocab::<u32>::from_pairs(pairs).unwrap_err();
            assert!(matches!(
                err,
                crate::errors::HantokError::MissingReservedToken { token } if token == dropped
            ));
        }
    }
}
