//! # Token-ID Assembly
//!
//! Maps flat token sequences through the vocabulary and applies the
//! configured sequence transformations, in a fixed order:
//! map, then blank interspersion, then sos, then eos.

use crate::types::TokenType;
use crate::vocab::TokenVocab;

/// Sequence-transformation flags for [`assemble_ids`].
#[derive(Debug, Clone, Copy)]
pub struct AssembleOptions {
    /// Insert the pad id between every adjacent pair of ids.
    pub intersperse_blank: bool,

    /// Prepend the start-of-utterance id.
    pub add_sos: bool,

    /// Append the end-of-utterance id.
    pub add_eos: bool,
}

impl Default for AssembleOptions {
    fn default() -> Self {
        Self {
            intersperse_blank: true,
            add_sos: false,
            add_eos: false,
        }
    }
}

impl AssembleOptions {
    /// Set the blank-interspersion flag.
    pub fn with_intersperse_blank(
        self,
        intersperse_blank: bool,
    ) -> Self {
        Self {
            intersperse_blank,
            ..self
        }
    }

    /// Set the sos flag.
    pub fn with_add_sos(
        self,
        add_sos: bool,
    ) -> Self {
        Self { add_sos, ..self }
    }

    /// Set the eos flag.
    pub fn with_add_eos(
        self,
        add_eos: bool,
    ) -> Self {
        Self { add_eos, ..self }
    }
}

/// Map tokens through the vocabulary, dropping unknown tokens.
///
/// Out-of-vocabulary tokens are not an error: each is dropped with a
/// warning diagnostic, and processing continues. Every id returned is
/// therefore a value present in the vocabulary.
pub fn map_tokens<T, S>(
    tokens: &[S],
    vocab: &TokenVocab<T>,
) -> Vec<T>
where
    T: TokenType,
    S: AsRef<str>,
{
    tokens
        .iter()
        .filter_map(|token| {
            let token = token.as_ref();
            let id = vocab.lookup(token);
            if id.is_none() {
                log::warn!("Skip OOV {token:?}");
            }
            id
        })
        .collect()
}

/// Insert `pad` between every adjacent pair of ids.
///
/// Nothing is inserted before the first or after the last element;
/// sequences of length 0 or 1 come back unchanged.
pub fn intersperse_blank<T: TokenType>(
    ids: Vec<T>,
    pad: T,
) -> Vec<T> {
    if ids.len() < 2 {
        return ids;
    }

    let mut out = Vec::with_capacity(2 * ids.len() - 1);
    let mut iter = ids.into_iter();
    if let Some(first) = iter.next() {
        out.push(first);
    }
    for id in iter {
        out.push(pad);
        out.push(id);
    }
    out
}

/// Prepend `sos` iff `add_sos`; append `eos` iff `add_eos`.
pub fn apply_sos_eos<T: TokenType>(
    mut ids: Vec<T>,
    sos: T,
    eos: T,
    add_sos: bool,
    add_eos: bool,
) -> Vec<T> {
    if add_sos {
        ids.insert(0, sos);
    }
    if add_eos {
        ids.push(eos);
    }
    ids
}

/// Assemble one utterance's token sequence into ids.
pub fn assemble_ids<T, S>(
    tokens: &[S],
    vocab: &TokenVocab<T>,
    options: &AssembleOptions,
) -> Vec<T>
where
    T: TokenType,
    S: AsRef<str>,
{
    let mut ids = map_tokens(tokens, vocab);
    if options.intersperse_blank {
        ids = intersperse_blank(ids, vocab.pad_id());
    }
    apply_sos_eos(
        ids,
        vocab.sos_id(),
        vocab.eos_id(),
        options.add_sos,
        options.add_eos,
    )
}
