//! # Vocabulary IO
//!
//! Line-oriented ``tokens.txt`` reader.
//!
//! Each non-empty line is either ``<token> <id>`` (whitespace separated)
//! or a bare ``<id>``, which assigns the id to the literal space token,
//! since a space cannot survive the whitespace split.

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use crate::{
    errors::{HantokError, HtResult},
    types::TokenType,
    vocab::token_vocab::{SPACE_TOKEN, TokenVocab},
};

/// Load a [`TokenVocab`] from a token file.
///
/// ## Arguments
/// * `path` - the path to the vocabulary file.
pub fn load_token_vocab_path<T, P>(path: P) -> HtResult<TokenVocab<T>>
where
    T: TokenType,
    P: AsRef<Path>,
{
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    read_token_vocab(reader)
}

/// Read a [`TokenVocab`] from a [`BufRead`] stream.
///
/// ## Arguments
/// * `reader` - the line reader.
///
/// ## Returns
/// The frozen vocabulary; or a load error per [`TokenVocab::from_pairs`].
pub fn read_token_vocab<T, R>(reader: R) -> HtResult<TokenVocab<T>>
where
    T: TokenType,
    R: BufRead,
{
    let mut pairs: Vec<(String, T)> = Vec::new();

    for line in reader.lines() {
        let line = line?;
        let fields: Vec<&str> = line.split_whitespace().collect();

        let (token, id) = match fields.as_slice() {
            [] => continue,
            [id] => (SPACE_TOKEN, *id),
            [token, id, ..] => (*token, *id),
        };

        let id: usize = id
            .parse()
            .map_err(|_| HantokError::Parse(format!("bad token id: {line:?}")))?;
        let id = T::from_usize(id).ok_or(HantokError::TokenIdOverflow { id })?;

        pairs.push((token.to_string(), id));
    }

    let vocab = TokenVocab::from_pairs(pairs)?;
    log::debug!("loaded vocabulary: {} tokens", vocab.vocab_size());
    Ok(vocab)
}
