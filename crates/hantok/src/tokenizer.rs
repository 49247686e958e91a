//! # Pipeline Entry Point
//!
//! [`Tokenizer`] is the front door: raw utterances in, token-id
//! sequences out. Language tags dispatch through [`LanguageFamily`];
//! only the Mandarin family is wired up, and the phonemized arm fails
//! fast so the boundary stays visible for a later [`Phonemizer`] impl.

use std::sync::Arc;

use crate::{
    assemble::{AssembleOptions, assemble_ids},
    convert::{JiebaSegmenter, MandarinRomanizer, PinyinConverter, Romanizer, Segmenter},
    errors::{HantokError, HtResult},
    types::TokenType,
    vocab::{TokenVocab, load_token_vocab_path},
};

/// Language-family dispatch for [`Tokenizer::texts_to_token_ids`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LanguageFamily {
    /// The Mandarin pipeline: segmentation + romanization.
    Mandarin,

    /// Everything else: the (unwired) phonemization pipeline.
    Other(String),
}

impl LanguageFamily {
    /// Classify a language tag.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "cmn" | "zh-cn" => LanguageFamily::Mandarin,
            other => LanguageFamily::Other(other.to_string()),
        }
    }
}

/// Grapheme-to-phoneme collaborator for non-Mandarin languages.
///
/// Declared so the non-Mandarin dispatch arm can be filled in without
/// touching the Mandarin pipeline; nothing in this crate implements or
/// calls it yet.
pub trait Phonemizer: Send + Sync {
    /// Phonemize `text` for the given language tag.
    fn phonemize(
        &self,
        text: &str,
        lang: &str,
    ) -> HtResult<Vec<String>>;
}

/// Options for [`Tokenizer::texts_to_token_ids`].
#[derive(Debug, Clone)]
pub struct TokenizeOptions {
    /// Insert the pad id between every adjacent pair of ids.
    pub intersperse_blank: bool,

    /// Prepend the start-of-utterance id.
    pub add_sos: bool,

    /// Append the end-of-utterance id.
    pub add_eos: bool,

    /// Language tag for dispatch.
    pub lang: String,
}

impl Default for TokenizeOptions {
    fn default() -> Self {
        Self {
            intersperse_blank: true,
            add_sos: false,
            add_eos: false,
            lang: "cmn".to_string(),
        }
    }
}

impl TokenizeOptions {
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

    /// Set the language tag.
    pub fn with_lang<L: Into<String>>(
        self,
        lang: L,
    ) -> Self {
        Self {
            lang: lang.into(),
            ..self
        }
    }

    fn assemble_options(&self) -> AssembleOptions {
        AssembleOptions {
            intersperse_blank: self.intersperse_blank,
            add_sos: self.add_sos,
            add_eos: self.add_eos,
        }
    }
}

/// Text to token-id pipeline.
///
/// Owns the frozen [`TokenVocab`] and a [`PinyinConverter`]; both are
/// read-only after construction, so batches parallelize freely.
pub struct Tokenizer<T: TokenType, S = JiebaSegmenter, R = MandarinRomanizer> {
    vocab: Arc<TokenVocab<T>>,
    converter: PinyinConverter<S, R>,
}

impl<T: TokenType> Tokenizer<T> {
    /// Create a tokenizer over a vocabulary, with default collaborators.
    pub fn new(vocab: Arc<TokenVocab<T>>) -> Self {
        Self::with_parts(vocab, PinyinConverter::new())
    }

    /// Load the vocabulary from a token file and create a tokenizer.
    ///
    /// ## Arguments
    /// * `path` - the path to the vocabulary file.
    pub fn from_path<P: AsRef<std::path::Path>>(path: P) -> HtResult<Self> {
        let vocab = load_token_vocab_path(path)?;
        Ok(Self::new(Arc::new(vocab)))
    }
}

impl<T, S, R> Tokenizer<T, S, R>
where
    T: TokenType,
    S: Segmenter,
    R: Romanizer,
{
    /// Create a tokenizer from explicit parts.
    pub fn with_parts(
        vocab: Arc<TokenVocab<T>>,
        converter: PinyinConverter<S, R>,
    ) -> Self {
        Self { vocab, converter }
    }

    /// Get the underlying vocabulary.
    pub fn vocab(&self) -> &Arc<TokenVocab<T>> {
        &self.vocab
    }

    /// Convert a batch of utterances into token-id sequences.
    ///
    /// ## Arguments
    /// * `texts` - the utterances, one id sequence produced per text.
    /// * `options` - sequence-transformation flags and the language tag.
    ///
    /// ## Returns
    /// One id sequence per utterance, in input order; or
    /// [`HantokError::UnsupportedLanguage`] for a tag outside the
    /// Mandarin family.
    pub fn texts_to_token_ids<U>(
        &self,
        texts: &[U],
        options: &TokenizeOptions,
    ) -> HtResult<Vec<Vec<T>>>
    where
        U: AsRef<str> + Sync,
    {
        match LanguageFamily::from_tag(&options.lang) {
            LanguageFamily::Mandarin => {
                let tokens_list = self.converter.convert_batch(texts, true);
                Ok(self.tokens_to_token_ids(&tokens_list, options))
            }
            LanguageFamily::Other(lang) => Err(HantokError::UnsupportedLanguage { lang }),
        }
    }

    /// Assemble pre-converted token sequences into id sequences.
    ///
    /// Out-of-vocabulary tokens are dropped per utterance; one
    /// utterance's drops never affect its siblings.
    pub fn tokens_to_token_ids(
        &self,
        tokens_list: &[Vec<String>],
        options: &TokenizeOptions,
    ) -> Vec<Vec<T>> {
        let assemble = options.assemble_options();

        cfg_if::cfg_if! {
            if #[cfg(feature = "rayon")] {
                use rayon::prelude::*;

                return tokens_list
                    .par_iter()
                    .map(|tokens| assemble_ids(tokens, &self.vocab, &assemble))
                    .collect();
            } else {
                return tokens_list
                    .iter()
                    .map(|tokens| assemble_ids(tokens, &self.vocab, &assemble))
                    .collect();
            }
        }
    }
}
