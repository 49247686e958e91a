//! # `hantok` Mandarin TTS Text Frontend
//!
//! `hantok` converts raw utterance strings into the integer token-id
//! sequences a speech-synthesis model consumes, handling mixed-script
//! (Latin + Chinese) input, pinyin romanization with numeric tones,
//! blank-token interspersion, and sos/eos markers.
//!
//! See:
//! * [`vocab`] to load the ``{ token -> id }`` vocabulary.
//! * [`convert`] to turn utterances into flat token sequences.
//! * [`assemble`] to map token sequences into id sequences.
//! * [`tokenizer`] for the combined front door.
//!
//! ```rust,no_run
//! use hantok::{Tokenizer, TokenizeOptions};
//!
//! # fn main() -> hantok::HtResult<()> {
//! let tokenizer: Tokenizer<u32> = Tokenizer::from_path("tokens.txt")?;
//!
//! let ids = tokenizer.texts_to_token_ids(
//!     &["你好, hello"],
//!     &TokenizeOptions::default().with_add_eos(true),
//! )?;
//! # let _ = ids;
//! # Ok(())
//! # }
//! ```
//!
//! ## Crate Features
//!
//! #### feature: ``ahash``
//!
//! This swaps all HashMap/HashSet implementations for ``ahash``; which is
//! a performance win on many/(most?) modern CPUs.
//!
//! This is done by the ``types::HtHash{*}`` type alias machinery.
//!
//! #### feature: ``rayon``
//!
//! This enables parallel batch conversion using the ``rayon`` crate.
//! Utterances in a batch are independent, so the batch paths parallelize
//! without changing output; per-utterance order is preserved either way.
#![warn(missing_docs, unused)]

pub mod assemble;
pub mod convert;
pub mod errors;
pub mod script;
pub mod tokenizer;
pub mod types;
pub mod vocab;

#[doc(inline)]
pub use assemble::{AssembleOptions, apply_sos_eos, assemble_ids, intersperse_blank, map_tokens};
#[doc(inline)]
pub use convert::{JiebaSegmenter, MandarinRomanizer, PinyinConverter, Romanizer, Segmenter};
#[doc(inline)]
pub use errors::{HantokError, HtResult};
#[doc(inline)]
pub use script::{SegmentClass, is_mandarin_char};
#[doc(inline)]
pub use tokenizer::{LanguageFamily, Phonemizer, TokenizeOptions, Tokenizer};
#[doc(inline)]
pub use types::TokenType;
#[doc(inline)]
pub use vocab::{TokenVocab, load_token_vocab_path, read_token_vocab};
