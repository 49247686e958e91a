//! # Vocabulary
//!
//! This module provides the token vocabulary and its io mechanisms.
//!
//! The primary type is [`TokenVocab`]: a frozen ``{ token -> T }``
//! mapping with the four reserved ids every utterance pipeline needs
//! (pad, sos, eos, and the word separator).

pub mod io;
pub mod token_vocab;

#[doc(inline)]
pub use io::{load_token_vocab_path, read_token_vocab};
#[doc(inline)]
pub use token_vocab::TokenVocab;
