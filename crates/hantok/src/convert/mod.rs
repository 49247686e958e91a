//! # Utterance to Pinyin Token Conversion
//!
//! This module turns raw utterances into flat token sequences, driving
//! the [`crate::script`] rewriter over externally segmented words.
//!
//! The two collaborators are seams:
//! * [`Segmenter`] - word segmentation, default [`JiebaSegmenter`].
//! * [`Romanizer`] - tonal romanization, default [`MandarinRomanizer`].

pub mod converter;
pub mod romanizer;
pub mod segmenter;

#[doc(inline)]
pub use converter::PinyinConverter;
#[doc(inline)]
pub use romanizer::{MandarinRomanizer, Romanizer};
#[doc(inline)]
pub use segmenter::{JiebaSegmenter, Segmenter};
