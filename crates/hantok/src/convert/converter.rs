//! # Pinyin Converter

use crate::convert::{JiebaSegmenter, MandarinRomanizer, Romanizer, Segmenter};
use crate::script::{SegmentClass, rewrite_segment};

/// Full-width punctuation rewritten before segmentation.
///
/// These forms are out-of-vocabulary for ascii-token vocabularies; the
/// ascii semicolon maps to a comma alongside its full-width twin.
const HALF_WIDTH_SUBSTITUTIONS: &[(char, char)] = &[
    ('（', '('),
    ('）', ')'),
    ('：', ':'),
    ('；', ','),
    (';', ','),
    ('“', '"'),
    ('”', '"'),
    ('‘', '\''),
    ('’', '\''),
];

/// Apply the fixed half-width substitution table.
fn substitute_half_width(text: &str) -> String {
    text.chars()
        .map(|c| {
            HALF_WIDTH_SUBSTITUTIONS
                .iter()
                .find(|(from, _)| *from == c)
                .map_or(c, |(_, to)| *to)
        })
        .collect()
}

/// Utterance to flat-token-sequence converter.
///
/// Orchestrates the [`Segmenter`] and [`Romanizer`] collaborators over
/// the [`crate::script`] rewriter, segment by segment.
pub struct PinyinConverter<S = JiebaSegmenter, R = MandarinRomanizer> {
    segmenter: S,
    romanizer: R,
}

impl PinyinConverter {
    /// Create a converter with the default jieba + pinyin collaborators.
    pub fn new() -> Self {
        Self::with_parts(JiebaSegmenter::new(), MandarinRomanizer)
    }
}

impl Default for PinyinConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, R> PinyinConverter<S, R>
where
    S: Segmenter,
    R: Romanizer,
{
    /// Create a converter from explicit collaborators.
    ///
    /// ## Arguments
    /// * `segmenter` - the word segmentation collaborator.
    /// * `romanizer` - the romanization collaborator.
    pub fn with_parts(
        segmenter: S,
        romanizer: R,
    ) -> Self {
        Self {
            segmenter,
            romanizer,
        }
    }

    /// Convert one utterance into a flat token sequence.
    ///
    /// `polyphone` selects whole-segment romanization for pure-CJK
    /// segments (giving the romanizer sandhi context); with it off those
    /// segments take the per-char mixed path instead. Mandarin chars are
    /// romanized either way.
    pub fn convert(
        &self,
        text: &str,
        polyphone: bool,
    ) -> Vec<String> {
        let text = substitute_half_width(text);

        let mut tokens: Vec<String> = Vec::new();
        for seg in self.segmenter.segment(&text) {
            let mut class = SegmentClass::of(seg);
            if class == SegmentClass::Cjk && !polyphone {
                class = SegmentClass::Mixed;
            }
            rewrite_segment(&mut tokens, seg, class, &self.romanizer);
        }
        tokens
    }

    /// Convert a batch of utterances, one token sequence per utterance.
    ///
    /// Utterances are independent; with the `rayon` feature the batch is
    /// converted in parallel, preserving order.
    pub fn convert_batch<U>(
        &self,
        texts: &[U],
        polyphone: bool,
    ) -> Vec<Vec<String>>
    where
        U: AsRef<str> + Sync,
    {
        cfg_if::cfg_if! {
            if #[cfg(feature = "rayon")] {
                use rayon::prelude::*;

                return texts
                    .par_iter()
                    .map(|text| self.convert(text.as_ref(), polyphone))
                    .collect();
            } else {
                return texts
                    .iter()
                    .map(|text| self.convert(text.as_ref(), polyphone))
                    .collect();
            }
        }
    }
}
