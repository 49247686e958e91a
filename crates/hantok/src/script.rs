//! # Script Classification and Segment Rewriting
//!
//! Word segments are classified by a UTF-8 byte-length heuristic rather
//! than a Unicode script table: a segment whose byte length equals its
//! char count is pure Latin/symbol text, one whose byte length is three
//! times its char count is pure east-asian text, and anything else is
//! mixed. Downstream token sequences depend on this exact rule (and on
//! the exact [`is_mandarin_char`] range), so neither should be widened
//! to "proper" script detection.

use crate::convert::Romanizer;
use crate::vocab::token_vocab::SPACE_TOKEN;

/// Script classification of one word segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentClass {
    /// Every char is a single UTF-8 byte: alphabets, digits, symbols.
    Latin,

    /// Every char is a three-byte UTF-8 codepoint: east-asian text.
    Cjk,

    /// Anything else.
    Mixed,
}

impl SegmentClass {
    /// Classify a segment by the byte-length-vs-char-count rule.
    pub fn of(seg: &str) -> Self {
        let byte_len = seg.len();
        let char_len = seg.chars().count();

        if byte_len == char_len {
            SegmentClass::Latin
        } else if byte_len == 3 * char_len {
            SegmentClass::Cjk
        } else {
            SegmentClass::Mixed
        }
    }
}

/// Check whether a char is a common Chinese character.
///
/// The operative range is ``U+3100..=U+9FFF``, inclusive; narrower than
/// the full CJK Unified Ideographs blocks, and kept that way for
/// compatibility with the sequences existing models were trained on.
pub fn is_mandarin_char(c: char) -> bool {
    ('\u{3100}'..='\u{9fff}').contains(&c)
}

/// Rewrite one classified segment into flat tokens, appending to `out`.
///
/// Separator-injection rules:
/// * `Latin` - a separator is injected before the segment when something
///   was already emitted, the segment is more than one byte, and the
///   previous token does not already end the word (space, colon, or a
///   quote).
/// * `Cjk` - the whole segment is romanized at once (segment-level tone
///   sandhi context), with a separator before each syllable whose source
///   char is in the Mandarin range.
/// * `Mixed` - chars below `U+0100` pass through; Mandarin-range chars
///   get a separator plus their per-char romanization; everything else
///   passes through.
pub fn rewrite_segment<R: Romanizer>(
    out: &mut Vec<String>,
    seg: &str,
    class: SegmentClass,
    romanizer: &R,
) {
    match class {
        SegmentClass::Latin => {
            if !out.is_empty()
                && seg.len() > 1
                && !matches!(out.last().map(String::as_str), Some(" " | ":" | "'" | "\""))
            {
                out.push(SPACE_TOKEN.to_string());
            }
            out.extend(seg.chars().map(String::from));
        }
        SegmentClass::Cjk => {
            let chars: Vec<char> = seg.chars().collect();
            let syllables = romanizer.romanize(&chars, true);
            for (c, syllable) in chars.iter().zip(syllables) {
                if is_mandarin_char(*c) {
                    out.push(SPACE_TOKEN.to_string());
                }
                out.push(syllable);
            }
        }
        SegmentClass::Mixed => {
            for c in seg.chars() {
                if (c as u32) < 256 {
                    out.push(c.to_string());
                } else if is_mandarin_char(c) {
                    out.push(SPACE_TOKEN.to_string());
                    out.extend(romanizer.romanize(&[c], true));
                } else {
                    out.push(c.to_string());
                }
            }
        }
    }
}
