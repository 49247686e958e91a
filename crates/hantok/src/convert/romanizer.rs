//! # Romanization Seam

use pinyin::ToPinyin;

/// Tonal romanization collaborator.
///
/// The contract is length-preserving: one output string per input char.
/// Mandarin chars map to a pinyin syllable with a numeric tone suffix
/// (``1``-``4``; neutral tone carries no digit); any char without a
/// reading passes through verbatim.
pub trait Romanizer: Send + Sync {
    /// Romanize a run of chars.
    ///
    /// ## Arguments
    /// * `chars` - the source chars, in order.
    /// * `tone_sandhi` - whether to resolve adjacent-tone changes across
    ///   the run. Sandhi context is the run itself, so per-char calls see
    ///   no context.
    fn romanize(
        &self,
        chars: &[char],
        tone_sandhi: bool,
    ) -> Vec<String>;
}

/// [`Romanizer`] over the ``pinyin`` crate's reading table.
///
/// The table is context-free, so tone sandhi is applied as a
/// post-processing pass here. Only the third-tone rule is implemented
/// (a third tone followed by another third tone surfaces as second
/// tone, resolved left to right); the 一/不 alternations need word
/// boundaries this seam does not see.
#[derive(Debug, Default, Clone)]
pub struct MandarinRomanizer;

impl Romanizer for MandarinRomanizer {
    fn romanize(
        &self,
        chars: &[char],
        tone_sandhi: bool,
    ) -> Vec<String> {
        let mut syllables: Vec<String> = chars
            .iter()
            .map(|&c| match c.to_pinyin() {
                Some(reading) => reading.with_tone_num_end().to_string(),
                None => c.to_string(),
            })
            .collect();

        if tone_sandhi {
            apply_third_tone_sandhi(&mut syllables);
        }

        syllables
    }
}

fn is_third_tone(syllable: &str) -> bool {
    // len > 1 keeps a passed-through literal '3' char out of the rule.
    syllable.len() > 1 && syllable.ends_with('3')
}

fn apply_third_tone_sandhi(syllables: &mut [String]) {
    for i in 0..syllables.len().saturating_sub(1) {
        if is_third_tone(&syllables[i]) && is_third_tone(&syllables[i + 1]) {
            let s = &mut syllables[i];
            s.pop();
            s.push('2');
        }
    }
}
