//! # Word Segmentation Seam

use jieba_rs::Jieba;

/// Word segmentation collaborator.
///
/// Implementations must cover the input exactly, in order, with no gaps
/// or overlaps; the rewriter depends on seeing every char of the text.
pub trait Segmenter: Send + Sync {
    /// Split `text` into word-level segments.
    fn segment<'a>(
        &self,
        text: &'a str,
    ) -> Vec<&'a str>;
}

/// [`Segmenter`] over the ``jieba-rs`` dictionary cutter.
pub struct JiebaSegmenter {
    jieba: Jieba,
}

impl JiebaSegmenter {
    /// Create a segmenter with the bundled default dictionary.
    pub fn new() -> Self {
        Self {
            jieba: Jieba::new(),
        }
    }
}

impl Default for JiebaSegmenter {
    fn default() -> Self {
        Self::new()
    }
}

impl Segmenter for JiebaSegmenter {
    fn segment<'a>(
        &self,
        text: &'a str,
    ) -> Vec<&'a str> {
        self.jieba.cut(text, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segments_cover_text() {
        let segmenter = JiebaSegmenter::new();

        for text in ["你好世界", "hello 世界!", "", "平仄 abc"] {
            let segments = segmenter.segment(text);
            let rejoined: String = segments.concat();
            assert_eq!(rejoined, text, "segment coverage for {text:?}");
        }
    }

    #[test]
    fn test_splits_cjk_from_latin() {
        let segmenter = JiebaSegmenter::new();
        let segments = segmenter.segment("abc你好");
        assert!(segments.len() >= 2, "expected a script split: {segments:?}");
    }
}
