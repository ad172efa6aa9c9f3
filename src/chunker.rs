use segtok::segmenter::{SegmentConfig, split_single};
use serde::{Deserialize, Serialize};

/// Paragraphs longer than this are split into sentences.
const MAX_PARAGRAPH_LEN: usize = 1000;
/// Sentences shorter than this are dropped when splitting a long paragraph.
const MIN_SENTENCE_LEN: usize = 100;

/// Whether a chunk came from a whole paragraph or a sentence split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChunkKind {
    Paragraph,
    Sentence,
}

/// A contiguous slice of a source document with its position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chunk {
    pub text: String,
    /// Byte offset of the chunk in the source text.
    pub start: usize,
    pub end: usize,
    pub kind: ChunkKind,
}

/// Split a document into embedding-sized chunks.
///
/// Blank lines delimit paragraphs; paragraphs over 1000 characters are
/// broken into sentences and only substantial sentences (over 100
/// characters) are kept. Positions refer to the original text.
///
/// # Examples
///
/// ```
/// use voiceloop::chunk_text;
///
/// let chunks = chunk_text("First paragraph.\n\nSecond paragraph.");
/// assert_eq!(chunks.len(), 2);
/// assert_eq!(chunks[0].text, "First paragraph.");
/// ```
pub fn chunk_text(text: &str) -> Vec<Chunk> {
    let mut chunks = Vec::new();
    let mut cursor = 0usize;

    for raw in text.split("\n\n") {
        let para = raw.trim();
        if para.is_empty() {
            cursor += raw.len() + 2;
            continue;
        }
        let para_start = cursor + (raw.len() - raw.trim_start().len());

        if para.len() > MAX_PARAGRAPH_LEN {
            let mut search_from = para_start;
            for sentence in split_single(para, SegmentConfig::default()) {
                let sentence = sentence.trim().to_string();
                if sentence.len() <= MIN_SENTENCE_LEN {
                    continue;
                }
                let start = text[search_from..]
                    .find(&sentence)
                    .map(|i| search_from + i)
                    .unwrap_or(search_from);
                let end = start + sentence.len();
                search_from = end;
                chunks.push(Chunk {
                    text: sentence,
                    start,
                    end,
                    kind: ChunkKind::Sentence,
                });
            }
        } else {
            chunks.push(Chunk {
                text: para.to_string(),
                start: para_start,
                end: para_start + para.len(),
                kind: ChunkKind::Paragraph,
            });
        }
        cursor += raw.len() + 2;
    }

    chunks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paragraphs_become_chunks_with_positions() {
        let text = "Alpha beta gamma.\n\nDelta epsilon.";
        let chunks = chunk_text(text);
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].kind, ChunkKind::Paragraph);
        assert_eq!(&text[chunks[0].start..chunks[0].end], "Alpha beta gamma.");
        assert_eq!(&text[chunks[1].start..chunks[1].end], "Delta epsilon.");
    }

    #[test]
    fn blank_paragraphs_are_skipped() {
        let chunks = chunk_text("One.\n\n\n\nTwo.");
        assert_eq!(chunks.len(), 2);
    }

    #[test]
    fn long_paragraphs_split_into_substantial_sentences() {
        let sentence = "This sentence is deliberately padded out with filler words so that \
it comfortably clears the one hundred character floor applied to sentence chunks. ";
        let long_para = sentence.repeat(8);
        let chunks = chunk_text(&long_para);
        assert!(!chunks.is_empty());
        for c in &chunks {
            assert_eq!(c.kind, ChunkKind::Sentence);
            assert!(c.text.len() > MIN_SENTENCE_LEN);
        }
    }

    #[test]
    fn short_sentences_in_long_paragraphs_are_dropped() {
        let filler = "A sentence long enough to survive the minimum length filter needs quite \
a few words, which this one certainly has in ample supply. ";
        let long_para = format!("{}Tiny one. {}", filler.repeat(5), "No.");
        let chunks = chunk_text(&long_para);
        assert!(chunks.iter().all(|c| c.text != "Tiny one." && c.text != "No."));
    }

    #[test]
    fn empty_input_yields_no_chunks() {
        assert!(chunk_text("").is_empty());
        assert!(chunk_text("\n\n\n\n").is_empty());
    }
}
