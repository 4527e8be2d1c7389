//! Splits prose from the upstream into list items.
//!
//! Treatment text goes through [`segment_recommendations`], which tries the
//! punctuation strategy, then the clause-marker strategy, then gives up and
//! keeps the whole text as one item. Preventive advice and descriptions go
//! through [`segment_advice`], which only splits sentences.

use std::{fmt, sync::LazyLock};

use regex::Regex;

/// Recommendation fragments must be longer than this many characters.
pub const MIN_FRAGMENT_CHARS: usize = 10;

static CLAUSE_BREAK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?P<terminator>[.!?])\s+|,\s*(?P<upper>\p{Lu})|;\s*")
        .expect("valid clause break regex")
});

static SENTENCE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]\s+").expect("valid sentence break regex"));

// "<word> gibi" (like), "tavsiye" (recommended), "önerilen" (suggested),
// "uygulanması" (application of)
static CLAUSE_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b\w+\s+gibi\b|tavsiye|önerilen|uygulanması").expect("valid clause marker regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentationStrategy {
    Punctuation,
    Marker,
    Sentence,
    /// No split point produced more than one usable item.
    Whole,
}

impl fmt::Display for SegmentationStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SegmentationStrategy::Punctuation => "punctuation",
            SegmentationStrategy::Marker => "marker",
            SegmentationStrategy::Sentence => "sentence",
            SegmentationStrategy::Whole => "whole",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segmentation {
    pub strategy: SegmentationStrategy,
    pub items: Vec<String>,
}

/// Splits after sentence terminators followed by whitespace, before a comma
/// that introduces a capitalised clause, and at semicolons. Terminators stay
/// with their sentence; commas and semicolons are dropped. Fragments of
/// [`MIN_FRAGMENT_CHARS`] characters or fewer are discarded.
pub fn punctuation_split(text: &str) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut start = 0;

    for caps in CLAUSE_BREAK.captures_iter(text) {
        let Some(whole) = caps.get(0) else {
            continue;
        };

        let (end, next) = if let Some(terminator) = caps.name("terminator") {
            (terminator.end(), whole.end())
        } else if let Some(upper) = caps.name("upper") {
            (whole.start(), upper.start())
        } else {
            (whole.start(), whole.end())
        };

        pieces.push(&text[start..end]);
        start = next;
    }
    pieces.push(&text[start..]);

    keep_meaningful(pieces)
}

/// Splits immediately before clause markers. For "gibi" the split happens
/// before the word it qualifies, so "bakırlı ilaçlar gibi" starts a fragment
/// at "ilaçlar". Same length filter as [`punctuation_split`].
pub fn marker_split(text: &str) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut start = 0;

    for marker in CLAUSE_MARKER.find_iter(text) {
        if marker.start() > start {
            pieces.push(&text[start..marker.start()]);
            start = marker.start();
        }
    }
    pieces.push(&text[start..]);

    keep_meaningful(pieces)
}

/// Segments treatment prose into recommendation items.
pub fn segment_recommendations(text: &str) -> Segmentation {
    let text = text.trim();

    let items = punctuation_split(text);
    if items.len() > 1 {
        return Segmentation {
            strategy: SegmentationStrategy::Punctuation,
            items,
        };
    }

    let items = marker_split(text);
    if items.len() > 1 {
        return Segmentation {
            strategy: SegmentationStrategy::Marker,
            items,
        };
    }

    let items = if text.is_empty() {
        Vec::new()
    } else {
        vec![text.to_string()]
    };

    Segmentation {
        strategy: SegmentationStrategy::Whole,
        items,
    }
}

/// Segments descriptive prose into sentences. Terminators are consumed and
/// every non-empty sentence is kept, however short.
pub fn segment_advice(text: &str) -> Segmentation {
    let items = SENTENCE_BREAK
        .split(text)
        .map(str::trim)
        .filter(|sentence| !sentence.is_empty())
        .map(str::to_string)
        .collect();

    Segmentation {
        strategy: SegmentationStrategy::Sentence,
        items,
    }
}

fn keep_meaningful(pieces: Vec<&str>) -> Vec<String> {
    pieces
        .into_iter()
        .map(str::trim)
        .filter(|piece| piece.chars().count() > MIN_FRAGMENT_CHARS)
        .map(str::to_string)
        .collect()
}
