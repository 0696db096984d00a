//! Sentence segmentation

/// Split text into sentences
///
/// A boundary is sentence-ending punctuation (`.`, `!`, `?`) followed by
/// whitespace; the punctuation stays attached to the preceding sentence and
/// the whitespace run is dropped. Punctuation not followed by whitespace
/// (decimals like `$1,234.56`, abbreviations glued to text) does not split.
///
/// The returned segments preserve original order and include short
/// fragments; the caller is responsible for filtering. Position in this
/// sequence is what `source_reference` numbering is based on.
pub(crate) fn split_sentences(text: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((idx, ch)) = chars.next() {
        if !matches!(ch, '.' | '!' | '?') {
            continue;
        }
        let followed_by_space = matches!(chars.peek(), Some(&(_, next)) if next.is_whitespace());
        if !followed_by_space {
            continue;
        }

        segments.push(&text[start..idx + ch.len_utf8()]);

        // Drop the whitespace run between sentences
        while matches!(chars.peek(), Some(&(_, w)) if w.is_whitespace()) {
            chars.next();
        }
        start = chars.peek().map(|&(i, _)| i).unwrap_or(text.len());
    }

    if start < text.len() {
        segments.push(&text[start..]);
    }
    segments
}
