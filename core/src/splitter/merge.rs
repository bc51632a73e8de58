//! Piece splitting and greedy merging shared by all splitters.
//!
//! Everything here works on byte ranges into one source string, so a chunk is
//! always a contiguous slice of the input. Lengths are counted in `char`s.

use std::ops::Range;

use crate::config::KeepSeparator;
use crate::types::Chunk;

pub(crate) fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Splits `text[range]` on `separator`, returning non-empty absolute byte ranges.
pub(crate) fn split_pieces(
    text: &str,
    range: Range<usize>,
    separator: &str,
    keep: KeepSeparator,
) -> Vec<Range<usize>> {
    let base = range.start;
    let slice = &text[range];

    if separator.is_empty() {
        return slice
            .char_indices()
            .map(|(i, c)| base + i..base + i + c.len_utf8())
            .collect();
    }

    let mut pieces = Vec::new();
    let mut cursor = 0;
    for (at, matched) in slice.match_indices(separator) {
        let piece = match keep {
            KeepSeparator::End => {
                let end = at + matched.len();
                let piece = cursor..end;
                cursor = end;
                piece
            }
            KeepSeparator::Start => {
                let piece = cursor..at;
                cursor = at;
                piece
            }
            KeepSeparator::Discard => {
                let piece = cursor..at;
                cursor = at + matched.len();
                piece
            }
        };
        pieces.push(base + piece.start..base + piece.end);
    }
    pieces.push(base + cursor..base + slice.len());
    pieces.retain(|piece| !piece.is_empty());
    pieces
}

/// Cuts `text[range]` into consecutive slices of at most `size` characters.
pub(crate) fn hard_cut(text: &str, range: Range<usize>, size: usize) -> Vec<Range<usize>> {
    let base = range.start;
    let slice = &text[range];
    let mut out = Vec::new();
    let mut start = 0;
    for (count, (i, _)) in slice.char_indices().enumerate() {
        if count > 0 && count % size == 0 {
            out.push(base + start..base + i);
            start = i;
        }
    }
    if start < slice.len() {
        out.push(base + start..base + slice.len());
    }
    out
}

/// Byte offset where the last `count` characters of `text[range]` begin.
fn tail_start(text: &str, range: &Range<usize>, count: usize) -> usize {
    if count == 0 {
        return range.end;
    }
    text[range.clone()]
        .char_indices()
        .rev()
        .nth(count - 1)
        .map_or(range.start, |(i, _)| range.start + i)
}

fn trim_range(text: &str, range: Range<usize>) -> Range<usize> {
    let slice = &text[range.clone()];
    let leading = slice.len() - slice.trim_start().len();
    let trailing = slice.len() - slice.trim_end().len();
    if leading == slice.len() {
        return range.start..range.start;
    }
    range.start + leading..range.end - trailing
}

/// Running chunk buffer that greedily packs consecutive pieces.
#[derive(Debug)]
pub(crate) struct Merger<'a> {
    text: &'a str,
    chunk_size: usize,
    chunk_overlap: usize,
    strip_whitespace: bool,
    buffer: Option<Range<usize>>,
    buffer_len: usize,
    previous: Option<Range<usize>>,
}

impl<'a> Merger<'a> {
    pub(crate) const fn new(
        text: &'a str,
        chunk_size: usize,
        chunk_overlap: usize,
        strip_whitespace: bool,
    ) -> Self {
        Self {
            text,
            chunk_size,
            chunk_overlap,
            strip_whitespace,
            buffer: None,
            buffer_len: 0,
            previous: None,
        }
    }

    /// Adds a piece that fits within `chunk_size` on its own.
    pub(crate) fn push(&mut self, piece: Range<usize>, out: &mut Vec<Range<usize>>) {
        if let Some(buffer) = &mut self.buffer {
            let grown = char_len(&self.text[buffer.end..piece.end]);
            if self.buffer_len + grown <= self.chunk_size {
                buffer.end = piece.end;
                self.buffer_len += grown;
                return;
            }
            self.flush(out);
        }
        self.begin(piece);
    }

    /// Emits `range` as a chunk of its own, bypassing the buffer.
    pub(crate) fn emit_whole(&mut self, range: Range<usize>, out: &mut Vec<Range<usize>>) {
        self.flush(out);
        self.emit(range, out);
    }

    /// Emits the buffered chunk, if any.
    pub(crate) fn flush(&mut self, out: &mut Vec<Range<usize>>) {
        if let Some(buffer) = self.buffer.take() {
            self.buffer_len = 0;
            self.emit(buffer, out);
        }
    }

    /// Forgets the last emitted chunk so the next buffer starts without overlap.
    pub(crate) fn reset_overlap(&mut self) {
        self.previous = None;
    }

    fn begin(&mut self, piece: Range<usize>) {
        let piece_len = char_len(&self.text[piece.clone()]);
        if self.chunk_overlap > 0 {
            if let Some(previous) = &self.previous {
                let gap_len = char_len(&self.text[previous.end..piece.end]);
                let room = self.chunk_size.saturating_sub(gap_len);
                let prev_len = char_len(&self.text[previous.clone()]);
                let count = self.chunk_overlap.min(prev_len).min(room);
                if count > 0 {
                    let start = tail_start(self.text, previous, count);
                    self.buffer = Some(start..piece.end);
                    self.buffer_len = count + gap_len;
                    return;
                }
            }
        }
        self.buffer = Some(piece);
        self.buffer_len = piece_len;
    }

    fn emit(&mut self, range: Range<usize>, out: &mut Vec<Range<usize>>) {
        let range = if self.strip_whitespace {
            trim_range(self.text, range)
        } else {
            range
        };
        if range.is_empty() {
            return;
        }
        self.previous = Some(range.clone());
        out.push(range);
    }
}

/// Turns absolute byte ranges into owned chunks with char offsets and overlap counts.
pub(crate) fn into_chunks(text: &str, ranges: Vec<Range<usize>>) -> Vec<Chunk> {
    let mut chunks = Vec::with_capacity(ranges.len());
    let mut cursor_byte = 0;
    let mut cursor_char = 0;
    let mut previous_end = 0;

    for (index, range) in ranges.into_iter().enumerate() {
        // starts never move backwards
        cursor_char += char_len(&text[cursor_byte..range.start]);
        cursor_byte = range.start;

        let overlap = if range.start < previous_end {
            char_len(&text[range.start..previous_end.min(range.end)])
        } else {
            0
        };
        previous_end = previous_end.max(range.end);

        chunks.push(Chunk {
            index,
            text: text[range].to_string(),
            start: cursor_char,
            overlap,
        });
    }
    chunks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts<'t>(text: &'t str, ranges: &[Range<usize>]) -> Vec<&'t str> {
        ranges.iter().map(|r| &text[r.clone()]).collect()
    }

    #[test]
    fn separator_kept_at_end() {
        let text = "a b c";
        let pieces = split_pieces(text, 0..text.len(), " ", KeepSeparator::End);
        assert_eq!(texts(text, &pieces), ["a ", "b ", "c"]);
    }

    #[test]
    fn separator_kept_at_start() {
        let text = "a\ndef b\ndef c";
        let pieces = split_pieces(text, 0..text.len(), "\ndef ", KeepSeparator::Start);
        assert_eq!(texts(text, &pieces), ["a", "\ndef b", "\ndef c"]);
    }

    #[test]
    fn separator_discarded() {
        let text = "a  b";
        let pieces = split_pieces(text, 0..text.len(), " ", KeepSeparator::Discard);
        assert_eq!(texts(text, &pieces), ["a", "b"]);
    }

    #[test]
    fn empty_separator_yields_chars() {
        let text = "xé";
        let pieces = split_pieces(text, 0..text.len(), "", KeepSeparator::End);
        assert_eq!(texts(text, &pieces), ["x", "é"]);
    }

    #[test]
    fn pieces_are_absolute() {
        let text = "zz|a b";
        let pieces = split_pieces(text, 3..text.len(), " ", KeepSeparator::End);
        assert_eq!(pieces, [3..5, 5..6]);
    }

    #[test]
    fn hard_cut_respects_char_boundaries() {
        let text = "ééééé";
        let cuts = hard_cut(text, 0..text.len(), 2);
        assert_eq!(texts(text, &cuts), ["éé", "éé", "é"]);
    }

    #[test]
    fn merger_packs_until_full() {
        let text = "ab cd ef";
        let mut out = Vec::new();
        let mut merger = Merger::new(text, 6, 0, false);
        for piece in split_pieces(text, 0..text.len(), " ", KeepSeparator::End) {
            merger.push(piece, &mut out);
        }
        merger.flush(&mut out);
        assert_eq!(texts(text, &out), ["ab cd ", "ef"]);
    }

    #[test]
    fn overlap_shrinks_to_fit_next_piece() {
        let text = "abcd efg";
        let mut out = Vec::new();
        let mut merger = Merger::new(text, 4, 3, false);
        merger.push(0..4, &mut out);
        merger.push(4..8, &mut out);
        merger.flush(&mut out);
        assert_eq!(texts(text, &out), ["abcd", " efg"]);
    }

    #[test]
    fn stripped_chunks_drop_blank_output() {
        let text = "   ";
        let mut out = Vec::new();
        let mut merger = Merger::new(text, 5, 0, true);
        merger.push(0..3, &mut out);
        merger.flush(&mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn chunks_report_char_offsets_and_overlap() {
        let text = "héllo world";
        let chunks = into_chunks(text, vec![0..7, 4..text.len()]);
        assert_eq!(chunks[0].start, 0);
        assert_eq!(chunks[0].overlap, 0);
        assert_eq!(chunks[1].text, "lo world");
        assert_eq!(chunks[1].start, 3);
        assert_eq!(chunks[1].overlap, 3);
    }
}
