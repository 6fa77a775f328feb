// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Segment building utilities for grapheme clusters.
//!
//! See the [module docs](crate::core::graphemes) for why clusters (and not [`char`]s) are the
//! unit of editing here.

use unicode_segmentation::{Graphemes, UnicodeSegmentation};

use super::{Seg, SegmentArray};

/// Build grapheme cluster segments for any string slice.
///
/// This function analyzes a UTF-8 string and creates a segment for each grapheme
/// cluster (user-perceived character). It includes an ASCII fast path for better
/// performance when dealing with ASCII-only text.
#[must_use]
pub fn build_segments_for_str(input: &str) -> SegmentArray {
    // ASCII fast path
    if input.is_ascii() {
        return build_ascii_segments(input);
    }

    let mut segments = SegmentArray::new();
    let mut byte_offset = 0;
    let mut utf16_offset = 0;

    for (seg_index, grapheme) in input.graphemes(true).enumerate() {
        let bytes_size = grapheme.len();
        let utf16_len = utf16_len(grapheme);

        segments.push(Seg {
            start_byte_index: byte_offset,
            end_byte_index: byte_offset + bytes_size,
            start_utf16_offset: utf16_offset,
            utf16_len,
            seg_index,
        });

        byte_offset += bytes_size;
        utf16_offset += utf16_len;
    }

    segments
}

/// Build segments for ASCII-only strings (optimized path).
///
/// ASCII characters are always 1 byte and 1 UTF-16 code unit, and `\r\n` is the only
/// ASCII sequence that forms a multi-char cluster.
fn build_ascii_segments(input: &str) -> SegmentArray {
    if input.contains("\r\n") {
        return build_segments_for_str_slow(input);
    }

    let mut segments = SegmentArray::with_capacity(input.len());

    for index in 0..input.len() {
        segments.push(Seg {
            start_byte_index: index,
            end_byte_index: index + 1,
            start_utf16_offset: index,
            utf16_len: 1,
            seg_index: index,
        });
    }

    segments
}

fn build_segments_for_str_slow(input: &str) -> SegmentArray {
    let mut segments = SegmentArray::new();
    let mut utf16_offset = 0;
    for (seg_index, (byte_offset, grapheme)) in
        input.grapheme_indices(true).enumerate()
    {
        let utf16_len = utf16_len(grapheme);
        segments.push(Seg {
            start_byte_index: byte_offset,
            end_byte_index: byte_offset + grapheme.len(),
            start_utf16_offset: utf16_offset,
            utf16_len,
            seg_index,
        });
        utf16_offset += utf16_len;
    }
    segments
}

/// Iterator over the grapheme clusters of `input`.
#[must_use]
pub fn graphemes(input: &str) -> Graphemes<'_> { input.graphemes(true) }

/// Number of grapheme clusters, ie: the "length" of a string as a person reads it.
#[must_use]
pub fn grapheme_count(input: &str) -> usize {
    if input.is_ascii() && !input.contains("\r\n") {
        input.len()
    } else {
        input.graphemes(true).count()
    }
}

/// Length in UTF-16 code units.
#[must_use]
pub fn utf16_len(input: &str) -> usize {
    if input.is_ascii() {
        input.len()
    } else {
        input.chars().map(char::len_utf16).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_build_segments_ascii() {
        let input = "Hello";
        let segments = build_segments_for_str(input);

        assert_eq2!(segments.len(), 5);

        // Check first segment 'H'.
        let seg = &segments[0];
        assert_eq2!(seg.start_byte_index, 0);
        assert_eq2!(seg.end_byte_index, 1);
        assert_eq2!(seg.start_utf16_offset, 0);
        assert_eq2!(seg.utf16_len, 1);
        assert_eq2!(seg.get_str(input), "H");
    }

    #[test]
    fn test_build_segments_emoji() {
        let input = "H😀!";
        let segments = build_segments_for_str(input);

        assert_eq2!(segments.len(), 3);

        // Check emoji segment, it is a surrogate pair in UTF-16.
        let emoji_seg = &segments[1];
        assert_eq2!(emoji_seg.start_byte_index, 1);
        assert_eq2!(emoji_seg.end_byte_index, 5);
        assert_eq2!(emoji_seg.start_utf16_offset, 1);
        assert_eq2!(emoji_seg.utf16_len, 2);

        // The segment after it is shifted by two code units.
        assert_eq2!(segments[2].start_utf16_offset, 3);
        assert_eq2!(segments[2].seg_index, 2);
    }

    #[test]
    fn test_build_segments_jumbo_emoji() {
        let input = "🙏🏽"; // Folded hands with skin tone
        let segments = build_segments_for_str(input);

        assert_eq2!(segments.len(), 1); // Single grapheme cluster

        let seg = &segments[0];
        assert_eq2!(seg.bytes_size(), 8); // 4 bytes for 🙏 + 4 bytes for 🏽
        assert_eq2!(seg.utf16_len, 4);
    }

    #[test]
    fn test_build_segments_cyrillic() {
        let input = "руб";
        let segments = build_segments_for_str(input);

        assert_eq2!(segments.len(), 3);
        assert_eq2!(segments[2].start_byte_index, 4);
        assert_eq2!(segments[2].start_utf16_offset, 2);
    }

    #[test]
    fn test_build_segments_crlf_is_one_cluster() {
        let segments = build_segments_for_str("a\r\nb");
        assert_eq2!(segments.len(), 3);
        assert_eq2!(segments[1].utf16_len, 2);
        assert_eq2!(segments[2].start_utf16_offset, 3);
    }

    #[test]
    fn test_counts() {
        assert_eq2!(grapheme_count(""), 0);
        assert_eq2!(grapheme_count("abc"), 3);
        assert_eq2!(grapheme_count("🤷🏽‍♀️"), 1);
        assert_eq2!(utf16_len("🤷🏽‍♀️"), 7);
        assert_eq2!(utf16_len("руб."), 4);
        assert_eq2!(graphemes("a🇪🇷b").count(), 3);
    }
}
