// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use smallvec::SmallVec;

pub const VEC_SEGMENT_SIZE: usize = 32;

/// Grapheme cluster segments for one string. It spills onto the heap for strings longer
/// than [`VEC_SEGMENT_SIZE`] clusters.
pub type SegmentArray = SmallVec<[Seg; VEC_SEGMENT_SIZE]>;

/// `Seg` represents one grapheme cluster inside some string. It is a view, the string
/// itself owns the memory. Use [`Seg::get_str`] to get the cluster back out.
///
/// - `start_byte_index` & `end_byte_index`: UTF-8 byte range, for slicing.
/// - `start_utf16_offset` & `utf16_len`: UTF-16 code unit range, for the host widget.
/// - `seg_index`: position in the sequence of clusters.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Seg {
    pub start_byte_index: usize,
    pub end_byte_index: usize,
    pub start_utf16_offset: usize,
    pub utf16_len: usize,
    pub seg_index: usize,
}

impl Seg {
    #[must_use]
    pub fn get_str<'a>(&self, string: &'a str) -> &'a str {
        &string[self.start_byte_index..self.end_byte_index]
    }

    #[must_use]
    pub fn bytes_size(&self) -> usize { self.end_byte_index - self.start_byte_index }
}
