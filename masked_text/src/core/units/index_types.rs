// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::Debug;

/// Common behavior for the index newtypes, so that [`crate::Span`] can be generic over
/// the coordinate space it lives in.
pub trait TextIndex: Copy + Ord + Debug + From<usize> {
    fn as_usize(&self) -> usize;
}

crate::define_text_index!(
    /// Offset in UTF-16 code units. This is the unit host text widgets use to address
    /// ranges, and a single grapheme cluster may span several of them.
    Utf16Offset,
    utf16_offset
);

crate::define_text_index!(
    /// Index into the sequence of [`crate::DecoratedCharacter`]s, counting significant
    /// and auxiliary characters alike.
    CharIndex,
    char_index
);

crate::define_text_index!(
    /// Position counted over significant characters only. `sig_index(k)` is the `k`-th
    /// character of the logical value.
    SigIndex,
    sig_index
);
