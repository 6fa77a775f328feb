// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Be careful when adjusting these sizes. Smaller static allocation sizes are better
//! than larger ones. Most grapheme clusters fit in [`DEFAULT_GRAPHEME_STORAGE_SIZE`]
//! bytes, and the few that don't (eg: ZWJ emoji sequences) spill onto the heap.

use smallstr::SmallString;

pub const DEFAULT_GRAPHEME_STORAGE_SIZE: usize = 8;

/// Stack allocated storage for a single grapheme cluster. When this gets larger than
/// [`DEFAULT_GRAPHEME_STORAGE_SIZE`], it will be [`smallvec::SmallVec::spilled`] on the
/// heap.
pub type GraphemeString = SmallString<[u8; DEFAULT_GRAPHEME_STORAGE_SIZE]>;

