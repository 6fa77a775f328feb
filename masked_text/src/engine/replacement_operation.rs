// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use strum_macros::Display;

use crate::{CharIndex, SigIndex, Span, TextIndex, Utf16Offset};

/// Replace the text in `range_to_replace` with `replacement_text`. The index type says
/// which coordinate space the range is in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextReplacementOperation<I> {
    pub range_to_replace: Span<I>,
    pub replacement_text: String,
}

/// An edit as the host widget reports it, in UTF-16 code units.
pub type RawReplacement = TextReplacementOperation<Utf16Offset>;

/// An edit over decorated characters.
pub type DecoratedReplacement = TextReplacementOperation<CharIndex>;

/// An edit over the logical value.
pub type SignificantReplacement = TextReplacementOperation<SigIndex>;

impl<I: TextIndex> TextReplacementOperation<I> {
    #[must_use]
    pub fn new(range_to_replace: Span<I>, replacement_text: impl Into<String>) -> Self {
        Self {
            range_to_replace,
            replacement_text: replacement_text.into(),
        }
    }

    /// Typing or pasting at a caret.
    #[must_use]
    pub fn insertion(at: impl Into<I>, text: impl Into<String>) -> Self {
        Self::new(Span::caret(at), text)
    }

    /// Backspace, forward delete, or delete of a selection.
    #[must_use]
    pub fn deletion(range_to_replace: Span<I>) -> Self { Self::new(range_to_replace, "") }

    /// `true` for a true no-op: nothing to remove and nothing to insert.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.replacement_text.is_empty() && self.range_to_replace.is_caret()
    }

    /// Removes something and inserts nothing.
    #[must_use]
    pub fn is_pure_deletion(&self) -> bool {
        self.replacement_text.is_empty() && !self.range_to_replace.is_caret()
    }
}

/// Where an edit's text comes from. Only [`EditSource::External`] text is sanitized.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Display)]
pub enum EditSource {
    /// Keystrokes.
    #[default]
    Typing,
    /// Paste, drag and drop, autofill, and anything else that didn't come from typing.
    External,
}
