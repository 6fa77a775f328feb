// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::SignificantRange;

/// A proposed change to the logical value, as seen by a validator. All positions are in
/// significant (logical) coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StringChange<'a> {
    /// Logical value before the edit.
    pub old_text: &'a str,
    /// Candidate logical value after the edit.
    pub new_text: &'a str,
    pub replaced_range: SignificantRange,
    /// Text inserted at `replaced_range`, after sanitization.
    pub replacement_text: &'a str,
}

impl StringChange<'_> {
    /// `true` when the edit only removes text.
    #[must_use]
    pub fn is_deletion(&self) -> bool {
        self.replacement_text.is_empty() && !self.replaced_range.is_caret()
    }
}
