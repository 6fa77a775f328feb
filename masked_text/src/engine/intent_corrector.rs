// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{DecoratedRange, DecoratedReplacement, DecoratedString, MaskedTextResult,
            RawReplacement, Utf16Range};

/// Turns a host edit into the edit the user meant.
///
/// Pressing backspace right after a `:` in `23:|57` asks the host to delete the `:`.
/// Deleting decoration changes nothing, so the keystroke would look dead. The user meant
/// to delete the `3`, so the range is widened to start at the nearest significant
/// character to its left:
///
/// ```text
/// value:      2  3  :  5  7
/// host range        [--)        location 2, length 1
/// corrected      [-----)        location 1, length 2
/// ```
///
/// Only a deletion made from a collapsed caret is widened. A deletion of a selection
/// is taken literally, and so is any edit that inserts text.
#[derive(Debug, Clone, Copy)]
pub struct IntentCorrector<'a> {
    decorated: &'a DecoratedString,
}

impl<'a> IntentCorrector<'a> {
    #[must_use]
    pub fn new(decorated: &'a DecoratedString) -> Self { Self { decorated } }

    /// `selection` is the host's selection at the time of the edit, which is how a
    /// backspace (caret) is told apart from deleting a selected `:`.
    ///
    /// # Errors
    ///
    /// [`crate::MaskedTextError::OutOfBounds`] if the host range ends past the text.
    pub fn correct(
        &self,
        raw: &RawReplacement,
        selection: Option<Utf16Range>,
    ) -> MaskedTextResult<DecoratedReplacement> {
        let range = self.decorated.range_from_utf16_range(raw.range_to_replace)?;
        let literal = DecoratedReplacement::new(range, raw.replacement_text.clone());

        let is_backspace_from_caret = raw.replacement_text.is_empty()
            && !range.is_caret()
            && selection.is_some_and(|it| it.is_caret());
        if !is_backspace_from_caret {
            return Ok(literal);
        }

        let starts_on_decoration =
            self.decorated.is_character_significant(range.location) == Some(false);
        if !starts_on_decoration {
            return Ok(literal);
        }

        match self
            .decorated
            .index_of_first_significant_to_the_left_from(range.location)
        {
            Some(index) => {
                let length = range.length + (range.location.as_usize() - index.as_usize());
                Ok(DecoratedReplacement::deletion(DecoratedRange::new(index, length)))
            }
            // Nothing to the left to delete.
            None => Ok(literal),
        }
    }
}
