// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{DEBUG_MASKED_TEXT_ENGINE, DecoratedString, EditOutcome, EditSource,
            MaskedTextFieldConfig, MaskedTextResult, RawReplacement, ReplacementEngine,
            StringDecoration, StringSanitization, StringValidation, Utf16Offset,
            Utf16Range};

/// One masked text field: its configuration, its current [`DecoratedString`] and the
/// host's selection, in UTF-16 code units.
///
/// Every mutator takes `&mut self`, so an edit always runs to completion before the
/// next one starts. A host that shares a field behind a `RefCell` and tries to edit it
/// again from inside a change notification gets a borrow panic rather than two
/// interleaved edits.
///
/// ```
/// use r3bl_masked_text::{MaskedTextField, MaskedTextFieldConfig, RawReplacement,
///                        StringDecoration, Utf16Range};
///
/// let mut field = MaskedTextField::new(
///     MaskedTextFieldConfig::default().with_decoration(StringDecoration::template("__:__")),
/// );
/// field.set_logical_value("2357");
/// assert_eq!(field.decorated_value(), "23:57");
///
/// // Backspace with the caret right after the colon.
/// field.set_selection(Utf16Range::caret(3)).unwrap();
/// field.propose_edit(RawReplacement::deletion(Utf16Range::new(2, 1))).unwrap();
/// assert_eq!(field.logical_value(), "257");
/// assert_eq!(field.decorated_value(), "25:7");
/// ```
#[derive(Clone, Debug, Default)]
pub struct MaskedTextField {
    config: MaskedTextFieldConfig,
    decorated: DecoratedString,
    selection: Utf16Range,
}

mod construct {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl MaskedTextField {
        #[must_use]
        pub fn new(config: MaskedTextFieldConfig) -> Self {
            let mut it = Self {
                config,
                ..Default::default()
            };
            it.set_logical_value("");
            it
        }
    }
}

mod value_and_selection {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl MaskedTextField {
        /// Replaces the logical value without sanitizing or validating it. It is still
        /// decorated, and the caret moves to the end of the text.
        pub fn set_logical_value(&mut self, logical_value: &str) {
            self.decorated = self.config.decoration.decorate(logical_value);
            self.selection = Utf16Range::caret(self.decorated.utf16_len());

            DEBUG_MASKED_TEXT_ENGINE.then(|| {
                // % is Display, ? is Debug.
                tracing::debug!(
                    message = "🖊️ logical value set",
                    decorated = ?self.decorated,
                    selection = ?self.selection,
                );
            });
        }

        #[must_use]
        pub fn logical_value(&self) -> &str { self.decorated.significant_value() }

        #[must_use]
        pub fn decorated_value(&self) -> &str { self.decorated.value() }

        #[must_use]
        pub fn decorated_string(&self) -> &DecoratedString { &self.decorated }

        #[must_use]
        pub fn selection(&self) -> Utf16Range { self.selection }

        /// Records the host's selection. It is stored exactly as given, see
        /// [`Self::caret_with_gravity`] for snapping a caret.
        ///
        /// # Errors
        ///
        /// [`crate::MaskedTextError::OutOfBounds`] if `selection` ends past the text.
        pub fn set_selection(&mut self, selection: Utf16Range) -> MaskedTextResult<()> {
            self.decorated.check_utf16_range(selection)?;
            self.selection = selection;
            Ok(())
        }

        /// Where a caret the host placed at `offset` should really go, given the
        /// [`crate::CaretGravity`] of the decoration around it.
        ///
        /// # Errors
        ///
        /// [`crate::MaskedTextError::OutOfBounds`] if `offset` is past the text.
        pub fn caret_with_gravity(&self, offset: Utf16Offset) -> MaskedTextResult<Utf16Offset> {
            let index = self.decorated.char_index_at(offset)?;
            self.decorated
                .utf16_offset_at(self.decorated.snap_caret(index))
        }
    }
}

mod configure {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl MaskedTextField {
        #[must_use]
        pub fn config(&self) -> &MaskedTextFieldConfig { &self.config }

        /// Swaps the decoration and immediately re-renders the current logical value
        /// through it.
        pub fn set_decoration(&mut self, decoration: StringDecoration) {
            let logical_value = self.logical_value().to_string();
            self.config.decoration = decoration;
            self.set_logical_value(&logical_value);
        }

        /// Applies to pasted text from now on. The current value is left alone.
        pub fn set_sanitization(&mut self, sanitization: StringSanitization) {
            self.config.sanitization = sanitization;
        }

        /// Applies to edits from now on. The current value is not re-validated.
        pub fn set_validation(&mut self, validation: StringValidation) {
            self.config.validation = validation;
        }
    }
}

mod edit {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl MaskedTextField {
        /// A keystroke edit. See [`Self::propose_edit_from`].
        ///
        /// # Errors
        ///
        /// [`crate::MaskedTextError::OutOfBounds`] if `raw` does not fit in the text.
        pub fn propose_edit(&mut self, raw: RawReplacement) -> MaskedTextResult<EditOutcome> {
            self.propose_edit_from(raw, EditSource::Typing)
        }

        /// Runs `raw` through the [`ReplacementEngine`], using the current selection to
        /// tell a caret backspace apart from a selection delete. On
        /// [`EditOutcome::Applied`] the new text and caret are committed together. On
        /// [`EditOutcome::CaretMoved`] only the caret moves. On
        /// [`EditOutcome::Rejected`] and on error nothing changes.
        ///
        /// # Errors
        ///
        /// [`crate::MaskedTextError::OutOfBounds`] if `raw` does not fit in the text.
        pub fn propose_edit_from(
            &mut self,
            raw: RawReplacement,
            source: EditSource,
        ) -> MaskedTextResult<EditOutcome> {
            let plan = ReplacementEngine::new(&self.config).plan_edit(
                &self.decorated,
                Some(self.selection),
                &raw,
                source,
            )?;

            if let Some(decorated) = plan.decorated {
                self.decorated = decorated;
            }
            if let Some(caret) = plan.outcome.caret() {
                self.selection = Utf16Range::caret(caret);
            }

            Ok(plan.outcome)
        }
    }
}

mod copy_paste {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl MaskedTextField {
        /// The logical text under `range`, without any decoration.
        ///
        /// # Errors
        ///
        /// [`crate::MaskedTextError::OutOfBounds`] if `range` ends past the text.
        pub fn copy_text(&self, range: Utf16Range) -> MaskedTextResult<String> {
            let range = self.decorated.range_from_utf16_range(range)?;
            self.decorated.significant_substring(range)
        }

        /// Replaces `range` with `text`. Unlike typing, `text` is sanitized first.
        ///
        /// # Errors
        ///
        /// [`crate::MaskedTextError::OutOfBounds`] if `range` ends past the text.
        pub fn paste_text(
            &mut self,
            range: Utf16Range,
            text: &str,
        ) -> MaskedTextResult<EditOutcome> {
            self.set_selection(range)?;
            self.propose_edit_from(RawReplacement::new(range, text), EditSource::External)
        }

        /// Copies the logical text under `range`, then deletes it through the normal
        /// edit path. The deletion can still be rejected by validation, in which case
        /// the text is left as it was.
        ///
        /// # Errors
        ///
        /// [`crate::MaskedTextError::OutOfBounds`] if `range` ends past the text.
        pub fn cut_text(
            &mut self,
            range: Utf16Range,
        ) -> MaskedTextResult<(String, EditOutcome)> {
            let copied = self.copy_text(range)?;
            self.set_selection(range)?;
            let outcome = self.propose_edit(RawReplacement::deletion(range))?;
            Ok((copied, outcome))
        }
    }
}
