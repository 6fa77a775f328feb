// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{DEBUG_MASKED_TEXT_ENGINE, EditOutcome, MaskedTextField, MaskedTextResult,
            RawReplacement, Utf16Range};

/// Abstraction over the text widget that displays a [`MaskedTextField`], for
/// dependency injection. All positions are in UTF-16 code units.
pub trait TextFieldHost {
    fn selected_range(&self) -> Utf16Range;
    fn set_selected_range(&mut self, range: Utf16Range);
    fn text(&self) -> &str;
    fn set_text(&mut self, text: &str);
}

/// Forward the host's "should change characters in range" callback here. The field
/// performs the edit itself and renders the result into `host`, so the answer is
/// always `false`: the host must not apply the raw edit.
///
/// # Errors
///
/// [`crate::MaskedTextError::OutOfBounds`] if the host's range or selection doesn't fit
/// the field's text, which means the two are out of sync.
pub fn handle_should_change(
    field: &mut MaskedTextField,
    host: &mut impl TextFieldHost,
    range: Utf16Range,
    replacement_text: &str,
) -> MaskedTextResult<bool> {
    field.set_selection(host.selected_range())?;
    let outcome = field.propose_edit(RawReplacement::new(range, replacement_text))?;
    apply_outcome(host, &outcome);
    Ok(false)
}

/// Paste `text` over the host's current selection. See
/// [`MaskedTextField::paste_text`].
///
/// # Errors
///
/// [`crate::MaskedTextError::OutOfBounds`] if the host's selection doesn't fit the
/// field's text.
pub fn handle_paste(
    field: &mut MaskedTextField,
    host: &mut impl TextFieldHost,
    text: &str,
) -> MaskedTextResult<EditOutcome> {
    let outcome = field.paste_text(host.selected_range(), text)?;
    apply_outcome(host, &outcome);
    Ok(outcome)
}

/// Forward the host's "selection changed" callback here. A collapsed caret is moved
/// according to the caret gravity of the decoration around it. A non-empty selection
/// is recorded as is.
///
/// # Errors
///
/// [`crate::MaskedTextError::OutOfBounds`] if the host's selection doesn't fit the
/// field's text.
pub fn handle_selection_change(
    field: &mut MaskedTextField,
    host: &mut impl TextFieldHost,
) -> MaskedTextResult<()> {
    let selection = host.selected_range();
    if !selection.is_caret() {
        return field.set_selection(selection);
    }

    let snapped = Utf16Range::caret(field.caret_with_gravity(selection.location)?);
    field.set_selection(snapped)?;
    if snapped != selection {
        host.set_selected_range(snapped);
    }
    Ok(())
}

/// Pushes the field's text and selection into `host`. Use it after changing the field
/// programmatically, eg: with [`MaskedTextField::set_logical_value`].
pub fn render_into_host(field: &MaskedTextField, host: &mut impl TextFieldHost) {
    host.set_text(field.decorated_value());
    host.set_selected_range(field.selection());
}

fn apply_outcome(host: &mut impl TextFieldHost, outcome: &EditOutcome) {
    match outcome {
        EditOutcome::Applied {
            decorated_value,
            caret,
        } => {
            host.set_text(decorated_value);
            host.set_selected_range(Utf16Range::caret(*caret));
        }
        EditOutcome::CaretMoved { caret } => {
            host.set_selected_range(Utf16Range::caret(*caret));
        }
        EditOutcome::Rejected => {
            DEBUG_MASKED_TEXT_ENGINE.then(|| {
                // % is Display, ? is Debug.
                tracing::debug!(
                    message = "🙅 host edit dropped",
                    host_text = %host.text(),
                );
            });
        }
    }
}

pub mod text_field_host_test_fixtures {
    use super::{TextFieldHost, Utf16Range};

    /// Records what the field renders, like a real widget would.
    #[derive(Debug, Default, Clone, PartialEq, Eq)]
    pub struct TestTextFieldHost {
        pub text: String,
        pub selection: Utf16Range,
    }

    impl TextFieldHost for TestTextFieldHost {
        fn selected_range(&self) -> Utf16Range { self.selection }

        fn set_selected_range(&mut self, range: Utf16Range) { self.selection = range; }

        fn text(&self) -> &str { &self.text }

        fn set_text(&mut self, text: &str) { self.text = text.to_string(); }
    }
}

#[cfg(test)]
mod tests {
    use super::{text_field_host_test_fixtures::TestTextFieldHost, *};
    use crate::{MaskedTextFieldConfig, StringDecoration, StringValidation, assert_eq2};

    fn field_and_host(logical_value: &str) -> (MaskedTextField, TestTextFieldHost) {
        let mut field = MaskedTextField::new(
            MaskedTextFieldConfig::default()
                .with_decoration(StringDecoration::template("__:__"))
                .with_validation(StringValidation::MaximumLength(4)),
        );
        field.set_logical_value(logical_value);
        let mut host = TestTextFieldHost::default();
        render_into_host(&field, &mut host);
        (field, host)
    }

    #[test]
    fn render_pushes_text_and_caret() {
        let (_, host) = field_and_host("235");
        assert_eq2!(host.text, "23:5");
        assert_eq2!(host.selection, Utf16Range::caret(4));
    }

    #[test]
    fn should_change_never_lets_the_host_edit() {
        let (mut field, mut host) = field_and_host("235");
        let allow = handle_should_change(&mut field, &mut host, Utf16Range::caret(4), "7")
            .unwrap();
        assert!(!allow);
        assert_eq2!(host.text, "23:57");
        assert_eq2!(host.selection, Utf16Range::caret(5));
    }

    #[test]
    fn backspace_uses_the_host_selection() {
        let (mut field, mut host) = field_and_host("2357");
        host.selection = Utf16Range::caret(3);
        handle_should_change(&mut field, &mut host, Utf16Range::new(2, 1), "").unwrap();
        assert_eq2!(host.text, "25:7");
        assert_eq2!(host.selection, Utf16Range::caret(1));
        assert_eq2!(field.logical_value(), "257");
    }

    #[test]
    fn rejected_keystroke_leaves_the_host_alone() {
        let (mut field, mut host) = field_and_host("2357");
        let before = host.clone();
        let allow = handle_should_change(&mut field, &mut host, Utf16Range::caret(5), "1")
            .unwrap();
        assert!(!allow);
        assert_eq2!(host, before);
    }

    #[test]
    fn host_out_of_sync_is_an_error() {
        let (mut field, mut host) = field_and_host("23");
        host.selection = Utf16Range::caret(10);
        assert!(handle_should_change(&mut field, &mut host, Utf16Range::caret(1), "1").is_err());
        assert_eq2!(field.logical_value(), "23");
    }

    #[test]
    fn selection_change_snaps_carets_only() {
        let (mut field, mut host) = field_and_host("2357");

        // Right after the colon, which belongs to the "3".
        host.selection = Utf16Range::caret(3);
        handle_selection_change(&mut field, &mut host).unwrap();
        assert_eq2!(host.selection, Utf16Range::caret(2));
        assert_eq2!(field.selection(), Utf16Range::caret(2));

        host.selection = Utf16Range::new(1, 3);
        handle_selection_change(&mut field, &mut host).unwrap();
        assert_eq2!(host.selection, Utf16Range::new(1, 3));
        assert_eq2!(field.selection(), Utf16Range::new(1, 3));
    }

    #[test]
    fn paste_over_selection() {
        let (mut field, mut host) = field_and_host("2357");
        host.selection = Utf16Range::new(3, 2);
        let outcome = handle_paste(&mut field, &mut host, "00").unwrap();
        assert!(outcome.is_applied());
        assert_eq2!(host.text, "23:00");
        assert_eq2!(host.selection, Utf16Range::caret(5));
    }
}
