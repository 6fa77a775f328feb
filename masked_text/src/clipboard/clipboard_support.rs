// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::ClipboardService;
use crate::{DEBUG_MASKED_TEXT_COPY_PASTE, EditOutcome, MaskedTextField, MaskedTextResult};

/// Copies the logical text under the field's selection. Clipboard failures are logged
/// and otherwise ignored.
///
/// # Errors
///
/// [`crate::MaskedTextError::OutOfBounds`] if the field's selection is stale.
pub fn copy_to_clipboard(
    field: &MaskedTextField,
    clipboard_service_provider: &mut impl ClipboardService,
) -> MaskedTextResult<()> {
    let copied = field.copy_text(field.selection())?;
    put_into_clipboard(clipboard_service_provider, copied);
    Ok(())
}

/// Copies the logical text under the field's selection, then deletes it. Returns
/// `None` when the selection is a caret, since there is nothing to cut.
///
/// # Errors
///
/// [`crate::MaskedTextError::OutOfBounds`] if the field's selection is stale.
pub fn cut_to_clipboard(
    field: &mut MaskedTextField,
    clipboard_service_provider: &mut impl ClipboardService,
) -> MaskedTextResult<Option<EditOutcome>> {
    let selection = field.selection();
    if selection.is_caret() {
        return Ok(None);
    }
    let (copied, outcome) = field.cut_text(selection)?;
    put_into_clipboard(clipboard_service_provider, copied);
    Ok(Some(outcome))
}

/// Pastes the clipboard over the field's selection. The text is sanitized like any
/// other pasted text. Returns `None` when the clipboard can't be read.
///
/// # Errors
///
/// [`crate::MaskedTextError::OutOfBounds`] if the field's selection is stale.
pub fn paste_from_clipboard(
    field: &mut MaskedTextField,
    clipboard_service_provider: &mut impl ClipboardService,
) -> MaskedTextResult<Option<EditOutcome>> {
    match clipboard_service_provider.try_to_get_content_from_clipboard() {
        Ok(clipboard_text) => {
            let outcome = field.paste_text(field.selection(), &clipboard_text)?;

            DEBUG_MASKED_TEXT_COPY_PASTE.then(|| {
                // % is Display, ? is Debug.
                tracing::debug!(
                    message = "📋📋📋 Text was pasted from clipboard",
                    clipboard_text = %clipboard_text,
                    outcome = ?outcome,
                );
            });

            Ok(Some(outcome))
        }

        Err(error) => {
            DEBUG_MASKED_TEXT_COPY_PASTE.then(|| {
                // % is Display, ? is Debug.
                tracing::debug!(
                    message = "📋📋📋 Failed to paste the text from clipboard",
                    error = ?error,
                );
            });
            Ok(None)
        }
    }
}

fn put_into_clipboard(
    clipboard_service_provider: &mut impl ClipboardService,
    content: String,
) {
    let result = clipboard_service_provider.try_to_put_content_into_clipboard(content);
    if let Err(error) = result {
        DEBUG_MASKED_TEXT_COPY_PASTE.then(|| {
            // % is Display, ? is Debug.
            tracing::debug!(
                message = "📋📋📋 Failed to copy selected text to clipboard",
                error = ?error,
            );
        });
    }
}
