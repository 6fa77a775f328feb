// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Errors are only used for programming mistakes on the caller's side (a range outside
//! the text) and for bad configuration (a pattern that doesn't compile). A validator
//! rejecting an edit, or an edit that only touches auxiliary characters, are normal
//! outcomes of the edit pipeline and show up as [`crate::EditOutcome`] variants instead.

use miette::Diagnostic;
use strum_macros::Display;

pub type MaskedTextResult<T> = Result<T, MaskedTextError>;

/// Which coordinate space an out of bounds position was expressed in.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Display)]
pub enum CoordinateSpace {
    #[strum(to_string = "UTF-16 code units")]
    Utf16,
    #[strum(to_string = "decorated characters")]
    Decorated,
    #[strum(to_string = "significant characters")]
    Significant,
}

#[derive(Debug, thiserror::Error, Diagnostic)]
pub enum MaskedTextError {
    #[error("📏 Range {start}..{end} is out of bounds, the text is {len} {space} long")]
    #[diagnostic(
        code(r3bl_masked_text::out_of_bounds),
        help("Ranges must come from the current text. Sync the selection after every edit")
    )]
    OutOfBounds {
        space: CoordinateSpace,
        start: usize,
        end: usize,
        len: usize,
    },

    #[error("🔍 Could not compile validation pattern: '{pattern}'")]
    #[diagnostic(
        code(r3bl_masked_text::invalid_pattern),
        help("Check the regular expression syntax")
    )]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

impl MaskedTextError {
    #[must_use]
    pub fn out_of_bounds(
        space: CoordinateSpace,
        range: std::ops::Range<usize>,
        len: usize,
    ) -> Self {
        Self::OutOfBounds {
            space,
            start: range.start,
            end: range.end,
            len,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn out_of_bounds_message_names_the_space() {
        let error = MaskedTextError::out_of_bounds(CoordinateSpace::Utf16, 3..9, 5);
        assert_eq2!(
            error.to_string(),
            "📏 Range 3..9 is out of bounds, the text is 5 UTF-16 code units long"
        );
        assert_eq2!(
            error.code().map(|it| it.to_string()),
            Some("r3bl_masked_text::out_of_bounds".to_string())
        );
    }

    #[test]
    fn invalid_pattern_keeps_source() {
        let source = regex::Regex::new("[0-9").unwrap_err();
        let error = MaskedTextError::InvalidPattern {
            pattern: "[0-9".into(),
            source,
        };
        assert!(std::error::Error::source(&error).is_some());
    }
}
