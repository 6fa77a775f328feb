// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::{Debug, Formatter},
          sync::Arc};

use regex::Regex;

use super::StringChange;
use crate::{MaskedTextError, MaskedTextResult, SignificantRange, grapheme_count};

/// Signature of a custom validator.
pub type ValidateFn = dyn Fn(&StringChange<'_>) -> bool + Send + Sync;

/// Rule that a candidate logical value must pass for an edit to be applied.
#[derive(Clone, Default)]
pub enum StringValidation {
    /// Everything is accepted.
    #[default]
    None,
    /// At most this many grapheme clusters.
    MaximumLength(usize),
    /// The new text must match. Matching is a search, so anchor the pattern with `^...$`
    /// to check the whole text.
    Pattern(Regex),
    Custom(Arc<ValidateFn>),
}

mod construct {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl StringValidation {
        /// Compiles `pattern` into a [`StringValidation::Pattern`].
        ///
        /// # Errors
        ///
        /// [`MaskedTextError::InvalidPattern`] if the regex doesn't compile.
        pub fn pattern(pattern: &str) -> MaskedTextResult<Self> {
            Regex::new(pattern).map(Self::Pattern).map_err(|source| {
                MaskedTextError::InvalidPattern {
                    pattern: pattern.to_string(),
                    source,
                }
            })
        }

        pub fn custom(
            validate_fn: impl Fn(&StringChange<'_>) -> bool + Send + Sync + 'static,
        ) -> Self {
            Self::Custom(Arc::new(validate_fn))
        }
    }
}

impl StringValidation {
    #[must_use]
    pub fn validate(&self, change: &StringChange<'_>) -> bool {
        match self {
            Self::None => true,
            Self::MaximumLength(max) => grapheme_count(change.new_text) <= *max,
            Self::Pattern(regex) => regex.is_match(change.new_text),
            Self::Custom(validate_fn) => validate_fn(change),
        }
    }

    /// Validates `text` as if it replaced an empty value.
    #[must_use]
    pub fn validate_text(&self, text: &str) -> bool {
        self.validate(&StringChange {
            old_text: "",
            new_text: text,
            replaced_range: SignificantRange::caret(0),
            replacement_text: text,
        })
    }
}

impl Debug for StringValidation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "None"),
            Self::MaximumLength(max) => write!(f, "MaximumLength({max})"),
            Self::Pattern(regex) => write!(f, "Pattern({:?})", regex.as_str()),
            Self::Custom(_) => write!(f, "Custom"),
        }
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::assert_eq2;

    #[test_case("" => true ; "empty")]
    #[test_case("2357" => true ; "at the limit")]
    #[test_case("23578" => false ; "over the limit")]
    #[test_case("🙏🏽🙏🏽🙏🏽🙏🏽" => true ; "counts clusters not chars")]
    fn maximum_length_four(text: &str) -> bool {
        StringValidation::MaximumLength(4).validate_text(text)
    }

    #[test]
    fn none_accepts_anything() {
        assert!(StringValidation::None.validate_text(""));
        assert!(StringValidation::None.validate_text("XIX-ёЪ №123456"));
    }

    #[test]
    fn pattern() {
        let it = StringValidation::pattern("^[0-9]*$").unwrap();
        assert!(it.validate_text("0930"));
        assert!(!it.validate_text("09:30"));
    }

    #[test]
    fn invalid_pattern_is_an_error() {
        let result = StringValidation::pattern("[0-9");
        assert!(matches!(
            result,
            Err(MaskedTextError::InvalidPattern { ref pattern, .. }) if pattern == "[0-9"
        ));
    }

    #[test]
    fn custom_sees_the_whole_change() {
        let no_deletions = StringValidation::custom(|change| !change.is_deletion());
        let deletion = StringChange {
            old_text: "12",
            new_text: "1",
            replaced_range: SignificantRange::new(1, 1),
            replacement_text: "",
        };
        assert!(!no_deletions.validate(&deletion));
        assert!(no_deletions.validate_text("1"));
    }

    #[test]
    fn debug() {
        assert_eq2!(format!("{:?}", StringValidation::MaximumLength(4)), "MaximumLength(4)");
        assert_eq2!(
            format!("{:?}", StringValidation::pattern("^a$").unwrap()),
            "Pattern(\"^a$\")"
        );
    }
}
