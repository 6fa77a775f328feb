// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # Templates
//!
//! A template like `+_ (___) ___-__-__` is compiled once, by splitting it at each
//! placeholder marker:
//!
//! ```text
//! "+_ (___) ___-__-__"
//!  │ └┬─┘   ...
//!  │  └ suffix[0] = " (" follows the 1st logical character
//!  └ prefix = "+"
//! ```
//!
//! Decorating then just interleaves the logical characters with the suffixes. Suffixes
//! are emitted only after characters that exist, so a half typed value has no dangling
//! decoration at its end. A `global_suffix` (eg: a currency unit) is the exception, it
//! is always appended.

use crate::{CaretGravity, DEFAULT_PLACEHOLDER, DecoratedCharacter, DecoratedString,
            build_segments_for_str};

/// A compiled template. See the [module docs](self).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TemplateDecorator {
    template: String,
    placeholder: char,
    prefix: String,
    suffixes: Vec<String>,
    global_suffix: Option<String>,
}

mod construct {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl TemplateDecorator {
        /// Compiles `template` with the default `_` placeholder.
        #[must_use]
        pub fn new(template: &str) -> Self {
            Self::with_placeholder(template, DEFAULT_PLACEHOLDER)
        }

        /// Compiles `template` with a custom placeholder marker.
        ///
        /// A template without any placeholder is accepted. Its whole text becomes the
        /// prefix and every logical character gets no suffix. A warning is logged since
        /// this is almost always a configuration mistake, see
        /// [`Self::has_placeholders`].
        #[must_use]
        pub fn with_placeholder(template: &str, placeholder: char) -> Self {
            let mut groups = template.split(placeholder).map(str::to_string);
            let prefix = groups.next().unwrap_or_default();
            let suffixes: Vec<String> = groups.collect();

            if suffixes.is_empty() {
                // % is Display, ? is Debug.
                tracing::warn!(
                    message = "Template has no placeholder, it can't hold any input",
                    template = %template,
                    placeholder = ?placeholder,
                );
            }

            Self {
                template: template.to_string(),
                placeholder,
                prefix,
                suffixes,
                global_suffix: None,
            }
        }

        /// Text appended after the last logical character, regardless of how many
        /// placeholders have been filled.
        #[must_use]
        pub fn global_suffix(mut self, global_suffix: impl Into<String>) -> Self {
            self.global_suffix = Some(global_suffix.into());
            self
        }
    }
}

mod accessors {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl TemplateDecorator {
        #[must_use]
        pub fn template(&self) -> &str { &self.template }

        #[must_use]
        pub fn placeholder(&self) -> char { self.placeholder }

        #[must_use]
        pub fn prefix(&self) -> &str { &self.prefix }

        #[must_use]
        pub fn suffixes(&self) -> &[String] { &self.suffixes }

        #[must_use]
        pub fn get_global_suffix(&self) -> Option<&str> { self.global_suffix.as_deref() }

        #[must_use]
        pub fn placeholder_count(&self) -> usize { self.suffixes.len() }

        /// `false` for a misconfigured template that has no room for input.
        #[must_use]
        pub fn has_placeholders(&self) -> bool { !self.suffixes.is_empty() }
    }
}

mod decorate {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl TemplateDecorator {
        /// 1. `prefix`, as auxiliary characters pushed toward the end.
        /// 2. Each logical character, followed by its suffix (if it has one) as
        ///    auxiliary characters pulled toward the start.
        /// 3. `global_suffix`, pulled toward the start.
        ///
        /// Logical characters beyond the number of placeholders are kept, they just get
        /// no suffix. Limiting length is the validator's job.
        #[must_use]
        pub fn decorate(&self, logical: &str) -> DecoratedString {
            let mut characters = Vec::new();

            push_auxiliary(&mut characters, &self.prefix, CaretGravity::TowardEnd);

            for (index, seg) in build_segments_for_str(logical).iter().enumerate() {
                characters.push(DecoratedCharacter::significant(seg.get_str(logical)));
                if let Some(suffix) = self.suffixes.get(index) {
                    push_auxiliary(&mut characters, suffix, CaretGravity::TowardStart);
                }
            }

            if let Some(global_suffix) = &self.global_suffix {
                push_auxiliary(&mut characters, global_suffix, CaretGravity::TowardStart);
            }

            DecoratedString::new(characters)
        }
    }

    fn push_auxiliary(
        acc: &mut Vec<DecoratedCharacter>,
        text: &str,
        caret_gravity: CaretGravity,
    ) {
        acc.extend(
            build_segments_for_str(text)
                .iter()
                .map(|seg| DecoratedCharacter::auxiliary(seg.get_str(text), caret_gravity)),
        );
    }
}
