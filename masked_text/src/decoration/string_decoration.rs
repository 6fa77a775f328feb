// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::{Debug, Formatter},
          sync::Arc};

use super::{TemplateDecorator, decorate_grouped, decorate_time_of_day};
use crate::DecoratedString;

/// Signature of a custom decorator. It must put every grapheme cluster of its input, in
/// order, into the output as significant characters.
pub type DecorateFn = dyn Fn(&str) -> DecoratedString + Send + Sync;

/// How the logical value is turned into the text the host widget shows.
#[derive(Clone, Default)]
pub enum StringDecoration {
    /// Every logical character maps 1:1 to a significant character. No decoration.
    #[default]
    Empty,
    Template(TemplateDecorator),
    Custom(Arc<DecorateFn>),
}

mod construct {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl StringDecoration {
        /// Eg: `StringDecoration::template("+_ (___) ___-__-__")`.
        #[must_use]
        pub fn template(template: &str) -> Self {
            Self::Template(TemplateDecorator::new(template))
        }

        /// Template with a suffix that is always appended, eg: a currency unit.
        #[must_use]
        pub fn template_with_suffix(template: &str, global_suffix: &str) -> Self {
            Self::Template(TemplateDecorator::new(template).global_suffix(global_suffix))
        }

        pub fn custom(
            decorate_fn: impl Fn(&str) -> DecoratedString + Send + Sync + 'static,
        ) -> Self {
            Self::Custom(Arc::new(decorate_fn))
        }

        /// See [`decorate_time_of_day`].
        #[must_use]
        pub fn time_of_day() -> Self { Self::custom(decorate_time_of_day) }

        /// See [`decorate_grouped`].
        #[must_use]
        pub fn grouped(group_size: usize, separator: &str) -> Self {
            let separator = separator.to_string();
            Self::custom(move |logical| decorate_grouped(logical, group_size, &separator))
        }
    }
}

impl StringDecoration {
    /// Renders `logical`. The significant characters of the result are `logical`
    /// itself, so decorating `decorate(s).significant_value()` again gives back the same
    /// value.
    #[must_use]
    pub fn decorate(&self, logical: &str) -> DecoratedString {
        let decorated = match self {
            Self::Empty => DecoratedString::from_significant(logical),
            Self::Template(template) => template.decorate(logical),
            Self::Custom(decorate_fn) => decorate_fn(logical),
        };

        if decorated.significant_value() != logical {
            // % is Display, ? is Debug.
            tracing::warn!(
                message = "Decorator changed the logical value, it must only add decoration",
                logical = %logical,
                decorated = ?decorated,
            );
        }

        decorated
    }
}

impl Debug for StringDecoration {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "Empty"),
            Self::Template(template) => write!(f, "Template({:?})", template.template()),
            Self::Custom(_) => write!(f, "Custom"),
        }
    }
}
