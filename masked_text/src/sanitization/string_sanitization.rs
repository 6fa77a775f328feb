// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::{Debug, Formatter},
          sync::Arc};

use super::CharacterSet;
use crate::graphemes;

/// Signature of a custom sanitizer.
pub type SanitizeFn = dyn Fn(&str) -> String + Send + Sync;

/// How text from outside normal typing (eg: a paste) is cleaned before it is inserted.
///
/// Sets are applied per grapheme cluster, never per [`char`], so that a cluster is kept
/// or dropped as a whole:
/// - [`Self::Accept`] keeps a cluster only if **all** of its chars are in the set.
/// - [`Self::Reject`] drops a cluster if **any** of its chars is in the set.
#[derive(Clone, Default)]
pub enum StringSanitization {
    #[default]
    None,
    Accept(CharacterSet),
    Reject(CharacterSet),
    Custom(Arc<SanitizeFn>),
}

impl StringSanitization {
    pub fn custom(sanitize_fn: impl Fn(&str) -> String + Send + Sync + 'static) -> Self {
        Self::Custom(Arc::new(sanitize_fn))
    }

    #[must_use]
    pub fn sanitize(&self, text: &str) -> String {
        match self {
            Self::None => text.to_string(),
            Self::Accept(set) => graphemes(text).filter(|it| set.contains_all(it)).collect(),
            Self::Reject(set) => graphemes(text).filter(|it| !set.contains_any(it)).collect(),
            Self::Custom(sanitize_fn) => sanitize_fn(text),
        }
    }
}

impl Debug for StringSanitization {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "None"),
            Self::Accept(set) => write!(f, "Accept({set:?})"),
            Self::Reject(set) => write!(f, "Reject({set:?})"),
            Self::Custom(_) => write!(f, "Custom"),
        }
    }
}
