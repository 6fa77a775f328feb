// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{StringDecoration, StringSanitization, StringValidation};

/// Everything that decides how a [`crate::MaskedTextField`] behaves. The default is no
/// decoration, no sanitization and no validation, ie: a plain text field.
///
/// ```
/// use r3bl_masked_text::{CharacterSet, MaskedTextFieldConfig, StringDecoration,
///                        StringSanitization, StringValidation};
///
/// let config = MaskedTextFieldConfig::default()
///     .with_decoration(StringDecoration::template("+_ (___) ___-__-__"))
///     .with_sanitization(StringSanitization::Accept(CharacterSet::DecimalDigits))
///     .with_validation(StringValidation::MaximumLength(11));
/// ```
#[derive(Clone, Debug, Default)]
pub struct MaskedTextFieldConfig {
    pub decoration: StringDecoration,
    pub sanitization: StringSanitization,
    pub validation: StringValidation,
}

impl MaskedTextFieldConfig {
    #[must_use]
    pub fn with_decoration(mut self, decoration: StringDecoration) -> Self {
        self.decoration = decoration;
        self
    }

    #[must_use]
    pub fn with_sanitization(mut self, sanitization: StringSanitization) -> Self {
        self.sanitization = sanitization;
        self
    }

    #[must_use]
    pub fn with_validation(mut self, validation: StringValidation) -> Self {
        self.validation = validation;
        self
    }
}
