// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Validators for values that are typed one character at a time. Each one accepts every
//! prefix of a valid value, since the field has to get through `1`, `12`, `123` to reach
//! `1234`.
//!
//! # Errors
//!
//! Every function here returns [`MaskedTextResult`] because it compiles a regex. The
//! patterns are fixed, so in practice they never fail.

use super::StringValidation;
use crate::{CYRILLIC_LETTERS_LOWERCASE, MaskedTextResult, ROMAN_DIGITS_LOWERCASE,
            with_uppercase};

/// Up to 8 digits, eg: `DDMMYYYY` with the separators left to decoration.
pub fn partial_date() -> MaskedTextResult<StringValidation> {
    StringValidation::pattern("^[0-9]{0,8}$")
}

/// Series and number of a Russian internal passport, up to 10 digits.
pub fn partial_russian_passport_number() -> MaskedTextResult<StringValidation> {
    StringValidation::pattern("^[0-9]{0,10}$")
}

/// Up to 9 digits.
pub fn partial_international_passport_number() -> MaskedTextResult<StringValidation> {
    StringValidation::pattern("^[0-9]{0,9}$")
}

/// Roman numeral series (up to 10), then up to 2 Cyrillic letters, then up to 6 digits.
/// Eg: `IIАБ654321`.
pub fn partial_birth_certificate_number() -> MaskedTextResult<StringValidation> {
    let roman = with_uppercase(ROMAN_DIGITS_LOWERCASE);
    let cyrillic = with_uppercase(CYRILLIC_LETTERS_LOWERCASE);
    StringValidation::pattern(&format!("^[{roman}]{{0,10}}[{cyrillic}]{{0,2}}[0-9]{{0,6}}$"))
}

/// Anything without whitespace.
pub fn partial_foreign_document_number() -> MaskedTextResult<StringValidation> {
    StringValidation::pattern(r"^\S*$")
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case("" => true ; "empty")]
    #[test_case("0" => true ; "one digit")]
    #[test_case("8001" => true ; "four digits")]
    #[test_case("12345678" => true ; "full date")]
    #[test_case("2 3" => false ; "space")]
    #[test_case("ABC" => false ; "letters")]
    #[test_case("123456789" => false ; "too long")]
    fn date(text: &str) -> bool { partial_date().unwrap().validate_text(text) }

    #[test_case("" => true ; "empty")]
    #[test_case("i" => true ; "roman digit")]
    #[test_case("ъ" => true ; "cyrillic letter")]
    #[test_case("ё" => true ; "yo")]
    #[test_case("ыю123456" => true ; "letters and digits")]
    #[test_case("Lё123" => true ; "mixed case")]
    #[test_case("iiаб654321" => true ; "full lowercase")]
    #[test_case("IIГФ654321" => true ; "full uppercase")]
    #[test_case("   " => false ; "spaces")]
    #[test_case("XIX-ёЪ №123456" => false ; "punctuation")]
    #[test_case("IVжй1234567" => false ; "too many digits")]
    #[test_case("CMMMDIVLLLDжй123456" => false ; "too many roman digits")]
    fn birth_certificate(text: &str) -> bool {
        partial_birth_certificate_number().unwrap().validate_text(text)
    }

    #[test]
    fn passports() {
        let russian = partial_russian_passport_number().unwrap();
        assert!(russian.validate_text("4509123456"));
        assert!(!russian.validate_text("45091234567"));

        let international = partial_international_passport_number().unwrap();
        assert!(international.validate_text("721234567"));
        assert!(!international.validate_text("7212345678"));
    }

    #[test]
    fn foreign_document() {
        let it = partial_foreign_document_number().unwrap();
        assert!(it.validate_text("AB-123/45"));
        assert!(!it.validate_text("AB 123"));
    }
}
