// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Lowercase roman numerals. [`roman_digits`] adds the uppercase ones.
pub const ROMAN_DIGITS_LOWERCASE: &str = "ivxlcdm";

/// Lowercase Russian alphabet, including `ё`. [`cyrillic_letters`] adds the uppercase
/// ones.
pub const CYRILLIC_LETTERS_LOWERCASE: &str = "абвгдеёжзийклмнопрстуфхцчшщъыьэюя";

/// A set of Unicode scalar values, used by [`crate::StringSanitization`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CharacterSet {
    /// ASCII `0` to `9`.
    DecimalDigits,
    /// Any alphabetic character, in any script.
    Letters,
    Whitespace,
    /// [`CharacterSet::Letters`] and numeric characters.
    Alphanumerics,
    /// Exactly the chars of this string.
    Chars(String),
    Union(Vec<CharacterSet>),
}

impl CharacterSet {
    #[must_use]
    pub fn contains(&self, ch: char) -> bool {
        match self {
            Self::DecimalDigits => ch.is_ascii_digit(),
            Self::Letters => ch.is_alphabetic(),
            Self::Whitespace => ch.is_whitespace(),
            Self::Alphanumerics => ch.is_alphanumeric(),
            Self::Chars(chars) => chars.contains(ch),
            Self::Union(sets) => sets.iter().any(|set| set.contains(ch)),
        }
    }

    /// Every char of `text` is in this set.
    #[must_use]
    pub fn contains_all(&self, text: &str) -> bool { text.chars().all(|ch| self.contains(ch)) }

    /// At least one char of `text` is in this set.
    #[must_use]
    pub fn contains_any(&self, text: &str) -> bool { text.chars().any(|ch| self.contains(ch)) }

    #[must_use]
    pub fn union(self, other: CharacterSet) -> Self {
        match self {
            Self::Union(mut sets) => {
                sets.push(other);
                Self::Union(sets)
            }
            it => Self::Union(vec![it, other]),
        }
    }
}

/// `ivxlcdm` in both cases.
#[must_use]
pub fn roman_digits() -> CharacterSet {
    CharacterSet::Chars(with_uppercase(ROMAN_DIGITS_LOWERCASE))
}

/// The Russian alphabet in both cases.
#[must_use]
pub fn cyrillic_letters() -> CharacterSet {
    CharacterSet::Chars(with_uppercase(CYRILLIC_LETTERS_LOWERCASE))
}

/// `lowercase` followed by its uppercase form.
#[must_use]
pub fn with_uppercase(lowercase: &str) -> String {
    let mut acc = lowercase.to_string();
    acc.push_str(&lowercase.to_uppercase());
    acc
}
