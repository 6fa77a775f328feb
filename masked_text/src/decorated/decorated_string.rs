// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Debug, Display, Formatter};

use super::{CaretGravity, DecoratedCharacter};
use crate::{CharIndex, build_segments_for_str, char_index};

/// An immutable sequence of [`DecoratedCharacter`]s, plus the lookup tables needed to
/// translate positions between its coordinate spaces in `O(1)` or `O(log n)`.
///
/// - [`Self::value`] is the full text, which the host widget renders.
/// - [`Self::significant_value`] is the logical value.
///
/// It is rebuilt from scratch by the decorator on every accepted edit, and never mutated
/// in place.
///
/// See [`crate::decorated::coordinate_translation`] for the translations.
#[derive(Clone, PartialEq, Eq)]
pub struct DecoratedString {
    pub(super) characters: Vec<DecoratedCharacter>,
    pub(super) value: String,
    pub(super) significant_value: String,
    /// `utf16_offsets[i]` is where character `i` starts, in UTF-16 code units. It has
    /// one extra trailing entry which is the total length.
    pub(super) utf16_offsets: Vec<usize>,
    /// `significant_before[i]` is how many significant characters precede character
    /// `i`. It has one extra trailing entry which is the significant count.
    pub(super) significant_before: Vec<usize>,
    /// Index of each significant character, in order.
    pub(super) significant_indices: Vec<CharIndex>,
}

mod construct {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl DecoratedString {
        pub fn new(characters: impl IntoIterator<Item = DecoratedCharacter>) -> Self {
            let characters: Vec<DecoratedCharacter> = characters.into_iter().collect();
            let count = characters.len();

            let mut value = String::new();
            let mut significant_value = String::new();
            let mut utf16_offsets = Vec::with_capacity(count + 1);
            let mut significant_before = Vec::with_capacity(count + 1);
            let mut significant_indices = Vec::new();

            let mut utf16_offset = 0;
            for (index, decorated_char) in characters.iter().enumerate() {
                utf16_offsets.push(utf16_offset);
                significant_before.push(significant_indices.len());

                let it = decorated_char.as_str();
                value.push_str(it);
                utf16_offset += crate::utf16_len(it);

                if decorated_char.significant {
                    significant_value.push_str(it);
                    significant_indices.push(char_index(index));
                }
            }
            utf16_offsets.push(utf16_offset);
            significant_before.push(significant_indices.len());

            Self {
                characters,
                value,
                significant_value,
                utf16_offsets,
                significant_before,
                significant_indices,
            }
        }

        /// Every grapheme cluster of `text` becomes a significant character, with no
        /// decoration at all.
        #[must_use]
        pub fn from_significant(text: &str) -> Self {
            Self::new(
                build_segments_for_str(text)
                    .iter()
                    .map(|seg| DecoratedCharacter::significant(seg.get_str(text))),
            )
        }

        /// Every grapheme cluster of `text` becomes an auxiliary character with the
        /// given gravity.
        #[must_use]
        pub fn from_auxiliary(text: &str, caret_gravity: CaretGravity) -> Self {
            Self::new(build_segments_for_str(text).iter().map(|seg| {
                DecoratedCharacter::auxiliary(seg.get_str(text), caret_gravity)
            }))
        }
    }
}

mod accessors {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl DecoratedString {
        /// The full decorated text.
        #[must_use]
        pub fn value(&self) -> &str { &self.value }

        /// The logical value, ie: the significant characters only.
        #[must_use]
        pub fn significant_value(&self) -> &str { &self.significant_value }

        #[must_use]
        pub fn characters(&self) -> &[DecoratedCharacter] { &self.characters }

        #[must_use]
        pub fn get(&self, index: CharIndex) -> Option<&DecoratedCharacter> {
            self.characters.get(index.as_usize())
        }

        /// Number of decorated characters.
        #[must_use]
        pub fn len(&self) -> usize { self.characters.len() }

        #[must_use]
        pub fn is_empty(&self) -> bool { self.characters.is_empty() }

        /// Number of significant characters.
        #[must_use]
        pub fn significant_len(&self) -> usize { self.significant_indices.len() }

        /// Length of [`Self::value`] in UTF-16 code units.
        #[must_use]
        pub fn utf16_len(&self) -> usize {
            self.utf16_offsets.last().copied().unwrap_or_default()
        }

        /// `None` if `index` is past the end.
        #[must_use]
        pub fn is_character_significant(&self, index: CharIndex) -> Option<bool> {
            self.get(index).map(|it| it.significant)
        }
    }
}

impl Default for DecoratedString {
    fn default() -> Self { Self::new([]) }
}

impl Display for DecoratedString {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result { write!(f, "{}", self.value) }
}

impl Debug for DecoratedString {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        // Eg: `DecoratedString("23:57" ss.ss)` where `s` is significant.
        let map: String = self
            .characters
            .iter()
            .map(|it| if it.significant { 's' } else { '.' })
            .collect();
        write!(f, "DecoratedString({:?} {map})", self.value)
    }
}
