// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # Coordinate translation
//!
//! Three coordinate spaces meet in a [`DecoratedString`]:
//!
//! ```text
//! value:             +  7  ␣  9  0  0
//! CharIndex:         0  1  2  3  4  5  6
//! significant?       .  s  .  s  s  s
//! SigIndex:             0     1  2  3  4
//! ```
//!
//! A [`CharIndex`] `i` sits *before* character `i`, so a caret at the end of the text is
//! `char_index(len)`. The same holds for [`SigIndex`] over the logical value.
//!
//! Every translation checks its input against the current text, and returns
//! [`MaskedTextError::OutOfBounds`] instead of clamping. The only rounding that happens
//! is in [`DecoratedString::range_from_utf16_range`], where an offset that falls inside
//! a multi code unit character (eg: between the two halves of a surrogate pair) widens
//! the range so that it covers whole characters.

use super::{CaretGravity, DecoratedString};
use crate::{CharIndex, CoordinateSpace, DecoratedRange, MaskedTextError, MaskedTextResult,
            SigIndex, SignificantRange, Span, TextIndex, Utf16Offset, Utf16Range, char_index,
            sig_index, utf16_offset};

mod bounds {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl DecoratedString {
        pub(crate) fn check_decorated_range(
            &self,
            range: DecoratedRange,
        ) -> MaskedTextResult<()> {
            check_range(CoordinateSpace::Decorated, range, self.len())
        }

        pub(crate) fn check_utf16_range(&self, range: Utf16Range) -> MaskedTextResult<()> {
            check_range(CoordinateSpace::Utf16, range, self.utf16_len())
        }

        pub(crate) fn check_significant_range(
            &self,
            range: SignificantRange,
        ) -> MaskedTextResult<()> {
            check_range(CoordinateSpace::Significant, range, self.significant_len())
        }
    }

    /// A range whose end overflows `usize` is out of bounds too.
    fn check_range<I: TextIndex>(
        space: CoordinateSpace,
        range: Span<I>,
        len: usize,
    ) -> MaskedTextResult<()> {
        match range.checked_end() {
            Some(end) if end.as_usize() <= len => Ok(()),
            _ => Err(MaskedTextError::out_of_bounds(space, range.as_usize_range(), len)),
        }
    }
}

/// Character index and UTF-16 code unit offset.
mod utf16_translation {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl DecoratedString {
        /// Where the character at `index` starts, in UTF-16 code units. `index` may be
        /// `len()`, which maps to the end of the text.
        ///
        /// # Errors
        ///
        /// [`MaskedTextError::OutOfBounds`] if `index > len()`.
        pub fn utf16_offset_at(&self, index: CharIndex) -> MaskedTextResult<Utf16Offset> {
            self.check_decorated_range(DecoratedRange::caret(index))?;
            Ok(utf16_offset(self.utf16_offsets[index.as_usize()]))
        }

        /// The character that contains `offset`. An offset in the middle of a character
        /// rounds down to the start of it.
        ///
        /// # Errors
        ///
        /// [`MaskedTextError::OutOfBounds`] if `offset > utf16_len()`.
        pub fn char_index_at(&self, offset: Utf16Offset) -> MaskedTextResult<CharIndex> {
            self.check_utf16_range(Utf16Range::caret(offset))?;
            Ok(self.char_index_rounding_down(offset))
        }

        /// Translates a host range into a range of whole characters. A start that falls
        /// inside a character rounds down, an end that falls inside one rounds up. A
        /// caret stays a caret.
        ///
        /// # Errors
        ///
        /// [`MaskedTextError::OutOfBounds`] if the range ends past `utf16_len()`.
        pub fn range_from_utf16_range(
            &self,
            range: Utf16Range,
        ) -> MaskedTextResult<DecoratedRange> {
            self.check_utf16_range(range)?;
            let start = self.char_index_rounding_down(range.location);
            if range.is_caret() {
                return Ok(DecoratedRange::caret(start));
            }
            let end = self.char_index_rounding_up(range.end());
            Ok(DecoratedRange::between(start, end))
        }

        /// # Errors
        ///
        /// [`MaskedTextError::OutOfBounds`] if the range ends past `len()`.
        pub fn utf16_range_from_range(
            &self,
            range: DecoratedRange,
        ) -> MaskedTextResult<Utf16Range> {
            self.check_decorated_range(range)?;
            let start = self.utf16_offsets[range.location.as_usize()];
            let end = self.utf16_offsets[range.end().as_usize()];
            Ok(Utf16Range::new(start, end - start))
        }

        fn char_index_rounding_down(&self, offset: Utf16Offset) -> CharIndex {
            let it = self
                .utf16_offsets
                .partition_point(|&start| start <= offset.as_usize());
            char_index(it.saturating_sub(1))
        }

        fn char_index_rounding_up(&self, offset: Utf16Offset) -> CharIndex {
            let it = self
                .utf16_offsets
                .partition_point(|&start| start < offset.as_usize());
            char_index(it.min(self.len()))
        }
    }
}

/// Decorated range and significant range.
mod significant_translation {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl DecoratedString {
        /// The significant characters covered by `range`. Auxiliary characters in it are
        /// dropped, so a range made only of decoration maps to a zero length range at
        /// the position where the next significant character would be.
        ///
        /// # Errors
        ///
        /// [`MaskedTextError::OutOfBounds`] if the range ends past `len()`.
        pub fn significant_range(
            &self,
            range: DecoratedRange,
        ) -> MaskedTextResult<SignificantRange> {
            self.check_decorated_range(range)?;
            let start = self.significant_before[range.location.as_usize()];
            let end = self.significant_before[range.end().as_usize()];
            Ok(SignificantRange::new(start, end - start))
        }

        /// The span of decorated characters from the first significant character of
        /// `range` to just after the last one. A zero length range maps to a caret at
        /// [`Self::index_from_significant_offset`].
        ///
        /// # Errors
        ///
        /// [`MaskedTextError::OutOfBounds`] if the range ends past `significant_len()`.
        pub fn decorated_range(
            &self,
            range: SignificantRange,
        ) -> MaskedTextResult<DecoratedRange> {
            self.check_significant_range(range)?;
            if range.is_caret() {
                return Ok(DecoratedRange::caret(
                    self.index_from_significant_offset(range.location),
                ));
            }
            let first = self.significant_indices[range.location.as_usize()];
            let last = self.significant_indices[range.end().as_usize() - 1];
            Ok(DecoratedRange::between(first, last + 1))
        }

        /// Index of the first decorated character whose significant position is `>=
        /// offset`, ie: the `offset`-th significant character. Any run of auxiliary
        /// characters before it is skipped. When no significant character is left, this
        /// is the end of the text.
        #[must_use]
        pub fn index_from_significant_offset(&self, offset: SigIndex) -> CharIndex {
            self.significant_indices
                .get(offset.as_usize())
                .copied()
                .unwrap_or_else(|| char_index(self.len()))
        }

        /// Number of significant characters before `index`. Indices past the end count
        /// all of them.
        #[must_use]
        pub fn significant_offset_at(&self, index: CharIndex) -> SigIndex {
            let index = index.as_usize().min(self.len());
            sig_index(self.significant_before[index])
        }

        /// Nearest significant character strictly before `index`.
        #[must_use]
        pub fn index_of_first_significant_to_the_left_from(
            &self,
            index: CharIndex,
        ) -> Option<CharIndex> {
            let count = self.significant_offset_at(index).as_usize();
            count
                .checked_sub(1)
                .and_then(|it| self.significant_indices.get(it).copied())
        }

        /// Nearest significant character at or after `index`.
        #[must_use]
        pub fn index_of_first_significant_to_the_right_from(
            &self,
            index: CharIndex,
        ) -> Option<CharIndex> {
            let count = self.significant_offset_at(index).as_usize();
            self.significant_indices.get(count).copied()
        }

        /// The logical text covered by `range`. Decoration never leaks into it, which is
        /// what a copy to the clipboard needs.
        ///
        /// # Errors
        ///
        /// [`MaskedTextError::OutOfBounds`] if the range ends past `len()`.
        pub fn significant_substring(&self, range: DecoratedRange) -> MaskedTextResult<String> {
            self.check_decorated_range(range)?;
            Ok(self.characters[range.as_usize_range()]
                .iter()
                .filter(|it| it.significant)
                .map(|it| it.as_str())
                .collect())
        }
    }
}

/// Caret gravity.
mod caret_snapping {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl DecoratedString {
        /// Moves a caret that sits next to decoration to where the decoration's
        /// [`CaretGravity`] points.
        ///
        /// 1. If the character after the caret is auxiliary with
        ///    [`CaretGravity::TowardEnd`] (a prefix), move forward to the next
        ///    significant character, or to the end of the text.
        /// 2. Otherwise, if the character before the caret is auxiliary with
        ///    [`CaretGravity::TowardStart`] (a suffix), move back to just after the
        ///    previous significant character, or to the start of the text.
        ///
        /// Indices past the end are treated as the end.
        #[must_use]
        pub fn snap_caret(&self, index: CharIndex) -> CharIndex {
            let index = char_index(index.as_usize().min(self.len()));

            let pushed_forward = self.get(index).is_some_and(|it| {
                !it.significant && it.caret_gravity == CaretGravity::TowardEnd
            });
            if pushed_forward {
                return self
                    .index_of_first_significant_to_the_right_from(index)
                    .unwrap_or_else(|| char_index(self.len()));
            }

            let pulled_back = index
                .as_usize()
                .checked_sub(1)
                .and_then(|before| self.get(char_index(before)))
                .is_some_and(|it| {
                    !it.significant && it.caret_gravity == CaretGravity::TowardStart
                });
            if pulled_back {
                return self
                    .index_of_first_significant_to_the_left_from(index)
                    .map_or(char_index(0), |it| it + 1);
            }

            index
        }
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::{DecoratedCharacter, assert_eq2};

    /// `+7 900`, with a prefix `+` and a suffix space after the `7`.
    fn phone_prefix() -> DecoratedString {
        DecoratedString::new([
            DecoratedCharacter::auxiliary("+", CaretGravity::TowardEnd),
            DecoratedCharacter::significant("7"),
            DecoratedCharacter::auxiliary(" ", CaretGravity::TowardStart),
            DecoratedCharacter::significant("9"),
            DecoratedCharacter::significant("0"),
            DecoratedCharacter::significant("0"),
        ])
    }

    /// `1🤷🏽‍♀️2`, with the emoji as decoration.
    fn emoji_separator() -> DecoratedString {
        DecoratedString::new([
            DecoratedCharacter::significant("1"),
            DecoratedCharacter::auxiliary("🤷🏽‍♀️", CaretGravity::TowardStart),
            DecoratedCharacter::significant("2"),
        ])
    }

    #[test]
    fn utf16_offsets_follow_code_units() {
        let it = emoji_separator();
        assert_eq2!(it.utf16_len(), 9);
        assert_eq2!(it.utf16_offset_at(char_index(1)).unwrap(), utf16_offset(1));
        assert_eq2!(it.utf16_offset_at(char_index(2)).unwrap(), utf16_offset(8));
        assert_eq2!(it.utf16_offset_at(char_index(3)).unwrap(), utf16_offset(9));
        assert!(it.utf16_offset_at(char_index(4)).is_err());
    }

    #[test_case(0, 0 => (0, 0) ; "caret at start")]
    #[test_case(1, 7 => (1, 1) ; "exactly the emoji")]
    #[test_case(8, 1 => (2, 1) ; "after the emoji")]
    #[test_case(3, 0 => (1, 0) ; "caret inside the emoji rounds down")]
    #[test_case(2, 2 => (1, 1) ; "range inside the emoji widens to all of it")]
    #[test_case(0, 9 => (0, 3) ; "everything")]
    fn range_from_utf16_range(location: usize, length: usize) -> (usize, usize) {
        let it = emoji_separator()
            .range_from_utf16_range(Utf16Range::new(location, length))
            .unwrap();
        (it.location.as_usize(), it.length)
    }

    #[test]
    fn range_from_utf16_range_out_of_bounds() {
        let result = emoji_separator().range_from_utf16_range(Utf16Range::new(8, 2));
        assert!(matches!(
            result,
            Err(MaskedTextError::OutOfBounds {
                space: CoordinateSpace::Utf16,
                start: 8,
                end: 10,
                len: 9
            })
        ));
    }

    #[test]
    fn utf16_range_round_trip() {
        let it = emoji_separator();
        for start in 0..=it.len() {
            for end in start..=it.len() {
                let range = DecoratedRange::new(start, end - start);
                let utf16 = it.utf16_range_from_range(range).unwrap();
                assert_eq2!(it.range_from_utf16_range(utf16).unwrap(), range);
            }
        }
    }

    #[test_case(0, 1 => (0, 0) ; "prefix only")]
    #[test_case(0, 2 => (0, 1) ; "prefix and first digit")]
    #[test_case(2, 1 => (1, 0) ; "suffix only")]
    #[test_case(1, 5 => (0, 4) ; "all digits")]
    #[test_case(6, 0 => (4, 0) ; "caret at end")]
    fn significant_range(location: usize, length: usize) -> (usize, usize) {
        let it = phone_prefix()
            .significant_range(DecoratedRange::new(location, length))
            .unwrap();
        (it.location.as_usize(), it.length)
    }

    #[test_case(0, 1 => (1, 1) ; "first digit")]
    #[test_case(0, 2 => (1, 3) ; "spans the suffix")]
    #[test_case(1, 0 => (3, 0) ; "caret skips the suffix")]
    #[test_case(4, 0 => (6, 0) ; "caret at end")]
    fn decorated_range(location: usize, length: usize) -> (usize, usize) {
        let it = phone_prefix()
            .decorated_range(SignificantRange::new(location, length))
            .unwrap();
        (it.location.as_usize(), it.length)
    }

    #[test]
    fn significant_and_decorated_range_out_of_bounds() {
        let it = phone_prefix();
        assert!(it.significant_range(DecoratedRange::new(5, 2)).is_err());
        assert!(it.decorated_range(SignificantRange::new(3, 2)).is_err());
    }

    #[test]
    fn range_translation_covers_same_significant_span() {
        let it = phone_prefix();
        for start in 0..=it.len() {
            for end in start..=it.len() {
                let range = DecoratedRange::new(start, end - start);
                let significant = it.significant_range(range).unwrap();
                let back = it.decorated_range(significant).unwrap();
                assert_eq2!(it.significant_range(back).unwrap(), significant);
                assert_eq2!(
                    it.significant_substring(back).unwrap(),
                    it.significant_substring(range).unwrap()
                );
            }
        }
    }

    #[test]
    fn nearest_significant_neighbours() {
        let it = phone_prefix();
        assert_eq2!(it.index_of_first_significant_to_the_left_from(char_index(0)), None);
        assert_eq2!(it.index_of_first_significant_to_the_left_from(char_index(1)), None);
        assert_eq2!(
            it.index_of_first_significant_to_the_left_from(char_index(3)),
            Some(char_index(1))
        );
        assert_eq2!(
            it.index_of_first_significant_to_the_right_from(char_index(0)),
            Some(char_index(1))
        );
        assert_eq2!(
            it.index_of_first_significant_to_the_right_from(char_index(2)),
            Some(char_index(3))
        );
        assert_eq2!(it.index_of_first_significant_to_the_right_from(char_index(6)), None);
    }

    #[test]
    fn index_from_significant_offset_skips_decoration() {
        let it = phone_prefix();
        assert_eq2!(it.index_from_significant_offset(sig_index(0)), char_index(1));
        assert_eq2!(it.index_from_significant_offset(sig_index(1)), char_index(3));
        assert_eq2!(it.index_from_significant_offset(sig_index(4)), char_index(6));
        assert_eq2!(it.index_from_significant_offset(sig_index(9)), char_index(6));
    }

    #[test]
    fn significant_substring_drops_decoration() {
        let it = phone_prefix();
        assert_eq2!(it.significant_substring(DecoratedRange::new(0, 6)).unwrap(), "7900");
        assert_eq2!(it.significant_substring(DecoratedRange::new(2, 1)).unwrap(), "");
    }

    #[test_case(0 => 1 ; "prefix pushes forward")]
    #[test_case(1 => 1 ; "before a digit stays")]
    #[test_case(3 => 2 ; "after a suffix pulls back")]
    #[test_case(4 => 4 ; "between digits stays")]
    #[test_case(9 => 6 ; "past the end clamps")]
    fn snap_caret(index: usize) -> usize { phone_prefix().snap_caret(char_index(index)).as_usize() }

    #[test]
    fn snap_caret_on_decoration_only_text() {
        let prefix_only = DecoratedString::from_auxiliary("+", CaretGravity::TowardEnd);
        assert_eq2!(prefix_only.snap_caret(char_index(0)), char_index(1));

        let suffix_only = DecoratedString::from_auxiliary(" руб.", CaretGravity::TowardStart);
        assert_eq2!(suffix_only.snap_caret(char_index(5)), char_index(0));
    }

    #[test_case(usize::MAX, 1          ; "end overflows")]
    #[test_case(1, usize::MAX          ; "length overflows")]
    #[test_case(usize::MAX, usize::MAX ; "both huge")]
    #[test_case(usize::MAX, 0          ; "caret far past the end")]
    fn overflowing_ranges_are_out_of_bounds(location: usize, length: usize) {
        let it = phone_prefix();
        assert!(matches!(
            it.range_from_utf16_range(Utf16Range::new(location, length)),
            Err(MaskedTextError::OutOfBounds { space: CoordinateSpace::Utf16, .. })
        ));
        assert!(matches!(
            it.significant_range(DecoratedRange::new(location, length)),
            Err(MaskedTextError::OutOfBounds { space: CoordinateSpace::Decorated, .. })
        ));
        assert!(matches!(
            it.decorated_range(SignificantRange::new(location, length)),
            Err(MaskedTextError::OutOfBounds { space: CoordinateSpace::Significant, .. })
        ));
    }

    #[test]
    fn overflowing_range_reports_a_saturated_end() {
        let it = phone_prefix();
        let error = it
            .significant_substring(DecoratedRange::new(usize::MAX, 1))
            .unwrap_err();
        assert_eq2!(
            error.to_string(),
            format!(
                "📏 Range {max}..{max} is out of bounds, the text is 6 decorated characters long",
                max = usize::MAX
            )
        );
    }
}
