// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::{Debug, Formatter},
          ops::Range};

use super::{CharIndex, SigIndex, TextIndex, Utf16Offset};

/// Half open range `[location, location + length)` in one coordinate space. The index
/// type `I` decides which space that is, see the aliases below.
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Span<I> {
    pub location: I,
    pub length: usize,
}

/// Range in UTF-16 code units, as reported by the host widget.
pub type Utf16Range = Span<Utf16Offset>;

/// Range over every character of a [`crate::DecoratedString`].
pub type DecoratedRange = Span<CharIndex>;

/// Range over the significant characters only, ie: over the logical value.
pub type SignificantRange = Span<SigIndex>;

mod span_impl_block {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl<I: TextIndex> Span<I> {
        pub fn new(location: impl Into<I>, length: usize) -> Self {
            Self {
                location: location.into(),
                length,
            }
        }

        /// Zero length range, ie: a caret sitting at `location`.
        pub fn caret(location: impl Into<I>) -> Self { Self::new(location, 0) }

        /// Range between two positions. The bounds may be given in any order.
        pub fn between(a: I, b: I) -> Self {
            let (start, end) = if a <= b { (a, b) } else { (b, a) };
            Self::new(start, end.as_usize() - start.as_usize())
        }

        /// One past the last position covered by this range. Saturates at `usize::MAX`,
        /// which is past the end of any text, so an overflowing range still fails every
        /// bounds check. See [`Self::checked_end`].
        #[must_use]
        pub fn end(&self) -> I { I::from(self.location.as_usize().saturating_add(self.length)) }

        /// `None` when `location + length` overflows.
        #[must_use]
        pub fn checked_end(&self) -> Option<I> {
            self.location.as_usize().checked_add(self.length).map(I::from)
        }

        #[must_use]
        pub fn is_caret(&self) -> bool { self.length == 0 }

        #[must_use]
        pub fn as_usize_range(&self) -> Range<usize> {
            self.location.as_usize()..self.end().as_usize()
        }
    }

    impl<I: TextIndex> From<Range<usize>> for Span<I> {
        fn from(range: Range<usize>) -> Self {
            Self::new(range.start, range.end.saturating_sub(range.start))
        }
    }

    impl<I: Debug> Debug for Span<I> {
        fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
            write!(f, "[{:?}, len: {})", self.location, self.length)
        }
    }
}
