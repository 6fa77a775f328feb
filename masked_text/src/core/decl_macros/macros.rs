// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// A wrapper for `pretty_assertions::assert_eq!` macro.
#[macro_export]
macro_rules! assert_eq2 {
    ($($params:tt)*) => {
        pretty_assertions::assert_eq!($($params)*)
    };
}

/// Simple macro to create a [`Result`] with an [`Ok`] variant. It is just syntactic sugar
/// that helps having to write `Ok(())`.
/// - If no arg is passed in then it will return `Ok(())`.
/// - If an arg is passed in then it will return `Ok($arg)`.
#[macro_export]
macro_rules! ok {
    // No args.
    () => {
        Ok(())
    };
    // With arg.
    ($value:expr) => {
        Ok($value)
    };
}

/// Generates a `usize` backed index newtype, along with its constructor function, and
/// the [`crate::TextIndex`] impl that lets it be used inside a [`crate::Span`].
///
/// ```ignore
/// define_text_index!(
///     /// Docs for the type.
///     CharIndex, char_index
/// );
/// ```
#[macro_export]
macro_rules! define_text_index {
    (
        $(#[$meta:meta])*
        $name:ident, $ctor:ident
    ) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(pub usize);

        #[must_use]
        pub fn $ctor(arg: impl Into<$name>) -> $name { arg.into() }

        impl $name {
            #[must_use]
            pub fn as_usize(&self) -> usize { self.0 }
        }

        impl std::ops::Deref for $name {
            type Target = usize;
            fn deref(&self) -> &Self::Target { &self.0 }
        }

        impl From<usize> for $name {
            fn from(it: usize) -> Self { Self(it) }
        }

        /// Hosts that report offsets as signed integers must convert explicitly, so a
        /// negative offset is an error instead of a position.
        impl TryFrom<i32> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(it: i32) -> Result<Self, Self::Error> { usize::try_from(it).map(Self) }
        }

        impl From<$name> for usize {
            fn from(it: $name) -> Self { it.0 }
        }

        impl std::ops::Add<usize> for $name {
            type Output = $name;
            fn add(self, rhs: usize) -> Self::Output { Self(self.0 + rhs) }
        }

        impl std::fmt::Debug for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}({})", stringify!($ctor), self.0)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl $crate::TextIndex for $name {
            fn as_usize(&self) -> usize { self.0 }
        }
    };
}
