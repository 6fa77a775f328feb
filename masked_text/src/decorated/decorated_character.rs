// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Debug, Formatter};

use strum_macros::Display;

use crate::GraphemeString;

/// Which way a caret that lands next to an auxiliary character gets nudged to reach the
/// nearest significant character.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Display)]
pub enum CaretGravity {
    /// Move back, toward the significant character this decoration follows. Suffixes
    /// use this.
    #[default]
    TowardStart,
    /// Move forward, toward the significant character this decoration precedes. Prefixes
    /// use this.
    TowardEnd,
}

/// One grapheme cluster of a [`crate::DecoratedString`], tagged as either logical
/// content (`significant`) or decoration.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct DecoratedCharacter {
    pub character: GraphemeString,
    pub significant: bool,
    pub caret_gravity: CaretGravity,
}

impl DecoratedCharacter {
    #[must_use]
    pub fn significant(character: &str) -> Self {
        Self {
            character: character.into(),
            significant: true,
            caret_gravity: CaretGravity::TowardStart,
        }
    }

    #[must_use]
    pub fn auxiliary(character: &str, caret_gravity: CaretGravity) -> Self {
        Self {
            character: character.into(),
            significant: false,
            caret_gravity,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str { self.character.as_str() }
}

impl Debug for DecoratedCharacter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.significant {
            write!(f, "{:?}", self.as_str())
        } else {
            write!(f, "[{:?} {}]", self.as_str(), self.caret_gravity)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn debug_marks_auxiliary() {
        let sig = DecoratedCharacter::significant("7");
        let aux = DecoratedCharacter::auxiliary("-", CaretGravity::TowardStart);
        assert_eq2!(format!("{sig:?}"), "\"7\"");
        assert_eq2!(format!("{aux:?}"), "[\"-\" TowardStart]");
    }
}
