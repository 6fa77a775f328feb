// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Decorators for rules that a prefix + suffixes template can't express.

use crate::{CaretGravity, DecoratedCharacter, DecoratedString, build_segments_for_str};

/// `HH:MM` style time of day. The `:` only shows up once a third digit is typed, so that
/// `12` reads as `12` and not `12:`.
#[must_use]
pub fn decorate_time_of_day(logical: &str) -> DecoratedString {
    let segments = build_segments_for_str(logical);
    let show_separator = segments.len() > 2;

    let mut characters = Vec::with_capacity(segments.len() + 1);
    for (index, seg) in segments.iter().enumerate() {
        if index == 2 && show_separator {
            characters.push(DecoratedCharacter::auxiliary(":", CaretGravity::TowardStart));
        }
        characters.push(DecoratedCharacter::significant(seg.get_str(logical)));
    }

    DecoratedString::new(characters)
}

/// Splits the logical value into groups of `group_size` characters separated by
/// `separator`, eg: a card number `4242 4242 4242 4242`. The separator goes between
/// groups only, never at the end.
#[must_use]
pub fn decorate_grouped(logical: &str, group_size: usize, separator: &str) -> DecoratedString {
    let segments = build_segments_for_str(logical);
    let mut characters = Vec::with_capacity(segments.len() * 2);

    for (index, seg) in segments.iter().enumerate() {
        if group_size > 0 && index > 0 && index.is_multiple_of(group_size) {
            characters.extend(build_segments_for_str(separator).iter().map(|sep| {
                DecoratedCharacter::auxiliary(sep.get_str(separator), CaretGravity::TowardStart)
            }));
        }
        characters.push(DecoratedCharacter::significant(seg.get_str(logical)));
    }

    DecoratedString::new(characters)
}
