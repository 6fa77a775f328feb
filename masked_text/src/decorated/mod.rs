// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The dual string model. A [`DecoratedString`] is what the host widget renders, and
//! the subsequence of its significant characters is the logical value.

// Attach sources.
pub mod coordinate_translation;
pub mod decorated_character;
pub mod decorated_string;

// Re-export.
pub use decorated_character::*;
pub use decorated_string::*;
