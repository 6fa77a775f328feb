// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Typed coordinates. A position in a [`crate::DecoratedString`] can be counted in
//! UTF-16 code units, in decorated characters, or in significant characters only. Each
//! gets its own newtype so that the compiler catches an offset used in the wrong space.

// Attach sources.
pub mod index_types;
pub mod span;

// Re-export.
pub use index_types::*;
pub use span::*;
