// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # Grapheme clusters and UTF-16 code units
//!
//! A "character" in this crate is an extended grapheme cluster: what a person perceives
//! as one character. `🙏🏽` is two [`char`]s and four UTF-16 code units, but it is one
//! grapheme cluster, so it is one [`crate::DecoratedCharacter`]. Deleting "one
//! character" must never split it.
//!
//! Host widgets address text in UTF-16 code units, so each [`Seg`] records where its
//! cluster starts in UTF-8 bytes (to slice the Rust string) and in UTF-16 code units (to
//! talk to the host).

// Attach sources.
pub mod seg;
pub mod segment_builder;

// Re-export.
pub use seg::*;
pub use segment_builder::*;
