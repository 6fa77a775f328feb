// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # Masked text fields
//!
//! This crate keeps a user's **logical input** (the characters a person actually typed,
//! eg: the digits of a phone number) and a **decorated display form** (the same
//! characters interleaved with formatting, eg: `+7 900 816-04-28`) in sync across every
//! edit.
//!
//! # Table of contents
//!
//! <!-- TOC -->
//! - [Two strings, three coordinate systems](#two-strings-three-coordinate-systems)
//! - [The edit pipeline](#the-edit-pipeline)
//! - [Plugging into a host widget](#plugging-into-a-host-widget)
//! - [Logging](#logging)
//! <!-- /TOC -->
//!
//! # Two strings, three coordinate systems
//!
//! A [`DecoratedString`] is a sequence of [`DecoratedCharacter`]s. Each one is a single
//! grapheme cluster plus a flag that says whether it is logical content (significant)
//! or formatting (auxiliary). Positions in it can be expressed three ways, and each has
//! its own newtype so they can't be mixed up:
//!
//! | Type            | Counts                                         |
//! | --------------- | ---------------------------------------------- |
//! | [`Utf16Offset`] | UTF-16 code units, which is what hosts address |
//! | [`CharIndex`]   | every decorated character                      |
//! | [`SigIndex`]    | significant characters only                    |
//!
//! Ranges over each of these are [`Utf16Range`], [`DecoratedRange`] and
//! [`SignificantRange`], all aliases of [`Span`].
//!
//! # The edit pipeline
//!
//! [`MaskedTextField::propose_edit`] runs the [`ReplacementEngine`]:
//!
//! 1. [`IntentCorrector`] widens a caret backspace over auxiliary characters so that it
//!    deletes the logical character the user meant.
//! 2. The corrected range is translated to a [`SignificantRange`].
//! 3. Edits that touch only auxiliary characters just move the caret.
//! 4. The [`PipelineStage`]s run in order: [`StringSanitization`] (pasted text only),
//!    then [`StringValidation`].
//! 5. The new logical value is re-decorated through the [`StringDecoration`], and the
//!    caret lands on the first significant character after the inserted text.
//!
//! The result is an [`EditOutcome`]. Nothing is mutated unless the whole pipeline
//! succeeds.
//!
//! # Plugging into a host widget
//!
//! Implement [`TextFieldHost`] for your widget, and forward its "should change
//! characters" callback to [`handle_should_change`]. Clipboard access goes through the
//! [`ClipboardService`] trait, see [`copy_to_clipboard`], [`cut_to_clipboard`] and
//! [`paste_from_clipboard`].
//!
//! # Logging
//!
//! The engine emits [`tracing`] events. Use [`TracingConfig`] with
//! [`try_initialize_logging_global`] or [`try_initialize_logging_thread_local`] to see
//! them.

// Enforce strict error handling in production library code only. Tests are allowed to
// use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach modules (re-exported below to provide clean public API).
pub mod clipboard;
pub mod core;
pub mod decorated;
pub mod decoration;
pub mod engine;
pub mod field;
pub mod sanitization;
pub mod validation;

// Re-export.
pub use clipboard::*;
pub use core::*;
pub use decorated::*;
pub use decoration::*;
pub use engine::*;
pub use field::*;
pub use sanitization::*;
pub use validation::*;
