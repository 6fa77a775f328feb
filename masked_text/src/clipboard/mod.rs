// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The engine only ever produces "text to be copied" and consumes "text to be
//! inserted". Talking to an actual clipboard is the job of a [`ClipboardService`]
//! that the host supplies.

// Attach sources.
pub mod clipboard_service;
pub mod clipboard_support;

// Re-export.
pub use clipboard_service::*;
pub use clipboard_support::*;
