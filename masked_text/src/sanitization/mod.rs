// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Sanitizers clean up text that arrives from outside normal typing, eg: a pasted phone
//! number full of brackets and dashes.

// Attach sources.
pub mod character_set;
pub mod string_sanitization;

// Re-export.
pub use character_set::*;
pub use string_sanitization::*;
