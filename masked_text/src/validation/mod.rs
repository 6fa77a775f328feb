// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Validators accept or reject a candidate logical value, before it replaces the
//! current one. They run on every edit, including single keystrokes, but never on
//! [`crate::MaskedTextField::set_logical_value`].

// Attach sources.
pub mod predefined_validators;
pub mod string_change;
pub mod string_validation;

// Re-export.
pub use predefined_validators::*;
pub use string_change::*;
pub use string_validation::*;
