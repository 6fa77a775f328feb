// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod masked_text_error;

// Re-export.
pub use masked_text_error::*;
