// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Decorators turn a logical string into a [`crate::DecoratedString`]. They are pure:
//! the same input and configuration always produce the same output, and the
//! significant characters of the output are exactly the input.

// Attach sources.
pub mod custom_decorators;
pub mod string_decoration;
pub mod template_decorator;

// Re-export.
pub use custom_decorators::*;
pub use string_decoration::*;
pub use template_decorator::*;
