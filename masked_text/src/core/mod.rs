// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Plumbing shared by every other module: typed coordinates, grapheme segmentation,
//! errors, logging, and small helper macros.

// Attach sources.
pub mod decl_macros;
pub mod error;
pub mod global_constants;
pub mod graphemes;
pub mod log;
pub mod stack_alloc_types;
pub mod units;

// Re-export.
pub use error::*;
pub use global_constants::*;
pub use graphemes::*;
pub use log::*;
pub use stack_alloc_types::*;
pub use units::*;
