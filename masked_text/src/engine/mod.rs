// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # The edit pipeline
//!
//! ```text
//! RawReplacement (UTF-16, as reported by the host)
//!   │ IntentCorrector
//!   ▼
//! DecoratedReplacement
//!   │ DecoratedString::significant_range
//!   ▼
//! SignificantReplacement ──(empty)──▶ EditOutcome::CaretMoved
//!   │ PipelineStage::Sanitize (pasted text only)
//!   │ PipelineStage::Validate ──(rejected)──▶ EditOutcome::Rejected
//!   ▼
//! new logical value ─▶ StringDecoration::decorate ─▶ caret ─▶ EditOutcome::Applied
//! ```
//!
//! The [`ReplacementEngine`] never mutates anything. It returns an [`EditPlan`] which
//! the field commits in one assignment, so a failed or rejected edit leaves no trace.

// Attach sources.
pub mod edit_outcome;
pub mod engine_config;
pub mod intent_corrector;
pub mod replacement_engine;
pub mod replacement_operation;

// Re-export.
pub use edit_outcome::*;
pub use engine_config::*;
pub use intent_corrector::*;
pub use replacement_engine::*;
pub use replacement_operation::*;
