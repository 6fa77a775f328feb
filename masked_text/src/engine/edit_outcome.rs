// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use strum_macros::Display;

use crate::{DecoratedString, Utf16Offset};

/// What happened to a proposed edit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EditOutcome {
    /// The logical value changed. The host should render `decorated_value` and put the
    /// caret at `caret`.
    Applied {
        decorated_value: String,
        caret: Utf16Offset,
    },
    /// The edit only touched decoration, so the text is unchanged, but the caret moves.
    CaretMoved { caret: Utf16Offset },
    /// The validator said no. Nothing changes, and the host must not show the
    /// keystroke.
    Rejected,
}

impl EditOutcome {
    #[must_use]
    pub fn is_applied(&self) -> bool { matches!(self, Self::Applied { .. }) }

    #[must_use]
    pub fn is_rejected(&self) -> bool { matches!(self, Self::Rejected) }

    #[must_use]
    pub fn caret(&self) -> Option<Utf16Offset> {
        match self {
            Self::Applied { caret, .. } | Self::CaretMoved { caret } => Some(*caret),
            Self::Rejected => None,
        }
    }

    #[must_use]
    pub fn decorated_value(&self) -> Option<&str> {
        match self {
            Self::Applied {
                decorated_value, ..
            } => Some(decorated_value),
            Self::CaretMoved { .. } | Self::Rejected => None,
        }
    }
}

/// The engine's output. `decorated` holds the new text when the outcome is
/// [`EditOutcome::Applied`], and is `None` otherwise.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditPlan {
    pub outcome: EditOutcome,
    pub decorated: Option<DecoratedString>,
}

impl EditPlan {
    #[must_use]
    pub fn applied(decorated: DecoratedString, caret: Utf16Offset) -> Self {
        Self {
            outcome: EditOutcome::Applied {
                decorated_value: decorated.value().to_string(),
                caret,
            },
            decorated: Some(decorated),
        }
    }

    #[must_use]
    pub fn caret_moved(caret: Utf16Offset) -> Self {
        Self {
            outcome: EditOutcome::CaretMoved { caret },
            decorated: None,
        }
    }

    #[must_use]
    pub fn rejected() -> Self {
        Self {
            outcome: EditOutcome::Rejected,
            decorated: None,
        }
    }
}

/// Phases of one edit, used to label debug logs. Every edit starts and ends in
/// [`EditPhase::Idle`], and may return there early from any phase without changing
/// anything.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Display)]
pub enum EditPhase {
    Idle,
    Correcting,
    Translating,
    Sanitizing,
    Validating,
    Applying,
    Redecorating,
    PositioningCaret,
}

/// The transformation and check stages that wrap the core decorate and caret
/// algorithm. See [`crate::EDIT_PIPELINE`] for their order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Display)]
pub enum PipelineStage {
    Sanitize,
    Validate,
}

impl From<PipelineStage> for EditPhase {
    fn from(stage: PipelineStage) -> Self {
        match stage {
            PipelineStage::Sanitize => EditPhase::Sanitizing,
            PipelineStage::Validate => EditPhase::Validating,
        }
    }
}
