// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{DEBUG_MASKED_TEXT_ENGINE, DecoratedString, EditPhase, EditPlan,
            EditSource, IntentCorrector, MaskedTextFieldConfig, MaskedTextResult,
            PipelineStage, RawReplacement, SignificantRange, SignificantReplacement,
            StringChange, Utf16Range, grapheme_count, sig_index};

/// Stages run, in order, between translating an edit to significant coordinates and
/// building the new logical value. Sanitizing first means the validator sees the text
/// that would actually be inserted.
pub const EDIT_PIPELINE: [PipelineStage; 2] = [PipelineStage::Sanitize, PipelineStage::Validate];

/// Plans edits against a [`DecoratedString`], using the decoration, sanitization and
/// validation of a [`MaskedTextFieldConfig`]. Planning is pure. The caller decides
/// whether to commit the resulting [`EditPlan`].
#[derive(Debug, Clone, Copy)]
pub struct ReplacementEngine<'a> {
    config: &'a MaskedTextFieldConfig,
}

impl<'a> ReplacementEngine<'a> {
    #[must_use]
    pub fn new(config: &'a MaskedTextFieldConfig) -> Self { Self { config } }

    /// Runs one edit through the pipeline.
    ///
    /// 1. Correct the host range for user intent, see [`IntentCorrector`].
    /// 2. Translate it to significant coordinates. If nothing significant is touched
    ///    and nothing is inserted, the edit is a no-op that only moves the caret.
    /// 3. Run [`EDIT_PIPELINE`]. Sanitization applies to [`EditSource::External`] text
    ///    only. A failed validation rejects the edit.
    /// 4. Splice the replacement into the logical value and decorate the result.
    /// 5. Place the caret after the inserted text, skipping any decoration that
    ///    follows it.
    ///
    /// # Errors
    ///
    /// [`crate::MaskedTextError::OutOfBounds`] if `raw` does not fit in `current`.
    pub fn plan_edit(
        &self,
        current: &DecoratedString,
        selection: Option<Utf16Range>,
        raw: &RawReplacement,
        source: EditSource,
    ) -> MaskedTextResult<EditPlan> {
        log_phase(EditPhase::Correcting, current, &raw.replacement_text);
        let corrected = IntentCorrector::new(current).correct(raw, selection)?;

        log_phase(EditPhase::Translating, current, &corrected.replacement_text);
        let significant_range = current.significant_range(corrected.range_to_replace)?;
        let mut operation =
            SignificantReplacement::new(significant_range, corrected.replacement_text);

        if operation.is_empty() {
            return Ok(no_op_plan(selection, raw));
        }

        let mut new_logical_value = None;
        for stage in EDIT_PIPELINE {
            log_phase(stage.into(), current, &operation.replacement_text);
            match stage {
                PipelineStage::Sanitize => {
                    if source == EditSource::External {
                        operation.replacement_text =
                            self.config.sanitization.sanitize(&operation.replacement_text);
                    }
                    // Pasted text that sanitized away to nothing, at a caret.
                    if operation.is_empty() {
                        return Ok(no_op_plan(selection, raw));
                    }
                }
                PipelineStage::Validate => {
                    let candidate = splice_significant(current, &operation);
                    let change = StringChange {
                        old_text: current.significant_value(),
                        new_text: &candidate,
                        replaced_range: operation.range_to_replace,
                        replacement_text: &operation.replacement_text,
                    };
                    if !self.config.validation.validate(&change) {
                        DEBUG_MASKED_TEXT_ENGINE.then(|| {
                            // % is Display, ? is Debug.
                            tracing::debug!(
                                message = "🚫 edit rejected by validation",
                                old_text = %change.old_text,
                                new_text = %change.new_text,
                                validation = ?self.config.validation,
                            );
                        });
                        return Ok(EditPlan::rejected());
                    }
                    new_logical_value = Some(candidate);
                }
            }
        }

        log_phase(EditPhase::Applying, current, &operation.replacement_text);
        let new_logical_value =
            new_logical_value.unwrap_or_else(|| splice_significant(current, &operation));

        log_phase(EditPhase::Redecorating, current, &new_logical_value);
        let decorated = self.config.decoration.decorate(&new_logical_value);

        log_phase(EditPhase::PositioningCaret, &decorated, &operation.replacement_text);
        let caret_significant_offset = sig_index(
            operation.range_to_replace.location.as_usize()
                + grapheme_count(&operation.replacement_text),
        );
        let caret_index = decorated.index_from_significant_offset(caret_significant_offset);
        let caret = decorated.utf16_offset_at(caret_index)?;

        let plan = EditPlan::applied(decorated, caret);
        DEBUG_MASKED_TEXT_ENGINE.then(|| {
            // % is Display, ? is Debug.
            tracing::debug!(
                message = "✅ edit applied",
                phase = %EditPhase::Idle,
                outcome = ?plan.outcome,
            );
        });
        Ok(plan)
    }
}

/// An edit that changes no logical text only moves the caret, to the start of the
/// selection, or to the start of the raw edit when no selection is known.
fn no_op_plan(selection: Option<Utf16Range>, raw: &RawReplacement) -> EditPlan {
    let caret = selection.map_or(raw.range_to_replace.location, |it| it.location);
    DEBUG_MASKED_TEXT_ENGINE.then(|| {
        // % is Display, ? is Debug.
        tracing::debug!(
            message = "🫥 edit changes no logical text, moving caret",
            caret = ?caret,
        );
    });
    EditPlan::caret_moved(caret)
}

/// The logical value of `current` with `operation` applied. Works on the significant
/// characters of `current` rather than re-segmenting its logical value, so positions
/// always agree with [`DecoratedString::significant_range`].
fn splice_significant(current: &DecoratedString, operation: &SignificantReplacement) -> String {
    let SignificantRange { location, length } = operation.range_to_replace;
    let start = location.as_usize();
    let end = start + length;

    let mut acc = String::with_capacity(
        current.significant_value().len() + operation.replacement_text.len(),
    );
    for (position, character) in current
        .characters()
        .iter()
        .filter(|it| it.significant)
        .enumerate()
    {
        if position == start {
            acc.push_str(&operation.replacement_text);
        }
        if position < start || position >= end {
            acc.push_str(character.as_str());
        }
    }
    if start >= current.significant_len() {
        acc.push_str(&operation.replacement_text);
    }
    acc
}

fn log_phase(phase: EditPhase, decorated: &DecoratedString, text: &str) {
    DEBUG_MASKED_TEXT_ENGINE.then(|| {
        // % is Display, ? is Debug.
        tracing::debug!(
            message = "✏️ edit phase",
            phase = %phase,
            decorated = ?decorated,
            text = ?text,
        );
    });
}
