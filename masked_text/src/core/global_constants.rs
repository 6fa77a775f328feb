// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Enable or disable debug logging for each phase of the edit pipeline in
/// [`crate::ReplacementEngine`].
pub const DEBUG_MASKED_TEXT_ENGINE: bool = true;

/// Enable or disable debug logging for copy, cut and paste.
pub const DEBUG_MASKED_TEXT_COPY_PASTE: bool = true;

/// Placeholder marker used by [`crate::TemplateDecorator::new`].
pub const DEFAULT_PLACEHOLDER: char = '_';

/// File used by [`crate::TracingConfig::new_file`] when no name is given.
pub const DEFAULT_LOG_FILE_NAME: &str = "masked_text_log_debug.log";
