// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use tracing::dispatcher::DefaultGuard;

use super::TracingConfig;

/// Global subscriber, for the whole process. Call this once, early in `main`.
///
/// Logging is **DISABLED** by **default**. If the level filter is
/// [`tracing_core::LevelFilter::OFF`] then this does nothing.
///
/// # Errors
///
/// Returns an error if the log file can't be created, or if a global subscriber has
/// already been installed.
pub fn try_initialize_logging_global(
    options: impl Into<TracingConfig>,
) -> miette::Result<()> {
    let it: TracingConfig = options.into();

    // Early return if the level filter is off.
    if matches!(it.get_level_filter(), tracing_core::LevelFilter::OFF) {
        return crate::ok!();
    }

    it.install_global()
}

/// Thread local subscriber, which lasts until the returned guard is dropped. This is
/// great for tests, since each test thread can log to its own place.
///
/// Returns `None` when the level filter is [`tracing_core::LevelFilter::OFF`].
///
/// # Errors
///
/// Returns an error if the log file can't be created.
pub fn try_initialize_logging_thread_local(
    options: impl Into<TracingConfig>,
) -> miette::Result<Option<DefaultGuard>> {
    let it: TracingConfig = options.into();

    // Early return if the level filter is off.
    if matches!(it.get_level_filter(), tracing_core::LevelFilter::OFF) {
        return Ok(None);
    }

    it.install_thread_local().map(Some)
}

#[cfg(test)]
mod tests {
    use tracing_core::LevelFilter;

    use super::*;

    #[test]
    fn off_does_not_install() {
        let guard = try_initialize_logging_thread_local(LevelFilter::OFF).unwrap();
        assert!(guard.is_none());
        assert!(try_initialize_logging_global(TracingConfig::default()).is_ok());
    }

    #[test]
    fn thread_local_installs() {
        let guard = try_initialize_logging_thread_local(LevelFilter::DEBUG).unwrap();
        assert!(guard.is_some());
    }
}
