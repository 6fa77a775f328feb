// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Logging is **DISABLED** by **default**. The engine emits [`tracing`] events, and
//! nothing is printed until a subscriber is installed. Use [`try_initialize_logging_global`]
//! for apps, or [`try_initialize_logging_thread_local`] for tests.

// Attach sources.
pub mod log_public_api;
pub mod rolling_file_appender_impl;
pub mod tracing_config;
pub mod tracing_init;

// Re-export.
pub use log_public_api::*;
pub use tracing_config::*;
pub use tracing_init::*;
