//! Error types for wintitle-session.

use thiserror::Error;

use wintitle_core::error::SettingsError;

/// All errors that can arise from session operations.
///
/// Rendering itself never fails; only loading and saving settings can.
#[derive(Debug, Error)]
pub enum SessionError {
    /// An error from the settings store.
    #[error("settings error: {0}")]
    Settings(#[from] SettingsError),
}
