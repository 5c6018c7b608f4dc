//! Application error type.

use std::io;

use thiserror::Error;

use crate::settings::SettingsError;

/// Anything that can stop the application.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Data(#[from] triage_lib::Error),
    #[error("settings error: {0}")]
    Settings(#[from] SettingsError),
    #[error("failed to initialize logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}
