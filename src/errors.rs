//! Unified application error type.
//! All modules (session, report, probes, cli) return AppError to keep the
//! error handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Network
    // ---------------------------
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    // ---------------------------
    // Session / report errors
    // ---------------------------
    #[error("Session is already closed")]
    SessionClosed,

    #[error("Report is sealed and can no longer be written")]
    ArtifactSealed,

    #[error("Seal error: {0}")]
    Seal(String),

    #[error("Seal verification failed: {0}")]
    SealBroken(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Interactive prompt errors
    // ---------------------------
    #[error("Prompt error: {0}")]
    Prompt(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
