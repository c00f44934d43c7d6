use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError
{
    #[error("Terminal error: {0}")]
    Terminal(#[from] io::Error),

    #[error("Unknown language '{0}'. Supported: fr, en, vi, es, ko, hi, it, zh, ar.")]
    UnknownLanguage(String),

    #[error("Unsupported pair count '{0}'. Choose 4, 6 or 8.")]
    UnsupportedPairs(String),

    #[error("Unknown game '{0}'. Run with --help.")]
    UnknownGame(String),

    #[error("Invalid selection.")]
    InvalidSelection,
}
