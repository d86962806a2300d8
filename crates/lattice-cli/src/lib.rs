//! Diagnostics for the lattice converter: one-shot conversion and replay of
//! edit sequences through a composing session.

pub mod commands;
pub mod trace_init;

use lattice_core::dict::DictError;
use lattice_core::settings::SettingsError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("error opening lexicon: {0}")]
    Lexicon(DictError),

    #[error("error opening connection matrix: {0}")]
    Matrix(DictError),

    #[error("error reading settings: {0}")]
    SettingsIo(#[from] std::io::Error),

    #[error("invalid settings: {0}")]
    Settings(#[from] SettingsError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
