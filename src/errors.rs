use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while configuring or driving the matrix
#[derive(Error, Debug)]
pub enum DisplayError {
    /// Error related to IO operations (terminal setup, drawing)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A flag or config value is outside its accepted range
    #[error("Invalid value for --{flag}: {message}")]
    InvalidOption { flag: &'static str, message: String },

    /// Error when reading the config file
    #[error("Failed to read config {path}: {message}")]
    ConfigRead { path: PathBuf, message: String },

    /// Error when the config file is not valid TOML for our options
    #[error("Invalid config {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    /// Error when a color string cannot be parsed
    #[error("Invalid color '{0}': expected R,G,B or #RRGGBB")]
    InvalidColor(String),

    /// Error when the matrix driver fails to come up
    #[error("Matrix initialization failed: {0}")]
    MatrixInit(String),

    /// Error when the interrupt handler cannot be installed
    #[error("Signal handler error: {0}")]
    Signal(String),
}

/// Type alias for Result with `DisplayError`
pub type Result<T> = std::result::Result<T, DisplayError>;
