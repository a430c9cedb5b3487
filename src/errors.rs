// SPDX-License-Identifier: MPL-2.0

//! Error types for the darkroom application

use std::fmt;

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;

/// Main application error type
#[derive(Debug, Clone)]
pub enum AppError {
    /// Rendering errors from the filter engine
    Render(RenderError),
    /// Source image loading errors
    Load(LoadError),
    /// Configuration errors
    Config(String),
    /// Storage/filesystem errors
    Storage(String),
    /// Generic error with message
    Other(String),
}

/// Filter engine errors
#[derive(Debug, Clone)]
pub enum RenderError {
    /// The engine produced no output image
    NoOutput,
    /// The output could not be materialized into a displayable bitmap
    Materialize(String),
}

/// Source image loading errors
#[derive(Debug, Clone)]
pub enum LoadError {
    /// The picker returned no selection
    NoSelection,
    /// The data could not be decoded into an image
    Decode(String),
    /// The file could not be read
    Io(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Render(e) => write!(f, "Render error: {}", e),
            AppError::Load(e) => write!(f, "Load error: {}", e),
            AppError::Config(msg) => write!(f, "Configuration error: {}", msg),
            AppError::Storage(msg) => write!(f, "Storage error: {}", msg),
            AppError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::NoOutput => write!(f, "Engine produced no output"),
            RenderError::Materialize(msg) => write!(f, "Could not materialize output: {}", msg),
        }
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::NoSelection => write!(f, "No photo selected"),
            LoadError::Decode(msg) => write!(f, "Could not decode image: {}", msg),
            LoadError::Io(msg) => write!(f, "Could not read file: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}
impl std::error::Error for RenderError {}
impl std::error::Error for LoadError {}

// Conversions from sub-errors to AppError
impl From<RenderError> for AppError {
    fn from(err: RenderError) -> Self {
        AppError::Render(err)
    }
}

impl From<LoadError> for AppError {
    fn from(err: LoadError) -> Self {
        AppError::Load(err)
    }
}

// Conversion from String for backward compatibility
impl From<String> for AppError {
    fn from(msg: String) -> Self {
        AppError::Other(msg)
    }
}

impl From<&str> for AppError {
    fn from(msg: &str) -> Self {
        AppError::Other(msg.to_string())
    }
}

// Conversions for I/O errors
impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Storage(err.to_string())
    }
}

impl From<std::io::Error> for LoadError {
    fn from(err: std::io::Error) -> Self {
        LoadError::Io(err.to_string())
    }
}
