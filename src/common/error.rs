//! Error types for the corediff driver
//!
//! Every error maps to a fixed process exit status so that a failure of the
//! driver itself can be told apart from a failure reported by the comparison
//! tool.

use std::fmt;
use std::io;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Exit statuses used when the driver fails before or while launching the tool
pub mod exit_code {
    /// Bad command line: unknown option or failed validation (`EX_USAGE`)
    pub const USAGE: i32 = 64;
    /// I/O failure outside the child process (`EX_IOERR`)
    pub const IO: i32 = 74;
    /// Unreadable or malformed settings file (`EX_CONFIG`)
    pub const CONFIG: i32 = 78;
    /// Tool found but could not be executed
    pub const NOT_EXECUTABLE: i32 = 126;
    /// Tool not found on the search path
    pub const NOT_FOUND: i32 = 127;
}

/// Main error type for the corediff driver
#[derive(Error, Debug)]
pub enum Error {
    // === Command Line Errors ===
    /// Rendered help or version text; not a failure
    #[error("{0}")]
    Help(String),

    #[error("{0}")]
    Usage(String),

    #[error("Invalid options: {0}")]
    Validation(ValidationErrors),

    // === Tool Errors ===
    #[error("Comparison tool '{name}' not found. Searched: {searched}")]
    ToolNotFound { name: String, searched: String },

    #[error("Failed to launch comparison tool '{tool}': {error}")]
    ToolSpawn { tool: String, error: String },

    // === Configuration Errors ===
    #[error("Invalid settings file: {0}")]
    ConfigParse(String),

    #[error("Failed to read file '{path}': {error}")]
    FileRead { path: String, error: String },

    // === IO Errors ===
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Create a tool not found error with the directories that were searched
    pub fn tool_not_found<S: AsRef<str>>(name: &str, paths: &[S]) -> Self {
        Self::ToolNotFound {
            name: name.to_string(),
            searched: paths.iter().map(|s| s.as_ref()).collect::<Vec<_>>().join(", "),
        }
    }

    /// Process exit status to report for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Help(_) => 0,
            Error::Usage(_) | Error::Validation(_) => exit_code::USAGE,
            Error::ToolNotFound { .. } => exit_code::NOT_FOUND,
            Error::ToolSpawn { .. } => exit_code::NOT_EXECUTABLE,
            Error::ConfigParse(_) | Error::FileRead { .. } => exit_code::CONFIG,
            Error::Io(_) => exit_code::IO,
        }
    }
}

impl From<ValidationErrors> for Error {
    fn from(errors: ValidationErrors) -> Self {
        Error::Validation(errors)
    }
}

/// A single rule violated by the parsed command line
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Specify --core_root <path>")]
    MissingCoreRoot,

    #[error("Specify --test_root <path>")]
    MissingTestRoot,

    #[error("Specify --output <path>")]
    MissingOutput,

    #[error("--base <path> or --diff <path> or both must be specified.")]
    MissingExecutable,
}

/// Every rule violated by one command line, in check order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    pub fn push(&mut self, error: ValidationError) {
        self.0.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.0.iter()
    }

    pub fn contains(&self, error: ValidationError) -> bool {
        self.0.contains(&error)
    }

    /// `Ok(())` when nothing was pushed, otherwise the whole report
    pub fn into_result(self) -> std::result::Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self.0.iter().map(ToString::to_string).collect();
        f.write_str(&messages.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}
