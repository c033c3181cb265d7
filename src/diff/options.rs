//! Raw command-line options
//!
//! Option parsing sits behind [`OptionParser`] so validation and command
//! assembly never see the parsing library.

use std::ffi::OsString;
use std::path::PathBuf;

use crate::common::Result;

/// Comparison options exactly as given, before validation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiffOptions {
    pub base: Option<PathBuf>,
    pub diff: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub tag: Option<String>,
    pub core_root: Option<PathBuf>,
    pub test_root: Option<PathBuf>,
}

/// Options that change how the driver runs, not what it compares
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DriverFlags {
    /// Settings file to load instead of the default one
    pub settings: Option<PathBuf>,
    /// Print the command line instead of launching the tool
    pub dry_run: bool,
}

/// Everything recognized on one command line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawOptions {
    pub options: DiffOptions,
    pub flags: DriverFlags,
}

/// Turns an argument vector into [`RawOptions`]
///
/// `args` includes the program name in position 0. Unrecognized options are
/// reported as [`crate::common::Error::Usage`].
pub trait OptionParser {
    fn parse(&self, args: &[OsString]) -> Result<RawOptions>;
}
