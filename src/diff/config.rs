//! Validated comparison configuration

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use super::options::{DiffOptions, DriverFlags, OptionParser};
use crate::common::{Result, ValidationError, ValidationErrors};

/// A coherent comparison scenario
///
/// Only produced by [`Config::validate`], so the required paths are always
/// present and at least one of base/diff is set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    base: Option<PathBuf>,
    diff: Option<PathBuf>,
    output: PathBuf,
    tag: Option<String>,
    core_root: PathBuf,
    test_root: PathBuf,
}

impl Config {
    /// Check every rule and report all violations at once
    pub fn validate(options: DiffOptions) -> std::result::Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        if options.core_root.is_none() {
            errors.push(ValidationError::MissingCoreRoot);
        }
        if options.test_root.is_none() {
            errors.push(ValidationError::MissingTestRoot);
        }
        if options.output.is_none() {
            errors.push(ValidationError::MissingOutput);
        }
        if options.base.is_none() && options.diff.is_none() {
            errors.push(ValidationError::MissingExecutable);
        }

        match (options.core_root, options.test_root, options.output) {
            (Some(core_root), Some(test_root), Some(output)) if errors.is_empty() => Ok(Self {
                base: options.base,
                diff: options.diff,
                output,
                tag: options.tag,
                core_root,
                test_root,
            }),
            _ => Err(errors),
        }
    }

    pub fn base(&self) -> Option<&Path> {
        self.base.as_deref()
    }

    pub fn diff(&self) -> Option<&Path> {
        self.diff.as_deref()
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    /// Root holding the framework assemblies (the platform path)
    pub fn core_root(&self) -> &Path {
        &self.core_root
    }

    pub fn test_root(&self) -> &Path {
        &self.test_root
    }
}

/// Parses a command line and validates it into a [`Config`]
pub struct ConfigBuilder<'p, P: ?Sized> {
    parser: &'p P,
}

impl<'p, P: OptionParser + ?Sized> ConfigBuilder<'p, P> {
    pub fn new(parser: &'p P) -> Self {
        Self { parser }
    }

    /// Build the configuration along with the driver flags from the same line
    ///
    /// Parse errors come back as `Error::Usage`; rule violations as
    /// `Error::Validation` carrying every violated rule.
    pub fn build(&self, args: &[OsString]) -> Result<(Config, DriverFlags)> {
        let raw = self.parser.parse(args)?;
        let config = Config::validate(raw.options)?;
        Ok((config, raw.flags))
    }
}
