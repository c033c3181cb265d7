//! Command-line option definitions
//!
//! Defines the clap arguments for the corediff driver. Nothing is marked
//! required here: missing options are reported together by validation.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::Parser;

use crate::common::{Error, Result};
use crate::diff::{DiffOptions, DriverFlags, OptionParser, RawOptions};

#[derive(Parser, Debug)]
#[command(name = "corediff", about = "Compare JIT codegen across a CoreCLR test tree")]
#[command(version, long_about = None)]
pub struct Args {
    /// The base compiler exe
    #[arg(short = 'b', long = "base", value_name = "PATH")]
    pub base: Option<PathBuf>,

    /// The diff compiler exe
    #[arg(short = 'd', long = "diff", value_name = "PATH")]
    pub diff: Option<PathBuf>,

    /// The output path
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Name of root in output directory. Allows for many sets of output
    #[arg(short = 't', long = "tag", value_name = "NAME")]
    pub tag: Option<String>,

    /// Path to test CORE_ROOT
    #[arg(long = "core_root", value_name = "PATH")]
    pub core_root: Option<PathBuf>,

    /// Path to test tree
    #[arg(long = "test_root", value_name = "PATH")]
    pub test_root: Option<PathBuf>,

    /// Settings file to use instead of the default config.toml
    #[arg(long, value_name = "PATH")]
    pub settings: Option<PathBuf>,

    /// Print the comparison command instead of running it
    #[arg(long)]
    pub dry_run: bool,
}

impl From<Args> for RawOptions {
    fn from(args: Args) -> Self {
        Self {
            options: DiffOptions {
                base: args.base,
                diff: args.diff,
                output: args.output,
                tag: args.tag,
                core_root: args.core_root,
                test_root: args.test_root,
            },
            flags: DriverFlags {
                settings: args.settings,
                dry_run: args.dry_run,
            },
        }
    }
}

/// [`OptionParser`] backed by clap
#[derive(Debug, Clone, Copy, Default)]
pub struct ClapParser;

impl OptionParser for ClapParser {
    fn parse(&self, args: &[OsString]) -> Result<RawOptions> {
        Args::try_parse_from(args)
            .map(RawOptions::from)
            .map_err(|e| match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    Error::Help(e.render().to_string())
                }
                _ => Error::Usage(e.render().to_string()),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn parse(args: &[&str]) -> Result<RawOptions> {
        let args: Vec<OsString> = std::iter::once("corediff")
            .chain(args.iter().copied())
            .map(OsString::from)
            .collect();
        ClapParser.parse(&args)
    }

    #[test]
    fn test_long_and_short_forms() {
        let raw = parse(&[
            "-b", "base.exe", "--diff", "diff.exe", "-o", "out", "-t", "run1", "--core_root",
            "core", "--test_root", "tests",
        ])
        .unwrap();

        assert_eq!(raw.options.base.as_deref(), Some(Path::new("base.exe")));
        assert_eq!(raw.options.diff.as_deref(), Some(Path::new("diff.exe")));
        assert_eq!(raw.options.output.as_deref(), Some(Path::new("out")));
        assert_eq!(raw.options.tag.as_deref(), Some("run1"));
        assert_eq!(raw.options.core_root.as_deref(), Some(Path::new("core")));
        assert_eq!(raw.options.test_root.as_deref(), Some(Path::new("tests")));
        assert_eq!(raw.flags, DriverFlags::default());
    }

    #[test]
    fn test_nothing_is_required_at_parse_time() {
        let raw = parse(&[]).unwrap();
        assert_eq!(raw, RawOptions::default());
    }

    #[test]
    fn test_driver_flags() {
        let raw = parse(&["--dry-run", "--settings", "corediff.toml"]).unwrap();
        assert!(raw.flags.dry_run);
        assert_eq!(raw.flags.settings.as_deref(), Some(Path::new("corediff.toml")));
    }

    #[test]
    fn test_unrecognized_option_is_usage_error() {
        let err = parse(&["--core-root", "core"]).unwrap_err();
        assert!(matches!(err, Error::Usage(ref msg) if msg.contains("--core-root")));
    }

    #[test]
    fn test_help_is_not_a_failure() {
        let err = parse(&["--help"]).unwrap_err();
        assert!(matches!(err, Error::Help(ref text) if text.contains("--core_root")));
        assert_eq!(err.exit_code(), 0);
    }

    #[test]
    fn test_args_definition_is_consistent() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
