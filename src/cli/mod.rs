//! Run orchestration
//!
//! Validates the command line, assembles the comparison arguments and hands
//! them to the comparison tool, propagating its exit code.

pub mod args;

use std::ffi::OsString;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use colored::Colorize;

use crate::common::config::Settings;
use crate::common::{Error, Result};
use crate::diff::{tool, CommandAssembler, ConfigBuilder, OptionParser, ReferenceLists};

pub use args::ClapParser;

/// Run one comparison and return the exit code to report
///
/// Nothing touches the filesystem until the command line has validated.
pub async fn run<P: OptionParser + ?Sized>(parser: &P, args: &[OsString]) -> Result<i32> {
    let (config, flags) = ConfigBuilder::new(parser).build(args)?;
    let settings = Settings::load(flags.settings.as_deref())?;
    let lists = ReferenceLists::from_settings(&settings.reference);

    tracing::info!("Beginning diff of {}!", config.test_root().display());
    tracing::debug!(output = %config.output().display(), "Output owned by comparison tool");

    let assembly = CommandAssembler::new(&lists).assemble(&config);

    if flags.dry_run {
        let tool = tool::resolve(&settings.tool)
            .unwrap_or_else(|_| PathBuf::from(&settings.tool.name));
        write_command_line(&mut io::stdout().lock(), &tool, assembly.args())?;
        return Ok(0);
    }

    let tool = tool::resolve(&settings.tool)?;
    let code = tool::invoke(&tool, assembly.args()).await?;
    if code != 0 {
        tracing::warn!("Returned with {code} failures");
    }

    Ok(code)
}

/// Print an error the way the user should see it and return its exit code
pub fn report_error(err: &Error) -> i32 {
    match err {
        Error::Help(text) => print!("{text}"),
        // clap already renders its own "error:" prefix and usage line
        Error::Usage(text) => eprint!("{text}"),
        Error::Validation(errors) => {
            for e in errors.iter() {
                eprintln!("{} {e}", "error:".red().bold());
            }
        }
        other => eprintln!("{} {other}", "error:".red().bold()),
    }
    err.exit_code()
}

/// One argument per line, tool first
fn write_command_line<W: Write>(out: &mut W, tool: &Path, args: &[OsString]) -> io::Result<()> {
    writeln!(out, "{}", tool.display())?;
    for arg in args {
        writeln!(out, "{}", arg.to_string_lossy())?;
    }
    out.flush()
}
