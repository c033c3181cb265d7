//! corediff - compare JIT codegen across a CoreCLR test tree
//!
//! Validates the comparison options, builds the argument list for the
//! comparison tool and exits with whatever status the tool returns.

use std::ffi::OsString;

use corediff::cli::{self, ClapParser};
use corediff::common::logging;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    logging::init_cli();

    let args: Vec<OsString> = std::env::args_os().collect();
    let code = match cli::run(&ClapParser, &args).await {
        Ok(code) => code,
        Err(e) => cli::report_error(&e),
    };

    std::process::exit(code);
}
