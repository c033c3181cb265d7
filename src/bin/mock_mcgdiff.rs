//! Mock comparison tool binary for integration testing
//!
//! Records the argument vector it was launched with and exits with a chosen
//! status, so the driver can be tested without a real comparison tool.
//!
//! Environment:
//! - `MOCK_MCGDIFF_RECORD`: file to write the arguments to, as a JSON array
//! - `MOCK_MCGDIFF_EXIT`: exit status to return (default 0)

use std::io::Write;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if let Some(record) = std::env::var_os("MOCK_MCGDIFF_RECORD") {
        let body = serde_json::to_string(&args).unwrap();
        let mut file = std::fs::File::create(record).unwrap();
        file.write_all(body.as_bytes()).unwrap();
    }

    println!("mock mcgdiff: {} arguments", args.len());

    let code = std::env::var("MOCK_MCGDIFF_EXIT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(0);
    std::process::exit(code);
}
