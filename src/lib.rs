//! corediff - compare JIT codegen across a CoreCLR test tree
//!
//! This library validates a comparison scenario, assembles the argument
//! vector for the external comparison tool and launches it.

pub mod cli;
pub mod common;
pub mod diff;

// Re-export commonly used types for tests
pub use common::{Error, Result};
pub use diff::{Assembly, CommandAssembler, Config, ConfigBuilder, Probe, ReferenceLists};
