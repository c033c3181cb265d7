//! Comparison run: configuration, argument assembly and tool launch

pub mod assemble;
pub mod config;
pub mod options;
pub mod tool;

pub use assemble::{Assembly, CommandAssembler, Probe, ReferenceLists, SkipReason};
pub use config::{Config, ConfigBuilder};
pub use options::{DiffOptions, DriverFlags, OptionParser, RawOptions};
