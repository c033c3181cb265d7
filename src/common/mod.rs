//! Common utilities shared by the driver

pub mod config;
pub mod error;
pub mod logging;
pub mod paths;

pub use error::{exit_code, Error, Result, ValidationError, ValidationErrors};
