//! Argument vector construction for the comparison tool
//!
//! The tool expects
//! `--platform <core_root> [--base <path>] [--diff <path>] [--tag <name>] <assembly>... <test-dir>...`.
//! Assemblies and test directories that are not on disk are skipped with a
//! warning so a trimmed core root or test tree still yields a usable run.

use std::ffi::{OsStr, OsString};
use std::fmt;
use std::path::{Path, PathBuf};

use super::config::Config;
use crate::common::config::ReferenceSettings;

/// Framework assemblies probed under the core root, in argument order
pub const FRAMEWORK_ASSEMBLIES: &[&str] = &[
    "mscorlib.dll",
    "System.dll",
    "System.Core.dll",
    "System.Runtime.dll",
    "System.Runtime.Extensions.dll",
    "System.Runtime.Handles.dll",
    "System.Runtime.InteropServices.dll",
    "System.Runtime.InteropServices.PInvoke.dll",
    "System.Runtime.InteropServices.RuntimeInformation.dll",
    "System.Runtime.Numerics.dll",
    "System.Runtime.Serialization.Primitives.dll",
    "Microsoft.CodeAnalysis.dll",
    "Microsoft.CodeAnalysis.CSharp.dll",
    "System.Collections.dll",
    "System.Collections.Immutable.dll",
    "System.Collections.ni.dll",
    "System.Collections.NonGeneric.dll",
    "System.Collections.Specialized.dll",
    "System.ComponentModel.dll",
    "System.Console.dll",
    "System.Numerics.Vectors.dll",
    "System.Text.Encoding.dll",
    "System.Text.Encoding.Extensions.dll",
    "System.Text.RegularExpressions.dll",
    "System.Xml.dll",
    "System.Xml.Linq.dll",
    "System.Xml.ReaderWriter.dll",
    "System.Xml.XDocument.dll",
    "System.Xml.XmlDocument.dll",
    "System.Xml.XmlSerializer.dll",
];

/// Test subdirectories probed under the test root, in argument order
pub const TEST_DIRECTORIES: &[&str] = &["Interop", "JIT"];

/// Names probed on every run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceLists {
    pub framework_assemblies: Vec<String>,
    pub test_directories: Vec<String>,
}

impl Default for ReferenceLists {
    fn default() -> Self {
        Self {
            framework_assemblies: FRAMEWORK_ASSEMBLIES.iter().map(|s| s.to_string()).collect(),
            test_directories: TEST_DIRECTORIES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl ReferenceLists {
    /// Built-in lists with any settings overrides applied
    pub fn from_settings(settings: &ReferenceSettings) -> Self {
        let defaults = Self::default();
        Self {
            framework_assemblies: settings
                .framework_assemblies
                .clone()
                .unwrap_or(defaults.framework_assemblies),
            test_directories: settings
                .test_directories
                .clone()
                .unwrap_or(defaults.test_directories),
        }
    }
}

/// Why a probed entry was left out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// No regular file at the assembly path
    MissingFile,
    /// No directory at the test path
    MissingDirectory,
}

/// Outcome of probing one reference entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Probe {
    Included(PathBuf),
    Skipped { path: PathBuf, reason: SkipReason },
}

impl Probe {
    pub fn path(&self) -> &Path {
        match self {
            Probe::Included(path) | Probe::Skipped { path, .. } => path,
        }
    }

    pub fn is_included(&self) -> bool {
        matches!(self, Probe::Included(_))
    }
}

impl fmt::Display for Probe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Probe::Included(path) => write!(f, "{}", path.display()),
            Probe::Skipped { path, .. } => write!(f, "can't find {}", path.display()),
        }
    }
}

/// The finished argument vector plus how each reference entry fared
#[derive(Debug, Clone, Default)]
pub struct Assembly {
    args: Vec<OsString>,
    probes: Vec<Probe>,
}

impl Assembly {
    pub fn args(&self) -> &[OsString] {
        &self.args
    }

    pub fn into_args(self) -> Vec<OsString> {
        self.args
    }

    /// Every probe, assemblies first, each group in list order
    pub fn probes(&self) -> &[Probe] {
        &self.probes
    }

    pub fn skipped(&self) -> impl Iterator<Item = &Probe> {
        self.probes.iter().filter(|p| !p.is_included())
    }

    fn push_flag(&mut self, flag: &str, value: impl AsRef<OsStr>) {
        self.args.push(OsString::from(flag));
        self.args.push(value.as_ref().to_os_string());
    }

    fn record(&mut self, probe: Probe) {
        match &probe {
            Probe::Included(path) => self.args.push(path.clone().into_os_string()),
            Probe::Skipped { .. } => tracing::warn!("{probe}"),
        }
        self.probes.push(probe);
    }
}

/// Builds the comparison tool's argument vector from a [`Config`]
#[derive(Debug, Clone, Copy)]
pub struct CommandAssembler<'r> {
    lists: &'r ReferenceLists,
}

impl<'r> CommandAssembler<'r> {
    pub fn new(lists: &'r ReferenceLists) -> Self {
        Self { lists }
    }

    pub fn assemble(&self, config: &Config) -> Assembly {
        let mut assembly = Assembly::default();

        assembly.push_flag("--platform", config.core_root());
        if let Some(base) = config.base() {
            assembly.push_flag("--base", base);
        }
        if let Some(diff) = config.diff() {
            assembly.push_flag("--diff", diff);
        }
        if let Some(tag) = config.tag() {
            assembly.push_flag("--tag", tag);
        }

        for name in &self.lists.framework_assemblies {
            let path = config.core_root().join(name);
            let probe = if path.is_file() {
                Probe::Included(path)
            } else {
                Probe::Skipped {
                    path,
                    reason: SkipReason::MissingFile,
                }
            };
            assembly.record(probe);
        }

        for name in &self.lists.test_directories {
            let path = config.test_root().join(name);
            let probe = if path.is_dir() {
                Probe::Included(path)
            } else {
                Probe::Skipped {
                    path,
                    reason: SkipReason::MissingDirectory,
                }
            };
            assembly.record(probe);
        }

        tracing::debug!(args = ?assembly.args, "Assembled comparison arguments");
        assembly
    }
}
