//! Comparison tool lookup and launch

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{ExitStatus, Stdio};

use tokio::process::Command;

use crate::common::config::ToolSettings;
use crate::common::{Error, Result};

/// Locate the comparison tool
///
/// An explicit `path` in the settings wins; otherwise `name` is searched on
/// PATH.
pub fn resolve(settings: &ToolSettings) -> Result<PathBuf> {
    if let Some(path) = &settings.path {
        return Ok(path.clone());
    }

    which::which(&settings.name).map_err(|_| {
        let searched: Vec<String> = std::env::var_os("PATH")
            .map(|paths| {
                std::env::split_paths(&paths)
                    .map(|p| p.display().to_string())
                    .collect()
            })
            .unwrap_or_default();
        Error::tool_not_found(&settings.name, &searched)
    })
}

/// Run the tool to completion and return its exit code
///
/// The child shares this process's stdio. There is no timeout.
pub async fn invoke(tool: &Path, args: &[OsString]) -> Result<i32> {
    tracing::debug!(tool = %tool.display(), ?args, "Launching comparison tool");

    let status = Command::new(tool)
        .args(args)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .await
        .map_err(|e| Error::ToolSpawn {
            tool: tool.display().to_string(),
            error: e.to_string(),
        })?;

    Ok(exit_code(status))
}

/// Exit code to propagate for a finished child
///
/// A child killed by a signal reports `128 + signal`, as shells do.
pub fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            tracing::warn!("Comparison tool terminated by signal {signal}");
            return 128 + signal;
        }
    }

    1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_path_skips_lookup() {
        let settings = ToolSettings {
            name: "definitely-not-installed-tool".to_string(),
            path: Some(PathBuf::from("/opt/tools/mcgdiff")),
        };
        assert_eq!(resolve(&settings).unwrap(), PathBuf::from("/opt/tools/mcgdiff"));
    }

    #[test]
    fn test_unknown_tool_is_not_found() {
        let settings = ToolSettings {
            name: "corediff-no-such-tool-7f3a".to_string(),
            path: None,
        };
        let err = resolve(&settings).unwrap_err();
        assert!(matches!(err, Error::ToolNotFound { ref name, .. } if name == "corediff-no-such-tool-7f3a"));
    }

    #[cfg(unix)]
    #[test]
    fn test_exit_code_passes_through() {
        use std::os::unix::process::ExitStatusExt;
        assert_eq!(exit_code(ExitStatus::from_raw(0)), 0);
        assert_eq!(exit_code(ExitStatus::from_raw(3 << 8)), 3);
    }

    #[cfg(unix)]
    #[test]
    fn test_signal_maps_above_128() {
        use std::os::unix::process::ExitStatusExt;
        // SIGKILL
        assert_eq!(exit_code(ExitStatus::from_raw(9)), 137);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_invoke_returns_child_exit_code() {
        let code = invoke(Path::new("sh"), &[OsString::from("-c"), OsString::from("exit 5")])
            .await
            .unwrap();
        assert_eq!(code, 5);
    }

    #[tokio::test]
    async fn test_invoke_missing_executable_fails_to_spawn() {
        let dir = tempfile::tempdir().unwrap();
        let err = invoke(&dir.path().join("absent-tool"), &[]).await.unwrap_err();
        assert!(matches!(err, Error::ToolSpawn { .. }));
    }
}
