//! Cross-platform instance namespace and configuration paths
//!
//! Unix/macOS: instances bind sockets named `gopher.*` under `/tmp`
//! Windows: instances create named pipes `\\.\pipe\gopher.*`

use std::path::PathBuf;

/// Application name used for config directories
const APP_NAME: &str = "gopherc";

/// Name prefix every instance registers under
pub const INSTANCE_PREFIX: &str = "gopher.";

/// Directory instances create their sockets in
///
/// Always `/tmp`, not `$TMPDIR`: the receiving application binds there
/// regardless of the user's environment.
#[cfg(unix)]
pub fn socket_dir() -> PathBuf {
    PathBuf::from("/tmp")
}

/// Root of the named pipe namespace
#[cfg(windows)]
pub const PIPE_ROOT: &str = r"\\.\pipe\";

#[cfg(windows)]
pub fn pipe_root() -> PathBuf {
    PathBuf::from(PIPE_ROOT)
}

/// Get the configuration directory path
///
/// Uses the directories crate for platform-appropriate locations:
/// - Linux: `~/.config/gopherc/`
/// - macOS: `~/Library/Application Support/gopherc/`
/// - Windows: `%APPDATA%\gopherc\`
pub fn config_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", APP_NAME).map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the configuration file
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.toml"))
}
