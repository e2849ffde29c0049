//! Process configuration.
//!
//! Everything `lsapps` reads from the outside world (argv and environment) is captured once
//! into a [`Config`] at startup and passed down explicitly.

// -- std imports
use std::{
    env,
    ffi::{OsStr, OsString},
    path::PathBuf,
};

// -- module imports
use crate::args::Mode;

/// Data directories used by the XDG Base Directory spec when `XDG_DATA_DIRS` is unset or empty.
const DEFAULT_DATA_DIRS: [&str; 2] = ["/usr/local/share", "/usr/share"];

/// Per-user data directory, relative to `$HOME`.
const LOCAL_SHARE: &str = ".local/share";

/// Immutable run configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Output mode chosen from the command line.
    pub mode: Mode,

    /// Base data directories in search order. `applications` is appended to each when scanning.
    pub data_dirs: Vec<PathBuf>,
}

impl Config {
    /// Capture argv, `XDG_DATA_DIRS` and `HOME` from the running process.
    pub fn from_process() -> Self {
        Self::from_parts(
            env::args_os(),
            env::var_os("XDG_DATA_DIRS"),
            env::var_os("HOME"),
        )
    }

    /// Build a configuration from explicit inputs.
    ///
    /// `argv` includes the program name. `xdg_data_dirs` is split on `:` with empty entries
    /// dropped; `$HOME/.local/share` is appended last when `home` is non-empty.
    pub fn from_parts<I, T>(argv: I, xdg_data_dirs: Option<OsString>, home: Option<OsString>) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let mut data_dirs = xdg_data_dirs
            .as_deref()
            .map(split_paths)
            .filter(|dirs| !dirs.is_empty())
            .unwrap_or_else(|| DEFAULT_DATA_DIRS.iter().map(PathBuf::from).collect());

        if let Some(home) = home.filter(|h| !h.is_empty()) {
            data_dirs.push(PathBuf::from(home).join(LOCAL_SHARE));
        }

        Self {
            mode: Mode::from_argv(argv),
            data_dirs,
        }
    }
}

/// Split a colon-separated path list, skipping empty entries.
fn split_paths(list: &OsStr) -> Vec<PathBuf> {
    env::split_paths(list)
        .filter(|p| !p.as_os_str().is_empty())
        .collect()
}
