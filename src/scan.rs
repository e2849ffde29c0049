//! Directory scanning and the listing driver.
//!
//! Responsibilities:
//! - List `.desktop` files in each application directory (non-recursive, enumeration order).
//! - Parse each file and write its rendered line, one file at a time.

use crate::{config::Config, desktop, linux_fs, present};
use std::{
    io::{self, Write},
    path::{Path, PathBuf},
};
use tokio::fs;
use tracing::debug;

/// File name suffix of application entries.
const DESKTOP_SUFFIX: &[u8] = b".desktop";

/// Whether `path` names a `.desktop` file (exact, case-sensitive suffix on the file name).
pub fn is_desktop_file(path: &Path) -> bool {
    path.file_name()
        .is_some_and(|name| name.as_encoded_bytes().ends_with(DESKTOP_SUFFIX))
}

/// List the `.desktop` files directly inside `dir`, in the order the OS returns them.
///
/// A directory that cannot be read yields no files.
pub async fn list_desktop_files(dir: &Path) -> Vec<PathBuf> {
    let mut out = Vec::new();

    let mut rd = match fs::read_dir(dir).await {
        Ok(rd) => rd,
        Err(e) => {
            debug!(dir = %dir.display(), error = %e, "Skipping unreadable directory");
            return out;
        }
    };

    loop {
        match rd.next_entry().await {
            Ok(Some(ent)) => {
                let p = ent.path();
                if is_desktop_file(&p) {
                    out.push(p);
                }
            }
            Ok(None) => break,
            Err(e) => {
                debug!(dir = %dir.display(), error = %e, "Stopped listing directory early");
                break;
            }
        }
    }

    out
}

/// Collect `.desktop` files from every directory, keeping directory order then file order.
pub async fn collect_desktop_files(dirs: &[PathBuf]) -> Vec<PathBuf> {
    let mut out = Vec::new();
    for dir in dirs {
        out.extend(list_desktop_files(dir).await);
    }
    out
}

/// Scan the configured directories and write one line per qualifying application to `out`.
///
/// Files are parsed and written one at a time. Only a failure to write to `out` is returned.
pub async fn run<W: Write>(config: &Config, out: &mut W) -> io::Result<()> {
    let dirs = linux_fs::collect_application_dirs(config);
    let files = collect_desktop_files(&dirs).await;
    debug!(count = files.len(), mode = ?config.mode, "Found desktop files");

    for path in files {
        let desc = desktop::read_descriptor(&path).await;
        debug!(file = %path.display(), keys = desc.len(), "Parsed desktop file");

        if let Some(line) = present::render(&desc, config.mode) {
            writeln!(out, "{line}")?;
        }
    }

    out.flush()
}
