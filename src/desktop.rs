//! Minimal `.desktop` parsing.
//!
//! This intentionally avoids a full spec-compliant parser and only extracts the key-value pairs
//! that appear before the first section other than `[Desktop Entry]`. That is enough for the
//! three keys `lsapps` reads (`Name`, `Exec`, `NoDisplay`).

// -- std imports
use std::{collections::HashMap, ops::ControlFlow, path::Path};

// -- crate imports
use tokio::{
    fs::File,
    io::{self, AsyncBufRead, AsyncBufReadExt, BufReader},
};
use tracing::debug;

/// The only section header that does not end parsing.
const DESKTOP_ENTRY_HEADER: &str = "[Desktop Entry]";

/// Key-value pairs collected from the leading section of a `.desktop` file.
///
/// Keys are kept exactly as written. A later duplicate key overwrites the earlier value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Descriptor(HashMap<String, String>);

impl Descriptor {
    /// Value of `key`, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Feed one line to `desc`. Breaks on a bracketed header other than `[Desktop Entry]`.
///
/// A line contributes a pair only if it has an `=` with non-empty text on both sides.
fn apply_line(desc: &mut Descriptor, line: &str) -> ControlFlow<()> {
    if line.starts_with('[') && line.ends_with(']') && line != DESKTOP_ENTRY_HEADER {
        return ControlFlow::Break(());
    }

    match line.split_once('=') {
        Some((key, value)) if !key.is_empty() && !value.is_empty() => desc.insert(key, value),
        _ => {}
    }

    ControlFlow::Continue(())
}

/// Parse `.desktop` content from `reader`, stopping at the first foreign section header.
///
/// Lines are split on `\n` with a trailing `\r` removed. Bytes that are not valid UTF-8 are
/// replaced rather than rejected, so one badly encoded `Comment[xx]=` line does not hide the
/// whole entry.
///
/// # Errors
/// - [`io::Error`] if reading from `reader` fails.
pub async fn parse_descriptor<R>(mut reader: R) -> io::Result<Descriptor>
where
    R: AsyncBufRead + Unpin,
{
    let mut desc = Descriptor::default();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf).await? == 0 {
            break;
        }

        let raw = buf.strip_suffix(b"\n").unwrap_or(&buf[..]);
        let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
        if apply_line(&mut desc, &String::from_utf8_lossy(raw)).is_break() {
            break;
        }
    }

    Ok(desc)
}

/// Read and parse a `.desktop` file.
///
/// Reading stops at the first foreign section header, so trailing `[Desktop Action ...]` groups
/// are never read from disk. A file that cannot be opened or read yields an empty
/// [`Descriptor`].
pub async fn read_descriptor(path: &Path) -> Descriptor {
    let parsed = match File::open(path).await {
        Ok(file) => parse_descriptor(BufReader::new(file)).await,
        Err(e) => Err(e),
    };

    match parsed {
        Ok(desc) => desc,
        Err(e) => {
            debug!(file = %path.display(), error = %e, "Could not read desktop file");
            Descriptor::default()
        }
    }
}
