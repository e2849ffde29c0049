//! Directory discovery for `.desktop` files.
//!
//! Every configured data directory contributes its `applications` subdirectory. The order is
//! the search order; nothing is sorted or deduplicated, so an application present in two
//! directories is listed twice.

// -- std imports
use std::path::PathBuf;

// -- crate imports
use tracing::debug;

// -- module imports
use crate::config::Config;

/// Name of the subdirectory holding application entries under each data directory.
const APPLICATIONS_DIR: &str = "applications";

/// Collect the directories that may contain `.desktop` files, in search order.
pub fn collect_application_dirs(config: &Config) -> Vec<PathBuf> {
    let dirs: Vec<PathBuf> = config
        .data_dirs
        .iter()
        .map(|dir| dir.join(APPLICATIONS_DIR))
        .collect();

    debug!(
        count = dirs.len(),
        "Collected application dirs to scan: {dirs:#?}"
    );
    dirs
}
