// -- std imports
use std::io::{self, BufWriter};

// -- crate imports
use anyhow::Result;
use tracing::{debug, info, warn};

// -- module definitions
mod args;
mod config;
mod desktop;
mod linux_fs;
mod log;
mod present;
mod scan;

// -- module imports
use crate::config::Config;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    if let Err(e) = log::init_tracing() {
        eprintln!("lsapps: could not initialize logging: {e:#}");
    }

    let config = Config::from_process();
    info!("lsapps started");
    debug!("Config: {config:#?}");

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    // A closed or failing stdout ends the listing but is not a failure of the program.
    match scan::run(&config, &mut out).await {
        Ok(()) => info!("lsapps done!"),
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
            debug!("stdout closed before listing finished");
        }
        Err(e) => warn!(error = %e, "Could not write listing"),
    }

    Ok(())
}
