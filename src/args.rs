//! Command-line argument definitions.
//!
//! `lsapps` accepts a handful of mode flags and silently ignores everything else. The first
//! mode flag on the command line decides the output mode.

// -- std imports
use std::ffi::OsString;

// -- crate imports
use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser, parser::ValueSource};
use tracing::{debug, warn};

/// Command-line arguments for `lsapps`.
///
/// Only the first spelling of each flag reaches clap (see [`recognized_tokens`]), so repeating a
/// flag is never an error.
#[derive(Parser, Debug, Clone, Default)]
#[command(
    name = "lsapps",
    about = "List installed desktop applications for menu launchers",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Args {
    /// Print display names (default)
    #[arg(short = 'n', long = "names")]
    pub names: bool,

    /// Print launch commands
    #[arg(short = 'e', long = "exec")]
    pub exec: bool,

    /// Print `name=command` for every application
    #[arg(short = 'a', long = "all")]
    pub all: bool,

    /// Print `name=command` aliases, skipping applications whose name is their command
    #[arg(short = 'g', long = "gen-alias")]
    pub gen_alias: bool,
}

impl Args {
    /// Whether any mode flag was given at all.
    pub fn any_mode_flag(&self) -> bool {
        self.names || self.exec || self.all || self.gen_alias
    }
}

/// What each descriptor is rendered as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    ShowNames,
    ShowCommands,
    ShowAll,
    ShowAliases,
}

/// Clap argument ids paired with the mode they select.
const MODE_FLAGS: [(&str, Mode); 4] = [
    ("names", Mode::ShowNames),
    ("exec", Mode::ShowCommands),
    ("all", Mode::ShowAll),
    ("gen_alias", Mode::ShowAliases),
];

impl Mode {
    /// Resolve the output mode from a raw argv (program name first).
    ///
    /// Tokens that are not an exact spelling of a declared flag are dropped before clap sees
    /// them, so unknown options and clustered shorts like `-na` never produce an error. Falls
    /// back to [`Mode::default`] if nothing matches.
    pub fn from_argv<I, T>(argv: I) -> Mode
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let argv = recognized_tokens(argv);
        debug!("Recognized mode flags: {:?}", &argv[1..]);

        let matches = match Args::command().try_get_matches_from(argv) {
            Ok(m) => m,
            Err(e) => {
                warn!(error = %e, "Could not parse arguments, using default mode");
                return Mode::default();
            }
        };

        let args = match Args::from_arg_matches(&matches) {
            Ok(args) => args,
            Err(e) => {
                warn!(error = %e, "Could not read parsed arguments, using default mode");
                return Mode::default();
            }
        };

        if !args.any_mode_flag() {
            return Mode::default();
        }

        first_matching(&matches).unwrap_or_default()
    }
}

/// Pick the mode whose flag appears earliest on the command line.
fn first_matching(matches: &ArgMatches) -> Option<Mode> {
    MODE_FLAGS
        .iter()
        .filter(|(id, _)| matches.value_source(id) == Some(ValueSource::CommandLine))
        .filter_map(|(id, mode)| matches.index_of(id).map(|first| (first, *mode)))
        .min_by_key(|(idx, _)| *idx)
        .map(|(_, mode)| mode)
}

/// Keep the program name plus the first occurrence of every declared flag.
///
/// A token counts only if it exactly spells a short (`-n`) or long (`--names`) form; later
/// spellings of a flag already kept are dropped.
fn recognized_tokens<I, T>(argv: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let cmd = Args::command();
    let known: Vec<(OsString, String)> = cmd
        .get_arguments()
        .flat_map(|arg| {
            let id = arg.get_id().to_string();
            let short = arg.get_short().map(|c| (OsString::from(format!("-{c}")), id.clone()));
            let long = arg.get_long().map(|l| (OsString::from(format!("--{l}")), id.clone()));
            short.into_iter().chain(long)
        })
        .collect();

    let mut argv = argv.into_iter().map(Into::into);
    let program = argv.next().unwrap_or_else(|| OsString::from("lsapps"));

    let mut seen = Vec::<&str>::new();
    let mut out = vec![program];
    for tok in argv {
        let Some((_, id)) = known.iter().find(|(spelling, _)| *spelling == tok) else {
            continue;
        };
        if !seen.contains(&id.as_str()) {
            seen.push(id.as_str());
            out.push(tok);
        }
    }
    out
}
