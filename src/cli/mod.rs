//! Command-line option parsing for physlock.
//!
//! Uses clap derive macros for the flag definitions. Flags are short-only and
//! may be clustered (`-dls`). `-h` and `-v` stop parsing at the point they are
//! seen, so nothing after them is interpreted.
//!
//! Parsing never exits the process itself; it yields a [`ParseOutcome`] and
//! `main` decides what to print and which status to exit with.

use crate::exit_codes;
use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::{ArgAction, CommandFactory, FromArgMatches, Parser};
use std::ffi::OsString;

/// One-line usage synopsis.
pub const USAGE: &str = "usage: physlock [-dhLlsvi] [-u user]";

/// Lock all consoles and keep the SysRq key out of reach while locked.
#[derive(Parser, Debug)]
#[command(name = "physlock", version)]
#[command(disable_help_flag = true, disable_version_flag = true)]
#[command(args_override_self = true)]
pub struct Cli {
    /// Ask the console-locking component to run in the background.
    #[arg(short = 'd')]
    pub detach: bool,

    /// Print usage and exit.
    #[arg(short = 'h', action = ArgAction::Help)]
    #[allow(dead_code)]
    help: Option<bool>,

    /// Only restore the kernel state saved by an earlier `-l`.
    #[arg(short = 'L')]
    pub only_unlock: bool,

    /// Only suppress the kernel features and leave them suppressed.
    #[arg(short = 'l')]
    pub only_lock: bool,

    /// Disable the SysRq key while locked.
    #[arg(short = 's')]
    pub disable_sysrq: bool,

    /// Authenticate the unlock as this user. The next argument is always taken
    /// as the value, even if it starts with `-`.
    #[arg(short = 'u', value_name = "user", allow_hyphen_values = true)]
    pub user: Option<String>,

    /// Skip the invoking-user check.
    ///
    /// A value can be attached as `-i=user`, which also sets the user.
    /// `-iuser` is not that form: it is read as the cluster `-i -u ser`.
    #[arg(
        short = 'i',
        value_name = "user",
        action = ArgAction::Append,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = ""
    )]
    pub ignore_user: Vec<String>,

    /// Print version and exit.
    #[arg(short = 'v', action = ArgAction::Version)]
    #[allow(dead_code)]
    version: Option<bool>,

    /// Non-option arguments are accepted and ignored.
    #[arg(value_name = "operand", hide = true)]
    #[allow(dead_code)]
    operands: Vec<OsString>,
}

/// Parsed configuration for one physlock run.
///
/// Every flag starts out off and `user` unset; only flags present on the
/// command line change that.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    pub detach: bool,
    pub disable_sysrq: bool,
    pub only_lock: bool,
    pub only_unlock: bool,
    pub ignore_user: bool,
    pub user: Option<String>,
}

/// What the caller should do after parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    /// Continue with these options.
    Run(Options),

    /// Print `stdout` (and `stderr`, if any) and exit with `code`.
    Exit {
        code: i32,
        stdout: String,
        stderr: Option<String>,
    },
}

/// Version banner printed by `-v`.
pub fn version_banner() -> String {
    format!("physlock {} - lock all consoles", env!("CARGO_PKG_VERSION"))
}

/// Parse the process arguments.
pub fn parse_args() -> ParseOutcome {
    parse_from(std::env::args_os())
}

/// Parse an explicit argument vector. The first item is the program name.
pub fn parse_from<I, T>(args: I) -> ParseOutcome
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = match Cli::command().try_get_matches_from(args) {
        Ok(matches) => matches,
        Err(err) => return outcome_for_error(&err),
    };

    let cli = match Cli::from_arg_matches(&matches) {
        Ok(cli) => cli,
        Err(err) => return outcome_for_error(&err),
    };

    // `-u user` and `-i=user` both set the user; the later one on the
    // command line wins. A bare `-i` records an empty value and never
    // changes the user.
    let mut user = cli.user;
    let last_ignore_value = matches
        .indices_of("ignore_user")
        .into_iter()
        .flatten()
        .zip(cli.ignore_user.iter())
        .filter(|(_, value)| !value.is_empty())
        .last();
    if let Some((ignore_at, value)) = last_ignore_value {
        let user_at = matches.index_of("user");
        if user_at.is_none_or(|at| ignore_at > at) {
            user = Some(value.clone());
        }
    }

    ParseOutcome::Run(Options {
        detach: cli.detach,
        disable_sysrq: cli.disable_sysrq,
        only_lock: cli.only_lock,
        only_unlock: cli.only_unlock,
        ignore_user: !cli.ignore_user.is_empty(),
        user,
    })
}

fn outcome_for_error(err: &clap::Error) -> ParseOutcome {
    match err.kind() {
        ErrorKind::DisplayHelp => ParseOutcome::Exit {
            code: exit_codes::SUCCESS,
            stdout: USAGE.to_string(),
            stderr: None,
        },
        ErrorKind::DisplayVersion => ParseOutcome::Exit {
            code: exit_codes::SUCCESS,
            stdout: version_banner(),
            stderr: None,
        },
        kind => {
            let detail = match err.get(ContextKind::InvalidArg) {
                Some(ContextValue::String(arg)) => format!("{}: {}", kind, arg),
                _ => kind.to_string(),
            };
            ParseOutcome::Exit {
                code: exit_codes::FAILURE,
                stdout: USAGE.to_string(),
                stderr: Some(detail),
            }
        }
    }
}

#[cfg(test)]
mod tests;
