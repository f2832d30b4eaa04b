//! physlock: lock all consoles and keep the kernel SysRq key out of reach.
//!
//! This is the main entry point for the `physlock` CLI. It parses arguments,
//! loads the config, runs the lock cycle, and on any error restores the kernel
//! state before exiting.

use physlock::cli::{self, ParseOutcome};
use physlock::config::Config;
use physlock::session::KernelState;
use physlock::{commands, exit_codes, report};
use std::process::ExitCode;

fn main() -> ExitCode {
    let options = match cli::parse_args() {
        ParseOutcome::Run(options) => options,
        ParseOutcome::Exit {
            code,
            stdout,
            stderr,
        } => {
            if let Some(msg) = stderr {
                eprintln!("{}", report::format_fatal(msg));
            }
            println!("{}", stdout);
            return ExitCode::from(code as u8);
        }
    };

    let config = match Config::resolve() {
        Ok(config) => config,
        Err(err) => report::die(&err, || Ok(())),
    };

    let mut state = KernelState::new(&config);
    if let Err(err) = commands::dispatch(&options, &config, &mut state) {
        report::die(&err, || state.restore());
    }

    ExitCode::from(exit_codes::SUCCESS as u8)
}
