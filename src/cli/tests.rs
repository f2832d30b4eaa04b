//! Tests for option parsing.

use super::*;
use clap::CommandFactory;

fn parse(args: &[&str]) -> ParseOutcome {
    let mut argv = vec!["physlock"];
    argv.extend_from_slice(args);
    parse_from(argv)
}

fn options(args: &[&str]) -> Options {
    match parse(args) {
        ParseOutcome::Run(opts) => opts,
        other => panic!("expected options for {args:?}, got {other:?}"),
    }
}

fn exit_code(args: &[&str]) -> i32 {
    match parse(args) {
        ParseOutcome::Exit { code, .. } => code,
        other => panic!("expected exit for {args:?}, got {other:?}"),
    }
}

#[test]
fn cli_debug_assert() {
    // Verifies the CLI arguments configuration is valid
    Cli::command().debug_assert();
}

#[test]
fn no_flags_leaves_everything_off() {
    assert_eq!(options(&[]), Options::default());
}

#[test]
fn each_boolean_flag_sets_only_its_field() {
    let opts = options(&["-d"]);
    assert_eq!(
        opts,
        Options {
            detach: true,
            ..Options::default()
        }
    );

    let opts = options(&["-L"]);
    assert_eq!(
        opts,
        Options {
            only_unlock: true,
            ..Options::default()
        }
    );

    let opts = options(&["-l"]);
    assert_eq!(
        opts,
        Options {
            only_lock: true,
            ..Options::default()
        }
    );

    let opts = options(&["-i"]);
    assert_eq!(
        opts,
        Options {
            ignore_user: true,
            ..Options::default()
        }
    );

    let opts = options(&["-s"]);
    assert_eq!(
        opts,
        Options {
            disable_sysrq: true,
            ..Options::default()
        }
    );
}

#[test]
fn clustered_flags_are_all_applied() {
    let opts = options(&["-dLli"]);
    assert!(opts.detach);
    assert!(opts.only_unlock);
    assert!(opts.only_lock);
    assert!(opts.ignore_user);
    assert!(!opts.disable_sysrq);
    assert_eq!(opts.user, None);
}

#[test]
fn lock_and_unlock_are_not_mutually_exclusive() {
    let opts = options(&["-l", "-L"]);
    assert!(opts.only_lock);
    assert!(opts.only_unlock);
}

#[test]
fn user_takes_separate_or_attached_value() {
    assert_eq!(options(&["-u", "alice"]).user.as_deref(), Some("alice"));
    assert_eq!(options(&["-ualice"]).user.as_deref(), Some("alice"));
}

#[test]
fn repeated_user_last_wins() {
    assert_eq!(
        options(&["-u", "alice", "-u", "bob"]).user.as_deref(),
        Some("bob")
    );
}

#[test]
fn repeated_flags_are_accepted() {
    let opts = options(&["-s", "-s", "-d", "-d"]);
    assert!(opts.disable_sysrq);
    assert!(opts.detach);
}

#[test]
fn disable_sysrq_does_not_touch_user() {
    let opts = options(&["-u", "alice", "-s"]);
    assert!(opts.disable_sysrq);
    assert_eq!(opts.user.as_deref(), Some("alice"));

    let opts = options(&["-s"]);
    assert_eq!(opts.user, None);
}

#[test]
fn ignore_user_without_value_keeps_user() {
    let opts = options(&["-u", "alice", "-i"]);
    assert!(opts.ignore_user);
    assert_eq!(opts.user.as_deref(), Some("alice"));
}

#[test]
fn ignore_user_with_attached_value_sets_user() {
    let opts = options(&["-i=carol"]);
    assert!(opts.ignore_user);
    assert_eq!(opts.user.as_deref(), Some("carol"));
}

#[test]
fn ignore_user_value_and_user_flag_last_wins() {
    let opts = options(&["-u", "alice", "-i=carol"]);
    assert_eq!(opts.user.as_deref(), Some("carol"));

    let opts = options(&["-i=carol", "-u", "alice"]);
    assert!(opts.ignore_user);
    assert_eq!(opts.user.as_deref(), Some("alice"));
}

#[test]
fn bare_ignore_user_after_value_keeps_that_value() {
    let opts = options(&["-i=bob", "-i"]);
    assert!(opts.ignore_user);
    assert_eq!(opts.user.as_deref(), Some("bob"));
}

#[test]
fn ignore_user_clusters_with_other_flags() {
    let opts = options(&["-id"]);
    assert!(opts.ignore_user);
    assert!(opts.detach);
    assert_eq!(opts.user, None);
}

#[test]
fn ignore_user_value_must_use_equals() {
    // `-ialice` is the cluster `-i -a -l -i -c -e`, and `-a` is unknown.
    assert_eq!(exit_code(&["-ialice"]), exit_codes::FAILURE);
}

#[test]
fn user_value_may_start_with_dash() {
    let opts = options(&["-u", "-s"]);
    assert_eq!(opts.user.as_deref(), Some("-s"));
    assert!(!opts.disable_sysrq);
}

#[test]
fn operands_are_ignored() {
    assert_eq!(options(&["foo"]), Options::default());

    let opts = options(&["-l", "--", "x"]);
    assert_eq!(
        opts,
        Options {
            only_lock: true,
            ..Options::default()
        }
    );

    let opts = options(&["foo", "-s", "bar"]);
    assert!(opts.disable_sysrq);
}

#[test]
fn help_exits_successfully_with_usage() {
    assert_eq!(
        parse(&["-h"]),
        ParseOutcome::Exit {
            code: exit_codes::SUCCESS,
            stdout: USAGE.to_string(),
            stderr: None,
        }
    );
}

#[test]
fn help_stops_before_later_flags() {
    assert_eq!(exit_code(&["-h", "-l"]), exit_codes::SUCCESS);
    assert_eq!(exit_code(&["-h", "-z"]), exit_codes::SUCCESS);
    assert_eq!(exit_code(&["-d", "-h", "-u"]), exit_codes::SUCCESS);
}

#[test]
fn version_exits_successfully_with_banner() {
    match parse(&["-v", "-l"]) {
        ParseOutcome::Exit {
            code,
            stdout,
            stderr,
        } => {
            assert_eq!(code, exit_codes::SUCCESS);
            assert_eq!(stdout, version_banner());
            assert!(stdout.starts_with("physlock "));
            assert!(stdout.ends_with(" - lock all consoles"));
            assert_eq!(stderr, None);
        }
        other => panic!("expected exit, got {other:?}"),
    }
}

#[test]
fn unknown_flag_fails_with_usage_anywhere() {
    for args in [&["-z"][..], &["-d", "-z"], &["-z", "-l"], &["-dz"]] {
        match parse(args) {
            ParseOutcome::Exit {
                code,
                stdout,
                stderr,
            } => {
                assert_eq!(code, exit_codes::FAILURE, "args: {args:?}");
                assert_eq!(stdout, USAGE);
                assert!(stderr.is_some());
            }
            other => panic!("expected exit for {args:?}, got {other:?}"),
        }
    }
}

#[test]
fn unknown_flag_before_help_still_fails() {
    assert_eq!(exit_code(&["-z", "-h"]), exit_codes::FAILURE);
}

#[test]
fn missing_user_value_fails() {
    assert_eq!(exit_code(&["-u"]), exit_codes::FAILURE);
}

#[test]
fn long_options_are_not_recognized() {
    assert_eq!(exit_code(&["--help"]), exit_codes::FAILURE);
}
