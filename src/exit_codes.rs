//! Exit code constants for physlock.
//!
//! - 0: Success (including `-h` and `-v`)
//! - 1: Failure (malformed invocation or any fatal error)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// Malformed invocation, or a fatal error after cleanup ran.
pub const FAILURE: i32 = 1;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        assert_ne!(SUCCESS, FAILURE, "Exit codes must be distinct");
    }

    #[test]
    fn exit_codes_match_getopt_convention() {
        assert_eq!(SUCCESS, 0);
        assert_eq!(FAILURE, 1);
    }
}
