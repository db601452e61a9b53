//! Exit code constants for the preparer CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unreadable settings, API misuse)
//! - 2: Not ready to submit (only with `check --require-submit`)
//! - 3: I/O failure

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, malformed settings, or calls made out of order.
pub const USER_ERROR: i32 = 1;

/// Configuration is incomplete and submission was required.
pub const NOT_READY: i32 = 2;

/// Settings file could not be read.
pub const IO_FAILURE: i32 = 3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [SUCCESS, USER_ERROR, NOT_READY, IO_FAILURE];
        for (i, &a) in codes.iter().enumerate() {
            for (j, &b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "Exit codes must be distinct");
                }
            }
        }
    }

    #[test]
    fn success_is_zero() {
        assert_eq!(SUCCESS, 0);
    }
}
