//! Exit code constants for the openr-testcfg CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unreadable files)
//! - 2: Parse failure (malformed YAML/JSON)
//! - 3: Config mismatch (`compare` found differences)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, missing files, or invalid regex input.
pub const USER_ERROR: i32 = 1;

/// Parse failure: a config file could not be (de)serialized.
pub const PARSE_FAILURE: i32 = 2;

/// Config mismatch: two compared configs differ.
pub const CONFIG_MISMATCH: i32 = 3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [SUCCESS, USER_ERROR, PARSE_FAILURE, CONFIG_MISMATCH];
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
