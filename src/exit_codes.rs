//! Exit code constants for the mindiff CLI.
//!
//! - 0: Success (no differences, or `--exit-code` not requested)
//! - 1: Differences found (only with `--exit-code`)
//! - 2: User error (bad args, invalid config)
//! - 3: Input failure (unreadable source, input over the size limit)
//! - 4: Output failure (stdout or output file could not be written)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// The inputs differ and `--exit-code` was requested.
pub const DIFFERENCES_FOUND: i32 = 1;

/// User error: bad arguments or invalid configuration.
///
/// Matches the status clap uses for usage errors.
pub const USER_ERROR: i32 = 2;

/// Input failure: missing file, permission, invalid UTF-8, or too many lines.
pub const INPUT_FAILURE: i32 = 3;

/// Output failure: the rendered diff could not be written.
pub const OUTPUT_FAILURE: i32 = 4;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [
            SUCCESS,
            DIFFERENCES_FOUND,
            USER_ERROR,
            INPUT_FAILURE,
            OUTPUT_FAILURE,
        ];
        for (i, &a) in codes.iter().enumerate() {
            for (j, &b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "Exit codes must be distinct");
                }
            }
        }
    }

    #[test]
    fn usage_errors_share_clap_status() {
        assert_eq!(USER_ERROR, 2);
        assert_eq!(DIFFERENCES_FOUND, 1);
    }
}
