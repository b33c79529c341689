//! CLI Exit Code Registry
//!
//! Single source of truth for the exit codes of `check-training-result` and
//! `print-chair-num`. Scripts rely on them.
//!
//! | Code | Description                                              |
//! |------|----------------------------------------------------------|
//! | 0    | Success (mismatches alone are still a success)           |
//! | 1    | General error; differences found under `--strict-exit`   |
//! | 2    | Usage error (bad args, invalid config)                   |
//! | 3    | Input file missing or unreadable                         |
//! | 4    | Input content could not be parsed                        |

use labelcheck_recon::LabelError;

/// Success - report printed.
pub const EXIT_SUCCESS: u8 = 0;

/// General error - unspecified failure.
pub const EXIT_ERROR: u8 = 1;

/// `--strict-exit` and the inputs disagree (mismatch or one-sided name).
/// Like `diff(1)`, exit 1 means "inputs differ."
pub const EXIT_DIFFERENCES: u8 = 1;

/// Usage error - bad arguments, invalid config file contents.
pub const EXIT_USAGE: u8 = 2;

/// An input path could not be opened or read.
pub const EXIT_IO: u8 = 3;

/// Marker, class value or identifier token could not be parsed.
pub const EXIT_PARSE: u8 = 4;

/// Map an engine error to its exit code.
pub fn label_exit_code(err: &LabelError) -> u8 {
    match err {
        LabelError::Io { .. } => EXIT_IO,
        LabelError::Csv { .. }
        | LabelError::Encoding { .. }
        | LabelError::MissingCompanion { .. }
        | LabelError::MissingClassMarker { .. }
        | LabelError::ClassParse { .. }
        | LabelError::IdentifierParse { .. } => EXIT_PARSE,
        LabelError::ConfigParse(_) | LabelError::ConfigValidation(_) => EXIT_USAGE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use labelcheck_recon::error::InputKind;

    #[test]
    fn parse_family_shares_code() {
        let errs = [
            LabelError::MissingCompanion { line: 1 },
            LabelError::ClassParse {
                input: InputKind::Labels,
                source: "x".into(),
                line: 1,
                value: "a".into(),
            },
            LabelError::Encoding { path: "labels.csv".into(), line: 2 },
            LabelError::IdentifierParse { token: "a".into() },
        ];
        for err in &errs {
            assert_eq!(label_exit_code(err), EXIT_PARSE, "{err}");
        }
    }

    #[test]
    fn io_and_config_codes() {
        let io = LabelError::Io { path: "labels.csv".into(), message: "not found".into() };
        assert_eq!(label_exit_code(&io), EXIT_IO);
        assert_eq!(label_exit_code(&LabelError::ConfigParse("bad".into())), EXIT_USAGE);
    }
}
