// labelcheck CLI - shared plumbing for `check-training-result` and
// `print-chair-num`. Each binary is a thin clap wrapper over one module here.

pub mod chairs;
pub mod exit_codes;
pub mod reconcile;
pub mod report;

use std::process::ExitCode;

use labelcheck_recon::error::InputKind;
use labelcheck_recon::LabelError;

use exit_codes::{label_exit_code, EXIT_IO, EXIT_SUCCESS};

pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (", env!("LABELCHECK_GIT_HASH"), ")",
    "\nengine:  labelcheck-recon ", env!("CARGO_PKG_VERSION"),
    "\ntarget:  ", env!("LABELCHECK_TARGET"),
);

/// Log to stderr; `RUST_LOG` overrides the default `warn` filter.
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
}

#[derive(Debug)]
pub struct CliError {
    pub code: u8,
    pub message: String,
    pub hint: Option<String>,
}

impl CliError {
    pub fn io(msg: impl Into<String>) -> Self {
        Self { code: EXIT_IO, message: msg.into(), hint: None }
    }

    /// Create error from an engine error with proper exit code.
    pub fn label(err: LabelError) -> Self {
        let code = label_exit_code(&err);
        let hint = match &err {
            LabelError::Io { .. } => {
                Some("pass the input path explicitly or run from the directory that holds it".to_string())
            }
            LabelError::MissingClassMarker { .. } | LabelError::MissingCompanion { .. } => {
                Some("check that --class-marker matches the fragment after the file name".to_string())
            }
            LabelError::Encoding { .. } => {
                Some("re-save the file as UTF-8".to_string())
            }
            LabelError::ClassParse { input: InputKind::Labels, line: 1, .. } => {
                Some("the labels CSV must not have a header row".to_string())
            }
            _ => None,
        };
        Self { code, message: err.to_string(), hint }
    }

    /// Add a hint to an existing error.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl From<LabelError> for CliError {
    fn from(err: LabelError) -> Self {
        Self::label(err)
    }
}

/// Turn a command result into the process exit code, printing any error.
pub fn finish(result: Result<(), CliError>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(CliError { code, message, hint }) => {
            if !message.is_empty() {
                eprintln!("error: {}", message);
            }
            if let Some(hint) = hint {
                eprintln!("hint:  {}", hint);
            }
            ExitCode::from(code)
        }
    }
}

/// Serialize `value` as one pretty JSON document on stdout.
pub(crate) fn print_json<T: serde::Serialize>(value: &T) -> Result<(), CliError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| CliError { code: exit_codes::EXIT_ERROR, message: format!("JSON serialization error: {e}"), hint: None })?;
    println!("{json}");
    Ok(())
}
