use std::fmt;

/// Which of the two reconciler inputs a value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    PredictionLog,
    Labels,
}

#[derive(Debug)]
pub enum LabelError {
    /// Input file could not be opened or read.
    Io { path: String, message: String },
    /// CSV reader failure (broken record).
    Csv { path: String, message: String },
    /// Input is not valid UTF-8; `line` is 1-based.
    Encoding { path: String, line: usize },
    /// File marker found on the last fragment of a line; no class fragment follows.
    MissingCompanion { line: usize },
    /// Fragment after the file marker does not carry the class marker.
    MissingClassMarker { line: usize, fragment: String },
    /// Class value is not a base-10 integer. `source` names the file for display.
    ClassParse { input: InputKind, source: String, line: usize, value: String },
    /// Identifier token cannot be ordered numerically.
    IdentifierParse { token: String },
    /// TOML parse / deserialization error.
    ConfigParse(String),
    /// Config validation error (empty marker, clashing markers).
    ConfigValidation(String),
}

impl fmt::Display for LabelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, message } => write!(f, "cannot read {path}: {message}"),
            Self::Csv { path, message } => write!(f, "{path}: CSV error: {message}"),
            Self::Encoding { path, line } => write!(f, "{path}, line {line}: invalid UTF-8"),
            Self::MissingCompanion { line } => {
                write!(f, "line {line}: file marker has no following class fragment")
            }
            Self::MissingClassMarker { line, fragment } => {
                write!(f, "line {line}: expected class marker in '{fragment}'")
            }
            Self::ClassParse { source, line, value, .. } => {
                write!(f, "{source}, line {line}: cannot parse class '{value}' as integer")
            }
            Self::IdentifierParse { token } => {
                write!(f, "identifier '{token}' is not an integer")
            }
            Self::ConfigParse(msg) => write!(f, "config parse error: {msg}"),
            Self::ConfigValidation(msg) => write!(f, "config validation error: {msg}"),
        }
    }
}

impl std::error::Error for LabelError {}

impl LabelError {
    pub(crate) fn io(path: &std::path::Path, err: std::io::Error) -> Self {
        Self::Io {
            path: path.display().to_string(),
            message: err.to_string(),
        }
    }

    /// Like [`LabelError::io`], but undecodable text at `line` becomes
    /// [`LabelError::Encoding`].
    pub(crate) fn read(path: &std::path::Path, line: usize, err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::InvalidData {
            Self::Encoding {
                path: path.display().to_string(),
                line,
            }
        } else {
            Self::io(path, err)
        }
    }
}
