use camino::Utf8PathBuf;
use thiserror::Error;

/// Coarse classification of a failed conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Input was readable but malformed or incomplete.
    Parse,
    /// A file or directory could not be read or written.
    Resource,
}

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error(r#"cannot read input file "{path}""#)]
    ReadInput {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(r#"parsing "{path}""#)]
    Json {
        path: Utf8PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(r#"result #{index} ("{command}")"#)]
    InvalidRun {
        index: usize,
        command: String,
        #[source]
        source: RunError,
    },

    #[error(r#"output directory "{path}" does not exist or is not a directory"#)]
    MissingOutputDir { path: Utf8PathBuf },

    #[error(r#"writing "{path}""#)]
    WriteOutput {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ConvertError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ConvertError::Json { .. } | ConvertError::InvalidRun { .. } => ErrorKind::Parse,
            ConvertError::ReadInput { .. }
            | ConvertError::MissingOutputDir { .. }
            | ConvertError::WriteOutput { .. } => ErrorKind::Resource,
        }
    }
}

/// Problems with a single benchmark run entry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RunError {
    #[error(r#"missing parameter "{name}""#)]
    MissingParameter { name: String },
    #[error(r#"field "{field}": cannot convert "{value}" to an integer"#)]
    NotAnInteger { field: String, value: String },
    #[error(r#"field "{field}": cannot convert "{value}" to a number"#)]
    NotANumber { field: String, value: String },
    #[error("empty command")]
    EmptyCommand,
    #[error(r#"command name "{name}" points outside the output directory"#)]
    InvalidCommandName { name: String },
}
