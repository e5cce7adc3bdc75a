use dothttp_lib::DotHttpError;
use std::fmt;

/// Failures of a CLI command, on top of the library's errors.
#[derive(Debug)]
pub enum CliError {
    Lib(DotHttpError),
    /// `check` found this many error-severity diagnostics.
    DiagnosticErrors(usize),
    NotADirectory(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Lib(err) => write!(f, "{err}"),
            CliError::DiagnosticErrors(count) => {
                write!(f, "Found {count} error(s) in request files")
            }
            CliError::NotADirectory(path) => write!(f, "Not a file or directory: {path}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Lib(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DotHttpError> for CliError {
    fn from(err: DotHttpError) -> Self {
        CliError::Lib(err)
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::Lib(DotHttpError::Io(err))
    }
}
