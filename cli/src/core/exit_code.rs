use crate::core::error::CliError;
use dothttp_lib::DotHttpError;

/// Exit codes for the dothttp CLI
/// Following standard Unix/POSIX conventions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(dead_code)]
pub enum ExitCode {
    /// Success
    Success = 0,
    /// General/unspecified error
    GeneralError = 1,
    /// Error diagnostics in a request file, or a dependency cycle
    SyntaxError = 2,
    /// Environment file or environment selection error
    ConfigError = 3,
    /// File not found or IO error
    FileError = 4,
    /// Request not found
    NotFoundError = 5,
    /// Variable resolution error
    VariableError = 8,
}

impl ExitCode {
    pub fn code(&self) -> i32 {
        *self as i32
    }
}

impl From<&DotHttpError> for ExitCode {
    fn from(error: &DotHttpError) -> Self {
        match error {
            DotHttpError::Io(_) => ExitCode::FileError,
            DotHttpError::PathNotFound(_) => ExitCode::FileError,
            DotHttpError::Json(_) => ExitCode::ConfigError,
            DotHttpError::EnvironmentNotFound(_) => ExitCode::ConfigError,
            DotHttpError::RequestNotFound(_) => ExitCode::NotFoundError,
            DotHttpError::Resolve(_) => ExitCode::VariableError,
            DotHttpError::UnresolvedVariable(_) => ExitCode::VariableError,
            DotHttpError::DependencyCycle(_) => ExitCode::SyntaxError,
            DotHttpError::Generic(_) => ExitCode::GeneralError,
        }
    }
}

impl From<&CliError> for ExitCode {
    fn from(error: &CliError) -> Self {
        match error {
            CliError::Lib(err) => ExitCode::from(err),
            CliError::DiagnosticErrors(_) => ExitCode::SyntaxError,
            CliError::NotADirectory(_) => ExitCode::FileError,
        }
    }
}

impl From<&Box<dyn std::error::Error>> for ExitCode {
    fn from(error: &Box<dyn std::error::Error>) -> Self {
        if let Some(cli_error) = error.downcast_ref::<CliError>() {
            ExitCode::from(cli_error)
        } else if let Some(lib_error) = error.downcast_ref::<DotHttpError>() {
            ExitCode::from(lib_error)
        } else {
            ExitCode::GeneralError
        }
    }
}
