use crate::syntax::resolve::ResolveError;
use std::fmt;
use std::io;

#[derive(Debug)]
pub enum DotHttpError {
    Io(io::Error),
    Json(serde_json::Error),
    Resolve(ResolveError),
    PathNotFound(String),
    RequestNotFound(String),
    EnvironmentNotFound(String),
    UnresolvedVariable(String),
    DependencyCycle(String),
    Generic(String),
}

impl fmt::Display for DotHttpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DotHttpError::Io(err) => write!(f, "IO error: {err}"),
            DotHttpError::Json(err) => write!(f, "Invalid environment file: {err}"),
            DotHttpError::Resolve(err) => write!(f, "{err}"),
            DotHttpError::PathNotFound(path) => write!(
                f,
                "Path not found: {}",
                crate::core::paths::clean_path_str(path)
            ),
            DotHttpError::RequestNotFound(name) => write!(f, "Request not found: {name}"),
            DotHttpError::EnvironmentNotFound(name) => {
                write!(f, "Environment not found: {name}")
            }
            DotHttpError::UnresolvedVariable(name) => {
                write!(f, "Unresolved variable: '{name}'")
            }
            DotHttpError::DependencyCycle(name) => {
                write!(f, "Circular request dependency involving '{name}'")
            }
            DotHttpError::Generic(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for DotHttpError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DotHttpError::Io(err) => Some(err),
            DotHttpError::Json(err) => Some(err),
            DotHttpError::Resolve(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for DotHttpError {
    fn from(err: io::Error) -> Self {
        DotHttpError::Io(err)
    }
}

impl From<serde_json::Error> for DotHttpError {
    fn from(err: serde_json::Error) -> Self {
        DotHttpError::Json(err)
    }
}

impl From<ResolveError> for DotHttpError {
    fn from(err: ResolveError) -> Self {
        DotHttpError::Resolve(err)
    }
}

impl From<String> for DotHttpError {
    fn from(msg: String) -> Self {
        DotHttpError::Generic(msg)
    }
}

impl From<&str> for DotHttpError {
    fn from(msg: &str) -> Self {
        DotHttpError::Generic(msg.to_string())
    }
}
