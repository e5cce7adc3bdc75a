//! Parser and domain model for `.http` request-definition files.
//!
//! [`syntax::parse`] turns file content into a [`DotHttpFile`] holding the
//! requests, file variables and diagnostics. [`environment`] models the
//! shared and per-environment values (including secret-provider references)
//! that placeholders resolve against.

pub mod config;
pub mod core;
pub mod environment;
pub mod model;
pub mod syntax;

pub use config::DotHttpConfig;
pub use crate::core::error::DotHttpError;
pub use environment::{DotHttpEnvironment, EnvironmentValue};
pub use model::{DotHttpFile, DotHttpRequest};
pub use syntax::{parse, parse_lines, Diagnostic, ParseOptions, Severity};
