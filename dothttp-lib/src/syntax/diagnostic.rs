use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

/// Constant description of one diagnostic kind.
///
/// `message_format` uses positional `{0}`, `{1}`... placeholders filled in by
/// [`DiagnosticDescriptor::create`].
#[derive(Debug, PartialEq, Eq)]
pub struct DiagnosticDescriptor {
    pub code: &'static str,
    pub title: &'static str,
    pub message_format: &'static str,
    pub severity: Severity,
}

pub const REQUEST_LINE_ERROR: DiagnosticDescriptor = DiagnosticDescriptor {
    code: "DOTHTTP001",
    title: "Malformed request line",
    message_format: "Invalid request line '{0}': {1}",
    severity: Severity::Error,
};

pub const MISSING_CONTENT_TYPE: DiagnosticDescriptor = DiagnosticDescriptor {
    code: "DOTHTTP002",
    title: "Body without Content-Type",
    message_format: "Request '{0}' has a body but no Content-Type header",
    severity: Severity::Warning,
};

pub const INVALID_HEADER: DiagnosticDescriptor = DiagnosticDescriptor {
    code: "DOTHTTP003",
    title: "Invalid header line",
    message_format: "Expected 'Name: value' header, found '{0}'",
    severity: Severity::Warning,
};

pub const UNKNOWN_DEPENDENCY: DiagnosticDescriptor = DiagnosticDescriptor {
    code: "DOTHTTP004",
    title: "Unknown request dependency",
    message_format: "Request '{0}' references the response of unknown request '{1}'",
    severity: Severity::Error,
};

pub const UNRESOLVED_VARIABLE: DiagnosticDescriptor = DiagnosticDescriptor {
    code: "DOTHTTP005",
    title: "Unresolved variable",
    message_format: "Variable '{0}' is not defined in the file or environment '{1}'",
    severity: Severity::Error,
};

pub const DEPENDENCY_CYCLE: DiagnosticDescriptor = DiagnosticDescriptor {
    code: "DOTHTTP006",
    title: "Request dependency cycle",
    message_format: "Request '{0}' depends on its own response through a chain of requests",
    severity: Severity::Error,
};

pub const ALL_DESCRIPTORS: &[&DiagnosticDescriptor] = &[
    &REQUEST_LINE_ERROR,
    &MISSING_CONTENT_TYPE,
    &INVALID_HEADER,
    &UNKNOWN_DEPENDENCY,
    &UNRESOLVED_VARIABLE,
    &DEPENDENCY_CYCLE,
];

impl DiagnosticDescriptor {
    pub fn create(&self, location: Option<SourceLocation>, args: &[&str]) -> Diagnostic {
        Diagnostic {
            code: self.code,
            severity: self.severity,
            message: format_message(self.message_format, args),
            location,
        }
    }
}

fn format_message(template: &str, args: &[&str]) -> String {
    let mut message = template.to_string();
    for (i, arg) in args.iter().enumerate() {
        message = message.replace(&format!("{{{i}}}"), arg);
    }
    message
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceLocation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
    pub line: usize,
    pub start_column: usize,
    pub end_column: usize,
}

impl SourceLocation {
    /// Location covering `text` on a 1-based `line`, ignoring its indentation.
    pub fn of_line(file_path: Option<&str>, line: usize, text: &str) -> Self {
        let indent = text.chars().take_while(|c| c.is_whitespace()).count();
        let width = text.trim().chars().count();
        Self {
            file_path: file_path.map(str::to_string),
            line,
            start_column: indent + 1,
            end_column: indent + 1 + width,
        }
    }

    pub fn point(file_path: Option<&str>, line: usize, column: usize) -> Self {
        Self {
            file_path: file_path.map(str::to_string),
            line,
            start_column: column,
            end_column: column,
        }
    }

    pub fn is_zero_width(&self) -> bool {
        self.start_column == self.end_column
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub code: &'static str,
    pub severity: Severity,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<SourceLocation>,
}

impl Diagnostic {
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    pub fn line(&self) -> Option<usize> {
        self.location.as_ref().map(|l| l.line)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let severity = self.severity.as_str();
        match &self.location {
            Some(loc) => {
                if let Some(file) = &loc.file_path {
                    write!(
                        f,
                        "{severity} {} in {} at line {}, column {}: {}",
                        self.code,
                        crate::core::paths::display_path(file),
                        loc.line,
                        loc.start_column,
                        self.message
                    )
                } else {
                    write!(
                        f,
                        "{severity} {} at line {}, column {}: {}",
                        self.code, loc.line, loc.start_column, self.message
                    )
                }
            }
            None => write!(f, "{severity} {}: {}", self.code, self.message),
        }
    }
}
