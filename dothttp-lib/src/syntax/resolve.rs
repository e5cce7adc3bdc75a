use super::keywords::{DYNAMIC_PREFIX, RESPONSE_SEGMENT};
use crate::environment::{DotHttpEnvironment, EnvironmentValue};
use crate::model::{CaseInsensitiveMap, CaseSensitiveMap, DotHttpFile, DotHttpRequest};
use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;

lazy_static! {
    static ref PLACEHOLDER: Regex = Regex::new(r"\{\{\s*(?P<inner>[^{}]*?)\s*\}\}").unwrap();
    static ref REFERENCE: Regex = Regex::new(&format!(
        r"^(?P<request>[A-Za-z_][A-Za-z0-9_\-]*)\.{RESPONSE_SEGMENT}\.(?P<path>\S+)$"
    ))
    .unwrap();
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    CircularReference(String),
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveError::CircularReference(name) => {
                write!(f, "Circular reference detected for variable: '{name}'")
            }
        }
    }
}

impl std::error::Error for ResolveError {}

/// A piece of resolved text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    /// Must be fetched from the provider at runtime, never inlined.
    Secret {
        name: String,
        value: EnvironmentValue,
    },
    /// `{{$name args...}}`, evaluated at runtime.
    Dynamic { name: String, args: Vec<String> },
    ResponseReference { request: String, path: String },
    Unresolved(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedText {
    pub segments: Vec<Segment>,
}

impl ResolvedText {
    pub fn is_literal(&self) -> bool {
        self.segments
            .iter()
            .all(|s| matches!(s, Segment::Literal(_)))
    }

    /// The text when nothing is left for runtime.
    pub fn as_literal(&self) -> Option<String> {
        self.is_literal().then(|| self.render(|_| String::new()))
    }

    pub fn unresolved(&self) -> Vec<&str> {
        self.segments
            .iter()
            .filter_map(|s| match s {
                Segment::Unresolved(name) => Some(name.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn has_secrets(&self) -> bool {
        self.segments
            .iter()
            .any(|s| matches!(s, Segment::Secret { .. }))
    }

    /// Concatenates literals, asking `other` for every non-literal segment.
    pub fn render(&self, mut other: impl FnMut(&Segment) -> String) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                _ => out.push_str(&other(segment)),
            }
        }
        out
    }

    fn push_literal(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if let Some(Segment::Literal(last)) = self.segments.last_mut() {
            last.push_str(text);
        } else {
            self.segments.push(Segment::Literal(text.to_string()));
        }
    }
}

/// Resolves `{{...}}` placeholders against request variables, file variables
/// and an environment, in that order of precedence.
#[derive(Debug, Clone, Copy, Default)]
pub struct VariableResolver<'a> {
    request_variables: Option<&'a CaseInsensitiveMap>,
    file_variables: Option<&'a CaseSensitiveMap>,
    environment: Option<(&'a DotHttpEnvironment, &'a str)>,
}

impl<'a> VariableResolver<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, file: &'a DotHttpFile) -> Self {
        self.file_variables = Some(&file.variables);
        self
    }

    pub fn with_request(mut self, request: &'a DotHttpRequest) -> Self {
        self.request_variables = Some(&request.variables);
        self
    }

    pub fn with_environment(mut self, environment: &'a DotHttpEnvironment, name: &'a str) -> Self {
        self.environment = Some((environment, name));
        self
    }

    pub fn resolve(&self, input: &str) -> Result<ResolvedText, ResolveError> {
        let mut text = ResolvedText::default();
        let mut visiting = Vec::new();
        self.resolve_into(input, &mut text, &mut visiting)?;
        Ok(text)
    }

    fn resolve_into(
        &self,
        input: &str,
        out: &mut ResolvedText,
        visiting: &mut Vec<String>,
    ) -> Result<(), ResolveError> {
        let mut last = 0;
        for caps in PLACEHOLDER.captures_iter(input) {
            let Some(whole) = caps.get(0) else {
                continue;
            };
            out.push_literal(&input[last..whole.start()]);
            last = whole.end();

            let inner = caps.name("inner").map_or("", |m| m.as_str());
            if inner.is_empty() {
                out.push_literal(whole.as_str());
            } else if let Some(call) = inner.strip_prefix(DYNAMIC_PREFIX) {
                let mut words = call.split_whitespace();
                let name = words.next().unwrap_or_default().to_string();
                let args = words.map(str::to_string).collect();
                out.segments.push(Segment::Dynamic { name, args });
            } else if let Some(reference) = REFERENCE.captures(inner) {
                out.segments.push(Segment::ResponseReference {
                    request: reference["request"].to_string(),
                    path: reference["path"].to_string(),
                });
            } else {
                self.resolve_variable(inner, out, visiting)?;
            }
        }
        out.push_literal(&input[last..]);
        Ok(())
    }

    fn resolve_variable(
        &self,
        name: &str,
        out: &mut ResolvedText,
        visiting: &mut Vec<String>,
    ) -> Result<(), ResolveError> {
        let text_value = self
            .request_variables
            .and_then(|vars| vars.get(name))
            .or_else(|| self.file_variables.and_then(|vars| vars.get(name)));

        if let Some(value) = text_value {
            if visiting.iter().any(|v| v == name) {
                return Err(ResolveError::CircularReference(name.to_string()));
            }
            visiting.push(name.to_string());
            self.resolve_into(value, out, visiting)?;
            visiting.pop();
            return Ok(());
        }

        let env_value = self
            .environment
            .and_then(|(env, env_name)| env.resolve(env_name, name));
        match env_value {
            Some(value) if value.is_secret() => out.segments.push(Segment::Secret {
                name: name.to_string(),
                value: value.clone(),
            }),
            Some(value) => out.push_literal(value.value.as_deref().unwrap_or_default()),
            None => out.segments.push(Segment::Unresolved(name.to_string())),
        }
        Ok(())
    }
}
