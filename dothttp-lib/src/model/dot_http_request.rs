use super::ordered_map::CaseInsensitiveMap;
use serde::Serialize;

/// One request definition from a `.http` file.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DotHttpRequest {
    pub name: Option<String>,
    pub method: Option<String>,
    pub url: Option<String>,
    pub http_version: Option<String>,
    pub body: Option<String>,
    pub body_file_path: Option<String>,
    /// 1-based line of the request line; 0 until parsed.
    pub line_number: usize,
    pub headers: CaseInsensitiveMap,
    pub variables: CaseInsensitiveMap,
    pub comments: Vec<String>,
    /// Names of requests whose responses this request references, in order of
    /// first appearance.
    pub depends_on: Vec<String>,
    pub has_response_references: bool,
}

impl DotHttpRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_file_body(&self) -> bool {
        self.body_file_path
            .as_deref()
            .map(|p| !p.is_empty())
            .unwrap_or(false)
    }

    pub fn has_body(&self) -> bool {
        self.body.is_some() || self.is_file_body()
    }

    /// Name used in messages: the declared name, else `METHOD url`, else the
    /// line number.
    pub fn display_name(&self) -> String {
        if let Some(name) = &self.name {
            return name.clone();
        }
        match (&self.method, &self.url) {
            (Some(m), Some(u)) => format!("{m} {u}"),
            _ => format!("line {}", self.line_number),
        }
    }

    /// Records a dependency on `request_name` once, keeping first-seen order.
    pub fn add_dependency(&mut self, request_name: &str) {
        if !self.depends_on.iter().any(|d| d == request_name) {
            self.depends_on.push(request_name.to_string());
        }
        self.has_response_references = true;
    }
}
