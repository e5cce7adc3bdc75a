use super::dot_http_request::DotHttpRequest;
use super::ordered_map::CaseSensitiveMap;
use crate::core::error::DotHttpError;
use crate::syntax::diagnostic::Diagnostic;
use crate::syntax::ParseOptions;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Everything parsed out of one `.http` file.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DotHttpFile {
    pub file_path: Option<String>,
    pub requests: Vec<DotHttpRequest>,
    pub variables: CaseSensitiveMap,
    pub diagnostics: Vec<Diagnostic>,
}

impl DotHttpFile {
    pub fn new(file_path: Option<String>) -> Self {
        Self {
            file_path,
            ..Self::default()
        }
    }

    /// Reads and parses the file at `path`. Only I/O can fail; malformed
    /// content ends up in `diagnostics`.
    pub fn from_path(path: &Path) -> Result<Self, DotHttpError> {
        Self::from_path_with_options(path, ParseOptions::default())
    }

    pub fn from_path_with_options(
        path: &Path,
        options: ParseOptions,
    ) -> Result<Self, DotHttpError> {
        let canonical = path
            .canonicalize()
            .map_err(|e| format!("Failed to canonicalize {}: {e}", path.display()))?;
        let content = fs::read_to_string(&canonical)?;
        let file_path = crate::core::paths::clean_path(&canonical);
        crate::debug_log!("Parsing {file_path}");
        Ok(crate::syntax::parse_with_options(
            Some(&file_path),
            &content,
            options,
        ))
    }

    pub fn has_chained_requests(&self) -> bool {
        self.requests.iter().any(|r| r.has_response_references)
    }

    pub fn find_request(&self, name: &str) -> Option<&DotHttpRequest> {
        self.requests
            .iter()
            .find(|r| r.name.as_deref() == Some(name))
    }

    /// Looks a request up the way listings show it: by declared name first,
    /// then by its display name (`METHOD url` for unnamed requests).
    pub fn find_request_by_label(&self, label: &str) -> Option<&DotHttpRequest> {
        self.find_request(label)
            .or_else(|| self.requests.iter().find(|r| r.display_name() == label))
    }

    /// Request indices ordered so that every request comes after the requests
    /// it depends on.
    pub fn execution_order(&self) -> Result<Vec<usize>, DotHttpError> {
        crate::syntax::dependencies::execution_order(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chained(flag: bool) -> DotHttpRequest {
        DotHttpRequest {
            has_response_references: flag,
            ..DotHttpRequest::default()
        }
    }

    #[test]
    fn test_defaults_are_empty() {
        let file = DotHttpFile::default();
        assert!(file.file_path.is_none());
        assert!(file.requests.is_empty());
        assert!(file.variables.is_empty());
        assert!(file.diagnostics.is_empty());
    }

    #[test]
    fn test_has_chained_requests() {
        let mut file = DotHttpFile::default();
        assert!(!file.has_chained_requests());

        file.requests = vec![chained(false), chained(false)];
        assert!(!file.has_chained_requests());

        file.requests[1].has_response_references = true;
        assert!(file.has_chained_requests());

        file.requests = vec![chained(true), chained(true)];
        assert!(file.has_chained_requests());
    }

    #[test]
    fn test_file_variables_are_case_sensitive() {
        let mut file = DotHttpFile::default();
        file.variables.insert("baseUrl", "https://a");
        file.variables.insert("BaseUrl", "https://b");
        assert_eq!(file.variables.len(), 2);
    }

    #[test]
    fn test_find_request() {
        let mut file = DotHttpFile::default();
        file.requests.push(DotHttpRequest {
            name: Some("login".into()),
            ..DotHttpRequest::default()
        });
        assert!(file.find_request("login").is_some());
        assert!(file.find_request("Login").is_none());
    }

    #[test]
    fn test_find_request_by_label_falls_back_to_display_name() {
        let file = crate::syntax::parse(None, "GET /health\n\n###\n# @name login\nPOST /login\n");
        let health = file.find_request_by_label("GET /health").unwrap();
        assert_eq!(health.line_number, 1);
        assert_eq!(file.find_request_by_label("login").unwrap().line_number, 5);
        assert!(file.find_request("GET /health").is_none());
        assert!(file.find_request_by_label("GET /missing").is_none());
    }

    #[test]
    fn test_from_path_with_options() {
        let dir = std::env::temp_dir().join(format!("dothttp-file-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("upload.http");
        fs::write(&path, "POST /upload\n\nraw body\n").unwrap();

        let checked = DotHttpFile::from_path(&path).unwrap();
        assert_eq!(checked.diagnostics.len(), 1);
        assert!(checked.file_path.unwrap().ends_with("upload.http"));

        let quiet = DotHttpFile::from_path_with_options(
            &path,
            ParseOptions {
                check_body_content_type: false,
            },
        )
        .unwrap();
        assert!(quiet.diagnostics.is_empty());
        assert_eq!(quiet.requests[0].body.as_deref(), Some("raw body"));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_from_path_missing_file() {
        let result = DotHttpFile::from_path(Path::new("does/not/exist.http"));
        assert!(result.is_err());
    }
}
