use dothttp_lib::model::CaseInsensitiveMap;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestInfo {
    pub name: String,
    pub method: String,
    pub url: String,
    pub file: String,
    pub line: usize,
    pub depends_on: Vec<String>,
}

/// A request with every placeholder that can be known before sending filled
/// in.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestDetails {
    pub name: String,
    pub method: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_version: Option<String>,
    pub headers: CaseInsensitiveMap,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_file_path: Option<String>,
    pub depends_on: Vec<String>,
    pub environment: String,
    pub file: String,
    pub line: usize,
}
