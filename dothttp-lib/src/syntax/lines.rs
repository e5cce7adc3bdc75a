use super::http_method::HttpMethod;
use super::keywords::{
    BODY_FILE_PREFIX, COMMENT_HASH, COMMENT_SLASHES, REQUEST_SEPARATOR, VARIABLE_PREFIX,
};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref VARIABLE_DECL: Regex =
        Regex::new(r"^@(?P<name>[A-Za-z_][A-Za-z0-9_.\-]*)\s*=\s*(?P<value>.*)$").unwrap();
    static ref DIRECTIVE: Regex =
        Regex::new(r"^@(?P<key>[A-Za-z_][A-Za-z0-9_\-]*)(?:\s+(?P<value>.*))?$").unwrap();
    static ref HEADER: Regex =
        Regex::new(r"^(?P<name>[!#$%&'*+.^_`|~0-9A-Za-z\-]+)\s*:\s*(?P<value>.*)$").unwrap();
    static ref HTTP_VERSION: Regex = Regex::new(r"^HTTP/\d+(\.\d+)?$").unwrap();
    static ref URL_ONLY: Regex = Regex::new(r"^(https?://|/|\{\{)\S*$").unwrap();
    static ref ABSOLUTE_URL: Regex = Regex::new(r"^https?://\S+$").unwrap();
}

/// Shape of one source line, independent of parser state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    Blank,
    /// `###`, optionally followed by a request title.
    Separator { title: Option<&'a str> },
    Comment { text: &'a str },
    /// `# @key value` inside a comment.
    Directive { key: &'a str, value: &'a str },
    /// `@name = value`
    Variable { name: &'a str, value: &'a str },
    Other(&'a str),
}

pub fn classify(line: &str) -> LineKind<'_> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return LineKind::Blank;
    }
    if let Some(rest) = trimmed.strip_prefix(REQUEST_SEPARATOR) {
        let title = rest.trim_start_matches('#').trim();
        return LineKind::Separator {
            title: (!title.is_empty()).then_some(title),
        };
    }
    let comment = trimmed
        .strip_prefix(COMMENT_SLASHES)
        .or_else(|| trimmed.strip_prefix(COMMENT_HASH));
    if let Some(text) = comment {
        let text = text.trim();
        if let Some(caps) = DIRECTIVE.captures(text) {
            let key = caps.name("key").map_or("", |m| m.as_str());
            let value = caps.name("value").map_or("", |m| m.as_str().trim());
            return LineKind::Directive { key, value };
        }
        return LineKind::Comment { text };
    }
    if trimmed.starts_with(VARIABLE_PREFIX) {
        if let Some(caps) = VARIABLE_DECL.captures(trimmed) {
            let name = caps.name("name").map_or("", |m| m.as_str());
            let value = caps.name("value").map_or("", |m| m.as_str().trim());
            return LineKind::Variable { name, value };
        }
    }
    LineKind::Other(trimmed)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestLine {
    pub method: HttpMethod,
    pub url: String,
    pub http_version: Option<String>,
}

/// Parses `METHOD URL [HTTP/x.y]`, or a bare URL meaning GET. The error is a
/// short reason suitable for a diagnostic message.
pub fn parse_request_line(line: &str) -> Result<RequestLine, String> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    match parts.as_slice() {
        [] => Err("empty request line".into()),
        [single] => {
            if URL_ONLY.is_match(single) {
                Ok(RequestLine {
                    method: HttpMethod::GET,
                    url: single.to_string(),
                    http_version: None,
                })
            } else if HttpMethod::from_str(single).is_some() {
                Err("missing URL".into())
            } else {
                Err("expected 'METHOD URL [HTTP/version]'".into())
            }
        }
        [method, url, rest @ ..] => {
            let method = HttpMethod::from_str(method)
                .ok_or_else(|| format!("unknown HTTP method '{method}'"))?;
            let http_version = match rest {
                [] => None,
                [version] if HTTP_VERSION.is_match(version) => Some(version.to_string()),
                [version] => return Err(format!("invalid HTTP version '{version}'")),
                _ => return Err("unexpected text after URL".into()),
            };
            Ok(RequestLine {
                method,
                url: url.to_string(),
                http_version,
            })
        }
    }
}

/// True when `line` can only be a request line: an explicit known method, or
/// an absolute URL. Used to tell a following request apart from body text.
pub fn is_explicit_request_line(line: &str) -> bool {
    let Ok(request_line) = parse_request_line(line) else {
        return false;
    };
    let first = line.split_whitespace().next().unwrap_or_default();
    HttpMethod::from_str(first).is_some() || ABSOLUTE_URL.is_match(&request_line.url)
}

/// Splits `Name: value` on the first colon. Both parts come back trimmed.
pub fn parse_header(line: &str) -> Option<(&str, &str)> {
    let caps = HEADER.captures(line.trim())?;
    let name = caps.name("name")?.as_str();
    let value = caps.name("value").map_or("", |m| m.as_str().trim());
    Some((name, value))
}

/// Path of a `< ./file` (or `<@ ./file`) body reference.
pub fn parse_body_file_reference(line: &str) -> Option<&str> {
    let trimmed = line.trim();
    let rest = trimmed
        .strip_prefix("<@")
        .or_else(|| trimmed.strip_prefix(BODY_FILE_PREFIX))?;
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    let path = rest.trim();
    (!path.is_empty()).then_some(path)
}
