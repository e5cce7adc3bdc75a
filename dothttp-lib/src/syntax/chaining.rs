use crate::model::DotHttpRequest;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref RESPONSE_REFERENCE: Regex = Regex::new(
        r"\{\{\s*(?P<request>[A-Za-z_][A-Za-z0-9_\-]*)\.response\.(?P<path>[^{}\s]+)\s*\}\}"
    )
    .unwrap();
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseReference<'a> {
    pub request_name: &'a str,
    /// Everything after `.response.`, e.g. `body.$.token` or `headers.Location`.
    pub path: &'a str,
}

/// All `{{name.response.path}}` placeholders in `text`, in order.
pub fn find_response_references(text: &str) -> Vec<ResponseReference<'_>> {
    RESPONSE_REFERENCE
        .captures_iter(text)
        .filter_map(|caps| {
            Some(ResponseReference {
                request_name: caps.name("request")?.as_str(),
                path: caps.name("path")?.as_str(),
            })
        })
        .collect()
}

/// Recomputes `depends_on` and `has_response_references` from the request's
/// url, headers, body and variables.
pub fn analyze_request(request: &mut DotHttpRequest) {
    let mut names: Vec<String> = Vec::new();
    {
        let mut texts: Vec<&str> = Vec::new();
        texts.extend(request.url.as_deref());
        for (name, value) in request.headers.iter() {
            texts.push(name);
            texts.push(value);
        }
        texts.extend(request.body.as_deref());
        texts.extend(request.variables.values());

        for text in texts {
            for reference in find_response_references(text) {
                names.push(reference.request_name.to_string());
            }
        }
    }

    request.depends_on.clear();
    request.has_response_references = false;
    for name in &names {
        request.add_dependency(name);
    }
}
