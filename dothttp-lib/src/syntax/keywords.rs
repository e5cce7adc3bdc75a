pub const REQUEST_SEPARATOR: &str = "###";
pub const COMMENT_HASH: &str = "#";
pub const COMMENT_SLASHES: &str = "//";
pub const VARIABLE_PREFIX: &str = "@";
pub const DIRECTIVE_NAME: &str = "name";
pub const BODY_FILE_PREFIX: &str = "<";
pub const QUERY_CONTINUATION: &[char] = &['?', '&'];

pub const DYNAMIC_PREFIX: &str = "$";
pub const RESPONSE_SEGMENT: &str = "response";

pub const CONTENT_TYPE_HEADER: &str = "Content-Type";
