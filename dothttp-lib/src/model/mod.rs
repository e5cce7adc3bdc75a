pub mod dot_http_file;
pub mod dot_http_request;
pub mod ordered_map;

pub use dot_http_file::DotHttpFile;
pub use dot_http_request::DotHttpRequest;
pub use ordered_map::{CaseInsensitiveMap, CaseSensitiveMap, OrderedMap};
