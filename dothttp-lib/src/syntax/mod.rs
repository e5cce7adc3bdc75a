pub mod chaining;
pub mod dependencies;
pub mod diagnostic;
pub mod http_method;
pub mod keywords;
pub mod lines;
pub mod parse_context;
pub mod parser;
pub mod parser_state;
pub mod resolve;

pub use chaining::{analyze_request, find_response_references};
pub use dependencies::{find_dependency_cycle, validate_dependencies};
pub use diagnostic::{Diagnostic, DiagnosticDescriptor, Severity, SourceLocation};
pub use parse_context::ParseContext;
pub use parser::{parse, parse_lines, parse_with_options, ParseOptions, Parser};
pub use parser_state::ParserState;
pub use resolve::{ResolveError, ResolvedText, Segment, VariableResolver};
