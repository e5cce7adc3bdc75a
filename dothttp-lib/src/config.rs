use crate::syntax::ParseOptions;
use serde::{Deserialize, Serialize};

pub const DEFAULT_ENVIRONMENT: &str = "dev";
pub const DEFAULT_TEST_FRAMEWORK: &str = "MSTest";

/// Options for turning parsed files into generated tests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DotHttpConfig {
    pub output_path: Option<String>,
    pub namespace: Option<String>,
    pub environment: String,
    pub test_framework: String,
    pub generate_status_code_checks: bool,
    pub generate_content_type_checks: bool,
    pub generate_body_checks: bool,
    pub log_response_on_failure: bool,
    pub use_assertion_library: bool,
    pub http_client_type: Option<String>,
}

impl Default for DotHttpConfig {
    fn default() -> Self {
        Self {
            output_path: None,
            namespace: None,
            environment: DEFAULT_ENVIRONMENT.to_string(),
            test_framework: DEFAULT_TEST_FRAMEWORK.to_string(),
            generate_status_code_checks: true,
            generate_content_type_checks: true,
            generate_body_checks: true,
            log_response_on_failure: true,
            use_assertion_library: false,
            http_client_type: None,
        }
    }
}

impl DotHttpConfig {
    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            check_body_content_type: self.generate_content_type_checks,
        }
    }
}
