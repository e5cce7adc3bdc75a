use dothttp_lib::core::paths::is_http_file;
use lazy_static::lazy_static;
use regex::Regex;
use std::path::Path;

lazy_static! {
    static ref ENVIRONMENT_NAME: Regex = Regex::new(r"^[a-zA-Z_$][a-zA-Z0-9_.\-]*$").unwrap();
}

/// Accepts a directory or a `.http`/`.rest` file.
pub fn validate_source_path(path: &str) -> Result<String, String> {
    let source = Path::new(path);
    if !source.exists() {
        return Err(format!("No request file or directory at '{path}'"));
    }
    if source.is_file() && !is_http_file(source) {
        return Err(format!("'{path}' is not a .http or .rest file"));
    }
    Ok(path.to_string())
}

/// Environment names are JSON keys, so only a conservative shape is allowed.
pub fn validate_environment_name(name: &str) -> Result<String, String> {
    if name.len() > 50 {
        return Err("Environment name must be 50 characters or less".to_string());
    }
    if !ENVIRONMENT_NAME.is_match(name) {
        return Err(format!(
            "Invalid environment name '{name}': use letters, digits, '_', '.' or '-', \
             starting with a letter, '_' or '$'"
        ));
    }
    Ok(name.to_string())
}

/// Request names may come from a `###` title, so spaces are allowed.
pub fn validate_request_name(name: &str) -> Result<String, String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err("Request name must not be empty".to_string());
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_environment_name() {
        assert!(validate_environment_name("dev").is_ok());
        assert!(validate_environment_name("local-docker").is_ok());
        assert!(validate_environment_name("prod.eu").is_ok());
        assert!(validate_environment_name("$shared").is_ok());

        assert!(validate_environment_name("1invalid").is_err());
        assert!(validate_environment_name("-invalid").is_err());
        assert!(validate_environment_name("invalid name").is_err());
        assert!(validate_environment_name("invalid!name").is_err());
        assert!(validate_environment_name(&"x".repeat(51)).is_err());
    }

    #[test]
    fn test_validate_request_name() {
        assert_eq!(validate_request_name(" Get users ").unwrap(), "Get users");
        assert!(validate_request_name("   ").is_err());
    }

    #[test]
    fn test_validate_source_path() {
        assert!(validate_source_path(".").is_ok());
        assert!(validate_source_path("tests/fixtures/api/users.http").is_ok());
        assert!(validate_source_path("tests/fixtures/api/orders.rest").is_ok());

        let err = validate_source_path("definitely/not/here").unwrap_err();
        assert!(err.contains("No request file or directory"));
        let err = validate_source_path("tests/fixtures/api/http-client.env.json").unwrap_err();
        assert!(err.contains("is not a .http or .rest file"));
    }
}
