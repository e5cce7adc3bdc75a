mod common;
use common::{dothttp_cmd, validate_pure_json_response, API_FIXTURES};
use serde_json::json;

#[test]
fn test_request_list_json() -> Result<(), Box<dyn std::error::Error>> {
    let output = dothttp_cmd()
        .args(["request", "list", "-s", API_FIXTURES, "-o", "json"])
        .output()?;

    if !output.status.success() {
        return Err(format!(
            "Command failed: {}",
            String::from_utf8_lossy(&output.stderr)
        )
        .into());
    }

    let expected = json!([
        {
            "name": "orders",
            "method": "GET",
            "url": "{{baseUrl}}/orders",
            "file": "{{regex:orders\\.rest$}}",
            "line": 3,
            "dependsOn": []
        },
        { "name": "listUsers", "url": "{{baseUrl}}/{{version}}/users", "line": 5 },
        { "name": "login", "method": "POST", "line": 10, "dependsOn": [] },
        { "name": "me", "line": 17, "dependsOn": ["login"] }
    ]);
    validate_pure_json_response(&String::from_utf8_lossy(&output.stdout), &expected)?;
    Ok(())
}

#[test]
fn test_request_list_single_file_text() -> Result<(), Box<dyn std::error::Error>> {
    let output = dothttp_cmd()
        .args(["request", "list", "-s", "tests/fixtures/api/orders.rest"])
        .output()?;

    if !output.status.success() {
        return Err(format!(
            "Command failed: {}",
            String::from_utf8_lossy(&output.stderr)
        )
        .into());
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    for expected in ["name: orders", "method: GET", "line: 3"] {
        if !stdout.contains(expected) {
            return Err(format!("Expected '{expected}' in output, got: {stdout}").into());
        }
    }
    if stdout.contains("listUsers") {
        return Err("Requests from other files should not be listed".into());
    }
    Ok(())
}

#[test]
fn test_request_list_empty_directory() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = std::env::temp_dir().join("dothttp_test_empty_requests");
    if temp_dir.exists() {
        std::fs::remove_dir_all(&temp_dir).ok();
    }
    std::fs::create_dir_all(&temp_dir)?;
    std::fs::write(temp_dir.join("notes.txt"), "GET /ignored")?;

    let output = dothttp_cmd()
        .args(["request", "list", "-s"])
        .arg(&temp_dir)
        .output()?;

    let _ = std::fs::remove_dir_all(&temp_dir);

    if !output.status.success() {
        return Err(format!(
            "Command failed: {}",
            String::from_utf8_lossy(&output.stderr)
        )
        .into());
    }
    let stdout = String::from_utf8_lossy(&output.stdout);
    if !stdout.contains("No requests found") {
        return Err(format!("Expected 'No requests found', got: {stdout}").into());
    }
    Ok(())
}
