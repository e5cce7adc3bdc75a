mod common;
use common::{dothttp_cmd, validate_pure_json_response, API_FIXTURES};
use serde_json::json;

#[test]
fn test_env_list_text() -> Result<(), Box<dyn std::error::Error>> {
    let output = dothttp_cmd()
        .args(["env", "list", "-s", API_FIXTURES])
        .output()?;

    if !output.status.success() {
        return Err(format!(
            "Command failed: {}",
            String::from_utf8_lossy(&output.stderr)
        )
        .into());
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    if stdout != "Environments in http-client.env.json:\n- dev\n- prod\n" {
        return Err(format!("Unexpected output: {stdout}").into());
    }
    if stdout.contains("$shared") {
        return Err("The shared block is not an environment".into());
    }
    Ok(())
}

#[test]
fn test_env_list_json_from_file_source() -> Result<(), Box<dyn std::error::Error>> {
    let output = dothttp_cmd()
        .args([
            "env",
            "list",
            "-s",
            "tests/fixtures/api/users.http",
            "-o",
            "json",
        ])
        .output()?;

    if !output.status.success() {
        return Err(format!(
            "Command failed: {}",
            String::from_utf8_lossy(&output.stderr)
        )
        .into());
    }
    validate_pure_json_response(
        &String::from_utf8_lossy(&output.stdout),
        &json!(["dev", "prod"]),
    )?;
    Ok(())
}

#[test]
fn test_env_list_empty_directory() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = std::env::temp_dir().join("dothttp_test_empty_env");
    if temp_dir.exists() {
        std::fs::remove_dir_all(&temp_dir).ok();
    }
    std::fs::create_dir_all(&temp_dir)?;

    let output = dothttp_cmd()
        .args(["env", "list", "-s"])
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
    if !stdout.contains("No environments found") {
        return Err(format!("Expected 'No environments found', got: {stdout}").into());
    }
    Ok(())
}

#[test]
fn test_env_list_nonexistent_directory() -> Result<(), Box<dyn std::error::Error>> {
    let output = dothttp_cmd()
        .args(["env", "list", "-s", "tests/nonexistent_dir_12345"])
        .output()?;

    if output.status.code() != Some(2) {
        return Err(format!("Expected exit code 2, got: {:?}", output.status.code()).into());
    }
    let stderr = String::from_utf8_lossy(&output.stderr);
    if !stderr.contains("No request file or directory") {
        return Err(
            format!("Expected error message about nonexistent directory, got: {stderr}").into(),
        );
    }
    Ok(())
}
