#![allow(dead_code)]
use serde_json::Value;
use std::process::Command;

pub fn dothttp_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_dothttp"))
}

pub const API_FIXTURES: &str = "tests/fixtures/api";
pub const BROKEN_FIXTURES: &str = "tests/fixtures/broken";
pub const CYCLE_FIXTURES: &str = "tests/fixtures/cycle";
pub const UNNAMED_FIXTURES: &str = "tests/fixtures/unnamed";

pub fn json_subset(expected: &Value, actual: &Value) -> bool {
    match (expected, actual) {
        (Value::Object(exp_map), Value::Object(act_map)) => {
            for (k, v) in exp_map {
                if let Some(act_v) = act_map.get(k) {
                    if !json_subset(v, act_v) {
                        return false;
                    }
                } else {
                    return false; // Key missing in actual
                }
            }
            true
        }
        (Value::Array(exp_arr), Value::Array(act_arr)) => {
            if exp_arr.len() != act_arr.len() {
                return false;
            }
            exp_arr
                .iter()
                .zip(act_arr.iter())
                .all(|(e, a)| json_subset(e, a))
        }
        (Value::String(s), _) if s == "{{*}}" => true,
        (Value::String(s), Value::String(a)) if s.starts_with("{{regex:") && s.ends_with("}}") => {
            let pattern = &s[8..s.len() - 2];
            regex::Regex::new(pattern).is_ok_and(|re| re.is_match(a))
        }
        _ => expected == actual,
    }
}

pub fn validate_pure_json_response(stdout: &str, expected_json: &Value) -> Result<(), String> {
    let actual_json: Value = serde_json::from_str(stdout)
        .map_err(|e| format!("Failed to parse actual JSON response: {e}\n{stdout}"))?;

    if !json_subset(expected_json, &actual_json) {
        return Err(format!(
            "JSON mismatch!\nExpected subset:\n{}\nActual:\n{}",
            serde_json::to_string_pretty(expected_json).unwrap_or_default(),
            serde_json::to_string_pretty(&actual_json).unwrap_or_default()
        ));
    }

    Ok(())
}
