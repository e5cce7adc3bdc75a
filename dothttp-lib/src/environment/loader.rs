use super::{DotHttpEnvironment, EnvironmentValue};
use crate::core::error::DotHttpError;
use crate::debug_log;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

pub const ENV_FILE_NAME: &str = "http-client.env.json";
pub const USER_ENV_FILE_NAME: &str = "http-client.env.json.user";
pub const SHARED_KEY: &str = "$shared";

/// Parses the JSON environment layout: `$shared` holds the shared values and
/// every other top-level key is an environment.
pub fn parse_environment(json: &str) -> Result<DotHttpEnvironment, DotHttpError> {
    let raw: HashMap<String, HashMap<String, EnvironmentValue>> = serde_json::from_str(json)?;
    let mut env = DotHttpEnvironment::new();
    for (name, vars) in raw {
        if name == SHARED_KEY {
            env.shared = vars;
        } else {
            env.environments.insert(name, vars);
        }
    }
    Ok(env)
}

/// Loads the environment for `source_path` (a `.http` file or directory).
///
/// The nearest directory, walking upwards, that contains an environment file
/// wins. A `.user` file next to it overlays per key. No file at all yields an
/// empty environment.
pub fn load_environment(source_path: &Path) -> Result<DotHttpEnvironment, DotHttpError> {
    let Some(dir) = find_environment_dir(source_path) else {
        debug_log!("No {ENV_FILE_NAME} found for {}", source_path.display());
        return Ok(DotHttpEnvironment::new());
    };

    let env_file = dir.join(ENV_FILE_NAME);
    debug_log!("Loading environments from {}", env_file.display());
    let mut env = parse_environment(&fs::read_to_string(&env_file)?)?;

    let user_file = dir.join(USER_ENV_FILE_NAME);
    if user_file.exists() {
        debug_log!("Applying user overrides from {}", user_file.display());
        env.merge(parse_environment(&fs::read_to_string(&user_file)?)?);
    }
    Ok(env)
}

fn find_environment_dir(source_path: &Path) -> Option<PathBuf> {
    let start = if source_path.is_dir() {
        source_path.to_path_buf()
    } else {
        source_path.parent()?.to_path_buf()
    };
    let start = start.canonicalize().unwrap_or(start);
    start
        .ancestors()
        .find(|dir| dir.join(ENV_FILE_NAME).is_file())
        .map(Path::to_path_buf)
}
