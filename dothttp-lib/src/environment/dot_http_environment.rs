use super::environment_value::EnvironmentValue;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Named environments layered over a shared set of values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DotHttpEnvironment {
    pub environments: HashMap<String, HashMap<String, EnvironmentValue>>,
    pub shared: HashMap<String, EnvironmentValue>,
}

impl DotHttpEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(
        &mut self,
        environment: &str,
        name: impl Into<String>,
        value: impl Into<EnvironmentValue>,
    ) {
        self.environments
            .entry(environment.to_string())
            .or_default()
            .insert(name.into(), value.into());
    }

    pub fn set_shared(&mut self, name: impl Into<String>, value: impl Into<EnvironmentValue>) {
        self.shared.insert(name.into(), value.into());
    }

    pub fn has_environment(&self, environment: &str) -> bool {
        self.environments.contains_key(environment)
    }

    pub fn environment_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.environments.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Looks `name` up in `environment` first, then in the shared values.
    /// The value is returned whole from the first scope that has it.
    pub fn resolve(&self, environment: &str, name: &str) -> Option<&EnvironmentValue> {
        self.environments
            .get(environment)
            .and_then(|vars| vars.get(name))
            .or_else(|| self.shared.get(name))
    }

    /// Overlays `other` onto `self` key by key; `other` wins on conflicts.
    pub fn merge(&mut self, other: DotHttpEnvironment) {
        for (name, value) in other.shared {
            self.shared.insert(name, value);
        }
        for (env, vars) in other.environments {
            let target = self.environments.entry(env).or_default();
            for (name, value) in vars {
                target.insert(name, value);
            }
        }
    }
}
