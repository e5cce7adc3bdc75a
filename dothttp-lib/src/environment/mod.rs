pub mod dot_http_environment;
pub mod environment_value;
pub mod loader;

pub use dot_http_environment::DotHttpEnvironment;
pub use environment_value::{EnvironmentValue, KnownProvider};
pub use loader::{load_environment, parse_environment};
