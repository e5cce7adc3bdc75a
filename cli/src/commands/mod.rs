pub mod check;
pub mod env;
pub mod request;
pub mod shared;
pub mod validators;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    Request(request::RequestCommand),
    Env(env::EnvCommand),
    #[command(about = "Report diagnostics for .http files")]
    Check(check::CheckArgs),
}
