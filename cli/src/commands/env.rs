use crate::client::DotHttpClient;
use crate::commands::shared::{OutputArgs, SourceArgs};
use crate::core::formatter::get_formatter;
use clap::{Args, Subcommand};
use dothttp_lib::environment::loader::ENV_FILE_NAME;
use dothttp_lib::DotHttpConfig;
use std::path::Path;

#[derive(Args)]
#[command(name = "env")]
#[command(about = "Inspect the environments defined in http-client.env.json")]
pub struct EnvCommand {
    #[command(subcommand)]
    pub command: EnvSubcommand,
}

#[derive(Subcommand)]
pub enum EnvSubcommand {
    #[command(about = "List environment names, without the $shared block")]
    List(ListArgs),
}

#[derive(Args)]
pub struct ListArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

pub fn execute_list(args: &ListArgs) -> Result<(), Box<dyn std::error::Error>> {
    let client = DotHttpClient::new(DotHttpConfig::default());
    let names = client.list_environments(Path::new(&args.source.source))?;

    let title = format!("Environments in {ENV_FILE_NAME}:");
    let empty = format!("No environments found in {ENV_FILE_NAME}");
    print!(
        "{}",
        get_formatter(&args.output.output).format_list(&names, &title, &empty)
    );
    Ok(())
}
