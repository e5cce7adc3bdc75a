use crate::client::DotHttpClient;
use crate::commands::shared::{EnvArgs, OutputArgs, SourceArgs};
use crate::commands::validators;
use clap::{Args, Subcommand};
use dothttp_lib::DotHttpConfig;
use std::path::Path;

#[derive(Debug, Args)]
#[command(about = "Inspect requests")]
pub struct RequestCommand {
    #[command(subcommand)]
    pub command: RequestSubcommand,
}

#[derive(Debug, Subcommand)]
pub enum RequestSubcommand {
    #[command(about = "List requests")]
    List(ListArgs),
    #[command(about = "Show a request with its variables resolved")]
    Show(ShowArgs),
}

#[derive(Debug, Args)]
pub struct ListArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    #[arg(
        short = 'n',
        long = "name",
        help = "Name of the request",
        value_parser = validators::validate_request_name
    )]
    pub name: String,

    #[command(flatten)]
    pub env_args: EnvArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

pub fn execute_list(args: &ListArgs) -> Result<(), Box<dyn std::error::Error>> {
    let source_path = Path::new(&args.source.source);
    let client = DotHttpClient::new(DotHttpConfig::default());
    let requests = client.list_requests(source_path)?;

    let formatter = crate::core::formatter::get_formatter(&args.output.output);
    print!(
        "{}",
        formatter.format_list(&requests, "", "No requests found")
    );

    Ok(())
}

pub fn execute_show(args: &ShowArgs) -> Result<(), Box<dyn std::error::Error>> {
    let source_path = Path::new(&args.source.source);
    let client = DotHttpClient::new(DotHttpConfig::default());
    let details = client.get_request_details(
        source_path,
        &args.name,
        args.env_args.environment.as_deref(),
    )?;

    let formatter = crate::core::formatter::get_formatter(&args.output.output);
    print!("{}", formatter.format(&details));

    Ok(())
}
