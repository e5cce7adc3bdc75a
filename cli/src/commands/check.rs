use crate::client::DotHttpClient;
use crate::commands::shared::{EnvArgs, OutputArgs, SourceArgs};
use crate::core::error::CliError;
use clap::Args;
use dothttp_lib::DotHttpConfig;
use std::path::Path;

#[derive(Debug, Args)]
pub struct CheckArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    #[command(flatten)]
    pub env_args: EnvArgs,

    #[arg(
        long = "no-content-type-check",
        help = "Do not warn about bodies without a Content-Type header"
    )]
    pub no_content_type_check: bool,

    #[command(flatten)]
    pub output: OutputArgs,
}

pub fn execute(args: &CheckArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = DotHttpConfig {
        generate_content_type_checks: !args.no_content_type_check,
        ..DotHttpConfig::default()
    };
    let client = DotHttpClient::new(config);
    let diagnostics = client.check(
        Path::new(&args.source.source),
        args.env_args.environment.as_deref(),
    )?;

    let formatter = crate::core::formatter::get_formatter(&args.output.output);
    print!("{}", formatter.format_diagnostics(&diagnostics));

    let errors = diagnostics.iter().filter(|d| d.is_error()).count();
    if errors > 0 {
        return Err(CliError::DiagnosticErrors(errors).into());
    }
    Ok(())
}
