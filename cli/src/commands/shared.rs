use crate::commands::validators;
use crate::core::formatter::OutputFormat;
use clap::Args;

#[derive(Debug, Args)]
pub struct OutputArgs {
    #[arg(
        short = 'o',
        long = "output",
        help = "Print as text or as JSON",
        default_value_t = OutputFormat::Text,
        value_enum,
        ignore_case = true
    )]
    pub output: OutputFormat,
}

/// Where to look for request files. A directory is searched recursively for
/// `.http` and `.rest` files; environments come from the nearest
/// `http-client.env.json` at or above it.
#[derive(Debug, Args)]
pub struct SourceArgs {
    #[arg(
        short = 's',
        long = "source",
        default_value = ".",
        help = "A .http/.rest file, or a directory searched recursively for them",
        value_parser = validators::validate_source_path
    )]
    pub source: String,
}

#[derive(Debug, Args)]
pub struct EnvArgs {
    #[arg(
        short = 'e',
        long = "env",
        alias = "environment",
        help = "Environment from http-client.env.json (overlaid by http-client.env.json.user)",
        value_parser = validators::validate_environment_name
    )]
    pub environment: Option<String>,
}
