use clap::Parser;

mod client;
mod commands;
mod core;

use commands::Commands;
use crate::core::exit_code::ExitCode;
use dothttp_lib::core::logger::Logger;

#[derive(Parser)]
#[command(name = "dothttp")]
#[command(about = "Inspect and validate .http request files")]
#[command(version)]
struct Args {
    #[arg(short, long, help = "Enable debug logging", global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        let exit_code = ExitCode::from(&e);
        std::process::exit(exit_code.code());
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    Logger::init(args.debug);

    match args.command {
        Commands::Request(request_command) => match request_command.command {
            commands::request::RequestSubcommand::List(list_args) => {
                commands::request::execute_list(&list_args)
            }
            commands::request::RequestSubcommand::Show(show_args) => {
                commands::request::execute_show(&show_args)
            }
        },
        Commands::Env(env_command) => match env_command.command {
            commands::env::EnvSubcommand::List(list_args) => commands::env::execute_list(&list_args),
        },
        Commands::Check(check_args) => commands::check::execute(&check_args),
    }
}
