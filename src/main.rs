use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod domain;
mod services;

pub use cli::*;
pub use commands::*;
pub use domain::models::*;
pub use services::authorization::*;
pub use services::command::*;
pub use services::manifest::*;
pub use services::output::*;
pub use services::profile::*;
pub use services::runner::*;

fn main() {
    let cli = Cli::parse();
    init_tracing(&cli.log);

    if let Err(err) = run(&cli) {
        print_error(cli.json, &err);
        std::process::exit(1);
    }
}

fn init_tracing(directives: &str) {
    let (filter, rejected) = match EnvFilter::try_new(directives) {
        Ok(filter) => (filter, None),
        Err(err) => (EnvFilter::new("info"), Some(err)),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
    if let Some(err) = rejected {
        tracing::warn!(filter = directives, error = %err, "invalid log filter, using info");
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    if handle_authorize_commands(cli)? {
        return Ok(());
    }
    if handle_inspect_commands(cli)? {
        return Ok(());
    }
    anyhow::bail!("unhandled command: {:?}", cli.command)
}
