use anyhow::Result;
use clap::Parser;
use resellerclub::{
    api::ResellerClubClient,
    cli::{output, Cli, Commands},
    config::Config,
    dns,
};
use std::io;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Initialize logging
    env_logger::init();

    let cli = Cli::parse();
    let config = Config::resolve(cli.config.as_deref())?;
    let client = ResellerClubClient::new(&config)?;

    let Commands::Dns(args) = cli.command;
    let mut stdout = io::stdout();
    let Some(result) = dns::run(&client, &args, &mut stdout).await? else {
        return Ok(ExitCode::SUCCESS);
    };

    output::print_result(&mut stdout, &result)?;
    Ok(ExitCode::from(output::exit_code(&result)))
}
