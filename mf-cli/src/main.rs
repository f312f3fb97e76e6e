//! mf-cli - Command line tool for querying the meteor flux web service.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "mf-cli",
    version,
    about = "Meteor shower flux toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: mf_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    mf_cmd::run(cli.command).await
}
