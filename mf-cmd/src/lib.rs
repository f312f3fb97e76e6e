//! Command implementations for the meteor flux CLI.
//!
//! Provides subcommands for querying the flux web service, printing the
//! encoded request, and listing the shower table.

use clap::Subcommand;
use mf_core::query::LOCAL_SERVICE_ENDPOINT;

pub mod args;
pub mod flux;
pub mod showers;

pub use args::FluxArgs;

#[derive(Subcommand)]
pub enum Command {
    /// Query the flux service and write the rendered graph and table as HTML
    Flux {
        #[command(flatten)]
        args: FluxArgs,

        /// Absolute URL of the flux endpoint
        #[arg(short, long, default_value = LOCAL_SERVICE_ENDPOINT)]
        endpoint: String,

        /// Write the HTML fragment here instead of stdout
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Print the encoded request target without sending it
    Url {
        #[command(flatten)]
        args: FluxArgs,

        /// Endpoint the query string is appended to
        #[arg(short, long, default_value = LOCAL_SERVICE_ENDPOINT)]
        endpoint: String,
    },

    /// List the showers that can be queried
    Showers,
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Flux {
            args,
            endpoint,
            output,
        } => flux::run_flux(&args, &endpoint, output.as_deref()).await,
        Command::Url { args, endpoint } => flux::print_url(&args, &endpoint),
        Command::Showers => showers::run_showers(),
    }
}
