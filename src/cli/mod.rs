use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod commands;

use commands::serve;

#[derive(Parser)]
#[command(name = "animantra")]
#[command(about = "Animantra storefront server hosting the shop cart proxy")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    Serve {
        /// Address to bind, e.g. 0.0.0.0:3000
        ///
        /// Falls back to the BIND_ADDRESS environment variable, then to the
        /// development default.
        #[arg(short, long)]
        bind_address: Option<String>,

        /// Backend origin the shop proxy forwards to, e.g. http://localhost:8080
        ///
        /// Falls back to the BACKEND_URL environment variable, then to the
        /// development default.
        #[arg(short = 'u', long)]
        backend_url: Option<String>,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Commands::Serve {
                bind_address,
                backend_url,
            } => {
                serve(bind_address, backend_url).await?;
            }
        }
        Ok(())
    }
}
