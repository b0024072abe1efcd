use anyhow::Result;
use clap::{Parser, Subcommand};
use meadowbrook_planner::{Group, InterestFlag, Vibe};

mod cli;

/// meadowbrook - Farm stay and event venue website
#[derive(Parser)]
#[command(name = "meadowbrook")]
#[command(about = "Website and day planner for the Meadowbrook farm stay", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Print the day plan for a set of answers
    Plan {
        #[arg(long, default_value = "relaxing")]
        vibe: Vibe,

        #[arg(long, default_value = "family")]
        group: Group,

        /// Interest to include, repeatable (hiking, swimming, market, festiveParty, relaxedPicnic)
        #[arg(long = "interest")]
        interests: Vec<InterestFlag>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { host, port } => {
            let config = meadowbrook::config::Config::load(cli.config)?;
            config.validate().map_err(|e| anyhow::anyhow!(e))?;

            meadowbrook::observability::init_observability(
                "meadowbrook",
                env!("CARGO_PKG_VERSION"),
                &config.observability,
            )?;

            cli::server::serve(config, host, port).await
        }
        Commands::Plan {
            vibe,
            group,
            interests,
        } => cli::plan::print(vibe, group, interests),
    }
}
