use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "ticketlens")]
#[command(version)]
#[command(about = "Exploratory analysis for customer support ticket exports")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a ticket export: common issues, averages, recommendations
    Analyze {
        /// Path to the ticket CSV (defaults to customer_support_tickets.csv)
        #[arg(short, long)]
        file: Option<String>,
    },

    /// Install the stop-word list into the local cache
    Setup,

    /// Print version information
    Version,
}
