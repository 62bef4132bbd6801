use crate::types::{LogLevel, OutputFormat};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "usercards")]
#[command(about = "Search a directory of user profile cards", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Data directory holding config.toml and logs")]
    pub data_dir: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[arg(long, global = true, help = "Override the configured debounce delay")]
    pub debounce_ms: Option<u64>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interactive search (default)
    Browse,

    /// Print the cards matching a query
    Search { query: String },

    /// Print every card in directory order
    List,

    /// Present one profile by name
    Show { name: String },

    /// Dump the rendered view tree for a query
    Tree {
        #[arg(default_value = "")]
        query: String,
    },
}
