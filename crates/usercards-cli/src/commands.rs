use super::args::{Cli, Commands};
use super::handlers;
use crate::config::{self, CONFIG_FILE, Config, LOG_FILE};
use crate::logging::{self, LogTarget};
use anyhow::Result;

pub fn run(cli: Cli) -> Result<()> {
    let data_dir = config::resolve_data_dir(cli.data_dir.as_deref())?;
    let command = cli.command.unwrap_or(Commands::Browse);

    let log_path = data_dir.join(LOG_FILE);
    let target = match command {
        Commands::Browse => LogTarget::File(&log_path),
        _ => LogTarget::Stderr,
    };
    logging::init(cli.log_level, target)?;

    let config =
        Config::load_from(&data_dir.join(CONFIG_FILE))?.with_debounce_override(cli.debounce_ms);
    tracing::debug!(
        data_dir = %data_dir.display(),
        debounce_ms = config.debounce_ms,
        "configuration loaded"
    );

    let directory = config.load_directory()?;

    match command {
        Commands::Browse => handlers::browse::handle(directory, config.debounce()),
        Commands::Search { query } => handlers::search::handle(&directory, &query, cli.format),
        Commands::List => handlers::list::handle(&directory, cli.format),
        Commands::Show { name } => handlers::show::handle(&directory, &name, cli.format),
        Commands::Tree { query } => handlers::tree::handle(&directory, &query, cli.format),
    }
}
