use super::args::{Cli, Commands, FilterArgs};
use super::handlers;
use super::logging::{self, LogTarget};
use anyhow::Result;
use canstore_runtime::Config;

pub fn run(cli: Cli) -> Result<()> {
    let command = cli.command.unwrap_or(Commands::Browse {
        filter: FilterArgs::default(),
    });

    // The TUI owns the terminal, so browse only logs when given a file
    let log_target = match (&cli.log_file, &command) {
        (Some(path), _) => LogTarget::File(path.clone()),
        (None, Commands::List { .. }) => LogTarget::Stderr,
        (None, Commands::Browse { .. }) => LogTarget::Discard,
    };
    logging::init(cli.log_level, log_target)?;

    let config = Config::load(cli.config.as_deref())?.with_overrides(cli.catalog, cli.images_dir);
    tracing::debug!(
        catalog = %config.catalog_path.display(),
        images_dir = %config.images_dir.display(),
        "resolved configuration"
    );

    match command {
        Commands::Browse { filter } => handlers::browse::handle(&config, filter.to_selection()),
        Commands::List { filter, format } => {
            handlers::list::handle(&config, &filter.to_selection(), format)
        }
    }
}
