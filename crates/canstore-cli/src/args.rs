use crate::types::{LogLevel, OutputFormat};
use canstore_types::{Category, Selection};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "canstore")]
#[command(about = "Browse and filter The Can Store product catalog", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        help = "Config file (default: $CANSTORE_CONFIG, ./canstore.toml, then the XDG config dir)"
    )]
    pub config: Option<String>,

    #[arg(long, global = true, help = "Catalog JSON file, or '-' for stdin")]
    pub catalog: Option<PathBuf>,

    #[arg(long, global = true, help = "Directory product images are resolved against")]
    pub images_dir: Option<PathBuf>,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[arg(long, global = true, help = "Write logs to this file (browse discards logs otherwise)")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive catalog view (default)
    Browse {
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Print the products matching a filter and exit
    List {
        #[command(flatten)]
        filter: FilterArgs,

        #[arg(long, default_value = "plain")]
        format: OutputFormat,
    },
}

#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    #[arg(long, help = "All, Vegetables, Meat or Soup (case-insensitive)")]
    pub category: Option<Category>,

    #[arg(long, help = "Case-insensitive substring of the product name")]
    pub search: Option<String>,
}

impl FilterArgs {
    pub fn to_selection(&self) -> Selection {
        Selection::new(
            self.category.unwrap_or_default(),
            self.search.clone().unwrap_or_default(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_args_default_selection() {
        let selection = FilterArgs::default().to_selection();
        assert!(selection.is_unfiltered());
    }

    #[test]
    fn test_parse_list_filters() {
        let cli = Cli::try_parse_from([
            "canstore",
            "list",
            "--category",
            "meat",
            "--search",
            "Spam",
        ])
        .unwrap();

        let Some(Commands::List { filter, format }) = cli.command else {
            panic!("expected list command");
        };
        assert_eq!(filter.to_selection(), Selection::new(Category::Meat, "Spam"));
        assert_eq!(format, OutputFormat::Plain);
    }

    #[test]
    fn test_parse_rejects_unknown_category() {
        let result = Cli::try_parse_from(["canstore", "list", "--category", "fish"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "canstore",
            "list",
            "--catalog",
            "store.json",
            "--format",
            "json",
        ])
        .unwrap();
        assert_eq!(cli.catalog, Some(PathBuf::from("store.json")));
        assert!(matches!(
            cli.command,
            Some(Commands::List {
                format: OutputFormat::Json,
                ..
            })
        ));
    }

    #[test]
    fn test_format_is_only_accepted_by_list() {
        let browse = Cli::try_parse_from(["canstore", "browse", "--format", "json"]);
        assert!(browse.is_err());

        let bare = Cli::try_parse_from(["canstore", "--format", "json"]);
        assert!(bare.is_err());
    }
}
