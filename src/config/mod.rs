pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::app::render::OutputFormat;
#[cfg(feature = "cli")]
use crate::config::toml_config::AppConfig;
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "dognames", version)]
#[command(about = "Look up, summarise and invent dogs from the Zurich dog registry")]
pub struct CliConfig {
    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(short, long, global = true, help = "Path to a TOML configuration file")]
    pub config: Option<PathBuf>,

    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    #[arg(long, global = true, help = "Override the registry CSV URL")]
    pub dataset_url: Option<String>,

    #[arg(long, global = true, help = "Override the random media API URL")]
    pub media_url: Option<String>,

    #[arg(long, global = true, help = "HTTP timeout in seconds")]
    pub timeout: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List every dog registered under exactly this name
    Find {
        name: String,
        #[arg(short, long, value_parser = clap::value_parser!(i32).range(1900..=9999))]
        year: Option<i32>,
    },
    /// Shortest, longest and most common names
    Stats {
        #[arg(short, long, value_parser = clap::value_parser!(i32).range(1900..=9999))]
        year: Option<i32>,
    },
    /// Invent a dog and download a random picture of it
    Create {
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
        #[arg(short, long, value_parser = clap::value_parser!(i32).range(1900..=9999))]
        year: Option<i32>,
        #[arg(long, help = "Take name and birth year from the same registry entry")]
        same_record: bool,
    },
}

#[cfg(feature = "cli")]
impl Command {
    /// Requested year, or the current calendar year when none was given.
    pub fn year(&self) -> i32 {
        let requested = match self {
            Command::Find { year, .. } | Command::Stats { year } | Command::Create { year, .. } => {
                *year
            }
        };
        requested.unwrap_or_else(current_year)
    }
}

#[cfg(feature = "cli")]
pub fn current_year() -> i32 {
    use chrono::Datelike;
    chrono::Local::now().year()
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// File config (or defaults) with command line overrides applied on top.
    pub fn load_app_config(&self) -> crate::utils::error::Result<AppConfig> {
        let mut config = match &self.config {
            Some(path) => {
                tracing::debug!("Loading configuration from {}", path.display());
                AppConfig::from_file(path)?
            }
            None => AppConfig::default(),
        };

        if let Some(url) = &self.dataset_url {
            config.source.dataset_url = url.clone();
        }
        if let Some(url) = &self.media_url {
            config.media.api_url = url.clone();
        }
        if let Some(timeout) = self.timeout {
            config.http.timeout_seconds = timeout;
        }

        Ok(config)
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;
    use crate::domain::ports::ConfigProvider;
    use clap::error::ErrorKind;

    #[test]
    fn test_parse_find_with_year() {
        let cli = CliConfig::try_parse_from(["dognames", "find", "Rex", "-y", "2015"]).unwrap();

        match &cli.command {
            Command::Find { name, year } => {
                assert_eq!(name, "Rex");
                assert_eq!(*year, Some(2015));
            }
            other => panic!("unexpected command: {:?}", other),
        }
        assert_eq!(cli.command.year(), 2015);
        assert_eq!(cli.format, OutputFormat::Table);
    }

    #[test]
    fn test_year_defaults_to_current_year() {
        let cli = CliConfig::try_parse_from(["dognames", "stats"]).unwrap();
        assert_eq!(cli.command.year(), current_year());
    }

    #[test]
    fn test_non_numeric_year_is_usage_error() {
        let err = CliConfig::try_parse_from(["dognames", "stats", "--year", "twenty"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_out_of_range_year_is_rejected() {
        assert!(CliConfig::try_parse_from(["dognames", "stats", "-y", "99"]).is_err());
    }

    #[test]
    fn test_parse_create_options() {
        let cli = CliConfig::try_parse_from([
            "dognames",
            "--format",
            "json",
            "create",
            "-o",
            "pics",
            "--same-record",
        ])
        .unwrap();

        match &cli.command {
            Command::Create {
                output_dir,
                year,
                same_record,
            } => {
                assert_eq!(output_dir.as_deref(), Some(std::path::Path::new("pics")));
                assert_eq!(*year, None);
                assert!(*same_record);
            }
            other => panic!("unexpected command: {:?}", other),
        }
        assert_eq!(cli.format, OutputFormat::Json);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = CliConfig::try_parse_from(["dognames", "stats", "-v", "--timeout", "5"]).unwrap();
        assert!(cli.verbose);

        let config = cli.load_app_config().unwrap();
        assert_eq!(config.timeout_seconds(), 5);
    }

    #[test]
    fn test_url_overrides() {
        let cli = CliConfig::try_parse_from([
            "dognames",
            "--dataset-url",
            "http://localhost:1/dogs.csv",
            "--media-url",
            "http://localhost:1/woof.json",
            "find",
            "Rex",
        ])
        .unwrap();

        let config = cli.load_app_config().unwrap();
        assert_eq!(config.dataset_url(), "http://localhost:1/dogs.csv");
        assert_eq!(config.media_api_url(), "http://localhost:1/woof.json");
    }
}
