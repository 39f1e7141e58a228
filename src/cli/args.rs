//! CLI argument definitions
//!
//! Global CLI options and configuration merging logic.

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::{
    Config, ConfigColorMode, ConfigFormat, ConfigMalformedPolicy, ConfigMondayPolicy,
    ConfigSortOrder,
};

use super::commands::Commands;

#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq)]
pub(crate) enum SortOrder {
    /// Oldest first (default)
    #[default]
    Asc,
    /// Newest first
    Desc,
}

#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq)]
pub(crate) enum ColorMode {
    /// Auto-detect based on terminal (default)
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Which Monday closes the window when run Tuesday through Friday
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq)]
pub(crate) enum MondayPolicy {
    /// The Monday that just passed (default)
    #[default]
    Past,
    /// The Monday coming up
    Next,
}

/// What to do with a dated line that has no "artist - title" hyphen
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq)]
pub(crate) enum MalformedPolicy {
    /// Abort the run (default)
    #[default]
    Fail,
    /// Warn on stderr and drop the line
    Skip,
}

#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq)]
pub(crate) enum OutputFormat {
    /// Terminal table (default)
    #[default]
    Table,
    /// JSON array of days
    Json,
    /// One row per release
    Csv,
    /// HTML message body for mailing
    Html,
}

#[derive(Parser)]
#[command(name = "relcal")]
#[command(about = "Last week's album releases from a monthly release calendar", version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Option<Commands>,

    /// Reference date (YYYYMMDD or YYYY-MM-DD), defaults to today
    #[arg(short, long, global = true)]
    pub(crate) date: Option<String>,

    /// Direction of the window-end Monday for Tuesday-Friday reference dates
    #[arg(long, global = true, value_enum, default_value = "past")]
    pub(crate) monday: MondayPolicy,

    /// Calendar page URL; {month} and {year} are substituted
    #[arg(long, global = true, value_name = "URL")]
    pub(crate) url_template: Option<String>,

    /// Read <month>.html pages from this directory instead of fetching
    #[arg(long, global = true, value_name = "DIR")]
    pub(crate) source_dir: Option<PathBuf>,

    /// Handling of release lines without an artist/title separator
    #[arg(long, global = true, value_enum, default_value = "fail")]
    pub(crate) on_malformed: MalformedPolicy,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value = "table")]
    pub(crate) format: OutputFormat,

    /// Output as JSON (shorthand for --format=json)
    #[arg(short, long, global = true)]
    pub(crate) json: bool,

    /// Write output to a file instead of stdout
    #[arg(short = 'O', long, global = true, value_name = "FILE")]
    pub(crate) output: Option<PathBuf>,

    /// Sort order for dates
    #[arg(short, long, global = true, value_enum, default_value = "asc")]
    pub(crate) order: SortOrder,

    /// Color output mode
    #[arg(long, global = true, value_enum, default_value = "auto")]
    pub(crate) color: ColorMode,

    /// Disable colored output (shorthand for --color=never)
    #[arg(long, global = true)]
    pub(crate) no_color: bool,

    /// Enable debug output (show processing details)
    #[arg(long, global = true)]
    pub(crate) debug: bool,

    /// Timezone used to determine today (e.g., "UTC", "America/New_York")
    #[arg(long, global = true, value_name = "TZ")]
    pub(crate) timezone: Option<String>,
}

impl Cli {
    /// Merge config file values into CLI (CLI args take precedence)
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        // For boolean flags, config only applies if CLI is false (default)
        if !self.no_color && config.no_color {
            self.no_color = true;
        }
        if !self.debug && config.debug {
            self.debug = true;
        }

        // For enum values, config only applies while CLI is at its default
        if let Some(order) = config.order
            && self.order == SortOrder::Asc
        {
            self.order = match order {
                ConfigSortOrder::Asc => SortOrder::Asc,
                ConfigSortOrder::Desc => SortOrder::Desc,
            };
        }

        if let Some(color) = config.color
            && self.color == ColorMode::Auto
        {
            self.color = match color {
                ConfigColorMode::Auto => ColorMode::Auto,
                ConfigColorMode::Always => ColorMode::Always,
                ConfigColorMode::Never => ColorMode::Never,
            };
        }

        if let Some(monday) = config.monday
            && self.monday == MondayPolicy::Past
        {
            self.monday = match monday {
                ConfigMondayPolicy::Past => MondayPolicy::Past,
                ConfigMondayPolicy::Next => MondayPolicy::Next,
            };
        }

        if let Some(policy) = config.on_malformed
            && self.on_malformed == MalformedPolicy::Fail
        {
            self.on_malformed = match policy {
                ConfigMalformedPolicy::Fail => MalformedPolicy::Fail,
                ConfigMalformedPolicy::Skip => MalformedPolicy::Skip,
            };
        }

        if let Some(format) = config.format
            && self.format == OutputFormat::Table
            && !self.json
        {
            self.format = match format {
                ConfigFormat::Table => OutputFormat::Table,
                ConfigFormat::Json => OutputFormat::Json,
                ConfigFormat::Csv => OutputFormat::Csv,
                ConfigFormat::Html => OutputFormat::Html,
            };
        }

        // String options: only apply if CLI didn't set them
        if self.url_template.is_none() {
            self.url_template = config.url_template.clone();
        }
        if self.source_dir.is_none() {
            self.source_dir = config.source_dir.clone();
        }
        if self.timezone.is_none() {
            self.timezone = config.timezone.clone();
        }

        self
    }

    pub(crate) fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            self.format
        }
    }

    /// No progress lines for non-table formats or file output
    pub(crate) fn is_quiet(&self) -> bool {
        self.output_format() != OutputFormat::Table || self.output.is_some()
    }

    pub(crate) fn use_color(&self) -> bool {
        if self.no_color || self.output.is_some() {
            return false;
        }
        match self.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => std::io::stdout().is_terminal(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["relcal"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn defaults() {
        let cli = parse(&[]);
        assert!(cli.command.is_none());
        assert_eq!(cli.monday, MondayPolicy::Past);
        assert_eq!(cli.on_malformed, MalformedPolicy::Fail);
        assert_eq!(cli.output_format(), OutputFormat::Table);
        assert!(!cli.is_quiet());
    }

    #[test]
    fn json_shorthand_overrides_format() {
        let cli = parse(&["--json", "--format", "csv"]);
        assert_eq!(cli.output_format(), OutputFormat::Json);
        assert!(cli.is_quiet());
    }

    #[test]
    fn config_fills_unset_values() {
        let config: Config = toml::from_str(
            r#"
            monday = "next"
            on_malformed = "skip"
            format = "html"
            order = "desc"
            url_template = "http://localhost/{month}"
            timezone = "UTC"
            "#,
        )
        .unwrap();
        let cli = parse(&[]).with_config(&config);
        assert_eq!(cli.monday, MondayPolicy::Next);
        assert_eq!(cli.on_malformed, MalformedPolicy::Skip);
        assert_eq!(cli.output_format(), OutputFormat::Html);
        assert_eq!(cli.order, SortOrder::Desc);
        assert_eq!(cli.url_template.as_deref(), Some("http://localhost/{month}"));
        assert_eq!(cli.timezone.as_deref(), Some("UTC"));
    }

    #[test]
    fn cli_values_win_over_config() {
        let config: Config = toml::from_str(
            r#"
            format = "html"
            timezone = "UTC"
            "#,
        )
        .unwrap();
        let cli = parse(&["--json", "--timezone", "Asia/Tokyo"]).with_config(&config);
        assert_eq!(cli.output_format(), OutputFormat::Json);
        assert_eq!(cli.timezone.as_deref(), Some("Asia/Tokyo"));
    }

    #[test]
    fn file_output_disables_color() {
        let cli = parse(&["--color", "always", "--output", "digest.html"]);
        assert!(!cli.use_color());
        assert!(cli.is_quiet());
    }
}
