//! FILENAME: app/src/cli.rs
//! PURPOSE: Command line arguments of the ratio table generator.

use std::path::PathBuf;

use clap::Parser;
use render::OutputFormat;

/// Generates the ratio tables of the factory game wiki.
#[derive(Debug, Parser)]
#[command(name = "ratio-tables", version, about)]
pub struct Cli {
    /// Game data file (JSON). Uses the bundled vanilla data when omitted.
    #[arg(short, long, env = "RATIO_TABLES_DATA")]
    pub data: Option<PathBuf>,

    /// Table parameters (JSON). Missing fields keep their defaults.
    #[arg(short, long, env = "RATIO_TABLES_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format: html, text or json.
    #[arg(short, long, default_value_t = OutputFormat::Html)]
    pub format: OutputFormat,

    /// Write the document here instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Only build this table (repeatable).
    #[arg(short = 't', long = "table", value_name = "ID")]
    pub tables: Vec<String>,

    /// Print the available table ids and exit.
    #[arg(long)]
    pub list: bool,

    /// More log output (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["ratio-tables"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Html);
        assert!(cli.tables.is_empty());
        assert!(!cli.list);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_repeated_tables_and_verbosity() {
        let cli = Cli::try_parse_from([
            "ratio-tables",
            "-f",
            "text",
            "-t",
            "crafting",
            "--table",
            "storage",
            "-vv",
        ])
        .unwrap();
        assert_eq!(cli.format, OutputFormat::Text);
        assert_eq!(cli.tables, vec!["crafting", "storage"]);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["ratio-tables", "-f", "pdf"]).is_err());
    }

    #[test]
    fn test_command_is_well_formed() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
