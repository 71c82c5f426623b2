use clap::error::ErrorKind;
use clap::{ArgAction, Parser};
use farbox2hugo::config::{DEFAULT_OUTPUT_DIR, DEFAULT_SOURCE_DIR};
use farbox2hugo::ConvertConfig;
use std::path::PathBuf;

/// Convert Farbox content into Hugo markdown
#[derive(Parser, Debug)]
#[command(name = "farbox2hugo", version, about, long_about = None)]
pub struct Cli {
    /// Directory holding the Farbox content files
    #[arg(short = 'f', long = "farbox", default_value = DEFAULT_SOURCE_DIR)]
    pub farbox: PathBuf,

    /// Directory to write the Hugo markdown files to
    #[arg(short = 'o', long = "output", default_value = DEFAULT_OUTPUT_DIR)]
    pub output: PathBuf,

    /// Fail instead of creating a missing output directory
    #[arg(long)]
    pub no_create: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn config(&self) -> ConvertConfig {
        ConvertConfig::new(&self.farbox, &self.output).with_create_output_dir(!self.no_create)
    }

    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}

/// `--help` and `--version` surface as clap errors but are not failures
pub fn is_informational(err: &clap::Error) -> bool {
    matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["farbox2hugo"]).unwrap();
        assert_eq!(cli.config(), ConvertConfig::default());
        assert_eq!(cli.log_filter(), "warn");
    }

    #[test]
    fn test_short_flags() {
        let cli = Cli::try_parse_from(["farbox2hugo", "-f", "in", "-o", "out", "-vv", "--no-create"])
            .unwrap();
        let config = cli.config();
        assert_eq!(config.source_dir, PathBuf::from("in"));
        assert_eq!(config.output_dir, PathBuf::from("out"));
        assert!(!config.create_output_dir);
        assert_eq!(cli.log_filter(), "debug");
    }

    #[test]
    fn test_help_and_version_are_informational() {
        let help = Cli::try_parse_from(["farbox2hugo", "--help"]).unwrap_err();
        assert!(is_informational(&help));
        let version = Cli::try_parse_from(["farbox2hugo", "--version"]).unwrap_err();
        assert!(is_informational(&version));
    }

    #[test]
    fn test_unknown_flag_is_a_failure() {
        let err = Cli::try_parse_from(["farbox2hugo", "--bogus"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
        assert!(!is_informational(&err));
    }
}
