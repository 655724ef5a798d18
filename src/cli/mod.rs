//! CLI argument parsing

mod cdma;

use clap::Parser;

use crate::config::defaults;

pub use cdma::CdmaArgs;

/// mmcli-cdma CLI
#[derive(Parser, Debug)]
#[command(name = "mmcli-cdma")]
#[command(version)]
#[command(about = "Control CDMA modems through ModemManager", long_about = None)]
#[command(after_help = "EXAMPLES:\n  \
        mmcli-cdma -m 0 --cdma-activate=Verizon\n  \
        mmcli-cdma -m any --cdma-activate=Sprint --async\n  \
        mmcli-cdma -m /org/freedesktop/ModemManager1/Modem/2 --cdma-activate=Verizon")]
pub struct Cli {
    /// Specify modem by path, index or 'any'
    #[arg(short = 'm', long, value_name = "PATH|INDEX|any")]
    pub modem: Option<String>,

    /// Use asynchronous methods
    #[arg(short = 'a', long = "async", default_value_t = false)]
    pub async_mode: bool,

    /// Timeout for bus method calls, in seconds
    #[arg(long, value_name = "SECONDS", default_value_t = defaults::TIMEOUT_SECS)]
    pub timeout: u64,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, default_value = defaults::LOG_LEVEL)]
    pub log_level: String,

    /// Run action with verbose logs (same as --log-level debug)
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,

    /// Batch mode: no progress spinner
    #[arg(short, long, default_value_t = false)]
    pub batch: bool,

    #[command(flatten)]
    pub cdma: CdmaArgs,
}

impl Cli {
    /// Log filter to initialise the logger with
    pub fn effective_log_level(&self) -> &str {
        if self.verbose {
            "debug"
        } else {
            &self.log_level
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_default_values() {
        let cli = Cli::parse_from(["mmcli-cdma"]);
        assert!(cli.modem.is_none());
        assert!(!cli.async_mode);
        assert!(!cli.verbose);
        assert!(!cli.batch);
        assert_eq!(cli.timeout, defaults::TIMEOUT_SECS);
        assert_eq!(cli.log_level, defaults::LOG_LEVEL);
        assert!(cli.cdma.activate.is_none());
    }

    #[test]
    fn test_cli_activate_with_equals() {
        let cli = Cli::parse_from(["mmcli-cdma", "-m", "0", "--cdma-activate=Verizon"]);
        assert_eq!(cli.modem.as_deref(), Some("0"));
        assert_eq!(cli.cdma.activate.as_deref(), Some("Verizon"));
    }

    #[test]
    fn test_cli_async_and_timeout() {
        let cli = Cli::parse_from([
            "mmcli-cdma",
            "--async",
            "--timeout",
            "30",
            "--cdma-activate",
            "Sprint",
        ]);
        assert!(cli.async_mode);
        assert_eq!(cli.timeout, 30);
    }

    #[test]
    fn test_cli_short_async() {
        let cli = Cli::parse_from(["mmcli-cdma", "-a"]);
        assert!(cli.async_mode);
    }

    #[test]
    fn test_verbose_overrides_log_level() {
        let cli = Cli::parse_from(["mmcli-cdma", "-l", "error", "-v"]);
        assert_eq!(cli.effective_log_level(), "debug");
    }

    #[test]
    fn test_log_level_used_without_verbose() {
        let cli = Cli::parse_from(["mmcli-cdma", "-l", "info"]);
        assert_eq!(cli.effective_log_level(), "info");
    }

    #[test]
    fn test_repeated_activate_rejected() {
        let result = Cli::try_parse_from([
            "mmcli-cdma",
            "--cdma-activate=Verizon",
            "--cdma-activate=Sprint",
        ]);
        assert!(result.is_err());
    }
}
