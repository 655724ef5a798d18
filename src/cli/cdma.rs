//! CDMA CLI arguments

use clap::Args;

/// CDMA options
#[derive(Args, Debug, Clone, Default)]
#[command(next_help_heading = "CDMA options")]
pub struct CdmaArgs {
    /// Provision the modem to use with a given carrier using OTA settings
    #[arg(long = "cdma-activate", value_name = "CARRIER")]
    pub activate: Option<String>,
}

impl CdmaArgs {
    /// Number of CDMA actions present on the command line
    pub fn requested_actions(&self) -> usize {
        usize::from(self.activate.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_actions_by_default() {
        assert_eq!(CdmaArgs::default().requested_actions(), 0);
    }

    #[test]
    fn test_activate_counts_as_action() {
        let args = CdmaArgs {
            activate: Some("Sprint".to_string()),
        };
        assert_eq!(args.requested_actions(), 1);
    }
}
