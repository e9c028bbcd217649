//! Command-line argument definitions.

use crate::config::{DEFAULT_IP_ADDRESS, DEFAULT_PREFIX};
use crate::output::OutputFormat;
use clap::Parser;

/// Calculate IPv4 subnet facts from an address and a CIDR prefix.
#[derive(Debug, Parser)]
#[command(name = "subnet-calc")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "IPv4 subnet calculator")]
pub struct Cli {
    /// IPv4 address in dotted-decimal notation
    #[arg(default_value = DEFAULT_IP_ADDRESS)]
    pub ip_address: String,

    /// Prefix length, written as /N or N
    #[arg(default_value = DEFAULT_PREFIX)]
    pub prefix: String,

    /// Output format, overrides SUBNET_CALC_FORMAT
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["subnet-calc"]).unwrap();
        assert_eq!(cli.ip_address, "10.21.150.251");
        assert_eq!(cli.prefix, "/24");
        assert_eq!(cli.format, None);
    }

    #[test]
    fn test_cli_args() {
        let cli =
            Cli::try_parse_from(["subnet-calc", "192.168.1.10", "/30", "--format", "csv"]).unwrap();
        assert_eq!(cli.ip_address, "192.168.1.10");
        assert_eq!(cli.prefix, "/30");
        assert_eq!(cli.format, Some(OutputFormat::Csv));

        let cli = Cli::try_parse_from(["subnet-calc", "8.8.8.8", "32", "-f", "json"]).unwrap();
        assert_eq!(cli.prefix, "32");
        assert_eq!(cli.format, Some(OutputFormat::Json));
    }

    #[test]
    fn test_cli_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["subnet-calc", "-f", "xml"]).is_err());
    }
}
