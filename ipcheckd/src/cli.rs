//! CLI argument definitions

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "ipcheckd")]
#[command(about = "IPChecker HTTP service: classifies comma-separated IP address lists")]
#[command(version)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Address to bind to
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on (overrides PORT)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
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
    fn test_parse_flags() {
        let cli = Cli::parse_from(["ipcheckd", "-c", "svc.yaml", "--host", "127.0.0.1", "-p", "8081", "-vv"]);
        assert_eq!(cli.config, Some(PathBuf::from("svc.yaml")));
        assert_eq!(cli.host.as_deref(), Some("127.0.0.1"));
        assert_eq!(cli.port, Some(8081));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_parse_defaults() {
        let cli = Cli::parse_from(["ipcheckd"]);
        assert!(cli.config.is_none());
        assert!(cli.port.is_none());
        assert_eq!(cli.verbose, 0);
    }
}
