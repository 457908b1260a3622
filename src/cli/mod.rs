//! Command-line interface.

pub mod commands;

use crate::config::Config;
use crate::facts::Tab;
use crate::output::OutputMode;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "device-inspector")]
#[command(version, about = "Inspect device hardware, network, battery and sensor facts")]
pub struct Cli {
    /// Read configuration from this file instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Plain output without colors, spinners or hints
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print device facts, grouped by tab
    Show {
        /// Only print one tab (system, hardware, network, battery, sensors)
        #[arg(long, value_parser = parse_tab)]
        tab: Option<Tab>,

        /// Output the fact cards as JSON
        #[arg(long)]
        json: bool,

        /// Output the unformatted probe snapshot as JSON
        #[arg(long, conflicts_with_all = ["json", "tab"])]
        raw: bool,

        /// Skip the public IP lookup
        #[arg(long)]
        no_public_ip: bool,

        /// Public IP endpoint (overrides config)
        #[arg(long, value_name = "URL")]
        public_ip_url: Option<String>,

        /// Request timeout in seconds (overrides config)
        #[arg(long, value_name = "SECS")]
        timeout: Option<u64>,
    },

    /// Compare the latest published release with this version
    CheckUpdate {
        /// Release metadata endpoint (overrides config)
        #[arg(long, value_name = "URL")]
        url: Option<String>,

        /// Request timeout in seconds (overrides config)
        #[arg(long, value_name = "SECS")]
        timeout: Option<u64>,

        /// Output the outcome as JSON
        #[arg(long)]
        json: bool,
    },

    /// Look up the public IP address
    PublicIp {
        /// Public IP endpoint (overrides config)
        #[arg(long, value_name = "URL")]
        url: Option<String>,

        /// Request timeout in seconds (overrides config)
        #[arg(long, value_name = "SECS")]
        timeout: Option<u64>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Open the interactive view (default)
    Tui,

    /// Show the effective configuration, or write a default config file
    Config {
        /// Write the default configuration to the config path
        #[arg(long)]
        init: bool,

        /// Overwrite an existing file with --init
        #[arg(long, requires = "init")]
        force: bool,
    },
}

/// Parse a tab name, case-insensitively.
pub fn parse_tab(value: &str) -> Result<Tab, String> {
    Tab::ALL
        .iter()
        .copied()
        .find(|tab| tab.title().eq_ignore_ascii_case(value.trim()))
        .ok_or_else(|| {
            let names: Vec<String> = Tab::ALL.iter().map(|t| t.title().to_lowercase()).collect();
            format!("unknown tab '{}' (expected one of: {})", value, names.join(", "))
        })
}

impl Cli {
    pub fn run(self) -> anyhow::Result<ExitCode> {
        let output_mode = if self.quiet {
            OutputMode::Quiet
        } else {
            OutputMode::Normal
        };
        let mut config = Config::load(self.config.as_deref());

        let result = match self.command.unwrap_or(Commands::Tui) {
            Commands::Show {
                tab,
                json,
                raw,
                no_public_ip,
                public_ip_url,
                timeout,
            } => {
                config.apply_cli_overrides(None, public_ip_url, timeout);
                commands::show_command::handle_show(
                    &config,
                    tab,
                    json,
                    raw,
                    no_public_ip,
                    output_mode,
                )
            }
            Commands::CheckUpdate { url, timeout, json } => {
                config.apply_cli_overrides(url, None, timeout);
                return commands::update_command::handle_check_update(&config, json, output_mode);
            }
            Commands::PublicIp { url, timeout, json } => {
                config.apply_cli_overrides(None, url, timeout);
                commands::ip_command::handle_public_ip(&config, json, output_mode)
            }
            Commands::Tui => crate::tui::run(&config),
            Commands::Config { init, force } => commands::config_command::handle_config(
                &config,
                self.config.as_deref(),
                init,
                force,
                output_mode,
            ),
        };
        result.map(|()| ExitCode::SUCCESS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tab() {
        assert_eq!(parse_tab("network"), Ok(Tab::Network));
        assert_eq!(parse_tab("Battery"), Ok(Tab::Battery));
        let err = parse_tab("gpu").unwrap_err();
        assert!(err.contains("system, hardware, network, battery, sensors"));
    }

    #[test]
    fn test_default_command_is_tui() {
        let cli = Cli::try_parse_from(["device-inspector"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.quiet);
    }

    #[test]
    fn test_show_arguments() {
        let cli = Cli::try_parse_from([
            "device-inspector",
            "show",
            "--tab",
            "sensors",
            "--json",
            "--no-public-ip",
            "-q",
        ])
        .unwrap();
        assert!(cli.quiet);
        match cli.command {
            Some(Commands::Show {
                tab,
                json,
                no_public_ip,
                ..
            }) => {
                assert_eq!(tab, Some(Tab::Sensors));
                assert!(json);
                assert!(no_public_ip);
            }
            _ => panic!("expected show"),
        }
    }

    #[test]
    fn test_raw_conflicts_with_json() {
        assert!(Cli::try_parse_from(["device-inspector", "show", "--raw", "--json"]).is_err());
    }

    #[test]
    fn test_force_requires_init() {
        assert!(Cli::try_parse_from(["device-inspector", "config", "--force"]).is_err());
        assert!(Cli::try_parse_from(["device-inspector", "config", "--init", "--force"]).is_ok());
    }
}
