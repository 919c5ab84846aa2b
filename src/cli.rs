//! Command line front end.

use crate::api::{start_server, AppState};
use crate::config::Config;
use crate::output::{print_csv, print_error, print_facts};
use crate::processing::PrefixInput;
use crate::store::ProjectStore;
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::error::Error;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "network-planner")]
#[command(about = "Plan small networks and calculate IPv4 subnets.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the planner HTTP API
    #[command(alias = "s")]
    Serve {
        /// Port to listen on, overrides PORT
        #[arg(long)]
        port: Option<u16>,
        /// Store file, overrides NETPLAN_STORE
        #[arg(long)]
        store: Option<PathBuf>,
    },
    /// Calculate network, broadcast and host range of IPv4 networks
    #[command(alias = "c")]
    Calc {
        /// Networks as a.b.c.d or a.b.c.d/prefix
        #[arg(required = true)]
        networks: Vec<String>,
        /// Prefix length or dotted mask for networks without one
        #[arg(short, long)]
        prefix: Option<String>,
        /// Print a CSV table instead of blocks
        #[arg(long)]
        csv: bool,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

pub async fn run(commands: CommandLine) -> Result<(), Box<dyn Error>> {
    match commands.command {
        Commands::Serve { port, store } => {
            let mut config = Config::from_env();
            if let Some(port) = port {
                config.port = port;
            }
            if let Some(store) = store {
                config.store_file = store;
            }
            serve(config).await
        }
        Commands::Calc {
            networks,
            prefix,
            csv,
        } => calc(&networks, prefix.map(PrefixInput::from), csv),
    }
}

async fn serve(config: Config) -> Result<(), Box<dyn Error>> {
    log::info!("#Start serve() {config:?}");
    let store = ProjectStore::open(&config.store_file)?;
    let state = Arc::new(AppState::new(store));
    start_server(state, &config).await?;
    Ok(())
}

fn calc(networks: &[String], prefix: Option<PrefixInput>, csv: bool) -> Result<(), Box<dyn Error>> {
    let rows = crate::calculate_all(networks, prefix);
    let failed = rows.iter().filter(|(_, r)| r.is_err()).count();

    if csv {
        print_csv(&rows);
    } else {
        for (spec, result) in &rows {
            match result {
                Ok(facts) => print_facts(spec, facts),
                Err(e) => print_error(spec, e),
            }
        }
    }

    if failed > 0 {
        log::warn!("{} {failed} of {} inputs", "rejected".on_red(), rows.len());
        return Err(format!("{failed} of {} inputs were invalid", rows.len()).into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_calc() {
        let cli = CommandLine::try_parse_from([
            "network-planner",
            "calc",
            "10.0.0.1",
            "192.168.1.0/24",
            "--prefix",
            "255.0.0.0",
            "--csv",
        ])
        .unwrap();
        match cli.command {
            Commands::Calc {
                networks,
                prefix,
                csv,
            } => {
                assert_eq!(networks, vec!["10.0.0.1", "192.168.1.0/24"]);
                assert_eq!(prefix.as_deref(), Some("255.0.0.0"));
                assert!(csv);
            }
            Commands::Serve { .. } => panic!("expected calc"),
        }
    }

    #[test]
    fn test_parse_serve_alias() {
        let cli =
            CommandLine::try_parse_from(["network-planner", "s", "--port", "8080"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Serve {
                port: Some(8080),
                store: None
            }
        ));
    }

    #[test]
    fn test_calc_requires_network() {
        assert!(CommandLine::try_parse_from(["network-planner", "calc"]).is_err());
    }

    #[test]
    fn test_calc_reports_failures() {
        let ok = calc(&["10.0.0.0/8".to_string()], None, false);
        assert!(ok.is_ok());
        let bad = calc(
            &["10.0.0.0/8".to_string(), "10.0.0.0".to_string()],
            None,
            true,
        );
        assert_eq!(bad.unwrap_err().to_string(), "1 of 2 inputs were invalid");
    }
}
