//! Running maximum and test property name checks.
//!
//! `leafops running-max` prints the prefix maximum of an integer sequence;
//! `leafops check-name` rejects names a test report reserves for itself.
//! Behavior is tuned through `.leafops/config.toml`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{debug, info};

use leafops::check::{NamePolicy, check_names};
use leafops::exit_codes;
use leafops::io::config::{
    DEFAULT_CONFIG_PATH, LeafopsConfig, OutputFormat, init_config, load_config,
};
use leafops::io::input::read_sequence;
use leafops::logging;
use leafops::scan::{ScanOutcome, scan_sequence};

#[derive(Parser)]
#[command(
    name = "leafops",
    version,
    about = "Running maximum and test property name checks"
)]
struct Cli {
    /// Config file (default: `.leafops/config.toml`).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write the default config file if missing.
    Init {
        /// Overwrite an existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Print the running maximum of an integer sequence.
    RunningMax {
        /// Input values.
        #[arg(allow_negative_numbers = true)]
        values: Vec<i64>,
        /// Read values from a file (`-` for stdin) instead of arguments.
        #[arg(long, conflicts_with = "values")]
        file: Option<PathBuf>,
        /// Only process the first N values.
        #[arg(long, allow_negative_numbers = true)]
        count: Option<i64>,
    },
    /// Check test property names against the reserved list.
    CheckName {
        #[arg(required = true)]
        names: Vec<String>,
    },
    /// Print the effective reserved name list.
    Reserved,
}

fn main() {
    logging::init();
    match run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(exit_codes::INVALID);
        }
    }
}

fn run() -> Result<i32> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if err.use_stderr() => {
            err.print().context("print usage error")?;
            return Ok(exit_codes::INVALID);
        }
        Err(err) => err.exit(),
    };
    let config_path = cli
        .config
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));
    match cli.command {
        Command::Init { force } => cmd_init(&config_path, force),
        Command::RunningMax {
            values,
            file,
            count,
        } => {
            let cfg = load(&config_path)?;
            cmd_running_max(&cfg, values, file.as_deref(), count)
        }
        Command::CheckName { names } => {
            let cfg = load(&config_path)?;
            cmd_check_name(&cfg, &names)
        }
        Command::Reserved => {
            let cfg = load(&config_path)?;
            cmd_reserved(&cfg)
        }
    }
}

fn load(path: &Path) -> Result<LeafopsConfig> {
    let cfg = load_config(path).context("load config")?;
    debug!(path = %path.display(), ?cfg, "config loaded");
    Ok(cfg)
}

fn cmd_init(path: &Path, force: bool) -> Result<i32> {
    if init_config(path, force)? {
        info!(path = %path.display(), "wrote default config");
        println!("init: wrote {}", path.display());
    } else {
        println!("init: kept existing {}", path.display());
    }
    Ok(exit_codes::OK)
}

fn cmd_running_max(
    cfg: &LeafopsConfig,
    values: Vec<i64>,
    file: Option<&Path>,
    count: Option<i64>,
) -> Result<i32> {
    let values = match file {
        Some(path) => read_sequence(path)?,
        None => values,
    };
    match scan_sequence(&values, count) {
        ScanOutcome::Computed(out) => {
            match cfg.output.format {
                OutputFormat::Text => println!("{}", join_values(&out)),
                OutputFormat::Json => print_json(&out)?,
            }
            Ok(exit_codes::OK)
        }
        ScanOutcome::Absent => {
            eprintln!(
                "running-max: no result (input has {} values, count {})",
                values.len(),
                count.map_or_else(|| "unset".to_string(), |count| count.to_string())
            );
            Ok(exit_codes::ABSENT)
        }
    }
}

fn cmd_check_name(cfg: &LeafopsConfig, names: &[String]) -> Result<i32> {
    let policy = NamePolicy::from_config(&cfg.property);
    let reports = check_names(&policy, names);
    match cfg.output.format {
        OutputFormat::Text => {
            for report in &reports {
                match &report.matched {
                    None => println!("accepted {}", report.name),
                    Some(matched) => println!("reserved {} (matches {})", report.name, matched),
                }
            }
        }
        OutputFormat::Json => print_json(&reports)?,
    }
    if reports.iter().all(|report| report.accepted) {
        Ok(exit_codes::OK)
    } else {
        Ok(exit_codes::REJECTED)
    }
}

fn cmd_reserved(cfg: &LeafopsConfig) -> Result<i32> {
    let policy = NamePolicy::from_config(&cfg.property);
    match cfg.output.format {
        OutputFormat::Text => {
            for name in policy.reserved() {
                println!("{}", name);
            }
        }
        OutputFormat::Json => print_json(&policy.reserved())?,
    }
    Ok(exit_codes::OK)
}

fn join_values(values: &[i64]) -> String {
    values
        .iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let payload = serde_json::to_string(value).context("serialize json")?;
    println!("{}", payload);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_init() {
        let cli = Cli::parse_from(["leafops", "init"]);
        assert!(matches!(cli.command, Command::Init { force: false }));
    }

    #[test]
    fn parse_init_force() {
        let cli = Cli::parse_from(["leafops", "init", "--force"]);
        assert!(matches!(cli.command, Command::Init { force: true }));
    }

    #[test]
    fn parse_running_max_with_negative_values() {
        let cli = Cli::parse_from(["leafops", "running-max", "3", "-1", "4"]);
        match cli.command {
            Command::RunningMax {
                values,
                file,
                count,
            } => {
                assert_eq!(values, vec![3, -1, 4]);
                assert!(file.is_none());
                assert!(count.is_none());
            }
            _ => panic!("expected running-max"),
        }
    }

    #[test]
    fn parse_running_max_file_conflicts_with_values() {
        let result = Cli::try_parse_from(["leafops", "running-max", "1", "--file", "values.txt"]);
        assert!(result.is_err());
    }

    #[test]
    fn parse_check_name_requires_names() {
        assert!(Cli::try_parse_from(["leafops", "check-name"]).is_err());
    }

    #[test]
    fn parse_global_config_after_subcommand() {
        let cli = Cli::parse_from(["leafops", "reserved", "--config", "custom.toml"]);
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
        assert!(matches!(cli.command, Command::Reserved));
    }

    #[test]
    fn join_values_space_separated() {
        assert_eq!(join_values(&[3, 3, -4]), "3 3 -4");
    }
}
