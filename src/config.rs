use anyhow::Result;
use clap::{ArgAction, Parser};
use log::LevelFilter;
use serde::Deserialize;
use std::path::PathBuf;

/// Configuration for a sort comparison run
#[derive(Debug, Clone, Deserialize, Parser)]
#[command(name = "tempsort")]
#[command(about = "Extract timestamped readings from a text file and compare quick sort with merge sort")]
pub struct Config {
    /// Path to the data file holding "timestamp": value pairs
    #[arg(value_name = "DATA_FILE", default_value = "tempm.txt")]
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    /// Also write the console report to this file
    #[arg(long, value_name = "PATH")]
    #[serde(default)]
    pub output: Option<PathBuf>,

    /// Write a JSON timing summary to this file
    #[arg(long, value_name = "PATH")]
    #[serde(default)]
    pub summary: Option<PathBuf>,

    /// Print only the timings, not the sorted listings
    #[arg(long)]
    #[serde(default)]
    pub timings_only: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    #[serde(default)]
    pub verbose: u8,

    /// Read all settings from a TOML file instead of the command line
    #[arg(long, value_name = "PATH")]
    #[serde(skip)]
    pub config_file: Option<PathBuf>,
}

fn default_data_file() -> PathBuf {
    PathBuf::from("tempm.txt")
}

impl Config {
    /// Validate configuration parameters
    pub fn validate(&self) -> Result<()> {
        if self.data_file.as_os_str().is_empty() {
            anyhow::bail!("data_file must not be empty");
        }

        if let (Some(output), Some(summary)) = (&self.output, &self.summary) {
            if output == summary {
                anyhow::bail!(
                    "--output and --summary must differ, both are {}",
                    output.display()
                );
            }
        }

        Ok(())
    }

    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Log level selected by `--verbose`
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}
