use crate::config::Config;
use crate::report::TimingSummary;
use crate::Comparison;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Write the rendered report and the JSON summary wherever the config asks for them
pub fn write_outputs(config: &Config, report: &str, comparison: &Comparison) -> Result<()> {
    if let Some(path) = &config.output {
        save(path, report)
            .with_context(|| format!("Failed to write report to {}", path.display()))?;
    }

    if let Some(path) = &config.summary {
        let json = TimingSummary::from_comparison(comparison).to_json()?;
        save(path, &json)
            .with_context(|| format!("Failed to write summary to {}", path.display()))?;
    }

    Ok(())
}

fn save(path: &Path, text: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, text)?;
    log::info!("Wrote {} bytes to {}", text.len(), path.display());
    Ok(())
}
