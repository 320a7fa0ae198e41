use anyhow::{Context, Result};
use clap::Parser;
use tempsort::*;

fn main() -> Result<()> {
    let mut config = Config::parse();
    if let Some(path) = config.config_file.take() {
        config = Config::from_file(&path)
            .with_context(|| format!("Failed to load config {}", path.display()))?;
    }

    env_logger::builder()
        .filter_level(config.log_level())
        .parse_default_env()
        .init();

    config.validate()?;

    let comparison = run(&config)?;

    let report = render_report(&comparison, !config.timings_only);
    print!("{}", report);

    write_outputs(&config, &report, &comparison)?;

    Ok(())
}
