use anyhow::Result;

use snaphead_core::AppConfig;

pub fn run(config: &AppConfig, write: bool) -> Result<()> {
    print!("{}", config.to_toml()?);

    if write {
        config.save()?;
        eprintln!("\nWrote {}", AppConfig::config_path().display());
    }

    Ok(())
}
