use anyhow::{bail, Result};
use tracing::info;

use marquee_core::AppConfig;

pub fn run(config: &AppConfig, init: bool) -> Result<()> {
    if !init {
        print!("{}", config.to_toml_string()?);
        return Ok(());
    }

    let path = AppConfig::config_path();
    if path.exists() {
        bail!("Config file already exists: {}", path.display());
    }

    config.save()?;
    info!(path = %path.display(), "Wrote config file");
    println!("Wrote {}", path.display());

    Ok(())
}
