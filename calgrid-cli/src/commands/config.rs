use anyhow::Result;
use calgrid_core::config::CalGridConfig;
use owo_colors::OwoColorize;

pub fn run(config: &CalGridConfig) -> Result<()> {
    let config_path = CalGridConfig::config_path()?;
    let store = config.open_store();

    println!("{}", "Paths".bold());
    println!("  Config:  {}", config_path.display());
    println!("  Store:   {} (slot \"{}\")", store.path().display(), store.slot());

    println!();
    println!("{}", "Effective settings".bold());
    for line in config.to_toml()?.lines() {
        println!("  {}", line);
    }

    Ok(())
}
