//! Config subcommands handler

use anyhow::{bail, Result};

use autocue::tui::current_theme;
use autocue::Config;

/// Show current configuration as TOML.
pub fn handle_show() -> Result<()> {
    let config = Config::load()?;
    let toml_str = toml::to_string_pretty(&config)?;
    let theme = current_theme();
    println!("{}", theme.primary_text(toml_str.trim_end()));
    Ok(())
}

/// Print the configuration file path.
pub fn handle_path() -> Result<()> {
    println!("{}", Config::config_path()?.display());
    Ok(())
}

/// Write the default configuration.
///
/// Refuses to replace an existing file unless `force` is set.
pub fn handle_init(force: bool) -> Result<()> {
    let path = Config::config_path()?;
    let theme = current_theme();

    if path.exists() && !force {
        bail!(
            "Config file {} already exists (use --force to overwrite)",
            path.display()
        );
    }

    Config::default().save_to(&path)?;
    println!(
        "{}",
        theme.success_text(&format!("Wrote {}", path.display()))
    );
    Ok(())
}
