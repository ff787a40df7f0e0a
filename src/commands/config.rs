//! Config subcommands handler

use anyhow::Result;

use readalong::Config;

/// Show the effective configuration as TOML.
#[cfg(not(tarpaulin_include))]
pub fn handle_show(config: &Config) -> Result<()> {
    let toml_str = toml::to_string_pretty(config)?;
    print!("{}", toml_str);
    Ok(())
}

/// Print where the default config file is looked up.
#[cfg(not(tarpaulin_include))]
pub fn handle_path() -> Result<()> {
    let path = Config::config_path()?;
    println!("{}", path.display());
    Ok(())
}
