//! Config subcommands handler

use anyhow::Result;

use ansifence::config::docs::annotate_config;
use ansifence::theme::current_theme;
use ansifence::Config;

/// Show current configuration as TOML with inline documentation comments.
#[cfg(not(tarpaulin_include))]
pub fn handle_show() -> Result<()> {
    let config = Config::load()?;
    let toml_str = toml::to_string_pretty(&config)?;
    let theme = current_theme();
    println!("{}", theme.primary_text(&annotate_config(&toml_str)));
    Ok(())
}

/// Print where the config file is (or would be) stored.
pub fn handle_path() -> Result<()> {
    println!("{}", Config::config_path()?.display());
    Ok(())
}
