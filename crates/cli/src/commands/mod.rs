pub mod build;
pub mod init;
pub mod preview;
pub mod routes;
pub mod validate;

use anyhow::{Context, Result};
use site_kit_core::config::SITE_TOML;
use site_kit_core::{Site, parse_site_toml};
use std::path::Path;

/// Load site.toml from a site directory, with hints for the common mistakes
pub fn load_site(path: &Path) -> Result<Site> {
    if !path.exists() {
        anyhow::bail!(
            "Site directory does not exist: {}\nRun 'site-kit init {}' first",
            path.display(),
            path.display()
        );
    }

    let config_path = path.join(SITE_TOML);
    if !config_path.exists() {
        anyhow::bail!(
            "{} not found in {}\nRun 'site-kit init {}' first",
            SITE_TOML,
            path.display(),
            path.display()
        );
    }

    parse_site_toml(&config_path).with_context(|| format!("Failed to parse {}", SITE_TOML))
}
