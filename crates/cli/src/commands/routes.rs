use anyhow::Result;
use site_kit_generator::site_routes;
use std::path::PathBuf;

use super::load_site;

/// Print every URL the built site serves, in build order
pub async fn run(path: PathBuf) -> Result<()> {
    let site = load_site(&path)?;

    for route in site_routes(&site) {
        println!("{}", route.url());
    }

    Ok(())
}
