use anyhow::{Context, Result};
use site_kit_core::Site;
use site_kit_generator::{RenderOptions, generate_site};
use std::fs;
use std::path::{Path, PathBuf};

use super::load_site;

/// What a build wrote, for the summary line
#[derive(Debug, Default, PartialEq, Eq)]
pub struct BuildSummary {
    pub pages: usize,
    pub assets: usize,
    pub images: usize,
    pub missing_images: Vec<String>,
}

/// Build static site
pub async fn run(path: PathBuf, output: PathBuf) -> Result<()> {
    println!("🔨 Building static site...");
    println!("   Source: {}", path.display());
    println!("   Output: {}", output.display());
    println!();

    let site = load_site(&path)?;

    println!("✓ Loaded: {}", site.metadata.name);
    println!("  Posts: {}", site.catalog.len());
    println!("  Products: {}", site.products.len());
    println!();

    let summary = build_site(&site, &path, &output, &RenderOptions::build())?;

    println!("📄 Generated {} pages", summary.pages);
    println!("🎨 Generated {} assets", summary.assets);
    println!("🖼  Copied {} images", summary.images);
    for missing in &summary.missing_images {
        eprintln!("   ⚠ Warning: Image not found: {}", missing);
    }

    println!();
    println!("✅ Build complete!");
    println!("   Output: {}", output.display());
    println!();
    println!("To test locally:");
    println!("   cd {} && python3 -m http.server 8000", output.display());
    println!();

    Ok(())
}

/// Write every page, the generated assets and the referenced local images
pub fn build_site(
    site: &Site,
    site_dir: &Path,
    output: &Path,
    options: &RenderOptions,
) -> Result<BuildSummary> {
    fs::create_dir_all(output).context("Failed to create output directory")?;

    let generated = generate_site(site, options);
    let mut summary = BuildSummary::default();

    for (rel, html) in &generated.pages {
        write_file(output, rel, html.as_bytes())?;
        summary.pages += 1;
    }

    for (rel, data) in &generated.assets {
        write_file(output, rel, data)?;
        summary.assets += 1;
    }

    for reference in site.local_asset_refs() {
        let src = site_dir.join(reference);
        if !src.is_file() {
            summary.missing_images.push(reference.to_string());
            continue;
        }

        let dst = output.join(reference);
        if let Some(parent) = dst.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(&src, &dst).with_context(|| format!("Failed to copy {}", src.display()))?;
        summary.images += 1;
    }

    tracing::debug!(
        pages = summary.pages,
        assets = summary.assets,
        images = summary.images,
        "build finished"
    );

    Ok(summary)
}

fn write_file(output: &Path, rel: &str, data: &[u8]) -> Result<()> {
    let dst = output.join(rel);
    if let Some(parent) = dst.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(&dst, data).with_context(|| format!("Failed to write {}", dst.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use site_kit_core::parse_site_toml;
    use tempfile::TempDir;

    const SITE: &str = r##"
[site]
name = "Corner Pharmacy"
tagline = "Care close to home"
description = "Neighbourhood pharmacy"
logo = "images/logo.png"

[contact]
phone = "+1 555 0100"
email = "hello@example.com"

[[post]]
slug = "first-post"
title = "First Post"
excerpt = "The first one"
body = "Hello **there**"
image = "images/first.jpg"
published_at = "2025-10-20"
category = "News"
author = "Team"

[[post]]
slug = "second-post"
title = "Second Post"
excerpt = "The second one"
body = "More"
image = "https://cdn.example.com/second.jpg"
published_at = "2025-10-15"
category = "News"
author = "Team"
"##;

    fn options() -> RenderOptions {
        RenderOptions {
            is_preview: false,
            year: 2025,
        }
    }

    fn setup() -> (TempDir, Site) {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("site.toml"), SITE).unwrap();
        fs::create_dir_all(dir.path().join("images")).unwrap();
        fs::write(dir.path().join("images/logo.png"), b"logo").unwrap();
        let site = parse_site_toml(dir.path().join("site.toml")).unwrap();
        (dir, site)
    }

    #[test]
    fn test_build_writes_one_page_per_post() {
        let (dir, site) = setup();
        let out = TempDir::new().unwrap();

        let summary = build_site(&site, dir.path(), out.path(), &options()).unwrap();

        assert_eq!(summary.pages, 6 + 2 + 1);
        assert_eq!(summary.assets, 2);
        assert!(out.path().join("index.html").is_file());
        assert!(out.path().join("404.html").is_file());
        assert!(out.path().join("assets/site.css").is_file());
        assert!(out.path().join("assets/contact.js").is_file());

        let post = fs::read_to_string(out.path().join("blog/first-post/index.html")).unwrap();
        assert!(post.contains("<strong>there</strong>"));
        assert!(out.path().join("blog/second-post/index.html").is_file());
        assert!(!out.path().join("blog/unknown-slug").exists());
    }

    #[test]
    fn test_build_copies_referenced_images() {
        let (dir, site) = setup();
        let out = TempDir::new().unwrap();

        let summary = build_site(&site, dir.path(), out.path(), &options()).unwrap();

        assert_eq!(summary.images, 1);
        assert_eq!(fs::read(out.path().join("images/logo.png")).unwrap(), b"logo");
        assert_eq!(summary.missing_images, vec!["images/first.jpg".to_string()]);
    }

    #[test]
    fn test_build_is_repeatable() {
        let (dir, site) = setup();
        let out = TempDir::new().unwrap();

        build_site(&site, dir.path(), out.path(), &options()).unwrap();
        let first = fs::read_to_string(out.path().join("blog/index.html")).unwrap();
        build_site(&site, dir.path(), out.path(), &options()).unwrap();
        let second = fs::read_to_string(out.path().join("blog/index.html")).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_load_site_missing_config() {
        let dir = TempDir::new().unwrap();
        let err = load_site(dir.path()).unwrap_err();
        assert!(err.to_string().contains("site.toml not found"));
    }
}
