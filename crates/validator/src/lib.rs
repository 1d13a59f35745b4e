// Content checks that go beyond what loading site.toml enforces.
//
// Loading rejects what would make the site ambiguous or unsafe (duplicate
// slugs, traversal paths, bad dates). The checks here report everything else
// a site author should look at before publishing.

use std::path::Path;

use site_kit_core::config::SITE_TOML;
use site_kit_core::{PageResolver, RenderResult, Site, is_remote_ref, parse_site_toml};
use site_kit_generator::Route;
use walkdir::WalkDir;

/// Excerpts longer than this get cut off on cards
const MAX_EXCERPT_CHARS: usize = 200;

#[derive(Debug, Default)]
pub struct ValidationReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub info: Vec<String>,
}

impl ValidationReport {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    fn error(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    fn warn(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }

    fn note(&mut self, msg: impl Into<String>) {
        self.info.push(msg.into());
    }
}

/// Load and check the site in `site_dir`
pub fn validate_site(site_dir: &Path) -> ValidationReport {
    let mut report = ValidationReport::default();

    let config_path = site_dir.join(SITE_TOML);
    if !config_path.exists() {
        report.error(format!("{} not found in {}", SITE_TOML, site_dir.display()));
        return report;
    }

    let site = match parse_site_toml(&config_path) {
        Ok(site) => site,
        Err(e) => {
            report.error(e.to_string());
            return report;
        }
    };

    report.note(format!("Site: {}", site.metadata.name));
    report.note(format!("Posts: {}", site.catalog.len()));
    report.note(format!("Products: {}", site.products.len()));
    report.note(format!("Services: {}", site.services.len()));

    check_site(&site, site_dir, &mut report);
    report
}

/// Run every check against an already-loaded site
pub fn check_site(site: &Site, site_dir: &Path, report: &mut ValidationReport) {
    check_posts(site, report);
    check_images(site, site_dir, report);
    check_links(site, report);
    check_theme(site, report);
    check_orphan_posts(site, site_dir, report);
}

fn check_posts(site: &Site, report: &mut ValidationReport) {
    if site.catalog.is_empty() {
        report.warn("No posts defined; the blog page will be empty");
    }

    for post in &site.catalog {
        if !is_kebab_case(&post.slug) {
            report.warn(format!(
                "Slug '{}' is not lowercase kebab-case; URLs will look inconsistent",
                post.slug
            ));
        }
        if post.excerpt.trim().is_empty() {
            report.warn(format!("Post '{}' has an empty excerpt", post.slug));
        } else if post.excerpt.chars().count() > MAX_EXCERPT_CHARS {
            report.warn(format!(
                "Post '{}' excerpt is longer than {} characters",
                post.slug, MAX_EXCERPT_CHARS
            ));
        }
        if post.body.trim().is_empty() {
            report.warn(format!("Post '{}' has an empty body", post.slug));
        }
    }
}

fn is_kebab_case(slug: &str) -> bool {
    !slug.is_empty()
        && !slug.starts_with('-')
        && !slug.ends_with('-')
        && !slug.contains("--")
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

fn check_images(site: &Site, site_dir: &Path, report: &mut ValidationReport) {
    let mut refs: Vec<(String, &str)> = Vec::new();

    if let Some(logo) = &site.metadata.logo {
        refs.push(("site.logo".to_string(), logo.as_str()));
    }
    if let Some(hero) = &site.metadata.hero_image {
        refs.push(("site.hero_image".to_string(), hero.as_str()));
    }
    for post in &site.catalog {
        refs.push((format!("post '{}'", post.slug), post.image_ref.as_str()));
    }
    for product in &site.products {
        refs.push((format!("product '{}'", product.name), product.image.as_str()));
    }
    for member in &site.team {
        refs.push((format!("team member '{}'", member.name), member.image.as_str()));
    }

    let mut remote = 0;
    for (owner, reference) in refs {
        if is_remote_ref(reference) {
            remote += 1;
            continue;
        }

        let path = site_dir.join(reference);
        if !path.exists() {
            report.error(format!("Image for {} not found: {}", owner, reference));
            continue;
        }

        match image::image_dimensions(&path) {
            Ok((width, height)) => {
                tracing::debug!(path = %path.display(), width, height, "image ok");
            }
            Err(e) => {
                report.error(format!(
                    "Image for {} is not readable ({}): {}",
                    owner, reference, e
                ));
            }
        }
    }

    if remote > 0 {
        report.note(format!("{} remote image(s) not checked", remote));
    }
}

/// Internal product links must land on a page the build produces
fn check_links(site: &Site, report: &mut ValidationReport) {
    let resolver = PageResolver::new(&site.catalog);

    for product in &site.products {
        let href = product.link();
        if !href.starts_with('/') {
            continue;
        }

        match Route::parse(href) {
            None => report.warn(format!(
                "Product '{}' links to '{}', which is not a page of this site",
                product.name, href
            )),
            Some(Route::BlogPost(slug)) => {
                if let RenderResult::NotFound = resolver.resolve(&slug) {
                    report.warn(format!(
                        "Product '{}' links to missing post '{}'",
                        product.name, slug
                    ));
                }
            }
            Some(_) => {}
        }
    }
}

fn check_theme(site: &Site, report: &mut ValidationReport) {
    let theme = &site.theme;
    for (name, colour) in [
        ("accent", &theme.accent),
        ("muted", &theme.muted),
        ("dark", &theme.dark),
        ("light", &theme.light),
    ] {
        if !is_hex_colour(colour) {
            report.warn(format!(
                "theme.{} '{}' is not a #RGB or #RRGGBB colour",
                name, colour
            ));
        }
    }
}

fn is_hex_colour(value: &str) -> bool {
    match value.strip_prefix('#') {
        Some(hex) => (hex.len() == 3 || hex.len() == 6) && hex.chars().all(|c| c.is_ascii_hexdigit()),
        None => false,
    }
}

/// Markdown files under posts/ that no post reads through `body_file`
fn check_orphan_posts(site: &Site, site_dir: &Path, report: &mut ValidationReport) {
    let posts_dir = site_dir.join("posts");
    if !posts_dir.exists() {
        return;
    }

    for entry in WalkDir::new(&posts_dir)
        .max_depth(2)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
    {
        let path = entry.path();
        let is_markdown = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("md"))
            .unwrap_or(false);
        if !is_markdown {
            continue;
        }

        let relative = path.strip_prefix(site_dir).unwrap_or(path);
        let referenced = site
            .body_files
            .iter()
            .any(|file| Path::new(file) == relative);

        if !referenced {
            report.warn(format!(
                "{} is not the body_file of any post and will not be published",
                relative.display()
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const CONFIG: &str = r##"
[site]
name = "Test Pharmacy"
tagline = "Your Trusted Healthcare Partner"
description = "A test site"

[contact]
phone = "+254 700 000 000"
email = "info@example.com"

[[post]]
slug = "boost-immune-system"
title = "Boost Your Immune System Naturally"
excerpt = "Discover natural ways to strengthen your immune system"
body_file = "posts/boost-immune-system.md"
image = "images/immune.png"
published_at = "2025-10-15"
category = "Wellness"
author = "Pharmacy Team"

[[product]]
name = "Health Supplements"
description = "Vitamins"
image = "https://images.example.com/supplements.jpg"
href = "/blog/boost-immune-system"
"##;

    fn write_site(config: &str) -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("posts")).unwrap();
        fs::create_dir_all(dir.path().join("images")).unwrap();
        fs::write(
            dir.path().join("posts/boost-immune-system.md"),
            "# Boost Your Immune System Naturally\n",
        )
        .unwrap();
        image::RgbImage::new(4, 4)
            .save(dir.path().join("images/immune.png"))
            .unwrap();
        fs::write(dir.path().join(SITE_TOML), config).unwrap();
        dir
    }

    #[test]
    fn test_valid_site_has_no_errors() {
        let dir = write_site(CONFIG);
        let report = validate_site(dir.path());
        assert!(report.is_ok(), "unexpected errors: {:?}", report.errors);
        assert!(report.warnings.is_empty(), "unexpected warnings: {:?}", report.warnings);
        assert!(report.info.iter().any(|i| i == "Posts: 1"));
        assert!(report.info.iter().any(|i| i.contains("1 remote image")));
    }

    #[test]
    fn test_missing_site_toml() {
        let dir = TempDir::new().unwrap();
        let report = validate_site(dir.path());
        assert!(!report.is_ok());
        assert!(report.errors[0].contains("site.toml not found"));
    }

    #[test]
    fn test_duplicate_slug_is_an_error() {
        let config = format!(
            "{}{}",
            CONFIG,
            r##"
[[post]]
slug = "boost-immune-system"
title = "Again"
excerpt = "Duplicate"
body = "dup"
image = "images/immune.png"
published_at = "2025-10-16"
category = "Wellness"
author = "Pharmacy Team"
"##
        );
        let dir = write_site(&config);
        let report = validate_site(dir.path());
        assert!(!report.is_ok());
        assert!(report.errors[0].contains("duplicate slug 'boost-immune-system'"));
    }

    #[test]
    fn test_missing_image_is_an_error() {
        let dir = write_site(&CONFIG.replace("images/immune.png", "images/missing.png"));
        let report = validate_site(dir.path());
        assert!(report.errors.iter().any(|e| e.contains("not found: images/missing.png")));
    }

    #[test]
    fn test_unreadable_image_is_an_error() {
        let dir = write_site(&CONFIG.replace("images/immune.png", "images/broken.png"));
        fs::write(dir.path().join("images/broken.png"), b"not an image").unwrap();
        let report = validate_site(dir.path());
        assert!(report.errors.iter().any(|e| e.contains("not readable")));
    }

    #[test]
    fn test_link_to_missing_post_warns() {
        let dir = write_site(&CONFIG.replace(
            "href = \"/blog/boost-immune-system\"",
            "href = \"/blog/no-such-post\"",
        ));
        let report = validate_site(dir.path());
        assert!(report.is_ok());
        assert!(report.warnings.iter().any(|w| w.contains("missing post 'no-such-post'")));
    }

    #[test]
    fn test_link_to_unknown_page_warns() {
        let dir = write_site(&CONFIG.replace(
            "href = \"/blog/boost-immune-system\"",
            "href = \"/pricing\"",
        ));
        let report = validate_site(dir.path());
        assert!(report.warnings.iter().any(|w| w.contains("not a page of this site")));
    }

    #[test]
    fn test_orphan_markdown_warns() {
        let dir = write_site(CONFIG);
        fs::write(dir.path().join("posts/draft-post.md"), "# Draft").unwrap();
        let report = validate_site(dir.path());
        assert!(report.warnings.iter().any(|w| w.contains("draft-post.md")));
        assert!(
            !report
                .warnings
                .iter()
                .any(|w| w.contains("boost-immune-system.md"))
        );
    }

    #[test]
    fn test_body_file_named_apart_from_slug_is_not_orphan() {
        let dir = write_site(&CONFIG.replace(
            "body_file = \"posts/boost-immune-system.md\"",
            "body_file = \"posts/immune.md\"",
        ));
        fs::remove_file(dir.path().join("posts/boost-immune-system.md")).unwrap();
        fs::write(dir.path().join("posts/immune.md"), "# Immune\n").unwrap();

        let report = validate_site(dir.path());

        assert!(report.is_ok(), "errors: {:?}", report.errors);
        assert!(
            !report.warnings.iter().any(|w| w.contains("posts/immune.md")),
            "warnings: {:?}",
            report.warnings
        );
    }

    #[test]
    fn test_non_kebab_slug_warns() {
        let dir = write_site(&CONFIG.replace(
            "slug = \"boost-immune-system\"",
            "slug = \"Boost_Immune\"",
        ));
        let report = validate_site(dir.path());
        assert!(report.warnings.iter().any(|w| w.contains("kebab-case")));
    }

    #[test]
    fn test_bad_theme_colour_warns() {
        let config = format!("{}\n[theme]\naccent = \"gold\"\n", CONFIG);
        let dir = write_site(&config);
        let report = validate_site(dir.path());
        assert!(report.warnings.iter().any(|w| w.contains("theme.accent")));
    }

    #[test]
    fn test_is_kebab_case() {
        assert!(is_kebab_case("understanding-prescriptions"));
        assert!(is_kebab_case("post-2025"));
        assert!(!is_kebab_case("Post"));
        assert!(!is_kebab_case("-leading"));
        assert!(!is_kebab_case("double--dash"));
        assert!(!is_kebab_case("snake_case"));
    }

    #[test]
    fn test_is_hex_colour() {
        assert!(is_hex_colour("#F5B11A"));
        assert!(is_hex_colour("#fff"));
        assert!(!is_hex_colour("F5B11A"));
        assert!(!is_hex_colour("#F5B11"));
        assert!(!is_hex_colour("#GGGGGG"));
    }
}
