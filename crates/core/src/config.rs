use crate::catalog::Catalog;
use crate::error::{Error, Result};
use crate::types::*;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the site configuration inside a site directory
pub const SITE_TOML: &str = "site.toml";

/// Raw TOML configuration structure
/// This matches the site.toml file structure exactly
#[derive(Debug, Deserialize)]
struct RawConfig {
    site: SiteMetadata,
    contact: ContactInfo,
    #[serde(default)]
    theme: Theme,
    #[serde(default)]
    post: Vec<RawPost>,
    #[serde(default)]
    product: Vec<Product>,
    #[serde(default)]
    service: Vec<Service>,
    #[serde(default)]
    value: Vec<Value>,
    #[serde(default)]
    team: Vec<TeamMember>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawPost {
    slug: String,
    title: String,
    excerpt: String,
    body: Option<String>,
    body_file: Option<String>, // Read relative to the site directory
    image: String,
    published_at: String, // Parse as NaiveDate
    category: String,
    author: String,
}

/// Parse site.toml from a file path.
///
/// `body_file` entries are read relative to the directory holding the file.
pub fn parse_site_toml<P: AsRef<Path>>(path: P) -> Result<Site> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
    parse_site_toml_str(&content, base_dir)
}

/// Parse site.toml from a string (useful for testing)
pub fn parse_site_toml_str(content: &str, base_dir: &Path) -> Result<Site> {
    let raw: RawConfig = toml::from_str(content)?;

    if raw.site.name.trim().is_empty() {
        return Err(Error::ConfigParse("site.name must not be empty".to_string()));
    }

    if let Some(logo) = &raw.site.logo {
        validate_image_ref(logo, "site.logo")?;
    }
    if let Some(hero) = &raw.site.hero_image {
        validate_image_ref(hero, "site.hero_image")?;
    }

    let body_files: Vec<String> = raw
        .post
        .iter()
        .filter_map(|p| p.body_file.as_deref())
        .map(|f| f.trim_start_matches("./").to_string())
        .collect();

    // Convert posts, validating every field before the catalog sees them
    let records: Result<Vec<ContentRecord>> = raw
        .post
        .into_iter()
        .enumerate()
        .map(|(i, p)| convert_post(p, i, base_dir))
        .collect();

    let catalog = Catalog::new(records?)?;

    for product in &raw.product {
        validate_image_ref(&product.image, "product.image")?;
    }
    for member in &raw.team {
        validate_image_ref(&member.image, "team.image")?;
    }

    Ok(Site {
        metadata: raw.site,
        contact: raw.contact,
        theme: raw.theme,
        catalog,
        products: raw.product,
        services: raw.service,
        values: raw.value,
        team: raw.team,
        body_files,
    })
}

fn convert_post(raw: RawPost, index: usize, base_dir: &Path) -> Result<ContentRecord> {
    validate_slug(&raw.slug)?;

    if raw.title.trim().is_empty() {
        return Err(Error::ConfigParse(format!(
            "Empty title for post '{}' (entry {})",
            raw.slug, index
        )));
    }

    let published_at = chrono::NaiveDate::parse_from_str(&raw.published_at, "%Y-%m-%d")
        .map_err(|e| {
            Error::ConfigParse(format!(
                "Invalid published_at for post '{}': {}",
                raw.slug, e
            ))
        })?;

    let body = match (raw.body, raw.body_file) {
        (Some(body), None) => body,
        (None, Some(file)) => {
            let relative = validate_path(&file, "post.body_file")?;
            let full = base_dir.join(&relative);
            fs::read_to_string(&full).map_err(|e| {
                Error::ConfigParse(format!(
                    "Cannot read body_file '{}' for post '{}': {}",
                    file, raw.slug, e
                ))
            })?
        }
        (Some(_), Some(_)) => {
            return Err(Error::ConfigParse(format!(
                "Post '{}' sets both 'body' and 'body_file'; use one",
                raw.slug
            )));
        }
        (None, None) => {
            return Err(Error::ConfigParse(format!(
                "Post '{}' needs either 'body' or 'body_file'",
                raw.slug
            )));
        }
    };

    validate_image_ref(&raw.image, "post.image")?;

    Ok(ContentRecord {
        slug: raw.slug,
        title: raw.title,
        excerpt: raw.excerpt,
        body,
        image_ref: raw.image,
        published_at,
        category: raw.category,
        author: raw.author,
    })
}

/// Check that a slug can be used as a single URL path segment.
///
/// Style (lowercase kebab-case) is left to the validator; only slugs that
/// would break routing are rejected here.
fn validate_slug(slug: &str) -> Result<()> {
    if slug.is_empty() {
        return Err(Error::ConfigParse("Empty slug in 'post.slug'".to_string()));
    }

    if let Some(bad) = slug
        .chars()
        .find(|c| c.is_whitespace() || c.is_control() || matches!(c, '/' | '\\' | '?' | '#' | '%'))
    {
        return Err(Error::ConfigParse(format!(
            "Slug '{}' is not URL-safe (contains {:?})",
            slug, bad
        )));
    }

    if slug == "." || slug == ".." {
        return Err(Error::ConfigParse(format!(
            "Slug '{}' is not URL-safe",
            slug
        )));
    }

    Ok(())
}

/// Image references are either remote URLs or relative paths inside the site.
fn validate_image_ref(reference: &str, field_name: &str) -> Result<()> {
    if is_remote_ref(reference) {
        return Ok(());
    }
    validate_path(reference, field_name).map(|_| ())
}

/// Validate and convert a path string to PathBuf.
///
/// This function prevents path traversal by rejecting:
/// - Absolute paths (starting with `/` or Windows drive letters)
/// - Paths containing parent directory references (`..`)
///
/// # Examples
///
/// ```text
/// validate_path("posts/welcome.md", "body_file")  → Ok(PathBuf)
/// validate_path("/etc/passwd", "body_file")  → Err("Absolute paths not allowed...")
/// validate_path("../../etc/passwd", "image")  → Err("Parent directory references...")
/// ```
fn validate_path(path_str: &str, field_name: &str) -> Result<PathBuf> {
    let path = Path::new(path_str);

    // Reject absolute paths
    if path.is_absolute() || path_str.starts_with('/') {
        return Err(Error::ConfigParse(format!(
            "Absolute paths not allowed in '{}': '{}'. Use relative paths only.",
            field_name, path_str
        )));
    }

    // Check for parent directory references
    for component in path.components() {
        if component == std::path::Component::ParentDir {
            return Err(Error::ConfigParse(format!(
                "Parent directory references (..) not allowed in '{}': '{}'",
                field_name, path_str
            )));
        }
    }

    // Ensure path is not empty
    if path_str.trim().is_empty() {
        return Err(Error::ConfigParse(format!(
            "Empty path in '{}' field",
            field_name
        )));
    }

    Ok(path.to_path_buf())
}
