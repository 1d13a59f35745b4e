use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;

/// Complete site, loaded once from site.toml
#[derive(Debug, Clone)]
pub struct Site {
    pub metadata: SiteMetadata,
    pub contact: ContactInfo,
    pub theme: Theme,
    pub catalog: Catalog,
    pub products: Vec<Product>,
    pub services: Vec<Service>,
    pub values: Vec<Value>,
    pub team: Vec<TeamMember>,
    /// `body_file` paths the posts were read from, relative to the site directory
    pub body_files: Vec<String>,
}

impl Site {
    /// Products flagged for the home page, in source order
    pub fn featured_products(&self) -> impl Iterator<Item = &Product> {
        self.products.iter().filter(|p| p.featured)
    }

    /// Every on-disk image the site references, relative to the site
    /// directory, without duplicates and in first-use order
    pub fn local_asset_refs(&self) -> Vec<&str> {
        let candidates = self
            .metadata
            .logo
            .iter()
            .chain(self.metadata.hero_image.iter())
            .map(String::as_str)
            .chain(self.catalog.iter().map(|p| p.image_ref.as_str()))
            .chain(self.products.iter().map(|p| p.image.as_str()))
            .chain(self.team.iter().map(|m| m.image.as_str()));

        let mut refs: Vec<&str> = Vec::new();
        for reference in candidates {
            let reference = reference.trim_start_matches("./");
            if reference.is_empty() || is_remote_ref(reference) || refs.contains(&reference) {
                continue;
            }
            refs.push(reference);
        }
        refs
    }
}

/// One unit of publishable content, addressed by its slug
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentRecord {
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    /// Markdown source. Rendering decides how far to trust embedded HTML.
    pub body: String,
    /// URL or site-relative path; existence is not checked on load
    pub image_ref: String,
    pub published_at: NaiveDate,
    pub category: String,
    pub author: String,
}

impl ContentRecord {
    /// Date label used on cards and post headers, e.g. "October 20, 2025"
    pub fn display_date(&self) -> String {
        self.published_at.format("%B %-d, %Y").to_string()
    }
}

/// Site identity and rendering switches
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteMetadata {
    pub name: String,
    pub tagline: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hero_image: Option<String>,
    #[serde(default)]
    pub trust_body_html: bool,
}

/// Contact details shown in the footer, contact strip and contact page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactInfo {
    pub phone: String,
    pub email: String,
    /// Full wa.me link, including any prefilled text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whatsapp: Option<String>,
    #[serde(default)]
    pub address: Vec<String>,
    #[serde(default)]
    pub hours: Vec<BusinessHours>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusinessHours {
    pub days: String,
    pub hours: String,
}

/// Brand colours
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    #[serde(default = "default_accent")]
    pub accent: String,
    #[serde(default = "default_muted")]
    pub muted: String,
    #[serde(default = "default_dark")]
    pub dark: String,
    #[serde(default = "default_light")]
    pub light: String,
}

fn default_accent() -> String {
    "#F5B11A".to_string()
}
fn default_muted() -> String {
    "#A9A9A9".to_string()
}
fn default_dark() -> String {
    "#2E2E2E".to_string()
}
fn default_light() -> String {
    "#F2F2F2".to_string()
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent: default_accent(),
            muted: default_muted(),
            dark: default_dark(),
            light: default_light(),
        }
    }
}

/// Product category card
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub description: String,
    pub image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

impl Product {
    /// Link target for the card's "Learn More" button
    pub fn link(&self) -> &str {
        self.href.as_deref().unwrap_or("/products")
    }
}

/// Service tile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Service {
    /// Glyph name, e.g. "stethoscope" or "truck"
    pub icon: String,
    pub title: String,
    pub description: String,
}

/// About page value statement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Value {
    #[serde(default = "default_value_icon")]
    pub icon: String,
    pub title: String,
    pub description: String,
}

fn default_value_icon() -> String {
    "heart".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamMember {
    pub name: String,
    pub role: String,
    pub image: String,
}

/// True when an image reference points off-site
pub fn is_remote_ref(reference: &str) -> bool {
    reference.starts_with("http://") || reference.starts_with("https://")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_date() {
        let record = ContentRecord {
            slug: "a".to_string(),
            title: "A".to_string(),
            excerpt: String::new(),
            body: String::new(),
            image_ref: String::new(),
            published_at: NaiveDate::from_ymd_opt(2025, 10, 5).unwrap(),
            category: String::new(),
            author: String::new(),
        };
        assert_eq!(record.display_date(), "October 5, 2025");
    }

    #[test]
    fn test_product_link_defaults_to_listing() {
        let product = Product {
            name: "Vitamins".to_string(),
            description: String::new(),
            image: String::new(),
            href: None,
            featured: false,
        };
        assert_eq!(product.link(), "/products");

        let product = Product {
            href: Some("/blog/boost-immune-system".to_string()),
            ..product
        };
        assert_eq!(product.link(), "/blog/boost-immune-system");
    }

    #[test]
    fn test_local_asset_refs_skip_remote_and_duplicates() {
        let record = |slug: &str, image: &str| ContentRecord {
            slug: slug.to_string(),
            title: slug.to_string(),
            excerpt: String::new(),
            body: String::new(),
            image_ref: image.to_string(),
            published_at: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            category: String::new(),
            author: String::new(),
        };

        let site = Site {
            metadata: SiteMetadata {
                name: "Shop".to_string(),
                tagline: String::new(),
                description: String::new(),
                base_url: None,
                logo: Some("./images/logo.png".to_string()),
                hero_image: Some("https://cdn.example.com/hero.jpg".to_string()),
                trust_body_html: false,
            },
            contact: ContactInfo {
                phone: String::new(),
                email: String::new(),
                whatsapp: None,
                address: vec![],
                hours: vec![],
            },
            theme: Theme::default(),
            catalog: Catalog::new(vec![
                record("a", "images/post.jpg"),
                record("b", "images/post.jpg"),
            ])
            .unwrap(),
            products: vec![Product {
                name: "Vitamins".to_string(),
                description: String::new(),
                image: "images/logo.png".to_string(),
                href: None,
                featured: false,
            }],
            services: vec![],
            values: vec![],
            team: vec![TeamMember {
                name: "Lead".to_string(),
                role: "Pharmacist".to_string(),
                image: "team/lead.jpg".to_string(),
            }],
            body_files: vec![],
        };

        assert_eq!(
            site.local_asset_refs(),
            vec!["images/logo.png", "images/post.jpg", "team/lead.jpg"]
        );
    }

    #[test]
    fn test_is_remote_ref() {
        assert!(is_remote_ref("https://images.example.com/a.jpg"));
        assert!(is_remote_ref("http://example.com/a.jpg"));
        assert!(!is_remote_ref("images/a.jpg"));
        assert!(!is_remote_ref("/images/a.jpg"));
    }
}
