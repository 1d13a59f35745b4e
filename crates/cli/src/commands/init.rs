use anyhow::{Context, Result};
use site_kit_core::config::{SITE_TOML, parse_site_toml_str};
use std::fs;
use std::path::{Path, PathBuf};

const DEFAULT_NAME: &str = "STERA Pharmacy";

/// Sample posts written to posts/<slug>.md: (slug, title, excerpt, image, date, category, body)
const SAMPLE_POSTS: &[(&str, &str, &str, &str, &str, &str, &str)] = &[
    (
        "understanding-prescriptions",
        "Understanding Your Prescription",
        "Learn how to read and understand your medication labels and dosage instructions...",
        "https://images.pexels.com/photos/3825456/pexels-photo-3825456.jpeg?auto=compress&cs=tinysrgb&w=800",
        "2025-10-20",
        "Medication Safety",
        r##"# Understanding Your Prescription

When your doctor writes a prescription, it contains important information about your medication.

## Common Abbreviations

- **QD** - Once daily
- **BID** - Twice daily
- **TID** - Three times daily
- **PRN** - As needed

## Questions to Ask Your Pharmacist

- What is this medication for?
- How should I take it?
- What should I do if I miss a dose?
"##,
    ),
    (
        "boost-immune-system",
        "Boost Your Immune System Naturally",
        "Discover natural ways to strengthen your immune system through diet and supplements...",
        "https://images.pexels.com/photos/1556691/pexels-photo-1556691.jpeg?auto=compress&cs=tinysrgb&w=800",
        "2025-10-15",
        "Wellness",
        r##"# Boost Your Immune System Naturally

A strong immune system is your body's best defense against infections.

## Lifestyle Factors

1. **Quality sleep** - aim for 7-9 hours per night
2. **Regular exercise** - promotes good circulation
3. **Hydration** - 8-10 glasses daily

**Important:** Always consult a healthcare professional before starting new supplements.
"##,
    ),
    (
        "managing-chronic-conditions",
        "Managing Chronic Conditions",
        "Tips and strategies for effectively managing chronic health conditions at home...",
        "https://images.pexels.com/photos/5699456/pexels-photo-5699456.jpeg?auto=compress&cs=tinysrgb&w=800",
        "2025-10-10",
        "Health Management",
        r##"# Managing Chronic Conditions

Living with a chronic condition requires ongoing attention and care.

## Medication Adherence

- Use a pill organizer
- Set reminders on your phone
- Keep a medication log

*Always consult with your healthcare provider before making changes to your treatment plan.*
"##,
    ),
];

/// Initialize a new site directory
pub async fn run(path: PathBuf, name: Option<String>) -> Result<()> {
    println!("🏗  Initializing site at: {}", path.display());

    let config_path = path.join(SITE_TOML);
    if config_path.exists() {
        anyhow::bail!(
            "{} already exists in {}\nRefusing to overwrite an existing site",
            SITE_TOML,
            path.display()
        );
    }

    create_directory_structure(&path)?;
    generate_posts(&path)?;
    generate_site_toml(&path, name.as_deref())?;

    println!("\n✓ Created site structure");
    println!("\nNext steps:");
    println!("  1. Edit {} with your business details", SITE_TOML);
    println!("  2. Write posts in posts/ and list them in {}", SITE_TOML);
    println!("  3. Add images to images/");
    println!("  4. Run 'site-kit preview {}'", path.display());

    Ok(())
}

fn create_directory_structure(base: &Path) -> Result<()> {
    fs::create_dir_all(base.join("posts"))?;
    fs::create_dir_all(base.join("images"))?;
    Ok(())
}

fn generate_posts(base: &Path) -> Result<()> {
    for (slug, _, _, _, _, _, body) in SAMPLE_POSTS {
        let file = base.join("posts").join(format!("{}.md", slug));
        fs::write(&file, body).with_context(|| format!("Failed to write {}", file.display()))?;
    }
    Ok(())
}

/// Escape a string for a TOML basic (double-quoted) string
fn toml_escape_string(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\x08', "\\b")
        .replace('\x0C', "\\f")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}

fn generate_site_toml(base: &Path, name: Option<&str>) -> Result<()> {
    let site_name = toml_escape_string(name.unwrap_or(DEFAULT_NAME));
    let name_comment = if name.is_some() {
        ""
    } else {
        "  # TODO: Set business name"
    };

    let mut toml = format!(
        r##"# Generated by site-kit init
# Edit this file to customize your site

[site]
name = "{site_name}"{name_comment}
tagline = "Your Trusted Healthcare Partner"
description = "Quality medications, expert advice and caring service for the whole community."
# base_url = "https://www.example.com"
# logo = "images/logo.png"
hero_image = "https://images.pexels.com/photos/5910953/pexels-photo-5910953.jpeg?auto=compress&cs=tinysrgb&w=1600"
# Render raw HTML in post bodies as-is. Only enable for content you wrote yourself.
trust_body_html = false

[contact]
phone = "+254 700 000 000"
email = "info@example.com"
whatsapp = "https://wa.me/254700000000?text=Hello"
address = ["123 Main Street", "Nairobi, Kenya"]
hours = [
    {{ days = "Monday - Friday", hours = "8:00 AM - 8:00 PM" }},
    {{ days = "Saturday", hours = "9:00 AM - 6:00 PM" }},
    {{ days = "Sunday", hours = "10:00 AM - 4:00 PM" }},
]

[theme]
accent = "#F5B11A"
muted = "#A9A9A9"
dark = "#2E2E2E"
light = "#F2F2F2"

"##
    );

    for (slug, title, excerpt, image, date, category, _) in SAMPLE_POSTS {
        toml.push_str(&format!(
            r##"[[post]]
slug = "{slug}"
title = "{title}"
excerpt = "{excerpt}"
body_file = "posts/{slug}.md"
image = "{image}"
published_at = "{date}"
category = "{category}"
author = "{author} Team"

"##,
            slug = slug,
            title = toml_escape_string(title),
            excerpt = toml_escape_string(excerpt),
            image = image,
            date = date,
            category = toml_escape_string(category),
            author = site_name,
        ));
    }

    toml.push_str(
        r##"[[product]]
name = "Prescription Medications"
description = "Comprehensive range of prescription drugs from leading pharmaceutical manufacturers."
image = "https://images.pexels.com/photos/3825517/pexels-photo-3825517.jpeg?auto=compress&cs=tinysrgb&w=800"
featured = true

[[product]]
name = "Over-the-Counter (OTC) Medicines"
description = "Pain relief, cold and flu, allergies and digestive health without a prescription."
image = "https://images.pexels.com/photos/3683098/pexels-photo-3683098.jpeg?auto=compress&cs=tinysrgb&w=800"
featured = true

[[product]]
name = "Vitamins & Supplements"
description = "High-quality vitamins, minerals, probiotics and dietary supplements."
image = "https://images.pexels.com/photos/3683041/pexels-photo-3683041.jpeg?auto=compress&cs=tinysrgb&w=800"
featured = true

[[product]]
name = "Medical Equipment"
description = "Blood pressure monitors, thermometers, glucose meters and nebulizers for home use."
image = "https://images.pexels.com/photos/4386467/pexels-photo-4386467.jpeg?auto=compress&cs=tinysrgb&w=800"

[[product]]
name = "Personal Care Products"
description = "Skincare, oral care and hygiene products from trusted brands."
image = "https://images.pexels.com/photos/3762879/pexels-photo-3762879.jpeg?auto=compress&cs=tinysrgb&w=800"

[[product]]
name = "Baby & Maternal Care"
description = "Infant formula, diapers, baby care items and prenatal vitamins."
image = "https://images.pexels.com/photos/1912868/pexels-photo-1912868.jpeg?auto=compress&cs=tinysrgb&w=800"

[[service]]
icon = "stethoscope"
title = "Professional Consultation"
description = "Expert advice from our licensed pharmacists on medication usage and interactions."

[[service]]
icon = "truck"
title = "Home Delivery"
description = "Your medications and health products delivered to your doorstep."

[[service]]
icon = "file-text"
title = "Prescription Management"
description = "Refill reminders and up-to-date medication records."

[[service]]
icon = "syringe"
title = "Vaccination Services"
description = "Flu shots and other immunizations."

[[service]]
icon = "clock"
title = "Extended Hours"
description = "Open seven days a week with extended hours."

[[service]]
icon = "heart"
title = "Health Monitoring"
description = "Complimentary blood pressure checks and blood glucose testing."

[[value]]
icon = "heart"
title = "Patient-Centered Care"
description = "We put your health and wellbeing at the heart of everything we do."

[[value]]
icon = "shield"
title = "Quality & Safety"
description = "We maintain the highest standards in pharmaceutical products and services."

[[value]]
icon = "users"
title = "Community Focus"
description = "We're dedicated to serving the health of our local community."

[[value]]
icon = "award"
title = "Professional Excellence"
description = "Our team continuously pursues knowledge and professional certifications."

[[team]]
name = "Lead Pharmacist"
role = "Licensed Pharmacist"
image = "https://images.pexels.com/photos/5327585/pexels-photo-5327585.jpeg?auto=compress&cs=tinysrgb&w=600"

[[team]]
name = "Senior Pharmacist"
role = "Licensed Pharmacist"
image = "https://images.pexels.com/photos/5327656/pexels-photo-5327656.jpeg?auto=compress&cs=tinysrgb&w=600"

[[team]]
name = "Pharmacy Technician"
role = "Certified Technician"
image = "https://images.pexels.com/photos/5327921/pexels-photo-5327921.jpeg?auto=compress&cs=tinysrgb&w=600"
"##,
    );

    // Load it the way every other command will
    parse_site_toml_str(&toml, base)
        .context("Generated site.toml is invalid - this is a bug in the template generator")?;

    fs::write(base.join(SITE_TOML), toml)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use site_kit_core::parse_site_toml;
    use tempfile::TempDir;

    #[test]
    fn test_toml_escape_string() {
        assert_eq!(toml_escape_string("plain"), "plain");
        assert_eq!(toml_escape_string(r#"Joe's "Best""#), r#"Joe's \"Best\""#);
        assert_eq!(toml_escape_string("a\\b"), "a\\\\b");
        assert_eq!(toml_escape_string("line\nbreak"), "line\\nbreak");
    }

    #[tokio::test]
    async fn test_init_creates_loadable_site() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("my-site");

        run(path.clone(), None).await.unwrap();

        assert!(path.join("images").is_dir());
        assert!(path.join("posts/boost-immune-system.md").is_file());

        let site = parse_site_toml(path.join(SITE_TOML)).unwrap();
        assert_eq!(site.metadata.name, DEFAULT_NAME);
        assert_eq!(site.catalog.len(), 3);
        assert_eq!(site.products.len(), 6);
        assert_eq!(site.featured_products().count(), 3);
        assert_eq!(site.services.len(), 6);
        assert_eq!(site.values.len(), 4);
        assert_eq!(site.team.len(), 3);

        let post = site.catalog.find_by_slug("boost-immune-system").unwrap();
        assert!(post.body.starts_with("# Boost Your Immune System Naturally"));
        assert_eq!(post.display_date(), "October 15, 2025");
    }

    #[tokio::test]
    async fn test_init_escapes_custom_name() {
        let dir = TempDir::new().unwrap();
        let name = r#"Joe's "Corner" Pharmacy"#;

        run(dir.path().to_path_buf(), Some(name.to_string()))
            .await
            .unwrap();

        let site = parse_site_toml(dir.path().join(SITE_TOML)).unwrap();
        assert_eq!(site.metadata.name, name);
        let content = fs::read_to_string(dir.path().join(SITE_TOML)).unwrap();
        assert!(!content.contains("TODO: Set business name"));
    }

    #[tokio::test]
    async fn test_init_refuses_existing_site() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(SITE_TOML), "keep me").unwrap();

        let err = run(dir.path().to_path_buf(), None).await.unwrap_err();

        assert!(err.to_string().contains("already exists"));
        assert_eq!(
            fs::read_to_string(dir.path().join(SITE_TOML)).unwrap(),
            "keep me"
        );
    }

    #[test]
    fn test_create_directory_structure_idempotent() {
        let dir = TempDir::new().unwrap();
        create_directory_structure(dir.path()).unwrap();
        create_directory_structure(dir.path()).unwrap();
        assert!(dir.path().join("posts").is_dir());
        assert!(dir.path().join("images").is_dir());
    }
}
