use site_kit_core::Site;

use crate::RenderOptions;
use crate::assets::{CONTACT_JS_PATH, STYLESHEET_PATH, fingerprint, generate_stylesheet};
use crate::components::icon;
use crate::html::{asset_url, html_escape};

/// Primary navigation, in display order
pub const NAV_LINKS: &[(&str, &str)] = &[
    ("Home", "/"),
    ("About", "/about"),
    ("Services", "/services"),
    ("Products", "/products"),
    ("Blog", "/blog"),
    ("Contact", "/contact"),
];

/// Page-level inputs to [`layout`]
pub struct PageMeta<'a> {
    pub title: &'a str,
    pub description: &'a str,
    /// URL of the page being rendered, used to highlight its nav entry
    pub current_url: &'a str,
    pub extra_scripts: &'a [&'a str],
}

/// Wrap page content in the shared document: head, navigation, footer
///
/// This is shared between preview and build so what you see in preview is
/// exactly what gets deployed.
pub fn layout(site: &Site, meta: &PageMeta<'_>, content: &str, options: &RenderOptions) -> String {
    let stylesheet = generate_stylesheet(&site.theme);
    let css_version = fingerprint(stylesheet.as_bytes());

    let full_title = if meta.title == site.metadata.name {
        format!("{} - {}", site.metadata.name, site.metadata.tagline)
    } else {
        format!("{} | {}", meta.title, site.metadata.name)
    };

    let scripts: String = meta
        .extra_scripts
        .iter()
        .map(|src| format!(r#"<script src="/{}" defer></script>"#, html_escape(src)))
        .collect();

    // Preview badge only shown in preview mode
    let preview_badge = if options.is_preview {
        r#"<div class="preview-badge">🚀 PREVIEW MODE - Live Reload Active</div>"#
    } else {
        ""
    };

    // Hot reload script only in preview mode
    let reload_script = if options.is_preview {
        r#"<script>
        // Hot reload via Server-Sent Events
        const eventSource = new EventSource('/_reload');
        eventSource.onmessage = () => location.reload();
        eventSource.onerror = () => eventSource.close();
    </script>"#
    } else {
        ""
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <meta name="description" content="{description}">
    <meta property="og:title" content="{title}">
    <meta property="og:description" content="{description}">
    <meta property="og:type" content="website">
    <meta property="og:site_name" content="{site_name}">
    <link rel="stylesheet" href="/{stylesheet}?v={css_version}">
    <script type="application/ld+json">{json_ld}</script>
</head>
<body>
    {navbar}
    <main>
{content}
    </main>
    {footer}
    {preview_badge}
    {scripts}
    {reload_script}
</body>
</html>"#,
        title = html_escape(&full_title),
        description = html_escape(meta.description),
        site_name = html_escape(&site.metadata.name),
        stylesheet = STYLESHEET_PATH,
        css_version = css_version,
        json_ld = local_business_json_ld(site),
        navbar = navbar(site, meta.current_url),
        content = content,
        footer = footer(site, options.year),
        preview_badge = preview_badge,
        scripts = scripts,
        reload_script = reload_script,
    )
}

/// Scripts a page may ask [`layout`] to include
pub fn contact_scripts() -> &'static [&'static str] {
    &[CONTACT_JS_PATH]
}

fn navbar(site: &Site, current_url: &str) -> String {
    let brand = match &site.metadata.logo {
        Some(logo) => format!(
            r#"<img src="{}" alt="{} Logo">"#,
            html_escape(&asset_url(logo)),
            html_escape(&site.metadata.name)
        ),
        None => html_escape(&site.metadata.name),
    };

    let links: String = NAV_LINKS
        .iter()
        .map(|(label, href)| {
            let active = is_active(href, current_url);
            format!(
                r#"<li><a href="{}"{}>{}</a></li>"#,
                href,
                if active { r#" class="active""# } else { "" },
                label
            )
        })
        .collect();

    format!(
        r#"<nav class="navbar"><div class="container"><a href="/" class="brand">{}</a><ul class="nav-links">{}</ul></div></nav>"#,
        brand, links
    )
}

/// A nav entry is active for its own URL and, except for Home, anything below it
fn is_active(href: &str, current_url: &str) -> bool {
    if href == "/" {
        current_url == "/"
    } else {
        current_url == href || current_url.starts_with(&format!("{}/", href))
    }
}

fn footer(site: &Site, year: i32) -> String {
    let contact = &site.contact;

    let address = contact
        .address
        .iter()
        .map(|line| html_escape(line))
        .collect::<Vec<_>>()
        .join("<br>");

    let hours: String = contact
        .hours
        .iter()
        .map(|h| format!("<p>{}: {}</p>", html_escape(&h.days), html_escape(&h.hours)))
        .collect();

    let quick_links: String = NAV_LINKS
        .iter()
        .skip(1)
        .map(|(label, href)| format!(r#"<li><a href="{}">{}</a></li>"#, href, label))
        .collect();

    format!(
        r#"<footer>
    <div class="container">
        <div class="grid">
            <div>
                <h3>Contact Us</h3>
                <p>{phone_icon} {phone}</p>
                <p>{mail_icon} {email}</p>
                <p>{pin_icon} {address}</p>
            </div>
            <div>
                <h3>Quick Links</h3>
                <ul>{quick_links}</ul>
            </div>
            <div>
                <h3>Business Hours</h3>
                {hours}
            </div>
        </div>
        <div class="footer-bottom">
            <p>&copy; {year} {name}. All rights reserved.</p>
        </div>
    </div>
</footer>"#,
        phone_icon = icon("phone"),
        phone = html_escape(&contact.phone),
        mail_icon = icon("mail"),
        email = html_escape(&contact.email),
        pin_icon = icon("map-pin"),
        address = address,
        quick_links = quick_links,
        hours = hours,
        year = year,
        name = html_escape(&site.metadata.name),
    )
}

/// schema.org LocalBusiness description of the site owner
pub fn local_business_json_ld(site: &Site) -> String {
    let mut business = serde_json::json!({
        "@context": "https://schema.org",
        "@type": "LocalBusiness",
        "name": site.metadata.name,
        "description": site.metadata.description,
        "telephone": site.contact.phone,
        "email": site.contact.email,
    });

    if let Some(base_url) = &site.metadata.base_url {
        business["@id"] = serde_json::Value::String(base_url.clone());
        business["url"] = serde_json::Value::String(base_url.clone());
    }

    if !site.contact.address.is_empty() {
        business["address"] = serde_json::json!({
            "@type": "PostalAddress",
            "streetAddress": site.contact.address.join(", "),
        });
    }

    if !site.contact.hours.is_empty() {
        business["openingHours"] = site
            .contact
            .hours
            .iter()
            .map(|h| format!("{} {}", h.days, h.hours))
            .collect();
    }

    // Keep "</script>" in user text from closing the element early
    business.to_string().replace("</", "<\\/")
}
