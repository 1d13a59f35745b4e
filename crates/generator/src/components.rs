//! Reusable presentational pieces shared by every page.
//!
//! Each component returns an HTML fragment. Text arguments are escaped here;
//! arguments named `*_html` are already-rendered markup and pass through.

use std::time::Duration;

use site_kit_core::{ContentRecord, Product, Service};

use crate::html::{asset_url, html_escape};

/// Delay between consecutive items of an animated list
pub const STAGGER_STEP: Duration = Duration::from_millis(100);

/// Entrance delay for the `index`-th item of a list
pub fn stagger_delay(index: usize) -> Duration {
    STAGGER_STEP * index as u32
}

/// Inline style carrying the stagger delay for an item
pub fn delay_style(index: usize) -> String {
    format!("animation-delay: {:.1}s", stagger_delay(index).as_secs_f32())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonVariant {
    Primary,
    Secondary,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn btn-primary",
            ButtonVariant::Secondary => "btn btn-secondary",
        }
    }
}

/// Link styled as a button
pub fn button(label: &str, href: &str, variant: ButtonVariant, extra_class: &str) -> String {
    let class = if extra_class.is_empty() {
        variant.class().to_string()
    } else {
        format!("{} {}", variant.class(), extra_class)
    };
    format!(
        r#"<a href="{}" class="{}">{}</a>"#,
        html_escape(href),
        class,
        html_escape(label)
    )
}

/// Real `<button>` element, used for form submission
pub fn submit_button(label: &str, variant: ButtonVariant, extra_class: &str) -> String {
    format!(
        r#"<button type="submit" class="{} {}">{}</button>"#,
        variant.class(),
        extra_class,
        html_escape(label)
    )
}

/// Inputs for [`card`]. Everything is optional, like the markup it produces.
#[derive(Debug, Default)]
pub struct CardProps<'a> {
    pub title: Option<&'a str>,
    pub description: Option<&'a str>,
    pub image: Option<&'a str>,
    pub image_alt: &'a str,
    pub href: Option<&'a str>,
    pub children_html: &'a str,
}

pub fn card(props: &CardProps<'_>) -> String {
    let image_html = props
        .image
        .map(|src| {
            format!(
                r#"<img src="{}" alt="{}" class="card-image" loading="lazy">"#,
                html_escape(&asset_url(src)),
                html_escape(props.image_alt)
            )
        })
        .unwrap_or_default();

    let title_html = props
        .title
        .map(|t| format!("<h3>{}</h3>", html_escape(t)))
        .unwrap_or_default();

    let description_html = props
        .description
        .map(|d| format!("<p>{}</p>", html_escape(d)))
        .unwrap_or_default();

    let content = format!(
        r#"<div class="card">{}<div class="card-body">{}{}{}</div></div>"#,
        image_html, title_html, description_html, props.children_html
    );

    match props.href {
        Some(href) => format!(
            r#"<a href="{}" class="card-link">{}</a>"#,
            html_escape(href),
            content
        ),
        None => content,
    }
}

/// Landing hero: headline, tagline, call-to-action buttons and a visual
pub fn hero(
    title: &str,
    subtitle: &str,
    logo: Option<(&str, &str)>,
    image: Option<(&str, &str)>,
    actions_html: &str,
) -> String {
    let logo_html = logo
        .map(|(src, alt)| {
            format!(
                r#"<img src="{}" alt="{}" class="hero-logo">"#,
                html_escape(&asset_url(src)),
                html_escape(alt)
            )
        })
        .unwrap_or_default();

    let visual_html = image
        .map(|(src, alt)| {
            format!(
                r#"<div class="hero-visual slide-right"><img src="{}" alt="{}"></div>"#,
                html_escape(&asset_url(src)),
                html_escape(alt)
            )
        })
        .unwrap_or_default();

    format!(
        r#"<section class="hero">
    <div class="container">
        <div class="slide-left">
            {}
            <h1>{}</h1>
            <p>{}</p>
            <div class="hero-actions">{}</div>
        </div>
        {}
    </div>
</section>"#,
        logo_html,
        html_escape(title),
        html_escape(subtitle),
        actions_html,
        visual_html
    )
}

/// Gradient header used at the top of inner pages
pub fn page_banner(title: &str, subtitle: &str) -> String {
    format!(
        r#"<section class="banner"><div class="container reveal"><h1>{}</h1><p>{}</p></div></section>"#,
        html_escape(title),
        html_escape(subtitle)
    )
}

pub fn section_heading(title: &str, subtitle: &str) -> String {
    format!(
        r#"<div class="section-heading reveal"><h2>{}</h2><p>{}</p></div>"#,
        html_escape(title),
        html_escape(subtitle)
    )
}

/// Wrap an item so it fades in after its stagger delay
fn staggered(index: usize, inner: &str) -> String {
    format!(
        r#"<div class="reveal" style="{}">{}</div>"#,
        delay_style(index),
        inner
    )
}

/// Grid of product category cards, each with a "Learn More" button
pub fn product_grid<'a>(products: impl IntoIterator<Item = &'a Product>) -> String {
    let items: String = products
        .into_iter()
        .enumerate()
        .map(|(i, product)| {
            let learn_more = button("Learn More", product.link(), ButtonVariant::Secondary, "btn-block");
            let card_html = card(&CardProps {
                title: Some(&product.name),
                description: Some(&product.description),
                image: Some(&product.image),
                image_alt: &product.name,
                href: None,
                children_html: &learn_more,
            });
            staggered(i, &card_html)
        })
        .collect();

    format!(r#"<div class="grid">{}</div>"#, items)
}

pub fn service_card(service: &Service) -> String {
    format!(
        r#"<div class="service-card reveal-scale"><div class="icon-circle">{}</div><h3>{}</h3><p class="muted">{}</p></div>"#,
        icon(&service.icon),
        html_escape(&service.title),
        html_escape(&service.description)
    )
}

/// Blog post preview card linking to the post page
pub fn post_card(post: &ContentRecord, index: usize, with_meta: bool) -> String {
    let href = format!("/blog/{}", post.slug);
    let meta = if with_meta {
        format!(
            r#"<div class="card-meta"><span class="badge">{}</span><span>{}</span></div>"#,
            html_escape(&post.category),
            html_escape(&post.display_date())
        )
    } else {
        String::new()
    };

    staggered(
        index,
        &card(&CardProps {
            title: Some(&post.title),
            description: Some(&post.excerpt),
            image: Some(&post.image_ref),
            image_alt: &post.title,
            href: Some(&href),
            children_html: &meta,
        }),
    )
}

/// Glyph for a named icon; unknown names get a neutral dot
pub fn icon(name: &str) -> &'static str {
    match name.to_ascii_lowercase().as_str() {
        "stethoscope" => "🩺",
        "truck" => "🚚",
        "file-text" | "file" => "📄",
        "syringe" => "💉",
        "clock" => "🕒",
        "heart" => "❤",
        "shield" => "🛡",
        "users" => "👥",
        "award" => "🏅",
        "phone" => "📞",
        "mail" => "✉",
        "map-pin" => "📍",
        "message-circle" | "whatsapp" => "💬",
        "calendar" => "📅",
        "tag" => "🏷",
        "user" => "👤",
        _ => "•",
    }
}
