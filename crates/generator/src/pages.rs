//! One function per page of the site. Each returns a complete HTML document.

use site_kit_core::{ContentRecord, Site};

use crate::RenderOptions;
use crate::components::{
    ButtonVariant, CardProps, button, card, delay_style, hero, icon, page_banner, post_card,
    product_grid, section_heading, service_card, submit_button,
};
use crate::html::{asset_url, html_escape};
use crate::layout::{PageMeta, contact_scripts, layout};
use crate::markdown::{BodyPolicy, render_body};

/// Number of posts previewed on the home page
const HOME_POST_COUNT: usize = 3;

fn meta<'a>(title: &'a str, description: &'a str, current_url: &'a str) -> PageMeta<'a> {
    PageMeta {
        title,
        description,
        current_url,
        extra_scripts: &[],
    }
}

pub fn home(site: &Site, options: &RenderOptions) -> String {
    let name = &site.metadata.name;

    let mut actions = String::new();
    if let Some(whatsapp) = &site.contact.whatsapp {
        actions.push_str(&button("Order on WhatsApp", whatsapp, ButtonVariant::Primary, ""));
    }
    actions.push_str(&button("Explore Products", "/products", ButtonVariant::Secondary, ""));

    let logo_alt = format!("{} Logo", name);
    let hero_html = hero(
        &site.metadata.tagline,
        &site.metadata.description,
        site.metadata.logo.as_deref().map(|l| (l, logo_alt.as_str())),
        site.metadata.hero_image.as_deref().map(|h| (h, name.as_str())),
        &actions,
    );

    let posts: String = site
        .catalog
        .iter()
        .take(HOME_POST_COUNT)
        .enumerate()
        .map(|(i, post)| post_card(post, i, false))
        .collect();

    let content = format!(
        r#"{hero}
<section class="section section-light">
    <div class="container">
        {offer_heading}
        {products}
    </div>
</section>
<section class="section">
    <div class="container">
        {tips_heading}
        <div class="grid">{posts}</div>
        <div class="text-center" style="margin-top: 3rem">{all_posts}</div>
    </div>
</section>
{strip}"#,
        hero = hero_html,
        offer_heading = section_heading(
            "What We Offer",
            "Comprehensive pharmaceutical solutions for all your healthcare needs"
        ),
        products = product_grid(site.featured_products()),
        tips_heading = section_heading(
            "Health Tips & Insights",
            "Stay informed with expert advice and health information"
        ),
        posts = posts,
        all_posts = button("View All Articles", "/blog", ButtonVariant::Secondary, ""),
        strip = contact_strip(site),
    );

    layout(site, &meta(name, &site.metadata.description, "/"), &content, options)
}

fn contact_strip(site: &Site) -> String {
    let whatsapp = site
        .contact
        .whatsapp
        .as_deref()
        .map(|link| {
            format!(
                r#"<div><p>{}</p><p><strong>WhatsApp</strong></p><a href="{}">Chat with us</a></div>"#,
                icon("message-circle"),
                html_escape(link)
            )
        })
        .unwrap_or_default();

    let open_hours = site
        .contact
        .hours
        .first()
        .map(|h| {
            format!(
                r#"<div><p>{}</p><p><strong>Open Hours</strong></p><p>{}: {}</p></div>"#,
                icon("clock"),
                html_escape(&h.days),
                html_escape(&h.hours)
            )
        })
        .unwrap_or_default();

    format!(
        r#"<section class="section section-accent"><div class="container contact-strip"><div><p>{}</p><p><strong>Call Us</strong></p><p>{}</p></div>{}{}</div></section>"#,
        icon("phone"),
        html_escape(&site.contact.phone),
        whatsapp,
        open_hours
    )
}

pub fn about(site: &Site, options: &RenderOptions) -> String {
    let name = &site.metadata.name;
    let title = format!("About {}", name);

    let values: String = site
        .values
        .iter()
        .enumerate()
        .map(|(i, value)| {
            format!(
                r#"<div class="card reveal" style="{}"><div class="card-body"><div class="icon-circle">{}</div><h3>{}</h3><p>{}</p></div></div>"#,
                delay_style(i),
                icon(&value.icon),
                html_escape(&value.title),
                html_escape(&value.description)
            )
        })
        .collect();

    let team: String = site
        .team
        .iter()
        .enumerate()
        .map(|(i, member)| {
            format!(
                r#"<div class="reveal-scale" style="{}">{}</div>"#,
                delay_style(i),
                card(&CardProps {
                    title: Some(&member.name),
                    description: Some(&member.role),
                    image: Some(&member.image),
                    image_alt: &member.name,
                    ..CardProps::default()
                })
            )
        })
        .collect();

    let team_section = if team.is_empty() {
        String::new()
    } else {
        format!(
            r#"<section class="section section-light"><div class="container">{}<div class="grid">{}</div></div></section>"#,
            section_heading(
                "Our Professional Team",
                "Licensed pharmacists and healthcare professionals dedicated to your wellbeing"
            ),
            team
        )
    };

    let content = format!(
        r#"{banner}
<section class="section">
    <div class="container">
        <div class="container-narrow reveal" style="margin-bottom: 4rem">
            <h2>Our Mission</h2>
            <p class="muted">{description}</p>
        </div>
        <div class="grid grid-4">{values}</div>
    </div>
</section>
{team}"#,
        banner = page_banner(
            &title,
            "Your trusted partner in health and wellness"
        ),
        description = html_escape(&site.metadata.description),
        values = values,
        team = team_section,
    );

    layout(site, &meta(&title, &site.metadata.description, "/about"), &content, options)
}

pub fn services(site: &Site, options: &RenderOptions) -> String {
    let cards: String = site.services.iter().map(service_card).collect();

    let content = format!(
        r#"{}
<section class="section"><div class="container"><div class="grid">{}</div></div></section>
<section class="section section-light"><div class="container text-center reveal">
    <h2>Need Help With Your Medication?</h2>
    <p class="muted" style="margin: 1rem 0 2rem">Our pharmacists are ready to answer your questions.</p>
    {}
</div></section>"#,
        page_banner(
            "Our Services",
            "Professional pharmaceutical care tailored to your needs"
        ),
        cards,
        button("Contact Us", "/contact", ButtonVariant::Primary, "")
    );

    layout(
        site,
        &meta("Services", "Pharmacy services and consultations", "/services"),
        &content,
        options,
    )
}

pub fn products(site: &Site, options: &RenderOptions) -> String {
    let content = format!(
        r#"{}
<section class="section"><div class="container">{}</div></section>"#,
        page_banner(
            "Our Products",
            "Quality healthcare products from trusted manufacturers"
        ),
        product_grid(&site.products)
    );

    layout(
        site,
        &meta("Products", "Product categories we stock", "/products"),
        &content,
        options,
    )
}

pub fn blog_index(site: &Site, options: &RenderOptions) -> String {
    let posts: String = site
        .catalog
        .iter()
        .enumerate()
        .map(|(i, post)| post_card(post, i, true))
        .collect();

    let subtitle = format!(
        "Expert advice, health tips, and pharmaceutical insights from {}",
        site.metadata.name
    );

    let content = format!(
        r#"{}
<section class="section"><div class="container"><div class="grid">{}</div></div></section>
<section class="section section-light"><div class="container-narrow text-center">
    <h2>Stay Informed</h2>
    <p class="muted">Contact us via WhatsApp or email to subscribe to our newsletter</p>
</div></section>"#,
        page_banner("Health Blog", &subtitle),
        posts
    );

    layout(site, &meta("Health Blog", &subtitle, "/blog"), &content, options)
}

pub fn blog_post(site: &Site, post: &ContentRecord, options: &RenderOptions) -> String {
    let policy = BodyPolicy::from_trust_flag(site.metadata.trust_body_html);
    let url = format!("/blog/{}", post.slug);

    let content = format!(
        r#"<section class="banner" style="text-align: left">
    <div class="container-narrow">
        <a href="/blog" class="back-link">← Back to Blog</a>
        <div class="reveal">
            <div class="post-meta">
                <span>{calendar} {date}</span>
                <span class="badge">{tag} {category}</span>
                <span>{user} {author}</span>
            </div>
            <h1>{title}</h1>
        </div>
    </div>
</section>
<section class="section" style="padding-bottom: 0">
    <div class="container-narrow reveal-scale">
        <img src="{image}" alt="{title}" class="post-image">
    </div>
</section>
<article class="section">
    <div class="container-narrow prose reveal" style="animation-delay: 0.2s">
{body}
    </div>
</article>
<section class="section section-light">
    <div class="container-narrow text-center">
        <h2 style="margin-bottom: 1rem">Read More Health Tips</h2>
        {all_posts}
    </div>
</section>"#,
        calendar = icon("calendar"),
        date = html_escape(&post.display_date()),
        tag = icon("tag"),
        category = html_escape(&post.category),
        user = icon("user"),
        author = html_escape(&post.author),
        title = html_escape(&post.title),
        image = html_escape(&asset_url(&post.image_ref)),
        body = render_body(&post.body, policy),
        all_posts = button("View All Articles", "/blog", ButtonVariant::Primary, ""),
    );

    layout(site, &meta(&post.title, &post.excerpt, &url), &content, options)
}

/// Shown for /blog/<slug> when the slug is not in the catalog
pub fn post_not_found(site: &Site, slug: &str, options: &RenderOptions) -> String {
    let url = format!("/blog/{}", slug);
    let content = r#"<section class="section"><div class="container text-center" style="padding: 6rem 0">
    <h1 style="margin-bottom: 1rem">Post Not Found</h1>
    <a href="/blog" class="back-link">← Back to Blog</a>
</div></section>"#;

    layout(
        site,
        &meta("Post Not Found", "The requested article does not exist", &url),
        content,
        options,
    )
}

/// Shown for any path outside the route table
pub fn not_found(site: &Site, options: &RenderOptions) -> String {
    let content = format!(
        r#"<section class="section"><div class="container text-center" style="padding: 6rem 0">
    <h1 style="margin-bottom: 1rem">Page Not Found</h1>
    <p class="muted" style="margin-bottom: 2rem">The page you are looking for does not exist.</p>
    {}
</div></section>"#,
        button("Back to Home", "/", ButtonVariant::Primary, "")
    );

    layout(
        site,
        &meta("Page Not Found", "The requested page does not exist", ""),
        &content,
        options,
    )
}

pub fn contact(site: &Site, options: &RenderOptions) -> String {
    let contact = &site.contact;

    let item = |glyph: &str, heading: &str, body_html: String| {
        format!(
            r#"<div class="contact-item"><div class="icon-circle">{}</div><div><h3>{}</h3>{}</div></div>"#,
            glyph, heading, body_html
        )
    };

    let mut details = String::new();
    details.push_str(&item(
        icon("phone"),
        "Phone",
        format!(r#"<p class="muted">{}</p>"#, html_escape(&contact.phone)),
    ));
    if let Some(whatsapp) = &contact.whatsapp {
        details.push_str(&item(
            icon("message-circle"),
            "WhatsApp",
            format!(
                r#"<a href="{}" class="back-link">Chat with us on WhatsApp</a>"#,
                html_escape(whatsapp)
            ),
        ));
    }
    details.push_str(&item(
        icon("mail"),
        "Email",
        format!(
            r#"<a href="mailto:{0}" class="muted">{0}</a>"#,
            html_escape(&contact.email)
        ),
    ));
    if !contact.address.is_empty() {
        let lines: Vec<String> = contact.address.iter().map(|l| html_escape(l)).collect();
        details.push_str(&item(
            icon("map-pin"),
            "Address",
            format!(r#"<p class="muted">{}</p>"#, lines.join("<br>")),
        ));
    }
    if !contact.hours.is_empty() {
        let hours: String = contact
            .hours
            .iter()
            .map(|h| format!("<p>{}: {}</p>", html_escape(&h.days), html_escape(&h.hours)))
            .collect();
        details.push_str(&item(
            icon("clock"),
            "Business Hours",
            format!(r#"<div class="muted">{}</div>"#, hours),
        ));
    }

    let content = format!(
        r#"{banner}
<section class="section">
    <div class="container grid grid-2">
        <div class="slide-left">
            <h2 style="margin-bottom: 2rem">Get In Touch</h2>
            {details}
        </div>
        <div class="slide-right">
            <h2 style="margin-bottom: 2rem">Send Us a Message</h2>
            <form id="contact-form" class="contact-form">
                <label for="name">Your Name</label>
                <input type="text" id="name" name="name" required>
                <label for="email">Email Address</label>
                <input type="email" id="email" name="email" required>
                <label for="message">Message</label>
                <textarea id="message" name="message" rows="6" required></textarea>
                {submit}
            </form>
        </div>
    </div>
</section>"#,
        banner = page_banner(
            "Contact Us",
            "We're here to help. Get in touch with our team today."
        ),
        details = details,
        submit = submit_button("Send Message", ButtonVariant::Primary, "btn-block"),
    );

    let page_meta = PageMeta {
        extra_scripts: contact_scripts(),
        ..meta("Contact Us", "Phone, WhatsApp, email and opening hours", "/contact")
    };

    layout(site, &page_meta, &content, options)
}
