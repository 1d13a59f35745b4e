use sha2::{Digest, Sha256};
use site_kit_core::Theme;

pub const STYLESHEET_PATH: &str = "assets/site.css";
pub const CONTACT_JS_PATH: &str = "assets/contact.js";

/// Short content hash used as a cache-busting query string
pub fn fingerprint(content: &[u8]) -> String {
    let digest = format!("{:x}", Sha256::digest(content));
    digest[..8].to_string()
}

/// Generate the site stylesheet for a theme
///
/// A small utility layer in place of a CSS framework: brand colours come from
/// the theme, entrance animations are driven by `.reveal` plus a per-element
/// `animation-delay`.
pub fn generate_stylesheet(theme: &Theme) -> String {
    format!(
        r#"/* Theme */
:root {{
    --accent: {accent};
    --muted: {muted};
    --dark: {dark};
    --light: {light};
    --white: #ffffff;
    --accent-tint: color-mix(in srgb, var(--accent) 10%, transparent);
    --glow: 0 0 10px color-mix(in srgb, var(--accent) 18%, transparent);
}}

* {{ margin: 0; padding: 0; box-sizing: border-box; }}

body {{
    font-family: "Poppins", -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
    line-height: 1.6;
    color: var(--dark);
    background: var(--white);
    -webkit-font-smoothing: antialiased;
}}

a {{ color: inherit; text-decoration: none; }}
img {{ max-width: 100%; display: block; }}

.container {{ max-width: 80rem; margin: 0 auto; padding: 0 1rem; }}
.container-narrow {{ max-width: 56rem; margin: 0 auto; padding: 0 1rem; }}
.section {{ padding: 4rem 1rem; }}
.section-light {{ background: var(--light); }}
.section-accent {{ background: var(--accent); color: var(--white); }}
.text-center {{ text-align: center; }}
.muted {{ color: var(--muted); }}

/* Navigation */
.navbar {{
    position: fixed; top: 0; left: 0; right: 0; z-index: 50;
    background: rgba(255, 255, 255, 0.95);
    box-shadow: 0 1px 4px rgba(0, 0, 0, 0.08);
}}
.navbar .container {{ display: flex; align-items: center; justify-content: space-between; height: 5rem; }}
.brand {{ font-weight: 700; font-size: 1.4rem; color: var(--dark); }}
.brand img {{ height: 3rem; width: auto; }}
.nav-links {{ display: flex; gap: 1.5rem; list-style: none; }}
.nav-links a:hover, .nav-links a.active {{ color: var(--accent); }}
main {{ min-height: 100vh; padding-top: 5rem; }}

/* Gradient banners */
.banner {{ background: linear-gradient(135deg, var(--dark), var(--light)); padding: 4rem 1rem; text-align: center; }}
.banner h1 {{ font-size: 2.75rem; color: var(--dark); margin-bottom: 1rem; }}
.banner p {{ font-size: 1.15rem; color: var(--muted); max-width: 48rem; margin: 0 auto; }}

/* Hero */
.hero {{ background: linear-gradient(135deg, var(--dark), var(--light)); min-height: 600px; display: flex; align-items: center; }}
.hero .container {{ display: grid; grid-template-columns: 1fr 1fr; gap: 3rem; align-items: center; padding-top: 6rem; padding-bottom: 6rem; }}
.hero h1 {{ font-size: 3.25rem; line-height: 1.15; margin-bottom: 1.5rem; }}
.hero p {{ font-size: 1.2rem; color: var(--muted); margin-bottom: 2rem; }}
.hero-logo {{ width: 200px; margin-bottom: 1.5rem; }}
.hero-actions {{ display: flex; flex-wrap: wrap; gap: 1rem; }}
.hero-visual {{ border-radius: 1rem; overflow: hidden; box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25); height: 24rem; }}
.hero-visual img {{ width: 100%; height: 100%; object-fit: cover; }}

/* Buttons */
.btn {{
    display: inline-block; padding: 0.75rem 1.5rem; border-radius: 0.5rem; font-weight: 600;
    transition: transform 0.2s, background 0.2s, color 0.2s; cursor: pointer; border: none; font-size: 1rem;
}}
.btn:hover {{ transform: scale(1.05); }}
.btn-primary {{ background: var(--accent); color: var(--white); box-shadow: var(--glow); }}
.btn-secondary {{ border: 2px solid var(--muted); color: var(--muted); background: transparent; }}
.btn-secondary:hover {{ background: var(--muted); color: var(--white); }}
.btn-block {{ display: block; width: 100%; text-align: center; }}

/* Cards */
.grid {{ display: grid; gap: 2rem; grid-template-columns: repeat(3, minmax(0, 1fr)); }}
.grid-2 {{ grid-template-columns: repeat(2, minmax(0, 1fr)); }}
.grid-4 {{ grid-template-columns: repeat(4, minmax(0, 1fr)); }}
.card {{ background: var(--white); border-radius: 0.75rem; overflow: hidden; box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1); height: 100%; transition: box-shadow 0.3s; }}
.card:hover {{ box-shadow: 0 20px 25px rgba(0, 0, 0, 0.12); }}
a.card-link {{ display: block; height: 100%; transition: transform 0.2s; }}
a.card-link:hover {{ transform: scale(1.05); }}
.card-image {{ height: 12rem; width: 100%; object-fit: cover; }}
.card-body {{ padding: 1.5rem; }}
.card-body h3 {{ font-size: 1.25rem; margin-bottom: 0.5rem; }}
.card-body p {{ color: var(--muted); margin-bottom: 1rem; }}
.card-meta {{ display: flex; justify-content: space-between; align-items: center; font-size: 0.875rem; color: var(--muted); }}
.badge {{ background: var(--accent-tint); color: var(--accent); padding: 0.25rem 0.75rem; border-radius: 9999px; }}

.service-card {{ background: var(--white); border-radius: 0.75rem; padding: 2rem; box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1); text-align: center; transition: transform 0.3s, box-shadow 0.3s; }}
.service-card:hover {{ transform: translateY(-4px); box-shadow: 0 20px 25px rgba(0, 0, 0, 0.12); }}
.icon-circle {{ width: 4rem; height: 4rem; border-radius: 9999px; background: var(--accent-tint); color: var(--accent); display: flex; align-items: center; justify-content: center; margin: 0 auto 1rem; font-size: 1.75rem; }}

.section-heading {{ text-align: center; margin-bottom: 3rem; }}
.section-heading h2 {{ font-size: 2.25rem; margin-bottom: 1rem; }}
.section-heading p {{ font-size: 1.125rem; color: var(--muted); max-width: 42rem; margin: 0 auto; }}

/* Articles */
.post-meta {{ display: flex; flex-wrap: wrap; gap: 1rem; color: var(--muted); margin-bottom: 1rem; }}
.post-image {{ width: 100%; height: 24rem; object-fit: cover; border-radius: 0.75rem; box-shadow: 0 20px 25px rgba(0, 0, 0, 0.15); }}
.prose {{ color: var(--dark); font-size: 1.125rem; }}
.prose h1, .prose h2, .prose h3 {{ margin: 2rem 0 1rem; line-height: 1.3; }}
.prose p, .prose ul, .prose ol {{ margin-bottom: 1rem; }}
.prose ul, .prose ol {{ padding-left: 1.5rem; }}
.back-link {{ color: var(--accent); display: inline-block; margin-bottom: 1.5rem; }}
.back-link:hover {{ text-decoration: underline; }}

/* Contact */
.contact-item {{ display: flex; gap: 1rem; align-items: flex-start; margin-bottom: 1.5rem; }}
.contact-item .icon-circle {{ width: 3rem; height: 3rem; margin: 0; font-size: 1.25rem; flex-shrink: 0; }}
.contact-form label {{ display: block; font-weight: 600; margin-bottom: 0.5rem; }}
.contact-form input, .contact-form textarea {{ width: 100%; padding: 0.75rem 1rem; border: 1px solid var(--muted); border-radius: 0.5rem; margin-bottom: 1.5rem; font: inherit; }}
.contact-strip {{ display: grid; grid-template-columns: repeat(3, minmax(0, 1fr)); gap: 2rem; }}
.contact-strip div {{ text-align: center; }}

/* Footer */
footer {{ background: var(--dark); color: var(--white); padding: 3rem 1rem; }}
footer h3 {{ color: var(--accent); margin-bottom: 1rem; }}
footer ul {{ list-style: none; }}
footer a:hover {{ color: var(--accent); }}
.footer-bottom {{ border-top: 1px solid rgba(169, 169, 169, 0.3); margin-top: 2rem; padding-top: 2rem; text-align: center; color: var(--muted); }}

.preview-badge {{ position: fixed; bottom: 1rem; right: 1rem; z-index: 60; background: #ff6b35; color: white; padding: 0.5rem 1rem; border-radius: 4px; font-weight: bold; }}

/* Entrance animations */
@keyframes fade-up {{ from {{ opacity: 0; transform: translateY(30px); }} to {{ opacity: 1; transform: none; }} }}
@keyframes fade-scale {{ from {{ opacity: 0; transform: scale(0.9); }} to {{ opacity: 1; transform: none; }} }}
@keyframes slide-in-left {{ from {{ opacity: 0; transform: translateX(-50px); }} to {{ opacity: 1; transform: none; }} }}
@keyframes slide-in-right {{ from {{ opacity: 0; transform: translateX(50px); }} to {{ opacity: 1; transform: none; }} }}
.reveal {{ animation: fade-up 0.5s ease-out both; }}
.reveal-scale {{ animation: fade-scale 0.5s ease-out both; }}
.slide-left {{ animation: slide-in-left 0.8s ease-out both; }}
.slide-right {{ animation: slide-in-right 0.8s ease-out 0.2s both; }}

@media (prefers-reduced-motion: reduce) {{
    .reveal, .reveal-scale, .slide-left, .slide-right {{ animation: none; }}
}}

@media (max-width: 768px) {{
    .grid, .grid-2, .grid-4, .contact-strip, .hero .container {{ grid-template-columns: 1fr; }}
    .hero-visual {{ display: none; }}
    .nav-links {{ display: none; }}
    .hero h1, .banner h1 {{ font-size: 2.25rem; }}
}}
"#,
        accent = theme.accent,
        muted = theme.muted,
        dark = theme.dark,
        light = theme.light,
    )
}

/// The contact form has no backend; submitting it only explains that.
pub fn generate_contact_js() -> &'static str {
    r#"document.addEventListener('DOMContentLoaded', () => {
    const form = document.getElementById('contact-form');
    if (!form) return;
    form.addEventListener('submit', (event) => {
        event.preventDefault();
        alert('This is a static form. Please reach us by phone, WhatsApp or email.');
    });
});
"#
}
