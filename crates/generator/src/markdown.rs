//! Post body rendering.
//!
//! Bodies are Markdown. Raw HTML inside a body is escaped and shown as text
//! unless the site opts in with `trust_body_html`.

use pulldown_cmark::{CowStr, Event, Options, Parser, Tag, html};

/// How far to trust markup embedded in a post body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyPolicy {
    /// Author-controlled content: raw HTML is emitted as-is
    Trusted,
    /// Raw HTML is escaped and script-style link targets are neutralised
    Untrusted,
}

impl BodyPolicy {
    pub fn from_trust_flag(trust_body_html: bool) -> Self {
        if trust_body_html {
            BodyPolicy::Trusted
        } else {
            BodyPolicy::Untrusted
        }
    }
}

pub fn render_body(source: &str, policy: BodyPolicy) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(source, options).map(|event| match policy {
        BodyPolicy::Trusted => event,
        BodyPolicy::Untrusted => sanitize(event),
    });

    let mut out = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

fn sanitize(event: Event<'_>) -> Event<'_> {
    match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        Event::Start(Tag::Link {
            link_type,
            dest_url,
            title,
            id,
        }) => Event::Start(Tag::Link {
            link_type,
            dest_url: safe_url(dest_url),
            title,
            id,
        }),
        Event::Start(Tag::Image {
            link_type,
            dest_url,
            title,
            id,
        }) => Event::Start(Tag::Image {
            link_type,
            dest_url: safe_url(dest_url),
            title,
            id,
        }),
        other => other,
    }
}

fn safe_url(url: CowStr<'_>) -> CowStr<'_> {
    let scheme = url.trim_start().to_ascii_lowercase();
    if scheme.starts_with("javascript:") || scheme.starts_with("vbscript:") || scheme.starts_with("data:") {
        CowStr::Borrowed("#")
    } else {
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_headings_and_lists() {
        let html = render_body(
            "# Understanding Your Prescription\n\n## Common Abbreviations\n\n- **QD** - Once daily\n- **BID** - Twice daily\n",
            BodyPolicy::Untrusted,
        );
        assert!(html.contains("<h1>Understanding Your Prescription</h1>"));
        assert!(html.contains("<h2>Common Abbreviations</h2>"));
        assert!(html.contains("<li><strong>QD</strong> - Once daily</li>"));
    }

    #[test]
    fn test_untrusted_body_escapes_raw_html() {
        let html = render_body(
            "Hello <script>alert('x')</script>\n\n<div onclick=\"steal()\">block</div>\n",
            BodyPolicy::Untrusted,
        );
        assert!(!html.contains("<script>"));
        assert!(!html.contains("<div onclick"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_trusted_body_keeps_raw_html() {
        let html = render_body("<aside class=\"tip\">Ask your pharmacist</aside>\n", BodyPolicy::Trusted);
        assert!(html.contains("<aside class=\"tip\">Ask your pharmacist</aside>"));
    }

    #[test]
    fn test_untrusted_body_neutralises_script_links() {
        let html = render_body("[click](javascript:alert(1)) and [ok](/contact)", BodyPolicy::Untrusted);
        assert!(!html.contains("javascript:"));
        assert!(html.contains("href=\"#\""));
        assert!(html.contains("href=\"/contact\""));
    }

    #[test]
    fn test_policy_from_flag() {
        assert_eq!(BodyPolicy::from_trust_flag(true), BodyPolicy::Trusted);
        assert_eq!(BodyPolicy::from_trust_flag(false), BodyPolicy::Untrusted);
    }
}
