use site_kit_core::is_remote_ref;

/// HTML-escape a string for element text and quoted attribute values
///
/// Escapes: & < > " '
pub fn html_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

/// URL for an image reference: remote URLs pass through, site paths become root-relative
pub fn asset_url(reference: &str) -> String {
    if is_remote_ref(reference) {
        reference.to_string()
    } else {
        format!("/{}", reference.trim_start_matches("./"))
    }
}
