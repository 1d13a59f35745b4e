// Static site generation: components, page templates and the route table

pub mod assets;
pub mod components;
pub mod html;
pub mod layout;
pub mod markdown;
pub mod pages;
pub mod routes;

use chrono::Datelike;
use site_kit_core::Site;

pub use routes::{PageStatus, RenderedPage, Route, render_not_found, render_route, site_routes};

/// File name of the generic not-found page in the output
pub const NOT_FOUND_PAGE: &str = "404.html";

/// Switches that differ between a deployed build and the local preview
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Adds the preview badge and the live-reload script
    pub is_preview: bool,
    /// Year printed in the footer copyright line
    pub year: i32,
}

impl RenderOptions {
    pub fn build() -> Self {
        Self {
            is_preview: false,
            year: chrono::Local::now().year(),
        }
    }

    pub fn preview() -> Self {
        Self {
            is_preview: true,
            ..Self::build()
        }
    }
}

pub struct GeneratedSite {
    pub pages: Vec<(String, String)>,   // (path, html)
    pub assets: Vec<(String, Vec<u8>)>, // (path, data)
}

/// Render every route plus the not-found page and the static assets
pub fn generate_site(site: &Site, options: &RenderOptions) -> GeneratedSite {
    let mut pages: Vec<(String, String)> = site_routes(site)
        .iter()
        .map(|route| {
            let page = render_route(site, route, options);
            tracing::debug!(path = %route.output_path(), "rendered page");
            (route.output_path(), page.html)
        })
        .collect();

    pages.push((
        NOT_FOUND_PAGE.to_string(),
        render_not_found(site, options).html,
    ));

    let assets = vec![
        (
            assets::STYLESHEET_PATH.to_string(),
            assets::generate_stylesheet(&site.theme).into_bytes(),
        ),
        (
            assets::CONTACT_JS_PATH.to_string(),
            assets::generate_contact_js().as_bytes().to_vec(),
        ),
    ];

    GeneratedSite { pages, assets }
}
