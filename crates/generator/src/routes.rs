//! Route table of the generated site.
//!
//! Static pages are fixed; blog post routes come from the page resolver, so
//! the set of generated post pages always equals the catalog.

use site_kit_core::{PageResolver, RenderResult, Site};

use crate::RenderOptions;
use crate::pages;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    About,
    Services,
    Products,
    Contact,
    BlogIndex,
    BlogPost(String),
}

impl Route {
    /// Map a request path onto a route.
    ///
    /// Trailing slashes and a trailing `index.html` are ignored, so both the
    /// pretty URL and the generated file path resolve. Returns `None` for
    /// paths that are not part of the site.
    pub fn parse(path: &str) -> Option<Route> {
        let path = path.split(['?', '#']).next().unwrap_or("");
        let trimmed = path.trim_matches('/');

        let mut segments: Vec<&str> = if trimmed.is_empty() {
            Vec::new()
        } else {
            trimmed.split('/').collect()
        };
        if segments.last() == Some(&"index.html") {
            segments.pop();
        }

        match segments.as_slice() {
            [] => Some(Route::Home),
            ["about"] => Some(Route::About),
            ["services"] => Some(Route::Services),
            ["products"] => Some(Route::Products),
            ["contact"] => Some(Route::Contact),
            ["blog"] => Some(Route::BlogIndex),
            ["blog", slug] if !slug.is_empty() => Some(Route::BlogPost(slug.to_string())),
            _ => None,
        }
    }

    pub fn url(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::About => "/about".to_string(),
            Route::Services => "/services".to_string(),
            Route::Products => "/products".to_string(),
            Route::Contact => "/contact".to_string(),
            Route::BlogIndex => "/blog".to_string(),
            Route::BlogPost(slug) => format!("/blog/{}", slug),
        }
    }

    /// File the route is written to, relative to the output directory
    pub fn output_path(&self) -> String {
        match self {
            Route::Home => "index.html".to_string(),
            other => format!("{}/index.html", other.url().trim_start_matches('/')),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageStatus {
    Ok,
    NotFound,
}

#[derive(Debug, Clone)]
pub struct RenderedPage {
    pub status: PageStatus,
    pub html: String,
}

/// Every route of the site in build order: static pages, then one page per
/// catalog entry in catalog order.
pub fn site_routes(site: &Site) -> Vec<Route> {
    let mut routes = vec![
        Route::Home,
        Route::About,
        Route::Services,
        Route::Products,
        Route::BlogIndex,
        Route::Contact,
    ];

    let resolver = PageResolver::new(&site.catalog);
    routes.extend(
        resolver
            .list_routes()
            .into_iter()
            .map(|slug| Route::BlogPost(slug.to_string())),
    );

    routes
}

pub fn render_route(site: &Site, route: &Route, options: &RenderOptions) -> RenderedPage {
    let ok = |html: String| RenderedPage {
        status: PageStatus::Ok,
        html,
    };

    match route {
        Route::Home => ok(pages::home(site, options)),
        Route::About => ok(pages::about(site, options)),
        Route::Services => ok(pages::services(site, options)),
        Route::Products => ok(pages::products(site, options)),
        Route::Contact => ok(pages::contact(site, options)),
        Route::BlogIndex => ok(pages::blog_index(site, options)),
        Route::BlogPost(slug) => match PageResolver::new(&site.catalog).resolve(slug) {
            RenderResult::Found(post) => ok(pages::blog_post(site, post, options)),
            RenderResult::NotFound => {
                tracing::debug!(slug = %slug, "no post for slug");
                RenderedPage {
                    status: PageStatus::NotFound,
                    html: pages::post_not_found(site, slug, options),
                }
            }
        },
    }
}

/// Page for paths outside the route table
pub fn render_not_found(site: &Site, options: &RenderOptions) -> RenderedPage {
    RenderedPage {
        status: PageStatus::NotFound,
        html: pages::not_found(site, options),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_static_routes() {
        assert_eq!(Route::parse("/"), Some(Route::Home));
        assert_eq!(Route::parse(""), Some(Route::Home));
        assert_eq!(Route::parse("/index.html"), Some(Route::Home));
        assert_eq!(Route::parse("/about"), Some(Route::About));
        assert_eq!(Route::parse("/about/"), Some(Route::About));
        assert_eq!(Route::parse("/services/index.html"), Some(Route::Services));
        assert_eq!(Route::parse("/products"), Some(Route::Products));
        assert_eq!(Route::parse("/contact?from=footer"), Some(Route::Contact));
        assert_eq!(Route::parse("/blog"), Some(Route::BlogIndex));
    }

    #[test]
    fn test_parse_blog_post() {
        assert_eq!(
            Route::parse("/blog/boost-immune-system"),
            Some(Route::BlogPost("boost-immune-system".to_string()))
        );
        assert_eq!(
            Route::parse("/blog/boost-immune-system/"),
            Some(Route::BlogPost("boost-immune-system".to_string()))
        );
        assert_eq!(
            Route::parse("/blog/unknown-slug/index.html"),
            Some(Route::BlogPost("unknown-slug".to_string()))
        );
    }

    #[test]
    fn test_parse_unknown_paths() {
        assert_eq!(Route::parse("/pricing"), None);
        assert_eq!(Route::parse("/blog/a/b"), None);
        assert_eq!(Route::parse("/about/team"), None);
        assert_eq!(Route::parse("/aboutindex.html"), None);
        assert_eq!(Route::parse("/blog/fooindex.html"), None);
        assert_eq!(Route::parse("/blog/index.html/extra"), None);
    }

    #[test]
    fn test_url_and_output_path() {
        assert_eq!(Route::Home.url(), "/");
        assert_eq!(Route::Home.output_path(), "index.html");
        assert_eq!(Route::About.output_path(), "about/index.html");
        assert_eq!(Route::BlogIndex.output_path(), "blog/index.html");

        let post = Route::BlogPost("managing-chronic-conditions".to_string());
        assert_eq!(post.url(), "/blog/managing-chronic-conditions");
        assert_eq!(post.output_path(), "blog/managing-chronic-conditions/index.html");
    }

    #[test]
    fn test_url_parses_back_to_route() {
        let routes = [
            Route::Home,
            Route::About,
            Route::Services,
            Route::Products,
            Route::Contact,
            Route::BlogIndex,
            Route::BlogPost("understanding-prescriptions".to_string()),
        ];
        for route in routes {
            assert_eq!(Route::parse(&route.url()), Some(route.clone()));
            assert_eq!(Route::parse(&route.output_path()), Some(route));
        }
    }
}
