use anyhow::{Context, Result};
use axum::{
    Router,
    extract::{Request, State},
    http::{StatusCode, header},
    response::{
        Html, IntoResponse, Response,
        sse::{Event, KeepAlive, Sse},
    },
    routing::get,
};
use notify::{Event as NotifyEvent, EventKind, RecursiveMode, Watcher};
use percent_encoding::percent_decode_str;
use site_kit_core::{Site, config::SITE_TOML, parse_site_toml};
use site_kit_generator::assets::{
    CONTACT_JS_PATH, STYLESHEET_PATH, generate_contact_js, generate_stylesheet,
};
use site_kit_generator::html::html_escape;
use site_kit_generator::{PageStatus, RenderOptions, Route, render_not_found, render_route};
use std::{net::SocketAddr, path::PathBuf};
use tokio::sync::broadcast;
use tower::ServiceExt;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use super::load_site;

#[derive(Clone)]
struct AppState {
    site_path: PathBuf,
    reload_tx: broadcast::Sender<()>,
}

/// Start preview server with hot reload for local development.
///
/// This command:
/// - Validates and loads site.toml
/// - Renders every page on request, so edits show up without a rebuild
/// - Serves the local images the site references
/// - Watches for file changes and triggers hot reload
///
/// # Arguments
///
/// * `path` - Path to site directory containing site.toml
/// * `port` - Port to serve on (default: 8080)
pub async fn run(path: PathBuf, port: u16) -> Result<()> {
    println!("🌐 Starting preview server...");
    println!("   Site: {}", path.display());

    let site = load_site(&path)?;

    println!("   ✓ Loaded: {}", site.metadata.name);
    println!("   ✓ Posts: {}", site.catalog.len());

    // Create broadcast channel for reload events
    let (reload_tx, _) = broadcast::channel::<()>(100);

    let state = AppState {
        site_path: path.clone(),
        reload_tx: reload_tx.clone(),
    };

    let app = router(state);

    // Start file watcher
    let watcher_path = path.clone();
    let watcher_tx = reload_tx.clone();
    tokio::spawn(async move {
        if let Err(e) = watch_files(watcher_path, watcher_tx).await {
            tracing::error!("File watcher error: {}", e);
        }
    });

    // Start server
    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    println!("\n🚀 Preview ready at: http://localhost:{}", port);
    println!("   Press Ctrl+C to stop\n");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to port")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

fn router(state: AppState) -> Router {
    Router::new()
        .route("/_reload", get(sse_handler))
        .route(&format!("/{}", STYLESHEET_PATH), get(stylesheet_handler))
        .route(&format!("/{}", CONTACT_JS_PATH), get(contact_js_handler))
        .fallback(page_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Watch for file changes and trigger reload
async fn watch_files(path: PathBuf, reload_tx: broadcast::Sender<()>) -> Result<()> {
    let (tx, mut rx) = tokio::sync::mpsc::channel(100);

    let mut watcher =
        notify::recommended_watcher(move |res: Result<NotifyEvent, notify::Error>| {
            if let Ok(event) = res {
                let _ = tx.blocking_send(event);
            }
        })?;

    // Watch site directory recursively
    watcher.watch(&path, RecursiveMode::Recursive)?;

    while let Some(event) = rx.recv().await {
        match event.kind {
            EventKind::Modify(_) | EventKind::Create(_) | EventKind::Remove(_) => {
                if event.paths.iter().any(|p| is_watched_file(p)) {
                    println!("   📝 File changed, reloading...");
                    let _ = reload_tx.send(());
                }
            }
            _ => {}
        }
    }

    Ok(())
}

/// Editor swap files and hidden files don't trigger a reload
fn is_watched_file(path: &std::path::Path) -> bool {
    let filename = path.file_name().unwrap_or_default().to_string_lossy();
    !filename.is_empty()
        && !filename.starts_with('.')
        && !filename.ends_with('~')
        && !filename.ends_with(".swp")
}

/// SSE endpoint for hot reload
async fn sse_handler(
    State(state): State<AppState>,
) -> Sse<impl futures::Stream<Item = Result<Event, std::convert::Infallible>>> {
    let mut rx = state.reload_tx.subscribe();

    let stream = async_stream::stream! {
        loop {
            match rx.recv().await {
                Ok(()) => yield Ok(Event::default().data("reload")),
                Err(broadcast::error::RecvError::Lagged(_)) => continue,
                Err(broadcast::error::RecvError::Closed) => break,
            }
        }
    };

    Sse::new(stream).keep_alive(KeepAlive::default())
}

/// Re-read site.toml for every request so edits are picked up immediately
fn load_current(state: &AppState) -> Result<Site, Response> {
    parse_site_toml(state.site_path.join(SITE_TOML)).map_err(|e| {
        tracing::warn!("{}", e);
        (StatusCode::INTERNAL_SERVER_ERROR, Html(config_error_page(&e.to_string()))).into_response()
    })
}

fn config_error_page(message: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html><head><title>Error</title></head><body>
<h1>Configuration Error</h1>
<pre>{}</pre>
<script>
    const eventSource = new EventSource('/_reload');
    eventSource.onmessage = () => location.reload();
</script>
</body></html>"#,
        html_escape(message)
    )
}

async fn stylesheet_handler(State(state): State<AppState>) -> Response {
    match load_current(&state) {
        Ok(site) => (
            [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
            generate_stylesheet(&site.theme),
        )
            .into_response(),
        Err(resp) => resp,
    }
}

async fn contact_js_handler() -> Response {
    (
        [(header::CONTENT_TYPE, "application/javascript; charset=utf-8")],
        generate_contact_js(),
    )
        .into_response()
}

/// Pages from the route table, then referenced local images, then 404
async fn page_handler(State(state): State<AppState>, req: Request) -> Response {
    let site = match load_current(&state) {
        Ok(site) => site,
        Err(resp) => return resp,
    };

    let options = RenderOptions::preview();
    // Slugs and image paths are matched in their decoded form
    let path = percent_decode_str(req.uri().path())
        .decode_utf8_lossy()
        .into_owned();

    if let Some(route) = Route::parse(&path) {
        let page = render_route(&site, &route, &options);
        tracing::debug!(path = %path, status = ?page.status, "rendered");
        return page_response(page.status, page.html);
    }

    let requested = path.trim_start_matches('/');
    if site.local_asset_refs().contains(&requested) {
        return match ServeDir::new(&state.site_path).oneshot(req).await {
            Ok(resp) => resp.into_response(),
            Err(never) => match never {},
        };
    }

    let page = render_not_found(&site, &options);
    page_response(page.status, page.html)
}

fn page_response(status: PageStatus, html: String) -> Response {
    let code = match status {
        PageStatus::Ok => StatusCode::OK,
        PageStatus::NotFound => StatusCode::NOT_FOUND,
    };
    (code, Html(html)).into_response()
}
