//! `GET /sitemap.xml` built from `SiteConfig`.

use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;

use crate::config::SiteConfig;
use crate::state::AppState;

/// Absolute URLs for every configured route that is not excluded, in order,
/// without duplicates.
#[must_use]
pub fn sitemap_urls(site: &SiteConfig) -> Vec<String> {
    let mut urls: Vec<String> = Vec::new();
    for route in &site.routes {
        if site.exclude.iter().any(|ex| ex == route) {
            continue;
        }
        let path = if route.starts_with('/') { route.clone() } else { format!("/{route}") };
        let url = format!("{}{path}", site.hostname);
        if !urls.contains(&url) {
            urls.push(url);
        }
    }
    urls
}

fn escape_xml(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

#[must_use]
pub fn render_sitemap(site: &SiteConfig) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );
    for url in sitemap_urls(site) {
        xml.push_str("  <url><loc>");
        xml.push_str(&escape_xml(&url));
        xml.push_str("</loc></url>\n");
    }
    xml.push_str("</urlset>\n");
    xml
}

pub async fn sitemap(State(state): State<AppState>) -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "application/xml")], render_sitemap(&state.config.site))
}

#[cfg(test)]
#[path = "sitemap_test.rs"]
mod tests;
