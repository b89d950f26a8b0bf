// This file is part of the product Star History.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use super::catalog::BlogFrontmatter;
use crate::app_state::AppState;
use crate::config::ValidatedConfig;
use actix_web::{HttpResponse, Result, web};

// Namespace set expected by crawler tooling, declared even where unused.
const SITEMAP_NAMESPACES: &str = concat!(
    r#"xmlns="http://www.sitemaps.org/schemas/sitemap/0.9""#,
    r#" xmlns:news="http://www.google.com/schemas/sitemap-news/0.9""#,
    r#" xmlns:xhtml="http://www.w3.org/1999/xhtml""#,
    r#" xmlns:mobile="http://www.google.com/schemas/sitemap-mobile/1.0""#,
    r#" xmlns:image="http://www.google.com/schemas/sitemap-image/1.1""#,
    r#" xmlns:video="http://www.google.com/schemas/sitemap-video/1.1""#,
);

pub async fn robots_txt(config: web::Data<ValidatedConfig>) -> Result<HttpResponse> {
    let instance_url = &config.site.instance_url;
    let body = format!(
        "User-agent: *\nAllow: /\nHost: {}\nSitemap: {}/sitemap.xml",
        instance_url, instance_url
    );

    Ok(HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(body))
}

pub async fn sitemap_xml(
    config: web::Data<ValidatedConfig>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let xml = build_sitemap(app_state.catalog.all(), &config.site.instance_url);

    Ok(HttpResponse::Ok()
        .content_type("application/xml; charset=utf-8")
        .body(xml))
}

/// One `<url>` element per catalog entry, in catalog order. An empty catalog
/// produces a valid empty `<urlset>`.
pub fn build_sitemap(entries: &[BlogFrontmatter], instance_url: &str) -> String {
    let urls: Vec<String> = entries
        .iter()
        .map(|entry| {
            let loc = escape_xml(&format!("{}/blog/{}", instance_url, entry.slug));
            format!("<url><loc>{}</loc></url>", loc)
        })
        .collect();

    format!("<urlset {}>{}</urlset>", SITEMAP_NAMESPACES, urls.join("\n"))
}

fn escape_xml(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '\"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
