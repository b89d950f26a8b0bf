// This file is part of the product Star History.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use super::metadata::PageMetadata;
use crate::app_state::AppState;
use crate::config::ValidatedConfig;
use actix_files::NamedFile;
use actix_web::{HttpRequest, HttpResponse, Result, web};
use log::warn;

const HTML_CONTENT_TYPE: &str = "text/html; charset=utf-8";

/// `GET /blog/{slug}`. Build artifacts under `dist/blog/` (such as the blog
/// index the client bundle fetches) keep priority over slug resolution. A
/// known slug gets the shell with entry metadata injected and a per-slug body
/// marker. An unknown slug is not a 404: the default shell is served and the
/// client-side router owns the not-found UX.
pub async fn blog_post(
    req: HttpRequest,
    slug: web::Path<String>,
    config: web::Data<ValidatedConfig>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let slug = slug.into_inner();

    if let Some(response) = serve_blog_artifact(&req, &app_state, &slug) {
        return Ok(response);
    }

    let body = match app_state.catalog.find_by_slug(&slug) {
        Some(entry) => {
            let metadata = PageMetadata::resolve(&config.site.instance_url, Some(entry));
            app_state.shell.entry_page(&metadata, &slug)
        }
        None => app_state.shell.default_page().to_string(),
    };

    Ok(HttpResponse::Ok()
        .content_type(HTML_CONTENT_TYPE)
        .body(body))
}

/// `GET /` and `GET /index.html`, routed ahead of the file service so the
/// served shell carries default metadata instead of the raw build artifact.
pub async fn index(app_state: web::Data<AppState>) -> Result<HttpResponse> {
    Ok(default_page_response(&app_state))
}

/// The catch-all response: the shell with default metadata. Shared by the
/// index routes and the asset service's SPA fallback.
pub fn default_page_response(app_state: &AppState) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(HTML_CONTENT_TYPE)
        .body(app_state.shell.default_page().to_string())
}

/// Serves an existing file under `dist/blog/` for a slug-shaped path. The
/// canonical-path check keeps percent-decoded traversal segments from
/// escaping the dist directory.
fn serve_blog_artifact(
    req: &HttpRequest,
    app_state: &AppState,
    slug: &str,
) -> Option<HttpResponse> {
    let candidate = app_state.runtime_paths.dist_dir.join("blog").join(slug);
    let canonical = candidate.canonicalize().ok()?;
    if !canonical.starts_with(&app_state.runtime_paths.dist_dir) || !canonical.is_file() {
        return None;
    }

    match NamedFile::open(&canonical) {
        Ok(file) => Some(file.into_response(req)),
        Err(err) => {
            warn!(
                "Failed to open blog artifact {}: {}",
                canonical.display(),
                err
            );
            None
        }
    }
}
