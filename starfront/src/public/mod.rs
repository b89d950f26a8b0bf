// This file is part of the product Star History.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use actix_web::web;
use std::path::Path;

pub mod assets;
pub mod catalog;
pub mod handlers;
pub mod metadata;
pub mod seo;
pub mod shell;

/// Route priority mirrors the response strategies: crawler endpoints and the
/// explicit page routes first, then the file service with its SPA fallback.
/// `/` and `/index.html` are routed ahead of the file service so they serve
/// the shell with default metadata injected instead of the raw artifact.
pub fn configure(cfg: &mut web::ServiceConfig, dist_dir: &Path) {
    cfg.route("/robots.txt", web::get().to(seo::robots_txt))
        .route("/sitemap.xml", web::get().to(seo::sitemap_xml))
        .route("/blog/{slug}", web::get().to(handlers::blog_post))
        .route("/", web::get().to(handlers::index))
        .route("/index.html", web::get().to(handlers::index))
        .service(assets::dist_files(dist_dir));
}
