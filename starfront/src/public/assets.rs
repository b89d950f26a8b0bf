// This file is part of the product Star History.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use super::handlers;
use crate::app_state::AppState;
use actix_files::Files;
use actix_web::dev::{ServiceRequest, ServiceResponse, fn_service};
use actix_web::{HttpResponse, web};
use log::error;
use std::path::Path;

/// Static file service for the built frontend. Paths that match a file on
/// disk are served as-is; everything else falls through to the SPA shell so
/// client-side routes resolve once the bundle loads.
pub fn dist_files(dist_dir: &Path) -> Files {
    Files::new("/", dist_dir).default_handler(fn_service(|req: ServiceRequest| async move {
        let (req, _payload) = req.into_parts();

        let response = match req.app_data::<web::Data<AppState>>() {
            Some(app_state) => handlers::default_page_response(app_state),
            None => {
                error!("App state missing while serving the SPA fallback");
                HttpResponse::InternalServerError().finish()
            }
        };

        Ok(ServiceResponse::new(req, response))
    }))
}
