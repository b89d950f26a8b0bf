// This file is part of the product Star History.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

#![allow(dead_code)]

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};
use starfront::app_state::AppState;
use starfront::config::{AppConfig, LoggingConfig, ServerConfig, SiteConfig, ValidatedConfig};
use starfront::headers;
use starfront::public;
use starfront::runtime_paths::RuntimePaths;
use starfront::util::test_fixtures::TestFixtureRoot;
use std::path::PathBuf;
use std::sync::Arc;

pub const INSTANCE_URL: &str = "https://starhistory.test";

pub const TEST_INDEX_HTML: &str = r#"<!DOCTYPE html>
<html>
  <head>
    <meta charset="utf-8" />
    <!-- star-history.head.placeholder -->
  </head>
  <body>
    <div id="app"></div>
    <!-- star-history.body.placeholder -->
    <script src="/assets/index.js"></script>
  </body>
</html>
"#;

pub const TEST_BLOG_DATA: &str = r#"[
  {
    "slug": "how-to-use",
    "title": "How to use this site",
    "excerpt": "A short guided tour.",
    "featureImage": "/assets/blog/how-to-use.webp"
  },
  {
    "slug": "bare-entry"
  }
]"#;

pub struct TestHarness {
    pub fixture: TestFixtureRoot,
    pub config: Arc<ValidatedConfig>,
    pub runtime_paths: RuntimePaths,
    pub app_state: Arc<AppState>,
}

#[derive(Clone)]
pub struct AppBundle {
    pub config: Arc<ValidatedConfig>,
    pub app_state: Arc<AppState>,
    pub dist_dir: PathBuf,
}

impl TestHarness {
    pub fn new(suite: &str) -> Self {
        let fixture = TestFixtureRoot::new_unique(suite).expect("fixture root");
        fixture
            .write_index_html(TEST_INDEX_HTML)
            .expect("seed index.html");
        fixture
            .write_blog_data(TEST_BLOG_DATA)
            .expect("seed blog data");

        Self::from_fixture(fixture)
    }

    /// Builds the harness from an already-seeded fixture, for suites that
    /// need a non-default dist layout.
    pub fn from_fixture(fixture: TestFixtureRoot) -> Self {
        let config = Arc::new(build_config());
        let runtime_paths = fixture.runtime_paths().expect("runtime paths");
        let app_state = Arc::new(AppState::load(&runtime_paths));

        Self {
            fixture,
            config,
            runtime_paths,
            app_state,
        }
    }

    pub fn app_bundle(&self) -> AppBundle {
        AppBundle {
            config: self.config.clone(),
            app_state: self.app_state.clone(),
            dist_dir: self.runtime_paths.dist_dir.clone(),
        }
    }
}

pub fn build_test_app(
    bundle: AppBundle,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let dist_dir = bundle.dist_dir;

    App::new()
        .app_data(web::Data::from(bundle.config))
        .app_data(web::Data::from(bundle.app_state))
        .wrap(headers::Headers::new())
        .configure(move |cfg| public::configure(cfg, &dist_dir))
}

fn build_config() -> ValidatedConfig {
    ValidatedConfig {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8081,
            workers: 1,
        },
        app: AppConfig {
            name: "Star History".to_string(),
            description: "Test instance".to_string(),
        },
        site: SiteConfig {
            instance_url: INSTANCE_URL.to_string(),
            dist_dir: "dist".to_string(),
        },
        logging: LoggingConfig {
            level: "info".to_string(),
        },
    }
}
