// This file is part of the product Star History.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

mod common;

use actix_web::http::header::X_CONTENT_TYPE_OPTIONS;
use actix_web::{http::StatusCode, test};
use std::fs;

#[actix_web::test]
async fn built_assets_are_served_verbatim() {
    let harness = common::TestHarness::new("assets-verbatim");
    let assets_dir = harness.runtime_paths.dist_dir.join("assets");
    fs::create_dir_all(&assets_dir).expect("assets dir");
    fs::write(assets_dir.join("app.css"), "body { margin: 0; }").expect("write asset");

    let app = test::init_service(common::build_test_app(harness.app_bundle())).await;

    let req = test::TestRequest::get().uri("/assets/app.css").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body = test::read_body(resp).await;
    assert_eq!(body.as_ref(), b"body { margin: 0; }");
}

#[actix_web::test]
async fn asset_responses_carry_the_security_headers() {
    let harness = common::TestHarness::new("assets-headers");
    fs::write(
        harness.runtime_paths.dist_dir.join("favicon.ico"),
        b"\x00\x00\x01\x00",
    )
    .expect("write asset");

    let app = test::init_service(common::build_test_app(harness.app_bundle())).await;

    let req = test::TestRequest::get().uri("/favicon.ico").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers()
            .get(X_CONTENT_TYPE_OPTIONS)
            .and_then(|value| value.to_str().ok()),
        Some("nosniff")
    );
}

#[actix_web::test]
async fn missing_asset_paths_fall_through_to_the_shell() {
    let harness = common::TestHarness::new("assets-fallthrough");
    let app = test::init_service(common::build_test_app(harness.app_bundle())).await;

    let req = test::TestRequest::get().uri("/assets/missing.js").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body = test::read_body(resp).await;
    let html = String::from_utf8_lossy(&body);
    assert!(html.contains("<title>GitHub Star History</title>"));
}
