// This file is part of the product Star History.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use actix_web::rt::System;
use actix_web::{App, HttpServer, middleware::Logger, web};
use log::{LevelFilter, info};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

mod app_state;
mod bootstrap;
mod config;
mod headers;
mod public;
mod runtime_paths;
mod util;

use app_state::AppState;
use config::ValidatedConfig;
use runtime_paths::RuntimePaths;

fn main() {
    let exit_code = run();
    std::process::exit(exit_code);
}

fn run() -> i32 {
    let parsed_args = match parse_args(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(error) => {
            eprintln!("❌ Invalid command line arguments: {}", error);
            eprintln!("❌ Use -C <root> to set the runtime directory.");
            return 1;
        }
    };

    if parsed_args.show_help {
        print!("{}", help_text());
        return 0;
    }

    let bootstrap = match bootstrap::bootstrap_runtime(&parsed_args.runtime_root) {
        Ok(result) => result,
        Err(error) => {
            eprintln!("❌ Bootstrap error: {}", error);
            eprintln!("❌ Application cannot start with invalid configuration.");
            return 1;
        }
    };

    let result = System::new().block_on(run_server(bootstrap));
    match result {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("❌ Server failed to start: {}", error);
            1
        }
    }
}

struct ParsedArgs {
    runtime_root: PathBuf,
    show_help: bool,
}

fn parse_args(args: impl Iterator<Item = String>) -> Result<ParsedArgs, String> {
    let mut args = args;
    let mut runtime_root = PathBuf::from(".");
    let mut show_help = false;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-C" => {
                let value = args
                    .next()
                    .ok_or_else(|| "-C requires a directory argument".to_string())?;
                runtime_root = PathBuf::from(value);
            }
            "-h" | "--help" => show_help = true,
            other => return Err(format!("Unknown argument: {}", other)),
        }
    }

    Ok(ParsedArgs {
        runtime_root,
        show_help,
    })
}

fn help_text() -> String {
    [
        "starfront - SEO frontend service for Star History",
        "",
        "Usage: starfront [-C <root>]",
        "",
        "  -C <root>   Runtime directory holding config.yaml and dist/ (default: .)",
        "  -h, --help  Print this help text",
        "",
    ]
    .join("\n")
}

async fn run_server(bootstrap: bootstrap::BootstrapResult) -> std::io::Result<()> {
    let validated_config = Arc::new(bootstrap.validated_config);
    let runtime_paths = bootstrap.runtime_paths;

    let log_level = match validated_config.logging.level.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Info,
    };

    // Configure logging with a stable format
    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] {}: {}",
                chrono::Utc::now().format("%Y-%m-%d %H:%M:%S%.3f UTC"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();

    log_startup_info(&validated_config, &runtime_paths);
    if bootstrap.created_config {
        info!(
            "First run: wrote default configuration to {}",
            runtime_paths.config_file.display()
        );
    }

    // Build the startup snapshot. Both loaders degrade to empty values when
    // the build artifacts are missing; the server still starts.
    let app_state = Arc::new(AppState::load(&runtime_paths));
    info!(
        "✅ Frontend shell loaded ({} bytes)",
        app_state.shell.raw().len()
    );
    if app_state.catalog.is_empty() {
        info!("✅ Blog catalog is empty; the sitemap will list no posts");
    } else {
        info!(
            "✅ Blog catalog loaded with {} entries",
            app_state.catalog.len()
        );
    }

    let host = validated_config.server.host.clone();
    let port = validated_config.server.port;
    let workers = validated_config.server.workers;

    let factory = {
        let config_for_app = validated_config.clone();
        let app_state_for_app = app_state.clone();
        let dist_dir = runtime_paths.dist_dir.clone();

        move || {
            let dist_dir = dist_dir.clone();

            App::new()
                .app_data(web::Data::from(config_for_app.clone()))
                .app_data(web::Data::from(app_state_for_app.clone()))
                .wrap(Logger::new(
                    r#"%a "%r" %s %b "%{Referer}i" "%{User-Agent}i" %T"#,
                ))
                .wrap(headers::Headers::new())
                .configure(move |cfg| public::configure(cfg, &dist_dir))
        }
    };

    HttpServer::new(factory)
        .workers(workers)
        .bind((host.as_str(), port))?
        .run()
        .await
}

fn log_startup_info(config: &ValidatedConfig, runtime_paths: &RuntimePaths) {
    info!("Starting {} - {}", config.app.name, config.app.description);
    info!("Workers: {}", config.server.workers);
    info!(
        "Listening on http://{}:{}",
        config.server.host, config.server.port
    );
    info!("Instance base URL: {}", config.site.instance_url);
    info!("Runtime root (canonical): {}", runtime_paths.root.display());
    info!(
        "Dist directory (canonical): {}",
        runtime_paths.dist_dir.display()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> std::vec::IntoIter<String> {
        values
            .iter()
            .map(|value| value.to_string())
            .collect::<Vec<_>>()
            .into_iter()
    }

    #[test]
    fn default_runtime_root_is_the_current_directory() {
        let parsed = parse_args(args(&[])).expect("parse");
        assert_eq!(parsed.runtime_root, PathBuf::from("."));
        assert!(!parsed.show_help);
    }

    #[test]
    fn runtime_root_follows_the_c_flag() {
        let parsed = parse_args(args(&["-C", "/srv/starfront"])).expect("parse");
        assert_eq!(parsed.runtime_root, PathBuf::from("/srv/starfront"));
    }

    #[test]
    fn missing_c_value_is_an_error() {
        assert!(parse_args(args(&["-C"])).is_err());
    }

    #[test]
    fn unknown_arguments_are_rejected() {
        assert!(parse_args(args(&["--daemon"])).is_err());
    }

    #[test]
    fn help_flag_is_recognized() {
        let parsed = parse_args(args(&["--help"])).expect("parse");
        assert!(parsed.show_help);
    }
}
