// This file is part of the product Star History.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use super::metadata::PageMetadata;
use log::warn;
use std::fs;
use std::path::Path;

pub const HEAD_PLACEHOLDER: &str = "<!-- star-history.head.placeholder -->";
pub const BODY_PLACEHOLDER: &str = "<!-- star-history.body.placeholder -->";

/// The built `index.html` shell, loaded once at startup.
///
/// Holds the raw template (both placeholder markers intact, for per-entry
/// injection) and the derived default page (site-default metadata in the
/// head, body marker untouched). Substitution is literal text replacement
/// against the markers; the document is never parsed.
pub struct PageShell {
    raw: String,
    default_page: String,
}

impl PageShell {
    /// Reads the shell from the build output. An unreadable file degrades to
    /// an empty document so the service still starts and serves assets.
    pub fn load(index_file: &Path) -> Self {
        let raw = match fs::read_to_string(index_file) {
            Ok(raw) => raw,
            Err(err) => {
                warn!(
                    "Frontend shell {} not readable ({}); page routes will serve an empty document",
                    index_file.display(),
                    err
                );
                String::new()
            }
        };
        Self::from_template(raw)
    }

    pub fn from_template(raw: String) -> Self {
        if !raw.is_empty() {
            for marker in [HEAD_PLACEHOLDER, BODY_PLACEHOLDER] {
                let occurrences = raw.matches(marker).count();
                if occurrences != 1 {
                    warn!(
                        "Frontend shell contains {} occurrences of marker {:?}; expected exactly one",
                        occurrences, marker
                    );
                }
            }
        }

        let default_page = raw.replace(HEAD_PLACEHOLDER, &PageMetadata::default().render_head());
        Self { raw, default_page }
    }

    /// The unmodified template, markers intact.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The shell with site-default metadata injected into the head.
    pub fn default_page(&self) -> &str {
        &self.default_page
    }

    /// The shell with entry metadata in the head and a per-slug marker in the
    /// body. The marker is how the client bundle locates the post to mount.
    pub fn entry_page(&self, metadata: &PageMetadata, slug: &str) -> String {
        self.raw
            .replace(HEAD_PLACEHOLDER, &metadata.render_head())
            .replace(BODY_PLACEHOLDER, &format!("<!-- star-history.blog.{} -->", slug))
    }
}
