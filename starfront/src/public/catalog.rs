// This file is part of the product Star History.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use log::warn;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Frontmatter of one published blog post, as the frontend build emits it
/// into `blog/data.json`. Optional fields default to empty strings; an empty
/// field never overrides site-default metadata.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct BlogFrontmatter {
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default, rename = "featureImage")]
    pub feature_image: String,
}

/// Immutable snapshot of the published blog index, loaded once at startup.
#[derive(Debug, Default)]
pub struct BlogCatalog {
    entries: Vec<BlogFrontmatter>,
}

impl BlogCatalog {
    /// Reads the blog index produced by the frontend build. A missing or
    /// unparseable file yields an empty catalog so the rest of the site keeps
    /// serving; individually malformed entries are skipped.
    pub fn load(path: &Path) -> Self {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                warn!(
                    "Blog index {} not readable ({}); serving an empty catalog",
                    path.display(),
                    err
                );
                return Self::default();
            }
        };

        Self::parse(&content, &path.display().to_string())
    }

    fn parse(content: &str, origin: &str) -> Self {
        let raw_entries: Vec<serde_json::Value> = match serde_json::from_str(content) {
            Ok(entries) => entries,
            Err(err) => {
                warn!(
                    "Blog index {} is not a JSON array ({}); serving an empty catalog",
                    origin, err
                );
                return Self::default();
            }
        };

        let mut entries = Vec::with_capacity(raw_entries.len());
        for (position, raw) in raw_entries.into_iter().enumerate() {
            let entry: BlogFrontmatter = match serde_json::from_value(raw) {
                Ok(entry) => entry,
                Err(err) => {
                    warn!(
                        "Skipping malformed blog entry #{} in {}: {}",
                        position, origin, err
                    );
                    continue;
                }
            };
            if entry.slug.is_empty() {
                warn!("Skipping blog entry #{} in {}: missing slug", position, origin);
                continue;
            }
            entries.push(entry);
        }

        Self { entries }
    }

    /// All entries in source order, as used by the sitemap.
    pub fn all(&self) -> &[BlogFrontmatter] {
        &self.entries
    }

    /// Linear scan, first match wins. Duplicate slugs are a data-quality
    /// issue in the build output, not something handled here.
    pub fn find_by_slug(&self, slug: &str) -> Option<&BlogFrontmatter> {
        self.entries.iter().find(|entry| entry.slug == slug)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
