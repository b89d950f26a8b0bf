// This file is part of the product Star History.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

use crate::runtime_paths::RuntimePaths;

/// A disposable runtime root under target/test-fixtures, removed on drop.
#[derive(Debug)]
pub struct TestFixtureRoot {
    path: PathBuf,
}

impl TestFixtureRoot {
    pub fn new_fixed(name: &str) -> std::io::Result<Self> {
        let root = fixtures_root().join(name);
        if root.exists() {
            fs::remove_dir_all(&root)?;
        }
        fs::create_dir_all(&root)?;
        Ok(Self { path: root })
    }

    pub fn new_unique(prefix: &str) -> std::io::Result<Self> {
        let name = format!("{}-{}", prefix, Uuid::new_v4());
        Self::new_fixed(&name)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn dist_dir(&self) -> PathBuf {
        self.path.join("dist")
    }

    pub fn blog_dir(&self) -> PathBuf {
        self.dist_dir().join("blog")
    }

    pub fn init_dist_layout(&self) -> std::io::Result<()> {
        fs::create_dir_all(self.blog_dir())?;
        Ok(())
    }

    pub fn write_index_html(&self, contents: &str) -> std::io::Result<()> {
        self.init_dist_layout()?;
        fs::write(self.dist_dir().join("index.html"), contents)
    }

    pub fn write_blog_data(&self, contents: &str) -> std::io::Result<()> {
        self.init_dist_layout()?;
        fs::write(self.blog_dir().join("data.json"), contents)
    }

    pub fn runtime_paths(&self) -> std::io::Result<RuntimePaths> {
        self.init_dist_layout()?;
        let root = self.path.canonicalize()?;
        let dist_dir = self.dist_dir().canonicalize()?;

        Ok(RuntimePaths {
            root: root.clone(),
            config_file: root.join("config.yaml"),
            index_file: dist_dir.join("index.html"),
            blog_data_file: dist_dir.join("blog").join("data.json"),
            dist_dir,
        })
    }
}

impl Drop for TestFixtureRoot {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

fn fixtures_root() -> PathBuf {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let repo_root = manifest_dir.parent().unwrap_or(&manifest_dir);
    repo_root.join("target").join("test-fixtures")
}
