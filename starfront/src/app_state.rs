// This file is part of the product Star History.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use crate::public::catalog::BlogCatalog;
use crate::public::shell::PageShell;
use crate::runtime_paths::RuntimePaths;

/// Process-wide snapshot of the build artifacts, loaded once before the
/// server accepts requests. Request handlers only read it; new content
/// becomes visible on restart.
pub struct AppState {
    pub shell: PageShell,
    pub catalog: BlogCatalog,
    pub runtime_paths: RuntimePaths,
}

impl AppState {
    pub fn new(shell: PageShell, catalog: BlogCatalog, runtime_paths: RuntimePaths) -> Self {
        Self {
            shell,
            catalog,
            runtime_paths,
        }
    }

    pub fn load(runtime_paths: &RuntimePaths) -> Self {
        let shell = PageShell::load(&runtime_paths.index_file);
        let catalog = BlogCatalog::load(&runtime_paths.blog_data_file);
        Self::new(shell, catalog, runtime_paths.clone())
    }
}
