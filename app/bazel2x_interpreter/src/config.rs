/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under both the MIT license found in the
 * LICENSE-MIT file in the root directory of this source tree and the Apache
 * License, Version 2.0 found in the LICENSE-APACHE file in the root directory
 * of this source tree.
 */

use std::path::Path;
use std::path::PathBuf;

use bazel2x_core::file_type::FileType;
use starlark::syntax::Dialect;

/// Where the sources of a build live.
#[derive(Clone, Debug)]
pub struct BuildConfig {
    /// Root of the main workspace, the directory holding `WORKSPACE`.
    pub workspace_dir: PathBuf,
    /// Bazel's output base. External workspaces are found under its
    /// `external` directory.
    pub output_base: PathBuf,
}

impl BuildConfig {
    /// Uses the `bazel-<workspace dir name>` convenience link inside the
    /// workspace as the output base.
    pub fn new(workspace_dir: impl Into<PathBuf>) -> BuildConfig {
        let workspace_dir = workspace_dir.into();
        let link_name = match workspace_dir.file_name() {
            Some(name) => format!("bazel-{}", name.to_string_lossy()),
            None => "bazel-out".to_owned(),
        };
        let output_base = workspace_dir.join(link_name);
        BuildConfig {
            workspace_dir,
            output_base,
        }
    }

    pub fn with_output_base(mut self, output_base: impl Into<PathBuf>) -> BuildConfig {
        self.output_base = output_base.into();
        self
    }

    pub fn workspace_dir(&self) -> &Path {
        &self.workspace_dir
    }

    /// Directory containing one directory per external workspace.
    pub fn external_dir(&self) -> PathBuf {
        self.output_base.join("external")
    }
}

/// Language dialect for a file type. `BUILD` files may not define functions.
pub fn dialect(file_type: FileType) -> Dialect {
    let mut dialect = Dialect::Extended;
    if file_type == FileType::Build {
        dialect.enable_def = false;
        dialect.enable_lambda = false;
    }
    dialect
}
