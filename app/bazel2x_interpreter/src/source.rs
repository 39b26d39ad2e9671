/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under both the MIT license found in the
 * LICENSE-MIT file in the root directory of this source tree and the Apache
 * License, Version 2.0 found in the LICENSE-APACHE file in the root directory
 * of this source tree.
 */

//! Where file contents come from.

use std::path::PathBuf;

use anyhow::Context;
use bazel2x_core::label::Label;

use crate::config::BuildConfig;

/// Provides the raw contents of the file a label names.
pub trait SourceReader {
    fn read(&self, label: &Label) -> anyhow::Result<Vec<u8>>;
}

impl<F> SourceReader for F
where
    F: Fn(&Label) -> anyhow::Result<Vec<u8>>,
{
    fn read(&self, label: &Label) -> anyhow::Result<Vec<u8>> {
        self(label)
    }
}

/// Reads files from disk, main workspace files from the workspace directory
/// and external ones from the output base.
#[derive(Clone, Debug)]
pub struct FsSourceReader {
    workspace_dir: PathBuf,
    external_dir: PathBuf,
}

impl FsSourceReader {
    pub fn new(config: &BuildConfig) -> FsSourceReader {
        FsSourceReader {
            workspace_dir: config.workspace_dir.clone(),
            external_dir: config.external_dir(),
        }
    }
}

impl SourceReader for FsSourceReader {
    fn read(&self, label: &Label) -> anyhow::Result<Vec<u8>> {
        let path = label.source_path(&self.workspace_dir, &self.external_dir);
        std::fs::read(&path).with_context(|| format!("Failed to read `{}`", path.display()))
    }
}
