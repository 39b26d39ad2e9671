/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under both the MIT license found in the
 * LICENSE-MIT file in the root directory of this source tree and the Apache
 * License, Version 2.0 found in the LICENSE-APACHE file in the root directory
 * of this source tree.
 */

use std::fmt;
use std::fmt::Display;

use allocative::Allocative;
use dupe::Dupe;

/// File names accepted as a package's build file.
pub const BUILD_FILE_NAMES: &[&str] = &["BUILD", "BUILD.bazel"];

/// File name of the workspace file.
pub const WORKSPACE_FILE_NAME: &str = "WORKSPACE";

/// Suffix of extension files, the only files `load()` accepts.
pub const EXTENSION_FILE_SUFFIX: &str = ".bzl";

/// What kind of file is being evaluated. Builtins check this to decide
/// whether they may be called.
#[derive(Clone, Copy, Dupe, Debug, Hash, Eq, PartialEq, Allocative)]
pub enum FileType {
    /// `BUILD` or `BUILD.bazel`.
    Build,
    /// An extension file loaded with `load()`.
    Bzl,
    /// The `WORKSPACE` file.
    Workspace,
}

impl FileType {
    /// The file type implied by a file name, if any.
    pub fn from_file_name(name: &str) -> Option<FileType> {
        if BUILD_FILE_NAMES.contains(&name) {
            Some(FileType::Build)
        } else if name == WORKSPACE_FILE_NAME {
            Some(FileType::Workspace)
        } else if name.ends_with(EXTENSION_FILE_SUFFIX) {
            Some(FileType::Bzl)
        } else {
            None
        }
    }
}

impl Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileType::Build => write!(f, "BUILD file"),
            FileType::Bzl => write!(f, ".bzl file"),
            FileType::Workspace => write!(f, "WORKSPACE file"),
        }
    }
}
