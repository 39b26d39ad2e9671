/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under both the MIT license found in the
 * LICENSE-MIT file in the root directory of this source tree and the Apache
 * License, Version 2.0 found in the LICENSE-APACHE file in the root directory
 * of this source tree.
 */

//! Labels, e.g. `@my_workspace//foo/bar:baz`.

mod name;

use std::fmt;
use std::fmt::Display;
use std::path::Path;
use std::path::PathBuf;

use allocative::Allocative;

pub use crate::label::name::PackageName;
pub use crate::label::name::TargetName;
pub use crate::label::name::WorkspaceName;

#[derive(Debug, thiserror::Error)]
pub enum LabelError {
    #[error("invalid label: `{0}`")]
    InvalidLabel(String),
}

/// A fully resolved label. Parsed labels are always valid; labels assembled by
/// hand are checked with [`Label::is_valid`].
#[derive(Clone, Debug, Hash, Eq, PartialEq, Ord, PartialOrd, Allocative)]
pub struct Label {
    pub workspace: WorkspaceName,
    pub package: PackageName,
    pub target: TargetName,
}

impl Label {
    pub fn new(workspace: WorkspaceName, package: PackageName, target: TargetName) -> Label {
        Label {
            workspace,
            package,
            target,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.workspace.is_valid() && self.package.is_valid() && self.target.is_valid()
    }

    pub fn is_external(&self) -> bool {
        self.workspace.is_external()
    }

    /// Parse label text as written in a build file evaluated in
    /// `curr_workspace`/`curr_package`.
    ///
    /// * `:target` is relative to the current package.
    /// * `//pkg:target` and `@//pkg:target` are in the current workspace.
    /// * `@ws//pkg:target` is in workspace `ws`.
    /// * Without a `:`, the target is the last `/` component: `//foo/bar` is
    ///   `//foo/bar:bar`.
    ///
    /// A bare `target` (no `:` and no `/`) is rejected, as is anything that
    /// does not resolve to a valid label.
    pub fn parse(
        curr_workspace: &WorkspaceName,
        curr_package: &PackageName,
        text: &str,
    ) -> anyhow::Result<Label> {
        let invalid = || LabelError::InvalidLabel(text.to_owned());

        let (path, target) = match text.find(':') {
            Some(colon) => (&text[..colon], &text[colon + 1..]),
            None => {
                let last_slash = text.rfind('/').ok_or_else(invalid)?;
                (text, &text[last_slash + 1..])
            }
        };
        let target = TargetName::new(target);

        let label = if path.is_empty() {
            Label::new(curr_workspace.clone(), curr_package.clone(), target)
        } else {
            let slash_slash = path.find("//").ok_or_else(invalid)?;
            let package = PackageName::new(&path[slash_slash + 2..]);
            let workspace = match &path[..slash_slash] {
                "" => curr_workspace.clone(),
                repo => match repo.strip_prefix('@') {
                    Some("") => curr_workspace.clone(),
                    Some(name) => WorkspaceName::new(name),
                    None => return Err(invalid().into()),
                },
            };
            Label::new(workspace, package, target)
        };

        if !label.is_valid() {
            return Err(invalid().into());
        }
        Ok(label)
    }

    /// Where the file this label names lives: main-workspace labels under
    /// `workspace_dir`, external ones under `external_dir/<workspace>`.
    pub fn source_path(&self, workspace_dir: &Path, external_dir: &Path) -> PathBuf {
        let root = if self.is_external() {
            external_dir.join(self.workspace.as_str())
        } else {
            workspace_dir.to_path_buf()
        };
        let mut path = root;
        for component in self
            .package
            .as_str()
            .split('/')
            .chain(self.target.as_str().split('/'))
        {
            if !component.is_empty() {
                path.push(component);
            }
        }
        path
    }
}

/// `@ws//pkg:target`, with `@ws` omitted for the main workspace. The target is
/// always spelled out, so `//foo/bar` prints as `//foo/bar:bar`.
impl Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.workspace, self.package, self.target)
    }
}
