/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under both the MIT license found in the
 * LICENSE-MIT file in the root directory of this source tree and the Apache
 * License, Version 2.0 found in the LICENSE-APACHE file in the root directory
 * of this source tree.
 */

use bazel2x_core::label::Label;
use bazel2x_core::label::PackageName;
use bazel2x_core::label::TargetName;
use bazel2x_core::label::WorkspaceName;

/// Where attribute values are being resolved: the workspace and package of
/// the file declaring the target.
pub trait AttrCoercionContext {
    fn workspace(&self) -> &WorkspaceName;

    fn package(&self) -> &PackageName;

    /// Resolve a label-typed attribute value.
    ///
    /// A valid target name on its own (typically a file name such as `foo.cc`)
    /// names a target in the current package. Anything else must be a label.
    fn coerce_label(&self, value: &str) -> anyhow::Result<Label> {
        let target = TargetName::new(value);
        if target.is_valid() {
            return Ok(Label::new(
                self.workspace().clone(),
                self.package().clone(),
                target,
            ));
        }
        Label::parse(self.workspace(), self.package(), value)
    }
}

/// A fixed workspace and package.
#[derive(Clone, Debug)]
pub struct PackageContext {
    pub workspace: WorkspaceName,
    pub package: PackageName,
}

impl AttrCoercionContext for PackageContext {
    fn workspace(&self) -> &WorkspaceName {
        &self.workspace
    }

    fn package(&self) -> &PackageName {
        &self.package
    }
}
