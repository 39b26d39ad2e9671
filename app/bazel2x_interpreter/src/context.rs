/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under both the MIT license found in the
 * LICENSE-MIT file in the root directory of this source tree and the Apache
 * License, Version 2.0 found in the LICENSE-APACHE file in the root directory
 * of this source tree.
 */

use anyhow::Context;
use bazel2x_core::file_type::FileType;
use bazel2x_core::label::Label;
use bazel2x_core::label::PackageName;
use bazel2x_core::label::WorkspaceName;
use bazel2x_node::attrs::coercion_context::AttrCoercionContext;
use starlark::any::ProvidesStaticType;
use starlark::environment::FrozenModule;
use starlark::eval::Evaluator;
use starlark::eval::FileLoader;

use crate::build::Build;

#[derive(Debug, thiserror::Error)]
pub enum BuiltinError {
    #[error("`{name}` can only be called from a {expected}, not from `{label}`")]
    WrongFileType {
        name: &'static str,
        expected: FileType,
        label: Label,
    },
    #[error("`{0}` called outside of a file evaluation")]
    NoContext(&'static str),
}

/// The file being evaluated. Available to builtins through `eval.extra` and
/// used as the evaluator's loader.
#[derive(ProvidesStaticType)]
pub struct ModuleContext<'b> {
    build: &'b Build,
    label: Label,
    file_type: FileType,
}

impl<'b> ModuleContext<'b> {
    pub(crate) fn new(build: &'b Build, label: Label, file_type: FileType) -> Self {
        ModuleContext {
            build,
            label,
            file_type,
        }
    }

    /// The context of the file an evaluator is running, for the builtin
    /// `name`.
    pub fn from_eval<'a>(
        eval: &'a Evaluator,
        name: &'static str,
    ) -> anyhow::Result<&'a ModuleContext<'a>> {
        eval.extra
            .and_then(|extra| extra.downcast_ref::<ModuleContext>())
            .ok_or_else(|| BuiltinError::NoContext(name).into())
    }

    pub fn build(&self) -> &'b Build {
        self.build
    }

    /// Label of the file being evaluated.
    pub fn label(&self) -> &Label {
        &self.label
    }

    pub fn file_type(&self) -> FileType {
        self.file_type
    }

    /// Fail unless the file being evaluated is of the `expected` type.
    pub fn require_file_type(&self, name: &'static str, expected: FileType) -> anyhow::Result<()> {
        if self.file_type != expected {
            return Err(BuiltinError::WrongFileType {
                name,
                expected,
                label: self.label.clone(),
            }
            .into());
        }
        Ok(())
    }
}

impl AttrCoercionContext for ModuleContext<'_> {
    fn workspace(&self) -> &WorkspaceName {
        &self.label.workspace
    }

    fn package(&self) -> &PackageName {
        &self.label.package
    }
}

impl FileLoader for ModuleContext<'_> {
    fn load(&self, path: &str) -> starlark::Result<FrozenModule> {
        self.build
            .load_extension_from(&self.label, path)
            .with_context(|| format!("{}: load of `{}` failed", self.label, path))
            .map_err(starlark::Error::from)
    }
}
