/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under both the MIT license found in the
 * LICENSE-MIT file in the root directory of this source tree and the Apache
 * License, Version 2.0 found in the LICENSE-APACHE file in the root directory
 * of this source tree.
 */

use std::cell::Cell;
use std::cell::Ref;
use std::cell::RefCell;

use bazel2x_core::file_type::FileType;
use bazel2x_core::file_type::EXTENSION_FILE_SUFFIX;
use bazel2x_core::label::Label;
use bazel2x_core::label::WorkspaceName;
use bazel2x_core::shared_error::SharedError;
use bazel2x_core::shared_error::SharedResult;
use bazel2x_node::nodes::Target;
use bazel2x_node::targets::BuildTargets;
use starlark::environment::FrozenModule;

use crate::config::BuildConfig;
pub use crate::loader::LoadError;
use crate::loader::Loader;
use crate::source::FsSourceReader;
use crate::source::SourceReader;

#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Invalid label `{0}`")]
    InvalidLabel(Label),
    #[error("`{label}` cannot be evaluated as a {expected}")]
    WrongFileType { label: Label, expected: FileType },
    #[error("`{0}`: the WORKSPACE file was already evaluated in this build")]
    WorkspaceFileTwice(Label),
    #[error("Workspace name already set to `{0}`")]
    WorkspaceNameTwice(String),
}

/// One build: evaluates files on request and collects the targets they
/// declare.
///
/// Single-threaded. Evaluation is re-entrant: `load()` statements evaluate
/// further files while the loading file is still running.
pub struct Build {
    loader: Loader,
    targets: RefCell<BuildTargets>,
    workspace_name: RefCell<Option<WorkspaceName>>,
    workspace_file_evaluated: Cell<bool>,
}

impl Build {
    pub fn new(source_reader: impl SourceReader + 'static) -> Build {
        Build {
            loader: Loader::new(Box::new(source_reader)),
            targets: RefCell::new(BuildTargets::new()),
            workspace_name: RefCell::new(None),
            workspace_file_evaluated: Cell::new(false),
        }
    }

    /// A build reading its sources from disk.
    pub fn from_config(config: &BuildConfig) -> Build {
        Build::new(FsSourceReader::new(config))
    }

    fn check_file(label: &Label, expected: FileType) -> anyhow::Result<()> {
        if !label.is_valid() {
            return Err(BuildError::InvalidLabel(label.clone()).into());
        }
        if FileType::from_file_name(label.target.as_str()) != Some(expected) {
            return Err(BuildError::WrongFileType {
                label: label.clone(),
                expected,
            }
            .into());
        }
        Ok(())
    }

    /// Evaluate the `WORKSPACE` file. At most once per build.
    pub fn exec_workspace_file(&self, label: &Label) -> anyhow::Result<()> {
        Self::check_file(label, FileType::Workspace)?;
        if self.workspace_file_evaluated.replace(true) {
            return Err(BuildError::WorkspaceFileTwice(label.clone()).into());
        }
        tracing::info!("{}: evaluating WORKSPACE file", label);
        self.loader.eval_module(self, label, FileType::Workspace)?;
        Ok(())
    }

    /// Register the package of `label` and evaluate its `BUILD` file.
    pub fn exec_build_file(&self, label: &Label) -> anyhow::Result<()> {
        Self::check_file(label, FileType::Build)?;
        self.targets
            .borrow_mut()
            .add_package(&label.workspace, &label.package)?;
        tracing::info!("{}: evaluating BUILD file", label);
        self.loader.eval_module(self, label, FileType::Build)?;
        Ok(())
    }

    /// Evaluate a `.bzl` file, or return the outcome of its earlier
    /// evaluation. Failures are shared: asking again returns the same error.
    pub fn load_extension(&self, label: &Label) -> SharedResult<FrozenModule> {
        Self::check_file(label, FileType::Bzl).map_err(SharedError::new)?;
        self.loader.eval_module(self, label, FileType::Bzl)
    }

    /// A `load()` statement in the file `from` is evaluated.
    pub(crate) fn load_extension_from(
        &self,
        from: &Label,
        module: &str,
    ) -> anyhow::Result<FrozenModule> {
        let label = Label::parse(&from.workspace, &from.package, module)?;
        if !label.target.as_str().ends_with(EXTENSION_FILE_SUFFIX) {
            return Err(BuildError::WrongFileType {
                label,
                expected: FileType::Bzl,
            }
            .into());
        }
        Ok(self.loader.eval_module(self, &label, FileType::Bzl)?)
    }

    pub(crate) fn record_target(&self, target: Target) -> anyhow::Result<()> {
        tracing::debug!("{}: {}", target.label(), target.rule_name());
        self.targets.borrow_mut().add(target)
    }

    pub(crate) fn set_workspace_name(&self, name: WorkspaceName) -> anyhow::Result<()> {
        let mut workspace_name = self.workspace_name.borrow_mut();
        if let Some(existing) = &*workspace_name {
            return Err(BuildError::WorkspaceNameTwice(existing.as_str().to_owned()).into());
        }
        *workspace_name = Some(name);
        Ok(())
    }

    /// The name given by `workspace(name = ...)` in the `WORKSPACE` file.
    pub fn workspace_name(&self) -> Option<WorkspaceName> {
        self.workspace_name.borrow().clone()
    }

    /// Targets declared so far.
    ///
    /// The returned borrow must be dropped before any further file is
    /// evaluated: declaring a target while it is held panics.
    pub fn targets(&self) -> Ref<'_, BuildTargets> {
        self.targets.borrow()
    }

    pub fn into_targets(self) -> BuildTargets {
        self.targets.into_inner()
    }
}
