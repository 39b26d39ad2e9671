/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under both the MIT license found in the
 * LICENSE-MIT file in the root directory of this source tree and the Apache
 * License, Version 2.0 found in the LICENSE-APACHE file in the root directory
 * of this source tree.
 */

//! Evaluates files and remembers the outcome.
//!
//! Every file is read and evaluated at most once per build. The outcome,
//! success or failure, is cached under the file's label, and a file that is
//! requested again while it is still being evaluated is a load cycle.

use std::cell::RefCell;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

use anyhow::Context;
use bazel2x_core::file_type::FileType;
use bazel2x_core::label::Label;
use bazel2x_core::shared_error::SharedError;
use bazel2x_core::shared_error::SharedResult;
use bazel2x_core::shared_error::ToSharedResultExt;
use starlark::environment::FrozenModule;
use starlark::environment::Globals;
use starlark::environment::Module;
use starlark::eval::Evaluator;
use starlark::syntax::AstModule;
use starlark::StarlarkResultExt;

use crate::build::Build;
use crate::config::dialect;
use crate::context::ModuleContext;
use crate::globals::base_globals;
use crate::source::SourceReader;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("`{0}`: cycle in load graph")]
    Cycle(Label),
    #[error("`{0}` is not valid UTF-8")]
    NotUtf8(Label),
}

enum LoadState {
    InProgress,
    Done(SharedResult<FrozenModule>),
}

pub(crate) struct Loader {
    source_reader: Box<dyn SourceReader>,
    globals: Globals,
    modules: RefCell<HashMap<Label, LoadState>>,
}

impl Loader {
    pub(crate) fn new(source_reader: Box<dyn SourceReader>) -> Loader {
        Loader {
            source_reader,
            globals: base_globals(),
            modules: RefCell::new(HashMap::new()),
        }
    }

    /// Evaluate the file `label` names as `file_type`, or return the cached
    /// outcome of an earlier evaluation.
    pub(crate) fn eval_module(
        &self,
        build: &Build,
        label: &Label,
        file_type: FileType,
    ) -> SharedResult<FrozenModule> {
        match self.modules.borrow_mut().entry(label.clone()) {
            Entry::Occupied(e) => {
                return match e.get() {
                    LoadState::InProgress => Err(SharedError::new(LoadError::Cycle(label.clone()))),
                    LoadState::Done(result) => {
                        tracing::debug!("{}: already evaluated", label);
                        result.clone()
                    }
                };
            }
            Entry::Vacant(e) => {
                e.insert(LoadState::InProgress);
            }
        }

        tracing::debug!("{}: evaluating as {}", label, file_type);
        let result = self.read_and_eval(build, label, file_type).shared_error();
        self.modules
            .borrow_mut()
            .insert(label.clone(), LoadState::Done(result.clone()));
        result
    }

    fn read_and_eval(
        &self,
        build: &Build,
        label: &Label,
        file_type: FileType,
    ) -> anyhow::Result<FrozenModule> {
        let source = self
            .source_reader
            .read(label)
            .with_context(|| format!("{}: read failed", label))?;
        let source = String::from_utf8(source).map_err(|_| LoadError::NotUtf8(label.clone()))?;

        let ctx = ModuleContext::new(build, label.clone(), file_type);
        self.eval_source(&ctx, source).into_anyhow_result()
    }

    fn eval_source(&self, ctx: &ModuleContext, source: String) -> starlark::Result<FrozenModule> {
        let label = ctx.label();
        let module = Module::new();
        module.set(
            "PACKAGE_NAME",
            module.heap().alloc(label.package.as_str()),
        );
        module.set(
            "REPOSITORY_NAME",
            module
                .heap()
                .alloc(format!("@{}", label.workspace.as_str())),
        );

        let ast = AstModule::parse(&label.to_string(), source, &dialect(ctx.file_type()))?;
        let mut eval = Evaluator::new(&module);
        eval.set_loader(ctx);
        eval.extra = Some(ctx);
        eval.eval_module(ast, &self.globals)?;
        drop(eval);
        Ok(module.freeze()?)
    }
}
