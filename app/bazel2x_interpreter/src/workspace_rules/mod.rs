/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under both the MIT license found in the
 * LICENSE-MIT file in the root directory of this source tree and the Apache
 * License, Version 2.0 found in the LICENSE-APACHE file in the root directory
 * of this source tree.
 */

//! Rules callable only from the `WORKSPACE` file.

use anyhow::Context;
use bazel2x_core::file_type::FileType;
use bazel2x_core::label::WorkspaceName;
use bazel2x_node::attrs::coercion_context::AttrCoercionContext;
use starlark::collections::SmallMap;
use starlark::environment::GlobalsBuilder;
use starlark::eval::Evaluator;
use starlark::starlark_module;
use starlark::values::none::NoneType;
use starlark::values::tuple::UnpackTuple;
use starlark::values::Value;

use crate::attrs::args::bind_attrs;
use crate::attrs::args::AttrArgs;
use crate::attrs::args::RuleAttrs;
use crate::context::ModuleContext;

#[derive(Debug, thiserror::Error)]
enum WorkspaceRuleError {
    #[error("`{0}` is not a valid workspace name")]
    InvalidName(String),
}

/// Arguments of `workspace()`.
struct WorkspaceArgs {
    name: WorkspaceName,
}

impl RuleAttrs for WorkspaceArgs {
    fn decode(args: &mut AttrArgs) -> anyhow::Result<Self> {
        Ok(WorkspaceArgs {
            name: WorkspaceName::new(args.required::<String>("name")?),
        })
    }

    fn finalize(&mut self, _ctx: &dyn AttrCoercionContext) -> anyhow::Result<()> {
        if !self.name.is_valid() {
            return Err(WorkspaceRuleError::InvalidName(self.name.as_str().to_owned()).into());
        }
        Ok(())
    }
}

#[starlark_module]
fn register_workspace(globals: &mut GlobalsBuilder) {
    /// Names the main workspace.
    fn workspace<'v>(
        #[starlark(args)] args: UnpackTuple<Value<'v>>,
        #[starlark(kwargs)] kwargs: SmallMap<String, Value<'v>>,
        eval: &mut Evaluator,
    ) -> anyhow::Result<NoneType> {
        let ctx = ModuleContext::from_eval(eval, "workspace")?;
        ctx.require_file_type("workspace", FileType::Workspace)?;
        let WorkspaceArgs { name } = bind_attrs(ctx, &args.items, kwargs)
            .with_context(|| format!("{}: workspace", ctx.label()))?;
        ctx.build()
            .set_workspace_name(name)
            .with_context(|| format!("{}: workspace", ctx.label()))?;
        Ok(NoneType)
    }
}

not_implemented_builtins!(
    register_not_implemented_workspace_rules,
    Some(FileType::Workspace),
    [
        bind,
        local_repository,
        maven_jar,
        maven_server,
        new_local_repository,
        xcode_config,
        xcode_version,
    ]
);

pub(crate) fn register_workspace_rules(globals: &mut GlobalsBuilder) {
    register_workspace(globals);
    register_not_implemented_workspace_rules(globals);
}
