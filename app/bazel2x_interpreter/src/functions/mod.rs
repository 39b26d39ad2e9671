/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under both the MIT license found in the
 * LICENSE-MIT file in the root directory of this source tree and the Apache
 * License, Version 2.0 found in the LICENSE-APACHE file in the root directory
 * of this source tree.
 */

//! Functions callable from any file.

use starlark::environment::GlobalsBuilder;
use starlark::eval::Evaluator;
use starlark::starlark_module;

use crate::context::ModuleContext;

#[starlark_module]
fn register_package_functions(globals: &mut GlobalsBuilder) {
    /// Package of the `BUILD` file being evaluated, without the leading `//`.
    fn package_name(eval: &mut Evaluator) -> anyhow::Result<String> {
        let ctx = ModuleContext::from_eval(eval, "package_name")?;
        Ok(ctx.label().package.as_str().to_owned())
    }

    /// Repository of the file being evaluated, as `@name` (`@` for the main
    /// repository).
    fn repository_name(eval: &mut Evaluator) -> anyhow::Result<String> {
        let ctx = ModuleContext::from_eval(eval, "repository_name")?;
        Ok(format!("@{}", ctx.label().workspace.as_str()))
    }
}

not_implemented_builtins!(
    register_not_implemented_functions,
    None,
    [
        analysis_test_transition,
        aspect,
        configuration_field,
        depset,
        existing_rules,
        provider,
        register_execution_platforms,
        register_toolchains,
        repository_rule,
        rule,
        select,
        package,
        package_group,
        exports_files,
        glob,
    ]
);

pub(crate) fn register_functions(globals: &mut GlobalsBuilder) {
    register_package_functions(globals);
    register_not_implemented_functions(globals);
}
