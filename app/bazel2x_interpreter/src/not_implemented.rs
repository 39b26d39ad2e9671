/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under both the MIT license found in the
 * LICENSE-MIT file in the root directory of this source tree and the Apache
 * License, Version 2.0 found in the LICENSE-APACHE file in the root directory
 * of this source tree.
 */

//! Builtins that are accepted and ignored.
//!
//! Build files use many rules and functions that have no bearing on the
//! targets collected here. Calls to them succeed (subject to the usual file
//! type restriction) and return `None`.

use bazel2x_core::file_type::FileType;
use starlark::eval::Evaluator;
use starlark::values::none::NoneType;

use crate::context::ModuleContext;

pub(crate) fn ignore_call(
    name: &'static str,
    file_type: Option<FileType>,
    eval: &Evaluator,
) -> anyhow::Result<NoneType> {
    let ctx = ModuleContext::from_eval(eval, name)?;
    if let Some(file_type) = file_type {
        ctx.require_file_type(name, file_type)?;
    }
    tracing::debug!("{}: ignoring call to `{}`", ctx.label(), name);
    Ok(NoneType)
}

/// Defines a `#[starlark_module]` registering each name as a builtin that
/// accepts any arguments and does nothing.
macro_rules! not_implemented_builtins {
    ($(#[$meta:meta])* $register:ident, $file_type:expr, [$($name:ident),* $(,)?]) => {
        $(#[$meta])*
        #[starlark::starlark_module]
        pub(crate) fn $register(globals: &mut starlark::environment::GlobalsBuilder) {
            $(
                fn $name<'v>(
                    #[starlark(args)] args: starlark::values::tuple::UnpackTuple<
                        starlark::values::Value<'v>,
                    >,
                    #[starlark(kwargs)] kwargs: starlark::collections::SmallMap<
                        String,
                        starlark::values::Value<'v>,
                    >,
                    eval: &mut starlark::eval::Evaluator,
                ) -> anyhow::Result<starlark::values::none::NoneType> {
                    let _ignore = (args, kwargs);
                    $crate::not_implemented::ignore_call(stringify!($name), $file_type, eval)
                }
            )*
        }
    };
}
