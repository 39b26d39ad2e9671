/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under both the MIT license found in the
 * LICENSE-MIT file in the root directory of this source tree and the Apache
 * License, Version 2.0 found in the LICENSE-APACHE file in the root directory
 * of this source tree.
 */

//! Rules, callable only while a `BUILD` file is being evaluated (directly or
//! through a macro it calls).

mod cc;
mod common;

use anyhow::Context;
use bazel2x_core::file_type::FileType;
use bazel2x_node::nodes::Target;
use starlark::collections::SmallMap;
use starlark::environment::GlobalsBuilder;
use starlark::eval::Evaluator;
use starlark::values::none::NoneType;
use starlark::values::tuple::UnpackTuple;
use starlark::values::Value;

use crate::attrs::args::bind_attrs;
use crate::attrs::args::RuleAttrs;
use crate::context::ModuleContext;

/// Bind a rule call to its record and add the resulting target to the build.
fn declare_target<'v, R: RuleAttrs>(
    rule: &'static str,
    args: UnpackTuple<Value<'v>>,
    kwargs: SmallMap<String, Value<'v>>,
    eval: &Evaluator,
    into_target: fn(R) -> Target,
) -> anyhow::Result<NoneType> {
    let ctx = ModuleContext::from_eval(eval, rule)?;
    ctx.require_file_type(rule, FileType::Build)?;
    let record: R = bind_attrs(ctx, &args.items, kwargs)
        .with_context(|| format!("{}: {}", ctx.label(), rule))?;
    ctx.build()
        .record_target(into_target(record))
        .with_context(|| format!("{}: {}", ctx.label(), rule))?;
    Ok(NoneType)
}

not_implemented_builtins!(
    register_not_implemented_rules,
    Some(FileType::Build),
    [
        // Android
        android_binary,
        aar_import,
        android_library,
        android_instrumentation_test,
        android_local_test,
        android_device,
        android_ndk_repository,
        android_sdk_repository,
        // C/C++
        cc_import,
        cc_proto_library,
        fdo_prefetch_hints,
        fdo_profile,
        cc_toolchain,
        cc_toolchain_suite,
        // Java
        java_binary,
        java_import,
        java_library,
        java_lite_proto_library,
        java_proto_library,
        java_test,
        java_package_configuration,
        java_plugin,
        java_runtime,
        java_toolchain,
        // Objective-C
        apple_binary,
        apple_static_library,
        j2objc_library,
        objc_import,
        objc_library,
        objc_proto_library,
        // Protocol buffers
        proto_lang_toolchain,
        proto_library,
        // Python
        py_binary,
        py_library,
        py_test,
        py_runtime,
        // Shell
        sh_binary,
        sh_library,
        sh_test,
        // Extra actions
        action_listener,
        extra_action,
        // General
        filegroup,
        genquery,
        test_suite,
        alias,
        config_setting,
        genrule,
        // Platforms
        constraint_setting,
        constraint_value,
        platform,
        toolchain,
    ]
);

pub(crate) fn register_rules(globals: &mut GlobalsBuilder) {
    cc::register_cc_rules(globals);
    register_not_implemented_rules(globals);
}
