/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under both the MIT license found in the
 * LICENSE-MIT file in the root directory of this source tree and the Apache
 * License, Version 2.0 found in the LICENSE-APACHE file in the root directory
 * of this source tree.
 */

use bazel2x_node::attrs::coercion_context::AttrCoercionContext;
use bazel2x_node::nodes::cc::CcBinaryTarget;
use bazel2x_node::nodes::cc::CcLibraryTarget;
use bazel2x_node::nodes::cc::CcTestTarget;
use bazel2x_node::nodes::common::TargetCommon;
use bazel2x_node::nodes::common::TargetCommonBinary;
use bazel2x_node::nodes::common::TargetCommonTest;
use bazel2x_node::nodes::Target;
use starlark::collections::SmallMap;
use starlark::environment::GlobalsBuilder;
use starlark::eval::Evaluator;
use starlark::starlark_module;
use starlark::values::none::NoneType;
use starlark::values::tuple::UnpackTuple;
use starlark::values::Value;

use crate::attrs::args::AttrArgs;
use crate::attrs::args::RuleAttrs;
use crate::rules::declare_target;

impl RuleAttrs for CcLibraryTarget {
    fn decode(args: &mut AttrArgs) -> anyhow::Result<Self> {
        Ok(CcLibraryTarget {
            common: TargetCommon::decode(args)?,
            srcs: args.optional("srcs")?,
            hdrs: args.optional("hdrs")?,
            alwayslink: args.optional("alwayslink")?,
            copts: args.optional("copts")?,
            defines: args.optional("defines")?,
            include_prefix: args.optional("include_prefix")?,
            includes: args.optional("includes")?,
            linkopts: args.optional("linkopts")?,
            linkstatic: args.optional("linkstatic")?,
            nocopts: args.optional("nocopts")?,
            strip_include_prefix: args.optional("strip_include_prefix")?,
            textual_hdrs: args.optional("textual_hdrs")?,
            win_def_file: args.optional("win_def_file")?,
        })
    }

    fn finalize(&mut self, ctx: &dyn AttrCoercionContext) -> anyhow::Result<()> {
        self.common.finalize(ctx)
    }
}

impl RuleAttrs for CcBinaryTarget {
    fn decode(args: &mut AttrArgs) -> anyhow::Result<Self> {
        Ok(CcBinaryTarget {
            common: TargetCommon::decode(args)?,
            binary: TargetCommonBinary::decode(args)?,
            srcs: args.optional("srcs")?,
            additional_linker_inputs: args.optional("additional_linker_inputs")?,
            copts: args.optional("copts")?,
            defines: args.optional("defines")?,
            includes: args.optional("includes")?,
            linkopts: args.optional("linkopts")?,
            linkshared: args.optional("linkshared")?,
            linkstatic: args.optional("linkstatic")?,
            malloc: args.optional("malloc")?,
            nocopts: args.optional("nocopts")?,
            stamp: args.optional("stamp")?,
            win_def_file: args.optional("win_def_file")?,
        })
    }

    fn finalize(&mut self, ctx: &dyn AttrCoercionContext) -> anyhow::Result<()> {
        self.common.finalize(ctx)
    }
}

impl RuleAttrs for CcTestTarget {
    fn decode(args: &mut AttrArgs) -> anyhow::Result<Self> {
        Ok(CcTestTarget {
            common: TargetCommon::decode(args)?,
            test: TargetCommonTest::decode(args)?,
            srcs: args.optional("srcs")?,
            additional_linker_inputs: args.optional("additional_linker_inputs")?,
            copts: args.optional("copts")?,
            defines: args.optional("defines")?,
            includes: args.optional("includes")?,
            linkopts: args.optional("linkopts")?,
            linkstatic: args.optional("linkstatic")?,
            malloc: args.optional("malloc")?,
            nocopts: args.optional("nocopts")?,
            stamp: args.optional("stamp")?,
            win_def_file: args.optional("win_def_file")?,
        })
    }

    fn finalize(&mut self, ctx: &dyn AttrCoercionContext) -> anyhow::Result<()> {
        self.common.finalize(ctx)
    }
}

#[starlark_module]
pub(crate) fn register_cc_rules(globals: &mut GlobalsBuilder) {
    /// Declares a C/C++ library.
    fn cc_library<'v>(
        #[starlark(args)] args: UnpackTuple<Value<'v>>,
        #[starlark(kwargs)] kwargs: SmallMap<String, Value<'v>>,
        eval: &mut Evaluator,
    ) -> anyhow::Result<NoneType> {
        declare_target("cc_library", args, kwargs, eval, Target::CcLibrary)
    }

    /// Declares a C/C++ executable.
    fn cc_binary<'v>(
        #[starlark(args)] args: UnpackTuple<Value<'v>>,
        #[starlark(kwargs)] kwargs: SmallMap<String, Value<'v>>,
        eval: &mut Evaluator,
    ) -> anyhow::Result<NoneType> {
        declare_target("cc_binary", args, kwargs, eval, Target::CcBinary)
    }

    /// Declares a C/C++ test executable.
    fn cc_test<'v>(
        #[starlark(args)] args: UnpackTuple<Value<'v>>,
        #[starlark(kwargs)] kwargs: SmallMap<String, Value<'v>>,
        eval: &mut Evaluator,
    ) -> anyhow::Result<NoneType> {
        declare_target("cc_test", args, kwargs, eval, Target::CcTest)
    }
}
