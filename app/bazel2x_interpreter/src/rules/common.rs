/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under both the MIT license found in the
 * LICENSE-MIT file in the root directory of this source tree and the Apache
 * License, Version 2.0 found in the LICENSE-APACHE file in the root directory
 * of this source tree.
 */

use bazel2x_core::label::Label;
use bazel2x_core::label::TargetName;
use bazel2x_node::attrs::coercion_context::AttrCoercionContext;
use bazel2x_node::nodes::common::TargetCommon;
use bazel2x_node::nodes::common::TargetCommonBinary;
use bazel2x_node::nodes::common::TargetCommonTest;

use crate::attrs::args::AttrArgs;
use crate::attrs::args::RuleAttrs;

#[derive(Debug, thiserror::Error)]
enum TargetCommonError {
    #[error("Invalid target name `{0}`")]
    InvalidName(String),
}

impl RuleAttrs for TargetCommon {
    fn decode(args: &mut AttrArgs) -> anyhow::Result<Self> {
        let name: String = args.required("name")?;
        let ctx = args.ctx();
        Ok(TargetCommon {
            label: Label::new(
                ctx.workspace().clone(),
                ctx.package().clone(),
                TargetName::new(name.as_str()),
            ),
            name,
            data: args.optional("data")?,
            visibility: args.optional("visibility")?,
            toolchains: args.optional("toolchains")?,
            deps: args.optional("deps")?,
            deprecation: args.optional("deprecation")?,
            tags: args.optional("tags")?,
            testonly: args.optional("testonly")?,
            features: args.optional("features")?,
            licenses: args.optional("licenses")?,
            compatible_with: args.optional("compatible_with")?,
            distribs: args.optional("distribs")?,
            exec_compatible_with: args.optional("exec_compatible_with")?,
            restricted_to: args.optional("restricted_to")?,
        })
    }

    fn finalize(&mut self, _ctx: &dyn AttrCoercionContext) -> anyhow::Result<()> {
        if !self.label.is_valid() {
            return Err(TargetCommonError::InvalidName(self.name.clone()).into());
        }
        Ok(())
    }
}

impl RuleAttrs for TargetCommonBinary {
    fn decode(args: &mut AttrArgs) -> anyhow::Result<Self> {
        Ok(TargetCommonBinary {
            args: args.optional("args")?,
            output_licenses: args.optional("output_licenses")?,
        })
    }
}

impl RuleAttrs for TargetCommonTest {
    fn decode(args: &mut AttrArgs) -> anyhow::Result<Self> {
        Ok(TargetCommonTest {
            args: args.optional("args")?,
            size: args.optional("size")?,
            timeout: args.optional("timeout")?,
            flaky: args.optional("flaky")?,
            local: args.optional("local")?,
            shard_count: args.optional("shard_count")?,
        })
    }
}
