/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under both the MIT license found in the
 * LICENSE-MIT file in the root directory of this source tree and the Apache
 * License, Version 2.0 found in the LICENSE-APACHE file in the root directory
 * of this source tree.
 */

//! Attribute groups shared by several rules.
//!
//! Unset optional attributes are `None`, which is distinct from an explicit
//! empty or false value.

use std::fmt;

use allocative::Allocative;
use bazel2x_core::label::Label;

use crate::attrs::fmt::AttrWriter;
use crate::attrs::fmt::WriteAttrs;

/// Attributes every rule accepts.
#[derive(Clone, Debug, Eq, PartialEq, Allocative)]
pub struct TargetCommon {
    /// The target's own label, made from `name` and the declaring package.
    pub label: Label,
    pub name: String,
    pub data: Option<Vec<Label>>,
    pub visibility: Option<Vec<Label>>,
    pub toolchains: Option<Vec<Label>>,
    pub deps: Option<Vec<Label>>,
    pub deprecation: Option<String>,
    pub tags: Option<Vec<String>>,
    pub testonly: Option<bool>,
    pub features: Option<Vec<String>>,
    pub licenses: Option<Vec<String>>,
    pub compatible_with: Option<Vec<Label>>,
    pub distribs: Option<Vec<String>>,
    pub exec_compatible_with: Option<Vec<Label>>,
    pub restricted_to: Option<Vec<Label>>,
}

impl TargetCommon {
    /// A target with only its name set.
    pub fn new(label: Label) -> TargetCommon {
        TargetCommon {
            name: label.target.as_str().to_owned(),
            label,
            data: None,
            visibility: None,
            toolchains: None,
            deps: None,
            deprecation: None,
            tags: None,
            testonly: None,
            features: None,
            licenses: None,
            compatible_with: None,
            distribs: None,
            exec_compatible_with: None,
            restricted_to: None,
        }
    }
}

impl WriteAttrs for TargetCommon {
    fn write_attrs(&self, w: &mut AttrWriter<'_, '_>) -> fmt::Result {
        w.attr("name", &self.name)?;
        w.opt_attr("data", &self.data)?;
        w.opt_attr("visibility", &self.visibility)?;
        w.opt_attr("toolchains", &self.toolchains)?;
        w.opt_attr("deps", &self.deps)?;
        w.opt_attr("deprecation", &self.deprecation)?;
        w.opt_attr("tags", &self.tags)?;
        w.opt_attr("testonly", &self.testonly)?;
        w.opt_attr("features", &self.features)?;
        w.opt_attr("licenses", &self.licenses)?;
        w.opt_attr("compatible_with", &self.compatible_with)?;
        w.opt_attr("distribs", &self.distribs)?;
        w.opt_attr("exec_compatible_with", &self.exec_compatible_with)?;
        w.opt_attr("restricted_to", &self.restricted_to)
    }
}

/// Attributes of `*_binary` rules.
#[derive(Clone, Debug, Default, Eq, PartialEq, Allocative)]
pub struct TargetCommonBinary {
    pub args: Option<Vec<String>>,
    pub output_licenses: Option<Vec<String>>,
}

impl WriteAttrs for TargetCommonBinary {
    fn write_attrs(&self, w: &mut AttrWriter<'_, '_>) -> fmt::Result {
        w.opt_attr("args", &self.args)?;
        w.opt_attr("output_licenses", &self.output_licenses)
    }
}

/// Attributes of `*_test` rules.
#[derive(Clone, Debug, Default, Eq, PartialEq, Allocative)]
pub struct TargetCommonTest {
    pub args: Option<Vec<String>>,
    pub size: Option<String>,
    pub timeout: Option<String>,
    pub flaky: Option<bool>,
    pub local: Option<bool>,
    pub shard_count: Option<i64>,
}

impl WriteAttrs for TargetCommonTest {
    fn write_attrs(&self, w: &mut AttrWriter<'_, '_>) -> fmt::Result {
        w.opt_attr("args", &self.args)?;
        w.opt_attr("size", &self.size)?;
        w.opt_attr("timeout", &self.timeout)?;
        w.opt_attr("flaky", &self.flaky)?;
        w.opt_attr("local", &self.local)?;
        w.opt_attr("shard_count", &self.shard_count)
    }
}
