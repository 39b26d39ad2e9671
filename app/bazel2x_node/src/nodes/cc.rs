/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under both the MIT license found in the
 * LICENSE-MIT file in the root directory of this source tree and the Apache
 * License, Version 2.0 found in the LICENSE-APACHE file in the root directory
 * of this source tree.
 */

//! C/C++ rules.

use std::fmt;

use allocative::Allocative;
use bazel2x_core::label::Label;

use crate::attrs::fmt::AttrWriter;
use crate::attrs::fmt::WriteAttrs;
use crate::nodes::common::TargetCommon;
use crate::nodes::common::TargetCommonBinary;
use crate::nodes::common::TargetCommonTest;

/// `cc_library`.
#[derive(Clone, Debug, Eq, PartialEq, Allocative)]
pub struct CcLibraryTarget {
    pub common: TargetCommon,
    pub srcs: Option<Vec<Label>>,
    pub hdrs: Option<Vec<Label>>,
    pub alwayslink: Option<bool>,
    pub copts: Option<Vec<String>>,
    pub defines: Option<Vec<String>>,
    pub include_prefix: Option<String>,
    pub includes: Option<Vec<String>>,
    pub linkopts: Option<Vec<String>>,
    pub linkstatic: Option<bool>,
    pub nocopts: Option<Vec<String>>,
    pub strip_include_prefix: Option<String>,
    pub textual_hdrs: Option<Vec<Label>>,
    pub win_def_file: Option<Label>,
}

impl WriteAttrs for CcLibraryTarget {
    fn write_attrs(&self, w: &mut AttrWriter<'_, '_>) -> fmt::Result {
        self.common.write_attrs(w)?;
        w.opt_attr("srcs", &self.srcs)?;
        w.opt_attr("hdrs", &self.hdrs)?;
        w.opt_attr("alwayslink", &self.alwayslink)?;
        w.opt_attr("copts", &self.copts)?;
        w.opt_attr("defines", &self.defines)?;
        w.opt_attr("include_prefix", &self.include_prefix)?;
        w.opt_attr("includes", &self.includes)?;
        w.opt_attr("linkopts", &self.linkopts)?;
        w.opt_attr("linkstatic", &self.linkstatic)?;
        w.opt_attr("nocopts", &self.nocopts)?;
        w.opt_attr("strip_include_prefix", &self.strip_include_prefix)?;
        w.opt_attr("textual_hdrs", &self.textual_hdrs)?;
        w.opt_attr("win_def_file", &self.win_def_file)
    }
}

/// `cc_binary`.
#[derive(Clone, Debug, Eq, PartialEq, Allocative)]
pub struct CcBinaryTarget {
    pub common: TargetCommon,
    pub binary: TargetCommonBinary,
    pub srcs: Option<Vec<Label>>,
    pub additional_linker_inputs: Option<Vec<Label>>,
    pub copts: Option<Vec<String>>,
    pub defines: Option<Vec<String>>,
    pub includes: Option<Vec<String>>,
    pub linkopts: Option<Vec<String>>,
    pub linkshared: Option<bool>,
    pub linkstatic: Option<bool>,
    pub malloc: Option<Label>,
    pub nocopts: Option<Vec<String>>,
    pub stamp: Option<i64>,
    pub win_def_file: Option<Label>,
}

impl WriteAttrs for CcBinaryTarget {
    fn write_attrs(&self, w: &mut AttrWriter<'_, '_>) -> fmt::Result {
        self.common.write_attrs(w)?;
        self.binary.write_attrs(w)?;
        w.opt_attr("srcs", &self.srcs)?;
        w.opt_attr("additional_linker_inputs", &self.additional_linker_inputs)?;
        w.opt_attr("copts", &self.copts)?;
        w.opt_attr("defines", &self.defines)?;
        w.opt_attr("includes", &self.includes)?;
        w.opt_attr("linkopts", &self.linkopts)?;
        w.opt_attr("linkshared", &self.linkshared)?;
        w.opt_attr("linkstatic", &self.linkstatic)?;
        w.opt_attr("malloc", &self.malloc)?;
        w.opt_attr("nocopts", &self.nocopts)?;
        w.opt_attr("stamp", &self.stamp)?;
        w.opt_attr("win_def_file", &self.win_def_file)
    }
}

/// `cc_test`. Same attributes as `cc_binary` minus `linkshared`.
#[derive(Clone, Debug, Eq, PartialEq, Allocative)]
pub struct CcTestTarget {
    pub common: TargetCommon,
    pub test: TargetCommonTest,
    pub srcs: Option<Vec<Label>>,
    pub additional_linker_inputs: Option<Vec<Label>>,
    pub copts: Option<Vec<String>>,
    pub defines: Option<Vec<String>>,
    pub includes: Option<Vec<String>>,
    pub linkopts: Option<Vec<String>>,
    pub linkstatic: Option<bool>,
    pub malloc: Option<Label>,
    pub nocopts: Option<Vec<String>>,
    pub stamp: Option<i64>,
    pub win_def_file: Option<Label>,
}

impl WriteAttrs for CcTestTarget {
    fn write_attrs(&self, w: &mut AttrWriter<'_, '_>) -> fmt::Result {
        self.common.write_attrs(w)?;
        self.test.write_attrs(w)?;
        w.opt_attr("srcs", &self.srcs)?;
        w.opt_attr("additional_linker_inputs", &self.additional_linker_inputs)?;
        w.opt_attr("copts", &self.copts)?;
        w.opt_attr("defines", &self.defines)?;
        w.opt_attr("includes", &self.includes)?;
        w.opt_attr("linkopts", &self.linkopts)?;
        w.opt_attr("linkstatic", &self.linkstatic)?;
        w.opt_attr("malloc", &self.malloc)?;
        w.opt_attr("nocopts", &self.nocopts)?;
        w.opt_attr("stamp", &self.stamp)?;
        w.opt_attr("win_def_file", &self.win_def_file)
    }
}
