/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under both the MIT license found in the
 * LICENSE-MIT file in the root directory of this source tree and the Apache
 * License, Version 2.0 found in the LICENSE-APACHE file in the root directory
 * of this source tree.
 */

pub mod cc;
pub mod common;

use std::fmt;
use std::fmt::Display;

use allocative::Allocative;
use bazel2x_core::label::Label;

use crate::attrs::fmt::AttrWriter;
use crate::attrs::fmt::WriteAttrs;
use crate::nodes::cc::CcBinaryTarget;
use crate::nodes::cc::CcLibraryTarget;
use crate::nodes::cc::CcTestTarget;
use crate::nodes::common::TargetCommon;

/// A target declared by a rule in a build file.
#[derive(Clone, Debug, Eq, PartialEq, Allocative)]
pub enum Target {
    CcLibrary(CcLibraryTarget),
    CcBinary(CcBinaryTarget),
    CcTest(CcTestTarget),
}

impl Target {
    pub fn common(&self) -> &TargetCommon {
        match self {
            Target::CcLibrary(t) => &t.common,
            Target::CcBinary(t) => &t.common,
            Target::CcTest(t) => &t.common,
        }
    }

    pub fn label(&self) -> &Label {
        &self.common().label
    }

    /// Name of the rule that declared this target.
    pub fn rule_name(&self) -> &'static str {
        match self {
            Target::CcLibrary(_) => "cc_library",
            Target::CcBinary(_) => "cc_binary",
            Target::CcTest(_) => "cc_test",
        }
    }

    fn attrs(&self) -> &dyn WriteAttrs {
        match self {
            Target::CcLibrary(t) => t,
            Target::CcBinary(t) => t,
            Target::CcTest(t) => t,
        }
    }
}

/// The rule call that would declare this target, listing the attributes that
/// were set: `cc_library(name = "foo", srcs = ["//pkg:foo.cc"])`.
impl Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.rule_name())?;
        self.attrs().write_attrs(&mut AttrWriter::new(f))?;
        write!(f, ")")
    }
}
