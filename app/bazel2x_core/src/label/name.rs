/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under both the MIT license found in the
 * LICENSE-MIT file in the root directory of this source tree and the Apache
 * License, Version 2.0 found in the LICENSE-APACHE file in the root directory
 * of this source tree.
 */

//! The three names a label is made of.
//!
//! None of these validate on construction: labels are built from whatever a
//! build file wrote, and `is_valid` is asked separately once the label is
//! complete.

use std::fmt;
use std::fmt::Display;

use allocative::Allocative;

/// Name of a workspace, without the leading `@`. Empty for the main workspace.
///
/// A non-empty name starts with an ASCII letter, followed by ASCII letters,
/// digits and `_`.
#[derive(Clone, Debug, Default, Hash, Eq, PartialEq, Ord, PartialOrd, Allocative)]
pub struct WorkspaceName(String);

impl WorkspaceName {
    /// The main workspace.
    pub const fn main() -> WorkspaceName {
        WorkspaceName(String::new())
    }

    pub fn new(name: impl Into<String>) -> WorkspaceName {
        WorkspaceName(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_valid(&self) -> bool {
        let mut chars = self.0.chars();
        match chars.next() {
            None => true,
            Some(first) => {
                first.is_ascii_alphabetic() && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
            }
        }
    }

    /// Anything but the main workspace.
    pub fn is_external(&self) -> bool {
        !self.0.is_empty()
    }
}

impl Display for WorkspaceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_external() {
            write!(f, "@{}", self.0)
        } else {
            Ok(())
        }
    }
}

/// Path of a package relative to its workspace root, without the leading `//`.
/// Empty for the root package.
#[derive(Clone, Debug, Default, Hash, Eq, PartialEq, Ord, PartialOrd, Allocative)]
pub struct PackageName(String);

fn is_package_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '.' | '_')
}

impl PackageName {
    pub fn new(name: impl Into<String>) -> PackageName {
        PackageName(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Non-empty `/`-separated components of `[A-Za-z0-9-._]`, or the empty
    /// root package.
    pub fn is_valid(&self) -> bool {
        self.0.is_empty()
            || self
                .0
                .split('/')
                .all(|component| !component.is_empty() && component.chars().all(is_package_char))
    }
}

impl Display for PackageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "//{}", self.0)
    }
}

/// Name of a target within its package, without the leading `:`.
#[derive(Clone, Debug, Hash, Eq, PartialEq, Ord, PartialOrd, Allocative)]
pub struct TargetName(String);

fn is_target_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '+' | '-' | '=' | ',' | '@' | '~')
}

impl TargetName {
    pub fn new(name: impl Into<String>) -> TargetName {
        TargetName(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Non-empty `/`-separated components of `[A-Za-z0-9_.+-=,@~]`, none of
    /// which is `.` or `..`. The name `.` on its own is allowed.
    pub fn is_valid(&self) -> bool {
        if self.0 == "." {
            return true;
        }
        !self.0.is_empty()
            && self.0.split('/').all(|component| {
                !component.is_empty()
                    && component != "."
                    && component != ".."
                    && component.chars().all(is_target_char)
            })
    }
}

impl Display for TargetName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ":{}", self.0)
    }
}
