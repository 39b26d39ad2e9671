/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under both the MIT license found in the
 * LICENSE-MIT file in the root directory of this source tree and the Apache
 * License, Version 2.0 found in the LICENSE-APACHE file in the root directory
 * of this source tree.
 */

//! Rendering of attribute values the way a build file would spell them.

use std::fmt;

use bazel2x_core::label::Label;

/// An attribute value that can be written back as a literal.
pub trait AttrDisplay {
    fn fmt_attr(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

impl AttrDisplay for bool {
    fn fmt_attr(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(if *self { "True" } else { "False" })
    }
}

impl AttrDisplay for i64 {
    fn fmt_attr(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl AttrDisplay for String {
    fn fmt_attr(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl AttrDisplay for Label {
    fn fmt_attr(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.to_string())
    }
}

impl<T: AttrDisplay> AttrDisplay for Vec<T> {
    fn fmt_attr(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, item) in self.iter().enumerate() {
            if i != 0 {
                f.write_str(", ")?;
            }
            item.fmt_attr(f)?;
        }
        f.write_str("]")
    }
}

/// Writes `name = value` pairs separated by `, `.
pub struct AttrWriter<'a, 'b> {
    f: &'a mut fmt::Formatter<'b>,
    empty: bool,
}

impl<'a, 'b> AttrWriter<'a, 'b> {
    pub fn new(f: &'a mut fmt::Formatter<'b>) -> Self {
        AttrWriter { f, empty: true }
    }

    pub fn attr<T: AttrDisplay>(&mut self, name: &str, value: &T) -> fmt::Result {
        if !self.empty {
            self.f.write_str(", ")?;
        }
        self.empty = false;
        write!(self.f, "{} = ", name)?;
        value.fmt_attr(self.f)
    }

    /// Writes nothing for an unset attribute.
    pub fn opt_attr<T: AttrDisplay>(&mut self, name: &str, value: &Option<T>) -> fmt::Result {
        match value {
            Some(value) => self.attr(name, value),
            None => Ok(()),
        }
    }
}

/// A record whose set attributes can be listed.
pub trait WriteAttrs {
    fn write_attrs(&self, w: &mut AttrWriter<'_, '_>) -> fmt::Result;
}
