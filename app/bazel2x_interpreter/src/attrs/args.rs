/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under both the MIT license found in the
 * LICENSE-MIT file in the root directory of this source tree and the Apache
 * License, Version 2.0 found in the LICENSE-APACHE file in the root directory
 * of this source tree.
 */

use anyhow::Context;
use bazel2x_node::attrs::coercion_context::AttrCoercionContext;
use starlark::collections::SmallMap;
use starlark::values::Value;

use crate::attrs::coerce::CoerceAttr;

#[derive(Debug, thiserror::Error)]
pub enum BindError {
    #[error("All arguments must be passed by keyword, got {0} positional argument(s)")]
    PositionalArguments(usize),
    #[error("Missing required attribute `{0}`")]
    MissingRequired(&'static str),
    #[error("Unknown attribute `{0}`")]
    UnknownAttribute(String),
    #[error("Invalid attribute `{0}`")]
    InvalidAttribute(&'static str),
}

/// Keyword arguments of a rule call not yet claimed by an attribute.
pub struct AttrArgs<'c, 'v> {
    ctx: &'c dyn AttrCoercionContext,
    kwargs: SmallMap<String, Value<'v>>,
}

impl<'c, 'v> AttrArgs<'c, 'v> {
    pub fn new(ctx: &'c dyn AttrCoercionContext, kwargs: SmallMap<String, Value<'v>>) -> Self {
        AttrArgs { ctx, kwargs }
    }

    pub fn ctx(&self) -> &'c dyn AttrCoercionContext {
        self.ctx
    }

    /// Take and convert the argument `name`, if it was passed.
    pub fn optional<T: CoerceAttr>(&mut self, name: &'static str) -> anyhow::Result<Option<T>> {
        match self.kwargs.shift_remove(name) {
            None => Ok(None),
            Some(value) => T::coerce(self.ctx, value)
                .context(BindError::InvalidAttribute(name))
                .map(Some),
        }
    }

    pub fn required<T: CoerceAttr>(&mut self, name: &'static str) -> anyhow::Result<T> {
        match self.optional(name)? {
            Some(v) => Ok(v),
            None => Err(BindError::MissingRequired(name).into()),
        }
    }

    /// Fail if any argument was not claimed.
    fn finish(self) -> anyhow::Result<()> {
        match self.kwargs.keys().next() {
            Some(name) => Err(BindError::UnknownAttribute(name.clone()).into()),
            None => Ok(()),
        }
    }
}

/// A record of rule attributes.
///
/// Records embedding other records decode the embedded ones first, by
/// calling their `decode`.
pub trait RuleAttrs: Sized {
    fn decode(args: &mut AttrArgs) -> anyhow::Result<Self>;

    /// Runs once every argument has been claimed.
    fn finalize(&mut self, _ctx: &dyn AttrCoercionContext) -> anyhow::Result<()> {
        Ok(())
    }
}

/// Bind the arguments of a rule call to a record.
pub fn bind_attrs<'v, R: RuleAttrs>(
    ctx: &dyn AttrCoercionContext,
    positional: &[Value<'v>],
    kwargs: SmallMap<String, Value<'v>>,
) -> anyhow::Result<R> {
    if !positional.is_empty() {
        return Err(BindError::PositionalArguments(positional.len()).into());
    }
    let mut args = AttrArgs::new(ctx, kwargs);
    let mut record = R::decode(&mut args)?;
    args.finish()?;
    record.finalize(ctx)?;
    Ok(record)
}
