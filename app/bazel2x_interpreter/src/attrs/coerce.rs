/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under both the MIT license found in the
 * LICENSE-MIT file in the root directory of this source tree and the Apache
 * License, Version 2.0 found in the LICENSE-APACHE file in the root directory
 * of this source tree.
 */

//! Conversion of starlark values into attribute values.

use anyhow::Context;
use bazel2x_core::label::Label;
use bazel2x_node::attrs::coercion_context::AttrCoercionContext;
use starlark::values::list::ListRef;
use starlark::values::tuple::TupleRef;
use starlark::values::UnpackValue;
use starlark::values::Value;

#[derive(Debug, thiserror::Error)]
pub enum CoercionError {
    #[error("Expected value of type `{0}`, got value with type `{1}` (value was `{2}`)")]
    TypeError(&'static str, &'static str, String),
    #[error("Integer `{0}` out of range")]
    OutOfRange(String),
}

impl CoercionError {
    pub fn type_error(expected: &'static str, value: Value) -> CoercionError {
        CoercionError::TypeError(expected, value.get_type(), value.to_repr())
    }
}

/// An attribute value type.
pub trait CoerceAttr: Sized {
    fn coerce(ctx: &dyn AttrCoercionContext, value: Value) -> anyhow::Result<Self>;
}

/// Any value is accepted, by truthiness.
impl CoerceAttr for bool {
    fn coerce(_ctx: &dyn AttrCoercionContext, value: Value) -> anyhow::Result<Self> {
        Ok(value.to_bool())
    }
}

impl CoerceAttr for i64 {
    fn coerce(_ctx: &dyn AttrCoercionContext, value: Value) -> anyhow::Result<Self> {
        let unpacked = i64::unpack_value(value).map_err(|e| {
            let e: starlark::Error = e.into();
            e.into_anyhow()
        })?;
        match unpacked {
            Some(i) => Ok(i),
            None if value.get_type() == "int" => {
                Err(CoercionError::OutOfRange(value.to_repr()).into())
            }
            None => Err(CoercionError::type_error("int", value).into()),
        }
    }
}

impl CoerceAttr for String {
    fn coerce(_ctx: &dyn AttrCoercionContext, value: Value) -> anyhow::Result<Self> {
        match value.unpack_str() {
            Some(s) => Ok(s.to_owned()),
            None => Err(CoercionError::type_error("string", value).into()),
        }
    }
}

impl CoerceAttr for Label {
    fn coerce(ctx: &dyn AttrCoercionContext, value: Value) -> anyhow::Result<Self> {
        match value.unpack_str() {
            Some(s) => ctx.coerce_label(s),
            None => Err(CoercionError::type_error("label", value).into()),
        }
    }
}

/// A list or tuple, converted element by element.
impl<T: CoerceAttr> CoerceAttr for Vec<T> {
    fn coerce(ctx: &dyn AttrCoercionContext, value: Value) -> anyhow::Result<Self> {
        let items = if let Some(list) = ListRef::from_value(value) {
            list.content()
        } else if let Some(tuple) = TupleRef::from_value(value) {
            tuple.content()
        } else {
            return Err(CoercionError::type_error("list", value).into());
        };
        items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                T::coerce(ctx, *item).with_context(|| format!("Invalid element at index {}", i))
            })
            .collect()
    }
}
