/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under both the MIT license found in the
 * LICENSE-MIT file in the root directory of this source tree and the Apache
 * License, Version 2.0 found in the LICENSE-APACHE file in the root directory
 * of this source tree.
 */

use std::fmt;
use std::sync::Arc;

use dupe::Dupe;

/// An `anyhow::Error` that can be handed out more than once.
///
/// Cloning shares the underlying error, so every holder sees the same object
/// (`ptr_eq` tells them apart from an equal-looking error).
#[derive(Clone, Dupe)]
pub struct SharedError(Arc<anyhow::Error>);

impl SharedError {
    pub fn new(e: impl Into<anyhow::Error>) -> SharedError {
        SharedError(Arc::new(e.into()))
    }

    pub fn inner(&self) -> &anyhow::Error {
        &self.0
    }

    /// Whether both are the same error, not merely equal.
    pub fn ptr_eq(&self, other: &SharedError) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for SharedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}

impl fmt::Display for SharedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.0, f)
    }
}

impl std::error::Error for SharedError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl From<anyhow::Error> for SharedError {
    fn from(e: anyhow::Error) -> Self {
        SharedError::new(e)
    }
}

pub type SharedResult<T> = Result<T, SharedError>;

/// Convert some non-shared `Result` into a [`SharedResult`].
pub trait ToSharedResultExt<T> {
    fn shared_error(self) -> SharedResult<T>;
}

impl<T, E> ToSharedResultExt<T> for Result<T, E>
where
    SharedError: From<E>,
{
    fn shared_error(self) -> SharedResult<T> {
        Ok(self?)
    }
}
