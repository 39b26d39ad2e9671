/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under both the MIT license found in the
 * LICENSE-MIT file in the root directory of this source tree and the Apache
 * License, Version 2.0 found in the LICENSE-APACHE file in the root directory
 * of this source tree.
 */

//! Evaluation of `WORKSPACE`, `BUILD` and `.bzl` files.
//!
//! A [`Build`](build::Build) evaluates files on request, loading and caching
//! the extensions they reference, and collects the targets declared by rule
//! calls into a [`BuildTargets`](bazel2x_node::targets::BuildTargets).

#[macro_use]
mod not_implemented;

pub mod attrs;
pub mod build;
pub mod config;
pub mod context;
mod functions;
pub mod globals;
mod loader;
mod rules;
pub mod source;
pub mod testing;
mod workspace_rules;
