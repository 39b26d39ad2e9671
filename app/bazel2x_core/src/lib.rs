/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under both the MIT license found in the
 * LICENSE-MIT file in the root directory of this source tree and the Apache
 * License, Version 2.0 found in the LICENSE-APACHE file in the root directory
 * of this source tree.
 */

//! Core types shared by every layer: labels and the names they are made of,
//! the kind of file being evaluated, and error sharing.

pub mod file_type;
pub mod label;
pub mod logging;
pub mod shared_error;
