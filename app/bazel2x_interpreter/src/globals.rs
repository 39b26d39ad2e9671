/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under both the MIT license found in the
 * LICENSE-MIT file in the root directory of this source tree and the Apache
 * License, Version 2.0 found in the LICENSE-APACHE file in the root directory
 * of this source tree.
 */

use starlark::environment::Globals;
use starlark::environment::GlobalsBuilder;
use starlark::environment::LibraryExtension;

use crate::functions::register_functions;
use crate::rules::register_rules;
use crate::workspace_rules::register_workspace_rules;

/// Globals shared by every file type. Builtins restricted to one file type
/// check it when called.
pub fn base_globals() -> Globals {
    GlobalsBuilder::extended_by(&[LibraryExtension::StructType, LibraryExtension::Print])
        .with(register_rules)
        .with(register_workspace_rules)
        .with(register_functions)
        .build()
}
