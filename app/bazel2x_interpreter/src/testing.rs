/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under both the MIT license found in the
 * LICENSE-MIT file in the root directory of this source tree and the Apache
 * License, Version 2.0 found in the LICENSE-APACHE file in the root directory
 * of this source tree.
 */

//! Helpers for tests evaluating files without touching the filesystem.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt::Display;
use std::rc::Rc;

use bazel2x_core::label::Label;
use bazel2x_core::label::PackageName;
use bazel2x_core::label::WorkspaceName;

use crate::source::SourceReader;

#[derive(Debug, thiserror::Error)]
enum InMemorySourcesError {
    #[error("No such file `{0}`")]
    NotFound(String),
}

#[derive(Default)]
struct Files {
    contents: HashMap<String, String>,
    reads: HashMap<String, usize>,
}

/// File contents keyed by the canonical form of their label.
///
/// Clones share their files, so a test can keep one to inspect read counts
/// after handing another to a [`Build`](crate::build::Build).
#[derive(Clone, Default)]
pub struct InMemorySources {
    files: Rc<RefCell<Files>>,
}

impl InMemorySources {
    pub fn new() -> InMemorySources {
        InMemorySources::default()
    }

    /// Add a file. `label` is parsed relative to the main workspace root.
    pub fn add(&self, label: &str, content: &str) -> anyhow::Result<()> {
        let label = main_label(label)?;
        self.files
            .borrow_mut()
            .contents
            .insert(label.to_string(), content.to_owned());
        Ok(())
    }

    /// How many times the file `label` was read, found or not.
    pub fn reads(&self, label: &Label) -> usize {
        self.files
            .borrow()
            .reads
            .get(&label.to_string())
            .copied()
            .unwrap_or(0)
    }
}

impl SourceReader for InMemorySources {
    fn read(&self, label: &Label) -> anyhow::Result<Vec<u8>> {
        let key = label.to_string();
        let mut files = self.files.borrow_mut();
        *files.reads.entry(key.clone()).or_default() += 1;
        match files.contents.get(&key) {
            Some(content) => Ok(content.clone().into_bytes()),
            None => Err(InMemorySourcesError::NotFound(key).into()),
        }
    }
}

/// Parse an absolute label as seen from the root of the main workspace.
pub fn main_label(text: &str) -> anyhow::Result<Label> {
    Label::parse(&WorkspaceName::main(), &PackageName::default(), text)
}

/// Assert that `result` failed with an error mentioning `expected` anywhere
/// in its chain.
pub fn expect_error<T, E: Display>(result: Result<T, E>, content: &str, expected: &str) {
    match result {
        Ok(_) => {
            eprintln!(
                "Expected failure, got success.\nCode contents:\n{}",
                content
            );
            panic!();
        }
        Err(e) => {
            let returned = format!("{:#}", e);
            if !returned.contains(expected) {
                eprintln!(
                    "Could not find expected error string.\nExpected:\n{}\n\nError:\n{}\n\nCode contents:\n{}",
                    expected, returned, content
                );
                panic!();
            }
        }
    }
}
