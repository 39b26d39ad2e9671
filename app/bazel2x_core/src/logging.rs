/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under both the MIT license found in the
 * LICENSE-MIT file in the root directory of this source tree and the Apache
 * License, Version 2.0 found in the LICENSE-APACHE file in the root directory
 * of this source tree.
 */

use anyhow::Context;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `bazel2x_interpreter=debug`.
pub const LOG_ENV_VAR: &str = "BAZEL2X_LOG";

const DEFAULT_FILTER: &str = "warn";

fn env_filter() -> anyhow::Result<EnvFilter> {
    match std::env::var(LOG_ENV_VAR) {
        Ok(v) => EnvFilter::try_new(&v)
            .with_context(|| format!("Failed to parse ${} as a filter", LOG_ENV_VAR)),
        Err(_) => Ok(EnvFilter::new(DEFAULT_FILTER)),
    }
}

/// Install a global subscriber writing to `writer`.
///
/// Fails if a global subscriber is already installed.
pub fn init_tracing_for_writer<W>(writer: W) -> anyhow::Result<()>
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_filter(env_filter()?);

    tracing_subscriber::registry()
        .with(layer)
        .try_init()
        .context("Failed to install the tracing subscriber")
}

/// Route logs through the test harness. Safe to call from every test.
pub fn init_tracing_for_tests() {
    // Only the first call installs the subscriber.
    let _ignored = init_tracing_for_writer(tracing_subscriber::fmt::TestWriter::new());
}
