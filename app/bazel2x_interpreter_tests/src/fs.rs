/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under both the MIT license found in the
 * LICENSE-MIT file in the root directory of this source tree and the Apache
 * License, Version 2.0 found in the LICENSE-APACHE file in the root directory
 * of this source tree.
 */

use std::fs;

use bazel2x_core::logging::init_tracing_for_tests;
use bazel2x_interpreter::build::Build;
use bazel2x_interpreter::config::BuildConfig;
use bazel2x_interpreter::testing::expect_error;
use bazel2x_interpreter::testing::main_label;
use indoc::indoc;
use maplit::btreemap;

/// Lay out `files` (paths relative to `root`) on disk.
fn write_files(root: &std::path::Path, files: &[(&str, &str)]) -> anyhow::Result<()> {
    for (path, content) in files {
        let path = root.join(path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
    }
    Ok(())
}

#[test]
fn reads_main_and_external_workspaces() -> anyhow::Result<()> {
    init_tracing_for_tests();
    let workspace = tempfile::tempdir()?;
    let output_base = tempfile::tempdir()?;
    write_files(
        workspace.path(),
        &[
            ("WORKSPACE", r#"workspace(name = "main")"#),
            (
                "app/BUILD",
                indoc!(
                    r#"
                        load("@rules//cc:defs.bzl", "COPTS")
                        cc_binary(name = "app", srcs = ["main.cc"], copts = COPTS)
                    "#
                ),
            ),
        ],
    )?;
    write_files(
        output_base.path(),
        &[(
            "external/rules/cc/defs.bzl",
            indoc!(
                r#"
                    COPTS = ["-DREPO=" + REPOSITORY_NAME]
                "#
            ),
        )],
    )?;

    let config = BuildConfig::new(workspace.path()).with_output_base(output_base.path());
    let build = Build::from_config(&config);
    build.exec_workspace_file(&main_label("//:WORKSPACE")?)?;
    build.exec_build_file(&main_label("//app:BUILD")?)?;

    let rendered = build
        .targets()
        .iter()
        .map(|t| (t.label().to_string(), t.to_string()))
        .collect::<std::collections::BTreeMap<_, _>>();
    assert_eq!(
        btreemap! {
            "//app:app".to_owned() =>
                r#"cc_binary(name = "app", srcs = ["//app:main.cc"], copts = ["-DREPO=@rules"])"#
                    .to_owned(),
        },
        rendered
    );
    Ok(())
}

#[test]
fn missing_file() -> anyhow::Result<()> {
    init_tracing_for_tests();
    let workspace = tempfile::tempdir()?;
    let build = Build::from_config(&BuildConfig::new(workspace.path()));
    expect_error(
        build.exec_build_file(&main_label("//nowhere:BUILD")?),
        "",
        "Failed to read",
    );
    Ok(())
}
