/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under both the MIT license found in the
 * LICENSE-MIT file in the root directory of this source tree and the Apache
 * License, Version 2.0 found in the LICENSE-APACHE file in the root directory
 * of this source tree.
 */

use bazel2x_core::label::Label;
use bazel2x_core::label::WorkspaceName;
use bazel2x_core::logging::init_tracing_for_tests;
use bazel2x_interpreter::build::Build;
use bazel2x_interpreter::testing::expect_error;
use bazel2x_interpreter::testing::main_label;
use bazel2x_interpreter::testing::InMemorySources;
use indoc::indoc;

fn label(text: &str) -> Label {
    main_label(text).unwrap()
}

fn build_with(files: &[(&str, &str)]) -> anyhow::Result<Build> {
    init_tracing_for_tests();
    let sources = InMemorySources::new();
    for (label, content) in files {
        sources.add(label, content)?;
    }
    Ok(Build::new(sources))
}

#[test]
fn workspace_sets_name() -> anyhow::Result<()> {
    let build = build_with(&[(
        "//:WORKSPACE",
        indoc!(
            r#"
                workspace(name = "my_project")
                local_repository(name = "other", path = "../other")
                bind(name = "x", actual = "//y")
            "#
        ),
    )])?;
    assert_eq!(None, build.workspace_name());
    build.exec_workspace_file(&label("//:WORKSPACE"))?;
    assert_eq!(Some(WorkspaceName::new("my_project")), build.workspace_name());
    Ok(())
}

#[test]
fn workspace_file_evaluated_once() -> anyhow::Result<()> {
    let build = build_with(&[("//:WORKSPACE", "")])?;
    build.exec_workspace_file(&label("//:WORKSPACE"))?;
    expect_error(
        build.exec_workspace_file(&label("//:WORKSPACE")),
        "",
        "the WORKSPACE file was already evaluated",
    );
    Ok(())
}

#[test]
fn workspace_name_set_once() -> anyhow::Result<()> {
    let content = indoc!(
        r#"
            workspace(name = "a")
            workspace(name = "b")
        "#
    );
    let build = build_with(&[("//:WORKSPACE", content)])?;
    expect_error(
        build.exec_workspace_file(&label("//:WORKSPACE")),
        content,
        "Workspace name already set to `a`",
    );
    assert_eq!(Some(WorkspaceName::new("a")), build.workspace_name());
    Ok(())
}

#[test]
fn workspace_name_must_be_valid() -> anyhow::Result<()> {
    let content = indoc!(
        r#"
            workspace(name = "my-project")
        "#
    );
    let build = build_with(&[("//:WORKSPACE", content)])?;
    expect_error(
        build.exec_workspace_file(&label("//:WORKSPACE")),
        content,
        "`my-project` is not a valid workspace name",
    );
    assert_eq!(None, build.workspace_name());
    Ok(())
}

#[test]
fn workspace_rules_only_run_for_workspace_file() -> anyhow::Result<()> {
    let content = indoc!(
        r#"
            workspace(name = "a")
        "#
    );
    let build = build_with(&[("//pkg:BUILD", content)])?;
    expect_error(
        build.exec_build_file(&label("//pkg:BUILD")),
        content,
        "`workspace` can only be called from a WORKSPACE file",
    );

    let content = indoc!(
        r#"
            local_repository(name = "a", path = "a")
        "#
    );
    let build = build_with(&[("//pkg:BUILD", content)])?;
    expect_error(
        build.exec_build_file(&label("//pkg:BUILD")),
        content,
        "`local_repository` can only be called from a WORKSPACE file",
    );
    Ok(())
}

#[test]
fn workspace_may_load_extensions() -> anyhow::Result<()> {
    let build = build_with(&[
        (
            "//:WORKSPACE",
            indoc!(
                r#"
                    load("//tools:deps.bzl", "NAME")
                    workspace(name = NAME)
                "#
            ),
        ),
        (
            "//tools:deps.bzl",
            indoc!(
                r#"
                    NAME = "from_bzl"
                "#
            ),
        ),
    ])?;
    build.exec_workspace_file(&label("//:WORKSPACE"))?;
    assert_eq!(Some(WorkspaceName::new("from_bzl")), build.workspace_name());
    Ok(())
}
