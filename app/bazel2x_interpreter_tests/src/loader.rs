/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under both the MIT license found in the
 * LICENSE-MIT file in the root directory of this source tree and the Apache
 * License, Version 2.0 found in the LICENSE-APACHE file in the root directory
 * of this source tree.
 */

use bazel2x_core::label::Label;
use bazel2x_core::logging::init_tracing_for_tests;
use bazel2x_interpreter::build::Build;
use bazel2x_interpreter::testing::expect_error;
use bazel2x_interpreter::testing::main_label;
use bazel2x_interpreter::testing::InMemorySources;
use indoc::indoc;

fn build_with(files: &[(&str, &str)]) -> anyhow::Result<(Build, InMemorySources)> {
    init_tracing_for_tests();
    let sources = InMemorySources::new();
    for (label, content) in files {
        sources.add(label, content)?;
    }
    Ok((Build::new(sources.clone()), sources))
}

fn label(text: &str) -> Label {
    main_label(text).unwrap()
}

#[test]
fn extension_is_evaluated_once() -> anyhow::Result<()> {
    let defs = indoc!(
        r#"
            X = []
        "#
    );
    let (build, sources) = build_with(&[
        ("//a:defs.bzl", defs),
        (
            "//a:BUILD",
            indoc!(
                r#"
                    load(":defs.bzl", "X")
                    load("//a:defs.bzl", Y = "X")
                "#
            ),
        ),
        (
            "//b:BUILD",
            indoc!(
                r#"
                    load("//a:defs.bzl", "X")
                "#
            ),
        ),
    ])?;
    build.exec_build_file(&label("//a:BUILD"))?;
    build.exec_build_file(&label("//b:BUILD"))?;
    let first = build.load_extension(&label("//a:defs.bzl"))?;
    let second = build.load_extension(&label("//a:defs.bzl"))?;
    assert_eq!(1, sources.reads(&label("//a:defs.bzl")));

    // Each evaluation would allocate a fresh list.
    let first = first.get("X").unwrap();
    let second = second.get("X").unwrap();
    assert!(first.value().ptr_eq(second.value()));
    Ok(())
}

#[test]
fn loaded_symbols_are_visible() -> anyhow::Result<()> {
    let (build, _) = build_with(&[
        (
            "//a:defs.bzl",
            indoc!(
                r#"
                    SRCS = ["x.cc"]
                "#
            ),
        ),
        (
            "//b:BUILD",
            indoc!(
                r#"
                    load("//a:defs.bzl", "SRCS")
                    cc_library(name = "x", srcs = SRCS)
                "#
            ),
        ),
    ])?;
    build.exec_build_file(&label("//b:BUILD"))?;
    let targets = build.targets();
    let target = targets.get(&label("//b:x")).unwrap();
    assert_eq!(
        r#"cc_library(name = "x", srcs = ["//b:x.cc"])"#,
        target.to_string()
    );
    Ok(())
}

#[test]
fn load_cycle() -> anyhow::Result<()> {
    let (build, sources) = build_with(&[
        (
            "//a:a.bzl",
            indoc!(
                r#"
                    load("//b:b.bzl", "B")
                    A = 1
                "#
            ),
        ),
        (
            "//b:b.bzl",
            indoc!(
                r#"
                    load("//a:a.bzl", "A")
                    B = 1
                "#
            ),
        ),
    ])?;
    let a = label("//a:a.bzl");
    let b = label("//b:b.bzl");

    let first = build.load_extension(&a);
    expect_error(first.as_ref().map(|_| ()), "a.bzl", "cycle in load graph");
    let second = build.load_extension(&a);
    assert!(first.err().unwrap().ptr_eq(&second.err().unwrap()));

    // `b` failed while `a` was in progress, and stays failed.
    let b_first = build.load_extension(&b);
    expect_error(b_first.as_ref().map(|_| ()), "b.bzl", "cycle in load graph");
    let b_second = build.load_extension(&b);
    assert!(b_first.err().unwrap().ptr_eq(&b_second.err().unwrap()));

    assert_eq!(1, sources.reads(&a));
    assert_eq!(1, sources.reads(&b));
    Ok(())
}

#[test]
fn self_load_is_a_cycle() -> anyhow::Result<()> {
    let (build, _) = build_with(&[(
        "//a:a.bzl",
        indoc!(
            r#"
                load(":a.bzl", "A")
                A = 1
            "#
        ),
    )])?;
    expect_error(
        build.load_extension(&label("//a:a.bzl")),
        "a.bzl",
        "cycle in load graph",
    );
    Ok(())
}

#[test]
fn read_failure_is_cached() -> anyhow::Result<()> {
    let (build, sources) = build_with(&[])?;
    let missing = label("//a:missing.bzl");
    let first = build.load_extension(&missing);
    expect_error(first.as_ref().map(|_| ()), "", "No such file `//a:missing.bzl`");
    let second = build.load_extension(&missing);
    assert!(first.err().unwrap().ptr_eq(&second.err().unwrap()));
    assert_eq!(1, sources.reads(&missing));
    Ok(())
}

#[test]
fn evaluation_failure_is_cached() -> anyhow::Result<()> {
    let content = indoc!(
        r#"
            fail("broken")
        "#
    );
    let (build, sources) = build_with(&[("//a:bad.bzl", content)])?;
    let bad = label("//a:bad.bzl");
    expect_error(build.load_extension(&bad), content, "broken");
    expect_error(build.load_extension(&bad), content, "broken");
    assert_eq!(1, sources.reads(&bad));
    Ok(())
}

#[test]
fn failed_load_fails_the_loading_file() -> anyhow::Result<()> {
    let content = indoc!(
        r#"
            load("//a:missing.bzl", "X")
        "#
    );
    let (build, _) = build_with(&[("//b:BUILD", content)])?;
    expect_error(
        build.exec_build_file(&label("//b:BUILD")),
        content,
        "load of `//a:missing.bzl` failed",
    );
    Ok(())
}

#[test]
fn only_extensions_can_be_loaded() -> anyhow::Result<()> {
    let content = indoc!(
        r#"
            load("//a:BUILD", "X")
        "#
    );
    let (build, sources) = build_with(&[("//a:BUILD", ""), ("//b:BUILD", content)])?;
    expect_error(
        build.exec_build_file(&label("//b:BUILD")),
        content,
        "cannot be evaluated as a .bzl file",
    );
    assert_eq!(0, sources.reads(&label("//a:BUILD")));
    expect_error(
        build.load_extension(&label("//a:BUILD")),
        "",
        "cannot be evaluated as a .bzl file",
    );
    Ok(())
}

#[test]
fn invalid_load_label() -> anyhow::Result<()> {
    let content = indoc!(
        r#"
            load("defs.bzl", "X")
        "#
    );
    let (build, _) = build_with(&[("//b:BUILD", content)])?;
    expect_error(
        build.exec_build_file(&label("//b:BUILD")),
        content,
        "invalid label: `defs.bzl`",
    );
    Ok(())
}

#[test]
fn build_file_names() -> anyhow::Result<()> {
    let (build, _) = build_with(&[("//a:BUILD.bazel", ""), ("//a:defs.bzl", "")])?;
    build.exec_build_file(&label("//a:BUILD.bazel"))?;
    expect_error(
        build.exec_build_file(&label("//a:defs.bzl")),
        "",
        "cannot be evaluated as a BUILD file",
    );
    expect_error(
        build.exec_workspace_file(&label("//a:BUILD.bazel")),
        "",
        "cannot be evaluated as a WORKSPACE file",
    );
    Ok(())
}

#[test]
fn package_evaluated_twice() -> anyhow::Result<()> {
    let (build, _) = build_with(&[("//a:BUILD", "")])?;
    build.exec_build_file(&label("//a:BUILD"))?;
    expect_error(
        build.exec_build_file(&label("//a:BUILD")),
        "",
        "registered twice",
    );
    Ok(())
}

#[test]
fn functions_cannot_be_defined_in_build_files() -> anyhow::Result<()> {
    let content = indoc!(
        r#"
            def f():
                pass
        "#
    );
    let (build, _) = build_with(&[("//a:BUILD", content), ("//a:defs.bzl", content)])?;
    expect_error(
        build.exec_build_file(&label("//a:BUILD")),
        content,
        "`def` is not allowed in this dialect",
    );
    build.load_extension(&label("//a:defs.bzl"))?;
    Ok(())
}

#[test]
fn source_must_be_utf8() -> anyhow::Result<()> {
    init_tracing_for_tests();
    let build = Build::new(|_: &Label| Ok::<_, anyhow::Error>(vec![0xff, 0xfe]));
    expect_error(
        build.load_extension(&label("//a:defs.bzl")),
        "",
        "is not valid UTF-8",
    );
    Ok(())
}
