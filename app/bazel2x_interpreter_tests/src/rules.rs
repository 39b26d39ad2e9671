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
use bazel2x_node::nodes::Target;
use indoc::indoc;

fn label(text: &str) -> Label {
    main_label(text).unwrap()
}

fn labels(labels: &Option<Vec<Label>>) -> Vec<String> {
    labels
        .iter()
        .flatten()
        .map(|l| l.to_string())
        .collect()
}

/// Evaluate `//pkg:BUILD` next to the given `.bzl` files.
fn eval_build(content: &str, extensions: &[(&str, &str)]) -> anyhow::Result<Build> {
    init_tracing_for_tests();
    let sources = InMemorySources::new();
    sources.add("//pkg:BUILD", content)?;
    for (label, content) in extensions {
        sources.add(label, content)?;
    }
    let build = Build::new(sources);
    build.exec_build_file(&label("//pkg:BUILD"))?;
    Ok(build)
}

#[test]
fn cc_library() -> anyhow::Result<()> {
    let build = eval_build(
        indoc!(
            r#"
                cc_library(
                    name = "lib",
                    srcs = ["lib.cc", ":gen.cc", "//other:x.cc", "@ext//y:z.cc"],
                    hdrs = ("lib.h",),
                    deps = ["//base"],
                    copts = ["-O2"],
                    alwayslink = 1,
                    linkstatic = False,
                )
            "#
        ),
        &[],
    )?;
    let targets = build.targets();
    let lib = match targets.get(&label("//pkg:lib")) {
        Some(Target::CcLibrary(lib)) => lib,
        t => panic!("unexpected target: {:?}", t),
    };
    assert_eq!("lib", lib.common.name);
    assert_eq!(
        vec![
            "//pkg:lib.cc",
            "//pkg:gen.cc",
            "//other:x.cc",
            "@ext//y:z.cc"
        ],
        labels(&lib.srcs)
    );
    assert_eq!(vec!["//pkg:lib.h"], labels(&lib.hdrs));
    assert_eq!(vec!["//base:base"], labels(&lib.common.deps));
    assert_eq!(Some(vec!["-O2".to_owned()]), lib.copts);
    assert_eq!(Some(true), lib.alwayslink);
    assert_eq!(Some(false), lib.linkstatic);
    assert_eq!(None, lib.defines);
    assert_eq!(None, lib.common.visibility);
    Ok(())
}

#[test]
fn cc_binary_and_cc_test() -> anyhow::Result<()> {
    let build = eval_build(
        indoc!(
            r#"
                cc_binary(
                    name = "bin",
                    srcs = ["main.cc"],
                    args = ["--verbose"],
                    malloc = "//tcmalloc",
                    stamp = -1,
                )
                cc_test(
                    name = "bin_test",
                    srcs = ["main_test.cc"],
                    deps = [":bin"],
                    size = "small",
                    shard_count = 4,
                    flaky = True,
                )
            "#
        ),
        &[],
    )?;
    let targets = build.targets();
    match targets.get(&label("//pkg:bin")) {
        Some(Target::CcBinary(bin)) => {
            assert_eq!(Some(vec!["--verbose".to_owned()]), bin.binary.args);
            assert_eq!(Some(label("//tcmalloc:tcmalloc")), bin.malloc);
            assert_eq!(Some(-1), bin.stamp);
        }
        t => panic!("unexpected target: {:?}", t),
    }
    match targets.get(&label("//pkg:bin_test")) {
        Some(Target::CcTest(test)) => {
            assert_eq!(vec!["//pkg:bin"], labels(&test.common.deps));
            assert_eq!(Some("small".to_owned()), test.test.size);
            assert_eq!(Some(4), test.test.shard_count);
            assert_eq!(Some(true), test.test.flaky);
        }
        t => panic!("unexpected target: {:?}", t),
    }
    Ok(())
}

#[test]
fn targets_keep_declaration_order() -> anyhow::Result<()> {
    let build = eval_build(
        indoc!(
            r#"
                cc_library(name = "b")
                cc_library(name = "a")
                cc_binary(name = "c")
            "#
        ),
        &[],
    )?;
    assert_eq!(
        vec![
            r#"cc_library(name = "b")"#,
            r#"cc_library(name = "a")"#,
            r#"cc_binary(name = "c")"#,
        ],
        build
            .targets()
            .iter()
            .map(|t| t.to_string())
            .collect::<Vec<_>>()
    );
    Ok(())
}

#[test]
fn duplicate_target() {
    let content = indoc!(
        r#"
            cc_library(name = "a")
            cc_binary(name = "a")
        "#
    );
    expect_error(
        eval_build(content, &[]),
        content,
        "Target `//pkg:a` already exists",
    );
}

#[test]
fn missing_name() {
    let content = indoc!(
        r#"
            cc_library(srcs = ["a.cc"])
        "#
    );
    expect_error(
        eval_build(content, &[]),
        content,
        "Missing required attribute `name`",
    );
}

#[test]
fn unknown_attribute() {
    let content = indoc!(
        r#"
            cc_library(name = "a", srcz = ["a.cc"])
        "#
    );
    expect_error(eval_build(content, &[]), content, "Unknown attribute `srcz`");
}

#[test]
fn positional_argument() {
    let content = indoc!(
        r#"
            cc_library("a")
        "#
    );
    expect_error(
        eval_build(content, &[]),
        content,
        "must be passed by keyword",
    );
}

#[test]
fn attribute_type_mismatch() {
    let content = indoc!(
        r#"
            cc_library(name = "a", srcs = "a.cc")
        "#
    );
    expect_error(eval_build(content, &[]), content, "Invalid attribute `srcs`");

    let content = indoc!(
        r#"
            cc_library(name = "a", srcs = ["a.cc", 3])
        "#
    );
    expect_error(
        eval_build(content, &[]),
        content,
        "Invalid element at index 1",
    );
}

#[test]
fn invalid_target_name() {
    let content = indoc!(
        r#"
            cc_library(name = "../a")
        "#
    );
    expect_error(
        eval_build(content, &[]),
        content,
        "Invalid target name `../a`",
    );
}

#[test]
fn error_names_file_and_rule() {
    let content = indoc!(
        r#"
            cc_test(name = "t", shard_count = "many")
        "#
    );
    expect_error(eval_build(content, &[]), content, "//pkg:BUILD: cc_test");
}

#[test]
fn macro_declares_targets_in_calling_package() -> anyhow::Result<()> {
    let build = eval_build(
        indoc!(
            r#"
                load("//macros:defs.bzl", "library_with_test")
                library_with_test("util")
            "#
        ),
        &[(
            "//macros:defs.bzl",
            indoc!(
                r#"
                    def library_with_test(name):
                        cc_library(name = name, srcs = [name + ".cc"])
                        cc_test(name = name + "_test", deps = [":" + name])
                "#
            ),
        )],
    )?;
    let targets = build.targets();
    match targets.get(&label("//pkg:util")) {
        Some(Target::CcLibrary(lib)) => {
            assert_eq!(vec!["//pkg:util.cc"], labels(&lib.srcs));
        }
        t => panic!("unexpected target: {:?}", t),
    }
    assert!(targets.get(&label("//pkg:util_test")).is_some());
    let macros = label("//macros:defs.bzl");
    assert!(targets.package(&macros.workspace, &macros.package).is_none());
    Ok(())
}

#[test]
fn rules_only_run_for_build_files() -> anyhow::Result<()> {
    init_tracing_for_tests();
    let sources = InMemorySources::new();
    let content = indoc!(
        r#"
            cc_library(name = "a")
        "#
    );
    sources.add("//:WORKSPACE", content)?;
    sources.add("//pkg:defs.bzl", content)?;
    let build = Build::new(sources);
    expect_error(
        build.exec_workspace_file(&label("//:WORKSPACE")),
        content,
        "`cc_library` can only be called from a BUILD file",
    );
    expect_error(
        build.load_extension(&label("//pkg:defs.bzl")),
        content,
        "`cc_library` can only be called from a BUILD file",
    );
    assert_eq!(0, build.targets().iter().count());
    Ok(())
}

#[test]
fn ignored_rules_are_accepted() -> anyhow::Result<()> {
    let build = eval_build(
        indoc!(
            r#"
                java_library(name = "j", srcs = glob(["*.java"]))
                py_binary(name = "p")
                cc_library(name = "c")
            "#
        ),
        &[],
    )?;
    assert_eq!(1, build.targets().iter().count());
    Ok(())
}

#[test]
fn targets_can_be_read_between_evaluations() -> anyhow::Result<()> {
    init_tracing_for_tests();
    let sources = InMemorySources::new();
    sources.add("//a:BUILD", r#"cc_library(name = "a")"#)?;
    sources.add("//b:BUILD", r#"cc_library(name = "b")"#)?;
    let build = Build::new(sources);

    build.exec_build_file(&label("//a:BUILD"))?;
    {
        let targets = build.targets();
        assert_eq!(1, targets.iter().count());
    }
    build.exec_build_file(&label("//b:BUILD"))?;
    assert_eq!(2, build.targets().iter().count());

    let targets = build.into_targets();
    assert!(targets.get(&label("//b:b")).is_some());
    Ok(())
}
