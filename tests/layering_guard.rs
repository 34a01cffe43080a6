//! Layering guardrails for the workspace crates.
//!
//! - `nepl_core` is the bottom layer and must not depend on `nepl_syntax` or the root crate.
//! - The library crates must not pull in binary-only concerns (`clap`, `tracing-subscriber`).
//!
//! These tests scan the `[dependencies]` tables of the member manifests.

/// Crate names listed in the `[dependencies]` table of a manifest.
fn dependencies(manifest: &str) -> Vec<String> {
    let mut in_dependencies = false;
    let mut names = Vec::new();

    for raw_line in manifest.lines() {
        let line = raw_line.trim();
        // Track when we enter/exit the `[dependencies]` table.
        if line.starts_with('[') {
            in_dependencies = line == "[dependencies]";
            continue;
        }
        if !in_dependencies || line.is_empty() || line.starts_with('#') {
            continue;
        }

        // Strip inline comments for robustness.
        let line_no_comment = line.split('#').next().unwrap_or("").trim();
        if let Some((name, _)) = line_no_comment.split_once('=') {
            names.push(name.trim().to_string());
        }
    }
    names
}

#[test]
fn core_is_the_bottom_layer() {
    let deps = dependencies(include_str!("../crates/nepl_core/Cargo.toml"));
    for forbidden in ["nepl_syntax", "nepl"] {
        assert!(
            !deps.iter().any(|d| d == forbidden),
            "`{forbidden}` must not appear in nepl_core's [dependencies]"
        );
    }
}

#[test]
fn libraries_do_not_depend_on_binary_concerns() {
    for manifest in [
        include_str!("../crates/nepl_core/Cargo.toml"),
        include_str!("../crates/nepl_syntax/Cargo.toml"),
    ] {
        let deps = dependencies(manifest);
        for forbidden in ["clap", "tracing-subscriber"] {
            assert!(!deps.iter().any(|d| d == forbidden), "`{forbidden}` is for the binary only");
        }
    }
}

#[test]
fn syntax_builds_on_core() {
    let deps = dependencies(include_str!("../crates/nepl_syntax/Cargo.toml"));
    assert!(deps.iter().any(|d| d == "nepl_core"));
}
