//! Integration tests for output path resolution

use css_outpath::{common_directory_prefix, resolve_outputs, InputOutputPair, PlacementOptions};
use pretty_assertions::assert_eq;

fn pairs(expected: &[(&str, &str)]) -> Vec<InputOutputPair> {
    expected
        .iter()
        .map(|(input, output)| InputOutputPair::new(*input, *output))
        .collect()
}

// ============================================================================
// Common directory prefix
// ============================================================================

#[test]
fn test_common_prefix_cases() {
    let cases: Vec<(Vec<&str>, &str)> = vec![
        (
            vec![
                "__tests/css/styles/test.css.js",
                "__tests/css/styles/sub/test2.css.js",
            ],
            "__tests/css/styles/",
        ),
        (vec!["some/path/foo.css.js", "other/path/foo.css.js"], ""),
        (
            vec![
                "__tests/css/styles/foo/test.css.js",
                "__tests/css/sub/foo/test2.css.js",
            ],
            "__tests/css/",
        ),
    ];

    for (input, expected) in cases {
        assert_eq!(common_directory_prefix(&input), expected, "input: {:?}", input);
    }
}

#[test]
fn test_common_prefix_is_order_independent() {
    let mut paths = vec![
        "site/css/a/one.css.js",
        "site/css/two.js",
        "site/css/a/b/three.css.js",
        "site/css/four",
    ];
    let expected = common_directory_prefix(&paths);
    assert_eq!(expected, "site/css/");

    for _ in 0..paths.len() {
        paths.rotate_left(1);
        assert_eq!(common_directory_prefix(&paths), expected);
    }
    paths.reverse();
    assert_eq!(common_directory_prefix(&paths), expected);
}

// ============================================================================
// In-place placement
// ============================================================================

#[test]
fn test_in_place_placement() {
    let input = [
        "__tests/css/styles/test.css.js",
        "__tests/css/styles/sub/test2.css.js",
        "__tests/css/styles/sub/test3.js",
        "__tests/css/styles/sub/test4",
    ];
    let expected = pairs(&[
        ("__tests/css/styles/test.css.js", "__tests/css/styles/test.css"),
        ("__tests/css/styles/sub/test2.css.js", "__tests/css/styles/sub/test2.css"),
        ("__tests/css/styles/sub/test3.js", "__tests/css/styles/sub/test3.css"),
        ("__tests/css/styles/sub/test4", "__tests/css/styles/sub/test4.css"),
    ]);

    for options in [PlacementOptions::new(), PlacementOptions::new().with_outdir("")] {
        assert_eq!(resolve_outputs(&input, &options), expected);
    }
}

#[test]
fn test_in_place_never_changes_directory() {
    let input = ["a/b/c.css.js", "x.js", "./rel/../odd//name", "/abs/path/file.css"];
    let options = PlacementOptions::new().with_outbase("a");

    for pair in resolve_outputs(&input, &options) {
        let input_dir = &pair.input_path[..pair.input_path.rfind('/').map_or(0, |i| i + 1)];
        assert!(pair.output_path.starts_with(input_dir), "{:?}", pair);
        assert!(pair.output_path.ends_with(".css"), "{:?}", pair);
        assert!(!pair.output_path[input_dir.len()..].contains('/'), "{:?}", pair);
    }
}

// ============================================================================
// Output directory with inferred base
// ============================================================================

#[test]
fn test_outdir_spellings_normalize_alike() {
    let input = ["test2/css/styles/test.css.js", "test2/css/styles/sub/test2.css.js"];
    let expected = pairs(&[
        ("test2/css/styles/test.css.js", "output/test.css"),
        ("test2/css/styles/sub/test2.css.js", "output/sub/test2.css"),
    ]);

    for outdir in ["output", "output/", "./output/../output/"] {
        let options = PlacementOptions::new().with_outdir(outdir);
        assert_eq!(resolve_outputs(&input, &options), expected, "outdir: {}", outdir);
    }
}

#[test]
fn test_current_directory_outdir_keeps_dot_slash() {
    let input = ["test3/css/styles/test.css.js", "test3/css/styles/sub/test2.css.js"];
    let expected = pairs(&[
        ("test3/css/styles/test.css.js", "./test.css"),
        ("test3/css/styles/sub/test2.css.js", "./sub/test2.css"),
    ]);

    for outdir in ["./", "."] {
        let options = PlacementOptions::new().with_outdir(outdir);
        assert_eq!(resolve_outputs(&input, &options), expected, "outdir: {}", outdir);
    }
}

#[test]
fn test_flatten_under_outdir() {
    let input = [
        "src/css/styles.css.js",
        "src/css/resets.js",
        "src/css/component/buttons.css.js",
        "src/css/component/formFields.js",
    ];
    let expected = pairs(&[
        ("src/css/styles.css.js", "dist/styles/styles.css"),
        ("src/css/resets.js", "dist/styles/resets.css"),
        ("src/css/component/buttons.css.js", "dist/styles/component/buttons.css"),
        ("src/css/component/formFields.js", "dist/styles/component/formFields.css"),
    ]);

    let options = PlacementOptions::new().with_outdir("dist/styles");
    assert_eq!(resolve_outputs(&input, &options), expected);
}

#[test]
fn test_no_shared_directory_keeps_full_paths() {
    let options = PlacementOptions::new().with_outdir("out");
    let expected = pairs(&[("a/b/x.js", "out/a/b/x.css"), ("c/d/y.js", "out/c/d/y.css")]);
    assert_eq!(resolve_outputs(&["a/b/x.js", "c/d/y.js"], &options), expected);
}

#[test]
fn test_single_input_lands_directly_in_outdir() {
    let options = PlacementOptions::new().with_outdir("out");
    let result = resolve_outputs(&["deep/nested/dir/only.css.js"], &options);
    assert_eq!(result, pairs(&[("deep/nested/dir/only.css.js", "out/only.css")]));
}

// ============================================================================
// Explicit output base
// ============================================================================

#[test]
fn test_explicit_outbase() {
    let input = [
        "src/skin/css/styles.css.js",
        "src/skin/css/resets.js",
        "src/skin/css/component/buttons.css.js",
        "src/skin/css/component/formFields.js",
    ];
    let expected = pairs(&[
        ("src/skin/css/styles.css.js", "dist/styles/css/styles.css"),
        ("src/skin/css/resets.js", "dist/styles/css/resets.css"),
        ("src/skin/css/component/buttons.css.js", "dist/styles/css/component/buttons.css"),
        ("src/skin/css/component/formFields.js", "dist/styles/css/component/formFields.css"),
    ]);

    for outbase in ["./src/skin", "src/skin", "src/skin/", "src/skin/../skin"] {
        let options = PlacementOptions::new()
            .with_outdir("dist/styles")
            .with_outbase(outbase);
        assert_eq!(resolve_outputs(&input, &options), expected, "outbase: {}", outbase);
    }
}

#[test]
fn test_explicit_outbase_overrides_inferred_prefix() {
    let input = ["src/skin/css/a.css.js", "src/skin/css/b.css.js"];

    let inferred = resolve_outputs(&input, &PlacementOptions::new().with_outdir("dist"));
    assert_eq!(inferred[0].output_path, "dist/a.css");

    let explicit = resolve_outputs(
        &input,
        &PlacementOptions::new().with_outdir("dist").with_outbase("src"),
    );
    assert_eq!(explicit[0].output_path, "dist/skin/css/a.css");
    assert_eq!(explicit[1].output_path, "dist/skin/css/b.css");
}

#[test]
fn test_inputs_outside_outbase_pass_through() {
    let options = PlacementOptions::new().with_outdir("dist").with_outbase("src/skin");
    let result = resolve_outputs(
        &["src/skin/a.js", "lib/b.css.js", "src/skinny/c.js", "./src/skin/d.js"],
        &options,
    );

    assert_eq!(
        result,
        pairs(&[
            ("src/skin/a.js", "dist/a.css"),
            ("lib/b.css.js", "dist/lib/b.css"),
            ("src/skinny/c.js", "dist/src/skinny/c.css"),
            ("./src/skin/d.js", "dist/./src/skin/d.css"),
        ])
    );
}

#[test]
fn test_remainder_subdirectories_kept_verbatim() {
    let options = PlacementOptions::new().with_outdir("dist").with_outbase("src");
    let result = resolve_outputs(&["src/a//b/x.js"], &options);
    assert_eq!(result, pairs(&[("src/a//b/x.js", "dist/a//b/x.css")]));
}

#[test]
fn test_empty_outbase_falls_back_to_inference() {
    let input = ["src/css/a.js", "src/css/b.js"];
    let options = PlacementOptions::new().with_outdir("out").with_outbase("");
    let result = resolve_outputs(&input, &options);
    assert_eq!(result[0].output_path, "out/a.css");
}

// ============================================================================
// Batch shape
// ============================================================================

#[test]
fn test_order_and_length_preserved_with_duplicates() {
    let input = ["b/z.js", "a/y.js", "b/z.js", "a/x.css.js"];
    let options = PlacementOptions::new().with_outdir("out");
    let result = resolve_outputs(&input, &options);

    assert_eq!(result.len(), input.len());
    for (pair, original) in result.iter().zip(input.iter()) {
        assert_eq!(&pair.input_path, original);
    }
    assert_eq!(result[0], result[2]);
}

#[test]
fn test_empty_input_yields_empty_output() {
    let empty: Vec<String> = Vec::new();
    assert!(resolve_outputs(&empty, &PlacementOptions::new()).is_empty());
    assert!(resolve_outputs(&empty, &PlacementOptions::new().with_outdir("out")).is_empty());
}

#[test]
fn test_extension_rewrite_never_doubles_css() {
    let input = ["styles/theme.css", "styles/theme.css.js", "styles/plain"];
    let result = resolve_outputs(&input, &PlacementOptions::new().with_outdir("out"));

    for pair in &result {
        assert!(!pair.output_path.ends_with(".css.css"), "{:?}", pair);
    }
    assert_eq!(result[0].output_path, "out/theme.css");
    assert_eq!(result[1].output_path, "out/theme.css");
    assert_eq!(result[2].output_path, "out/plain.css");
}
