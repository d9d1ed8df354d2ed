//! Normalization of the output directory and output base options
//!
//! Both functions are purely string based and never consult the host
//! platform's path rules. Their handling of the degenerate inputs (`""`, `"."`,
//! `"./"`) is part of the placement contract:
//!
//! | input                   | `normalize_directory` | `normalize_base` |
//! |-------------------------|-----------------------|------------------|
//! | `""`                    | `None`                | `""`             |
//! | `"."`, `"./"`           | `Some(".")`           | `""`             |
//! | `"./output/../output/"` | `Some("output")`      | `"output/"`      |
//! | `"./src/skin"`          | `Some("src/skin")`    | `"src/skin/"`    |
//! | `"/"`                   | `Some("/")`           | `"/"`            |

use super::segments::{directory_prefix, Segments};

/// Collapse `.`, `..` and redundant slashes.
///
/// A relative path keeps the `..` segments that climb above its start; an
/// absolute path cannot climb above the root.
fn collapse(path: &str) -> (bool, Vec<&str>) {
    let segments = Segments::parse(path);
    let absolute = segments.is_absolute();
    let mut out: Vec<&str> = Vec::with_capacity(segments.parts().len());

    for &part in segments.parts() {
        if part == "." {
            continue;
        }
        if part != ".." {
            out.push(part);
            continue;
        }
        match out.last().copied() {
            Some(last) if last != ".." => {
                out.pop();
            }
            _ if absolute => {}
            _ => out.push(".."),
        }
    }

    (absolute, out)
}

/// Normalize an output directory, without a trailing slash.
///
/// Returns `None` for the empty string, which selects in-place placement.
/// A directory that collapses to nothing becomes `"."` so that joining it
/// with a filename keeps the leading `./`.
pub fn normalize_directory(dir: &str) -> Option<String> {
    if dir.is_empty() {
        return None;
    }

    let (absolute, parts) = collapse(dir);
    let joined = parts.join("/");

    Some(match (absolute, joined.is_empty()) {
        (true, _) => format!("/{joined}"),
        (false, true) => ".".to_string(),
        (false, false) => joined,
    })
}

/// Normalize an output base into a strippable prefix.
///
/// The result has no leading `./` and exactly one trailing `/`, unless it is
/// empty.
pub fn normalize_base(base: &str) -> String {
    let (absolute, parts) = collapse(base);
    directory_prefix(absolute, &parts)
}
