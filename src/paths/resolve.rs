//! Mapping input paths to output paths

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use super::common::common_directory_prefix;
use super::config::PlacementOptions;
use super::extension::{rewrite_extension, split_filename};
use super::normalize::{normalize_base, normalize_directory};

/// One resolved input and the path its output should be written to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputOutputPair {
    pub input_path: String,
    pub output_path: String,
}

impl InputOutputPair {
    pub fn new(input_path: impl Into<String>, output_path: impl Into<String>) -> Self {
        Self {
            input_path: input_path.into(),
            output_path: output_path.into(),
        }
    }
}

/// Placement resolved once per batch
#[derive(Debug, Clone, PartialEq, Eq)]
enum Placement {
    /// Next to each input
    InPlace,
    /// Under `outdir`, with `base` stripped from each input
    Relocate { outdir: String, base: String },
}

impl Placement {
    fn plan<S: AsRef<str>>(inputs: &[S], options: &PlacementOptions) -> Self {
        let Some(outdir) = options.outdir.as_deref().and_then(normalize_directory) else {
            debug!("no output directory, placing outputs beside their inputs");
            return Placement::InPlace;
        };

        let base = match options.explicit_base() {
            Some(base) => {
                let base = normalize_base(base);
                debug!("using output base '{}'", base);
                base
            }
            None => {
                let base = common_directory_prefix(inputs);
                debug!(
                    "inferred output base '{}' from {} inputs",
                    base,
                    inputs.len()
                );
                base
            }
        };

        Placement::Relocate { outdir, base }
    }

    fn output_for(&self, input: &str) -> String {
        match self {
            Placement::InPlace => rewrite_extension(input),
            Placement::Relocate { outdir, base } => {
                let remainder = strip_base(input, base).unwrap_or_else(|| {
                    debug!("'{}' is outside output base '{}', keeping full path", input, base);
                    input
                });
                join_output(outdir, &rewrite_extension(remainder))
            }
        }
    }
}

/// Remove `base` from the front of `input` when the input text starts with it.
///
/// `base` is either empty or ends in `/`, so a match always falls on a
/// segment boundary. The remainder is kept byte for byte and must still hold
/// a filename, otherwise `None` is returned.
fn strip_base<'a>(input: &'a str, base: &str) -> Option<&'a str> {
    input
        .strip_prefix(base)
        .filter(|rest| !split_filename(rest).1.is_empty())
}

fn join_output(outdir: &str, remainder: &str) -> String {
    let remainder = remainder.trim_start_matches('/');
    if outdir.ends_with('/') {
        format!("{outdir}{remainder}")
    } else {
        format!("{outdir}/{remainder}")
    }
}

/// Resolve the output path of every input.
///
/// Returns one pair per input, in input order. With no output directory each
/// output sits beside its input. Otherwise each input has the output base
/// (explicit, or the batch's common directory prefix) stripped and is
/// relocated under the output directory. An input outside the base keeps its
/// full path under the output directory instead of failing.
///
/// ```
/// use css_outpath::{resolve_outputs, PlacementOptions};
///
/// let options = PlacementOptions::new()
///     .with_outdir("dist/styles")
///     .with_outbase("./src/skin");
/// let pairs = resolve_outputs(&["src/skin/css/styles.css.js"], &options);
/// assert_eq!(pairs[0].output_path, "dist/styles/css/styles.css");
/// ```
pub fn resolve_outputs<S: AsRef<str>>(
    inputs: &[S],
    options: &PlacementOptions,
) -> Vec<InputOutputPair> {
    let placement = Placement::plan(inputs, options);

    inputs
        .iter()
        .map(|input| {
            let input = input.as_ref();
            let output = placement.output_for(input);
            trace!("{} -> {}", input, output);
            InputOutputPair::new(input, output)
        })
        .collect()
}
