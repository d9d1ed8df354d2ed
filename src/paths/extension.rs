//! Output extension rewrite

/// Suffix stripped from source filenames
pub const SOURCE_EXTENSION: &str = ".js";

/// Extension every output filename ends with
pub const OUTPUT_EXTENSION: &str = ".css";

/// Split a path into its directory part (trailing `/` included) and filename.
pub fn split_filename(path: &str) -> (&str, &str) {
    match path.rfind('/') {
        Some(idx) => path.split_at(idx + 1),
        None => ("", path),
    }
}

/// Rewrite a bare filename: drop a trailing `.js`, then make sure it ends in `.css`.
pub fn rewrite_filename(name: &str) -> String {
    let stem = name.strip_suffix(SOURCE_EXTENSION).unwrap_or(name);
    if stem.ends_with(OUTPUT_EXTENSION) {
        stem.to_string()
    } else {
        format!("{stem}{OUTPUT_EXTENSION}")
    }
}

/// Rewrite the filename component of `path`, leaving its directories as they are.
///
/// ```
/// use css_outpath::rewrite_extension;
///
/// assert_eq!(rewrite_extension("css/styles.css.js"), "css/styles.css");
/// assert_eq!(rewrite_extension("css/resets.js"), "css/resets.css");
/// assert_eq!(rewrite_extension("css/plain"), "css/plain.css");
/// ```
pub fn rewrite_extension(path: &str) -> String {
    let (dir, name) = split_filename(path);
    let mut out = String::with_capacity(path.len() + OUTPUT_EXTENSION.len());
    out.push_str(dir);
    out.push_str(&rewrite_filename(name));
    out
}
