//! Longest shared directory prefix across a batch of paths

use super::segments::{directory_prefix, Segments};

/// Compute the longest run of leading directory segments shared by every path.
///
/// The filename segment of each path never takes part. The result carries a
/// single trailing `/` (`"a/b/"`), or is `""` when nothing is shared, when a
/// path has no directory at all, or when `paths` is empty.
///
/// Absolute paths keep their root: a batch of absolute paths yields a prefix
/// starting with `/` (just `"/"` when only the root is shared). A batch mixing
/// absolute and relative paths shares nothing.
///
/// ```
/// use css_outpath::common_directory_prefix;
///
/// let prefix = common_directory_prefix(&[
///     "__tests/css/styles/test.css.js",
///     "__tests/css/styles/sub/test2.css.js",
/// ]);
/// assert_eq!(prefix, "__tests/css/styles/");
/// ```
pub fn common_directory_prefix<S: AsRef<str>>(paths: &[S]) -> String {
    let mut segments = paths.iter().map(|path| Segments::parse(path.as_ref()));
    let Some(first) = segments.next() else {
        return String::new();
    };

    let absolute = first.is_absolute();
    let mut shared = first.directories().len();

    for other in segments {
        if other.is_absolute() != absolute {
            return String::new();
        }
        shared = shared.min(first.shared_directories(&other));
        if shared == 0 && !absolute {
            break;
        }
    }

    directory_prefix(absolute, &first.directories()[..shared])
}
