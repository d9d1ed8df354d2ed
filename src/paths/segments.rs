//! Segment view over forward-slash paths

/// A forward-slash path split into its segments.
///
/// Empty segments (from leading, trailing or doubled slashes) are dropped.
/// `.` and `..` are kept verbatim; collapsing them is the job of
/// [`crate::paths::normalize`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segments<'a> {
    absolute: bool,
    parts: Vec<&'a str>,
}

impl<'a> Segments<'a> {
    /// Tokenize a path on `/`
    pub fn parse(path: &'a str) -> Self {
        let parts = path
            .split('/')
            .filter(|part| !part.is_empty())
            .collect();

        Self {
            absolute: path.starts_with('/'),
            parts,
        }
    }

    /// Whether the path started at the root
    pub fn is_absolute(&self) -> bool {
        self.absolute
    }

    /// All segments, filename included
    pub fn parts(&self) -> &[&'a str] {
        &self.parts
    }

    /// Every segment except the trailing filename.
    pub fn directories(&self) -> &[&'a str] {
        match self.parts.split_last() {
            Some((_, dirs)) => dirs,
            None => &[],
        }
    }

    /// Number of leading directory segments shared with `other`.
    ///
    /// Segments are compared whole, so `css` never matches `cssx`.
    pub fn shared_directories(&self, other: &Segments<'_>) -> usize {
        self.directories()
            .iter()
            .zip(other.directories())
            .take_while(|(a, b)| a == b)
            .count()
    }
}

/// Render directory segments as a prefix string with one trailing `/`.
///
/// No segments renders as `""` for relative paths and `"/"` for absolute ones.
pub(crate) fn directory_prefix(absolute: bool, dirs: &[&str]) -> String {
    let mut out = String::new();
    if absolute {
        out.push('/');
    }
    for dir in dirs {
        out.push_str(dir);
        out.push('/');
    }
    out
}
