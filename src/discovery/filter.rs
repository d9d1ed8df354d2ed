use std::path::Path;

use crate::paths::extension::SOURCE_EXTENSION;

/// Return true if the file name ends in `.js` (which covers `.css.js`)
pub fn is_source_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.len() > SOURCE_EXTENSION.len() && name.ends_with(SOURCE_EXTENSION))
}
