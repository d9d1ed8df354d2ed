//! css-outpath
//!
//! Resolves where the `.css` output of each `.css.js` / `.js` source should be
//! written: beside the source, or relocated under an output directory with an
//! explicit or inferred base path stripped.

pub mod cli;
pub mod discovery;
pub mod error;
pub mod paths;

// Re-export commonly used types
pub use error::{OutpathError, OutpathResult};
pub use paths::{
    common_directory_prefix, resolve_outputs, rewrite_extension, InputOutputPair,
    PlacementOptions,
};
