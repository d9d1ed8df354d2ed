//! Output path resolution
//!
//! Pure string computations that turn a batch of `.css.js` / `.js` source
//! paths into `.css` output paths. Nothing in this module touches the
//! filesystem.

pub mod common;
pub mod config;
pub mod extension;
pub mod normalize;
pub mod resolve;
pub mod segments;

pub use common::common_directory_prefix;
pub use config::PlacementOptions;
pub use extension::{rewrite_extension, rewrite_filename};
pub use normalize::{normalize_base, normalize_directory};
pub use resolve::{resolve_outputs, InputOutputPair};
pub use segments::Segments;
