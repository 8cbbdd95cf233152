//! Package source discovery
//!
//! This module walks every (package, language) pair and reports which
//! package directories exist and which source files they hold.
//!
//! - `probe` - tri-state directory probe (missing, empty, entries)
//! - `walker` - the nested package/language pass and its `ListingOutput` sink
//! - `json_types` - serializable listing for JSON output

mod config;
mod json_types;
mod probe;
mod walker;

pub use config::ListingConfig;
pub use json_types::{ListingDocument, PackageNode, SectionNode};
pub use probe::{DirListing, probe_dir};
pub use walker::{ListingOutput, ListingSummary, ListingWalker, Section};
