//! seedmd - list package source files as underlined sections to seed a markdown document

pub mod layout;
pub mod listing;
pub mod output;

#[cfg(feature = "test-utils")]
pub mod test_utils;

pub use layout::{DEFAULT_LANGUAGES, DEFAULT_NAMESPACE, DEFAULT_PACKAGES, Language, SourceLayout};
pub use listing::{
    DirListing, ListingConfig, ListingOutput, ListingSummary, ListingWalker, Section, probe_dir,
};
pub use output::{JsonCollector, Layout, OutputConfig, TextFormatter, print_json};
