//! JSON serialization types for listing output

use std::path::PathBuf;

use serde::Serialize;

/// One existing (package, language) directory.
#[derive(Debug, Clone, Serialize)]
pub struct SectionNode {
    pub language: String,
    pub header: String,
    pub path: PathBuf,
    pub files: Vec<String>,
}

/// A package and the sections found for it, possibly none.
#[derive(Debug, Clone, Serialize)]
pub struct PackageNode {
    pub package: String,
    pub qualified_name: String,
    pub sections: Vec<SectionNode>,
}

/// Full listing - built in memory for JSON output.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListingDocument {
    pub packages: Vec<PackageNode>,
    pub section_count: usize,
    pub file_count: usize,
}
