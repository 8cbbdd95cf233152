//! JSON output formatting

use std::io;

use crate::layout::SourceLayout;
use crate::listing::{
    ListingDocument, ListingOutput, ListingSummary, PackageNode, Section, SectionNode,
};

/// Collects the whole listing in memory for serialization.
pub struct JsonCollector {
    layout: SourceLayout,
    current: Vec<SectionNode>,
    document: ListingDocument,
}

impl JsonCollector {
    pub fn new(namespace: &str) -> Self {
        Self {
            layout: SourceLayout::new("", namespace),
            current: Vec::new(),
            document: ListingDocument::default(),
        }
    }

    pub fn document(&self) -> &ListingDocument {
        &self.document
    }

    pub fn into_document(self) -> ListingDocument {
        self.document
    }
}

impl ListingOutput for JsonCollector {
    fn section(&mut self, section: &Section<'_>) -> io::Result<()> {
        self.current.push(SectionNode {
            language: section.language.name().to_string(),
            header: section.header.to_string(),
            path: section.dir.to_path_buf(),
            files: section.files.to_vec(),
        });
        Ok(())
    }

    fn end_package(&mut self, package: &str) -> io::Result<()> {
        self.document.packages.push(PackageNode {
            package: package.to_string(),
            qualified_name: self.layout.qualified_name(package),
            sections: std::mem::take(&mut self.current),
        });
        Ok(())
    }

    fn finish(&mut self, summary: &ListingSummary) -> io::Result<()> {
        self.document.section_count = summary.sections;
        self.document.file_count = summary.files;
        Ok(())
    }
}

/// Print the listing as pretty-printed JSON to stdout.
pub fn print_json(document: &ListingDocument) -> io::Result<()> {
    let json = serde_json::to_string_pretty(document).map_err(io::Error::other)?;
    println!("{}", json);
    Ok(())
}
