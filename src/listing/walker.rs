//! ListingWalker - the package/language pass

use std::io;
use std::path::Path;

use glob::Pattern;

use crate::layout::{Language, SourceLayout};

use super::config::ListingConfig;
use super::probe::probe_dir;

/// One existing package directory, ready to be rendered.
#[derive(Debug, Clone, Copy)]
pub struct Section<'a> {
    pub package: &'a str,
    pub language: &'a Language,
    /// `<qualified name> (<Language>)`
    pub header: &'a str,
    pub dir: &'a Path,
    /// Sorted base names of matching files
    pub files: &'a [String],
}

/// Totals for a completed walk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListingSummary {
    pub packages: usize,
    pub sections: usize,
    pub files: usize,
}

/// Callback for streaming output - receives each section as it is found.
pub trait ListingOutput {
    /// Called for every (package, language) whose directory exists.
    fn section(&mut self, section: &Section<'_>) -> io::Result<()>;

    /// Called after each language of a package, whether or not its directory exists.
    fn end_language(&mut self, _package: &str, _language: &Language) -> io::Result<()> {
        Ok(())
    }

    /// Called once per package after all of its languages.
    fn end_package(&mut self, package: &str) -> io::Result<()>;

    fn finish(&mut self, _summary: &ListingSummary) -> io::Result<()> {
        Ok(())
    }
}

/// Walks packages (outer) and languages (inner) in configured order.
pub struct ListingWalker {
    config: ListingConfig,
}

impl ListingWalker {
    pub fn new(config: ListingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ListingConfig {
        &self.config
    }

    /// Walk `root` and stream sections to `out`.
    ///
    /// Stops at the first filesystem error other than a missing directory.
    pub fn walk<O: ListingOutput>(&self, root: &Path, out: &mut O) -> io::Result<ListingSummary> {
        let layout = SourceLayout::new(root, self.config.namespace.as_str());
        let patterns = self
            .config
            .languages
            .iter()
            .map(|lang| {
                Pattern::new(&lang.extension_pattern())
                    .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))
            })
            .collect::<io::Result<Vec<_>>>()?;

        let mut summary = ListingSummary::default();

        for package in &self.config.packages {
            for (language, pattern) in self.config.languages.iter().zip(&patterns) {
                let dir = layout.source_dir(language, package);
                let listing = probe_dir(&dir, pattern).map_err(|e| with_path(&dir, e))?;

                if listing.exists() {
                    let header = layout.section_header(package, language);
                    out.section(&Section {
                        package,
                        language,
                        header: &header,
                        dir: &dir,
                        files: listing.files(),
                    })?;
                    summary.sections += 1;
                    summary.files += listing.files().len();
                }

                out.end_language(package, language)?;
            }

            out.end_package(package)?;
            summary.packages += 1;
        }

        out.finish(&summary)?;
        Ok(summary)
    }
}

fn with_path(path: &Path, err: io::Error) -> io::Error {
    io::Error::new(err.kind(), format!("cannot access '{}': {}", path.display(), err))
}
