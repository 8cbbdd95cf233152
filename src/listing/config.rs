//! Configuration for the listing pass

use crate::layout::{DEFAULT_LANGUAGES, DEFAULT_NAMESPACE, DEFAULT_PACKAGES, Language};

/// Which packages and languages to list, and under which namespace.
#[derive(Debug, Clone)]
pub struct ListingConfig {
    /// Package names, in output order
    pub packages: Vec<String>,
    /// Languages checked for each package, in output order
    pub languages: Vec<Language>,
    /// Dotted namespace, e.g. `com.dnikulin.vijil`
    pub namespace: String,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            packages: DEFAULT_PACKAGES.iter().map(|p| p.to_string()).collect(),
            languages: DEFAULT_LANGUAGES.iter().map(|l| Language::new(*l)).collect(),
            namespace: DEFAULT_NAMESPACE.to_string(),
        }
    }
}
