//! Package and language enumerations plus the source directory convention
//!
//! A package's sources for a language live under
//! `src/main/<language>/<namespace path>/<package>`, where the language
//! segment is the lowercase language name and the namespace path is the
//! dotted namespace with `.` replaced by `/`.

use std::path::PathBuf;

/// Packages listed by default, in output order.
pub const DEFAULT_PACKAGES: &[&str] = &[
    "file", "index", "lexer", "model", "parse", "render", "report", "result", "scripts", "store",
    "text", "tools", "traits",
];

/// Languages checked for every package, in output order.
pub const DEFAULT_LANGUAGES: &[&str] = &["Java", "Scala"];

/// Dotted namespace prefixed to every package name.
pub const DEFAULT_NAMESPACE: &str = "com.dnikulin.vijil";

/// A source language, identified by its display name (e.g. `Java`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Language {
    name: String,
}

impl Language {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Display name, as used in section headers.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Lowercase name, used both as directory segment and file extension.
    pub fn lower(&self) -> String {
        self.name.to_lowercase()
    }

    /// Glob matching source file names for this language, e.g. `*.java`.
    pub fn extension_pattern(&self) -> String {
        format!("*.{}", glob::Pattern::escape(&self.lower()))
    }
}

/// Maps (language, package) pairs to directories and header text.
#[derive(Debug, Clone)]
pub struct SourceLayout {
    root: PathBuf,
    namespace: String,
}

impl SourceLayout {
    pub fn new(root: impl Into<PathBuf>, namespace: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            namespace: namespace.into(),
        }
    }

    /// Directory holding `package`'s sources for `language`.
    pub fn source_dir(&self, language: &Language, package: &str) -> PathBuf {
        let mut dir = self.root.join("src").join("main").join(language.lower());
        for segment in self.namespace.split('.').filter(|s| !s.is_empty()) {
            dir.push(segment);
        }
        dir.push(package);
        dir
    }

    /// `<namespace>.<package>`, or just the package with an empty namespace.
    pub fn qualified_name(&self, package: &str) -> String {
        if self.namespace.is_empty() {
            package.to_string()
        } else {
            format!("{}.{}", self.namespace, package)
        }
    }

    /// Section header text: `<qualified name> (<Language>)`.
    pub fn section_header(&self, package: &str, language: &Language) -> String {
        format!("{} ({})", self.qualified_name(package), language.name())
    }
}
