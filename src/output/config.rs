//! Output configuration types

/// Blank-line spacing between rendered lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Layout {
    /// Sections back to back, one blank line after each package.
    #[default]
    Compact,
    /// A blank line after every underline and after every language.
    Spaced,
}

/// Configuration for text output.
#[derive(Debug, Clone, Default)]
pub struct OutputConfig {
    pub use_color: bool,
    pub layout: Layout,
}
