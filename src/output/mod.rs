//! Listing formatting and display
//!
//! - `config` - Output configuration types
//! - `utils` - Underline rules
//! - `text` - Underlined plain text, optionally colored
//! - `json` - JSON output

mod config;
mod json;
mod text;
mod utils;

pub use config::{Layout, OutputConfig};
pub use json::{JsonCollector, print_json};
pub use text::TextFormatter;
pub use utils::{FILE_RULE, HEADER_RULE, underline};
