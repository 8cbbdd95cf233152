//! Plain text formatter
//!
//! This module provides `TextFormatter` which writes each section as an
//! `=`-underlined header followed by `-`-underlined file names.

use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::layout::Language;
use crate::listing::{ListingOutput, ListingSummary, Section};

use super::config::{Layout, OutputConfig};
use super::utils::{FILE_RULE, HEADER_RULE, underline};

/// Text output formatter - writes sections as they are found.
/// Implements the ListingOutput trait for use with ListingWalker.
pub struct TextFormatter<W: WriteColor> {
    config: OutputConfig,
    out: W,
}

impl TextFormatter<StandardStream> {
    /// Formatter writing to stdout. `use_color` is taken as already resolved.
    pub fn stdout(config: OutputConfig) -> Self {
        let choice = if config.use_color {
            ColorChoice::Always
        } else {
            ColorChoice::Never
        };
        Self::new(config, StandardStream::stdout(choice))
    }
}

impl<W: WriteColor> TextFormatter<W> {
    pub fn new(config: OutputConfig, out: W) -> Self {
        Self { config, out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn spaced(&self) -> bool {
        self.config.layout == Layout::Spaced
    }

    /// Write `text` in `spec`, then its underline, then the spacing blank line.
    fn write_ruled(&mut self, text: &str, spec: &ColorSpec, rule: char) -> io::Result<()> {
        if self.config.use_color {
            self.out.set_color(spec)?;
        }
        write!(self.out, "{}", text)?;
        if self.config.use_color {
            self.out.reset()?;
        }
        writeln!(self.out)?;
        writeln!(self.out, "{}", underline(text, rule))?;
        if self.spaced() {
            writeln!(self.out)?;
        }
        Ok(())
    }
}

impl<W: WriteColor> ListingOutput for TextFormatter<W> {
    fn section(&mut self, section: &Section<'_>) -> io::Result<()> {
        let mut header_spec = ColorSpec::new();
        header_spec.set_fg(Some(Color::Blue)).set_bold(true);
        self.write_ruled(section.header, &header_spec, HEADER_RULE)?;

        let mut file_spec = ColorSpec::new();
        file_spec.set_fg(Some(Color::White));
        for name in section.files {
            self.write_ruled(name, &file_spec, FILE_RULE)?;
        }
        Ok(())
    }

    fn end_language(&mut self, _package: &str, _language: &Language) -> io::Result<()> {
        if self.spaced() {
            writeln!(self.out)?;
        }
        Ok(())
    }

    fn end_package(&mut self, _package: &str) -> io::Result<()> {
        if !self.spaced() {
            writeln!(self.out)?;
        }
        Ok(())
    }

    fn finish(&mut self, _summary: &ListingSummary) -> io::Result<()> {
        self.out.flush()
    }
}
