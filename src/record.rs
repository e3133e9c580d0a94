//! Line-based records of words and their readings.

use crate::errors::{FuriganaError, Result};

/// A word and its separated reading, such as `読む	よ.む`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Record<'a> {
    pub written: &'a str,
    pub reading: &'a str,
}

impl<'a> Record<'a> {
    /// Parses a `written<TAB>reading` line. `line_number` is only used for the error.
    /// Returns `None` for blank lines and `#` comments.
    pub fn parse(line: &'a str, line_number: usize) -> Result<Option<Self>> {
        let line = line.trim_end_matches(['\r', '\n']);
        if line.trim().is_empty() || line.starts_with('#') {
            return Ok(None);
        }
        let (written, reading) = line
            .split_once('\t')
            .ok_or(FuriganaError::MissingReading { line: line_number })?;
        Ok(Some(Self { written, reading }))
    }
}
