#![doc = include_str!("../README.md")]

mod errors;
mod furigana;
mod kana;
mod record;
mod segmentation;
mod utils;

pub use self::errors::{FuriganaError, Result};
pub use self::furigana::{Brackets, Furigana, Token};
pub use self::kana::KanaNormalizer;
pub use self::record::Record;
pub use self::utils::common_prefix_len;

/// Returns `text` with katakana converted to hiragana, using the shared [`KanaNormalizer`].
pub fn normalize(text: &str) -> String {
    KanaNormalizer::shared().normalize(text)
}

/// Maps the segments of `written` to the spans of `reading`, which are separated by `.`.
/// See [`Aligner::tokenize`].
pub fn tokenize<'a>(written: &'a str, reading: &str) -> Furigana<'a> {
    Aligner::new().tokenize(written, reading)
}

/// Tokenizes each `(written, reading)` pair of an already segmented sentence.
/// See [`Aligner::tokenize_words`].
pub fn tokenize_words<'a, I, R>(words: I) -> Furigana<'a>
where
    I: IntoIterator<Item = (&'a str, R)>,
    R: AsRef<str>,
{
    Aligner::new().tokenize_words(words)
}

/// Aligns words with their separated readings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Aligner<'n> {
    normalizer: &'n KanaNormalizer,
    separator: char,
}

impl Aligner<'static> {
    /// Creates an aligner using the shared normalizer and `.` as the separator.
    pub fn new() -> Self {
        Self::with_normalizer(KanaNormalizer::shared())
    }
}

impl Default for Aligner<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'n> Aligner<'n> {
    pub const DEFAULT_SEPARATOR: char = '.';

    /// Creates an aligner using `normalizer` and `.` as the separator.
    pub fn with_normalizer(normalizer: &'n KanaNormalizer) -> Self {
        Self {
            normalizer,
            separator: Self::DEFAULT_SEPARATOR,
        }
    }

    /// Uses `separator` to delimit the spans of the reading instead of `.`.
    /// Whitespace and katakana are rejected since they would not survive the preparation of the reading.
    pub fn with_separator(self, separator: char) -> Result<Self> {
        if utils::is_c_space(separator) || self.normalizer.convert_char(separator) != separator {
            return Err(FuriganaError::InvalidSeparator(separator));
        }
        Ok(Self { separator, ..self })
    }

    pub fn separator(&self) -> char {
        self.separator
    }

    /// Maps the segments of `written` to the spans of `reading`.
    ///
    /// Each span of the reading belongs to one character of `written`, so `よ.む` gives `読む` the segments
    /// `読` (よ) and `む`. An empty span lets the previous reading cover one more character, so `きょう..は`
    /// gives `今日は` the segments `今日` (きょう) and `は`. The reading after the last separator covers
    /// all the remaining characters.
    ///
    /// Whitespace in the reading is ignored and katakana are converted to hiragana. Segments whose reading
    /// is the same as the segment itself get an empty reading. Readings that don't fit the word are never
    /// an error: extra characters go to the last segment and extra readings are dropped.
    pub fn tokenize<'a>(&self, written: &'a str, reading: &str) -> Furigana<'a> {
        let reading = utils::remove_c_spaces(reading);
        let reading = self.normalizer.normalize(&reading);

        segmentation::split_reading(written, &reading, self.separator)
            .into_iter()
            .map(|(range, reading)| {
                let written = &written[range];
                let reading = if self.normalizer.normalize(written) == reading {
                    // no need for furigana here
                    String::new()
                } else {
                    reading.to_string()
                };
                Token { written, reading }
            })
            .collect()
    }

    /// Tokenizes each `(written, reading)` pair of an already segmented sentence and joins the results.
    /// Words with an empty reading, such as numbers, become a single token without furigana.
    pub fn tokenize_words<'a, I, R>(&self, words: I) -> Furigana<'a>
    where
        I: IntoIterator<Item = (&'a str, R)>,
        R: AsRef<str>,
    {
        let mut furigana = Furigana::default();
        for (written, reading) in words {
            furigana.extend(self.tokenize(written, reading.as_ref()));
        }
        furigana
    }
}
