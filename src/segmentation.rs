//! Contains the iterator over the spans of a separated reading and the raw alignment of those spans to a word.

use std::ops::Range;

/// Span of a reading between two separators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ReadingSegment<'a> {
    /// Followed by a separator.
    Delimited(&'a str),
    /// The rest of the reading after the last separator.
    Last(&'a str),
}

impl<'a> ReadingSegment<'a> {
    /// Returns the inner string.
    pub fn inner(self) -> &'a str {
        match self {
            Self::Delimited(reading) => reading,
            Self::Last(reading) => reading,
        }
    }
}

/// Iterator over the spans of a reading delimited by a separator.
/// Always yields at least one segment, the last of which is `ReadingSegment::Last`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ReadingSegments<'a> {
    rest: Option<&'a str>,
    separator: char,
}

impl<'a> ReadingSegments<'a> {
    pub fn new(reading: &'a str, separator: char) -> Self {
        Self {
            rest: Some(reading),
            separator,
        }
    }
}

impl<'a> Iterator for ReadingSegments<'a> {
    type Item = ReadingSegment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.rest?;
        if let Some(idx) = rest.find(self.separator) {
            self.rest = Some(&rest[idx + self.separator.len_utf8()..]);
            Some(ReadingSegment::Delimited(&rest[..idx]))
        } else {
            self.rest = None;
            Some(ReadingSegment::Last(rest))
        }
    }
}

/// Splits `word` according to the separated `reading`, returning the byte range of each segment of the word
/// along with its reading.
///
/// Each span of the reading corresponds to one character of the word. An empty span between two separators
/// means the previous span also covers the next character. Once the last separator is reached, the rest of
/// the reading covers the rest of the word.
pub fn split_reading<'r>(
    word: &str,
    reading: &'r str,
    separator: char,
) -> Vec<(Range<usize>, &'r str)> {
    let mut segments: Vec<(Range<usize>, &'r str)> = vec![];
    let mut reading_segments = ReadingSegments::new(reading, separator);
    let mut chars = word.char_indices();

    while let Some((start, c)) = chars.next() {
        let Some(reading_segment) = reading_segments.next() else {
            break;
        };
        let end = start + c.len_utf8();

        match reading_segment {
            ReadingSegment::Delimited("") => {
                if let Some((previous, previous_reading)) = segments.last_mut() {
                    // the previous reading spans this character as well
                    tracing::trace!(reading = %previous_reading, "extending segment with '{c}'");
                    previous.end = end;
                } else {
                    tracing::trace!("reading starts with a separator");
                    segments.push((start..end, ""));
                }
            }
            ReadingSegment::Delimited(reading) => {
                segments.push((start..end, reading));
            }
            ReadingSegment::Last(reading) => {
                if end < word.len() {
                    tracing::trace!(reading, rest = &word[end..], "out of separators");
                }
                segments.push((start..word.len(), reading));
                return segments;
            }
        }
    }

    if let Some(excess) = reading_segments.next() {
        let excess = excess.inner();
        tracing::trace!(word, excess, "dropping reading past the end of the word");
    }
    segments
}

#[cfg(test)]
mod test {
    use super::*;

    fn prepare<'a>(word: &'a str, segments: Vec<(Range<usize>, &'a str)>) -> Vec<(&'a str, &'a str)> {
        segments
            .into_iter()
            .map(|(range, reading)| (&word[range], reading))
            .collect()
    }

    #[test]
    fn segments_reading() {
        let mut rs = ReadingSegments::new("よ.む", '.');
        assert_eq!(ReadingSegment::Delimited("よ"), rs.next().unwrap());
        assert_eq!(ReadingSegment::Last("む"), rs.next().unwrap());
        assert!(rs.next().is_none());
    }

    #[test]
    fn segments_reading_without_separator() {
        let mut rs = ReadingSegments::new("おとな", '.');
        assert_eq!(ReadingSegment::Last("おとな"), rs.next().unwrap());
        assert!(rs.next().is_none());

        let mut rs = ReadingSegments::new("", '.');
        assert_eq!(ReadingSegment::Last(""), rs.next().unwrap());
        assert!(rs.next().is_none());
    }

    #[test]
    fn segments_reading_repeated_separators() {
        let mut rs = ReadingSegments::new(".あ..い.", '.');
        assert_eq!(ReadingSegment::Delimited(""), rs.next().unwrap());
        assert_eq!(ReadingSegment::Delimited("あ"), rs.next().unwrap());
        assert_eq!(ReadingSegment::Delimited(""), rs.next().unwrap());
        assert_eq!(ReadingSegment::Delimited("い"), rs.next().unwrap());
        assert_eq!(ReadingSegment::Last(""), rs.next().unwrap());
        assert!(rs.next().is_none());
    }

    #[test]
    fn segments_reading_multibyte_separator() {
        let mut rs = ReadingSegments::new("か・ん", '・');
        assert_eq!(ReadingSegment::Delimited("か"), rs.next().unwrap());
        assert_eq!(ReadingSegment::Last("ん"), rs.next().unwrap());
    }

    #[test]
    fn splits_one_reading_per_char() {
        let word = "漢字";
        let segments = prepare(word, split_reading(word, "かん.じ", '.'));
        println!("{segments:?}");
        assert_eq!(segments, vec![("漢", "かん"), ("字", "じ")]);
    }

    #[test]
    fn merges_empty_spans_into_previous() {
        let word = "今日は";
        let segments = prepare(word, split_reading(word, "きょう..は", '.'));
        println!("{segments:?}");
        assert_eq!(segments, vec![("今日", "きょう"), ("は", "は")]);

        let word = "明後日だ";
        let segments = prepare(word, split_reading(word, "あさって...だ", '.'));
        println!("{segments:?}");
        assert_eq!(segments, vec![("明後日", "あさって"), ("だ", "だ")]);
    }

    #[test]
    fn folds_rest_of_word_into_last_span() {
        let word = "食べ物";
        let segments = prepare(word, split_reading(word, "た.べもの", '.'));
        println!("{segments:?}");
        assert_eq!(segments, vec![("食", "た"), ("べ物", "べもの")]);
    }

    #[test]
    fn leading_separator_starts_unread_segment() {
        let word = "大人";
        let segments = prepare(word, split_reading(word, ".おとな", '.'));
        println!("{segments:?}");
        assert_eq!(segments, vec![("大", ""), ("人", "おとな")]);

        let word = "大人";
        let segments = prepare(word, split_reading(word, "..おとな", '.'));
        println!("{segments:?}");
        assert_eq!(segments, vec![("大人", "")]);
    }

    #[test]
    fn drops_excess_reading() {
        let word = "読";
        let segments = prepare(word, split_reading(word, "よ.む", '.'));
        println!("{segments:?}");
        assert_eq!(segments, vec![("読", "よ")]);

        let word = "読";
        let segments = prepare(word, split_reading(word, "よ..", '.'));
        println!("{segments:?}");
        assert_eq!(segments, vec![("読", "よ")]);
    }

    #[test]
    fn empty_word() {
        assert!(split_reading("", "", '.').is_empty());
        assert!(split_reading("", "よ.む", '.').is_empty());
    }

    #[test]
    fn trailing_separator() {
        let word = "読む";
        let segments = prepare(word, split_reading(word, "よ.", '.'));
        println!("{segments:?}");
        assert_eq!(segments, vec![("読", "よ"), ("む", "")]);
    }
}
