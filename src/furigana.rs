use std::fmt::Display;

/// A segment of a word along with its reading.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Token<'a> {
    /// A segment of the original word.
    pub written: &'a str,
    /// The reading of the segment in hiragana. Empty when the segment is kana and needs no furigana.
    pub reading: String,
}

impl Token<'_> {
    /// The furigana corresponding to the segment, if any.
    pub fn furigana(&self) -> Option<&str> {
        if self.reading.is_empty() {
            None
        } else {
            Some(&self.reading)
        }
    }
}

/// The segments of a word or a sentence with their readings.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Furigana<'a> {
    pub tokens: Vec<Token<'a>>,
}

impl<'a> Furigana<'a> {
    pub fn iter(&self) -> std::slice::Iter<'_, Token<'a>> {
        self.tokens.iter()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Concatenates the segments back into the original text.
    pub fn written(&self) -> String {
        self.tokens.iter().map(|t| t.written).collect()
    }

    /// Converts the tokens into owned `(written, reading)` pairs.
    pub fn into_pairs(self) -> Vec<(String, String)> {
        self.tokens
            .into_iter()
            .map(|t| (t.written.to_string(), t.reading))
            .collect()
    }

    /// Displays the text with its furigana in brackets, such as `読[よ]む`.
    /// An annotated segment is preceded by a space unless it starts the text, which is the notation used by Anki.
    pub fn brackets(&self) -> Brackets<'_, 'a> {
        Brackets { furigana: self }
    }

    pub(crate) fn extend(&mut self, other: Furigana<'a>) {
        self.tokens.extend(other.tokens);
    }
}

impl<'a> IntoIterator for Furigana<'a> {
    type Item = Token<'a>;
    type IntoIter = std::vec::IntoIter<Token<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}

impl<'f, 'a> IntoIterator for &'f Furigana<'a> {
    type Item = &'f Token<'a>;
    type IntoIter = std::slice::Iter<'f, Token<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

impl<'a> FromIterator<Token<'a>> for Furigana<'a> {
    fn from_iter<T: IntoIterator<Item = Token<'a>>>(iter: T) -> Self {
        Self {
            tokens: iter.into_iter().collect(),
        }
    }
}

/// Prints the text with its furigana using HTML ruby tags.
impl Display for Furigana<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<ruby>")?;
        for token in &self.tokens {
            write!(f, "{}", token.written)?;
            write!(f, "<rt>")?;
            if let Some(furigana) = token.furigana() {
                write!(f, "{}", furigana)?;
            }
            write!(f, "</rt>")?;
        }
        write!(f, "</ruby>")?;
        Ok(())
    }
}

/// Bracket notation of a [`Furigana`], see [`Furigana::brackets`].
#[derive(Debug, Clone, Copy)]
pub struct Brackets<'f, 'a> {
    furigana: &'f Furigana<'a>,
}

impl Display for Brackets<'_, '_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, token) in self.furigana.tokens.iter().enumerate() {
            match token.furigana() {
                Some(furigana) => {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{}[{}]", token.written, furigana)?;
                }
                None => write!(f, "{}", token.written)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn yomu() -> Furigana<'static> {
        Furigana {
            tokens: vec![
                Token {
                    written: "読",
                    reading: "よ".to_string(),
                },
                Token {
                    written: "む",
                    reading: String::new(),
                },
            ],
        }
    }

    #[test]
    fn prints_ruby() {
        assert_eq!(yomu().to_string(), "<ruby>読<rt>よ</rt>む<rt></rt></ruby>");
        assert_eq!(Furigana::default().to_string(), "<ruby></ruby>");
    }

    #[test]
    fn prints_brackets() {
        assert_eq!(yomu().brackets().to_string(), "読[よ]む");

        let mut sentence = Furigana {
            tokens: vec![Token {
                written: "お",
                reading: String::new(),
            }],
        };
        sentence.extend(yomu());
        assert_eq!(sentence.brackets().to_string(), "お 読[よ]む");
    }

    #[test]
    fn reconstructs_written() {
        let furigana = yomu();
        assert_eq!(furigana.written(), "読む");
        assert_eq!(furigana.len(), 2);
        assert_eq!(
            furigana.into_pairs(),
            vec![
                ("読".to_string(), "よ".to_string()),
                ("む".to_string(), String::new())
            ]
        );
    }
}
