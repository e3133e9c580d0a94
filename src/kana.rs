//! Katakana to hiragana normalization.

use crate::utils;
use std::{collections::HashMap, sync::LazyLock};

#[rustfmt::skip]
const KATAKANA: [&str; 84] = [
    "ァ", "ア", "ィ", "イ", "ゥ", "ウ", "ェ", "エ", "ォ", "オ",
    "カ", "ガ", "キ", "ギ", "ク", "グ", "ケ", "ゲ", "コ", "ゴ",
    "サ", "ザ", "シ", "ジ", "ス", "ズ", "セ", "ゼ", "ソ", "ゾ",
    "タ", "ダ", "チ", "ヂ", "ッ", "ツ", "ヅ", "テ", "デ", "ト",
    "ド", "ナ", "ニ", "ヌ", "ネ", "ノ", "ハ", "バ", "パ", "ヒ",
    "ビ", "ピ", "フ", "ブ", "プ", "ヘ", "ベ", "ペ", "ホ", "ボ",
    "ポ", "マ", "ミ", "ム", "メ", "モ", "ャ", "ヤ", "ュ", "ユ",
    "ョ", "ヨ", "ラ", "リ", "ル", "レ", "ロ", "ヮ", "ワ", "ヲ",
    "ン", "ヴ", "ヵ", "ヶ",
];

#[rustfmt::skip]
const HIRAGANA: [&str; 84] = [
    "ぁ", "あ", "ぃ", "い", "ぅ", "う", "ぇ", "え", "ぉ", "お",
    "か", "が", "き", "ぎ", "く", "ぐ", "け", "げ", "こ", "ご",
    "さ", "ざ", "し", "じ", "す", "ず", "せ", "ぜ", "そ", "ぞ",
    "た", "だ", "ち", "ぢ", "っ", "つ", "づ", "て", "で", "と",
    "ど", "な", "に", "ぬ", "ね", "の", "は", "ば", "ぱ", "ひ",
    "び", "ぴ", "ふ", "ぶ", "ぷ", "へ", "べ", "ぺ", "ほ", "ぼ",
    "ぽ", "ま", "み", "む", "め", "も", "ゃ", "や", "ゅ", "ゆ",
    "ょ", "よ", "ら", "り", "る", "れ", "ろ", "ゎ", "わ", "を",
    "ん", "ゔ", "ゕ", "ゖ",
];

static SHARED: LazyLock<KanaNormalizer> = LazyLock::new(KanaNormalizer::new);

/// Converts katakana to their hiragana equivalents, one scalar at a time.
///
/// The table is built once and never modified afterwards, so a single normalizer can be shared
/// between any number of threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KanaNormalizer {
    katakana_to_hiragana: HashMap<char, char>,
}

impl KanaNormalizer {
    /// Builds a normalizer with its own table.
    pub fn new() -> Self {
        Self::from_lists(&KATAKANA, &HIRAGANA)
    }

    /// Returns the process-wide normalizer, building it on first use.
    pub fn shared() -> &'static Self {
        &SHARED
    }

    // each katakana[i] maps to hiragana[i]
    fn from_lists(katakana: &[&str], hiragana: &[&str]) -> Self {
        debug_assert_eq!(katakana.len(), hiragana.len());
        let katakana_to_hiragana = katakana
            .iter()
            .zip(hiragana)
            .filter_map(|(&k, &h)| Some((single_char(k)?, single_char(h)?)))
            .inspect(|&(k, h)| {
                debug_assert!(k.len_utf8() == 3 && h.len_utf8() == 3);
                debug_assert!(utils::is_katakana(k) && utils::is_hiragana(h));
            })
            .collect();
        Self {
            katakana_to_hiragana,
        }
    }

    /// Returns the hiragana for `c` if it is a katakana in the table, or `c` itself otherwise.
    pub fn convert_char(&self, c: char) -> char {
        self.katakana_to_hiragana.get(&c).copied().unwrap_or(c)
    }

    /// Returns `text` with every katakana replaced by its hiragana equivalent.
    /// Everything else, including hiragana, kanji and the long vowel mark ー, is kept as is.
    pub fn normalize(&self, text: &str) -> String {
        text.chars().map(|c| self.convert_char(c)).collect()
    }

    /// Like [`KanaNormalizer::normalize`], but for raw bytes.
    /// Decoding stops at the first invalid UTF-8 sequence and everything from there on is dropped.
    pub fn normalize_bytes(&self, bytes: &[u8]) -> String {
        let valid = match std::str::from_utf8(bytes) {
            Ok(text) => text,
            Err(err) => {
                tracing::trace!(
                    valid_up_to = err.valid_up_to(),
                    len = bytes.len(),
                    "dropping bytes after invalid UTF-8"
                );
                // everything before valid_up_to is valid by definition
                std::str::from_utf8(&bytes[..err.valid_up_to()]).unwrap_or_default()
            }
        };
        self.normalize(valid)
    }
}

impl Default for KanaNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}
