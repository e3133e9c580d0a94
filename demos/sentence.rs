//! `warifuri::tokenize_words` annotates a sentence that a morphological analyzer already split into words.
//! The readings can be katakana, and words without a reading are left unannotated.

fn main() {
    let words = [
        ("私", "ワタシ"),
        ("は", "ハ"),
        ("１２", ""),
        ("歳", "サイ"),
        ("です", "デス"),
    ];
    let furigana = warifuri::tokenize_words(words);
    println!("{}", furigana.brackets());
}
