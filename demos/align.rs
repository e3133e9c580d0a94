//! `warifuri::tokenize` maps each span of a dot-separated reading to the characters of a word.
//! Consecutive dots let a single reading span several characters.

fn main() {
    for (word, reading) in [("読む", "よ.む"), ("今日は", "きょう..は"), ("大人", "おとな")] {
        let furigana = warifuri::tokenize(word, reading);
        println!("{furigana}");
        println!("{}", furigana.brackets());
    }
}
