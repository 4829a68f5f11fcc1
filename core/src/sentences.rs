//! Rule-based sentence splitting.
//!
//! A passage breaks after `.`, `!` or `?` (plus any closing quotes or
//! brackets) when whitespace follows. A period does not end a sentence when
//! it closes a known abbreviation or an uppercase initial (other than the
//! pronoun "I"), when "No." is followed by a number, or when the next word
//! starts in lowercase.

const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "vs", "etc", "e.g", "i.e", "cf", "al",
    "inc", "ltd", "co", "corp", "fig", "vol", "approx", "u.s", "jan", "feb", "mar", "apr",
    "jun", "jul", "aug", "sep", "sept", "oct", "nov", "dec",
];

fn is_terminator(c: char) -> bool { matches!(c, '.' | '!' | '?') }

fn is_closer(c: char) -> bool { matches!(c, '"' | '\'' | ')' | ']' | '\u{201d}' | '\u{2019}') }

fn ends_with_abbreviation(text: &str, next: Option<char>) -> bool {
    let last = text
        .rsplit(char::is_whitespace)
        .next()
        .unwrap_or("")
        .trim_start_matches(|c: char| !c.is_alphanumeric());
    let initial = {
        let mut chars = last.chars();
        matches!((chars.next(), chars.next()), (Some(c), None) if c.is_uppercase() && c != 'I')
    };
    let word = last.to_lowercase();
    let numbered = word == "no" && next.map_or(false, |c| c.is_ascii_digit());
    initial || numbered || ABBREVIATIONS.contains(&word.as_str())
}

fn push_trimmed(out: &mut Vec<String>, piece: &str) {
    let piece = piece.trim();
    if !piece.is_empty() {
        out.push(piece.to_string());
    }
}

/// Split one passage into trimmed, non-empty sentences in reading order.
pub fn split_sentences(passage: &str) -> Vec<String> {
    let chars: Vec<(usize, char)> = passage.char_indices().collect();
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < chars.len() {
        let (pos, c) = chars[i];
        if !is_terminator(c) {
            i += 1;
            continue;
        }

        let mut j = i + 1;
        while j < chars.len() && is_terminator(chars[j].1) { j += 1; }
        while j < chars.len() && is_closer(chars[j].1) { j += 1; }

        let end = chars.get(j).map_or(passage.len(), |&(p, _)| p);
        let at_boundary = j == chars.len() || chars[j].1.is_whitespace();
        let continues = c == '.' && j == i + 1 && {
            let next_word = chars[j..].iter().map(|&(_, ch)| ch).find(|ch| !ch.is_whitespace());
            ends_with_abbreviation(&passage[start..pos], next_word) || next_word.map_or(false, char::is_lowercase)
        };

        if at_boundary && !continues {
            push_trimmed(&mut sentences, &passage[start..end]);
            start = end;
        }
        i = j;
    }
    push_trimmed(&mut sentences, &passage[start..]);
    sentences
}

/// Split a whole text: each line is a passage, each passage is split into sentences.
pub fn split_text(text: &str) -> Vec<String> {
    text.lines().flat_map(split_sentences).collect()
}
