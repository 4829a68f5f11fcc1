use lazy_static::lazy_static;
use regex::Regex;
use rust_stemmers::{Algorithm, Stemmer};
use unicode_normalization::UnicodeNormalization;
use std::collections::HashSet;

lazy_static! {
    static ref RE: Regex = Regex::new(r"(?u)[\p{L}\p{N}][\p{L}\p{N}_']*").expect("valid regex");
    static ref DEFAULT_TOKENIZER: Tokenizer = Tokenizer::default();
}

/// English stopword list (the NLTK corpus list).
pub const ENGLISH_STOPWORDS: &[&str] = &[
    "a","about","above","after","again","against","ain","all","am","an","and","any","are","aren","aren't","as","at",
    "be","because","been","before","being","below","between","both","but","by",
    "can","couldn","couldn't",
    "d","did","didn","didn't","do","does","doesn","doesn't","doing","don","don't","down","during",
    "each","few","for","from","further",
    "had","hadn","hadn't","has","hasn","hasn't","have","haven","haven't","having","he","her","here","hers","herself","him","himself","his","how",
    "i","if","in","into","is","isn","isn't","it","it's","its","itself",
    "just","ll","m","ma","me","mightn","mightn't","more","most","mustn","mustn't","my","myself",
    "needn","needn't","no","nor","not","now",
    "o","of","off","on","once","only","or","other","our","ours","ourselves","out","over","own",
    "re","s","same","shan","shan't","she","she's","should","should've","shouldn","shouldn't","so","some","such",
    "t","than","that","that'll","the","their","theirs","them","themselves","then","there","these","they","this","those","through","to","too",
    "under","until","up","ve","very",
    "was","wasn","wasn't","we","were","weren","weren't","what","when","where","which","while","who","whom","why","will","with","won","won't","wouldn","wouldn't",
    "y","you","you'd","you'll","you're","you've","your","yours","yourself","yourselves",
];

#[derive(Debug, Clone)]
pub struct TokenizerConfig {
    pub stopwords: HashSet<String>,
    /// Reduce tokens to their English Snowball stem.
    pub stem: bool,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            stopwords: ENGLISH_STOPWORDS.iter().map(|w| w.to_string()).collect(),
            stem: false,
        }
    }
}

/// Maps raw text to normalized word tokens. Queries and documents must go
/// through the same tokenizer for their words to line up.
pub struct Tokenizer {
    stopwords: HashSet<String>,
    stemmer: Option<Stemmer>,
}

impl Default for Tokenizer {
    fn default() -> Self { Self::new(TokenizerConfig::default()) }
}

impl Tokenizer {
    pub fn new(config: TokenizerConfig) -> Self {
        let stemmer = config.stem.then(|| Stemmer::create(Algorithm::English));
        Self { stopwords: config.stopwords, stemmer }
    }

    fn is_stopword(&self, token: &str) -> bool { self.stopwords.contains(token) }

    /// Tokenize text using NFKC normalization, lowercase, punctuation and stopword removal,
    /// and optional stemming. Tokens come back in reading order.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let normalized = text.nfkc().collect::<String>().to_lowercase();
        let mut tokens = Vec::new();
        for mat in RE.find_iter(&normalized) {
            // possessive clitic: "python's" -> "python"
            let token = mat.as_str().trim_end_matches('\'');
            let token = token.strip_suffix("'s").unwrap_or(token);
            if self.is_stopword(token) { continue; }
            match &self.stemmer {
                Some(stemmer) => tokens.push(stemmer.stem(token).into_owned()),
                None => tokens.push(token.to_string()),
            }
        }
        tokens
    }
}

/// Tokenize with the default English configuration.
pub fn tokenize(text: &str) -> Vec<String> {
    DEFAULT_TOKENIZER.tokenize(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_tokenize() {
        let t = tokenize("The cat, sat on the mat!");
        assert_eq!(t, vec!["cat", "sat", "mat"]);
    }

    #[test]
    fn possessive_s_is_split_off() {
        assert_eq!(tokenize("Python's creator"), vec!["python", "creator"]);
        assert_eq!(tokenize("the students' books"), vec!["students", "books"]);
    }

    #[test]
    fn stemming_is_opt_in() {
        let plain = Tokenizer::default();
        assert_eq!(plain.tokenize("Running runners"), vec!["running", "runners"]);

        let stemming = Tokenizer::new(TokenizerConfig { stem: true, ..Default::default() });
        assert!(stemming.tokenize("Running, runner's run!").iter().all(|w| w.starts_with("run")));
    }

    #[test]
    fn custom_stopwords_replace_the_default_list() {
        let config = TokenizerConfig { stopwords: ["cat".to_string()].into_iter().collect(), stem: false };
        let t = Tokenizer::new(config).tokenize("the cat sat");
        assert_eq!(t, vec!["the", "sat"]);
    }
}
