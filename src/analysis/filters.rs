use std::sync::LazyLock;
use regex::Regex;
use crate::analysis::filter::TokenFilter;
use crate::analysis::token::Token;

static NON_WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^\w]").expect("non-word pattern is valid")
});

pub struct LowercaseFilter;

impl TokenFilter for LowercaseFilter {
    fn filter(&self, tokens: Vec<Token>) -> Vec<Token> {
        tokens.into_iter()
            .map(|mut token| {
                token.text = token.text.to_lowercase();
                token
            })
            .collect()
    }

    fn clone_box(&self) -> Box<dyn TokenFilter> {
        Box::new(LowercaseFilter)
    }
}

/// Removes every non-word character from each token ("paris," -> "paris")
pub struct StripNonWordFilter;

impl TokenFilter for StripNonWordFilter {
    fn filter(&self, tokens: Vec<Token>) -> Vec<Token> {
        tokens.into_iter()
            .map(|mut token| {
                let stripped = NON_WORD.replace_all(&token.text, "").into_owned();
                token.text = stripped;
                token
            })
            .collect()
    }

    fn clone_box(&self) -> Box<dyn TokenFilter> {
        Box::new(StripNonWordFilter)
    }
}

/// Drops tokens shorter than `min_chars` characters
pub struct MinLengthFilter {
    pub min_chars: usize,
}

impl MinLengthFilter {
    pub fn new(min_chars: usize) -> Self {
        MinLengthFilter { min_chars }
    }
}

impl TokenFilter for MinLengthFilter {
    fn filter(&self, tokens: Vec<Token>) -> Vec<Token> {
        tokens.into_iter()
            .filter(|token| token.char_len() >= self.min_chars)
            .collect()
    }

    fn clone_box(&self) -> Box<dyn TokenFilter> {
        Box::new(MinLengthFilter::new(self.min_chars))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(words: &[&str]) -> Vec<Token> {
        words.iter().map(|w| Token::new(w.to_string())).collect()
    }

    fn texts(tokens: Vec<Token>) -> Vec<String> {
        tokens.into_iter().map(|t| t.text).collect()
    }

    #[test]
    fn strip_keeps_letters_digits_and_underscore() {
        let out = StripNonWordFilter.filter(tokens(&["paris,", "(75001)", "saint-denis", "côte_d'or"]));
        assert_eq!(texts(out), vec!["paris", "75001", "saintdenis", "côte_dor"]);
    }

    #[test]
    fn min_length_counts_characters() {
        let out = MinLengthFilter::new(2).filter(tokens(&["", "a", "é", "ab", "éa"]));
        assert_eq!(texts(out), vec!["ab", "éa"]);
    }

    #[test]
    fn lowercase_folds_unicode() {
        let out = LowercaseFilter.filter(tokens(&["ÉCOLE", "Paris"]));
        assert_eq!(texts(out), vec!["école", "paris"]);
    }
}
