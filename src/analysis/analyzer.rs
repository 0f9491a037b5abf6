use crate::analysis::filter::TokenFilter;
use crate::analysis::filters::{LowercaseFilter, MinLengthFilter, StripNonWordFilter};
use crate::analysis::token::Token;
use crate::analysis::tokenizer::{KeywordTokenizer, Tokenizer, WhitespaceTokenizer};

/// Text analysis pipeline
pub struct Analyzer {
    pub tokenizer: Box<dyn Tokenizer>,
    pub filters: Vec<Box<dyn TokenFilter>>,
    pub name: String,
}

impl Analyzer {
    pub fn new(name: String, tokenizer: Box<dyn Tokenizer>) -> Self {
        Analyzer {
            tokenizer,
            filters: Vec::new(),
            name,
        }
    }

    pub fn add_filter(mut self, filter: Box<dyn TokenFilter>) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn analyze(&self, text: &str) -> Vec<Token> {
        let mut tokens = self.tokenizer.tokenize(text);

        for filter in &self.filters {
            tokens = filter.filter(tokens);
        }

        tokens
    }

    /// Index keys produced for `text`, in token order
    pub fn terms(&self, text: &str) -> Vec<String> {
        self.analyze(text).into_iter().map(|token| token.text).collect()
    }

    /// Residence tokens: lowercased, punctuation stripped, at least two characters
    pub fn city() -> Self {
        Analyzer::new("city".to_string(), Box::new(WhitespaceTokenizer))
            .add_filter(Box::new(LowercaseFilter))
            .add_filter(Box::new(StripNonWordFilter))
            .add_filter(Box::new(MinLengthFilter::new(2)))
    }

    /// Whole value, lowercased
    pub fn keyword_lowercase() -> Self {
        Analyzer::new("keyword_lowercase".to_string(), Box::new(KeywordTokenizer))
            .add_filter(Box::new(LowercaseFilter))
    }

    /// Whole value, verbatim
    pub fn keyword() -> Self {
        Analyzer::new("keyword".to_string(), Box::new(KeywordTokenizer))
    }
}

impl Clone for Analyzer {
    fn clone(&self) -> Self {
        Analyzer {
            tokenizer: self.tokenizer.clone_box(),
            filters: self.filters.iter().map(|f| f.clone_box()).collect(),
            name: self.name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn city_analyzer_drops_short_and_punctuation_only_tokens() {
        let terms = Analyzer::city().terms("Saint-Denis, a - 93 (France)");
        assert_eq!(terms, vec!["saintdenis", "93", "france"]);
    }

    #[test]
    fn keyword_lowercase_keeps_spaces() {
        assert_eq!(Analyzer::keyword_lowercase().terms("Mary Ann"), vec!["mary ann"]);
        assert!(Analyzer::keyword_lowercase().terms("").is_empty());
    }

    #[test]
    fn cloned_analyzer_behaves_the_same() {
        let city = Analyzer::city();
        let copy = city.clone();
        assert_eq!(copy.name, "city");
        assert_eq!(copy.terms("Paris, France"), city.terms("Paris, France"));
    }
}
