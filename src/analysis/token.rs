/// One term produced by a tokenizer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
}

impl Token {
    pub fn new(text: String) -> Self {
        Token { text }
    }

    /// Length in characters, not bytes
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}
