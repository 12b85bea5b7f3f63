use crate::tokenizer::tokenize;
use crate::Term;
use std::collections::HashSet;

#[derive(Debug, Clone, Default)]
pub struct StopWords {
    words: HashSet<Term>,
}

impl StopWords {
    pub fn new() -> Self { Self::default() }

    pub fn from_text(text: &str) -> Self {
        let mut sw = Self::new();
        sw.extend_from_text(text);
        sw
    }

    /// Union the space-separated words of `text` into the set.
    pub fn extend_from_text(&mut self, text: &str) {
        self.words.extend(tokenize(text));
    }

    pub fn contains(&self, term: &str) -> bool { self.words.contains(term) }

    pub fn len(&self) -> usize { self.words.len() }

    pub fn is_empty(&self) -> bool { self.words.is_empty() }

    /// Drop stop words from `tokens`, keeping the order of the rest.
    pub fn filter(&self, tokens: Vec<Term>) -> Vec<Term> {
        tokens.into_iter().filter(|t| !self.contains(t)).collect()
    }

    pub fn tokenize_without_stop_words(&self, text: &str) -> Vec<Term> {
        self.filter(tokenize(text))
    }
}
