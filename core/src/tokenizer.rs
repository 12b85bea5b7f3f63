use crate::Term;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref RE: Regex = Regex::new(r"\S+").expect("valid regex");
}

/// Split text into whitespace-delimited terms. Runs of whitespace collapse and never yield empty terms.
pub fn tokenize(text: &str) -> Vec<Term> {
    RE.find_iter(text).map(|m| m.as_str().to_string()).collect()
}
