//! Ordered keyword rules.
//!
//! Both the theme picker and the block generator are tables of
//! `(keywords, result)` pairs matched against lower-cased text. Table
//! order is part of the behavior: the theme picker stops at the first hit,
//! the generator visits every rule in order.

/// A rule that fires when the text contains any of its keywords.
#[derive(Debug)]
pub struct KeywordRule<T> {
    pub keywords: &'static [&'static str],
    pub result: T,
}

impl<T> KeywordRule<T> {
    pub const fn new(keywords: &'static [&'static str], result: T) -> Self {
        KeywordRule { keywords, result }
    }

    /// Substring match; `text` is expected to be lower-cased already.
    pub fn matches(&self, text: &str) -> bool {
        contains_any(text, self.keywords)
    }
}

/// True if `text` contains at least one of `keywords`.
pub fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| text.contains(k))
}

/// Result of the first rule that matches, if any.
pub fn first_match<'a, T>(rules: &'a [KeywordRule<T>], text: &str) -> Option<&'a T> {
    rules.iter().find(|r| r.matches(text)).map(|r| &r.result)
}

/// Results of every matching rule, in table order.
pub fn all_matches<'a, T>(
    rules: &'a [KeywordRule<T>],
    text: &'a str,
) -> impl Iterator<Item = &'a T> + 'a {
    rules.iter().filter(move |r| r.matches(text)).map(|r| &r.result)
}
