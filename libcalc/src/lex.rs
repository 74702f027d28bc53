//! Lexer for normalized expressions
use std::iter::Peekable;

use crate::grammar::{is_sign, is_word};
use crate::Token;

/// Tokenize a normalized, whitespace-free expression
pub fn lex(expr: &str) -> Vec<Token> {
    Tokens::new(expr).collect()
}

/// An iterator over Tokens
struct Tokens<'a> {
    inner: Peekable<std::str::Chars<'a>>,
    at_start: bool,
}

impl Tokens<'_> {
    fn new(expr: &str) -> Tokens<'_> {
        Tokens {
            inner: expr.chars().peekable(),
            at_start: true,
        }
    }

    /// Collect a run of word characters following `prefix`
    fn next_word(&mut self, prefix: char) -> Token {
        let mut word = String::from(prefix);
        word.extend(std::iter::from_fn(|| self.inner.next_if(is_word)));
        Token::from(word.as_str())
    }
}

impl Iterator for Tokens<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let ch = self.inner.next()?;
        let at_start = std::mem::replace(&mut self.at_start, false);

        // Leading sign is part of the first number
        let signed_number =
            at_start && is_sign(&ch) && self.inner.peek().is_some_and(|ch| ch.is_ascii_digit());

        let token = if signed_number || is_word(&ch) {
            self.next_word(ch)
        } else {
            let mut buf = [0; 4];
            Token::from(&*ch.encode_utf8(&mut buf))
        };
        Some(token)
    }
}
