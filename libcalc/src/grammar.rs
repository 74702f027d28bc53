//! Syntax accepted by the calculator
//!
//! An expression is an optional run of signs, then an operand, then any number
//! of `operator operand` pairs. An operand is a word optionally wrapped in
//! parentheses, and an operator is a run of `+`/`-`, or one of `*`, `/`, `^`.
//! Parentheses are only checked for balance later, during conversion.
use std::iter::Peekable;
use std::str::Chars;

/// Whether `expr` is a well-formed expression. `expr` must be whitespace-free
pub fn is_expression(expr: &str) -> bool {
    let mut chars = expr.chars().peekable();
    while chars.next_if(is_sign).is_some() {}
    if !operand(&mut chars) {
        return false;
    }
    while chars.peek().is_some() {
        if !operator(&mut chars) || !operand(&mut chars) {
            return false;
        }
    }
    true
}

/// Whether `s` is a valid variable name
pub fn is_identifier(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|ch| ch.is_ascii_alphabetic())
}

/// Whether `s` is an integer literal with an optional minus sign
pub fn is_integer(s: &str) -> bool {
    is_digits(s.strip_prefix('-').unwrap_or(s))
}

/// Whether `s` is an integer literal with an optional sign of either kind
pub(crate) fn is_signed_integer(s: &str) -> bool {
    is_digits(s.strip_prefix(|ch: char| ch == '+' || ch == '-').unwrap_or(s))
}

/// Return whether or not character can be part of a word
pub(crate) fn is_word(ch: &char) -> bool {
    ch.is_ascii_alphanumeric() || *ch == '_'
}

pub(crate) fn is_sign(ch: &char) -> bool {
    *ch == '+' || *ch == '-'
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|ch| ch.is_ascii_digit())
}

fn operand(chars: &mut Peekable<Chars<'_>>) -> bool {
    while chars.next_if_eq(&'(').is_some() {}
    let mut len = 0;
    while chars.next_if(is_word).is_some() {
        len += 1;
    }
    while chars.next_if_eq(&')').is_some() {}
    len > 0
}

fn operator(chars: &mut Peekable<Chars<'_>>) -> bool {
    match chars.next() {
        Some('+' | '-') => {
            while chars.next_if(is_sign).is_some() {}
            true
        }
        Some('*' | '/' | '^') => true,
        _ => false,
    }
}
