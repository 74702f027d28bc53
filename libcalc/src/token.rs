//! Lexical units of an expression
use num_bigint::BigInt;
use num_traits::{Signed, ToPrimitive, Zero};

use crate::grammar::is_signed_integer;
use crate::{Error, Result};

/// A single lexical unit of an expression
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Integer literal, optionally signed
    Number(BigInt),
    /// Variable reference. Validity of the name is checked on evaluation
    Identifier(String),
    Operator(Operator),
    ParenLeft,
    ParenRight,
}

/// Binary operators, all left-associative
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl From<&str> for Token {
    fn from(text: &str) -> Self {
        let mut chars = text.chars();
        if let (Some(ch), None) = (chars.next(), chars.next()) {
            if let Some(op) = Operator::from_char(ch) {
                return Token::Operator(op);
            }
            match ch {
                '(' => return Token::ParenLeft,
                ')' => return Token::ParenRight,
                _ => (),
            }
        }
        if is_signed_integer(text) {
            if let Ok(n) = text.parse::<BigInt>() {
                return Token::Number(n);
            }
        }
        Token::Identifier(text.to_string())
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Number(n) => write!(f, "{}", n),
            Token::Identifier(s) => write!(f, "{}", s),
            Token::Operator(op) => write!(f, "{}", op),
            Token::ParenLeft => write!(f, "("),
            Token::ParenRight => write!(f, ")"),
        }
    }
}

impl Operator {
    /// Operator for given symbol, if any
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Sub),
            '*' => Some(Operator::Mul),
            '/' => Some(Operator::Div),
            '^' => Some(Operator::Pow),
            _ => None,
        }
    }

    /// Binding strength. Higher binds tighter
    pub fn precedence(&self) -> u8 {
        match self {
            Operator::Add | Operator::Sub => 0,
            Operator::Mul | Operator::Div => 1,
            Operator::Pow => 3,
        }
    }

    /// Apply operator to `lhs` and `rhs`.
    /// Division truncates toward zero.
    pub fn apply(&self, lhs: BigInt, rhs: BigInt) -> Result<BigInt> {
        match self {
            Operator::Add => Ok(lhs + rhs),
            Operator::Sub => Ok(lhs - rhs),
            Operator::Mul => Ok(lhs * rhs),
            Operator::Div => {
                if rhs.is_zero() {
                    return Err(Error::DivisionByZero);
                }
                Ok(lhs / rhs)
            }
            Operator::Pow => {
                let exp = rhs.to_u32().ok_or_else(|| {
                    if rhs.is_negative() {
                        Error::InvalidExponent(format!("{rhs} is negative"))
                    } else {
                        Error::InvalidExponent(format!("{rhs} is too large"))
                    }
                })?;
                Ok(lhs.pow(exp))
            }
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sym = match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
            Operator::Pow => '^',
        };
        write!(f, "{}", sym)
    }
}
