//! Line-oriented calculator session
use num_bigint::BigInt;
use tracing::debug;

use crate::grammar::{is_expression, is_identifier, is_integer};
use crate::{eval, lex, normalize, to_postfix, Error, Result, Store};

/// Banner printed by `/help`
pub const HELP: &str = "\
This program can add and subtract numbers.
You can put as many pluses and minuses between numbers as you like: an even
number of minuses is a plus, an odd number is a minus.
Numbers can be multiplied (*), divided (/) and raised to a power (^), and
parentheses group subexpressions.
There is no limit on the size of numbers.
Store values in variables with `name = value`, where value is a number or
another variable, and use them in later expressions.
Commands: /help shows this text, /exit ends the session.";

/// Result of processing a single line
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    /// Nothing to print
    Silent,
    /// Text to print
    Output(String),
    /// Session should end
    Exit,
}

/// A calculator session owning its variables
#[derive(Debug, Default)]
pub struct Session {
    store: Store,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Variables defined so far
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Process a line of input. Errors leave the session unchanged
    pub fn process(&mut self, line: &str) -> Result<Reply> {
        let line = line.trim();
        if line.is_empty() {
            Ok(Reply::Silent)
        } else if line.starts_with('/') {
            debug!("command: {line}");
            self.command(line)
        } else if let Some((name, value)) = line.split_once('=') {
            debug!("declaration: {line}");
            self.declare(name, value)
        } else {
            debug!("expression: {line}");
            self.expression(line).map(Reply::Output)
        }
    }

    fn command(&self, cmd: &str) -> Result<Reply> {
        match cmd {
            "/help" => Ok(Reply::Output(HELP.to_string())),
            "/exit" => Ok(Reply::Exit),
            _ => Err(Error::UnknownCommand(cmd.to_string())),
        }
    }

    fn declare(&mut self, name: &str, value: &str) -> Result<Reply> {
        let name = strip_whitespace(name);
        let value = strip_whitespace(value);

        if !is_identifier(&name) {
            return Err(Error::InvalidIdentifier(name));
        }
        let value = if is_integer(&value) {
            value
                .parse::<BigInt>()
                .map_err(|e| Error::InvalidAssignment(format!("{value} - {e}")))?
        } else if is_identifier(&value) {
            self.store
                .get(&value)
                .cloned()
                .ok_or(Error::UnknownVariable(value))?
        } else {
            return Err(Error::InvalidAssignment(value));
        };

        debug!("define {name} = {value}");
        self.store.define(name, value);
        Ok(Reply::Silent)
    }

    fn expression(&self, expr: &str) -> Result<String> {
        let expr = strip_whitespace(expr);
        if !is_expression(&expr) {
            return Err(Error::InvalidExpression(expr));
        }
        let postfix = to_postfix(lex(&normalize(&expr)))?;
        let value = eval(postfix, &self.store)?;
        Ok(value.to_string())
    }
}

fn strip_whitespace(s: &str) -> String {
    s.chars().filter(|ch| !ch.is_whitespace()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn empty_line() {
        let mut s = Session::new();
        assert_eq!(s.process(""), Ok(Reply::Silent));
        assert_eq!(s.process("  \t "), Ok(Reply::Silent));
    }

    #[test]
    fn commands() {
        let mut s = Session::new();
        assert_eq!(s.process("/help"), Ok(Reply::Output(HELP.to_string())));
        assert_eq!(s.process("/exit"), Ok(Reply::Exit));
        assert_eq!(
            s.process("/foo"),
            Err(Error::UnknownCommand("/foo".to_string()))
        );
        assert_matches!(s.process("/exit now"), Err(Error::UnknownCommand(_)));
    }

    #[test]
    fn declaration_strips_all_whitespace() {
        let mut s = Session::new();
        assert_eq!(s.process("  a  =  1 2 "), Ok(Reply::Silent));
        assert_eq!(s.store().get("a"), Some(&BigInt::from(12)));
    }

    #[test]
    fn declaration_splits_on_first_equals() {
        let mut s = Session::new();
        assert_eq!(
            s.process("a = 1 = 2"),
            Err(Error::InvalidAssignment("1=2".to_string()))
        );
        assert!(s.store().is_empty());
    }

    #[test]
    fn declaration_invalid_name() {
        let mut s = Session::new();
        assert_eq!(
            s.process("a1 = 5"),
            Err(Error::InvalidIdentifier("a1".to_string()))
        );
        assert_eq!(s.process("= 5"), Err(Error::InvalidIdentifier("".to_string())));
    }

    #[test]
    fn declaration_invalid_value() {
        let mut s = Session::new();
        assert_matches!(s.process("a = 1+2"), Err(Error::InvalidAssignment(_)));
        assert_matches!(s.process("a = b1"), Err(Error::InvalidAssignment(_)));
        assert_matches!(s.process("a = +5"), Err(Error::InvalidAssignment(_)));
        assert_matches!(s.process("a ="), Err(Error::InvalidAssignment(_)));
        assert!(s.store().is_empty());
    }

    #[test]
    fn expression_invalid() {
        let mut s = Session::new();
        assert_matches!(s.process("2 +"), Err(Error::InvalidExpression(_)));
        assert_matches!(s.process("2 * -3"), Err(Error::InvalidExpression(_)));
    }
}
