//! Evaluation of postfix token sequences
use num_bigint::BigInt;
use tracing::warn;

use crate::grammar::is_identifier;
use crate::{Error, Result, Store, Token};

/// Evaluate a postfix sequence, resolving variables from `store`
pub fn eval(postfix: Vec<Token>, store: &Store) -> Result<BigInt> {
    let mut stack: Vec<BigInt> = vec![];

    for token in postfix {
        match token {
            Token::Number(n) => stack.push(n),
            Token::Identifier(name) => {
                if !is_identifier(&name) {
                    return Err(Error::InvalidIdentifier(name));
                }
                let value = store
                    .get(&name)
                    .ok_or_else(|| Error::UnknownVariable(name.clone()))?;
                stack.push(value.clone());
            }
            Token::Operator(op) => {
                let (rhs, lhs) = match (stack.pop(), stack.pop()) {
                    (Some(rhs), Some(lhs)) => (rhs, lhs),
                    _ => {
                        return Err(Error::InvalidExpression(format!(
                            "missing operand for {op}"
                        )))
                    }
                };
                stack.push(op.apply(lhs, rhs)?);
            }
            Token::ParenLeft | Token::ParenRight => {
                return Err(Error::InvalidExpression(format!(
                    "unexpected {token} in postfix sequence"
                )))
            }
        }
    }

    let res = stack.pop().ok_or(Error::InvalidExpression(
        "expression has no value".to_string(),
    ))?;
    if !stack.is_empty() {
        warn!("evaluation ended with surplus values {:?}", stack);
        return Err(Error::InvalidExpression(
            "missing operator between operands".to_string(),
        ));
    }
    Ok(res)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{lex, normalize, to_postfix};
    use assert_matches::assert_matches;

    fn eval_expr(expr: &str, store: &Store) -> Result<String> {
        let postfix = to_postfix(lex(&normalize(expr)))?;
        eval(postfix, store).map(|n| n.to_string())
    }

    #[test]
    fn eval_number() {
        let store = Store::default();
        assert_eq!(eval_expr("5", &store), Ok("5".to_string()));
        assert_eq!(eval_expr("-5", &store), Ok("-5".to_string()));
        assert_eq!(eval_expr("000", &store), Ok("0".to_string()));
    }

    #[test]
    fn eval_arithmetic() {
        let store = Store::default();
        assert_eq!(eval_expr("2+3*4", &store), Ok("14".to_string()));
        assert_eq!(eval_expr("(2+3)*4", &store), Ok("20".to_string()));
        assert_eq!(eval_expr("2^10", &store), Ok("1024".to_string()));
        assert_eq!(eval_expr("7/2", &store), Ok("3".to_string()));
        assert_eq!(eval_expr("-7/2", &store), Ok("-3".to_string()));
        assert_eq!(eval_expr("2^3^2", &store), Ok("64".to_string()));
        assert_eq!(eval_expr("8 --- 3", &store), Ok("5".to_string()));
    }

    #[test]
    fn eval_arbitrary_precision() {
        let store = Store::default();
        assert_eq!(
            eval_expr("99999999999999999999 + 1", &store),
            Ok("100000000000000000000".to_string())
        );
        assert_eq!(
            eval_expr("2^100", &store),
            Ok("1267650600228229401496703205376".to_string())
        );
    }

    #[test]
    fn eval_variables() {
        let mut store = Store::default();
        store.define("a", BigInt::from(5));
        store.define("bee", BigInt::from(-2));
        assert_eq!(eval_expr("a", &store), Ok("5".to_string()));
        assert_eq!(eval_expr("a * bee - 1", &store), Ok("-11".to_string()));
    }

    #[test]
    fn eval_unknown_variable() {
        let store = Store::default();
        assert_eq!(
            eval_expr("1 + x", &store),
            Err(Error::UnknownVariable("x".to_string()))
        );
    }

    #[test]
    fn eval_invalid_identifier() {
        let store = Store::default();
        assert_eq!(
            eval_expr("a1", &store),
            Err(Error::InvalidIdentifier("a1".to_string()))
        );
    }

    #[test]
    fn eval_division_by_zero() {
        let store = Store::default();
        assert_eq!(eval_expr("5/0", &store), Err(Error::DivisionByZero));
    }

    #[test]
    fn eval_missing_operand() {
        let mut store = Store::default();
        store.define("a", BigInt::from(1));
        assert_matches!(eval_expr("-a", &store), Err(Error::InvalidExpression(_)));
        assert_matches!(eval(vec![], &store), Err(Error::InvalidExpression(_)));
    }

    #[test]
    #[tracing_test::traced_test]
    fn eval_surplus_operands() {
        let store = Store::default();
        let postfix = vec![Token::Number(BigInt::from(1)), Token::Number(BigInt::from(2))];
        assert_matches!(eval(postfix, &store), Err(Error::InvalidExpression(_)));
        assert!(logs_contain("surplus values"));
    }
}
