//! Conversion from infix to postfix order
use tracing::debug;

use crate::{Error, Result, Token};

/// Reorder infix `tokens` into postfix order with the shunting-yard algorithm.
/// Parentheses are consumed and never appear in the output.
pub fn to_postfix(tokens: impl IntoIterator<Item = Token>) -> Result<Vec<Token>> {
    let mut output = vec![];
    let mut stack: Vec<Token> = vec![];

    for token in tokens {
        match token {
            Token::Operator(op) => {
                // All operators are left-associative, `^` included
                while let Some(Token::Operator(top)) = stack.last() {
                    if top.precedence() < op.precedence() {
                        break;
                    }
                    output.extend(stack.pop());
                }
                stack.push(token);
            }
            Token::ParenLeft => stack.push(token),
            Token::ParenRight => loop {
                match stack.pop() {
                    Some(Token::ParenLeft) => break,
                    Some(t) => output.push(t),
                    None => {
                        return Err(Error::InvalidExpression(
                            "unmatched closing parenthesis".to_string(),
                        ))
                    }
                }
            },
            Token::Number(_) | Token::Identifier(_) => output.push(token),
        }
    }

    while let Some(token) = stack.pop() {
        match token {
            Token::ParenLeft | Token::ParenRight => {
                return Err(Error::InvalidExpression(
                    "unmatched opening parenthesis".to_string(),
                ))
            }
            _ => output.push(token),
        }
    }

    debug!(
        "postfix: {}",
        output
            .iter()
            .map(|t| t.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    );
    Ok(output)
}
