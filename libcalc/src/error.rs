#[derive(thiserror::Error, Debug, PartialEq, Clone)]
pub enum Error {
    #[error("Invalid expression - {0}")]
    InvalidExpression(String),

    #[error("Invalid identifier - {0}")]
    InvalidIdentifier(String),

    #[error("Invalid assignment - {0}")]
    InvalidAssignment(String),

    #[error("Unknown variable - {0}")]
    UnknownVariable(String),

    #[error("Unknown command - {0}")]
    UnknownCommand(String),

    #[error("Division by zero")]
    DivisionByZero,

    /// Exponent is negative or does not fit in a `u32`
    #[error("Invalid exponent - {0}")]
    InvalidExponent(String),
}
