mod error;
mod eval;
mod grammar;
mod lex;
mod normalize;
mod rpn;

pub mod session;
pub mod store;
pub mod token;

pub use error::Error;
pub use eval::eval;
pub use grammar::{is_expression, is_identifier, is_integer};
pub use lex::lex;
pub use normalize::normalize;
pub use rpn::to_postfix;
pub use session::{Reply, Session, HELP};
pub use store::Store;
pub use token::{Operator, Token};

pub type Result<T> = std::result::Result<T, Error>;
