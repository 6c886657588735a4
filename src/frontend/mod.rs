pub mod lexer;
pub mod token;
pub mod token_dumper;

pub use lexer::{Lexer, Span, Spanned};
pub use token::Token;
