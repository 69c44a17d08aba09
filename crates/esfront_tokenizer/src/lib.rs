//! esfront_tokenizer: Pull-based, mode-driven lexer.
//!
//! The parser asks for one token at a time and says, through a [`LexMode`],
//! which rules are eligible at that point:
//! - keyword rules can be switched off so keywords lex as identifiers
//! - a set of expected kinds can restrict the rule table
//! - template mode scans raw template text
//! - significant-newline mode turns a line break into a terminator

mod char_codes;
pub mod rules;
mod token;
mod tokenizer;

pub use token::{LexMode, Token};
pub use tokenizer::{Checkpoint, Tokenizer};
