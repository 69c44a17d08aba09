//! esfront_parser: Builds ESTree-shaped trees from JavaScript source.
//!
//! The parser pulls tokens from the tokenizer on demand, choosing the
//! lexical mode per request, and disambiguates constructs from an explicit
//! stack of ancestor contexts.

mod context;
mod declarations;
mod expressions;
mod options;
mod parser;
mod precedence;
mod predicates;
mod statements;

pub use context::{Frame, Position};
pub use options::ParserOptions;
pub use parser::{parse_program, ParseResult, Parser};
