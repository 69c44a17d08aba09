//! esfront_core: Shared building blocks for the esfront front end.
//!
//! Provides the bump arena that owns parsed trees and the text position
//! types used by tokens and error reports.

pub mod arena;
pub mod text;

pub use arena::Arena;
pub use text::{LineAndColumn, LineMap, TextPos, TextRange, TextSpan};
