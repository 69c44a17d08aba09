//! Helpers shared by the cross-crate test suites under `tests/`.
//!
//! Each helper owns the arenas it parses into, so callers only deal with
//! source strings, printed text and errors.

use esfront_ast::to_estree_json;
use esfront_core::Arena;
use esfront_diagnostics::SyntaxError;
use esfront_parser::parse_program;
use esfront_printer::generate;

/// Parse `source`, print the tree, and parse the printed text again.
///
/// Returns the printed text when the second tree equals the first, and a
/// description of what went wrong otherwise.
pub fn round_trip(source: &str) -> Result<String, String> {
    let arena = Arena::new();
    let first = parse_program(&arena, source).map_err(|e| format!("parse of {source:?} failed: {e}"))?;
    let printed = generate(first);

    let reparse_arena = Arena::new();
    let second = parse_program(&reparse_arena, &printed)
        .map_err(|e| format!("re-parse failed: {e}\n--- printed ---\n{printed}"))?;
    if first != second {
        return Err(format!("tree changed after printing\n--- printed ---\n{printed}"));
    }

    // Printing is stable once normalized.
    let again = generate(second);
    if again != printed {
        return Err(format!("printing is not stable\n--- first ---\n{printed}\n--- second ---\n{again}"));
    }
    Ok(printed)
}

/// Whether `left` and `right` parse to equal trees.
pub fn same_tree(left: &str, right: &str) -> Result<bool, SyntaxError> {
    let left_arena = Arena::new();
    let right_arena = Arena::new();
    let left = parse_program(&left_arena, left)?;
    let right = parse_program(&right_arena, right)?;
    Ok(left == right)
}

/// The error `source` fails with, or `None` if it parses.
pub fn parse_error(source: &str) -> Option<SyntaxError> {
    let arena = Arena::new();
    parse_program(&arena, source).err()
}

/// The ESTree JSON for `source`.
pub fn estree(source: &str) -> Result<serde_json::Value, SyntaxError> {
    let arena = Arena::new();
    let program = parse_program(&arena, source)?;
    Ok(to_estree_json(program))
}
