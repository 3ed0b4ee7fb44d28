//! The regex frontend: tokenizer plus a handwritten shift/reduce parser that drives
//! Thompson's construction through [`crate::compose`].
mod lexer;
mod parser;

use crate::automaton::Fa;
use crate::builder::FaBuilder;
use crate::error::FaError;

/// Compiles `pattern` into an automaton. The empty pattern is a special case handled here
/// rather than in the parser: it accepts exactly the empty string, with no tokens to lex.
pub(crate) fn compile(pattern: &str) -> Result<Fa, FaError> {
    if pattern.is_empty() {
        return Ok(FaBuilder::new().initial_state("0").final_state("0").build());
    }

    let tokens = lexer::lex(pattern.as_bytes()).map_err(|_| FaError::BadRegex(pattern.to_owned()))?;
    parser::parse(tokens).map_err(|_| FaError::BadRegex(pattern.to_owned()))
}
