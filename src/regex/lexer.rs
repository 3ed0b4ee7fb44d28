//! Regex tokenizer. A flat scan over the pattern's bytes; `\` escapes the byte that
//! follows it, however it would otherwise be classified.
use crate::error::BadParse;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum TokenKind {
    Char(u8),
    Star,
    VBar,
    LParen,
    RParen,
    Expr,
}

/// Lexes a pattern into a flat token stream. A trailing unescaped `\` is a lex error: the
/// original source reads one past the end of the string in that case, which has no sound
/// Rust equivalent, so it is rejected here instead.
pub(crate) fn lex(pattern: &[u8]) -> Result<Vec<TokenKind>, BadParse> {
    let mut tokens = Vec::with_capacity(pattern.len());
    let mut bytes = pattern.iter().copied();

    while let Some(b) = bytes.next() {
        let token = match b {
            b'\\' => TokenKind::Char(bytes.next().ok_or(BadParse)?),
            b'*' => TokenKind::Star,
            b'|' => TokenKind::VBar,
            b'(' => TokenKind::LParen,
            b')' => TokenKind::RParen,
            other => TokenKind::Char(other),
        };
        tokens.push(token);
    }

    Ok(tokens)
}
