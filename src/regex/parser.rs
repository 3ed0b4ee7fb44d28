//! Shift/reduce regex parser. A handwritten loop, not a parser generator and not
//! recursion: each iteration inspects the top of the token stack (and, for the
//! concatenation and alternation rules, one token of lookahead) and either reduces or
//! shifts, in a fixed priority order.
use crate::automaton::Fa;
use crate::builder::FaBuilder;
use crate::compose;
use crate::error::BadParse;
use crate::symbol::Symbol;

use super::lexer::TokenKind;

fn single_char_fa(c: u8) -> Fa {
    FaBuilder::new()
        .initial_state("0")
        .transition("0", Symbol::Byte(c), "1")
        .final_state("1")
        .build()
}

fn ends_with(stack: &[TokenKind], pattern: &[TokenKind]) -> bool {
    stack.len() >= pattern.len() && &stack[stack.len() - pattern.len()..] == pattern
}

/// Drives the shift/reduce loop over `tokens`, returning the single resulting automaton.
/// `Err(BadParse)` means the automaton stack never collapsed to exactly one entry. A
/// stray, never-reduced token (an unmatched paren, a dangling `|`) does not by itself fail
/// parsing as long as exactly one automaton survives on the stack — this mirrors the
/// original parser, which only inspects the automaton stack's final size.
pub(crate) fn parse(tokens: Vec<TokenKind>) -> Result<Fa, BadParse> {
    let mut token_stack: Vec<TokenKind> = Vec::new();
    let mut fa_stack: Vec<Fa> = Vec::new();
    let mut lookahead = tokens.into_iter().peekable();

    loop {
        // Priority 1: a bare CHAR always reduces to an EXPR immediately.
        if let Some(&TokenKind::Char(c)) = token_stack.last() {
            token_stack.pop();
            token_stack.push(TokenKind::Expr);
            fa_stack.push(single_char_fa(c));
            continue;
        }

        // Priority 2: EXPR EXPR reduces by concatenation, unless the next unshifted token
        // is STAR — in that case the second EXPR must wait to absorb the star first.
        if ends_with(&token_stack, &[TokenKind::Expr, TokenKind::Expr])
            && !matches!(lookahead.peek(), Some(TokenKind::Star))
        {
            token_stack.truncate(token_stack.len() - 2);
            token_stack.push(TokenKind::Expr);
            let b = fa_stack.pop().expect("EXPR EXPR implies two pending automata");
            let a = fa_stack.pop().expect("EXPR EXPR implies two pending automata");
            fa_stack.push(compose::concatenate(a, b));
            continue;
        }

        // Priority 3: EXPR STAR reduces by Kleene closure.
        if ends_with(&token_stack, &[TokenKind::Expr, TokenKind::Star]) {
            token_stack.truncate(token_stack.len() - 2);
            token_stack.push(TokenKind::Expr);
            let a = fa_stack.pop().expect("EXPR STAR implies one pending automaton");
            fa_stack.push(compose::repeat(a));
            continue;
        }

        // Priority 4: EXPR VBAR EXPR reduces by alternation, unless the next unshifted
        // token could still extend the right operand by concatenation (a CHAR or an
        // LPAREN starting a group) — that operand has to be fully built first, or
        // alternation would grab only its first token.
        if ends_with(&token_stack, &[TokenKind::Expr, TokenKind::VBar, TokenKind::Expr])
            && !matches!(lookahead.peek(), Some(TokenKind::Char(_)) | Some(TokenKind::LParen))
        {
            token_stack.truncate(token_stack.len() - 3);
            token_stack.push(TokenKind::Expr);
            let b = fa_stack.pop().expect("EXPR VBAR EXPR implies two pending automata");
            let a = fa_stack.pop().expect("EXPR VBAR EXPR implies two pending automata");
            fa_stack.push(compose::alternate(a, b));
            continue;
        }

        // Priority 5: parenthesized EXPR collapses without touching the automaton stack.
        if ends_with(&token_stack, &[TokenKind::LParen, TokenKind::Expr, TokenKind::RParen]) {
            token_stack.truncate(token_stack.len() - 3);
            token_stack.push(TokenKind::Expr);
            continue;
        }

        // No reduction applies: shift the next token, or stop if input is exhausted.
        match lookahead.next() {
            Some(token) => token_stack.push(token),
            None => break,
        }
    }

    if fa_stack.len() == 1 {
        Ok(fa_stack.pop().expect("checked len == 1"))
    } else {
        Err(BadParse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::regex::lexer::lex;

    fn parse_pattern(pattern: &str) -> Fa {
        parse(lex(pattern.as_bytes()).unwrap()).unwrap()
    }

    #[test]
    fn single_char() {
        let fa = parse_pattern("a");
        assert!(fa.is_match(b"a"));
        assert!(!fa.is_match(b"b"));
    }

    #[test]
    fn concatenation() {
        let fa = parse_pattern("ab");
        assert!(fa.is_match(b"ab"));
        assert!(!fa.is_match(b"a"));
    }

    #[test]
    fn star_binds_tighter_than_concatenation() {
        let fa = parse_pattern("ab*");
        assert!(fa.is_match(b"a"));
        assert!(fa.is_match(b"abbb"));
        assert!(!fa.is_match(b"ba"));
    }

    #[test]
    fn alternation() {
        let fa = parse_pattern("cat|dog");
        assert!(fa.is_match(b"cat"));
        assert!(fa.is_match(b"dog"));
        assert!(!fa.is_match(b"cow"));
    }

    #[test]
    fn grouping_controls_precedence() {
        let fa = parse_pattern("(cat|dog)s");
        assert!(fa.is_match(b"cats"));
        assert!(fa.is_match(b"dogs"));
        assert!(!fa.is_match(b"cat"));
    }

    #[test]
    fn a_lone_metacharacter_fails_to_parse() {
        // Nothing ever reduces to an EXPR, so the automaton stack is empty at the end.
        assert!(parse(lex(b"*").unwrap()).is_err());
        assert!(parse(lex(b")").unwrap()).is_err());
    }

    #[test]
    fn an_unmatched_open_paren_is_tolerated() {
        // A stray, never-reduced LPAREN doesn't fail parsing as long as the automaton
        // stack still collapses to one entry — matches the original parser's behavior.
        let fa = parse_pattern("(a");
        assert!(fa.is_match(b"a"));
    }

    #[test]
    fn bundled_scenario_a_or_b_star_abb() {
        let fa = parse_pattern("(a|b)*abb");
        assert!(fa.is_match(b"abb"));
        assert!(fa.is_match(b"aaabb"));
        assert!(fa.is_match(b"babaabb"));
        assert!(!fa.is_match(b"abbb"));
        assert!(!fa.is_match(b"ab"));
    }
}
