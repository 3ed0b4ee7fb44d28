//! The DFA engine: deterministic transition, whole-string match, leftmost search,
//! reverse-to-NFA, and the Brzozowski minimization driver.
use crate::automaton::{Fa, State};
use crate::builder::FaBuilder;
use crate::compose;
use crate::error::NoTransition;
use crate::nfa;
use crate::symbol::Symbol;

/// δ(q, s): binary-searches the alphabet, then the per-symbol transition list.
fn delta_symbol(fa: &Fa, q: State, s: Symbol) -> Result<State, NoTransition> {
    let column = fa.alphabet().binary_search(&s).map_err(|_| NoTransition(q, s))?;
    fa.table()[column]
        .binary_search_by_key(&q, |&(from, _)| from)
        .map(|i| fa.table()[column][i].1)
        .map_err(|_| NoTransition(q, s))
}

/// δ(q, w): folds δ left-to-right over the input bytes.
fn delta_word(fa: &Fa, q: State, input: &[u8]) -> Result<State, NoTransition> {
    input.iter().try_fold(q, |state, &byte| delta_symbol(fa, state, Symbol::Byte(byte)))
}

/// Whole-string recognition. A `NoTransition` failure during evaluation is a reject, not
/// a propagated error.
pub fn is_match(fa: &Fa, input: &[u8]) -> bool {
    match delta_word(fa, fa.initial(), input) {
        Ok(state) => fa.is_final(state),
        Err(_) => false,
    }
}

/// Eager leftmost search: for each start position, advances until an accepting state is
/// first entered, or until the automaton runs out of input or transitions — whichever
/// happens first. Not the longest match; this is a deliberate contract.
pub fn find_next(fa: &Fa, input: &[u8]) -> (usize, usize) {
    if input.is_empty() {
        return (0, 0);
    }

    for start in 0..input.len() {
        let mut state = fa.initial();
        let mut pos = start;
        let mut abandoned = false;

        while !fa.is_final(state) {
            if pos >= input.len() {
                abandoned = true;
                break;
            }
            match delta_symbol(fa, state, Symbol::Byte(input[pos])) {
                Ok(next) => {
                    state = next;
                    pos += 1;
                }
                Err(_) => {
                    abandoned = true;
                    break;
                }
            }
        }

        if !abandoned {
            return (start, pos);
        }
    }

    (input.len(), input.len())
}

/// Returns the (typically NFA) automaton accepting the reverse language: a new initial
/// state with epsilon edges to every original final, every edge reversed, and the
/// original initial state as the sole final. Representation-generic: used on DFAs
/// throughout the Brzozowski pipeline, but makes no assumption about `kind`.
pub(crate) fn reverse(fa: &Fa) -> Fa {
    const NEW_INITIAL: &str = "rev";

    let mut builder = FaBuilder::new().initial_state(NEW_INITIAL);
    for &f in fa.finals() {
        builder = builder.transition(NEW_INITIAL, Symbol::Epsilon, f.0.to_string());
    }
    for (i, symbol) in fa.alphabet().iter().enumerate() {
        for &(from, to) in &fa.table()[i] {
            builder = builder.transition(to.0.to_string(), *symbol, from.0.to_string());
        }
    }
    builder = builder.final_state(fa.initial().0.to_string());
    builder.build()
}

/// Brzozowski minimization: reverse, determinize, reverse, determinize. Requires the
/// input to already have its dead states removed for the subset construction to only ever
/// see reachable states.
pub fn minimize_states(fa: &Fa) -> Fa {
    debug_assert!(fa.is_dfa(), "minimize_states expects a DFA");

    if fa.finals().is_empty() {
        return fa.clone();
    }

    let reversed_once = reverse(fa);
    let determinized_once = nfa::make_deterministic(&reversed_once);
    let reversed_twice = reverse(&determinized_once);
    nfa::make_deterministic(&reversed_twice)
}

/// `remove_dead_states()` then `minimize_states()`.
pub fn normalize(fa: &Fa) -> Fa {
    let trimmed = compose::remove_dead_states(fa);
    minimize_states(&trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn binary_divisible_by_three() -> Fa {
        // Classic mod-3 DFA over {0,1}, states are remainders.
        FaBuilder::new()
            .initial_state("0")
            .transition("0", Symbol::Byte(b'0'), "0")
            .transition("0", Symbol::Byte(b'1'), "1")
            .transition("1", Symbol::Byte(b'0'), "2")
            .transition("1", Symbol::Byte(b'1'), "0")
            .transition("2", Symbol::Byte(b'0'), "1")
            .transition("2", Symbol::Byte(b'1'), "2")
            .final_state("0")
            .build()
    }

    #[test]
    fn matches_multiples_of_three() {
        let fa = binary_divisible_by_three();
        assert!(fa.is_dfa());
        assert!(fa.is_match(b"0"));
        assert!(fa.is_match(b"110")); // 6
        assert!(!fa.is_match(b"10")); // 2
        assert!(fa.is_match(b"1001")); // 9
    }

    #[test]
    fn find_next_is_eager_not_longest() {
        // a*b, searched against "aab": should stop at the first 'b' reached via any prefix
        // of a's, not necessarily consuming every leading 'a'.
        let fa = FaBuilder::new()
            .initial_state("0")
            .transition("0", Symbol::Byte(b'a'), "0")
            .transition("0", Symbol::Byte(b'b'), "1")
            .final_state("1")
            .build();

        assert_eq!(fa.find_next(b"aab"), (0, 3));
    }

    #[test]
    fn find_next_on_empty_input_is_degenerate() {
        let fa = binary_divisible_by_three();
        assert_eq!(fa.find_next(b""), (0, 0));
    }

    #[test]
    fn reverse_then_reverse_accepts_same_language() {
        let fa = binary_divisible_by_three();
        let twice = nfa::make_deterministic(&reverse(&nfa::make_deterministic(&reverse(&fa))));
        for w in ["", "0", "1", "110", "10", "1001", "111111"] {
            assert_eq!(fa.is_match(w.as_bytes()), twice.is_match(w.as_bytes()), "mismatch for {w:?}");
        }
    }

    #[test]
    fn normalize_is_idempotent_in_language() {
        let fa = binary_divisible_by_three();
        let once = fa.normalize();
        let twice = once.normalize();
        for w in ["", "0", "1", "110", "10", "1001", "111111"] {
            assert_eq!(once.is_match(w.as_bytes()), twice.is_match(w.as_bytes()));
        }
    }
}
