//! The NFA engine: epsilon-closure, multistate transition, matching, and the
//! subset/powerset construction that lifts an NFA to a DFA.
use std::collections::BTreeSet;

use crate::automaton::{Fa, State};
use crate::builder::FaBuilder;
use crate::dfa;
use crate::symbol::Symbol;

/// The set of states reachable from `q` by zero or more epsilon edges.
pub(crate) fn epsilon_closure(fa: &Fa, q: State) -> BTreeSet<State> {
    let mut closure = BTreeSet::new();
    closure.insert(q);

    let Ok(column) = fa.alphabet().binary_search(&Symbol::Epsilon) else {
        return closure;
    };

    let mut worklist = vec![q];
    while let Some(current) = worklist.pop() {
        for &(from, to) in &fa.table()[column] {
            if from == current && closure.insert(to) {
                worklist.push(to);
            }
        }
    }
    closure
}

fn close(fa: &Fa, states: &BTreeSet<State>) -> BTreeSet<State> {
    let mut closed = BTreeSet::new();
    for &q in states {
        closed.extend(epsilon_closure(fa, q));
    }
    closed
}

/// δ({Q}, s) for s ≠ ε: union of epsilon-closures of states reachable from the
/// epsilon-closure of Q on `s`. Returns the empty set (never fails) if `s` is not in Σ.
pub(crate) fn delta_symbol(fa: &Fa, states: &BTreeSet<State>, s: Symbol) -> BTreeSet<State> {
    let Ok(column) = fa.alphabet().binary_search(&s) else {
        return BTreeSet::new();
    };

    let closed = close(fa, states);
    let mut targets = BTreeSet::new();
    for &(from, to) in &fa.table()[column] {
        if closed.contains(&from) {
            targets.insert(to);
        }
    }
    close(fa, &targets)
}

/// δ({Q}, w): folds δ over the symbols of w, starting from the *un-closed* {q0} — matching
/// the original source's literal behavior (an NFA only accepts the empty string when q0
/// itself is final, not when a final is epsilon-reachable from it; Thompson's construction
/// always marks q0 final directly when that's meant to hold, e.g. Kleene star).
fn delta_word(fa: &Fa, states: BTreeSet<State>, input: &[u8]) -> BTreeSet<State> {
    input.iter().fold(states, |acc, &byte| delta_symbol(fa, &acc, Symbol::Byte(byte)))
}

pub fn is_match(fa: &Fa, input: &[u8]) -> bool {
    let start: BTreeSet<State> = std::iter::once(fa.initial()).collect();
    delta_word(fa, start, input).iter().any(|&q| fa.is_final(q))
}

/// Leftmost search over set-states, same eager contract as the DFA finder.
pub fn find_next(fa: &Fa, input: &[u8]) -> (usize, usize) {
    if input.is_empty() {
        return (0, 0);
    }

    for start in 0..input.len() {
        let mut states: BTreeSet<State> = std::iter::once(fa.initial()).collect();
        let mut pos = start;
        let mut abandoned = false;

        while !states.iter().any(|&q| fa.is_final(q)) {
            if pos >= input.len() {
                abandoned = true;
                break;
            }
            let next = delta_symbol(fa, &states, Symbol::Byte(input[pos]));
            if next.is_empty() {
                abandoned = true;
                break;
            }
            states = next;
            pos += 1;
        }

        if !abandoned {
            return (start, pos);
        }
    }

    (input.len(), input.len())
}

/// Names a subset by its sorted member indices joined with `-`, avoiding the
/// decimal-concatenation ambiguity a bare join would have (`"1-2"` vs `"12"`).
fn name_of(states: &BTreeSet<State>) -> String {
    states.iter().map(|q| q.0.to_string()).collect::<Vec<_>>().join("-")
}

/// Subset (powerset) construction, lifting an NFA to an equivalent DFA over Σ \ {ε}.
pub fn make_deterministic(fa: &Fa) -> Fa {
    let initial = close(fa, &std::iter::once(fa.initial()).collect());
    let mut builder = FaBuilder::new().initial_state(name_of(&initial));
    if initial.iter().any(|&q| fa.is_final(q)) {
        builder = builder.final_state(name_of(&initial));
    }

    let mut subsets = vec![initial];
    let mut cursor = 0;
    while cursor < subsets.len() {
        let current = subsets[cursor].clone();
        for &symbol in fa.alphabet() {
            if symbol.is_epsilon() {
                continue;
            }
            let target = delta_symbol(fa, &current, symbol);
            if !subsets.contains(&target) {
                if target.iter().any(|&q| fa.is_final(q)) {
                    builder = builder.final_state(name_of(&target));
                }
                subsets.push(target.clone());
            }
            builder = builder.transition(name_of(&current), symbol, name_of(&target));
        }
        cursor += 1;
    }

    builder.build()
}

/// Determinize, then apply DFA normalization.
pub fn normalize(fa: &Fa) -> Fa {
    dfa::normalize(&make_deterministic(fa))
}
