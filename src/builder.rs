//! The automaton builder.
//!
//! Accumulates transitions by symbolic state names, then enumerates reachable states by
//! BFS from the initial name and emits either an NFA or a DFA depending on the transitions
//! actually present.
use std::collections::{HashMap, HashSet};

use crate::automaton::{Fa, Kind, State};
use crate::symbol::Symbol;

/// A chainable builder for [`Fa`] values, keyed on symbolic (string) state names.
///
/// Duplicate `(from, symbol, to)` triples are coalesced on insertion; `final_state` calls
/// are idempotent. States are numbered by discovery order during `build()`, not by
/// insertion order of `transition`/`final_state` calls.
#[derive(Default)]
pub struct FaBuilder {
    initial: Option<String>,
    order: Vec<(String, Symbol, String)>,
    seen: HashSet<(String, Symbol, String)>,
    finals: HashSet<String>,
}

impl FaBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the initial state's symbolic name. The last call wins.
    pub fn initial_state(mut self, name: impl Into<String>) -> Self {
        self.initial = Some(name.into());
        self
    }

    /// Adds one edge. `symbol` may be [`Symbol::Epsilon`].
    pub fn transition(mut self, from: impl Into<String>, symbol: Symbol, to: impl Into<String>) -> Self {
        let key = (from.into(), symbol, to.into());
        if self.seen.insert(key.clone()) {
            self.order.push(key);
        }
        self
    }

    /// Marks a state final.
    pub fn final_state(mut self, name: impl Into<String>) -> Self {
        self.finals.insert(name.into());
        self
    }

    /// Emits an automaton, classifying it as NFA or DFA from the accumulated transitions.
    ///
    /// # Panics
    ///
    /// Panics if no initial state was set.
    pub fn build(self) -> Fa {
        let initial = self.initial.expect("FaBuilder::build requires an initial state");

        // 1. Enumerate states reachable from the initial name by BFS, in the order each
        //    name was first observed as a transition's destination. This fixes the result
        //    deterministically as a function of insertion order, independent of how
        //    `transition` calls happened to be grouped.
        let mut states: Vec<String> = vec![initial.clone()];
        let mut index: HashMap<String, usize> = HashMap::new();
        index.insert(initial.clone(), 0);

        let mut cursor = 0;
        while cursor < states.len() {
            let current = states[cursor].clone();
            for (from, _, to) in &self.order {
                if *from == current && !index.contains_key(to) {
                    index.insert(to.clone(), states.len());
                    states.push(to.clone());
                }
            }
            cursor += 1;
        }
        let n_states = states.len();
        let q0 = State(index[&initial]);

        // 2. Alphabet: distinct symbols among transitions whose endpoints were discovered.
        //    A transition naming an unreached state contributes nothing (its source was
        //    never visited by the BFS above).
        let mut alphabet: Vec<Symbol> = self
            .order
            .iter()
            .filter(|(from, _, to)| index.contains_key(from) && index.contains_key(to))
            .map(|(_, symbol, _)| *symbol)
            .collect();
        alphabet.sort();
        alphabet.dedup();

        // 3. Transition table: one sorted (from, to) list per symbol.
        let mut table: Vec<Vec<(State, State)>> = vec![Vec::new(); alphabet.len()];
        for (from, symbol, to) in &self.order {
            let (Some(&fi), Some(&ti)) = (index.get(from), index.get(to)) else {
                continue;
            };
            let column = alphabet.binary_search(symbol).expect("symbol collected above");
            table[column].push((State(fi), State(ti)));
        }
        for column in &mut table {
            column.sort();
        }

        // 4. Final states. A name declared only via `final_state` — never an edge endpoint
        //    and not the initial name — is silently dropped.
        let mut finals: Vec<State> = self
            .finals
            .iter()
            .filter_map(|name| index.get(name).copied().map(State))
            .collect();
        finals.sort();
        finals.dedup();

        // 5. Classify: epsilon in the alphabet, or any symbol with more than one outgoing
        //    edge from the same state, makes this an NFA.
        let has_epsilon = alphabet.iter().any(|symbol| symbol.is_epsilon());
        let nondeterministic =
            has_epsilon || table.iter().any(|column| column.windows(2).any(|pair| pair[0].0 == pair[1].0));

        Fa::from_parts(
            if nondeterministic { Kind::Nfa } else { Kind::Dfa },
            q0,
            finals,
            alphabet,
            table,
            n_states,
        )
    }
}
