//! The shared finite-automaton representation.
//!
//! `Fa` is a single immutable record tagged with a `Kind`, rather than a trait object —
//! the minimization pipeline downcasts a composed automaton back to its concrete variant
//! often enough that an explicit tag reads more plainly than a `dyn` boundary.
use std::fmt;

use crate::dfa;
use crate::error::FaError;
use crate::nfa;
use crate::regex;
use crate::symbol::Symbol;

/// A state index, local to one automaton.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct State(pub usize);

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q{}", self.0)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum Kind {
    Dfa,
    Nfa,
}

/// A finite automaton: either variant, sharing one representation.
///
/// Composition operators consume their operands by value, since the builder that produces
/// the result renumbers every state — reusing an operand's indices afterwards would be
/// meaningless.
#[derive(Clone, Debug)]
pub struct Fa {
    kind: Kind,
    q0: State,
    finals: Vec<State>,
    alphabet: Vec<Symbol>,
    table: Vec<Vec<(State, State)>>,
    n_states: usize,
}

impl Fa {
    pub(crate) fn from_parts(
        kind: Kind,
        q0: State,
        finals: Vec<State>,
        alphabet: Vec<Symbol>,
        table: Vec<Vec<(State, State)>>,
        n_states: usize,
    ) -> Self {
        Fa { kind, q0, finals, alphabet, table, n_states }
    }

    pub fn initial(&self) -> State {
        self.q0
    }

    pub fn finals(&self) -> &[State] {
        &self.finals
    }

    pub fn alphabet(&self) -> &[Symbol] {
        &self.alphabet
    }

    pub fn state_count(&self) -> usize {
        self.n_states
    }

    pub(crate) fn table(&self) -> &[Vec<(State, State)>] {
        &self.table
    }

    pub fn is_final(&self, q: State) -> bool {
        self.finals.binary_search(&q).is_ok()
    }

    pub fn is_dfa(&self) -> bool {
        matches!(self.kind, Kind::Dfa)
    }

    pub fn is_nfa(&self) -> bool {
        matches!(self.kind, Kind::Nfa)
    }

    /// Compiles a regex pattern into an automaton via Thompson's construction. The empty
    /// pattern accepts exactly the empty string.
    pub fn from_regex(pattern: &str) -> Result<Fa, FaError> {
        regex::compile(pattern)
    }

    /// Whole-string recognition.
    pub fn is_match(&self, input: &[u8]) -> bool {
        match self.kind {
            Kind::Dfa => dfa::is_match(self, input),
            Kind::Nfa => nfa::is_match(self, input),
        }
    }

    /// Convenience wrapper over [`Fa::is_match`] for UTF-8 input.
    pub fn is_match_str(&self, input: &str) -> bool {
        self.is_match(input.as_bytes())
    }

    /// Leftmost substring location. Eager: returns the first start position at which an
    /// accepting state is first entered, not the longest match.
    pub fn find_next(&self, input: &[u8]) -> (usize, usize) {
        match self.kind {
            Kind::Dfa => dfa::find_next(self, input),
            Kind::Nfa => nfa::find_next(self, input),
        }
    }

    /// Convenience wrapper over [`Fa::find_next`] for UTF-8 input; the returned offsets
    /// are byte offsets, which may split a multi-byte UTF-8 sequence.
    pub fn find_next_str(&self, input: &str) -> (usize, usize) {
        self.find_next(input.as_bytes())
    }

    /// Dead-state elimination followed by Brzozowski minimization (DFA), or
    /// determinization followed by the same (NFA).
    pub fn normalize(&self) -> Fa {
        match self.kind {
            Kind::Dfa => dfa::normalize(self),
            Kind::Nfa => nfa::normalize(self),
        }
    }
}
