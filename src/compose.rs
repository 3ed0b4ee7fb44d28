//! Thompson composition operators: concatenate, alternate, repeat, and dead-state
//! elimination. All three composition operators consume their operands and introduce
//! epsilon transitions, always producing an NFA.
use crate::automaton::{Fa, State};
use crate::builder::FaBuilder;
use crate::symbol::Symbol;

/// Disambiguates state names from two operand automata with a tag prefix.
fn prefix(tag: u8, state: State) -> String {
    format!("{}-{}", tag, state.0)
}

fn copy_transitions(builder: FaBuilder, fa: &Fa, tag: u8) -> FaBuilder {
    let mut builder = builder;
    for (i, symbol) in fa.alphabet().iter().enumerate() {
        for &(from, to) in &fa.table()[i] {
            builder = builder.transition(prefix(tag, from), *symbol, prefix(tag, to));
        }
    }
    builder
}

/// `concatenate(A, B)`: A's finals gain an epsilon edge into B's initial; the result's
/// finals are exactly B's finals.
pub fn concatenate(a: Fa, b: Fa) -> Fa {
    let mut builder = FaBuilder::new().initial_state(prefix(1, a.initial()));
    builder = copy_transitions(builder, &a, 1);
    for &f in a.finals() {
        builder = builder.transition(prefix(1, f), Symbol::Epsilon, prefix(2, b.initial()));
    }
    builder = copy_transitions(builder, &b, 2);
    for &f in b.finals() {
        builder = builder.final_state(prefix(2, f));
    }
    builder.build()
}

/// `alternate(A, B)`: a fresh initial state with epsilon edges to both operands' initials;
/// finals are the union of both operands' finals.
pub fn alternate(a: Fa, b: Fa) -> Fa {
    const ROOT: &str = "alt";

    let mut builder = FaBuilder::new()
        .initial_state(ROOT)
        .transition(ROOT, Symbol::Epsilon, prefix(1, a.initial()))
        .transition(ROOT, Symbol::Epsilon, prefix(2, b.initial()));

    builder = copy_transitions(builder, &a, 1);
    builder = copy_transitions(builder, &b, 2);
    for &f in a.finals() {
        builder = builder.final_state(prefix(1, f));
    }
    for &f in b.finals() {
        builder = builder.final_state(prefix(2, f));
    }
    builder.build()
}

/// `repeat(A)`: Kleene closure. A's initial becomes final (accepts ε), and every final
/// gains an epsilon edge back to the initial (zero or more repetitions).
pub fn repeat(a: Fa) -> Fa {
    let root = prefix(1, a.initial());
    let mut builder = FaBuilder::new().initial_state(root.clone()).final_state(root.clone());
    builder = copy_transitions(builder, &a, 1);
    for &f in a.finals() {
        builder = builder.transition(prefix(1, f), Symbol::Epsilon, root.clone());
    }
    builder.build()
}

/// A state is dead if it is unreachable from q0, or no final is reachable from it. Every
/// `Fa` produced by [`FaBuilder`] already has all its states reachable from q0 (that's how
/// the BFS enumeration in `build()` finds them), so in practice this only ever prunes
/// states that cannot reach a final — the "unreachable" half is kept for automata built
/// directly rather than through the builder.
pub fn remove_dead_states(fa: &Fa) -> Fa {
    let n = fa.state_count();
    let mut forward: Vec<Vec<State>> = vec![Vec::new(); n];
    let mut backward: Vec<Vec<State>> = vec![Vec::new(); n];
    for column in fa.table() {
        for &(from, to) in column {
            forward[from.0].push(to);
            backward[to.0].push(from);
        }
    }

    let reachable = reachable_from(fa.initial(), &forward, n);

    let mut co_reachable = vec![false; n];
    let mut stack: Vec<State> = Vec::new();
    for &f in fa.finals() {
        if !co_reachable[f.0] {
            co_reachable[f.0] = true;
            stack.push(f);
        }
    }
    while let Some(q) = stack.pop() {
        for &p in &backward[q.0] {
            if !co_reachable[p.0] {
                co_reachable[p.0] = true;
                stack.push(p);
            }
        }
    }

    let is_dead = |q: State| !reachable[q.0] || !co_reachable[q.0];

    let mut builder = FaBuilder::new().initial_state(fa.initial().0.to_string());
    if is_dead(fa.initial()) {
        return builder.build();
    }

    for (i, symbol) in fa.alphabet().iter().enumerate() {
        for &(from, to) in &fa.table()[i] {
            if !is_dead(from) && !is_dead(to) {
                builder = builder.transition(from.0.to_string(), *symbol, to.0.to_string());
            }
        }
    }
    for &f in fa.finals() {
        if !is_dead(f) {
            builder = builder.final_state(f.0.to_string());
        }
    }
    builder.build()
}

fn reachable_from(start: State, forward: &[Vec<State>], n: usize) -> Vec<bool> {
    let mut seen = vec![false; n];
    seen[start.0] = true;
    let mut stack = vec![start];
    while let Some(q) = stack.pop() {
        for &next in &forward[q.0] {
            if !seen[next.0] {
                seen[next.0] = true;
                stack.push(next);
            }
        }
    }
    seen
}
