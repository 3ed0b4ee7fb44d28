//! Property-based tests for the composition and normalization laws named in the crate's
//! testable-properties list, in the `proptest!` style used by `dandy`'s automata test suite
//! in the retrieval pack.
use fa_engine::Fa;
use proptest::prelude::*;

proptest! {
    /// Determinizing and minimizing a pattern must not change the language it accepts.
    #[test]
    fn normalize_preserves_language(s in "[ab]{0,10}") {
        let fa = Fa::from_regex("(a|b)*abb").unwrap();
        let normalized = fa.normalize();
        prop_assert_eq!(fa.is_match_str(&s), normalized.is_match_str(&s));
    }

    /// Concatenation is associative in the language it accepts, regardless of how the
    /// regex groups the three alternatives.
    #[test]
    fn concatenation_grouping_is_associative_in_language(s in "[abcdef]{0,8}") {
        let left = Fa::from_regex("(a|b)((c|d)(e|f))").unwrap();
        let right = Fa::from_regex("((a|b)(c|d))(e|f)").unwrap();
        prop_assert_eq!(left.is_match_str(&s), right.is_match_str(&s));
    }

    /// `a|b` and `b|a` accept the same language.
    #[test]
    fn alternation_is_commutative_in_language(s in "[ab]{0,6}") {
        let ab = Fa::from_regex("a|b").unwrap();
        let ba = Fa::from_regex("b|a").unwrap();
        prop_assert_eq!(ab.is_match_str(&s), ba.is_match_str(&s));
    }

    /// `(a|b)*` is closed under concatenation of two strings it already accepts.
    #[test]
    fn repeat_is_closed_under_concatenation(s in "[ab]{0,6}", t in "[ab]{0,6}") {
        let fa = Fa::from_regex("(a|b)*").unwrap();
        let combined = format!("{s}{t}");
        prop_assert!(fa.is_match_str(&combined));
    }

    /// Whatever `find_next` returns either spans a genuine match, or reports "no match" by
    /// collapsing to the input's length on both ends.
    #[test]
    fn find_next_result_is_internally_consistent(s in "[abcxyz]{0,12}") {
        let fa = Fa::from_regex("(a|b)*abb").unwrap();
        let (start, end) = fa.find_next_str(&s);
        prop_assert!(start <= end);
        prop_assert!(end <= s.len());
        if start < s.len() {
            prop_assert!(fa.is_match(&s.as_bytes()[start..end]));
        } else {
            prop_assert_eq!(start, s.len());
            prop_assert_eq!(end, s.len());
        }
    }

    /// Escaping a metacharacter makes it a literal, whatever character it is.
    #[test]
    fn escaped_char_is_always_literal(c in "[*|()]") {
        let pattern = format!("\\{c}");
        let fa = Fa::from_regex(&pattern).unwrap();
        prop_assert!(fa.is_match_str(&c));
    }
}
