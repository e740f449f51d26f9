//! Picking the rule that applies to a counterparty.
//!
//! A query for an event type/subtype pair can match a general rule (no
//! counterparty) and a counterparty-specific override at the same time. The
//! override wins when present; the general rule applies only when it is the
//! sole candidate.

use crate::rule::CounterpartyScoped;

/// Select the best matching entry for `counterparty`.
///
/// - no candidates: `None`
/// - a single candidate: that candidate, whatever its counterparty (the server
///   already filtered the candidates)
/// - several candidates: the first one whose counterparty equals the requested
///   one (`None == None` counts as a match), or `None` if none does
///
/// `None` means "no rule", which callers handle like any other absent rule.
/// It is distinct from `Some(entry)` where the entry has no counterparty.
pub fn select_best_rule<'a, E>(entries: &'a [E], counterparty: Option<&str>) -> Option<&'a E>
where
    E: CounterpartyScoped,
{
    match entries {
        [] => None,
        [only] => Some(only),
        candidates => {
            let found = candidates
                .iter()
                .find(|entry| entry.counterparty() == counterparty);

            if found.is_none() {
                tracing::debug!(
                    candidates = candidates.len(),
                    counterparty = ?counterparty,
                    "no accounting rule matches the requested counterparty"
                );
            }

            found
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Candidate {
        tag: usize,
        counterparty: Option<String>,
    }

    impl CounterpartyScoped for Candidate {
        fn counterparty(&self) -> Option<&str> {
            self.counterparty.as_deref()
        }
    }

    fn candidate(tag: usize, counterparty: Option<&str>) -> Candidate {
        Candidate {
            tag,
            counterparty: counterparty.map(str::to_string),
        }
    }

    #[test]
    fn empty_list_has_no_rule() {
        let entries: Vec<Candidate> = Vec::new();
        assert_eq!(select_best_rule(&entries, None), None);
        assert_eq!(select_best_rule(&entries, Some("A")), None);
    }

    #[test]
    fn single_entry_is_returned_even_when_counterparty_differs() {
        let entries = vec![candidate(0, Some("A"))];

        assert_eq!(select_best_rule(&entries, Some("A")), Some(&entries[0]));
        assert_eq!(select_best_rule(&entries, Some("B")), Some(&entries[0]));
        assert_eq!(select_best_rule(&entries, None), Some(&entries[0]));
    }

    #[test]
    fn specific_rule_overrides_general_rule() {
        let entries = vec![candidate(0, None), candidate(1, Some("A"))];

        let best = select_best_rule(&entries, Some("A")).unwrap();
        assert_eq!(best.tag, 1);
    }

    #[test]
    fn unknown_counterparty_among_several_candidates_has_no_rule() {
        let entries = vec![candidate(0, None), candidate(1, Some("A"))];
        assert_eq!(select_best_rule(&entries, Some("B")), None);
    }

    #[test]
    fn general_request_takes_first_general_entry() {
        let entries = vec![candidate(0, None), candidate(1, None)];

        let best = select_best_rule(&entries, None).unwrap();
        assert_eq!(best.tag, 0);
    }

    #[test]
    fn general_request_does_not_match_specific_rules() {
        let entries = vec![candidate(0, Some("A")), candidate(1, Some("B"))];
        assert_eq!(select_best_rule(&entries, None), None);
    }

    #[test]
    fn input_is_left_untouched() {
        let entries = vec![
            candidate(0, Some("B")),
            candidate(1, None),
            candidate(2, Some("A")),
        ];
        let before = entries.clone();

        let _ = select_best_rule(&entries, Some("A"));
        let _ = select_best_rule(&entries, Some("C"));

        assert_eq!(entries, before);
    }

    fn counterparty_strategy() -> impl Strategy<Value = Option<String>> {
        prop::option::of(prop::sample::select(vec!["A", "B", "C"]).prop_map(str::to_string))
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: with two or more candidates the result is exactly the
        /// first candidate carrying the requested counterparty.
        #[test]
        fn several_candidates_resolve_to_first_exact_match(
            counterparties in prop::collection::vec(counterparty_strategy(), 2..8),
            requested in counterparty_strategy(),
        ) {
            let entries: Vec<Candidate> = counterparties
                .into_iter()
                .enumerate()
                .map(|(tag, counterparty)| Candidate { tag, counterparty })
                .collect();

            let expected = entries
                .iter()
                .position(|e| e.counterparty == requested);
            let got = select_best_rule(&entries, requested.as_deref()).map(|e| e.tag);

            prop_assert_eq!(got, expected);
        }

        /// Property: a lone candidate always wins.
        #[test]
        fn lone_candidate_always_wins(
            counterparty in counterparty_strategy(),
            requested in counterparty_strategy(),
        ) {
            let entries = vec![Candidate { tag: 0, counterparty }];
            prop_assert_eq!(select_best_rule(&entries, requested.as_deref()), Some(&entries[0]));
        }
    }
}
