//! Property-based tests for round machines and content rotation.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use party_rounds::content::{select_next, ContentPool, Deck, UsedIds};
use party_rounds::core::{Phase, RoundMachine};
use party_rounds::games::{NeverHaveIEverPhase, Statement, WouldYouRatherPhase};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::BTreeMap;

fn phases<P: Phase>() -> Vec<P> {
    P::table().phases().collect()
}

fn pool_of(size: usize) -> ContentPool<Statement> {
    let mut modes = BTreeMap::new();
    modes.insert(
        "original".to_string(),
        (0..size)
            .map(|i| Statement::new(format!("s{i}"), format!("statement {i}")))
            .collect(),
    );
    ContentPool::new(modes).unwrap()
}

fn run_attempts<P: Phase>(attempts: &[P]) -> Result<(), TestCaseError> {
    let mut machine = RoundMachine::<P>::new();

    for target in attempts {
        let before = machine.clone();
        match machine.transition(*target) {
            Ok(next) => {
                prop_assert!(P::table().allows(before.current(), *target));
                prop_assert_ne!(*target, P::INITIAL);
                prop_assert_eq!(next.current(), *target);
                prop_assert_eq!(next.previous(), Some(before.current()));
                prop_assert_eq!(next.history().len(), before.history().len() + 1);

                let mut expected = before.transition_history();
                expected.push(before.current());
                prop_assert_eq!(next.transition_history(), expected);
                machine = next;
            }
            Err(_) => {
                prop_assert!(!P::table().allows(before.current(), *target));
                prop_assert_eq!(&machine, &before);
            }
        }
        prop_assert!(machine.history().len() <= attempts.len());
    }

    let fresh = machine.reset();
    prop_assert_eq!(fresh.current(), P::INITIAL);
    prop_assert!(fresh.transition_history().is_empty());
    Ok(())
}

proptest! {
    #[test]
    fn never_have_i_ever_transitions_follow_table(
        attempts in prop::collection::vec(prop::sample::select(phases::<NeverHaveIEverPhase>()), 1..40)
    ) {
        run_attempts(&attempts)?;
    }

    #[test]
    fn would_you_rather_transitions_follow_table(
        attempts in prop::collection::vec(prop::sample::select(phases::<WouldYouRatherPhase>()), 1..40)
    ) {
        run_attempts(&attempts)?;
    }

    #[test]
    fn select_next_skips_excluded_until_exhausted(
        size in 1usize..12,
        mask in prop::collection::vec(any::<bool>(), 12),
        seed in any::<u64>(),
    ) {
        let pool = pool_of(size);
        let exclude: UsedIds = (0..size)
            .filter(|i| mask[*i])
            .map(|i| format!("s{i}"))
            .collect();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        let item = select_next(&pool, "original", &exclude, &mut rng);
        if exclude.len() < size {
            prop_assert!(!exclude.contains(&item.id));
        } else {
            prop_assert!(pool.items("original").contains(item));
        }
    }

    #[test]
    fn deck_is_a_permutation(size in 1usize..40, seed in any::<u64>()) {
        let pool = pool_of(size);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let deck = Deck::shuffled(&pool, &["original"], &mut rng);

        prop_assert_eq!(deck.remaining(), size);

        let mut drawn: Vec<String> = deck.map(|card| card.id).collect();
        let mut expected: Vec<String> = pool.items("original").iter().map(|s| s.id.clone()).collect();
        drawn.sort();
        expected.sort();
        prop_assert_eq!(drawn, expected);
    }

    #[test]
    fn phase_roundtrip_serialization(phase in prop::sample::select(phases::<WouldYouRatherPhase>())) {
        let json = serde_json::to_string(&phase).unwrap();
        let deserialized: WouldYouRatherPhase = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(phase, deserialized);
    }
}
