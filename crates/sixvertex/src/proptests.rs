//! Property-based tests over reachable-state invariants: ice-rule
//! preservation, flip involution, sampler determinism, and acceptance
//! bounds. These cross several modules at once, unlike the per-module
//! unit tests placed alongside their subjects.

use proptest::prelude::*;

use crate::flip;
use crate::generator::{self, InitialState};
use crate::rng::SplitMix64;
use crate::sampler::{self, Weights};

fn size_strategy() -> impl Strategy<Value = usize> {
    2usize..16
}

fn initial_state_strategy() -> impl Strategy<Value = InitialState> {
    prop_oneof![Just(InitialState::High), Just(InitialState::Low)]
}

fn weights_strategy() -> impl Strategy<Value = Weights> {
    (0.05f64..5.0, 0.05f64..5.0, 0.05f64..5.0, 0.05f64..5.0, 0.05f64..5.0, 0.05f64..5.0)
        .prop_map(|(a1, a2, b1, b2, c1, c2)| Weights::new(a1, a2, b1, b2, c1, c2).unwrap())
}

proptest! {
    /// Any sequence of accepted heat-bath steps from a valid DWBC start
    /// leaves the lattice with zero ice-rule violations: the flip catalog
    /// only contains moves that preserve the rule at all four corners.
    #[test]
    fn ice_rule_survives_arbitrary_step_sequences(
        n in size_strategy(),
        variant in initial_state_strategy(),
        weights in weights_strategy(),
        seed in any::<u64>(),
        steps in 0usize..200,
    ) {
        let mut state = generator::generate(n, variant).unwrap();
        let mut index = flip::full_scan(&state);
        let mut rng = SplitMix64::new(seed);
        for _ in 0..steps {
            sampler::step(&mut state, &mut index, &mut rng, &weights);
        }
        prop_assert_eq!(state.count_ice_rule_violations(), 0);
    }

    /// Applying the same flip twice returns the lattice to its starting
    /// configuration (the catalog maps every pattern to a counterpart that
    /// maps back).
    #[test]
    fn flip_is_always_its_own_inverse(
        n in size_strategy(),
        variant in initial_state_strategy(),
        seed in any::<u64>(),
    ) {
        let state = generator::generate(n, variant).unwrap();
        let mut index = flip::full_scan(&state);
        prop_assume!(!index.is_empty());

        let mut rng = SplitMix64::new(seed);
        let slot = rng.gen_range(index.len());
        let anchor = index.get(slot).unwrap();

        let mut state = state;
        let before = state.vertices().to_vec();
        flip::flip(&mut state, &mut index, anchor).unwrap();
        flip::flip(&mut state, &mut index, anchor).unwrap();
        prop_assert_eq!(state.vertices(), before.as_slice());
    }

    /// Two independent runs from the same seed, on the same starting
    /// lattice, attempt and accept exactly the same sequence of flips.
    #[test]
    fn sampler_is_deterministic_for_a_fixed_seed(
        n in size_strategy(),
        variant in initial_state_strategy(),
        weights in weights_strategy(),
        seed in any::<u64>(),
        steps in 0usize..100,
    ) {
        let run = || {
            let mut state = generator::generate(n, variant).unwrap();
            let mut index = flip::full_scan(&state);
            let mut rng = SplitMix64::new(seed);
            let mut outcomes = Vec::new();
            for _ in 0..steps {
                outcomes.push(sampler::step(&mut state, &mut index, &mut rng, &weights));
            }
            (state.vertices().to_vec(), outcomes)
        };
        prop_assert_eq!(run(), run());
    }

    /// The flippable index after any number of steps always agrees with an
    /// independent brute-force recount of every block.
    #[test]
    fn flippable_index_matches_brute_force_after_steps(
        n in size_strategy(),
        variant in initial_state_strategy(),
        weights in weights_strategy(),
        seed in any::<u64>(),
        steps in 0usize..100,
    ) {
        let mut state = generator::generate(n, variant).unwrap();
        let mut index = flip::full_scan(&state);
        let mut rng = SplitMix64::new(seed);
        for _ in 0..steps {
            sampler::step(&mut state, &mut index, &mut rng, &weights);
        }

        let mut expected = 0usize;
        for rt in 0..n - 1 {
            for cl in 0..n - 1 {
                if flip::lookup(flip::corners_at(&state, rt, cl)).is_some() {
                    expected += 1;
                }
            }
        }
        prop_assert_eq!(index.len(), expected);
    }
}
