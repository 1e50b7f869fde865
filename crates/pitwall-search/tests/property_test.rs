use pitwall_core::{FeedbackLevel, FeedbackVector};
use pitwall_search::{CandidateGenerator, RankBy, SetupGrid};
use proptest::prelude::*;

fn arb_target() -> impl Strategy<Value = Option<FeedbackVector>> {
    let level = prop::sample::select(FeedbackLevel::ALL.to_vec());
    prop::option::of(prop::array::uniform5(level).prop_map(FeedbackVector::from_array))
}

fn arb_rank_by() -> impl Strategy<Value = RankBy> {
    prop_oneof![Just(RankBy::Confidence), Just(RankBy::Score)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn top_n_is_a_prefix_of_the_full_ranking(
        step_count in 1usize..=4,
        stride in 1usize..=2,
        n in 0usize..40,
        target in arb_target(),
        rank_by in arb_rank_by(),
    ) {
        let grid = SetupGrid::new(step_count, stride).unwrap();
        let generator = CandidateGenerator::new(grid).with_target(target).rank_by(rank_by);

        let all = generator.generate();
        let top = generator.top(n);
        prop_assert_eq!(top.len(), n.min(all.len()));
        prop_assert_eq!(top.as_slice(), &all[..top.len()]);
        prop_assert_eq!(generator.clone().parallel(false).top(n), top);
    }

    #[test]
    fn point_index_is_mixed_radix_over_levels(
        step_count in 1usize..=10,
        stride in 1usize..=3,
        pick in any::<prop::sample::Index>(),
    ) {
        let grid = SetupGrid::new(step_count, stride).unwrap();
        let index = pick.index(grid.len());
        let point = grid.point(index);

        // Re-encode the point's levels as a mixed-radix index.
        let radix = grid.levels().len();
        let encoded = point.to_array().iter().fold(0usize, |acc, v| {
            let level = grid.levels().iter().position(|l| l == v).unwrap();
            acc * radix + level
        });
        prop_assert_eq!(encoded, index);
    }
}
