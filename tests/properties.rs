//! Property-based tests for the scheduling invariants using proptest.

use proptest::prelude::*;
use std::collections::{HashMap, HashSet};
use tournament_scheduler::{
    assign_groups, build_bracket, plan_group_sizes, schedule_round_robin, Criterion, Entrant,
    SchedulingError, MAX_FIRST_SLOT_IMBALANCE, MIN_SUBDIVIDABLE_GROUP_SIZE,
};

// Whether the planner can split `total` under `max_size`: walk the maximum down
// until it divides the field or can absorb the remainder, failing once it
// reaches the smallest subdividable size with a remainder left.
fn split_possible(total: usize, max_size: usize) -> bool {
    let mut m = max_size;
    loop {
        let (full, rem) = (total / m, total % m);
        if rem == 0 {
            return true;
        }
        if m <= MIN_SUBDIVIDABLE_GROUP_SIZE {
            return false;
        }
        if full + 1 >= m - rem {
            return true;
        }
        m -= 1;
    }
}

// Strategy for a field: total size plus a max group size in [5, total]
fn field_strategy() -> impl Strategy<Value = (usize, usize)> {
    (5usize..=120).prop_flat_map(|total| (Just(total), 5usize..=total))
}

proptest! {
    #[test]
    fn group_sizes_sum_and_stay_within_one((total, max_size) in field_strategy(), large_first in any::<bool>()) {
        let planned = plan_group_sizes(total, max_size, large_first);
        prop_assert_eq!(planned.is_ok(), split_possible(total, max_size));
        match planned {
            Ok(sizes) => {
                let ordered = if large_first {
                    sizes.windows(2).all(|w| w[0] >= w[1])
                } else {
                    sizes.windows(2).all(|w| w[0] <= w[1])
                };
                prop_assert!(ordered, "sizes {:?} not ordered for large_first={}", sizes, large_first);
                prop_assert_eq!(sizes.iter().sum::<usize>(), total);
                let max = *sizes.iter().max().unwrap();
                let min = *sizes.iter().min().unwrap();
                prop_assert!(max - min <= 1);
                prop_assert!(max <= max_size);
                let distinct: HashSet<_> = sizes.iter().collect();
                prop_assert!(distinct.len() <= 2);
            }
            Err(e) => prop_assert!(matches!(e, SchedulingError::InvalidConfiguration(_))),
        }
    }

    #[test]
    fn groups_partition_the_field(
        (total, max_size) in field_strategy(),
        clubs in prop::collection::vec(0u8..6, 120),
    ) {
        let Ok(sizes) = plan_group_sizes(total, max_size, false) else {
            return Ok(());
        };
        let ranked: Vec<usize> = (0..total).collect();
        let club = |p: &usize| Some(clubs[*p]);
        let criteria: [Criterion<'_, usize, u8>; 1] = [&club];
        let groups = assign_groups(&sizes, &ranked, &criteria).unwrap();

        prop_assert_eq!(groups.iter().map(Vec::len).collect::<Vec<_>>(), sizes);
        let mut seen: Vec<usize> = groups.into_iter().flatten().collect();
        seen.sort_unstable();
        prop_assert_eq!(seen, ranked);
    }

    #[test]
    fn clubs_banded_by_rank_never_share_a_group(
        group_count in 1usize..6,
        group_size in 2usize..7,
        offset in 0usize..5,
    ) {
        // Clubs hold runs of `group_count` consecutive ranks, starting mid-run, so
        // there are at least `group_size` clubs and a plain snake would clash.
        let offset = offset % group_count;
        let total = group_count * group_size;
        let clubs: Vec<usize> = (0..total).map(|p| (p + offset) / group_count).collect();

        let ranked: Vec<usize> = (0..total).collect();
        let club = |p: &usize| Some(clubs[*p]);
        let criteria: [Criterion<'_, usize, usize>; 1] = [&club];
        let sizes = vec![group_size; group_count];
        let groups = assign_groups(&sizes, &ranked, &criteria).unwrap();
        for group in &groups {
            let distinct: HashSet<_> = group.iter().map(|p| clubs[*p]).collect();
            prop_assert_eq!(distinct.len(), group.len());
        }
    }

    #[test]
    fn round_robin_covers_every_pair_once(n in 2usize..=16) {
        let matches = schedule_round_robin(n).unwrap();
        prop_assert_eq!(matches.len(), n * (n - 1) / 2);
        let unordered: HashSet<_> = matches.iter().map(|p| p.normalized()).collect();
        prop_assert_eq!(unordered.len(), matches.len());
        prop_assert!(matches.iter().all(|p| p.first != p.second && p.first < n && p.second < n));
    }

    #[test]
    fn odd_round_robin_balances_first_slots(half in 1usize..=60) {
        let n = 2 * half + 1;
        let matches = schedule_round_robin(n).unwrap();
        let mut firsts: HashMap<usize, usize> = (0..n).map(|m| (m, 0)).collect();
        for p in &matches {
            *firsts.get_mut(&p.first).unwrap() += 1;
        }
        let max = firsts.values().max().unwrap();
        let min = firsts.values().min().unwrap();
        prop_assert!(max - min <= MAX_FIRST_SLOT_IMBALANCE);
    }

    #[test]
    fn bracket_seats_every_seed_once(cut in 4usize..=100) {
        let bracket = build_bracket(cut).unwrap();
        prop_assert!((1usize << bracket.num_rounds) >= cut);
        prop_assert!(1usize << (bracket.num_rounds - 1) < cut);

        let mut seeds: Vec<usize> = bracket.rounds[0]
            .iter()
            .flat_map(|m| [m.top, m.bottom])
            .flatten()
            .map(|e| match e {
                Entrant::Seed(s) => s,
                other => panic!("unexpected first-round entrant {other:?}"),
            })
            .collect();
        seeds.sort_unstable();
        prop_assert_eq!(seeds, (0..cut).collect::<Vec<_>>());

        let byes = bracket.byes().count();
        prop_assert_eq!(byes, (1usize << bracket.num_rounds) - cut);
        // No first-round match is empty on both sides.
        prop_assert!(bracket.rounds[0].iter().all(|m| m.top.is_some() || m.bottom.is_some()));
        prop_assert_eq!(bracket.rounds.last().unwrap().len(), 1);
    }
}
