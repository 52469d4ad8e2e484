//! Integration tests for group size planning.

use tournament_scheduler::{plan_group_sizes, SchedulingError};

#[test]
fn even_split_uses_max_size() {
    assert_eq!(plan_group_sizes(21, 7, false).unwrap(), vec![7, 7, 7]);
    assert_eq!(plan_group_sizes(30, 6, false).unwrap(), vec![6; 5]);
}

#[test]
fn remainder_shrinks_some_groups_by_one() {
    assert_eq!(plan_group_sizes(17, 7, false).unwrap(), vec![5, 6, 6]);
    assert_eq!(plan_group_sizes(20, 7, false).unwrap(), vec![6, 7, 7]);
    assert_eq!(plan_group_sizes(13, 5, false).unwrap(), vec![4, 4, 5]);
    assert_eq!(plan_group_sizes(23, 6, false).unwrap(), vec![5, 6, 6, 6]);
}

#[test]
fn large_first_orders_descending() {
    assert_eq!(plan_group_sizes(17, 7, true).unwrap(), vec![6, 6, 5]);
}

#[test]
fn small_field_becomes_single_group() {
    assert_eq!(plan_group_sizes(5, 7, false).unwrap(), vec![5]);
}

#[test]
fn small_groups_cannot_absorb_remainder() {
    assert!(matches!(
        plan_group_sizes(9, 4, false),
        Err(SchedulingError::InvalidConfiguration(_))
    ));
    // 6 with max 5 falls back to max 4, which leaves a remainder.
    assert!(matches!(
        plan_group_sizes(6, 5, false),
        Err(SchedulingError::InvalidConfiguration(_))
    ));
    assert_eq!(plan_group_sizes(8, 4, false).unwrap(), vec![4, 4]);
}

#[test]
fn rejects_empty_field_and_zero_max() {
    assert!(matches!(plan_group_sizes(0, 7, false), Err(SchedulingError::InvalidInput(_))));
    assert!(matches!(plan_group_sizes(10, 0, false), Err(SchedulingError::InvalidInput(_))));
}
