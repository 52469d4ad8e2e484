//! Group sizes: split the field into groups whose sizes differ by at most one.

use crate::models::SchedulingError;

/// A remainder cannot be spread over groups whose maximum size is at or below this.
pub const MIN_SUBDIVIDABLE_GROUP_SIZE: usize = 4;

/// Plan the sizes of the groups for `total` participants, no group above `max_size`.
///
/// If `max_size` does not divide the field, as many groups as needed shrink
/// to `max_size - 1`; if there are not enough groups to absorb the remainder
/// that way, the maximum is lowered by one and the plan retried. The result
/// is sorted ascending, or descending when `large_first` is set.
pub fn plan_group_sizes(
    total: usize,
    max_size: usize,
    large_first: bool,
) -> Result<Vec<usize>, SchedulingError> {
    if total == 0 {
        return Err(SchedulingError::InvalidInput("no participants to split into groups".into()));
    }
    if max_size == 0 {
        return Err(SchedulingError::InvalidInput("maximum group size must be positive".into()));
    }

    let mut sizes = split(total, max_size)?;
    if large_first {
        sizes.sort_unstable_by(|a, b| b.cmp(a));
    } else {
        sizes.sort_unstable();
    }
    log::debug!("{} participants, max group size {}: groups {:?}", total, max_size, sizes);
    Ok(sizes)
}

fn split(total: usize, max_size: usize) -> Result<Vec<usize>, SchedulingError> {
    let full = total / max_size;
    let rem = total % max_size;
    if rem == 0 {
        return Ok(vec![max_size; full]);
    }
    if max_size <= MIN_SUBDIVIDABLE_GROUP_SIZE {
        return Err(SchedulingError::InvalidConfiguration(format!(
            "cannot arrange {} participants: groups would be smaller than {}",
            total, MIN_SUBDIVIDABLE_GROUP_SIZE
        )));
    }
    // Each group shrunk to max_size - 1 frees one seat; max_size - rem seats must go.
    let shrink = max_size - rem;
    if full + 1 >= shrink {
        let mut sizes = vec![max_size; full + 1 - shrink];
        sizes.extend(std::iter::repeat(max_size - 1).take(shrink));
        Ok(sizes)
    } else {
        split(total, max_size - 1)
    }
}
