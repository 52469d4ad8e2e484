//! Group assignment: snake draft of a ranked field into groups, spreading clubs and countries.

use crate::logic::matching::maximum_matching;
use crate::models::SchedulingError;

/// Extracts one spread value (club, country, ...) from a participant.
/// `None` means the participant has no value and never clashes.
pub type Criterion<'a, T, K> = &'a dyn Fn(&T) -> Option<K>;

/// Fill groups of the given `sizes` from `participants`, which must be sorted best-first.
///
/// The draft runs in layers: each layer takes the groups that are not full
/// and have the fewest members, in index order on even layers and reversed
/// on odd ones (the snake), and hands them the next participants in rank
/// order. Within a layer participants are matched to groups so that nobody
/// joins a group already holding someone with the same value for any
/// criterion; when that is impossible the last criterion is dropped and the
/// layer retried, down to no criteria at all.
pub fn assign_groups<T, K>(
    sizes: &[usize],
    participants: &[T],
    criteria: &[Criterion<'_, T, K>],
) -> Result<Vec<Vec<T>>, SchedulingError>
where
    T: Clone,
    K: PartialEq,
{
    if sizes.is_empty() {
        return Err(SchedulingError::InvalidInput("no groups to fill".into()));
    }
    if sizes.contains(&0) {
        return Err(SchedulingError::InvalidInput("group sizes must be positive".into()));
    }
    let capacity: usize = sizes.iter().sum();
    if capacity != participants.len() {
        return Err(SchedulingError::InvalidInput(format!(
            "group sizes add up to {} but there are {} participants",
            capacity,
            participants.len()
        )));
    }

    let mut groups: Vec<Vec<T>> = sizes.iter().map(|&size| Vec::with_capacity(size)).collect();
    let mut next = 0;
    let mut layer = 0;
    while next < participants.len() {
        let mut draft = smallest_open_groups(&groups, sizes);
        if layer % 2 == 1 {
            draft.reverse();
        }
        let batch = &participants[next..next + draft.len()];
        let picks = match_layer(&groups, &draft, batch, criteria, layer)?;
        for (&group, &pick) in draft.iter().zip(&picks) {
            groups[group].push(batch[pick].clone());
        }
        log::debug!("layer {}: filled groups {:?}", layer, draft);
        next += draft.len();
        layer += 1;
    }
    Ok(groups)
}

/// Indices of the groups that still have room and hold the fewest members.
fn smallest_open_groups<T>(groups: &[Vec<T>], sizes: &[usize]) -> Vec<usize> {
    let open: Vec<usize> = (0..groups.len())
        .filter(|&g| groups[g].len() < sizes[g])
        .collect();
    let fewest = open.iter().map(|&g| groups[g].len()).min().unwrap_or(0);
    open.into_iter()
        .filter(|&g| groups[g].len() == fewest)
        .collect()
}

/// For each group of the layer, the index into `batch` of the participant it gets.
fn match_layer<T, K>(
    groups: &[Vec<T>],
    draft: &[usize],
    batch: &[T],
    criteria: &[Criterion<'_, T, K>],
    layer: usize,
) -> Result<Vec<usize>, SchedulingError>
where
    K: PartialEq,
{
    for active in (0..=criteria.len()).rev() {
        let matched = maximum_matching(draft.len(), batch.len(), |slot, candidate| {
            !clashes(&groups[draft[slot]], &batch[candidate], &criteria[..active])
        });
        let picks: Option<Vec<usize>> = matched.into_iter().collect();
        if let Some(picks) = picks {
            if active < criteria.len() {
                log::warn!(
                    "layer {}: spread criteria relaxed to the first {} of {}",
                    layer,
                    active,
                    criteria.len()
                );
            }
            return Ok(picks);
        }
    }
    Err(SchedulingError::InternalInvariantViolation(format!(
        "no complete assignment for draft layer {} even without spread criteria",
        layer
    )))
}

fn clashes<T, K>(members: &[T], candidate: &T, criteria: &[Criterion<'_, T, K>]) -> bool
where
    K: PartialEq,
{
    criteria.iter().any(|criterion| match criterion(candidate) {
        Some(value) => members
            .iter()
            .any(|member| criterion(member).as_ref() == Some(&value)),
        None => false,
    })
}
