//! Maximum bipartite matching (augmenting paths).

/// Match left vertices `0..left` to right vertices `0..right` along allowed edges.
///
/// Returns, for every left vertex, the right vertex it is matched to. Left
/// vertices are served in index order and right vertices tried in index
/// order, so the result is deterministic: without restrictions left `i` gets
/// right `i`.
pub(crate) fn maximum_matching<F>(left: usize, right: usize, allowed: F) -> Vec<Option<usize>>
where
    F: Fn(usize, usize) -> bool,
{
    let mut owner: Vec<Option<usize>> = vec![None; right];
    for l in 0..left {
        let mut visited = vec![false; right];
        augment(l, &allowed, &mut visited, &mut owner);
    }

    let mut matched = vec![None; left];
    for (r, l) in owner.iter().enumerate() {
        if let Some(l) = *l {
            matched[l] = Some(r);
        }
    }
    matched
}

fn augment<F>(l: usize, allowed: &F, visited: &mut [bool], owner: &mut [Option<usize>]) -> bool
where
    F: Fn(usize, usize) -> bool,
{
    // A free partner is taken before anyone already matched is displaced.
    for r in 0..owner.len() {
        if !visited[r] && owner[r].is_none() && allowed(l, r) {
            visited[r] = true;
            owner[r] = Some(l);
            return true;
        }
    }
    for r in 0..owner.len() {
        if visited[r] || !allowed(l, r) {
            continue;
        }
        visited[r] = true;
        let free = match owner[r] {
            None => true,
            Some(other) => augment(other, allowed, visited, owner),
        };
        if free {
            owner[r] = Some(l);
            return true;
        }
    }
    false
}
