//! Round robin: every member of a group meets every other member exactly once.
//!
//! Even groups use the circle method. Odd groups use a slot-rotation rule
//! that places each member directly into (round, slot) cells; one member
//! sits out each round. The rule is fixed, so identical sizes always give
//! identical schedules.

use crate::models::{Pairing, SchedulingError};

/// How much the number of times members are listed first may differ (odd groups).
pub const MAX_FIRST_SLOT_IMBALANCE: usize = 1;

/// All matches of a group of `n`, in playing order, as group-local indices.
pub fn schedule_round_robin(n: usize) -> Result<Vec<Pairing>, SchedulingError> {
    Ok(schedule_round_robin_rounds(n)?.into_iter().flatten().collect())
}

/// All matches of a group of `n`, grouped by round.
///
/// Even `n` gives `n - 1` rounds of `n / 2` matches; odd `n` gives `n` rounds
/// of `n / 2` matches with one member idle per round.
pub fn schedule_round_robin_rounds(n: usize) -> Result<Vec<Vec<Pairing>>, SchedulingError> {
    if n < 2 {
        return Err(SchedulingError::InvalidInput(format!(
            "a round robin needs at least 2 members, got {}",
            n
        )));
    }
    let rounds = if n % 2 == 0 { circle(n) } else { odd(n) };
    log::debug!(
        "round robin for {}: {} rounds, {} matches",
        n,
        rounds.len(),
        rounds.iter().map(Vec::len).sum::<usize>()
    );
    Ok(rounds)
}

fn circle(n: usize) -> Vec<Vec<Pairing>> {
    let pair_up = |circle: &[usize]| -> Vec<Pairing> {
        (0..n / 2)
            .map(|i| Pairing::new(circle[i], circle[n - 1 - i]))
            .collect()
    };

    let mut circle: Vec<usize> = (0..n).collect();
    let mut rounds = vec![pair_up(&circle)];
    for k in 0..n - 2 {
        // Position 0 stays; everybody else moves one step round.
        circle[1..].rotate_right(1);
        // On every other round the ends trade places, so the anchor alternates sides.
        if k % 2 == 0 {
            circle.swap(0, n - 1);
        }
        rounds.push(pair_up(&circle));
        if k % 2 == 0 {
            circle.swap(0, n - 1);
        }
    }
    rounds
}

/// Cell of the odd grid: the two members of one slot in one round.
type Cell = [Option<usize>; 2];

fn odd(n: usize) -> Vec<Vec<Pairing>> {
    let k = n / 2;
    let mut grid: Vec<Vec<Cell>> = vec![vec![[None, None]; k]; n];

    // Rounds, slots and members are numbered from 1 in the rotation rule.
    for i in 1..=k {
        let member = 2 * i - 1;
        let mut slot = i;
        let mut flip = false;
        for round in 1..=2 * i {
            place(&mut grid, round, slot, member, flip);
            flip = !flip;
        }
        for round in 2 * i + 1..=n {
            slot = (slot + 1) % (k + 1);
            if slot == 0 {
                continue;
            }
            place(&mut grid, round, slot, member, flip);
            flip = !flip;
        }

        let member = 2 * i;
        let mut slot = i;
        place(&mut grid, 1, slot, member, flip);
        flip = true;
        let turn = 2 * k + 3 - 2 * i;
        for round in 2..=turn {
            slot = (slot + 1) % (k + 1);
            if slot == 0 {
                continue;
            }
            place(&mut grid, round, slot, member, flip);
            flip = !flip;
        }
        for round in turn + 1..=n {
            if slot == 0 {
                continue;
            }
            place(&mut grid, round, slot, member, flip);
            flip = !flip;
        }
    }

    let last = 2 * k + 1;
    let mut flip = false;
    for round in 1..=n {
        let slot = round / 2;
        if slot == 0 {
            continue;
        }
        place(&mut grid, round, slot, last, flip);
        flip = !flip;
    }

    let mut rounds: Vec<Vec<Pairing>> = grid
        .into_iter()
        .map(|cells| {
            cells
                .into_iter()
                .filter_map(|cell| match cell {
                    [Some(a), Some(b)] => Some(Pairing::new(a, b)),
                    _ => None,
                })
                .collect()
        })
        .collect();
    balance_first_slots(&mut rounds, n);
    rounds
}

/// Put 1-based `member` into the cell at (`round`, `slot`). A member normally
/// takes the first side; with `flip` it takes the second. If that side is
/// already taken it gets the other one.
fn place(grid: &mut [Vec<Cell>], round: usize, slot: usize, member: usize, flip: bool) {
    let cell = &mut grid[round - 1][slot - 1];
    let (preferred, other) = if flip { (1, 0) } else { (0, 1) };
    if cell[preferred].is_none() {
        cell[preferred] = Some(member - 1);
    } else {
        cell[other] = Some(member - 1);
    }
}

/// Swap sides of matches until no member is listed first much more often than another.
fn balance_first_slots(rounds: &mut [Vec<Pairing>], n: usize) {
    let mut firsts = vec![0usize; n];
    for p in rounds.iter().flatten() {
        firsts[p.first] += 1;
    }

    loop {
        let (mut most, mut least) = (0, 0);
        for member in 1..n {
            if firsts[member] > firsts[most] {
                most = member;
            }
            if firsts[member] < firsts[least] {
                least = member;
            }
        }
        if firsts[most] - firsts[least] <= MAX_FIRST_SLOT_IMBALANCE {
            break;
        }
        let Some(pairing) = rounds
            .iter_mut()
            .flatten()
            .find(|p| p.first == most && p.second == least)
        else {
            log::warn!(
                "round robin for {}: member {} listed first {} times, member {} {} times; no match to swap",
                n,
                most,
                firsts[most],
                least,
                firsts[least]
            );
            break;
        };
        *pairing = pairing.flipped();
        firsts[most] -= 1;
        firsts[least] += 1;
    }
}
