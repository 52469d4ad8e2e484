//! Pairing of two group members.

use serde::{Deserialize, Serialize};

/// One group-stage match between two group-local indices.
///
/// The pair is unordered as far as coverage goes; `first` is the member
/// listed first on the score sheet.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct Pairing {
    pub first: usize,
    pub second: usize,
}

impl Pairing {
    pub fn new(first: usize, second: usize) -> Self {
        Self { first, second }
    }

    /// Same match with the listing order swapped.
    pub fn flipped(self) -> Self {
        Self {
            first: self.second,
            second: self.first,
        }
    }

    /// The pair as `(low, high)`, for comparing matches regardless of order.
    pub fn normalized(self) -> (usize, usize) {
        (self.first.min(self.second), self.first.max(self.second))
    }
}

impl From<(usize, usize)> for Pairing {
    fn from((first, second): (usize, usize)) -> Self {
        Self::new(first, second)
    }
}
