//! Capacity-bounded, score-descending lists.

use super::lattice::Score;

/// An entry that can be ranked by score.
pub trait Ranked {
    fn score(&self) -> Score;
}

impl Ranked for Score {
    fn score(&self) -> Score {
        *self
    }
}

/// Insert `entry` into `list`, keeping descending order and at most `capacity` entries.
///
/// The entry goes after every existing entry with an equal or higher score, so
/// ties keep earlier arrivals ahead. Returns `false` when the entry would land
/// at `capacity` and is discarded.
///
/// `Vec::insert` is O(capacity), which is fine because N-best stays small.
/// A heap would break the stable-rank invariant: `Origin::Node::rank` indexes
/// into a finalized list.
pub fn insert_bounded<T: Ranked>(list: &mut Vec<T>, entry: T, capacity: usize) -> bool {
    let score = entry.score();
    let pos = list.partition_point(|e| e.score() >= score);
    if pos >= capacity {
        return false;
    }
    if list.len() >= capacity {
        list.pop();
    }
    list.insert(pos, entry);
    true
}
