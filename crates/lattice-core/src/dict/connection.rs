/// A connection cost matrix mapping (right_id of left, left_id of right) → cost.
/// Used by the lattice builders to score morpheme transitions.
#[derive(Debug, Clone)]
pub struct ConnectionMatrix {
    pub(super) num_ids: u16,
    pub(super) costs: Vec<i16>,
}

impl ConnectionMatrix {
    /// Create a square matrix from row-major costs.
    ///
    /// `costs` is padded with zeros (or truncated) to `num_ids * num_ids`.
    pub fn new(num_ids: u16, mut costs: Vec<i16>) -> Self {
        costs.resize(num_ids as usize * num_ids as usize, 0);
        Self { num_ids, costs }
    }

    /// Cost of a transition from a morpheme with right class `prev_right`
    /// into one with left class `next_left`.
    /// Index: prev_right * num_ids + next_left. Out-of-bounds returns 0.
    pub fn cost(&self, prev_right: u16, next_left: u16) -> i16 {
        if prev_right >= self.num_ids || next_left >= self.num_ids {
            return 0;
        }
        let idx = prev_right as usize * self.num_ids as usize + next_left as usize;
        self.costs.get(idx).copied().unwrap_or(0)
    }

    /// Set one cell. Out-of-bounds ids are ignored.
    pub fn set(&mut self, prev_right: u16, next_left: u16, cost: i16) {
        if prev_right < self.num_ids && next_left < self.num_ids {
            let idx = prev_right as usize * self.num_ids as usize + next_left as usize;
            self.costs[idx] = cost;
        }
    }

    /// Number of morpheme IDs in this matrix.
    pub fn num_ids(&self) -> u16 {
        self.num_ids
    }
}
