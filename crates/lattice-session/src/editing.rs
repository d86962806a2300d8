use tracing::debug;

use lattice_core::converter::{rebuild_lattice, EditDelta, Lattice};

use super::{ComposingSession, MAX_INPUT_LENGTH};

impl ComposingSession {
    /// Append kana at the end of the input.
    pub fn push_str(&mut self, kana: &str) -> &Lattice {
        let room = MAX_INPUT_LENGTH.saturating_sub(self.input.len());
        let mut next = self.input.clone();
        next.extend(kana.chars().take(room));
        let delta = EditDelta::new(0, next.len() - self.input.len());
        self.apply(next, delta)
    }

    /// Remove up to `count` characters from the end of the input.
    pub fn delete_last(&mut self, count: usize) -> &Lattice {
        let deleted = count.min(self.input.len());
        let mut next = self.input.clone();
        next.truncate(self.input.len() - deleted);
        self.apply(next, EditDelta::new(deleted, 0))
    }

    /// Replace the whole input. The longest common prefix with the current
    /// input is kept.
    pub fn set_input(&mut self, kana: &str) -> &Lattice {
        let next: Vec<char> = kana.chars().take(MAX_INPUT_LENGTH).collect();
        let delta = EditDelta::between(&self.input, &next);
        self.apply(next, delta)
    }

    /// Drop the input and its lattice.
    pub fn reset(&mut self) {
        self.input.clear();
        self.lattice = Lattice::default();
        self.last_delta = EditDelta::default();
    }

    fn apply(&mut self, next: Vec<char>, delta: EditDelta) -> &Lattice {
        debug!(
            previous_len = self.input.len(),
            next_len = next.len(),
            deleted = delta.deleted,
            added = delta.added,
            "apply edit"
        );
        let previous = std::mem::take(&mut self.lattice).table;
        self.lattice = rebuild_lattice(self.dict.as_ref(), &next, previous, delta, &self.options);
        self.input = next;
        self.last_delta = delta;
        &self.lattice
    }
}
