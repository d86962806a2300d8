//! Forward propagation shared by the cold and incremental builders.
//!
//! Both builders assemble a `NodeTable` where, at every position, the nodes
//! created by the current build follow the nodes kept from an earlier build.
//! `fresh[p]` is the slot of the first node created at position `p`; nodes
//! before it are frozen and only act as sources.

use std::ops::Range;

use super::lattice::{EosNode, LatticeNode, NodeId, NodeTable, Origin, PathLink};
use super::nbest::insert_bounded;
use super::LatticeOptions;
use crate::dict::LatticeDictionary;

/// Fetch matches for one start position, ordered by end.
///
/// Adapter results outside `ends` are dropped and any path data is cleared,
/// so a misbehaving adapter cannot break the table layout.
pub(crate) fn fetch_matches(
    dict: &dyn LatticeDictionary,
    input: &[char],
    start: usize,
    ends: Range<usize>,
    options: &LatticeOptions,
) -> Vec<LatticeNode> {
    if ends.is_empty() {
        return Vec::new();
    }
    let mut nodes = dict.matches(input, start, ends.clone(), options.typo_correction);
    nodes.retain(|node| node.start == start && ends.contains(&node.end));
    for node in &mut nodes {
        node.prevs.clear();
        node.values.clear();
    }
    // Stable: equal ends keep adapter order.
    nodes.sort_by_key(|node| node.end);
    nodes
}

pub(crate) struct Propagator<'a> {
    dict: &'a dyn LatticeDictionary,
    options: &'a LatticeOptions,
}

impl<'a> Propagator<'a> {
    pub(crate) fn new(dict: &'a dyn LatticeDictionary, options: &'a LatticeOptions) -> Self {
        Self { dict, options }
    }

    /// Connect every reachable frozen node into the fresh nodes at its end.
    pub(crate) fn relink_frozen(&self, table: &mut NodeTable, fresh: &[usize]) {
        for position in 0..table.len() {
            for slot in 0..fresh[position] {
                let node = &table.positions[position][slot];
                if !node.is_reachable() || self.dict.is_excluded(&node.morpheme) {
                    continue;
                }
                self.connect(table, NodeId { position, slot }, fresh);
            }
        }
    }

    /// Finalize fresh nodes in position order and push their paths forward.
    pub(crate) fn propagate_fresh(&self, table: &mut NodeTable, fresh: &[usize]) {
        let input_len = table.len();
        for position in 0..input_len {
            for slot in fresh[position]..table.positions[position].len() {
                let node = &mut table.positions[position][slot];
                if self.dict.is_excluded(&node.morpheme) {
                    continue;
                }
                if position == 0 {
                    let seed = self
                        .dict
                        .connection_cost(self.options.bos_class_id, node.morpheme.left_id);
                    insert_bounded(
                        &mut node.prevs,
                        PathLink {
                            origin: Origin::Bos,
                            total: seed,
                        },
                        self.options.n_best,
                    );
                }
                if node.prevs.is_empty() {
                    continue;
                }
                let base = self.dict.base_score(&node.morpheme);
                node.values = node.prevs.iter().map(|p| p.total + base).collect();
                if node.end < input_len {
                    self.connect(table, NodeId { position, slot }, fresh);
                }
            }
        }
    }

    /// Collect every path reaching the end of the input into the terminal node.
    pub(crate) fn assemble_eos(&self, table: &NodeTable) -> EosNode {
        let input_len = table.len();
        let mut eos = EosNode::default();
        for (id, node) in table.nodes() {
            if node.end != input_len || self.dict.is_excluded(&node.morpheme) {
                continue;
            }
            for (rank, &value) in node.values.iter().enumerate() {
                insert_bounded(
                    &mut eos.prevs,
                    PathLink {
                        origin: Origin::Node { node: id, rank },
                        total: value,
                    },
                    self.options.n_best,
                );
            }
        }
        eos
    }

    /// Extend every path of `source` into the fresh nodes starting at its end.
    fn connect(&self, table: &mut NodeTable, source: NodeId, fresh: &[usize]) {
        let end = table.positions[source.position][source.slot].end;
        if end >= table.len() {
            return;
        }
        // source.position < end, so the two borrows are disjoint.
        let (head, tail) = table.positions.split_at_mut(end);
        let src = &head[source.position][source.slot];
        for target in tail[0].iter_mut().skip(fresh[end]) {
            if self.dict.is_excluded(&target.morpheme) {
                continue;
            }
            let cc = self
                .dict
                .connection_cost(src.morpheme.right_id, target.morpheme.left_id);
            for (rank, &value) in src.values.iter().enumerate() {
                insert_bounded(
                    &mut target.prevs,
                    PathLink {
                        origin: Origin::Node { node: source, rank },
                        total: value + cc,
                    },
                    self.options.n_best,
                );
            }
        }
    }
}
