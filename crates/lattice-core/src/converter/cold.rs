use tracing::{debug, debug_span};

use super::lattice::{Lattice, NodeTable};
use super::propagate::{fetch_matches, Propagator};
use super::LatticeOptions;
use crate::dict::LatticeDictionary;

/// Build a lattice for `input` from scratch.
///
/// Every position gets all matches starting there; position-0 nodes are
/// seeded from the BOS class and paths are propagated in position order.
pub fn build_lattice(
    dict: &dyn LatticeDictionary,
    input: &[char],
    options: &LatticeOptions,
) -> Lattice {
    let char_count = input.len();
    let _span = debug_span!("build_lattice", char_count, n_best = options.n_best).entered();

    let mut table = NodeTable::new();
    table.resize(char_count);
    for start in 0..char_count {
        let ends = start + 1..char_count + 1;
        table.positions[start] = fetch_matches(dict, input, start, ends, options);
    }

    let fresh = vec![0; char_count];
    let propagator = Propagator::new(dict, options);
    propagator.propagate_fresh(&mut table, &fresh);
    let eos = propagator.assemble_eos(&table);

    debug!(node_count = table.node_count(), paths = eos.prevs.len());
    Lattice { table, eos }
}
