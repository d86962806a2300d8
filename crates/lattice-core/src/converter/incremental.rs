use tracing::{debug, debug_span};

use super::lattice::{Lattice, NodeTable};
use super::propagate::{fetch_matches, Propagator};
use super::{EditDelta, LatticeOptions};
use crate::dict::LatticeDictionary;

/// Update `previous` after a tail edit and rebuild the terminal paths.
///
/// `delta` must be the exact number of positions removed from and appended to
/// the end of the previous input to reach `input`. Nodes that lie entirely
/// inside the surviving prefix are reused as they are, including their paths;
/// only matches reaching into the edited tail are fetched and scored. The
/// result is identical to `build_lattice` on `input`.
///
/// Inconsistent deltas are caught by debug assertions only. Release builds
/// clamp them, which never panics but gives meaningless output.
pub fn rebuild_lattice(
    dict: &dyn LatticeDictionary,
    input: &[char],
    previous: NodeTable,
    delta: EditDelta,
    options: &LatticeOptions,
) -> Lattice {
    let count = input.len();
    let previous_len = previous.len();
    debug_assert!(
        delta.deleted <= previous_len,
        "deleted {} positions from a {previous_len}-position table",
        delta.deleted
    );
    debug_assert_eq!(
        previous_len.saturating_sub(delta.deleted) + delta.added,
        count,
        "edit delta does not match the input length"
    );
    let common = previous_len.saturating_sub(delta.deleted).min(count);
    let _span = debug_span!(
        "rebuild_lattice",
        previous_len,
        count,
        common,
        n_best = options.n_best
    )
    .entered();

    let mut table = previous.retain_prefix(common);
    let retained_positions = table.len();
    let retained_nodes = table.node_count();
    table.resize(count);
    let fresh: Vec<usize> = table.positions.iter().map(Vec::len).collect();

    // Before `common` only matches reaching into the edited tail are new.
    for start in 0..count {
        let first_end = common.max(start) + 1;
        let added = fetch_matches(dict, input, start, first_end..count + 1, options);
        table.positions[start].extend(added);
    }

    let propagator = Propagator::new(dict, options);
    propagator.relink_frozen(&mut table, &fresh);
    propagator.propagate_fresh(&mut table, &fresh);
    let eos = propagator.assemble_eos(&table);

    debug!(
        retained_positions,
        retained_nodes,
        added_nodes = table.node_count() - retained_nodes,
        paths = eos.prevs.len()
    );
    Lattice { table, eos }
}
