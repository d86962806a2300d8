use std::sync::Arc;

use serde::Serialize;

use lattice_core::converter::Candidate;
use lattice_session::ComposingSession;

use super::{format_candidates, load, LoadOptions};
use crate::CliError;

#[derive(Debug, Serialize)]
struct ReplayStep {
    input: String,
    deleted: usize,
    added: usize,
    nodes: usize,
    candidates: Vec<Candidate>,
}

/// Feed each input in turn through one composing session, showing the edit
/// delta the session derived and the candidates after the edit.
pub fn replay_cmd(opts: &LoadOptions, inputs: &[String], json: bool) -> Result<String, CliError> {
    let (dict, lattice_opts) = load(opts)?;
    let mut session = ComposingSession::with_options(Arc::new(dict), lattice_opts);

    let mut steps = Vec::with_capacity(inputs.len());
    for input in inputs {
        session.set_input(input);
        let delta = session.last_delta();
        steps.push(ReplayStep {
            input: session.input(),
            deleted: delta.deleted,
            added: delta.added,
            nodes: session.lattice().table.node_count(),
            candidates: session.candidates(lattice_opts.n_best),
        });
    }

    if json {
        return Ok(serde_json::to_string_pretty(&steps)? + "\n");
    }
    let mut out = String::new();
    for step in &steps {
        out.push_str(&format!(
            "{} (-{} +{}, {} nodes)\n",
            step.input, step.deleted, step.added, step.nodes
        ));
        out.push_str(&format_candidates(&step.candidates));
    }
    Ok(out)
}
