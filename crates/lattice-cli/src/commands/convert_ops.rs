use serde::Serialize;
use tracing::info;

use lattice_core::converter::{build_lattice, Candidate};

use super::{format_candidates, load, LoadOptions};
use crate::CliError;

#[derive(Debug, Serialize)]
struct ConvertReport<'a> {
    reading: &'a str,
    n_best: usize,
    candidates: Vec<Candidate>,
}

/// Cold-build the lattice for `kana` and render its N-best candidates.
pub fn convert_cmd(opts: &LoadOptions, kana: &str, json: bool) -> Result<String, CliError> {
    let (dict, lattice_opts) = load(opts)?;
    let input: Vec<char> = kana.chars().collect();
    let lattice = build_lattice(&dict, &input, &lattice_opts);
    info!(
        nodes = lattice.table.node_count(),
        paths = lattice.eos.prevs().len(),
        "converted"
    );

    let candidates = lattice.candidates();
    if json {
        let report = ConvertReport {
            reading: kana,
            n_best: lattice_opts.n_best,
            candidates,
        };
        Ok(serde_json::to_string_pretty(&report)? + "\n")
    } else {
        Ok(format_candidates(&candidates))
    }
}
