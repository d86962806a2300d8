pub mod convert_ops;
pub mod replay_ops;

use std::fs;
use std::path::Path;

use lattice_core::converter::{Candidate, LatticeOptions};
use lattice_core::dict::connection::ConnectionMatrix;
use lattice_core::dict::MemoryDictionary;
use lattice_core::settings::{parse_settings_toml, settings, Settings};

use crate::CliError;

/// Inputs shared by every command.
#[derive(Debug, Default, Clone)]
pub struct LoadOptions {
    pub lexicon: String,
    pub matrix: Option<String>,
    pub settings: Option<String>,
    pub exclude: Vec<String>,
    pub n: Option<usize>,
}

/// Load settings, lexicon and matrix, and derive the lattice options.
///
/// A settings file applies to this load only; without one the global
/// settings are used.
pub fn load(opts: &LoadOptions) -> Result<(MemoryDictionary, LatticeOptions), CliError> {
    let custom: Option<Settings> = match &opts.settings {
        Some(path) => Some(parse_settings_toml(&fs::read_to_string(path)?)?),
        None => None,
    };
    let s: &Settings = match custom.as_ref() {
        Some(c) => c,
        None => settings(),
    };

    let mut dict = MemoryDictionary::open(Path::new(&opts.lexicon))
        .map_err(CliError::Lexicon)?
        .with_unknown_fallback(s.cost.unknown_word_cost);
    if let Some(path) = &opts.matrix {
        let conn = ConnectionMatrix::open(Path::new(path)).map_err(CliError::Matrix)?;
        dict = dict.with_connection(conn);
    }
    for surface in &opts.exclude {
        dict.exclude_surface(surface.clone());
    }

    let mut lattice_opts = LatticeOptions::from_settings(s);
    if let Some(n) = opts.n {
        lattice_opts.n_best = n.max(1);
    }
    Ok((dict, lattice_opts))
}

/// `#N: 今日(きょう) | は(は)  [score]`, one line per candidate.
pub fn format_candidates(candidates: &[Candidate]) -> String {
    if candidates.is_empty() {
        return "  (no conversion)\n".to_string();
    }
    let mut out = String::new();
    for (i, c) in candidates.iter().enumerate() {
        let segs: Vec<String> = c
            .segments
            .iter()
            .map(|s| format!("{}({})", s.surface, s.reading))
            .collect();
        out.push_str(&format!("#{:>2}: {}  [{}]\n", i + 1, segs.join(" | "), c.score));
    }
    out
}
