use std::process;

use clap::{Args, Parser, Subcommand};

use lattice_cli::commands::{convert_ops, replay_ops, LoadOptions};
use lattice_cli::trace_init::init_tracing;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

#[derive(Parser)]
#[command(name = "lattice-tool", about = "Lattice conversion diagnostics")]
struct Cli {
    /// Log converter spans and events to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    /// Log as JSON lines (with --verbose)
    #[arg(long, global = true)]
    log_json: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
struct Common {
    /// Path to the TSV lexicon (reading, surface, left_id, right_id, cost)
    lexicon: String,
    /// Path to the connection matrix text (Mozc or MeCab form)
    #[arg(long)]
    matrix: Option<String>,
    /// Path to a settings TOML overriding the defaults
    #[arg(long)]
    settings: Option<String>,
    /// Surface to exclude from conversion (repeatable)
    #[arg(long)]
    exclude: Vec<String>,
    /// Number of N-best paths to keep
    #[arg(short, long)]
    n: Option<usize>,
    /// Output as JSON instead of text
    #[arg(long)]
    json: bool,
}

impl Common {
    fn load_options(&self) -> LoadOptions {
        LoadOptions {
            lexicon: self.lexicon.clone(),
            matrix: self.matrix.clone(),
            settings: self.settings.clone(),
            exclude: self.exclude.clone(),
            n: self.n,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Convert a reading with a fresh lattice
    Convert {
        #[command(flatten)]
        common: Common,
        /// Kana reading to convert
        reading: String,
    },

    /// Replay successive inputs through one composing session
    Replay {
        #[command(flatten)]
        common: Common,
        /// Inputs in edit order, e.g. き きょ きょう きょうは
        #[arg(required = true)]
        inputs: Vec<String>,
    },
}

fn main() {
    let cli = Cli::parse();
    if cli.verbose {
        init_tracing(cli.log_json);
    }

    let output = match &cli.command {
        Command::Convert { common, reading } => die!(
            convert_ops::convert_cmd(&common.load_options(), reading, common.json),
            "convert failed: {}"
        ),
        Command::Replay { common, inputs } => die!(
            replay_ops::replay_cmd(&common.load_options(), inputs, common.json),
            "replay failed: {}"
        ),
    };
    print!("{output}");
}
