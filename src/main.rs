use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use log::{error, info};

use huffman_tree::{
    Error, FreqTable, Node, average_code_length, build_code_table, build_huffman_tree,
    count_file_frequencies, entropy_from_freq, write_tree,
};

#[derive(Parser, Debug)]
#[command(
    name = "huffman-tree",
    version,
    about = "Print the Huffman tree of a file's byte frequencies"
)]
struct Cli {
    /// File whose bytes are counted. Exactly one is expected.
    #[arg(value_name = "INPUT")]
    inputs: Vec<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{:#}", err);
            ExitCode::from(err.downcast_ref::<Error>().map_or(1, Error::exit_code))
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let [input] = cli.inputs.as_slice() else {
        return Err(Error::InvalidArgumentCount {
            found: cli.inputs.len(),
        }
        .into());
    };

    info!("--- Start ---");

    let freq = count_file_frequencies(input)?;
    let root = build_huffman_tree(&freq)
        .with_context(|| format!("nothing to draw for {}", input.display()))?;
    log_summary(&freq, &root);

    let stdout = io::stdout();
    write_tree(&root, BufWriter::new(stdout.lock()))?;

    info!("--- End ---");
    Ok(())
}

fn log_summary(freq: &FreqTable, root: &Node) {
    let codes = build_code_table(root);
    info!(
        "{} bytes, {} unique symbols, tree height {}",
        root.weight(),
        root.leaf_count(),
        root.height()
    );
    info!(
        "entropy {:.4} bits/symbol, average code length {:.4} bits/symbol",
        entropy_from_freq(freq),
        average_code_length(freq, &codes)
    );
}
