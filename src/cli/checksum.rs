use std::path::PathBuf;

use clap::Args;

use crate::cli::OutputFormat;
use crate::utils::checksum::{md5_file, Md5Digest, DEFAULT_BLOCK_SIZE};
use crate::utils::validation::verify_md5;

#[derive(Args)]
pub struct ChecksumArgs {
    /// Files to checksum
    #[arg(required = true, num_args = 1..)]
    pub inputs: Vec<PathBuf>,

    /// Bytes read per block
    #[arg(long, default_value_t = DEFAULT_BLOCK_SIZE, value_parser = parse_block_size)]
    pub block_size: usize,

    /// Expected MD5; the command fails if the digest differs (single input only)
    #[arg(long)]
    pub expect: Option<String>,
}

fn parse_block_size(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("block size must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(format!("invalid block size '{s}': {e}")),
    }
}

pub fn run(args: &ChecksumArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    if args.expect.is_some() && args.inputs.len() != 1 {
        anyhow::bail!("--expect requires exactly one input file");
    }

    let mut results: Vec<(&PathBuf, Md5Digest)> = Vec::with_capacity(args.inputs.len());
    for path in &args.inputs {
        let digest = md5_file(path, args.block_size)
            .map_err(|e| anyhow::anyhow!("Failed to checksum {}: {e}", path.display()))?;
        if verbose {
            eprintln!("{}: {digest}", path.display());
        }
        results.push((path, digest));
    }

    match format {
        OutputFormat::Text => {
            // md5sum-compatible
            for (path, digest) in &results {
                println!("{digest}  {}", path.display());
            }
        }
        OutputFormat::Json => {
            let output: Vec<serde_json::Value> = results
                .iter()
                .map(|(path, digest)| {
                    serde_json::json!({
                        "path": path.display().to_string(),
                        "md5": digest,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("path\tmd5");
            for (path, digest) in &results {
                println!("{}\t{digest}", path.display());
            }
        }
    }

    if let (Some(expected), Some((_, digest))) = (&args.expect, results.first()) {
        verify_md5(expected, digest)?;
    }

    Ok(())
}
