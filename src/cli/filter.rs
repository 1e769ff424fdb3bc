use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::Args;
use tempfile::NamedTempFile;

use crate::cli::OutputFormat;
use crate::core::mask::LaneMask;
use crate::parsing::fasta::{filter_alignment_file, FilterSummary};

#[derive(Args)]
pub struct FilterArgs {
    /// Aligned FASTA file (optionally gzip/bgzip compressed)
    #[arg(required = true)]
    pub input: PathBuf,

    /// Output FASTA file. If not specified, prints to stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn run(args: &FilterArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let mask = LaneMask::default_16s();

    let summary = if let Some(path) = &args.output {
        // Stage beside the target; dropping the temp file on error removes it
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut writer = BufWriter::new(NamedTempFile::new_in(dir)?);
        let summary = filter_alignment_file(&args.input, &mask, &mut writer)?;
        let staged = writer
            .into_inner()
            .map_err(std::io::IntoInnerError::into_error)?;
        staged.persist(path)?;
        report(&summary, format)?;
        summary
    } else {
        // stdout carries the FASTA, so no summary there
        let mut writer = BufWriter::new(std::io::stdout().lock());
        let summary = filter_alignment_file(&args.input, &mask, &mut writer)?;
        writer.flush()?;
        summary
    };

    if verbose {
        eprintln!(
            "Filtered {} records: {} -> {} columns",
            summary.records, summary.input_columns, summary.output_columns
        );
    }

    Ok(())
}

fn report(summary: &FilterSummary, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => println!(
            "Filtered {} records ({} of {} columns kept)",
            summary.records, summary.output_columns, summary.input_columns
        ),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(summary)?),
        OutputFormat::Tsv => {
            println!("records\tinput_columns\toutput_columns");
            println!(
                "{}\t{}\t{}",
                summary.records, summary.input_columns, summary.output_columns
            );
        }
    }
    Ok(())
}
