use clap::Args;

use crate::catalog::locator::{ReferenceLocator, ReferenceStatus};
use crate::cli::OutputFormat;
use crate::utils::checksum::{md5_file, Md5Digest, DEFAULT_BLOCK_SIZE};

#[derive(Args)]
pub struct ListArgs {
    /// Also compute the MD5 of every installed file
    #[arg(long)]
    pub md5: bool,
}

struct Entry {
    status: ReferenceStatus,
    md5: Option<Md5Digest>,
}

pub fn run(
    args: &ListArgs,
    locator: &ReferenceLocator,
    format: OutputFormat,
    verbose: bool,
) -> anyhow::Result<()> {
    if verbose {
        eprintln!("Package root: {}", locator.root());
    }

    let mut entries = Vec::new();
    for status in locator.status_all() {
        let md5 = if args.md5 && status.exists {
            Some(md5_file(&status.path, DEFAULT_BLOCK_SIZE)?)
        } else {
            None
        };
        entries.push(Entry { status, md5 });
    }

    match format {
        OutputFormat::Text => print_text_list(&entries),
        OutputFormat::Json => print_json_list(&entries)?,
        OutputFormat::Tsv => print_tsv_list(&entries),
    }

    Ok(())
}

fn print_text_list(entries: &[Entry]) {
    println!("Bundled references");
    println!("{}", "=".repeat(60));

    for entry in entries {
        let status = &entry.status;
        println!("\n{}: {}", status.reference, status.reference.description());
        println!("  Path: {}", status.path.display());
        match status.size {
            Some(size) => println!("  Installed: yes ({size} bytes)"),
            None => println!("  Installed: no"),
        }
        if let Some(error) = &status.error {
            println!("  Error: {error}");
        }
        if let Some(md5) = &entry.md5 {
            println!("  MD5: {md5}");
        }
    }
}

fn print_json_list(entries: &[Entry]) -> anyhow::Result<()> {
    let mut output: Vec<serde_json::Value> = Vec::with_capacity(entries.len());
    for entry in entries {
        let mut json = serde_json::to_value(&entry.status)?;
        json["description"] = serde_json::json!(entry.status.reference.description());
        if let Some(md5) = &entry.md5 {
            json["md5"] = serde_json::json!(md5);
        }
        output.push(json);
    }

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv_list(entries: &[Entry]) {
    println!("reference\tpath\texists\tsize\tmd5");
    for entry in entries {
        let status = &entry.status;
        println!(
            "{}\t{}\t{}\t{}\t{}",
            status.reference,
            status.path.display(),
            status.exists,
            status.size.map(|s| s.to_string()).unwrap_or_default(),
            entry.md5.map(|m| m.to_hex()).unwrap_or_default(),
        );
    }
}
