use crate::cli::OutputFormat;
use crate::core::mask::LaneMask;

pub fn run(format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let mask = LaneMask::default_16s();

    if verbose {
        eprintln!(
            "Lane mask: {} columns, {} informative",
            mask.len(),
            mask.informative_columns()
        );
    }

    match format {
        OutputFormat::Text => println!("{mask}"),
        OutputFormat::Json => {
            let output = serde_json::json!({
                "length": mask.len(),
                "informative_columns": mask.informative_columns(),
                "mask": mask.as_str(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("length\tinformative_columns\tmask");
            println!("{}\t{}\t{}", mask.len(), mask.informative_columns(), mask);
        }
    }

    Ok(())
}
