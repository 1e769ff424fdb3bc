use clap::Args;

use crate::catalog::locator::ReferenceLocator;
use crate::cli::OutputFormat;
use crate::core::reference::ReferenceFile;

#[derive(Args)]
pub struct LocateArgs {
    /// Reference file to locate
    #[arg(required = true, value_enum)]
    pub reference: ReferenceFile,
}

pub fn run(args: &LocateArgs, locator: &ReferenceLocator, format: OutputFormat) -> anyhow::Result<()> {
    let path = locator.locate(args.reference)?;

    match format {
        OutputFormat::Text => println!("{}", path.display()),
        OutputFormat::Json => {
            let output = serde_json::json!({
                "reference": args.reference,
                "description": args.reference.description(),
                "path": path.display().to_string(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("reference\tpath");
            println!("{}\t{}", args.reference, path.display());
        }
    }

    Ok(())
}
