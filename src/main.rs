mod cli;
mod convert;
mod error;
mod model;
mod storage;

use clap::Parser;

use crate::cli::Args;
use crate::convert::ExportMode;

fn main() {
    if let Err(e) = run(Args::parse()) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let (mode, path) = args.resolve()?;
    let path = storage::file::resolve_path(&path);
    let document = storage::file::load_json(&path)?;

    let results = match mode {
        Some(mode) => convert::convert_document(&document, &path, mode)?,
        None => {
            println!("Processing both env and collection for file: {}", path.display());
            let mut results = convert::convert_document(&document, &path, ExportMode::Collection)?;
            results.extend(convert::convert_document(&document, &path, ExportMode::Env)?);
            results
        }
    };

    println!("\nConversion completed successfully!");
    println!("\nGenerated files:");
    for result in &results {
        println!("- {}: {}", result.kind, result.output_path.display());
    }

    Ok(())
}
