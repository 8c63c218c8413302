use anyhow::{Context, Result};
use tracing::info_span;

use kempo_cli::convert::{ConvertOptions, convert_dir};
use kempo_cli::types::ConvertResult;
use kempo_core::{KempoTable, OutputFormat};

use crate::cli::{ConvertArgs, InspectArgs, OutputFormatArg};
use crate::summary::print_ranks;

pub fn run_convert(args: &ConvertArgs) -> Result<ConvertResult> {
    let span = info_span!("convert", dir = %args.dir.display());
    let _guard = span.enter();
    let options = ConvertOptions {
        input_dir: args.dir.clone(),
        output_dir: args.output_dir.clone(),
        formats: format_outputs(args.format),
        effective_date: args.effective_date.clone(),
        dry_run: args.dry_run,
        keep_going: args.keep_going,
    };
    convert_dir(&options)
}

pub fn run_inspect(args: &InspectArgs) -> Result<()> {
    let span = info_span!("inspect", file = %args.file.display());
    let _guard = span.enter();
    let table = KempoTable::new(&args.file, args.effective_date.as_deref())
        .with_context(|| format!("convert {}", args.file.display()))?;
    print_ranks(table.premium_table());
    Ok(())
}

fn format_outputs(format: OutputFormatArg) -> Vec<OutputFormat> {
    match format {
        OutputFormatArg::Json => vec![OutputFormat::Json],
        OutputFormatArg::Yaml => vec![OutputFormat::Yaml],
        OutputFormatArg::Both => OutputFormat::ALL.to_vec(),
    }
}
