//! Directory conversion: one premium table per CSV file.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tracing::{error, info, info_span};

use kempo_core::{KempoTable, OutputFormat};
use kempo_ingest::{area_name, list_csv_files};

use crate::types::{ConvertResult, FileSummary};

/// Runtime settings for [`convert_dir`].
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    pub input_dir: PathBuf,
    /// Defaults to `input_dir`.
    pub output_dir: Option<PathBuf>,
    pub formats: Vec<OutputFormat>,
    pub effective_date: Option<String>,
    pub dry_run: bool,
    /// Record failures and carry on instead of stopping at the first one.
    pub keep_going: bool,
}

impl ConvertOptions {
    pub fn new(input_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_dir: None,
            formats: OutputFormat::ALL.to_vec(),
            effective_date: None,
            dry_run: false,
            keep_going: false,
        }
    }

    pub fn output_dir(&self) -> PathBuf {
        self.output_dir
            .clone()
            .unwrap_or_else(|| self.input_dir.clone())
    }
}

/// Base name shared by a table's output files.
///
/// `<area>-<effective date>`, or just `<area>` when the date is unknown.
pub fn output_stem(area: &str, effective_date: Option<&str>) -> String {
    match effective_date {
        Some(date) => format!("{area}-{date}"),
        None => area.to_string(),
    }
}

/// Converts every CSV file in the input directory.
pub fn convert_dir(options: &ConvertOptions) -> Result<ConvertResult> {
    let input_dir = &options.input_dir;
    let output_dir = options.output_dir();
    let sources = list_csv_files(input_dir)
        .with_context(|| format!("list tables in {}", input_dir.display()))?;
    if sources.is_empty() {
        bail!("no CSV files found in {}", input_dir.display());
    }
    if !options.dry_run {
        fs::create_dir_all(&output_dir)
            .with_context(|| format!("create output directory {}", output_dir.display()))?;
    }

    let mut files = Vec::with_capacity(sources.len());
    for source in sources {
        let area = area_name(&source);
        let span = info_span!("file", area = %area);
        let _guard = span.enter();
        match convert_file(&source, &output_dir, options) {
            Ok(summary) => files.push(summary),
            Err(err) if options.keep_going => {
                let message = format!("{err:#}");
                error!(error = %message, "conversion failed, continuing");
                files.push(FileSummary::failed(source, area, message));
            }
            Err(err) => return Err(err),
        }
    }

    let has_errors = files.iter().any(|summary| !summary.is_ok());
    Ok(ConvertResult {
        input_dir: input_dir.clone(),
        output_dir,
        files,
        dry_run: options.dry_run,
        has_errors,
    })
}

/// Parses one table and writes its outputs into `output_dir`.
pub fn convert_file(
    source: &Path,
    output_dir: &Path,
    options: &ConvertOptions,
) -> Result<FileSummary> {
    let table = KempoTable::new(source, options.effective_date.as_deref())
        .with_context(|| format!("convert {}", source.display()))?;
    let premiums = table.premium_table();
    let stem = output_stem(&premiums.area, premiums.effective_date.as_deref());

    let mut outputs = Vec::new();
    if options.dry_run {
        info!(stem = %stem, "dry run, not writing outputs");
    } else {
        for format in &options.formats {
            let path = output_dir.join(format!("{stem}.{}", format.extension()));
            let rendered = format
                .render(premiums)
                .with_context(|| format!("render {format} for {}", premiums.area))?;
            fs::write(&path, rendered).with_context(|| format!("write {}", path.display()))?;
            info!(path = %path.display(), "wrote table");
            outputs.push(path);
        }
    }

    Ok(FileSummary {
        source: source.to_path_buf(),
        area: premiums.area.clone(),
        effective_date: premiums.effective_date.clone(),
        ranks: premiums.len(),
        outputs,
        error: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stem_includes_date_when_known() {
        assert_eq!(output_stem("tokyo", Some("2024-04-01")), "tokyo-2024-04-01");
        assert_eq!(output_stem("tokyo", None), "tokyo");
    }

    #[test]
    fn output_dir_defaults_to_input() {
        let mut options = ConvertOptions::new("tables");
        assert_eq!(options.output_dir(), PathBuf::from("tables"));
        options.output_dir = Some(PathBuf::from("out"));
        assert_eq!(options.output_dir(), PathBuf::from("out"));
        assert_eq!(options.formats, vec![OutputFormat::Json, OutputFormat::Yaml]);
    }
}
