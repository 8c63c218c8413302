use std::path::PathBuf;

#[derive(Debug)]
pub struct ConvertResult {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub files: Vec<FileSummary>,
    pub dry_run: bool,
    pub has_errors: bool,
}

#[derive(Debug)]
pub struct FileSummary {
    pub source: PathBuf,
    pub area: String,
    pub effective_date: Option<String>,
    pub ranks: usize,
    /// Written files, in format order. Empty on a dry run or failure.
    pub outputs: Vec<PathBuf>,
    pub error: Option<String>,
}

impl FileSummary {
    pub fn failed(source: PathBuf, area: String, error: String) -> Self {
        Self {
            source,
            area,
            effective_date: None,
            ranks: 0,
            outputs: Vec::new(),
            error: Some(error),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}
