// src/config/options.rs
use std::path::{Path, PathBuf};

use super::consts::*;
use crate::core::sanitize::sanitize_file_stem;
use crate::extract::AttributeSet;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppOptions {
    pub extract: ExtractOptions,
    pub export: ExportOptions,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Tabular file to read (CSV/TSV).
    pub input: Option<PathBuf>,
    /// Header of the column holding the description text.
    pub source_column: String,
    /// Which attributes to compute.
    pub attributes: AttributeSet,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            input: None,
            source_column: s!(DEFAULT_SOURCE_COLUMN),
            attributes: AttributeSet::all(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    Csv,
    Tsv,
    /// Excel workbook, first sheet.
    Xlsx,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Tsv => "tsv",
            ExportFormat::Xlsx => "xlsx",
        }
    }

    /// Field separator of the text formats; workbooks have none.
    pub fn delim(&self) -> Option<char> {
        match self {
            ExportFormat::Csv => Some(','),
            ExportFormat::Tsv => Some('\t'),
            ExportFormat::Xlsx => None,
        }
    }

    /// `.xlsx`/`.xlsm`/`.xls` → workbook, `.tsv`/`.tab` → TSV, anything else → CSV.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()).map(|e| e.to_ascii_lowercase()).as_deref() {
            Some("xlsx" | "xlsm" | "xls") => ExportFormat::Xlsx,
            Some("tsv" | "tab") => ExportFormat::Tsv,
            _ => ExportFormat::Csv,
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Some(ExportFormat::Csv),
            "tsv" => Some(ExportFormat::Tsv),
            "xlsx" | "excel" => Some(ExportFormat::Xlsx),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    /// `None`: same format as the input file.
    pub format: Option<ExportFormat>,
    /// `None`: `outputs/processed_<input stem>.<ext>`.
    out_path: Option<PathBuf>,
    pub include_headers: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: None,
            out_path: None,
            include_headers: true,
        }
    }
}

impl ExportOptions {
    pub fn resolve_format(&self, input: &Path) -> ExportFormat {
        self.format.unwrap_or_else(|| ExportFormat::from_path(input))
    }

    /// `processed_<sanitized stem>.<ext>`
    pub fn default_file_name(&self, input: &Path) -> String {
        let stem = input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let stem = sanitize_file_stem(&stem, DEFAULT_FILE);
        join!(OUTPUT_PREFIX, &stem, ".", self.resolve_format(input).ext())
    }

    /// Final output path for a given input. A user path that looks like a
    /// directory gets the default file name appended.
    pub fn out_path(&self, input: &Path) -> PathBuf {
        match &self.out_path {
            Some(p) if looks_like_dir_hint(p) || p.is_dir() => p.join(self.default_file_name(input)),
            Some(p) => p.clone(),
            None => PathBuf::from(DEFAULT_OUT_DIR).join(self.default_file_name(input)),
        }
    }

    pub fn explicit_out_path(&self) -> Option<&Path> { self.out_path.as_deref() }

    /// Parse GUI/CLI text. Blank text resets to the default location.
    pub fn set_path(&mut self, text: &str) {
        let s = text.trim();
        self.out_path = if s.is_empty() { None } else { Some(PathBuf::from(s)) };
    }
}

pub fn looks_like_dir_hint(p: &Path) -> bool {
    let s = p.to_string_lossy();
    s.ends_with('/') || s.ends_with('\\')
}
