// src/cli.rs
use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{eyre, Result};

use crate::config::options::{AppOptions, ExportFormat};
use crate::extract::{AttributeSet, Extractor};
use crate::progress::Progress;

#[derive(Parser, Debug)]
#[command(
    name = "frame_tagger-cli",
    version,
    about = "Extract gender, material, shape, style, size and color from eyewear detail strings"
)]
pub struct Args {
    /// CSV/TSV/Excel file with a header row
    #[arg(short, long, required_unless_present = "probe")]
    pub input: Option<PathBuf>,

    /// Output file or directory (default: outputs/processed_<input>.<ext>)
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Comma-separated attributes: gender,material,shape,style,size,color or "all"
    #[arg(short, long, default_value = "all")]
    pub attrs: String,

    /// Header of the description column
    #[arg(long, default_value = crate::config::consts::DEFAULT_SOURCE_COLUMN)]
    pub column: String,

    /// Output format: csv, tsv or xlsx (default: same as input)
    #[arg(long)]
    pub format: Option<String>,

    /// Omit the header row from the output
    #[arg(long)]
    pub no_headers: bool,

    /// Classify one description and print the result instead of reading a file
    #[arg(long, value_name = "TEXT")]
    pub probe: Option<String>,
}

impl Args {
    pub fn to_options(&self) -> Result<(AppOptions, AttributeSet)> {
        let attributes = AttributeSet::parse_list(&self.attrs).map_err(|e| eyre!(e))?;

        let mut opts = AppOptions::default();
        opts.extract.input = self.input.clone();
        opts.extract.source_column = self.column.clone();
        opts.extract.attributes = attributes;

        opts.export.format = match &self.format {
            Some(f) => Some(ExportFormat::parse(f).ok_or_else(|| eyre!("Unknown format: {f}"))?),
            None => None,
        };
        if let Some(out) = &self.out {
            opts.export.set_path(&out.to_string_lossy());
        }
        opts.export.include_headers = !self.no_headers;

        Ok((opts, attributes))
    }
}

/// Prints progress lines to stderr.
struct CliProgress {
    total: usize,
    done: usize,
}

impl Progress for CliProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        eprintln!("Classifying {total} rows…");
    }
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn rows_done(&mut self, rows: usize) {
        self.done += rows;
    }
    fn finish(&mut self) {
        eprintln!("Classified {}/{} rows", self.done, self.total);
    }
}

pub fn run() -> Result<()> {
    run_with(Args::parse())
}

pub fn run_with(args: Args) -> Result<()> {
    let (opts, attributes) = args.to_options()?;

    if let Some(text) = &args.probe {
        print!("{}", probe(text, attributes));
        return Ok(());
    }

    let mut progress = CliProgress { total: 0, done: 0 };
    let summary = crate::runner::run(&opts, Some(&mut progress))?;

    for (kind, found) in &summary.stats.found {
        println!("{:<8} {found}/{}", kind.column_name(), summary.stats.rows);
    }
    println!("Wrote {}", summary.output.display());
    Ok(())
}

/// One `COLUMN: value` line per requested attribute.
pub fn probe(text: &str, attributes: AttributeSet) -> String {
    let res = Extractor::default().extract(Some(text), attributes);
    let mut out = String::new();
    for (kind, value) in res.iter() {
        let cell = value.to_cell();
        let shown = if cell.is_empty() { "-" } else { cell.as_str() };
        out.push_str(&format!("{}: {}\n", kind.column_name(), shown));
    }
    out
}
