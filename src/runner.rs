// src/runner.rs
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc;
use std::thread;

use crate::{
    config::consts::{CHUNK_ROWS, WORKERS},
    config::options::{AppOptions, ExtractOptions},
    error::RunError,
    extract::{AttributeKind, AttributeSet, ExtractionResult, Extractor},
    file,
    progress::Progress,
    table::DataSet,
};

/// How many rows got a recognized value, per computed attribute.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExtractStats {
    pub rows: usize,
    pub found: Vec<(AttributeKind, usize)>,
}

impl ExtractStats {
    pub fn found_for(&self, kind: AttributeKind) -> Option<usize> {
        self.found.iter().find(|(k, _)| *k == kind).map(|(_, n)| *n)
    }
}

/// Summary of what was produced.
#[derive(Clone, Debug)]
pub struct RunSummary {
    pub output: PathBuf,
    pub stats: ExtractStats,
}

/// Top-level runner: read → extract → write.
/// `progress` can be None (no UI updates) or Some(&mut impl Progress).
pub fn run(
    opts: &AppOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary, RunError> {
    let input = opts.extract.input.as_deref().ok_or(RunError::NoInput)?;
    if opts.extract.attributes.is_empty() {
        return Err(RunError::NothingRequested);
    }

    logf!("Run: Begin input={} column={:?} attrs={:?}",
        input.display(), opts.extract.source_column, opts.extract.attributes);

    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("Reading {}", input.display()));
    }
    let ds = file::read_table(input)?;

    let extractor = Extractor::default();
    let (ds, stats) = process_dataset(
        ds,
        &opts.extract,
        &extractor,
        progress.as_deref_mut().map(|p| p as &mut dyn Progress),
    )?;

    let output = file::write_export_single(&opts.export, input, &ds)?;
    logf!("Run: OK rows={} → {}", stats.rows, output.display());

    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("Wrote {}", output.display()));
    }
    Ok(RunSummary { output, stats })
}

/// Locate the source column, classify every row, and write one column per
/// requested attribute into the dataset. Row order is preserved.
pub fn process_dataset(
    mut ds: DataSet,
    extract: &ExtractOptions,
    extractor: &Extractor,
    progress: Option<&mut dyn Progress>,
) -> Result<(DataSet, ExtractStats), RunError> {
    let col = match ds.column_index(&extract.source_column) {
        Some(c) => c,
        None => {
            let available = ds.headers.clone().unwrap_or_default();
            loge!("Run: Column {:?} missing; headers={:?}", extract.source_column, available);
            return Err(RunError::MissingColumn { column: extract.source_column.clone(), available });
        }
    };
    logd!("Run: Source column {:?} → index {}", extract.source_column, col);

    let descriptions: Vec<Option<String>> = (0..ds.row_count())
        .map(|i| ds.cell(i, col).map(String::from))
        .collect();

    let results = extract_rows(&descriptions, extract.attributes, extractor, progress)?;

    let mut stats = ExtractStats { rows: results.len(), found: Vec::new() };
    for kind in extract.attributes.iter() {
        let mut found = 0usize;
        let values: Vec<String> = results
            .iter()
            .map(|r| match r.get(kind) {
                Some(v) => {
                    if !v.is_unknown() { found += 1; }
                    v.to_cell()
                }
                None => s!(),
            })
            .collect();
        ds.set_column(kind.column_name(), values);
        logd!("Run: {:?} found={}/{}", kind, found, stats.rows);
        stats.found.push((kind, found));
    }

    Ok((ds, stats))
}

/// Classify all descriptions on a small worker pool.
/// Workers claim fixed-size chunks from a shared cursor and send them back
/// tagged with their start index; output order always matches input order.
pub fn extract_rows(
    descriptions: &[Option<String>],
    requested: AttributeSet,
    extractor: &Extractor,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Vec<ExtractionResult>, RunError> {
    let total = descriptions.len();
    if let Some(p) = progress.as_deref_mut() {
        p.begin(total);
    }

    let mut slots: Vec<Option<ExtractionResult>> = vec![None; total];
    let cursor = AtomicUsize::new(0);
    let workers = WORKERS.min(total.div_ceil(CHUNK_ROWS)).max(1);

    let panicked = thread::scope(|scope| {
        let (tx, rx) = mpsc::channel::<(usize, Vec<ExtractionResult>)>();

        let mut handles = Vec::with_capacity(workers);
        for _ in 0..workers {
            let tx = tx.clone();
            let cursor = &cursor;
            handles.push(scope.spawn(move || {
                loop {
                    let start = cursor.fetch_add(CHUNK_ROWS, Ordering::Relaxed);
                    if start >= total {
                        break;
                    }
                    let end = (start + CHUNK_ROWS).min(total);
                    let batch = descriptions[start..end]
                        .iter()
                        .map(|d| extractor.extract(d.as_deref(), requested))
                        .collect();
                    if tx.send((start, batch)).is_err() {
                        break;
                    }
                }
            }));
        }
        drop(tx); // main thread is sole receiver now

        // Aggregate by index, in whatever order chunks arrive
        for (start, batch) in rx {
            let n = batch.len();
            for (offset, res) in batch.into_iter().enumerate() {
                slots[start + offset] = Some(res);
            }
            if let Some(p) = progress.as_deref_mut() {
                p.rows_done(n);
            }
        }

        handles.into_iter().map(|h| h.join()).filter(Result::is_err).count()
    });

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    if panicked > 0 {
        loge!("Run: {} extraction worker(s) panicked", panicked);
        return Err(RunError::Worker(format!("{panicked} worker(s) panicked")));
    }

    slots
        .into_iter()
        .collect::<Option<Vec<_>>>()
        .ok_or_else(|| RunError::Worker(s!("some rows were never classified")))
}
