// src/file.rs

use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use calamine::{open_workbook_auto, DataType, Reader};
use rust_xlsxwriter::{Workbook, Worksheet, XlsxError};

use crate::config::options::{ExportFormat, ExportOptions};
use crate::csv::{parse_rows, split_headers, write_row};
use crate::error::RunError;
use crate::table::DataSet;

/// Read a CSV/TSV file or the first sheet of an Excel workbook, picked by
/// extension. The first row is taken as the header row.
pub fn read_table(path: &Path) -> Result<DataSet, RunError> {
    let sep = ExportFormat::from_path(path).delim();
    let records = match sep {
        Some(sep) => {
            let bytes = fs::read(path).map_err(|e| RunError::io(path, e))?;
            // Spreadsheet exports are not always valid UTF-8; keep going lossily.
            parse_rows(&String::from_utf8_lossy(&bytes), sep)
        }
        None => read_workbook_rows(path)?,
    };

    let (headers, rows) = split_headers(records);
    if headers.is_none() {
        return Err(RunError::EmptyInput(path.to_path_buf()));
    }
    logd!("Read: {} rows={} sep={:?}", path.display(), rows.len(), sep);
    Ok(DataSet { headers, rows })
}

/// Write `ds` to the output path implied by `export` and `input`.
/// Returns the final path written to.
pub fn write_export_single(
    export: &ExportOptions,
    input: &Path,
    ds: &DataSet,
) -> Result<PathBuf, RunError> {
    let path = export.out_path(input);
    let format = export.resolve_format(input);

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let headers = if export.include_headers { ds.headers.as_deref() } else { None };
    match format.delim() {
        Some(sep) => write_table(&path, headers, &ds.rows, sep).map_err(|e| RunError::io(&path, e))?,
        None => write_workbook(&path, headers, &ds.rows).map_err(|e| RunError::workbook(&path, e))?,
    }
    Ok(path)
}

/// All rows of the first worksheet, every cell as text.
fn read_workbook_rows(path: &Path) -> Result<Vec<Vec<String>>, RunError> {
    let mut workbook = open_workbook_auto(path).map_err(|e| RunError::workbook(path, e))?;
    let Some(first) = workbook.sheet_names().first().cloned() else {
        return Err(RunError::EmptyInput(path.to_path_buf()));
    };
    let range = match workbook.worksheet_range(&first) {
        Some(Ok(range)) => range,
        Some(Err(e)) => return Err(RunError::workbook(path, e)),
        None => return Err(RunError::EmptyInput(path.to_path_buf())),
    };
    logd!("Read: {} sheet={:?} size={:?}", path.display(), first, range.get_size());

    Ok(range
        .rows()
        .map(|row| row.iter().map(cell_text).collect())
        .collect())
}

fn cell_text(cell: &DataType) -> String {
    match cell {
        DataType::String(s) => s.clone(),
        DataType::Float(v) => format!("{v}"),
        DataType::Int(v) => format!("{v}"),
        DataType::Bool(b) => s!(if *b { "TRUE" } else { "FALSE" }),
        DataType::Error(e) => format!("#{e:?}"),
        DataType::Empty => s!(),
        DataType::DateTime(v) => format!("{v}"),
        DataType::DateTimeIso(s) => s.clone(),
        DataType::Duration(v) => format!("{v}"),
        DataType::DurationIso(s) => s.clone(),
    }
}

/// Write header + rows to a single-sheet workbook. Empty cells stay blank.
pub fn write_workbook(
    path: &Path,
    headers: Option<&[String]>,
    rows: &[Vec<String>],
) -> Result<(), XlsxError> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();

    let mut r: u32 = 0;
    if let Some(h) = headers {
        write_record(sheet, r, h)?;
        r += 1;
    }
    for row in rows {
        write_record(sheet, r, row)?;
        r += 1;
    }

    workbook.save(path)
}

fn write_record(sheet: &mut Worksheet, r: u32, record: &[String]) -> Result<(), XlsxError> {
    for (c, value) in record.iter().enumerate() {
        if !value.is_empty() {
            sheet.write_string(r, c as u16, value)?;
        }
    }
    Ok(())
}

/// Create/truncate `path` and stream header + rows into it.
pub fn write_table(
    path: &Path,
    headers: Option<&[String]>,
    rows: &[Vec<String>],
    sep: char,
) -> std::io::Result<()> {
    let file = File::create(path)?; // truncate/overwrite
    let mut out = BufWriter::new(file);
    if let Some(h) = headers {
        write_row(&mut out, h, sep)?;
    }
    for row in rows {
        write_row(&mut out, row, sep)?;
    }
    out.flush()
}

pub fn ensure_directory(dir: &Path) -> Result<(), RunError> {
    if dir.exists() && !dir.is_dir() {
        return Err(RunError::io(
            dir,
            std::io::Error::new(std::io::ErrorKind::AlreadyExists, "path exists but is not a directory"),
        ));
    }
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|e| RunError::io(dir, e))?;
    }
    Ok(())
}
