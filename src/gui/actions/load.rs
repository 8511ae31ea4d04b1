// src/gui/actions/load.rs
use std::path::PathBuf;

use crate::{file, gui::app::App};

pub fn load(app: &mut App) {
    if app.running {
        app.status("Extraction in progress");
        return;
    }
    let text = app.state.gui.input_text.trim();
    if text.is_empty() {
        app.status("Enter an input file path");
        return;
    }
    let path = PathBuf::from(text);

    match file::read_table(&path) {
        Ok(ds) => {
            let column = &app.state.options.extract.source_column;
            let msg = if ds.column_index(column).is_some() {
                format!("Loaded {} rows from {}", ds.row_count(), path.display())
            } else {
                format!("Loaded {} rows, but no '{}' column", ds.row_count(), column)
            };
            logf!("Load: OK {} rows={} headers={}", path.display(), ds.row_count(), ds.header_count());

            app.state.options.extract.input = Some(path);
            app.source = Some(ds);
            app.processed = None;
            app.stats = None;
            app.refresh_default_out_path();
            app.rebuild_preview();
            app.status(msg);
        }
        Err(e) => {
            loge!("Load: Error {}: {}", path.display(), e);
            app.status(format!("Load error: {e}"));
        }
    }
}
