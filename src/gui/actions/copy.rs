// src/gui/actions/copy.rs
use eframe::egui;

use crate::{csv::to_export_string, gui::app::App};

pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    let Some(ds) = app.current() else {
        app.status("Nothing to copy");
        logd!("Copy: Clicked, but there's nothing to copy");
        return;
    };

    // Spreadsheets paste tab-separated text cleanly
    let export = &app.state.options.export;
    let sep = export.format.and_then(|f| f.delim()).unwrap_or('\t');
    let txt = to_export_string(&ds.headers, &ds.rows, export.include_headers, sep);
    logf!("Copy: rows={} headers={}", ds.row_count(), ds.header_count());

    ui_ctx.copy_text(txt);
    app.status("Copied to clipboard");
}
