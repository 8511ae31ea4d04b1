// src/gui/actions/export.rs
use crate::{file, gui::app::App};

pub fn export(app: &mut App) {
    // normalize out_path first (mutates app) before any &app borrows
    app.sync_out_path();

    let status_msg = match (app.processed.as_ref(), app.input_path()) {
        (Some(ds), Some(input)) => {
            logf!("Export: Begin rows={} headers={}", ds.row_count(), ds.header_count());
            match file::write_export_single(&app.state.options.export, input, ds) {
                Ok(path) => {
                    logf!("Export: OK → {}", path.display());
                    format!("Exported {}", path.display())
                }
                Err(e) => {
                    loge!("Export: Error: {}", e);
                    format!("Export error: {e}")
                }
            }
        }
        _ => {
            logd!("Export: Clicked, but nothing was extracted yet");
            s!("Nothing to export (run EXTRACT first)")
        }
    };

    app.status(status_msg);
}
