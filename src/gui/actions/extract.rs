// src/gui/actions/extract.rs
use std::sync::mpsc::{self, TryRecvError};
use std::thread;

use crate::{error::RunError, gui::app::App, gui::progress::GuiProgress, runner};

/// Start classification on a background thread; `poll_extract` picks up the result.
pub fn extract(app: &mut App) {
    if app.running {
        return;
    }
    let Some(source) = app.source.clone() else {
        app.status("Load an input file first");
        return;
    };
    if app.state.options.extract.attributes.is_empty() {
        app.status(RunError::NothingRequested.to_string());
        return;
    }

    let opts = app.state.options.extract.clone();
    let extractor = app.extractor.clone();
    let status = app.status.clone();
    logf!("Extract: Begin rows={} column={:?} attrs={:?}", source.row_count(), opts.source_column, opts.attributes);

    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let mut prog = GuiProgress::new(status);
        // → This is where the classification happens ←
        let outcome = runner::process_dataset(source, &opts, &extractor, Some(&mut prog));
        let _ = tx.send(outcome);
    });

    app.pending = Some(rx);
    app.running = true;
}

/// Collect a finished extraction, if any. Called every frame while running.
pub fn poll_extract(app: &mut App) {
    let Some(rx) = app.pending.as_ref() else {
        app.running = false;
        return;
    };

    let outcome = match rx.try_recv() {
        Ok(outcome) => outcome,
        Err(TryRecvError::Empty) => return,
        Err(TryRecvError::Disconnected) => Err(RunError::Worker(s!("extraction thread stopped"))),
    };
    app.pending = None;
    app.running = false;

    match outcome {
        Ok((ds, stats)) => {
            let found: Vec<String> = stats
                .found
                .iter()
                .map(|(k, n)| format!("{} {}", k.column_name(), n))
                .collect();
            let msg = format!("Extracted {} rows ({})", stats.rows, found.join(", "));
            logf!("Extract: OK {}", msg);

            app.processed = Some(ds);
            app.stats = Some(stats);
            app.rebuild_preview();
            app.status(msg);
        }
        Err(e) => {
            loge!("Extract: Error: {}", e);
            app.status(format!("Error: {e}"));
        }
    }
}
