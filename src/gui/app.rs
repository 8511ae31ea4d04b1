// src/gui/app.rs
use std::{
    error::Error,
    path::Path,
    sync::{mpsc, Arc, Mutex},
};

use eframe::egui;

use crate::{
    config::{consts::PREVIEW_ROWS, state::AppState},
    error::RunError,
    extract::{AttributeKind, Extractor},
    runner::ExtractStats,
    table::DataSet,
};

use super::{actions, components};

/// What a background extraction sends back to the UI thread.
pub type ExtractOutcome = Result<(DataSet, ExtractStats), RunError>;

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Frame Tagger",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default())))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,
    pub extractor: Extractor,

    // input as read from disk
    pub source: Option<DataSet>,
    // input + extracted columns, after EXTRACT
    pub processed: Option<DataSet>,
    pub stats: Option<ExtractStats>,

    // what the table draws: first PREVIEW_ROWS rows, maybe projected
    pub preview: Option<DataSet>,

    // status line (progress writes here)
    pub status: Arc<Mutex<String>>,

    // background extraction in flight
    pub running: bool,
    pub pending: Option<mpsc::Receiver<ExtractOutcome>>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let extractor = Extractor::default();
        logf!("Init: rules v{}", extractor.rules_version());
        Self {
            state,
            extractor,
            source: None,
            processed: None,
            stats: None,
            preview: None,
            status: Arc::new(Mutex::new(s!("Idle"))),
            running: false,
            pending: None,
        }
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    #[inline]
    pub fn input_path(&self) -> Option<&Path> {
        self.state.options.extract.input.as_deref()
    }

    /// Processed data if there is any, else the raw input.
    #[inline]
    pub fn current(&self) -> Option<&DataSet> {
        self.processed.as_ref().or(self.source.as_ref())
    }

    /// Push a typed output path into the export options.
    pub fn sync_out_path(&mut self) {
        if self.state.gui.out_path_dirty {
            self.state.options.export.set_path(&self.state.gui.out_path_text);
            self.state.gui.out_path_dirty = false;
            logf!("UI: Out path set → {:?}", self.state.options.export.explicit_out_path());
        }
    }

    /// Show the default output path while the user hasn't typed one.
    pub fn refresh_default_out_path(&mut self) {
        if self.state.gui.out_path_dirty || self.state.options.export.explicit_out_path().is_some() {
            return;
        }
        self.state.gui.out_path_text = match self.input_path() {
            Some(input) => self.state.options.export.out_path(input).to_string_lossy().into_owned(),
            None => s!(),
        };
    }

    /// Rebuild the preview table from the current dataset.
    /// Compact mode keeps the source column plus the extracted columns.
    pub fn rebuild_preview(&mut self) {
        let Some(ds) = self.processed.as_ref().or(self.source.as_ref()) else {
            self.preview = None;
            return;
        };
        let head = DataSet::new(
            ds.headers.clone(),
            ds.rows.iter().take(PREVIEW_ROWS).cloned().collect(),
        );

        if !(self.state.gui.compact_preview && self.processed.is_some()) {
            self.preview = Some(head);
            return;
        }

        let mut cols: Vec<usize> = Vec::new();
        if let Some(c) = head.column_index(&self.state.options.extract.source_column) {
            cols.push(c);
        }
        for kind in AttributeKind::ALL {
            if let Some(c) = head.column_index(kind.column_name()) {
                if !cols.contains(&c) {
                    cols.push(c);
                }
            }
        }
        self.preview = Some(if cols.is_empty() { head } else { head.project(&cols) });
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.running {
            actions::poll_extract(self);
            // keep painting progress while workers run
            ctx.request_repaint_after(std::time::Duration::from_millis(50));
        }

        egui::SidePanel::left("attributes")
            .resizable(false)
            .show(ctx, |ui| {
                components::attribute_panel::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::input_bar::draw(ui, self);

            ui.separator();

            components::action_buttons::draw(ui, self);

            ui.separator();

            components::data_table::draw(ui, self);
        });
    }
}
